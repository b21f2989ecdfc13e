//! The fixed user directory shown by the list view.

use std::fmt::{Display, Formatter};

/// Role tag attached to every user.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Viewer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Viewer => "viewer",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub role: Role,
}

static USERS: [User; 2] = [
    User { id: 1, name: "Ada", role: Role::Admin },
    User { id: 2, name: "Lin", role: Role::Viewer },
];

/// All users, in display order. Never changes at runtime.
pub fn directory() -> &'static [User] {
    &USERS
}
