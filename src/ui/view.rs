//! Pure description of what the list view shows, independent of the terminal.

use crate::search;
use crate::users::{Role, User};

pub const PANEL_CLASS: &str = "panel";
pub const HEADING: &str = "Users";
pub const PLACEHOLDER: &str = "Search by name";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub placeholder: &'static str,
}

/// One row of the list, keyed by user id and tagged with the role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub key: u32,
    pub role: Role,
    pub name: &'static str,
}

impl ListEntry {
    /// `"(<role>)"`, the part drawn after the name.
    pub fn role_tag(&self) -> String {
        format!("({})", self.role)
    }

    /// `"<name> (<role>)"`
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.role_tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewTree {
    pub class: &'static str,
    pub heading: &'static str,
    pub input: InputView,
    pub entries: Vec<ListEntry>,
}

pub fn build_view(users: &[User], query: &str) -> ViewTree {
    let entries = search::filter_users(users, query)
        .into_iter()
        .map(|u| ListEntry {
            key: u.id,
            role: u.role,
            name: u.name,
        })
        .collect();
    ViewTree {
        class: PANEL_CLASS,
        heading: HEADING,
        input: InputView {
            value: query.to_string(),
            placeholder: PLACEHOLDER,
        },
        entries,
    }
}
