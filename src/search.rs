use crate::users::User;

/// Case-insensitive substring match on the display name. An empty query matches everyone.
pub fn matches(user: &User, query: &str) -> bool {
    user.name.to_lowercase().contains(&query.to_lowercase())
}

/// Users whose name contains `query`, in their original order.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let q = query.to_lowercase();
    if q.is_empty() {
        return users.iter().collect();
    }
    users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&q))
        .collect()
}
