// Unit tests for user-list-tui
// These exercise the public API: directory, search, state and view tree.

#[cfg(test)]
mod users_tests {
    use user_list_tui::users::{Role, directory};

    #[test]
    fn directory_is_the_two_fixed_records() {
        let users = directory();
        assert_eq!(users.len(), 2);
        assert_eq!((users[0].id, users[0].name, users[0].role), (1, "Ada", Role::Admin));
        assert_eq!((users[1].id, users[1].name, users[1].role), (2, "Lin", Role::Viewer));
    }

    #[test]
    fn role_displays_as_tag() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Viewer.as_str(), "viewer");
    }
}

#[cfg(test)]
mod search_tests {
    use user_list_tui::search::{filter_users, matches};
    use user_list_tui::users::{Role, User, directory};

    fn create_test_user(id: u32, name: &'static str) -> User {
        User { id, name, role: if id % 2 == 0 { Role::Viewer } else { Role::Admin } }
    }

    #[test]
    fn filter_agrees_with_case_folded_contains() {
        let users = vec![
            create_test_user(1, "Ada"),
            create_test_user(2, "Lin"),
            create_test_user(3, "Adalind"),
            create_test_user(4, "Ölaf"),
            create_test_user(5, "lina"),
        ];
        for q in ["", "a", "A", "ad", "LIN", "in", "da", "ö", "ÖL", "zzz", " ", "Adalind", "x"] {
            let expected: Vec<u32> = users
                .iter()
                .filter(|u| u.name.to_lowercase().contains(&q.to_lowercase()))
                .map(|u| u.id)
                .collect();
            let got: Vec<u32> = filter_users(&users, q).iter().map(|u| u.id).collect();
            assert_eq!(got, expected, "query {q:?}");
            for u in &users {
                assert_eq!(matches(u, q), expected.contains(&u.id), "query {q:?} user {}", u.name);
            }
        }
    }

    #[test]
    fn full_name_in_other_case_matches_exactly_one() {
        let found = filter_users(directory(), "ADA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn shared_substring_returns_all_in_original_order() {
        let users = vec![
            create_test_user(10, "Lina"),
            create_test_user(11, "Ada"),
            create_test_user(12, "Linus"),
        ];
        let found: Vec<&str> = filter_users(&users, "lin").iter().map(|u| u.name).collect();
        assert_eq!(found, vec!["Lina", "Linus"]);
    }
}

#[cfg(test)]
mod state_tests {
    use user_list_tui::app::{AppState, Theme};

    fn names(app: &AppState) -> Vec<&'static str> {
        app.filtered().iter().map(|u| u.name).collect()
    }

    #[test]
    fn starts_with_empty_query_and_everyone_listed() {
        let app = AppState::new();
        assert_eq!(app.query(), "");
        assert_eq!(names(&app), vec!["Ada", "Lin"]);
        assert_eq!(app.theme, Theme::mocha());
    }

    #[test]
    fn query_is_stored_verbatim() {
        let mut app = AppState::new();
        app.set_query("  Ada ");
        assert_eq!(app.query(), "  Ada ");
        assert!(app.filtered().is_empty());
    }

    #[test]
    fn latest_query_alone_decides_the_view() {
        let mut app = AppState::new();
        app.set_query("zzz");
        assert!(names(&app).is_empty());
        app.set_query("lin");
        assert_eq!(names(&app), vec!["Lin"]);
        app.set_query("a");
        assert_eq!(names(&app), vec!["Ada"]);
        app.set_query("");
        assert_eq!(names(&app), vec!["Ada", "Lin"]);
    }
}

#[cfg(test)]
mod view_tests {
    use user_list_tui::ui::view::{PANEL_CLASS, build_view};
    use user_list_tui::users::{Role, directory};

    #[test]
    fn view_tree_carries_heading_input_and_entries() {
        let tree = build_view(directory(), "");
        assert_eq!(tree.class, PANEL_CLASS);
        assert_eq!(tree.heading, "Users");
        assert_eq!(tree.input.value, "");
        assert_eq!(tree.input.placeholder, "Search by name");
        let labels: Vec<String> = tree.entries.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Ada (admin)", "Lin (viewer)"]);
        assert_eq!(tree.entries[0].key, 1);
        assert_eq!(tree.entries[1].role, Role::Viewer);
    }

    #[test]
    fn view_tree_reflects_query() {
        let tree = build_view(directory(), "LI");
        assert_eq!(tree.input.value, "LI");
        assert_eq!(tree.entries.len(), 1);
        assert_eq!(tree.entries[0].name, "Lin");

        assert!(build_view(directory(), "xyz").entries.is_empty());
    }

    #[test]
    fn view_is_pure() {
        assert_eq!(build_view(directory(), "a"), build_view(directory(), "a"));
    }
}
