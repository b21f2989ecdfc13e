//! Application state and entry glue.
//!
//! `AppState` owns the search query; the filtered list is always derived
//! from it on demand. The event loop lives in `update` (re-exported as `run`).
//!
pub mod keymap;
pub mod theme;
pub mod update;

pub use keymap::Keymap;
pub use theme::Theme;

use crate::search;
use crate::users::{self, User};

pub struct AppState {
    query: String,
    pub theme: Theme,
    pub keymap: Keymap,
    /// Problems found while loading config files, shown in the status bar.
    warnings: Vec<String>,
}

impl AppState {
    /// Start with an empty query and the default theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self::with_config(theme, Keymap::default(), Vec::new())
    }

    pub fn with_config(theme: Theme, keymap: Keymap, warnings: Vec<String>) -> Self {
        Self {
            query: String::new(),
            theme,
            keymap,
            warnings,
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query verbatim. Every string is accepted.
    pub fn set_query(&mut self, value: impl Into<String>) {
        self.query = value.into();
        tracing::debug!(
            query = %self.query,
            matches = self.filtered().len(),
            "query changed"
        );
    }

    /// Users matching the current query, recomputed on every call.
    pub fn filtered(&self) -> Vec<&'static User> {
        search::filter_users(users::directory(), &self.query)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
