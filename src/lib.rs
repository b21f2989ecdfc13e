//! Library crate for user-list-tui.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Error and result types (`error`)
//! - Name search over the user directory (`search`)
//! - The fixed user directory (`users`)
//! - View description and rendering (`ui`)
//!
//! It is used by the `user-list-tui` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod error;
pub mod search;
pub mod ui;
pub mod users;

/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
