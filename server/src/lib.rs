//! A small site that hosts a resume.
//!
//! The page is a single [`components::Resume`]: a rounded, bordered box with the
//! resume embedded from its own host in an `iframe`, sized to a Letter page.

pub use color_eyre::Result;

pub mod commands;
pub mod components;
pub mod http_server;
pub mod state;

pub use state::{AppConfig, AppState};
