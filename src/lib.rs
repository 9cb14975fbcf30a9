//! tui-2048 (workspace facade crate).
//!
//! Re-exports the rules engine as `tui_2048::{core, types}` and hosts the
//! headless runner pieces: argument parsing and the autoplay driver.

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub mod autoplay;
pub mod config;
