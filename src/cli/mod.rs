//! Command menu and outcome rendering for the `agraph` binary.

pub mod commands;
pub mod menu;

pub use commands::OutputFormat;
pub use menu::{Menu, MenuChoice};
