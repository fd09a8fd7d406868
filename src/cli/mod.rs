//! CLI layer - Command-line interface

pub mod commands;
pub mod input;
pub mod output;

pub use commands::{AddArgs, Cli, Commands, UpdateArgs};
pub use output::{format_staff_detail, format_staff_table};
