pub mod app_command;
pub mod cli;

pub use app_command::{split_args, AppCommand, FormFields, HELP_TEXT};
pub use cli::Cli;
