pub mod args;
pub mod processor;
pub mod runner;
pub mod summary;

pub use args::{get_log_level_from_verbose, parse_cli, Cli, Commands, LocalArgs, NewArgs};
pub use runner::{run, Runner};
