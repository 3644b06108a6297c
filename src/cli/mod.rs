//! CLI module - argument parsing and per-command entry points

mod args;
pub mod convert;
pub mod number;
pub mod train;

pub use args::{Cli, Commands, HyperparameterArgs, RunOptions};
pub use convert::run_convert;
pub use number::run_number_lines;
pub use train::run_train;
