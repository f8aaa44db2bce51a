pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, FlattenArgs, LoadArgs, LookupArgs, Verbosity,
};
