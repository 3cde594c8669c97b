// src/cli.rs
mod args;
mod value_enum;

pub use args::{Args, CliCommand};
pub use value_enum::{CliCaseMapping, CliOutputFormat, CliOverflowPolicy};
