// src/cli/args.rs
use clap::{ArgAction, Parser, Subcommand};

use super::value_enum::{CliCaseMapping, CliOutputFormat, CliOverflowPolicy};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "sample_tally",
    version = crate::VERSION,
    about = "Named counters and batch upper-casing"
)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub format: CliOutputFormat,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Create a named counter, increment it and print it
    Count {
        /// Counter name (stored verbatim, may be empty)
        name: String,

        /// Number of increments to apply
        #[arg(long, default_value_t = 0)]
        times: u64,

        /// Initial count
        #[arg(long, default_value_t = 0)]
        start: u64,

        /// Behaviour at the numeric limit
        #[arg(long, value_enum, default_value = "wrap")]
        overflow: CliOverflowPolicy,
    },

    /// Upper-case each item; reads lines from stdin when no items are given
    Upper {
        /// Items to transform
        items: Vec<String>,

        /// Characters eligible for upper-casing
        #[arg(long, value_enum, default_value = "unicode")]
        mapping: CliCaseMapping,
    },
}
