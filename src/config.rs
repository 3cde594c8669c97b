// src/config.rs
use derive_builder::Builder;
use sample_tally_domain::{CaseMapping, OverflowPolicy};
use sample_tally_shared_kernel::{PresentationError, TallyCount};

use crate::cli::{Args, CliCommand};
use crate::options::OutputFormat;

/// The operation a single invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Count {
        name: String,
        times: u64,
        start: TallyCount,
        overflow: OverflowPolicy,
    },
    Upper {
        /// `None` means read items from stdin.
        items: Option<Vec<String>>,
        mapping: CaseMapping,
    },
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub command: Command,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub verbosity: u8,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let command = match args.command {
            CliCommand::Count { name, times, start, overflow } => Command::Count {
                name,
                times,
                start: TallyCount::from(start),
                overflow: overflow.into(),
            },
            CliCommand::Upper { items, mapping } => Command::Upper {
                items: (!items.is_empty()).then_some(items),
                mapping: mapping.into(),
            },
        };

        ConfigBuilder::default()
            .command(command)
            .format(OutputFormat::from(args.format))
            .verbosity(args.verbose)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
