// src/cli/value_enum.rs
use clap::ValueEnum;
use sample_tally_domain::{CaseMapping, OverflowPolicy};

use crate::options::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Plain,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOverflowPolicy {
    Wrap,
    Saturate,
    Fail,
}

impl From<CliOverflowPolicy> for OverflowPolicy {
    fn from(value: CliOverflowPolicy) -> Self {
        match value {
            CliOverflowPolicy::Wrap => OverflowPolicy::Wrap,
            CliOverflowPolicy::Saturate => OverflowPolicy::Saturate,
            CliOverflowPolicy::Fail => OverflowPolicy::Fail,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCaseMapping {
    Unicode,
    Ascii,
}

impl From<CliCaseMapping> for CaseMapping {
    fn from(value: CliCaseMapping) -> Self {
        match value {
            CliCaseMapping::Unicode => CaseMapping::Unicode,
            CliCaseMapping::Ascii => CaseMapping::Ascii,
        }
    }
}
