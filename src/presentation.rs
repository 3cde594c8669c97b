// src/presentation.rs
use std::io::Write;

use sample_tally_domain::CounterRecord;
use sample_tally_shared_kernel::PresentationResult;

use crate::options::OutputFormat;

pub fn write_record<W: Write>(out: &mut W, record: &CounterRecord, format: OutputFormat) -> PresentationResult<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{record}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_items<W: Write>(out: &mut W, items: &[String], format: OutputFormat) -> PresentationResult<()> {
    match format {
        OutputFormat::Plain => {
            for item in items {
                writeln!(out, "{item}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
