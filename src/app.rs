// src/app.rs
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use sample_tally_domain::{process_items_with, CounterRecord};

use crate::config::{Command, Config};
use crate::presentation;

/// Executes the configured command, reading from `input` only when the
/// transform has no inline items.
///
/// # Errors
///
/// Returns `Err` when a counter refuses to overflow, stdin cannot be read, or
/// output cannot be written.
pub fn run<R, W>(config: &Config, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    match &config.command {
        Command::Count { name, times, start, overflow } => {
            let mut record = CounterRecord::starting_at(name.as_str(), *start, *overflow);
            info!("counter '{name}': applying {times} increments ({overflow:?})");
            // Fully qualified: `anyhow::Context` also provides `with_context`.
            sample_tally_shared_kernel::ErrorContext::with_context(record.increment_by(*times), || {
                format!("failed to increment counter '{name}'")
            })?;
            presentation::write_record(&mut output, &record, config.format)
                .context("failed to write counter")?;
        }
        Command::Upper { items, mapping } => {
            let items = match items {
                Some(items) => items.clone(),
                None => read_lines(input)?,
            };
            debug!("transforming {} items", items.len());
            let upper = process_items_with(&items, *mapping);
            presentation::write_items(&mut output, &upper, config.format)
                .context("failed to write items")?;
        }
    }
    output.flush().context("failed to flush output")?;
    Ok(())
}

fn read_lines<R: BufRead>(input: R) -> Result<Vec<String>> {
    input
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .context("failed to read items from stdin")
}

#[cfg(test)]
mod tests {
    use sample_tally_domain::{CaseMapping, OverflowPolicy};
    use sample_tally_shared_kernel::{DomainError, TallyCount, TallyError};

    use super::*;
    use crate::config::ConfigBuilder;
    use crate::options::OutputFormat;

    fn run_to_string(config: &Config, stdin: &str) -> Result<String> {
        let mut out = Vec::new();
        run(config, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8"))
    }

    fn count_config(times: u64, start: TallyCount, overflow: OverflowPolicy) -> Config {
        ConfigBuilder::default()
            .command(Command::Count { name: "widget".to_string(), times, start, overflow })
            .build()
            .expect("config builds")
    }

    #[test]
    fn counts_widget_twice() {
        let config = count_config(2, TallyCount::ZERO, OverflowPolicy::Wrap);
        assert_eq!(run_to_string(&config, "").unwrap(), "widget: 2\n");
    }

    #[test]
    fn fail_policy_surfaces_domain_error() {
        let config = count_config(1, TallyCount::MAX, OverflowPolicy::Fail);
        let err = run_to_string(&config, "").unwrap_err();
        assert!(err.to_string().contains("failed to increment counter 'widget'"));
        match err.downcast_ref::<TallyError>() {
            Some(TallyError::Context { source, .. }) => {
                assert!(matches!(**source, TallyError::Domain(DomainError::CountOverflow { .. })));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn upper_reads_stdin_when_no_items() {
        let config = ConfigBuilder::default()
            .command(Command::Upper { items: None, mapping: CaseMapping::Unicode })
            .build()
            .expect("config builds");
        assert_eq!(run_to_string(&config, "a\nBee\nsea\n").unwrap(), "A\nBEE\nSEA\n");
    }

    #[test]
    fn upper_inline_items_ignore_stdin() {
        let config = ConfigBuilder::default()
            .command(Command::Upper { items: Some(vec!["x".to_string()]), mapping: CaseMapping::Ascii })
            .format(OutputFormat::Json)
            .build()
            .expect("config builds");
        assert_eq!(run_to_string(&config, "ignored\n").unwrap(), "[\"X\"]\n");
    }
}
