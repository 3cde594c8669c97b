// crates/domain/src/transform.rs
//! Batch upper-casing of string sequences.

use log::trace;

use crate::options::CaseMapping;

/// Upper-cases every item with locale-invariant Unicode rules.
///
/// The output has the same length and order as the input. Individual strings
/// may grow, e.g. `"ß"` becomes `"SS"`.
pub fn process_items<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    process_items_with(items, CaseMapping::Unicode)
}

/// Same as [`process_items`] with an explicit [`CaseMapping`].
pub fn process_items_with<I, S>(items: I, mapping: CaseMapping) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let upper: fn(&str) -> String = match mapping {
        CaseMapping::Unicode => str::to_uppercase,
        CaseMapping::Ascii => str::to_ascii_uppercase,
    };
    let results: Vec<String> = items.into_iter().map(|item| upper(item.as_ref())).collect();
    trace!("upper-cased {} items ({mapping:?})", results.len());
    results
}
