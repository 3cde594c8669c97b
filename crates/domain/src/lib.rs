#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;
pub mod transform;

pub use model::CounterRecord;
pub use options::{CaseMapping, OverflowPolicy};
pub use transform::{process_items, process_items_with};
