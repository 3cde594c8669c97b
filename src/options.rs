// src/options.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `name: count` for records, one line per item for transforms.
    #[default]
    Plain,
    Json,
}
