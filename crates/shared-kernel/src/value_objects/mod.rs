// crates/shared-kernel/src/value_objects/mod.rs
pub mod count;

pub use count::TallyCount;
