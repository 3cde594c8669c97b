pub mod entities;

pub use entities::CounterRecord;
