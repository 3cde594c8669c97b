pub mod counter_record;

pub use counter_record::CounterRecord;
