//! Persistence layer (date-partitioned CSV logs).

pub mod csv_log;

pub use csv_log::CsvLogStore;
