// Adapters layer: concrete dataset sources.

pub mod csv_source;

pub use csv_source::{CsvBytesSource, CsvFileSource};
