//! Line-oriented number input and CSV/JSON report output.

pub mod number_reader;
pub mod report_writer;
