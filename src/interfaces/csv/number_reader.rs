use crate::error::{LuhnError, Result};
use std::io::Read;

/// A single number decoded from the input, with the line it came from.
///
/// `number` is `None` when the record had an empty first field.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberRecord {
    pub line: u64,
    pub number: Option<String>,
}

/// Reads numbers from a line-oriented source, one number per record.
///
/// Only the first comma-separated field of each record is used, so plain
/// one-per-line files and CSV exports with trailing columns both work.
/// Blank records and lines starting with `#` are skipped.
pub struct NumberReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> NumberReader<R> {
    /// Creates a new `NumberReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and decodes numbers.
    pub fn numbers(self) -> impl Iterator<Item = Result<NumberRecord>> {
        self.reader.into_records().filter_map(|result| match result {
            Ok(record) if record.iter().all(str::is_empty) => None,
            Ok(record) => {
                let line = record.position().map_or(0, |pos| pos.line());
                let number = record
                    .get(0)
                    .filter(|field| !field.is_empty())
                    .map(str::to_string);
                Some(Ok(NumberRecord { line, number }))
            }
            Err(e) => Some(Err(LuhnError::from(e))),
        })
    }
}
