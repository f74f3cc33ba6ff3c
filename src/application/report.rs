use crate::domain::digits::validate_digit_string;
use crate::domain::luhn::{check_digit_str, checksum_str};
use crate::error::Result;
use crate::interfaces::csv::number_reader::NumberRecord;
use serde::Serialize;
use tracing::debug;

/// What to compute for each number in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Treat each number as complete and check its Luhn checksum.
    #[default]
    Validate,
    /// Treat each number as missing its check digit and compute it.
    CheckDigit,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ValidityReport {
    pub number: String,
    pub checksum: u8,
    pub valid: bool,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CheckDigitReport {
    pub number: String,
    pub check_digit: u8,
    pub completed: String,
}

/// One output row. Every row of a batch has the same variant.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum Report {
    Validity(ValidityReport),
    CheckDigit(CheckDigitReport),
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct Summary {
    pub evaluated: usize,
    pub valid: usize,
    pub rejected: usize,
}

/// Evaluates a single decoded number.
pub fn evaluate(record: &NumberRecord, mode: Mode) -> Result<Report> {
    let number = validate_digit_string(record.number.as_deref())?;
    let report = match mode {
        Mode::Validate => {
            let checksum = checksum_str(number)?;
            Report::Validity(ValidityReport {
                number: number.to_string(),
                checksum,
                valid: checksum == 0,
            })
        }
        Mode::CheckDigit => {
            let check_digit = check_digit_str(number)?;
            Report::CheckDigit(CheckDigitReport {
                number: number.to_string(),
                check_digit,
                completed: format!("{number}{check_digit}"),
            })
        }
    };
    Ok(report)
}

/// Evaluates every record, counting rejected numbers instead of failing.
pub fn evaluate_all<'a, I>(records: I, mode: Mode) -> (Vec<Report>, Summary)
where
    I: IntoIterator<Item = &'a NumberRecord>,
{
    let mut evaluator = BatchEvaluator::new(mode);
    for record in records {
        let _ = evaluator.process_record(record);
    }
    evaluator.into_results()
}

/// Accumulates reports for a stream of numbers.
///
/// Rejected numbers are counted in the summary and their error is handed back
/// to the caller, which decides how to surface it.
pub struct BatchEvaluator {
    mode: Mode,
    reports: Vec<Report>,
    summary: Summary,
}

impl BatchEvaluator {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            reports: Vec::new(),
            summary: Summary::default(),
        }
    }

    pub fn process_record(&mut self, record: &NumberRecord) -> Result<()> {
        match evaluate(record, self.mode) {
            Ok(report) => {
                debug!(line = record.line, ?report, "number evaluated");
                self.summary.evaluated += 1;
                if let Report::Validity(ValidityReport { valid: true, .. }) = report {
                    self.summary.valid += 1;
                }
                self.reports.push(report);
                Ok(())
            }
            Err(e) => {
                debug!(line = record.line, error = %e, "number rejected");
                self.summary.rejected += 1;
                Err(e)
            }
        }
    }

    /// Consumes the evaluator and returns the reports in input order.
    pub fn into_results(self) -> (Vec<Report>, Summary) {
        (self.reports, self.summary)
    }
}
