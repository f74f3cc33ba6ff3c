use crate::application::report::Report;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV with a header row
    #[default]
    Csv,
    /// A single JSON array
    Json,
}

/// Writes evaluation reports to any `Write` sink (e.g., Stdout, File).
pub struct ReportWriter<W: Write> {
    sink: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W, format: OutputFormat) -> Self {
        Self { sink, format }
    }

    pub fn write_reports(&mut self, reports: &[Report]) -> Result<()> {
        match self.format {
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.sink);
                for report in reports {
                    writer.serialize(report)?;
                }
                writer.flush()?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.sink, reports)?;
                writeln!(self.sink)?;
                self.sink.flush()?;
            }
        }
        Ok(())
    }
}
