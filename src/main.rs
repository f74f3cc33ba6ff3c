use clap::Parser;
use luhn_engine::application::report::{BatchEvaluator, Mode};
use luhn_engine::interfaces::csv::number_reader::NumberReader;
use luhn_engine::interfaces::csv::report_writer::{OutputFormat, ReportWriter};
use luhn_engine::logger::init_cli_logger;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File with one number per line, or `-` to read from stdin
    input: PathBuf,

    /// Validate complete numbers, or compute the missing check digit
    #[arg(long, value_enum, default_value_t = Mode::Validate)]
    mode: Mode,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let source: Box<dyn Read> = if cli.input == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&cli.input).into_diagnostic()?)
    };

    let reader = NumberReader::new(source);
    let mut evaluator = BatchEvaluator::new(cli.mode);
    for record_result in reader.numbers() {
        match record_result {
            Ok(record) => {
                if let Err(e) = evaluator.process_record(&record) {
                    eprintln!("Error evaluating number on line {}: {}", record.line, e);
                }
            }
            Err(e) if e.is_io_error() => return Err(e).into_diagnostic(),
            Err(e) => match e.line() {
                Some(line) => eprintln!("Error reading number on line {}: {}", line, e),
                None => eprintln!("Error reading number: {}", e),
            },
        }
    }

    let (reports, summary) = evaluator.into_results();
    info!(
        evaluated = summary.evaluated,
        valid = summary.valid,
        rejected = summary.rejected,
        "batch complete"
    );

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), cli.format);
    writer.write_reports(&reports).into_diagnostic()?;

    Ok(())
}
