//! # xlsx2csv
//!
//! A CLI tool that converts the first sheet of a spreadsheet workbook to CSV.
//!
//! ## Overview
//!
//! xlsx2csv is built on top of xlsx2csvlib. It reads the workbook, writes the
//! first sheet as UTF-8 CSV with a byte-order mark (so spreadsheet tools open
//! it with the right encoding), and prints the first rows of the result so
//! the column layout can be checked by eye.
//!
//! ## Usage
//!
//! ```bash
//! # Convert using the default file names
//! xlsx2csv
//!
//! # Convert a specific workbook
//! xlsx2csv report.xlsx report.csv
//!
//! # Show what is going on
//! RUST_LOG=debug xlsx2csv report.xlsx report.csv
//! ```
//!
//! Only the first sheet is converted; a warning is logged to stderr when the
//! workbook has more.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgMatches, Command};
use console::Style;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use xlsx2csvlib::{convert, Conversion, DEFAULT_PREVIEW_ROWS};

/// Workbook read when no input is given
const DEFAULT_INPUT: &str = "대방동수지분석수정_신영투자신탁제출용_251031.xlsx";

/// CSV written when no output is given
const DEFAULT_OUTPUT: &str = "동일수지표.csv";

const PREVIEW_HEADING: &str = "--- CSV Preview ---";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("xlsx2csv")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Convert the first sheet of a workbook to CSV and preview it")
        .arg(
            Arg::new("input")
                .help("Workbook to read (xlsx, xlsm, xlsb, xls, ods)")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::new("output")
                .help("CSV file to write (overwritten if it exists)")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT),
        )
}

/// Log to stderr so stdout only carries the conversion report
fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<Conversion> {
    let input = matches
        .get_one::<PathBuf>("input")
        .ok_or_else(|| anyhow::anyhow!("missing input path"))?;
    let output = matches
        .get_one::<PathBuf>("output")
        .ok_or_else(|| anyhow::anyhow!("missing output path"))?;

    debug!(input = %input.display(), output = %output.display(), "starting conversion");
    Ok(convert(input, output)?)
}

fn print_report(conversion: &Conversion) {
    println!(
        "Successfully converted {} to {}",
        conversion.input.display(),
        conversion.output.display()
    );
    println!();
    println!("{}", Style::new().bold().apply_to(PREVIEW_HEADING));
    println!("{}", conversion.preview(DEFAULT_PREVIEW_ROWS));
}

fn main() -> ExitCode {
    init_logging();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(conversion) => {
            print_report(&conversion);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "conversion failed");
            println!("Error converting file: {e}");
            ExitCode::FAILURE
        }
    }
}
