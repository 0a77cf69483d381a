use anyhow::{Context, Result};
use clap::Parser;
use regex_splitter::{LocatorOptions, SplitConfig, SplitOutcome, run};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "splitter",
    about = "Split a file by regular expression",
    version,
    long_about = "Split a file into parts that start where PATTERN matches. Every part is written verbatim into a new directory created under the output directory."
)]
struct Cli {
    /// Regular expression marking the start of each part
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Input file to be split
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    input: PathBuf,

    /// Output directory
    #[arg(short = 'o', long = "out", value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Match letters regardless of case
    #[arg(long)]
    ignore_case: bool,

    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<&Cli> for SplitConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            pattern: cli.pattern.clone(),
            input: cli.input.clone(),
            output_dir: cli.output.clone(),
            locator: LocatorOptions {
                case_insensitive: cli.ignore_case,
                ..LocatorOptions::default()
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SplitConfig::from(&cli);
    let outcome = run(&config, |part| println!(">>> {part}"))
        .with_context(|| format!("failed to split {}", config.input.display()))?;

    match outcome {
        SplitOutcome::Written(report) => {
            println!("All parts written into:\n{}", report.output_dir.display());
        }
        SplitOutcome::NoMatches => eprintln!("No matches found!"),
    }

    Ok(())
}
