// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use jimakufmt::options::{FormatOptions, SynthesizeOptions};
use jimakufmt::{format_srt, synthesize};

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reformat an existing SRT file, rewrapping text while preserving timing
    Reformat(ReformatArgs),

    /// Synthesize an SRT file from plain Japanese text
    Synthesize(SynthesizeArgs),
}

#[derive(Parser, Debug)]
struct ReformatArgs {
    /// Input SRT file, or '-' for stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file; writes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum line width in width units (full-width character = 1.0)
    #[arg(long, default_value_t = 20.0)]
    max_line_width: f64,

    /// Override set of characters forbidden at line start
    #[arg(long)]
    forbidden_leading: Option<String>,

    /// Insert a pause marker after sentence-ending punctuation
    #[arg(long)]
    pause: bool,

    /// Pause length hint for downstream speech synthesis, in ms
    #[arg(long, default_value_t = 120)]
    pause_duration_ms: u64,
}

#[derive(Parser, Debug)]
struct SynthesizeArgs {
    /// Input text file, or '-' for stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file; writes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Display duration per character, in ms
    #[arg(long, default_value_t = 150)]
    ms_per_char: u64,

    /// Gap between consecutive subtitles, in ms
    #[arg(long, default_value_t = 300)]
    gap_ms: u64,

    /// Maximum line width in width units
    #[arg(long, default_value_t = 20.0)]
    max_line_width: f64,
}

/// jimakufmt - Japanese subtitle (SRT) formatting tool
///
/// Rewraps SRT subtitles with character-width-aware line breaking and
/// kinsoku shori handling, or synthesizes an SRT from plain text.
#[derive(Parser, Debug)]
#[command(name = "jimakufmt")]
#[command(version = "1.0.0")]
#[command(about = "Japanese subtitle (SRT) formatting tool")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    writeln!(stderr, "\x1B[1;31m{} ERROR {}\x1B[0m", now, record.args())
                }
                Level::Warn => {
                    writeln!(stderr, "\x1B[1;33m{} WARN  {}\x1B[0m", now, record.args())
                }
                Level::Info => writeln!(stderr, "{} INFO  {}", now, record.args()),
                Level::Debug => writeln!(stderr, "{} DEBUG {}", now, record.args()),
                Level::Trace => writeln!(stderr, "{} TRACE {}", now, record.args()),
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    let level = options
        .log_level
        .map(LevelFilter::from)
        .unwrap_or(LevelFilter::Warn);
    CustomLogger::init(level).context("Failed to initialize logger")?;

    match options.command {
        Commands::Reformat(args) => run_reformat(args),
        Commands::Synthesize(args) => run_synthesize(args),
    }
}

fn run_reformat(args: ReformatArgs) -> Result<()> {
    let format_options = FormatOptions {
        max_line_width: args.max_line_width,
        forbidden_leading: args.forbidden_leading,
        insert_pause_after_punctuation: args.pause,
        pause_duration_ms: args.pause_duration_ms,
    };
    format_options.validate()?;

    let input = read_input(&args.input)?;
    let output = format_srt(&input, &format_options);
    write_output(args.output.as_deref(), &output)
}

fn run_synthesize(args: SynthesizeArgs) -> Result<()> {
    let synthesize_options = SynthesizeOptions {
        ms_per_char: args.ms_per_char,
        gap_ms: args.gap_ms,
        max_line_width: args.max_line_width,
    };
    synthesize_options.validate()?;

    let input = read_input(&args.input)?;
    let output = synthesize(&input, &synthesize_options);
    write_output(args.output.as_deref(), &output)
}

/// Read the whole input, treating '-' as stdin
fn read_input(path: &std::path::Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
    }
}

/// Write the result to a file, or stdout when no path is given
fn write_output(path: Option<&std::path::Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
