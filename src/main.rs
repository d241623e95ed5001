// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use seasons_sync::app_config::{self, Config, NumberingMode};
use seasons_sync::app_controller::Controller;

/// CLI Wrapper for NumberingMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliNumbering {
    PerSeason,
    Global,
}

impl From<CliNumbering> for NumberingMode {
    fn from(cli_numbering: CliNumbering) -> Self {
        match cli_numbering {
            CliNumbering::PerSeason => NumberingMode::PerSeason,
            CliNumbering::Global => NumberingMode::Global,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for seasons-sync
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// seasons-sync - episode guide workbook to JSON
///
/// Reads the SpreadsheetML export of the episode guide and writes the
/// seasons JSON document used by the front-end.
#[derive(Parser, Debug)]
#[command(name = "seasons-sync")]
#[command(version)]
#[command(about = "Convert the episode guide workbook into seasons JSON")]
#[command(long_about = "seasons-sync reads a SpreadsheetML (Excel 2003 XML) workbook with one
worksheet per season and writes the seasons JSON document.

EXAMPLES:
    seasons-sync                                   # Use conf.json or built-in defaults
    seasons-sync -i sopranos.xml -o seasons.json   # Explicit input and output
    seasons-sync --numbering global                # Add running episode numbers
    seasons-sync --no-translate                    # Keep descriptions untranslated
    seasons-sync completions bash > seasons-sync.bash

CONFIGURATION:
    Settings are read from conf.json by default. A missing file means built-in
    defaults. Command line options override values from the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Source workbook (overrides config)
    #[arg(short, long, value_name = "XML_FILE")]
    input: Option<PathBuf>,

    /// Output JSON file (overrides config)
    #[arg(short, long, value_name = "JSON_FILE")]
    output: Option<PathBuf>,

    /// Episode numbering scheme
    #[arg(short, long, value_enum)]
    numbering: Option<CliNumbering>,

    /// Do not gloss descriptions into English
    #[arg(long)]
    no_translate: bool,

    /// Add IMDb links and ratings to episodes
    #[arg(long)]
    imdb: bool,

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

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything here; the effective level is set once config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "seasons-sync", &mut std::io::stdout());
        return Ok(());
    }

    run_sync(cli)
}

fn run_sync(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load(&options.config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", options.config_path))?;

    // Override config with CLI options if provided
    if let Some(input) = options.input {
        config.input_path = input;
    }
    if let Some(output) = options.output {
        config.output_path = output;
    }
    if let Some(numbering) = options.numbering {
        config.numbering = numbering.into();
    }
    if options.no_translate {
        config.translate = false;
    }
    if options.imdb {
        config.imdb.enabled = true;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let summary = controller.run().with_context(|| {
        format!(
            "Sync failed for {:?} -> {:?}",
            controller.config().input_path,
            controller.config().output_path
        )
    })?;

    log::debug!("Wrote {:?}", summary.output_path);
    Ok(())
}
