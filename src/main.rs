// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};

use crate::app_config::SyncConfig;
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod diff_utils;
mod errors;
mod file_utils;
mod formats;
mod language_utils;
mod lockfile;
mod processor;
mod providers;
mod resource_map;
mod translation;

/// CLI wrapper for the log level
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "l10nsync",
    about = "Keep translated resource files in sync with a source file using AI translation",
    version
)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "l10n.yaml")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: CliLogLevel,
}

/// Minimal timestamped stderr logger
struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(StderrLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "{color}{now} {:5} {}\x1B[0m",
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = StderrLogger::init(args.log_level.into()) {
        eprintln!("Failed to initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<bool> {
    let config = SyncConfig::from_file(&args.config_path).await?;
    info!(
        "Syncing {} target language(s) from source '{}'",
        config.target_lang_codes.len(),
        config.source_lang_code
    );

    let controller = Controller::new(config)?;
    let summary = controller.run().await?;

    for lang_code in &summary.succeeded {
        info!("[{lang_code}] OK");
    }
    for (lang_code, failure) in &summary.failed {
        error!("[{lang_code}] FAILED: {failure}");
    }
    Ok(summary.is_success())
}
