mod commands;
mod display;
mod error;
mod paths;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use formguard_lib::prelude::*;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::commands::{Command, HELP};
use crate::display::{render_report, render_view};
use crate::error::CliError;

/// Drive the sign-up form validator from a terminal.
#[derive(Debug, Parser)]
#[command(name = "formguard", version)]
struct Cli {
    /// Seconds the success view is shown before the form resets.
    #[arg(long, global = true, default_value_t = 5)]
    reset_delay_secs: u64,

    /// Seconds an error message stays visible (0 keeps it until the field changes).
    #[arg(long, global = true, default_value_t = 3)]
    error_clear_secs: u64,

    /// Log file (defaults to the platform cache directory).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Edit the form interactively (default).
    Interactive,
    /// Validate a JSON file of field values.
    Check {
        /// Path to a JSON object with camelCase field names.
        file: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn form_config(&self) -> FormConfig {
        let config =
            FormConfig::new().success_reset_delay(Duration::from_secs(self.reset_delay_secs));
        match self.error_clear_secs {
            0 => config.keep_errors(),
            secs => config.error_clear_delay(Duration::from_secs(secs)),
        }
    }
}

fn init_logger(cli: &Cli) -> Result<(), CliError> {
    let Some(path) = cli.log_file.clone().or_else(paths::log_file) else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    Ok(())
}

fn check_file(path: &Path, json: bool) -> Result<ExitCode, CliError> {
    let values: FormValues = serde_json::from_str(&fs::read_to_string(path)?)?;
    let report = validate(&values);
    info!("Checked {}: valid = {}", path.display(), report.is_valid());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn interactive(config: FormConfig) -> Result<ExitCode, CliError> {
    let cancel = CancellationToken::new();
    let handle = FormSession::spawn(FormValidator::new(config), cancel.clone());
    let mut views = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    println!();
    println!("{}", render_view(&views.borrow_and_update()));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match commands::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => println!("{}", HELP),
                    Ok(Some(Command::Show)) => {
                        println!("{}", render_view(&views.borrow_and_update()));
                    }
                    Ok(Some(Command::Json)) => {
                        println!("{}", serde_json::to_string_pretty(&*views.borrow_and_update())?);
                    }
                    Ok(Some(Command::Values)) => {
                        let values = views.borrow_and_update().values();
                        println!("{}", serde_json::to_string_pretty(&values)?);
                    }
                    Ok(Some(Command::Event(event))) => match handle.dispatch(event).await {
                        Ok(outcome) => {
                            if let Some(SubmitOutcome::Rejected { focus }) = outcome {
                                println!("Please fix the highlighted fields ({} first).", focus);
                            }
                            println!("{}", render_view(&views.borrow_and_update()));
                        }
                        Err(e) => eprintln!("Error: {}", e),
                    },
                    Err(e) => eprintln!("Error: {}", e),
                }
            }

            // Only timer updates reach here; event updates are marked seen above.
            Ok(()) = views.changed() => {
                println!("{}", render_view(&views.borrow_and_update()));
            }
        }
    }

    cancel.cancel();
    handle.shutdown().await?;
    Ok(ExitCode::SUCCESS)
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    init_logger(&cli)?;
    let config = cli.form_config();
    info!("Starting with {:?}", config);

    match cli.command.unwrap_or(Mode::Interactive) {
        Mode::Interactive => interactive(config).await,
        Mode::Check { file, json } => check_file(&file, json),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
