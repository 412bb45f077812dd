//! CLI error type.

use thiserror::Error;

use formguard_lib::error::{FormError, SessionError};

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid form values: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
