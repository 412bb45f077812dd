//! Session errors

use thiserror::Error;

use super::FormError;

/// Errors returned by a [`crate::session::FormHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session task has stopped and no longer accepts events.
    #[error("form session is closed")]
    Closed,

    /// The validator rejected the event.
    #[error(transparent)]
    Form(#[from] FormError),
}
