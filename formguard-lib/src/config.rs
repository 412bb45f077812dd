//! Form configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay before a shown error message is hidden.
pub const DEFAULT_ERROR_CLEAR_DELAY: Duration = Duration::from_secs(3);

/// Default delay before the success view returns to an empty form.
pub const DEFAULT_SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Timing configuration for a [`crate::FormValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// How long an error message stays visible (None = until the field changes).
    pub error_clear_delay: Option<Duration>,

    /// How long the success view is shown before the form resets.
    pub success_reset_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            error_clear_delay: Some(DEFAULT_ERROR_CLEAR_DELAY),
            success_reset_delay: DEFAULT_SUCCESS_RESET_DELAY,
        }
    }
}

impl FormConfig {
    /// Create a config with the default delays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how long error messages stay visible.
    pub fn error_clear_delay(mut self, delay: Duration) -> Self {
        self.error_clear_delay = Some(delay);
        self
    }

    /// Keep error messages visible until the field changes.
    pub fn keep_errors(mut self) -> Self {
        self.error_clear_delay = None;
        self
    }

    /// Set how long the success view is shown.
    pub fn success_reset_delay(mut self, delay: Duration) -> Self {
        self.success_reset_delay = delay;
        self
    }
}
