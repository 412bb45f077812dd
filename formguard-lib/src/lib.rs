//! Sign-up form validation component.
//!
//! Owns the seven fields of a sign-up form, runs one ordered rule chain per
//! field, tracks a tri-state status per field and gates submission on every
//! field being valid. Rendering is left to the host: the validator only
//! produces [`render::FormView`] snapshots.

pub mod config;
pub mod error;
pub mod field;
pub mod render;
pub mod session;
pub mod state;
pub mod timer;
pub mod validation;

mod validator;

pub use config::FormConfig;
pub use field::{FieldName, FieldStatus, FieldValue};
pub use validator::*;

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::error::{FieldError, FormError, SessionError, ValidationErrorKind};
    pub use crate::field::{FieldName, FieldStatus, FieldValue};
    pub use crate::render::{FieldView, FormView, PageView, VisualClass};
    pub use crate::session::{FormHandle, FormSession};
    pub use crate::state::FormState;
    pub use crate::validation::{FormValues, Outcome, ValidationReport, validate};
    pub use crate::validator::{FormEvent, FormValidator, SubmitOutcome};
}
