//! Error types

mod form;
mod session;
mod validation;

pub use form::*;
pub use session::*;
pub use validation::*;
