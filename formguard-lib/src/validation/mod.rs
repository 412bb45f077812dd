//! Field validation rules.
//!
//! Every field has one ordered rule chain. Rules run in order and the first
//! failing rule decides the outcome; later rules are not consulted.
//!
//! # Example
//!
//! ```ignore
//! use formguard_lib::validation::{FormValues, validate};
//!
//! let values = FormValues {
//!     full_name: "Ada Lovelace".into(),
//!     ..Default::default()
//! };
//!
//! let report = validate(&values);
//! if let Some(error) = report.first_error() {
//!     println!("{}", error);
//! }
//! ```

mod fields;
mod report;
mod rules;
mod values;

pub use fields::*;
pub use report::{Outcome, ValidationReport};
pub use rules::Rules;
pub use values::{FormValues, validate};
