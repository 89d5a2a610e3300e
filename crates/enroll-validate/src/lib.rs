//! Validation for national identifiers and email addresses.
//!
//! - **run**: RUN/IPE classification, check-digit arithmetic, parsing
//! - **email**: structural email validation

pub mod email;
pub mod run;

pub use email::is_valid_email;
pub use run::{RunClass, RunValidation, check_character, classify, parse, validate, validate_text};
