//! Static lookup tables for the enrollment transpiler.
//!
//! - **localities**: locality code table and address stop tokens
//! - **grades**: grade code to level label table
//! - **schema**: required source columns and the source/target rename map

pub mod grades;
pub mod localities;
pub mod schema;

pub use grades::{GRADE_LEVELS, grade_level};
pub use localities::{COMUNA_CODES, comuna_name, locality_stop_tokens};
pub use schema::{REQUIRED_COLUMNS, RENAME_MAP, columns};
