//! Field-level normalizers for enrollment records.
//!
//! Every function here is pure, row-independent and idempotent:
//!
//! - **address**: locality stop-token removal and whitespace cleanup
//! - **name**: full-name splitting into first/second name
//! - **phone**: contact-number normalization
//! - **date**: day-month-year to ISO conversion
//! - **compose**: canonical identifier, course code and address composition

pub mod address;
pub mod compose;
pub mod date;
pub mod name;
pub mod phone;

pub use address::AddressCleaner;
pub use compose::{compose_course, compose_full_address, compose_run};
pub use date::{DateParseError, convert_date};
pub use name::split_name;
pub use phone::{PhoneOutcome, format_phone};
