//! CLI library components for the enrollment transpiler.

pub mod logging;
