/// Handles argument parsing and run wiring.
pub mod cli;

/// Constants shared across the application.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for built-in Rust types.
pub mod ext;

/// The hand-maintained template exclusion manifest.
pub mod manifest;

/// Invocation of the external synthesis toolkit.
pub mod synth;
