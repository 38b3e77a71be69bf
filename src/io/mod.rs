//! Sample input, result output, and the command-line driver

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types for sample handling and generation setup
pub mod error;
/// PNG sample loading and export
pub mod image;
/// Batch progress display
pub mod progress;
/// Text and JSON sample handling
pub mod sample;
