//! Input/output operations, configuration and error handling

/// Images directory listing and name resolution
pub mod catalog;
/// Command-line parsing and single-image orchestration
pub mod cli;
/// Analysis constants and validated configuration
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Grayscale image loading and binarized grid export
pub mod image;
/// External plotting script invocation
pub mod postprocess;
/// Results file formatting and parsing
pub mod series;
