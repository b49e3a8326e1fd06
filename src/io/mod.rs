/// Command-line parsing and pipeline orchestration
pub mod cli;
/// Layout constants, defaults and validated configuration
pub mod configuration;
/// Recursive image file discovery
pub mod discovery;
/// PNG and JPEG output
pub mod encoder;
/// Error types and exit codes
pub mod error;
/// Source image decoding
pub mod loader;
/// Tracing subscriber setup
pub mod logging;
/// Progress bar for decoding and composition
pub mod progress;
