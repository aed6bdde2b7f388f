//! Input/output operations and error handling

/// Command-line interface and zone rendering orchestration
pub mod cli;
/// Placement constants and default page wiring
pub mod configuration;
/// Error types for asset loading and preview export
pub mod error;
/// Zone preview rendering
pub mod image;
/// Progress display for page rendering
pub mod progress;
