//! `GreenPath` - Eco-friendly Nepal travel itinerary planning
//!
//! This library turns trip preferences into a prompt for a chat-completion
//! model and post-processes the returned itinerary into a footprint estimate
//! and a text export.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod llm;
pub mod logging;
pub mod models;
pub mod planner;
pub mod processor;
pub mod prompt;
pub mod web;

// Re-export core types for public API
pub use config::GreenPathConfig;
pub use error::GreenPathError;
pub use llm::{CompletionProvider, Credential, LlmError, OpenAiClient};
pub use models::{Budget, Destination, ItineraryResult, Priority, TripRequest};
pub use planner::Planner;
pub use processor::process;
pub use prompt::build_prompt;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GreenPathError>;
