//! Data models for the GreenPath application
//!
//! - Trip: the submitted form selections and their choice catalogues
//! - Itinerary: the generated plan and what is derived from it

pub mod itinerary;
pub mod trip;

// Re-export all public types for convenient access
pub use itinerary::ItineraryResult;
pub use trip::{Budget, DEFAULT_DAYS, Destination, MAX_DAYS, MIN_DAYS, Priority, TripRequest};
