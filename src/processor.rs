//! Post-processing of the model's itinerary reply
//!
//! Derives the footprint estimate and the export filename from the raw text.
//! The estimate is a keyword heuristic: any mention of "bus" is taken to mean
//! the plan travels overland by bus.

use tracing::debug;

use crate::models::{Destination, ItineraryResult, TripRequest};

/// Daily footprint when the itinerary mentions bus travel
pub const BUS_KG_PER_DAY: u32 = 15;
/// Daily footprint otherwise
pub const DEFAULT_KG_PER_DAY: u32 = 40;

/// Estimate the trip footprint in kg CO2
#[must_use]
pub fn carbon_footprint_kg(raw_text: &str, days: u32) -> u32 {
    let per_day = if raw_text.to_lowercase().contains("bus") {
        BUS_KG_PER_DAY
    } else {
        DEFAULT_KG_PER_DAY
    };
    days.saturating_mul(per_day)
}

/// Filename for the downloadable export; the label is used as-is
#[must_use]
pub fn export_filename(destination: Destination) -> String {
    format!("GreenPath_Nepal_{}.txt", destination.label())
}

/// Turn the model's reply into an [`ItineraryResult`]
#[must_use]
pub fn process(raw_text: String, trip: &TripRequest) -> ItineraryResult {
    let carbon_footprint_kg = carbon_footprint_kg(&raw_text, trip.days());
    debug!(
        carbon_footprint_kg,
        days = trip.days(),
        chars = raw_text.len(),
        "Processed itinerary reply"
    );

    ItineraryResult {
        carbon_footprint_kg,
        export_filename: export_filename(trip.destination()),
        raw_text,
    }
}
