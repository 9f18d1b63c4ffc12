//! Itinerary result model

use serde::{Deserialize, Serialize};

/// A generated itinerary together with everything derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryResult {
    /// Itinerary text exactly as returned by the model
    pub raw_text: String,
    /// Keyword-gated footprint estimate in kilograms of CO2
    pub carbon_footprint_kg: u32,
    /// Name of the downloadable text export
    pub export_filename: String,
}

impl ItineraryResult {
    /// Info line shown next to the itinerary
    #[must_use]
    pub fn footprint_message(&self) -> String {
        format!(
            "Estimated carbon footprint: {} kg CO2. Offset it here: ripple-nepal.org",
            self.carbon_footprint_kg
        )
    }

    /// Contents of the text export, identical to the raw itinerary
    #[must_use]
    pub fn export_contents(&self) -> &str {
        &self.raw_text
    }
}
