//! Itinerary prompt construction

use crate::models::TripRequest;

/// Instructions appended after the trip details in every prompt
const RULES: &str = "Rules:
- Use bus, shared jeep, or walking instead of flights
- Recommend local homestays and family-run restaurants
- Avoid overcrowded spots, suggest off-season or alternative routes
- Include daily carbon footprint tip
- Add safety tips (monsoon, altitude, etc.)
- Write in simple English with short Nepali translation for each day
- Format: Day 1: Title – Activities – Stay – Eco Tip";

/// Build the single-turn prompt sent to the language model
#[must_use]
pub fn build_prompt(trip: &TripRequest) -> String {
    format!(
        "You are a Nepal sustainable tourism expert. Create a {days}-day eco-friendly itinerary for {destination}.\n\
         Budget: {budget}. Priorities: {priorities}.\n\
         {RULES}\n",
        days = trip.days(),
        destination = trip.destination(),
        budget = trip.budget(),
        priorities = trip.priorities_label(),
    )
}
