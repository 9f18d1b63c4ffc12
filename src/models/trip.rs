//! Trip request model and the fixed choice catalogues behind it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GreenPathError;

/// Shortest trip that can be planned
pub const MIN_DAYS: u32 = 1;
/// Longest trip that can be planned
pub const MAX_DAYS: u32 = 10;
/// Trip length preselected on the form
pub const DEFAULT_DAYS: u32 = 3;

/// Declares a closed set of form choices with a display label and a CLI slug.
///
/// Parsing accepts either, case-insensitively. Serialization uses the label.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => ($label:literal, $slug:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every choice, in form order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label shown to the user and embedded in prompts
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Short command-line spelling
            #[must_use]
            pub fn slug(self) -> &'static str {
                match self {
                    $($name::$variant => $slug),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = GreenPathError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|c| {
                        c.label().eq_ignore_ascii_case(wanted) || c.slug().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| {
                        GreenPathError::validation(format!(
                            "Unknown {} '{}'. Must be one of: {}",
                            $kind,
                            wanted,
                            $name::ALL.iter().map(|c| c.slug()).collect::<Vec<_>>().join(", ")
                        ))
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = GreenPathError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.label().to_string()
            }
        }
    };
}

choice_enum! {
    /// Regions of Nepal an itinerary can be planned for
    #[derive(Default)]
    Destination, "destination" {
        #[default]
        KathmanduValley => ("Kathmandu Valley", "kathmandu-valley"),
        Pokhara => ("Pokhara", "pokhara"),
        ChitwanNationalPark => ("Chitwan National Park", "chitwan-national-park"),
        EverestRegion => ("Everest Region", "everest-region"),
        Lumbini => ("Lumbini", "lumbini"),
        AnnapurnaCircuit => ("Annapurna Circuit", "annapurna-circuit"),
        Mustang => ("Mustang", "mustang"),
    }
}

choice_enum! {
    /// Spending level for the trip
    #[derive(Default)]
    Budget, "budget" {
        #[default]
        Low => ("Low (homestay & bus)", "low"),
        Medium => ("Medium", "medium"),
        High => ("High", "high"),
    }
}

choice_enum! {
    /// What the traveller cares about most
    Priority, "priority" {
        NatureTrekking => ("Nature & Trekking", "nature-trekking"),
        CultureTemples => ("Culture & Temples", "culture-temples"),
        Adventure => ("Adventure", "adventure"),
        Relaxation => ("Relaxation", "relaxation"),
        Wildlife => ("Wildlife", "wildlife"),
    }
}

/// A single trip-planning submission
///
/// Built fresh for every request and never persisted. Construction enforces
/// the day range and a non-empty priority selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    destination: Destination,
    days: u32,
    budget: Budget,
    priorities: Vec<Priority>,
}

impl TripRequest {
    /// Create a validated trip request
    ///
    /// `days` is clamped into `MIN_DAYS..=MAX_DAYS`. Repeated priorities are
    /// collapsed keeping the first occurrence. An empty selection is rejected.
    pub fn new(
        destination: Destination,
        days: u32,
        budget: Budget,
        priorities: impl IntoIterator<Item = Priority>,
    ) -> crate::Result<Self> {
        let clamped = days.clamp(MIN_DAYS, MAX_DAYS);
        if clamped != days {
            debug!(requested = days, clamped, "Trip length clamped into range");
        }

        let mut unique: Vec<Priority> = Vec::new();
        for priority in priorities {
            if !unique.contains(&priority) {
                unique.push(priority);
            }
        }

        if unique.is_empty() {
            return Err(GreenPathError::validation(
                "Select at least one thing you love most about travelling",
            ));
        }

        Ok(Self {
            destination,
            days: clamped,
            budget,
            priorities: unique,
        })
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        self.destination
    }

    #[must_use]
    pub fn days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub fn budget(&self) -> Budget {
        self.budget
    }

    #[must_use]
    pub fn priorities(&self) -> &[Priority] {
        &self.priorities
    }

    /// Priorities as a comma-separated list of labels, in selection order
    #[must_use]
    pub fn priorities_label(&self) -> String {
        self.priorities
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            destination: Destination::default(),
            days: DEFAULT_DAYS,
            budget: Budget::default(),
            priorities: vec![Priority::NatureTrekking],
        }
    }
}
