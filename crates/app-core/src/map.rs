//! Map content
//!
//! Suggested spots surfaced on the map screen. Pins are derived from
//! location-tagged posts in the full product; here they are fixtures.

use serde::{Deserialize, Serialize};

/// A suggested spot near the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPin {
    /// Stable pin identifier
    pub id: String,
    /// Spot name
    pub name: String,
    /// Neighbourhood and prefecture
    pub area: String,
    /// Human-readable travel estimate ("38 min drive")
    pub distance: String,
    /// Why this spot is being suggested
    pub note: String,
}

impl MapPin {
    /// Subtitle line combining area and travel estimate
    pub fn subtitle(&self) -> String {
        format!("{} ・ {}", self.area, self.distance)
    }
}

/// Sample suggested pins
pub fn sample_suggested_pins() -> Vec<MapPin> {
    vec![
        MapPin {
            id: "pin-1".to_string(),
            name: "Seaside Espresso Stand".to_string(),
            area: "Enoshima, Kanagawa".to_string(),
            distance: "38 min drive".to_string(),
            note: "Sunrise espresso with ocean breeze. Perfect for dawn photos.".to_string(),
        },
        MapPin {
            id: "pin-2".to_string(),
            name: "Rooftop Observatory Walk".to_string(),
            area: "Shibuya, Tokyo".to_string(),
            distance: "18 min subway".to_string(),
            note: "Glass observatory with 270° view. Try visiting at twilight for soft light."
                .to_string(),
        },
    ]
}
