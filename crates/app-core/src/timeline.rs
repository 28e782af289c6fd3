//! Timeline content
//!
//! Models for the timeline screen: short location-tagged adventure posts
//! plus the cafe photo gallery used to exercise translucent surfaces.

use serde::{Deserialize, Serialize};

/// A single adventure post shown on the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineCard {
    /// Stable card identifier
    pub id: String,
    /// Post title
    pub title: String,
    /// Where the adventure happened
    pub location: String,
    /// Short free-form caption
    pub caption: String,
    /// Hashtag labels (rendered without the leading `#`)
    pub tags: Vec<String>,
}

/// A photo card in the cafe gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeShot {
    /// Stable card identifier
    pub id: String,
    /// Shot title
    pub title: String,
    /// Neighbourhood and city
    pub location: String,
    /// Caption text (Japanese copy in the shipped fixtures)
    pub description: String,
    /// Remote image location
    pub image_url: String,
}

/// Sample timeline posts
pub fn sample_timeline_cards() -> Vec<TimelineCard> {
    vec![
        TimelineCard {
            id: "post-1".to_string(),
            title: "Morning Drip at the Riverside".to_string(),
            location: "Nakameguro, Tokyo".to_string(),
            caption: "Sipped a light roast while the sun slipped through the cherry tree \
                      canopy. Added a quick sketch of the view to remember the warmth."
                .to_string(),
            tags: vec!["coffee".to_string(), "sketching".to_string()],
        },
        TimelineCard {
            id: "post-2".to_string(),
            title: "Hidden Alley Sound Check".to_string(),
            location: "Koenji, Tokyo".to_string(),
            caption: "Street musician let me try the synth patch before the crowd gathered. \
                      Saved a short clip to remix later tonight."
                .to_string(),
            tags: vec!["music".to_string(), "nightlife".to_string()],
        },
    ]
}

/// Sample cafe gallery shots
pub fn sample_cafe_shots() -> Vec<CafeShot> {
    vec![
        CafeShot {
            id: "cafe-1".to_string(),
            title: "Latte Art Workshop".to_string(),
            location: "Meguro, Tokyo".to_string(),
            description: "午後の柔らかい光が差し込むカウンターで、バリスタが描いた最新のラテアート。"
                .to_string(),
            image_url:
                "https://images.unsplash.com/photo-1470337458703-46ad1756a187?auto=format&fit=crop&w=1200&q=80"
                    .to_string(),
        },
        CafeShot {
            id: "cafe-2".to_string(),
            title: "Morning Brew Corner".to_string(),
            location: "Daikanyama, Tokyo".to_string(),
            description: "オールドウッドのテーブルと手作りマグに映える浅煎りの香り。".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1504753793650-d4a2b783c15e?auto=format&fit=crop&w=1200&q=80"
                    .to_string(),
        },
        CafeShot {
            id: "cafe-3".to_string(),
            title: "Rooftop Espresso Bar".to_string(),
            location: "Shinjuku, Tokyo".to_string(),
            description: "青いネオンが灯る夕暮れのテラスで、シティラインを眺めながらの一杯。".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?auto=format&fit=crop&w=1200&q=80"
                    .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_timeline_cards() {
        let cards = sample_timeline_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "post-1");
        assert_eq!(cards[0].tags, vec!["coffee", "sketching"]);
        assert_eq!(cards[1].location, "Koenji, Tokyo");
    }

    #[test]
    fn test_sample_cafe_shots() {
        let shots = sample_cafe_shots();
        assert_eq!(shots.len(), 3);
        assert!(shots.iter().all(|s| s.image_url.starts_with("https://")));
        assert_eq!(shots[2].title, "Rooftop Espresso Bar");
    }

    #[test]
    fn test_timeline_card_serialization() {
        let cards = sample_timeline_cards();
        let json = serde_json::to_string(&cards[0]).unwrap();
        let parsed: TimelineCard = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cards[0]);
    }

    #[test]
    fn test_cafe_shot_field_names() {
        let shot = &sample_cafe_shots()[0];
        let json = serde_json::to_value(shot).unwrap();
        // Wire format keeps the camelCase key used by the frontend
        assert!(json.get("imageUrl").is_some());
    }
}
