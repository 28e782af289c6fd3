//! Notification content
//!
//! Activity notices shown on the notifications screen. Relative timestamps
//! are precomputed display strings; the core never does time math on them.

use serde::{Deserialize, Serialize};

/// An activity notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Stable notice identifier
    pub id: String,
    /// Headline ("Yuri bookmarked your post")
    pub title: String,
    /// Supporting detail line
    pub detail: String,
    /// Relative timestamp display string ("3m ago")
    pub time_ago: String,
}

/// Sample notices
pub fn sample_notices() -> Vec<Notice> {
    vec![
        Notice {
            id: "notice-1".to_string(),
            title: "Yuri bookmarked your post".to_string(),
            detail: "“Seaside Espresso Stand” was saved to Yuri’s “Weekend” list.".to_string(),
            time_ago: "3m ago".to_string(),
        },
        Notice {
            id: "notice-2".to_string(),
            title: "Map suggestion ready".to_string(),
            detail: "Two new rooftop spots near Shibuya match your saved tags.".to_string(),
            time_ago: "12m ago".to_string(),
        },
        Notice {
            id: "notice-3".to_string(),
            title: "Supabase sync complete".to_string(),
            detail: "Your offline draft “Night walk in Yanaka” successfully uploaded.".to_string(),
            time_ago: "42m ago".to_string(),
        },
    ]
}
