//! Account content
//!
//! Profile snapshot copy and the quick-action rows on the account screen.

use serde::{Deserialize, Serialize};

/// A settings shortcut row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Stable action identifier
    pub id: String,
    /// Row label
    pub label: String,
    /// Helper line under the label
    pub helper: String,
}

/// The glass-card profile summary at the top of the account screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Card title
    pub title: String,
    /// Card body copy
    pub body: String,
}

impl Default for ProfileSnapshot {
    fn default() -> Self {
        ProfileSnapshot {
            title: "Profile snapshot".to_string(),
            body: "透明感のある UI を維持するため、プロフィール写真はガラス調マスクで表示予定です。\
                   ストレージは Supabase Storage と同期。"
                .to_string(),
        }
    }
}

/// Sample quick-action rows
pub fn sample_quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            id: "action-1".to_string(),
            label: "Edit profile".to_string(),
            helper: "Update name, tagline, and cover media".to_string(),
        },
        QuickAction {
            id: "action-2".to_string(),
            label: "Manage posting privacy".to_string(),
            helper: "Default visibility for new adventures".to_string(),
        },
        QuickAction {
            id: "action-3".to_string(),
            label: "Connected services".to_string(),
            helper: "Supabase Auth, Cloudflare Stream bindings".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_quick_actions() {
        let actions = sample_quick_actions();
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].label, "Edit profile");
        assert_eq!(actions[2].id, "action-3");
    }

    #[test]
    fn test_profile_snapshot_default() {
        let snapshot = ProfileSnapshot::default();
        assert_eq!(snapshot.title, "Profile snapshot");
        assert!(!snapshot.body.is_empty());
    }
}
