//! Tab icons
//!
//! Rovrov uses Remix icon glyphs; each tab has a line variant for the
//! resting state and a fill variant when focused. The compose button only
//! has a line glyph.

use serde::{Deserialize, Serialize};

/// Default icon size on the tab bar, in pixels
pub const TAB_ICON_SIZE: f32 = 28.0;

/// Keys into the icon glyph table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabIconKey {
    /// Timeline tab
    Timeline,
    /// Map tab
    Map,
    /// Notifications tab
    Notifications,
    /// Account tab
    Account,
    /// Compose (post) button
    Post,
}

impl TabIconKey {
    /// Resting (line) glyph name
    pub fn line_glyph(&self) -> &'static str {
        match self {
            TabIconKey::Timeline => "layout-2-line",
            TabIconKey::Map => "map-line",
            TabIconKey::Notifications => "notification-4-line",
            TabIconKey::Account => "account-pin-circle-line",
            TabIconKey::Post => "add-line",
        }
    }

    /// Focused (fill) glyph name
    ///
    /// The post button has no fill variant; it always renders its line glyph.
    pub fn fill_glyph(&self) -> &'static str {
        match self {
            TabIconKey::Timeline => "layout-2-fill",
            TabIconKey::Map => "map-fill",
            TabIconKey::Notifications => "notification-4-fill",
            TabIconKey::Account => "account-pin-circle-fill",
            TabIconKey::Post => "add-line",
        }
    }

    /// Glyph for the given focus state
    pub fn glyph(&self, focused: bool) -> &'static str {
        if focused {
            self.fill_glyph()
        } else {
            self.line_glyph()
        }
    }
}

/// A fully specified icon the host can draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconDescription {
    /// Remix glyph name
    pub glyph: String,
    /// Tint color literal
    pub color: String,
    /// Size in pixels
    pub size: f32,
}

/// Build the icon description for a tab in the given focus state
pub fn tab_icon(key: TabIconKey, focused: bool, color: impl Into<String>, size: f32) -> IconDescription {
    IconDescription {
        glyph: key.glyph(focused).to_string(),
        color: color.into(),
        size,
    }
}
