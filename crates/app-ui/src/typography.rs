//! Typography for Rovrov
//!
//! Rovrov sets text in light weights of Inter, falling back to Noto Sans JP
//! for the Japanese copy. A [`TypographyToken`] keeps its color as a
//! reference into the color table; [`ResolvedTextStyle`] is the same style
//! with the reference replaced by the literal color value, which is what
//! screens hand to the host renderer.

use crate::tokens::ColorTokenName;
use serde::{Deserialize, Serialize};

// =============================================================================
// Font References
// =============================================================================

/// Names of the font assets the host is expected to load
pub mod font_references {
    /// Inter weights
    pub mod inter {
        /// Inter ExtraLight (200)
        pub const ULTRA_LIGHT: &str = "Inter_200ExtraLight";
        /// Inter Light (300)
        pub const LIGHT: &str = "Inter_300Light";
        /// Inter Regular (400)
        pub const REGULAR: &str = "Inter_400Regular";
    }

    /// Noto Sans JP weights
    pub mod noto_sans_jp {
        /// Noto Sans JP Light (300)
        pub const LIGHT: &str = "NotoSansJP_300Light";
        /// Noto Sans JP Regular (400)
        pub const REGULAR: &str = "NotoSansJP_400Regular";
    }
}

/// Every font asset the app shell must request before first render
pub const DESIGN_FONT_SOURCES: [&str; 5] = [
    font_references::inter::ULTRA_LIGHT,
    font_references::inter::LIGHT,
    font_references::inter::REGULAR,
    font_references::noto_sans_jp::LIGHT,
    font_references::noto_sans_jp::REGULAR,
];

// =============================================================================
// Font Weight
// =============================================================================

/// Font weights used by the design system
///
/// Rovrov deliberately stays in the light range; nothing heavier than
/// regular ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    /// ExtraLight (200)
    #[serde(rename = "200")]
    ExtraLight,
    /// Light (300)
    #[serde(rename = "300")]
    Light,
    /// Regular (400)
    #[serde(rename = "400")]
    Regular,
}

impl FontWeight {
    /// Numeric CSS weight
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
        }
    }
}

// =============================================================================
// Typography Token
// =============================================================================

/// A named text style with an unresolved color reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    /// Primary font family asset name
    pub font_family: String,
    /// Fallback family asset names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_family_fallback: Vec<String>,
    /// Font size in pixels
    pub font_size: f32,
    /// Line height in pixels
    pub line_height: f32,
    /// Font weight
    pub font_weight: FontWeight,
    /// Letter spacing in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Reference to a color token
    pub color: ColorTokenName,
}

impl TypographyToken {
    /// Resolve the color reference into a concrete style
    pub fn resolve(&self, color_value: impl Into<String>) -> ResolvedTextStyle {
        ResolvedTextStyle {
            font_family: self.font_family.clone(),
            font_family_fallback: self.font_family_fallback.clone(),
            font_size: self.font_size,
            line_height: self.line_height,
            font_weight: self.font_weight,
            letter_spacing: self.letter_spacing,
            color: color_value.into(),
        }
    }
}

/// A text style with the color reference resolved to a literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTextStyle {
    /// Primary font family asset name
    pub font_family: String,
    /// Fallback family asset names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_family_fallback: Vec<String>,
    /// Font size in pixels
    pub font_size: f32,
    /// Line height in pixels
    pub line_height: f32,
    /// Font weight
    pub font_weight: FontWeight,
    /// Letter spacing in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Literal color value
    pub color: String,
}

impl ResolvedTextStyle {
    /// Same style with a different literal color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Same style with a different font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_values() {
        assert_eq!(FontWeight::ExtraLight.value(), 200);
        assert_eq!(FontWeight::Light.value(), 300);
        assert_eq!(FontWeight::Regular.value(), 400);
    }

    #[test]
    fn test_font_weight_serializes_as_string() {
        assert_eq!(
            serde_json::to_string(&FontWeight::ExtraLight).unwrap(),
            "\"200\""
        );
        let parsed: FontWeight = serde_json::from_str("\"300\"").unwrap();
        assert_eq!(parsed, FontWeight::Light);
    }

    #[test]
    fn test_font_sources_complete() {
        assert_eq!(DESIGN_FONT_SOURCES.len(), 5);
        assert!(DESIGN_FONT_SOURCES.contains(&"Inter_200ExtraLight"));
        assert!(DESIGN_FONT_SOURCES.contains(&"NotoSansJP_400Regular"));
    }

    #[test]
    fn test_resolve_keeps_metrics() {
        let token = TypographyToken {
            font_family: font_references::inter::REGULAR.to_string(),
            font_family_fallback: vec![font_references::noto_sans_jp::REGULAR.to_string()],
            font_size: 16.0,
            line_height: 24.0,
            font_weight: FontWeight::Regular,
            letter_spacing: Some(0.0),
            color: ColorTokenName::TextBody,
        };

        let style = token.resolve("#666666");
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.line_height, 24.0);
        assert_eq!(style.color, "#666666");
        assert_eq!(style.font_family_fallback, vec!["NotoSansJP_400Regular"]);
    }

    #[test]
    fn test_with_color_override() {
        let token = TypographyToken {
            font_family: font_references::inter::LIGHT.to_string(),
            font_family_fallback: vec![],
            font_size: 16.0,
            line_height: 24.0,
            font_weight: FontWeight::Light,
            letter_spacing: None,
            color: ColorTokenName::TextFoot,
        };

        let style = token.resolve("#111111").with_color("#0D55FF");
        assert_eq!(style.color, "#0D55FF");
        assert_eq!(style.font_weight, FontWeight::Light);
    }
}
