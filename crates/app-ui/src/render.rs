//! Token value rendering
//!
//! Pure formatting of token values into the stable, human-readable strings
//! shown on the token preview screen. Dispatch is an exhaustive match over
//! [`TokenValue`], so every accepted shape renders and no shape is
//! ambiguous.

use crate::tokens::{
    BorderToken, BorderTokenName, ColorTokenName, MotionToken, MotionTokenName, ShadowToken,
    ShadowTokenName,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional color lookup used when rendering border tokens
pub type ColorLookup = HashMap<ColorTokenName, String>;

/// Any token value the preview screen can display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A pixel quantity (spacing, radius, size)
    Number(f32),
    /// A literal string (color values and similar)
    Text(String),
    /// A border specification
    Border(BorderToken),
    /// A shadow specification
    Shadow(ShadowToken),
    /// A motion description
    Motion(MotionToken),
}

impl From<f32> for TokenValue {
    fn from(value: f32) -> Self {
        TokenValue::Number(value)
    }
}

impl From<u32> for TokenValue {
    fn from(value: u32) -> Self {
        TokenValue::Number(value as f32)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<BorderToken> for TokenValue {
    fn from(value: BorderToken) -> Self {
        TokenValue::Border(value)
    }
}

impl From<ShadowToken> for TokenValue {
    fn from(value: ShadowToken) -> Self {
        TokenValue::Shadow(value)
    }
}

impl From<MotionToken> for TokenValue {
    fn from(value: MotionToken) -> Self {
        TokenValue::Motion(value)
    }
}

/// Render a token value to its display string
pub fn render_token_value(value: &TokenValue) -> String {
    render_token_value_with_colors(value, None)
}

/// Render a token value, resolving border color references through `colors`
///
/// When no lookup is given (or the reference is absent from it), the raw
/// reference name is displayed instead.
pub fn render_token_value_with_colors(value: &TokenValue, colors: Option<&ColorLookup>) -> String {
    match value {
        TokenValue::Number(n) => format!("{}px", fmt_number(*n)),
        TokenValue::Text(s) => s.clone(),
        TokenValue::Border(border) => render_border(border, colors),
        TokenValue::Shadow(shadow) => render_shadow(shadow),
        TokenValue::Motion(motion) => render_motion(motion),
    }
}

/// Render a named motion token: `"{name}: {value}"`
pub fn render_motion_token(token: &MotionToken, name: MotionTokenName) -> String {
    format!("{}: {}", name, render_motion(token))
}

/// Render a named border token, resolving its color through `colors`
pub fn render_border_token(
    border: &BorderToken,
    name: BorderTokenName,
    colors: Option<&ColorLookup>,
) -> String {
    format!("{}: {}", name, render_border(border, colors))
}

/// Render a named shadow token
pub fn render_shadow_token(shadow: &ShadowToken, name: ShadowTokenName) -> String {
    format!("{}: {}", name, render_shadow(shadow))
}

fn render_border(border: &BorderToken, colors: Option<&ColorLookup>) -> String {
    let resolved = colors
        .and_then(|lookup| lookup.get(&border.color))
        .map(String::as_str)
        .unwrap_or_else(|| border.color.as_str());
    format!("{}px / {}", fmt_number(border.width), resolved)
}

fn render_shadow(shadow: &ShadowToken) -> String {
    format!(
        "offset({},{}) • radius {}px • opacity {} • elevation {} • {}",
        fmt_number(shadow.offset.width),
        fmt_number(shadow.offset.height),
        fmt_number(shadow.radius),
        fmt_number(shadow.opacity),
        shadow.elevation,
        shadow.color,
    )
}

fn render_motion(token: &MotionToken) -> String {
    match token {
        MotionToken::Timing(timing) => {
            let easing = match &timing.easing {
                Some(points) => {
                    let joined = points
                        .iter()
                        .map(|point| fmt_number(round2(*point)))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("cubic-bezier({joined})")
                }
                None => "linear".to_string(),
            };
            let delay = match timing.delay_ms {
                Some(delay) => format!(" • delay {delay}ms"),
                None => String::new(),
            };
            format!("{}ms • {}{}", timing.duration_ms, easing, delay)
        }
        MotionToken::Spring(spring) => format!(
            "spring(mass: {}, stiffness: {}, damping: {})",
            fmt_number(spring.mass),
            fmt_number(spring.stiffness),
            fmt_number(spring.damping),
        ),
    }
}

/// Display a number without a trailing `.0` (`16` not `16.0`, `0.3` as-is)
fn fmt_number(value: f32) -> String {
    format!("{value}")
}

/// Round to two decimal places for easing point display
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{DesignTokens, MotionTimingToken, ShadowOffset};

    #[test]
    fn test_formats_numeric_values_as_pixels() {
        assert_eq!(render_token_value(&TokenValue::Number(16.0)), "16px");
        assert_eq!(render_token_value(&TokenValue::from(24_u32)), "24px");
        assert_eq!(render_token_value(&TokenValue::Number(0.3)), "0.3px");
    }

    #[test]
    fn test_returns_string_tokens_unchanged() {
        assert_eq!(render_token_value(&TokenValue::from("#3A3A3A")), "#3A3A3A");
        assert_eq!(
            render_token_value(&TokenValue::from("rgba(255, 255, 255, 0.72)")),
            "rgba(255, 255, 255, 0.72)"
        );
    }

    #[test]
    fn test_formats_border_tokens_with_resolved_color() {
        let border = BorderToken {
            width: 0.3,
            color: ColorTokenName::BorderHairline,
        };
        let mut colors = ColorLookup::new();
        colors.insert(
            ColorTokenName::BorderHairline,
            "rgba(15, 23, 42, 0.18)".to_string(),
        );

        let formatted = render_border_token(&border, BorderTokenName::Hairline, Some(&colors));
        assert_eq!(formatted, "border-0.3: 0.3px / rgba(15, 23, 42, 0.18)");
    }

    #[test]
    fn test_border_falls_back_to_reference_name() {
        let border = BorderToken {
            width: 0.3,
            color: ColorTokenName::BorderHairline,
        };

        // No lookup: the raw reference name is displayed.
        let formatted = render_border_token(&border, BorderTokenName::Hairline, None);
        assert_eq!(formatted, "border-0.3: 0.3px / color-border-hairline");

        // Lookup that does not carry the reference behaves the same.
        let empty = ColorLookup::new();
        let formatted = render_border_token(&border, BorderTokenName::Hairline, Some(&empty));
        assert_eq!(formatted, "border-0.3: 0.3px / color-border-hairline");
    }

    #[test]
    fn test_serialises_motion_timing_tokens_with_easing() {
        let motion = MotionToken::timing(260, [0.0, 0.0, 0.2, 1.0]);
        assert_eq!(
            render_motion_token(&motion, MotionTokenName::Content),
            "motion-content: 260ms • cubic-bezier(0, 0, 0.2, 1)"
        );
    }

    #[test]
    fn test_serialises_motion_timing_without_easing_as_linear() {
        let motion = MotionToken::Timing(MotionTimingToken {
            duration_ms: 120,
            easing: None,
            delay_ms: None,
        });
        assert_eq!(render_token_value(&TokenValue::Motion(motion)), "120ms • linear");
    }

    #[test]
    fn test_serialises_motion_timing_with_delay() {
        let motion = MotionToken::Timing(MotionTimingToken {
            duration_ms: 340,
            easing: Some([0.2, 0.0, 0.2, 1.0]),
            delay_ms: Some(260),
        });
        assert_eq!(
            render_token_value(&TokenValue::Motion(motion)),
            "340ms • cubic-bezier(0.2, 0, 0.2, 1) • delay 260ms"
        );
    }

    #[test]
    fn test_easing_points_round_to_two_decimals() {
        let motion = MotionToken::timing(200, [0.333, 0.667, 0.125, 1.0]);
        assert_eq!(
            render_token_value(&TokenValue::Motion(motion)),
            "200ms • cubic-bezier(0.33, 0.67, 0.13, 1)"
        );
    }

    #[test]
    fn test_serialises_motion_spring_tokens() {
        let motion = MotionToken::spring(1.0, 180.0, 24.0);
        assert_eq!(
            render_motion_token(&motion, MotionTokenName::Hero),
            "motion-hero: spring(mass: 1, stiffness: 180, damping: 24)"
        );
    }

    #[test]
    fn test_formats_shadow_tokens() {
        let shadow = ShadowToken {
            color: "rgba(15, 23, 42, 0.18)".to_string(),
            offset: ShadowOffset {
                width: 0.0,
                height: 12.0,
            },
            radius: 24.0,
            opacity: 0.18,
            elevation: 20,
        };
        assert_eq!(
            render_shadow_token(&shadow, ShadowTokenName::Soft),
            "shadow-soft: offset(0,12) • radius 24px • opacity 0.18 • elevation 20 • rgba(15, 23, 42, 0.18)"
        );
    }

    #[test]
    fn test_registry_values_render_against_spec_fixtures() {
        let tokens = DesignTokens::rovrov();

        assert_eq!(
            render_motion_token(
                tokens.motion(MotionTokenName::Content),
                MotionTokenName::Content
            ),
            "motion-content: 260ms • cubic-bezier(0, 0, 0.2, 1)"
        );
        assert_eq!(
            render_motion_token(tokens.motion(MotionTokenName::Hero), MotionTokenName::Hero),
            "motion-hero: spring(mass: 1, stiffness: 180, damping: 24)"
        );
        assert_eq!(
            render_border_token(
                tokens.border(BorderTokenName::Hairline),
                BorderTokenName::Hairline,
                Some(&tokens.colors),
            ),
            "border-0.3: 0.3px / rgba(15, 23, 42, 0.18)"
        );
    }
}
