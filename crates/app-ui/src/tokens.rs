//! Design tokens for Rovrov
//!
//! The token registry is the single source of design values: typography,
//! color, spacing, border, shadow, and motion, each keyed by a closed name
//! enum. Names being enums makes two of the registry's invariants hold by
//! construction: a name cannot collide within its category, and a color
//! reference inside a typography or border token cannot point at a
//! nonexistent color. What remains checkable — table completeness and value
//! sanity — is covered by [`DesignTokens::validate`], and a failing table is
//! a configuration error, never a runtime fallback.
//!
//! Tokens are built once at process start (see [`DesignTokens::rovrov`]) and
//! never mutated afterwards.

use crate::typography::{font_references, FontWeight, TypographyToken};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Token Names
// =============================================================================

/// Typography token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypographyTokenName {
    /// 48px hero headline
    #[serde(rename = "typo-hero")]
    Hero,
    /// 32px display headline
    #[serde(rename = "typo-display")]
    Display,
    /// 24px section title
    #[serde(rename = "typo-title")]
    Title,
    /// 16px body copy
    #[serde(rename = "typo-body")]
    Body,
    /// 16px light footnote
    #[serde(rename = "typo-footnote")]
    Footnote,
}

impl TypographyTokenName {
    /// Kebab-case token name
    pub fn as_str(&self) -> &'static str {
        match self {
            TypographyTokenName::Hero => "typo-hero",
            TypographyTokenName::Display => "typo-display",
            TypographyTokenName::Title => "typo-title",
            TypographyTokenName::Body => "typo-body",
            TypographyTokenName::Footnote => "typo-footnote",
        }
    }

    /// All typography names in display order
    pub fn all() -> [TypographyTokenName; 5] {
        [
            TypographyTokenName::Hero,
            TypographyTokenName::Display,
            TypographyTokenName::Title,
            TypographyTokenName::Body,
            TypographyTokenName::Footnote,
        ]
    }
}

impl std::fmt::Display for TypographyTokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTokenName {
    /// Title text
    #[serde(rename = "color-text-title")]
    TextTitle,
    /// Body text
    #[serde(rename = "color-text-body")]
    TextBody,
    /// Footnote text
    #[serde(rename = "color-text-foot")]
    TextFoot,
    /// Primary accent (links, active chips)
    #[serde(rename = "color-accent-primary")]
    AccentPrimary,
    /// Muted accent (spacing bars, secondary fills)
    #[serde(rename = "color-accent-muted")]
    AccentMuted,
    /// Inactive icon tint
    #[serde(rename = "color-icon-default")]
    IconDefault,
    /// Focused icon tint
    #[serde(rename = "color-icon-active")]
    IconActive,
    /// App background surface
    #[serde(rename = "color-surface-base")]
    SurfaceBase,
    /// Translucent glass surface
    #[serde(rename = "color-surface-glass")]
    SurfaceGlass,
    /// Elevated translucent surface
    #[serde(rename = "color-surface-elevated")]
    SurfaceElevated,
    /// Hairline border
    #[serde(rename = "color-border-hairline")]
    BorderHairline,
}

impl ColorTokenName {
    /// Kebab-case token name
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTokenName::TextTitle => "color-text-title",
            ColorTokenName::TextBody => "color-text-body",
            ColorTokenName::TextFoot => "color-text-foot",
            ColorTokenName::AccentPrimary => "color-accent-primary",
            ColorTokenName::AccentMuted => "color-accent-muted",
            ColorTokenName::IconDefault => "color-icon-default",
            ColorTokenName::IconActive => "color-icon-active",
            ColorTokenName::SurfaceBase => "color-surface-base",
            ColorTokenName::SurfaceGlass => "color-surface-glass",
            ColorTokenName::SurfaceElevated => "color-surface-elevated",
            ColorTokenName::BorderHairline => "color-border-hairline",
        }
    }

    /// Whether this names a surface color (preview swatches outline these)
    pub fn is_surface(&self) -> bool {
        matches!(
            self,
            ColorTokenName::SurfaceBase
                | ColorTokenName::SurfaceGlass
                | ColorTokenName::SurfaceElevated
        )
    }

    /// All color names in display order
    pub fn all() -> [ColorTokenName; 11] {
        [
            ColorTokenName::TextTitle,
            ColorTokenName::TextBody,
            ColorTokenName::TextFoot,
            ColorTokenName::AccentPrimary,
            ColorTokenName::AccentMuted,
            ColorTokenName::IconDefault,
            ColorTokenName::IconActive,
            ColorTokenName::SurfaceBase,
            ColorTokenName::SurfaceGlass,
            ColorTokenName::SurfaceElevated,
            ColorTokenName::BorderHairline,
        ]
    }
}

impl std::fmt::Display for ColorTokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spacing token names (4px-based scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingTokenName {
    /// 4px
    #[serde(rename = "space-4")]
    Space4,
    /// 8px
    #[serde(rename = "space-8")]
    Space8,
    /// 12px
    #[serde(rename = "space-12")]
    Space12,
    /// 16px
    #[serde(rename = "space-16")]
    Space16,
    /// 24px
    #[serde(rename = "space-24")]
    Space24,
    /// 32px
    #[serde(rename = "space-32")]
    Space32,
    /// 40px
    #[serde(rename = "space-40")]
    Space40,
    /// 48px
    #[serde(rename = "space-48")]
    Space48,
    /// 56px
    #[serde(rename = "space-56")]
    Space56,
    /// 64px
    #[serde(rename = "space-64")]
    Space64,
}

impl SpacingTokenName {
    /// Kebab-case token name
    pub fn as_str(&self) -> &'static str {
        match self {
            SpacingTokenName::Space4 => "space-4",
            SpacingTokenName::Space8 => "space-8",
            SpacingTokenName::Space12 => "space-12",
            SpacingTokenName::Space16 => "space-16",
            SpacingTokenName::Space24 => "space-24",
            SpacingTokenName::Space32 => "space-32",
            SpacingTokenName::Space40 => "space-40",
            SpacingTokenName::Space48 => "space-48",
            SpacingTokenName::Space56 => "space-56",
            SpacingTokenName::Space64 => "space-64",
        }
    }

    /// Pixel value for this spacing step
    pub fn pixels(&self) -> u32 {
        match self {
            SpacingTokenName::Space4 => 4,
            SpacingTokenName::Space8 => 8,
            SpacingTokenName::Space12 => 12,
            SpacingTokenName::Space16 => 16,
            SpacingTokenName::Space24 => 24,
            SpacingTokenName::Space32 => 32,
            SpacingTokenName::Space40 => 40,
            SpacingTokenName::Space48 => 48,
            SpacingTokenName::Space56 => 56,
            SpacingTokenName::Space64 => 64,
        }
    }

    /// All spacing names from smallest to largest
    pub fn all() -> [SpacingTokenName; 10] {
        [
            SpacingTokenName::Space4,
            SpacingTokenName::Space8,
            SpacingTokenName::Space12,
            SpacingTokenName::Space16,
            SpacingTokenName::Space24,
            SpacingTokenName::Space32,
            SpacingTokenName::Space40,
            SpacingTokenName::Space48,
            SpacingTokenName::Space56,
            SpacingTokenName::Space64,
        ]
    }
}

impl std::fmt::Display for SpacingTokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Motion token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionTokenName {
    /// 80ms tap response
    #[serde(rename = "motion-tap")]
    Tap,
    /// 160ms micro interaction
    #[serde(rename = "motion-micro")]
    Micro,
    /// 260ms content transition
    #[serde(rename = "motion-content")]
    Content,
    /// Hero spring
    #[serde(rename = "motion-hero")]
    Hero,
}

impl MotionTokenName {
    /// Kebab-case token name
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionTokenName::Tap => "motion-tap",
            MotionTokenName::Micro => "motion-micro",
            MotionTokenName::Content => "motion-content",
            MotionTokenName::Hero => "motion-hero",
        }
    }

    /// All motion names
    pub fn all() -> [MotionTokenName; 4] {
        [
            MotionTokenName::Tap,
            MotionTokenName::Micro,
            MotionTokenName::Content,
            MotionTokenName::Hero,
        ]
    }
}

impl std::fmt::Display for MotionTokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Border token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderTokenName {
    /// 0.3px hairline
    #[serde(rename = "border-0.3")]
    Hairline,
}

impl BorderTokenName {
    /// Kebab-case token name
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderTokenName::Hairline => "border-0.3",
        }
    }
}

impl std::fmt::Display for BorderTokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shadow token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadowTokenName {
    /// Soft card shadow
    #[serde(rename = "shadow-soft")]
    Soft,
}

impl ShadowTokenName {
    /// Kebab-case token name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowTokenName::Soft => "shadow-soft",
        }
    }
}

impl std::fmt::Display for ShadowTokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Token Values
// =============================================================================

/// Cubic-bezier control points `[x1, y1, x2, y2]`
pub type MotionBezier = [f32; 4];

/// A duration-and-easing motion description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionTimingToken {
    /// Duration in milliseconds
    #[serde(rename = "duration")]
    pub duration_ms: u32,
    /// Easing control points; linear when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<MotionBezier>,
    /// Start delay in milliseconds
    #[serde(rename = "delay", skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u32>,
}

/// A physical spring motion description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSpringToken {
    /// Moving mass
    pub mass: f32,
    /// Spring stiffness
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
}

/// A motion token: either a timing curve or a spring model
///
/// The two shapes are a proper sum type; consumers match exhaustively
/// instead of sniffing for a `duration` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MotionToken {
    /// Duration + easing curve
    Timing(MotionTimingToken),
    /// Mass/stiffness/damping spring
    Spring(MotionSpringToken),
}

impl MotionToken {
    /// Create a timing token without delay
    pub fn timing(duration_ms: u32, easing: MotionBezier) -> Self {
        MotionToken::Timing(MotionTimingToken {
            duration_ms,
            easing: Some(easing),
            delay_ms: None,
        })
    }

    /// Create a spring token
    pub fn spring(mass: f32, stiffness: f32, damping: f32) -> Self {
        MotionToken::Spring(MotionSpringToken {
            mass,
            stiffness,
            damping,
        })
    }

    /// Whether this token is the spring variant
    pub fn is_spring(&self) -> bool {
        matches!(self, MotionToken::Spring(_))
    }
}

/// A border specification referencing a color token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderToken {
    /// Border width in (possibly fractional) pixels
    pub width: f32,
    /// Reference to a color token
    pub color: ColorTokenName,
}

/// Shadow offset in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal offset
    pub width: f32,
    /// Vertical offset
    pub height: f32,
}

/// A shadow specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowToken {
    /// Shadow color literal
    pub color: String,
    /// Offset in pixels
    pub offset: ShadowOffset,
    /// Blur radius in pixels
    pub radius: f32,
    /// Shadow opacity in `[0, 1]`
    pub opacity: f32,
    /// Android elevation
    pub elevation: u32,
}

// =============================================================================
// Registry
// =============================================================================

/// Errors raised when a token table fails validation
#[derive(Debug, thiserror::Error)]
pub enum TokenTableError {
    /// A name enum variant has no entry in its table
    #[error("missing {category} token: {name}")]
    MissingToken {
        /// Token category ("typography", "color", ...)
        category: &'static str,
        /// The absent token name
        name: String,
    },
    /// A token carries a value outside its legal range
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// The offending token name
        name: String,
        /// What was wrong with it
        reason: String,
    },
}

/// The immutable design-token registry
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    /// Typography styles by name
    pub typography: HashMap<TypographyTokenName, TypographyToken>,
    /// Color literals by name
    pub colors: HashMap<ColorTokenName, String>,
    /// Spacing steps by name, in pixels
    pub spacing: HashMap<SpacingTokenName, u32>,
    /// Border specifications by name
    pub borders: HashMap<BorderTokenName, BorderToken>,
    /// Shadow specifications by name
    pub shadows: HashMap<ShadowTokenName, ShadowToken>,
    /// Motion descriptions by name
    pub motion: HashMap<MotionTokenName, MotionToken>,
}

impl DesignTokens {
    /// The Rovrov token table
    pub fn rovrov() -> Self {
        let mut typography = HashMap::new();
        typography.insert(
            TypographyTokenName::Hero,
            TypographyToken {
                font_family: font_references::inter::ULTRA_LIGHT.to_string(),
                font_family_fallback: vec![font_references::noto_sans_jp::LIGHT.to_string()],
                font_size: 48.0,
                line_height: 56.0,
                font_weight: FontWeight::ExtraLight,
                letter_spacing: Some(-0.5),
                color: ColorTokenName::TextTitle,
            },
        );
        typography.insert(
            TypographyTokenName::Display,
            TypographyToken {
                font_family: font_references::inter::ULTRA_LIGHT.to_string(),
                font_family_fallback: vec![font_references::noto_sans_jp::LIGHT.to_string()],
                font_size: 32.0,
                line_height: 40.0,
                font_weight: FontWeight::ExtraLight,
                letter_spacing: Some(-0.5),
                color: ColorTokenName::TextTitle,
            },
        );
        typography.insert(
            TypographyTokenName::Title,
            TypographyToken {
                font_family: font_references::inter::LIGHT.to_string(),
                font_family_fallback: vec![font_references::noto_sans_jp::LIGHT.to_string()],
                font_size: 24.0,
                line_height: 32.0,
                font_weight: FontWeight::Light,
                letter_spacing: Some(-0.25),
                color: ColorTokenName::TextTitle,
            },
        );
        typography.insert(
            TypographyTokenName::Body,
            TypographyToken {
                font_family: font_references::inter::REGULAR.to_string(),
                font_family_fallback: vec![font_references::noto_sans_jp::REGULAR.to_string()],
                font_size: 16.0,
                line_height: 24.0,
                font_weight: FontWeight::Regular,
                letter_spacing: Some(0.0),
                color: ColorTokenName::TextBody,
            },
        );
        typography.insert(
            TypographyTokenName::Footnote,
            TypographyToken {
                font_family: font_references::inter::LIGHT.to_string(),
                font_family_fallback: vec![font_references::noto_sans_jp::LIGHT.to_string()],
                font_size: 16.0,
                line_height: 24.0,
                font_weight: FontWeight::Light,
                letter_spacing: Some(0.0),
                color: ColorTokenName::TextFoot,
            },
        );

        let mut colors = HashMap::new();
        colors.insert(ColorTokenName::TextTitle, "#3A3A3A".to_string());
        colors.insert(ColorTokenName::TextBody, "#666666".to_string());
        colors.insert(
            ColorTokenName::TextFoot,
            "rgba(138, 145, 152, 0.7)".to_string(),
        );
        colors.insert(ColorTokenName::AccentPrimary, "#0D55FF".to_string());
        colors.insert(ColorTokenName::AccentMuted, "#9DB4FF".to_string());
        colors.insert(
            ColorTokenName::IconDefault,
            "rgba(138, 145, 152, 0.7)".to_string(),
        );
        colors.insert(ColorTokenName::IconActive, "#3A3A3A".to_string());
        colors.insert(
            ColorTokenName::SurfaceBase,
            "rgba(248, 250, 255, 0.96)".to_string(),
        );
        colors.insert(
            ColorTokenName::SurfaceGlass,
            "rgba(255, 255, 255, 0.72)".to_string(),
        );
        colors.insert(
            ColorTokenName::SurfaceElevated,
            "rgba(255, 255, 255, 0.84)".to_string(),
        );
        colors.insert(
            ColorTokenName::BorderHairline,
            "rgba(15, 23, 42, 0.18)".to_string(),
        );

        let spacing = SpacingTokenName::all()
            .iter()
            .map(|name| (*name, name.pixels()))
            .collect();

        let mut borders = HashMap::new();
        borders.insert(
            BorderTokenName::Hairline,
            BorderToken {
                width: 0.3,
                color: ColorTokenName::BorderHairline,
            },
        );

        let mut shadows = HashMap::new();
        shadows.insert(
            ShadowTokenName::Soft,
            ShadowToken {
                color: "rgba(15, 23, 42, 0.18)".to_string(),
                offset: ShadowOffset {
                    width: 0.0,
                    height: 12.0,
                },
                radius: 24.0,
                opacity: 0.18,
                elevation: 20,
            },
        );

        let mut motion = HashMap::new();
        motion.insert(
            MotionTokenName::Tap,
            MotionToken::timing(80, [0.2, 0.0, 0.38, 0.9]),
        );
        motion.insert(
            MotionTokenName::Micro,
            MotionToken::timing(160, [0.2, 0.0, 0.38, 0.9]),
        );
        motion.insert(
            MotionTokenName::Content,
            MotionToken::timing(260, [0.0, 0.0, 0.2, 1.0]),
        );
        motion.insert(
            MotionTokenName::Hero,
            MotionToken::spring(1.0, 180.0, 24.0),
        );

        DesignTokens {
            typography,
            colors,
            spacing,
            borders,
            shadows,
            motion,
        }
    }

    /// Look up a color literal
    pub fn color(&self, name: ColorTokenName) -> &str {
        self.colors
            .get(&name)
            .expect("Color table covers every name")
    }

    /// Look up a typography token
    pub fn typography(&self, name: TypographyTokenName) -> &TypographyToken {
        self.typography
            .get(&name)
            .expect("Typography table covers every name")
    }

    /// Look up a spacing step in pixels
    pub fn spacing(&self, name: SpacingTokenName) -> f32 {
        *self
            .spacing
            .get(&name)
            .expect("Spacing table covers every name") as f32
    }

    /// Look up a border token
    pub fn border(&self, name: BorderTokenName) -> &BorderToken {
        self.borders
            .get(&name)
            .expect("Border table covers every name")
    }

    /// Look up a shadow token
    pub fn shadow(&self, name: ShadowTokenName) -> &ShadowToken {
        self.shadows
            .get(&name)
            .expect("Shadow table covers every name")
    }

    /// Look up a motion token
    pub fn motion(&self, name: MotionTokenName) -> &MotionToken {
        self.motion
            .get(&name)
            .expect("Motion table covers every name")
    }

    /// A typography token with its color reference resolved
    pub fn text_style(&self, name: TypographyTokenName) -> crate::typography::ResolvedTextStyle {
        let token = self.typography(name);
        token.resolve(self.color(token.color))
    }

    /// Check table completeness and value sanity
    ///
    /// Name enums already rule out duplicate names and dangling color
    /// references; this catches hand-edited tables that dropped an entry or
    /// carry out-of-range values.
    pub fn validate(&self) -> Result<(), TokenTableError> {
        for name in TypographyTokenName::all() {
            let token = self.typography.get(&name).ok_or_else(|| {
                TokenTableError::MissingToken {
                    category: "typography",
                    name: name.to_string(),
                }
            })?;
            if token.font_size <= 0.0 || token.line_height <= 0.0 {
                return Err(TokenTableError::InvalidValue {
                    name: name.to_string(),
                    reason: "font size and line height must be positive".to_string(),
                });
            }
        }

        for name in ColorTokenName::all() {
            let value = self
                .colors
                .get(&name)
                .ok_or_else(|| TokenTableError::MissingToken {
                    category: "color",
                    name: name.to_string(),
                })?;
            if value.is_empty() {
                return Err(TokenTableError::InvalidValue {
                    name: name.to_string(),
                    reason: "color literal is empty".to_string(),
                });
            }
        }

        for name in SpacingTokenName::all() {
            if !self.spacing.contains_key(&name) {
                return Err(TokenTableError::MissingToken {
                    category: "spacing",
                    name: name.to_string(),
                });
            }
        }

        for name in MotionTokenName::all() {
            if !self.motion.contains_key(&name) {
                return Err(TokenTableError::MissingToken {
                    category: "motion",
                    name: name.to_string(),
                });
            }
        }

        if !self.borders.contains_key(&BorderTokenName::Hairline) {
            return Err(TokenTableError::MissingToken {
                category: "border",
                name: BorderTokenName::Hairline.to_string(),
            });
        }

        for (name, shadow) in &self.shadows {
            if !(0.0..=1.0).contains(&shadow.opacity) {
                return Err(TokenTableError::InvalidValue {
                    name: name.to_string(),
                    reason: "opacity must be within [0, 1]".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self::rovrov()
    }
}
