//! User interface for Rovrov
//!
//! This crate provides the design system and the headless view layer:
//! design tokens, token rendering, typography, the split tab bar, and the
//! screen view models.
//!
//! # Design System
//!
//! Rovrov's look is translucent surfaces over a pale blue base, light
//! Inter/Noto Sans JP typography, and one blue accent (#0D55FF). All of it
//! is expressed as named tokens in [`tokens::DesignTokens`], built once at
//! startup and injected everywhere via [`design_system::DesignSystem`].
//!
//! # Modules
//!
//! - [`tokens`] - The token registry (typography, color, spacing, border,
//!   shadow, motion)
//! - [`typography`] - Text styles and font references
//! - [`render`] - Token-value formatting for the preview screen
//! - [`design_system`] - The injected provider wrapping the registry
//! - [`icons`] - Tab icon glyph table
//! - [`navigation`] - Tab list and route descriptors read by the tab bar
//! - [`tab_bar`] - The floating split tab bar
//! - [`screens`] - Screen view models
//!
//! # Example
//!
//! ```rust
//! use app_ui::design_system::DesignSystem;
//! use app_ui::tokens::{ColorTokenName, TypographyTokenName};
//!
//! let design = DesignSystem::new();
//! let tokens = design.tokens();
//!
//! assert_eq!(tokens.color(ColorTokenName::AccentPrimary), "#0D55FF");
//! let body = tokens.text_style(TypographyTokenName::Body);
//! assert_eq!(body.color, "#666666");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod design_system;
pub mod icons;
pub mod navigation;
pub mod render;
pub mod screens;
pub mod tab_bar;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use design_system::DesignSystem;

pub use tokens::{
    BorderToken, BorderTokenName, ColorTokenName, DesignTokens, MotionBezier, MotionSpringToken,
    MotionTimingToken, MotionToken, MotionTokenName, ShadowOffset, ShadowToken, ShadowTokenName,
    SpacingTokenName, TokenTableError, TypographyTokenName,
};

pub use typography::{FontWeight, ResolvedTextStyle, TypographyToken, DESIGN_FONT_SOURCES};

pub use render::{
    render_border_token, render_motion_token, render_shadow_token, render_token_value,
    render_token_value_with_colors, TokenValue,
};

pub use icons::{tab_icon, IconDescription, TabIconKey, TAB_ICON_SIZE};

pub use navigation::{NavigationTab, RouteDescriptor, TabRouteState, POST_ROUTE};

pub use tab_bar::{
    handle_post_press, handle_tab_long_press, handle_tab_press, split_tab_bar_layout, HapticCue,
    SplitTabBar, SplitTabBarLayout, TabPressAction,
};

pub use screens::{
    AccountScreen, MapScreen, NotificationsScreen, TimelineScreen, TokensPreviewScreen,
};
