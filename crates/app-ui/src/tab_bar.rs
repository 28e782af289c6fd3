//! Split tab bar
//!
//! The floating bar at the bottom of every tab screen: a glass pill with
//! the four navigation tabs on the left and a circular compose button
//! beside it. This module computes a serializable layout from the route
//! list, the token registry, and the shared visibility value, and resolves
//! press gestures into actions for the host to perform. The bar itself
//! owns no scroll state; it only follows [`TabBarVisibility`].

use std::sync::Arc;

use app_state::tab_bar::{translate_y, TabBarVisibility};
use serde::{Deserialize, Serialize};

use crate::design_system::DesignSystem;
use crate::icons::{tab_icon, IconDescription, TabIconKey, TAB_ICON_SIZE};
use crate::navigation::{NavigationTab, TabRouteState, POST_ROUTE};
use crate::tokens::{
    BorderTokenName, ColorTokenName, DesignTokens, ShadowToken, ShadowTokenName, SpacingTokenName,
    TypographyTokenName,
};

/// Left-group route order; routes missing from the router are skipped
pub const LEFT_ROUTE_ORDER: [&str; 4] = ["index", "map", "notifications", "account"];

/// Tab label font size (smaller than the footnote token it borrows from)
const TAB_LABEL_FONT_SIZE: f32 = 12.0;

/// Compose button diameter in pixels
const POST_BUTTON_SIZE: f32 = 64.0;

/// Haptic feedback the host should play for a press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticCue {
    /// Light impact (tab switch)
    Light,
    /// Medium impact (compose)
    Medium,
}

/// Result of resolving a press gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabPressAction {
    /// Pressed the focused tab: nothing to do
    None,
    /// Navigate to a route, optionally playing a haptic first
    Navigate {
        /// Route name or path to navigate to
        route: String,
        /// Haptic to play before navigating
        haptic: Option<HapticCue>,
    },
}

/// Long-press signal re-emitted to the host router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabLongPress {
    /// Key of the pressed route
    pub target_key: String,
}

// =============================================================================
// Layout
// =============================================================================

/// Styling of the glass pill wrapping the tab group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabGroupStyle {
    /// Pill background color
    pub background: String,
    /// Hairline border color
    pub border_color: String,
    /// Hairline border width
    pub border_width: f32,
    /// Vertical padding inside the pill
    pub padding_vertical: f32,
    /// Horizontal padding inside the pill
    pub padding_horizontal: f32,
    /// Gap between tab buttons
    pub gap: f32,
    /// Pill corner radius
    pub corner_radius: f32,
    /// Card shadow
    pub shadow: ShadowToken,
}

/// One tab button in the left group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabButtonLayout {
    /// Route key this button navigates to
    pub key: String,
    /// Label under the icon
    pub label: String,
    /// Whether this tab is focused
    pub focused: bool,
    /// Icon to draw
    pub icon: IconDescription,
    /// Label color literal
    pub label_color: String,
    /// Label font family (footnote token family)
    pub label_font_family: String,
    /// Label font size
    pub label_font_size: f32,
    /// Label letter spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_letter_spacing: Option<f32>,
    /// Accessibility label passed through from the route options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Vertical padding of the button
    pub padding_vertical: f32,
    /// Minimum button width
    pub min_width: f32,
}

/// The circular compose button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostButtonLayout {
    /// Button background color
    pub background: String,
    /// Hairline border color
    pub border_color: String,
    /// Hairline border width
    pub border_width: f32,
    /// Button diameter
    pub size: f32,
    /// Corner radius (half the diameter)
    pub corner_radius: f32,
    /// Icon to draw
    pub icon: IconDescription,
    /// Card shadow
    pub shadow: ShadowToken,
    /// Fixed accessibility label
    pub accessibility_label: String,
}

/// Complete serializable bar layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitTabBarLayout {
    /// Vertical offset from the animated visibility value
    pub translate_y: f32,
    /// Container bottom padding (safe-area inset + vertical inset)
    pub bottom_padding: f32,
    /// Container horizontal padding
    pub horizontal_padding: f32,
    /// Gap between the tab group and the compose button
    pub outer_gap: f32,
    /// Glass pill styling
    pub group: TabGroupStyle,
    /// Left-group buttons in bar order
    pub tabs: Vec<TabButtonLayout>,
    /// Compose button
    pub post_button: PostButtonLayout,
}

/// The split tab bar component
///
/// Holds the injected design system and the shared visibility controller;
/// both are handed in by the app shell.
#[derive(Debug, Clone)]
pub struct SplitTabBar {
    design: DesignSystem,
    visibility: Arc<TabBarVisibility>,
}

impl SplitTabBar {
    /// Create the bar over the shared design system and controller
    pub fn new(design: DesignSystem, visibility: Arc<TabBarVisibility>) -> Self {
        SplitTabBar { design, visibility }
    }

    /// The shared visibility controller
    pub fn visibility(&self) -> &Arc<TabBarVisibility> {
        &self.visibility
    }

    /// Compute the layout for the current visibility value
    pub fn layout(&self, routes: &TabRouteState, bottom_inset: f32) -> SplitTabBarLayout {
        split_tab_bar_layout(
            self.design.tokens(),
            routes,
            self.visibility.value(),
            bottom_inset,
        )
    }
}

/// Compute the bar layout from explicit inputs
pub fn split_tab_bar_layout(
    tokens: &DesignTokens,
    routes: &TabRouteState,
    visibility_value: f32,
    bottom_inset: f32,
) -> SplitTabBarLayout {
    let border = tokens.border(BorderTokenName::Hairline);
    let border_color = tokens.color(border.color).to_string();
    let shadow = tokens.shadow(ShadowTokenName::Soft).clone();
    let label_token = tokens.typography(TypographyTokenName::Footnote);

    let tabs = LEFT_ROUTE_ORDER
        .iter()
        .filter_map(|name| routes.route_by_name(name))
        .map(|route| {
            let focused = routes.is_focused(&route.key);
            let icon_key = NavigationTab::from_route_name(&route.name)
                .map(|tab| tab.icon())
                .unwrap_or(TabIconKey::Timeline);
            let icon_color = if focused {
                tokens.color(ColorTokenName::IconActive)
            } else {
                tokens.color(ColorTokenName::IconDefault)
            };
            let label_color = if focused {
                tokens.color(ColorTokenName::TextTitle)
            } else {
                tokens.color(ColorTokenName::TextBody)
            };

            TabButtonLayout {
                key: route.key.clone(),
                label: route.label(),
                focused,
                icon: tab_icon(icon_key, focused, icon_color, TAB_ICON_SIZE),
                label_color: label_color.to_string(),
                label_font_family: label_token.font_family.clone(),
                label_font_size: TAB_LABEL_FONT_SIZE,
                label_letter_spacing: label_token.letter_spacing,
                accessibility_label: route.accessibility_label.clone(),
                padding_vertical: tokens.spacing(SpacingTokenName::Space4),
                min_width: 64.0,
            }
        })
        .collect();

    SplitTabBarLayout {
        translate_y: translate_y(visibility_value),
        bottom_padding: bottom_inset + tokens.spacing(SpacingTokenName::Space16),
        horizontal_padding: tokens.spacing(SpacingTokenName::Space24),
        outer_gap: tokens.spacing(SpacingTokenName::Space16),
        group: TabGroupStyle {
            background: tokens.color(ColorTokenName::SurfaceGlass).to_string(),
            border_color: border_color.clone(),
            border_width: border.width,
            padding_vertical: tokens.spacing(SpacingTokenName::Space12),
            padding_horizontal: tokens.spacing(SpacingTokenName::Space12),
            gap: tokens.spacing(SpacingTokenName::Space12),
            corner_radius: 999.0,
            shadow: shadow.clone(),
        },
        tabs,
        post_button: PostButtonLayout {
            background: tokens.color(ColorTokenName::SurfaceElevated).to_string(),
            border_color,
            border_width: border.width,
            size: POST_BUTTON_SIZE,
            corner_radius: POST_BUTTON_SIZE / 2.0,
            icon: tab_icon(
                TabIconKey::Post,
                false,
                tokens.color(ColorTokenName::AccentPrimary),
                32.0,
            ),
            shadow,
            accessibility_label: "Create a new post".to_string(),
        },
    }
}

// =============================================================================
// Gestures
// =============================================================================

/// Resolve a tab button press
///
/// Pressing the focused tab does nothing. Pressing any other tab navigates
/// to it, with a light haptic cue on iOS.
pub fn handle_tab_press(routes: &TabRouteState, key: &str, ios: bool) -> TabPressAction {
    let Some(route) = routes.routes.iter().find(|route| route.key == key) else {
        return TabPressAction::None;
    };

    if routes.is_focused(key) {
        return TabPressAction::None;
    }

    TabPressAction::Navigate {
        route: route.name.clone(),
        haptic: ios.then_some(HapticCue::Light),
    }
}

/// Resolve a compose button press: always navigates to the modal route
pub fn handle_post_press(ios: bool) -> TabPressAction {
    TabPressAction::Navigate {
        route: POST_ROUTE.to_string(),
        haptic: ios.then_some(HapticCue::Medium),
    }
}

/// Resolve a long press into the signal re-emitted to the router
pub fn handle_tab_long_press(key: &str) -> TabLongPress {
    TabLongPress {
        target_key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::tab_bar::HIDDEN_TRANSLATE_Y;

    fn tokens() -> DesignTokens {
        DesignTokens::rovrov()
    }

    #[test]
    fn test_layout_orders_left_tabs() {
        let layout = split_tab_bar_layout(&tokens(), &TabRouteState::rovrov_default(), 0.0, 0.0);
        let labels: Vec<_> = layout.tabs.iter().map(|tab| tab.label.as_str()).collect();
        assert_eq!(labels, ["TL", "Map", "Notice", "Account"]);
    }

    #[test]
    fn test_layout_skips_unregistered_routes() {
        let mut routes = TabRouteState::rovrov_default();
        routes.routes.retain(|route| route.name != "map");

        let layout = split_tab_bar_layout(&tokens(), &routes, 0.0, 0.0);
        assert_eq!(layout.tabs.len(), 3);
        assert!(layout.tabs.iter().all(|tab| tab.label != "Map"));
    }

    #[test]
    fn test_focused_tab_styling() {
        let tokens = tokens();
        let routes = TabRouteState::rovrov_default();
        let layout = split_tab_bar_layout(&tokens, &routes, 0.0, 0.0);

        let focused = &layout.tabs[0];
        assert!(focused.focused);
        assert_eq!(focused.icon.glyph, "layout-2-fill");
        assert_eq!(focused.icon.color, "#3A3A3A");
        assert_eq!(focused.label_color, "#3A3A3A");

        let resting = &layout.tabs[1];
        assert!(!resting.focused);
        assert_eq!(resting.icon.glyph, "map-line");
        assert_eq!(resting.icon.color, "rgba(138, 145, 152, 0.7)");
        assert_eq!(resting.label_color, "#666666");
    }

    #[test]
    fn test_layout_translate_y_follows_visibility() {
        let tokens = tokens();
        let routes = TabRouteState::rovrov_default();

        let shown = split_tab_bar_layout(&tokens, &routes, 0.0, 0.0);
        assert_eq!(shown.translate_y, 0.0);

        let hidden = split_tab_bar_layout(&tokens, &routes, 1.0, 0.0);
        assert_eq!(hidden.translate_y, HIDDEN_TRANSLATE_Y);
    }

    #[test]
    fn test_layout_insets_and_surfaces() {
        let layout = split_tab_bar_layout(&tokens(), &TabRouteState::rovrov_default(), 0.0, 34.0);

        assert_eq!(layout.bottom_padding, 34.0 + 16.0);
        assert_eq!(layout.horizontal_padding, 24.0);
        assert_eq!(layout.group.background, "rgba(255, 255, 255, 0.72)");
        assert_eq!(layout.group.border_width, 0.3);
        assert_eq!(layout.post_button.background, "rgba(255, 255, 255, 0.84)");
        assert_eq!(layout.post_button.icon.color, "#0D55FF");
        assert_eq!(layout.post_button.corner_radius, 32.0);
    }

    #[test]
    fn test_press_on_focused_tab_is_noop() {
        let routes = TabRouteState::rovrov_default();
        assert_eq!(handle_tab_press(&routes, "index-key", true), TabPressAction::None);
    }

    #[test]
    fn test_press_on_other_tab_navigates_with_ios_haptic() {
        let routes = TabRouteState::rovrov_default();

        assert_eq!(
            handle_tab_press(&routes, "map-key", true),
            TabPressAction::Navigate {
                route: "map".to_string(),
                haptic: Some(HapticCue::Light),
            }
        );

        // No haptic cue off iOS.
        assert_eq!(
            handle_tab_press(&routes, "map-key", false),
            TabPressAction::Navigate {
                route: "map".to_string(),
                haptic: None,
            }
        );
    }

    #[test]
    fn test_press_on_unknown_key_is_noop() {
        let routes = TabRouteState::rovrov_default();
        assert_eq!(handle_tab_press(&routes, "missing", true), TabPressAction::None);
    }

    #[test]
    fn test_post_press_opens_modal() {
        assert_eq!(
            handle_post_press(true),
            TabPressAction::Navigate {
                route: "/modal".to_string(),
                haptic: Some(HapticCue::Medium),
            }
        );
    }

    #[test]
    fn test_long_press_signal() {
        let signal = handle_tab_long_press("map-key");
        assert_eq!(signal.target_key, "map-key");
    }

    #[tokio::test(start_paused = true)]
    async fn test_component_layout_samples_shared_controller() {
        use app_state::tab_bar::{ANIMATION_DELAY, SHOW_HIDE_DURATION};
        use std::time::Duration;

        let visibility = Arc::new(TabBarVisibility::new());
        let bar = SplitTabBar::new(DesignSystem::new(), Arc::clone(&visibility));
        let routes = TabRouteState::rovrov_default();

        assert_eq!(bar.layout(&routes, 0.0).translate_y, 0.0);

        visibility.hide();
        tokio::time::sleep(ANIMATION_DELAY + SHOW_HIDE_DURATION + Duration::from_millis(50)).await;

        assert_eq!(bar.layout(&routes, 0.0).translate_y, HIDDEN_TRANSLATE_Y);
    }
}
