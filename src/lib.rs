//! Rovrov application shell
//!
//! Rovrov is a social app for small adventures: a timeline of
//! location-tagged posts, a map of suggested spots, notifications, and an
//! account screen, all sharing one floating split tab bar that hides on
//! scroll.
//!
//! The shell owns the two process-wide singletons — the design system and
//! the tab-bar visibility controller — and injects them into the tab bar
//! and every screen. It also gates first render on font readiness and
//! drives the splash screen, swallowing splash/haptic failures the way a
//! view layer must.
//!
//! # Example
//!
//! ```no_run
//! use rovrov::{App, FontLoadState};
//! use app_platform::NoopSplash;
//!
//! #[tokio::main]
//! async fn main() {
//!     rovrov::init_tracing();
//!
//!     let splash = NoopSplash;
//!     let mut app = App::new(&splash);
//!     assert!(!app.ready_to_render());
//!
//!     app.set_font_state(FontLoadState::Ready, &splash);
//!     assert!(app.ready_to_render());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

use app_platform::{
    hide_quietly, impact_quietly, prevent_auto_hide_quietly, HapticEngine, ImpactStyle,
    SplashScreen,
};
use app_state::tab_bar::TabBarVisibility;
use app_ui::design_system::DesignSystem;
use app_ui::navigation::{NavigationTab, TabRouteState};
use app_ui::screens::{
    AccountScreen, MapScreen, NotificationsScreen, TimelineScreen, TokensPreviewScreen,
};
use app_ui::tab_bar::{HapticCue, SplitTabBar};

/// Font loading status reported by the host font facility
///
/// Render is gated until fonts settle; an error settles the gate too, so a
/// failed font download falls back to system fonts instead of a blank app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontLoadState {
    /// Fonts are still loading; hold the splash screen
    #[default]
    Loading,
    /// All design fonts are available
    Ready,
    /// Loading failed; render with fallbacks
    Error,
}

impl FontLoadState {
    /// Whether the first render may proceed
    pub fn settled(&self) -> bool {
        !matches!(self, FontLoadState::Loading)
    }
}

/// The Rovrov application shell
///
/// Constructed once at process start; everything the screens share flows
/// out of this struct.
pub struct App {
    design: DesignSystem,
    tab_bar_visibility: Arc<TabBarVisibility>,
    tab_bar: SplitTabBar,
    routes: TabRouteState,
    fonts: FontLoadState,
}

impl App {
    /// Boot the shell: build the shared singletons and hold the splash
    pub fn new(splash: &dyn SplashScreen) -> Self {
        prevent_auto_hide_quietly(splash);

        let design = DesignSystem::new();
        debug_assert!(
            design.tokens().validate().is_ok(),
            "shipped token table must validate"
        );

        let tab_bar_visibility = Arc::new(TabBarVisibility::new());
        let tab_bar = SplitTabBar::new(design.clone(), Arc::clone(&tab_bar_visibility));

        tracing::info!("rovrov app shell initialized");

        App {
            design,
            tab_bar_visibility,
            tab_bar,
            routes: TabRouteState::rovrov_default(),
            fonts: FontLoadState::Loading,
        }
    }

    /// Record the font facility's state; hides the splash once settled
    pub fn set_font_state(&mut self, state: FontLoadState, splash: &dyn SplashScreen) {
        self.fonts = state;
        if self.fonts.settled() {
            hide_quietly(splash);
        }
    }

    /// Whether the first render may proceed
    pub fn ready_to_render(&self) -> bool {
        self.fonts.settled()
    }

    /// The shared design system
    pub fn design(&self) -> &DesignSystem {
        &self.design
    }

    /// The shared visibility controller
    pub fn tab_bar_visibility(&self) -> &Arc<TabBarVisibility> {
        &self.tab_bar_visibility
    }

    /// The split tab bar component
    pub fn tab_bar(&self) -> &SplitTabBar {
        &self.tab_bar
    }

    /// Current route list and focus index
    pub fn routes(&self) -> &TabRouteState {
        &self.routes
    }

    /// Focus a tab (the host router performs the actual navigation)
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        if let Some(index) = self
            .routes
            .routes
            .iter()
            .position(|route| route.name == tab.route_name())
        {
            self.routes.index = index;
        }
    }

    /// Build the timeline screen wired to the shared controller
    pub fn timeline_screen(&self) -> TimelineScreen {
        TimelineScreen::new(&self.design, Arc::clone(&self.tab_bar_visibility))
    }

    /// Build the map screen wired to the shared controller
    pub fn map_screen(&self) -> MapScreen {
        MapScreen::new(&self.design, Arc::clone(&self.tab_bar_visibility))
    }

    /// Build the notifications screen wired to the shared controller
    pub fn notifications_screen(&self) -> NotificationsScreen {
        NotificationsScreen::new(&self.design, Arc::clone(&self.tab_bar_visibility))
    }

    /// Build the account screen wired to the shared controller
    pub fn account_screen(&self) -> AccountScreen {
        AccountScreen::new(&self.design, Arc::clone(&self.tab_bar_visibility))
    }

    /// Build the design-token preview screen
    pub fn tokens_preview_screen(&self) -> TokensPreviewScreen {
        TokensPreviewScreen::new(&self.design)
    }
}

/// Play the haptic cue resolved from a tab-bar press
pub fn perform_haptic(cue: HapticCue, engine: &dyn HapticEngine) {
    let style = match cue {
        HapticCue::Light => ImpactStyle::Light,
        HapticCue::Medium => ImpactStyle::Medium,
    };
    impact_quietly(engine, style);
}

/// Install the process-wide tracing subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::NoopSplash;

    #[test]
    fn test_font_state_settling() {
        assert!(!FontLoadState::Loading.settled());
        assert!(FontLoadState::Ready.settled());
        // A font error still unblocks render (system-font fallback).
        assert!(FontLoadState::Error.settled());
    }

    #[test]
    fn test_render_gate() {
        let splash = NoopSplash;
        let mut app = App::new(&splash);

        assert!(!app.ready_to_render());
        app.set_font_state(FontLoadState::Ready, &splash);
        assert!(app.ready_to_render());
    }

    #[test]
    fn test_switch_tab_moves_focus() {
        let splash = NoopSplash;
        let mut app = App::new(&splash);
        assert_eq!(app.routes().index, 0);

        app.switch_tab(NavigationTab::Notifications);
        assert_eq!(app.routes().index, 2);
        assert!(app.routes().is_focused("notifications-key"));
    }

    #[test]
    fn test_screens_and_bar_share_the_singleton() {
        let splash = NoopSplash;
        let app = App::new(&splash);

        assert!(Arc::ptr_eq(
            app.tab_bar().visibility(),
            app.tab_bar_visibility()
        ));
    }
}
