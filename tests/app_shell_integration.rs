//! App Shell Integration Tests
//!
//! End-to-end checks across the workspace crates: boot sequence with the
//! splash screen, the shared tab-bar controller spanning screens, press
//! gestures resolving into navigation and haptics, and the token renderer
//! observed through the preview screen.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use app_platform::{HapticEngine, HapticError, ImpactStyle, NoopSplash, SplashError, SplashScreen};
use app_state::tab_bar::{
    ScrollEvent, TabBarState, ANIMATION_DELAY, HIDDEN_TRANSLATE_Y, SHOW_HIDE_DURATION,
};
use app_ui::render::{render_token_value, TokenValue};
use app_ui::tab_bar::{handle_tab_press, HapticCue, TabPressAction};
use app_ui::navigation::NavigationTab;
use rovrov::{perform_haptic, App, FontLoadState};

/// Splash controller that counts calls
#[derive(Default)]
struct RecordingSplash {
    prevents: AtomicUsize,
    hides: AtomicUsize,
}

impl SplashScreen for RecordingSplash {
    fn prevent_auto_hide(&self) -> Result<(), SplashError> {
        self.prevents.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn hide(&self) -> Result<(), SplashError> {
        self.hides.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Haptic engine that records every impact
#[derive(Default)]
struct RecordingHaptics {
    impacts: Mutex<Vec<ImpactStyle>>,
}

impl HapticEngine for RecordingHaptics {
    fn impact(&self, style: ImpactStyle) -> Result<(), HapticError> {
        self.impacts.lock().unwrap().push(style);
        Ok(())
    }
}

/// Sleep far enough past delay + duration for any animation to finish
async fn settle() {
    tokio::time::sleep(ANIMATION_DELAY + SHOW_HIDE_DURATION + Duration::from_millis(50)).await;
}

#[test]
fn test_boot_holds_splash_until_fonts_settle() {
    let splash = RecordingSplash::default();
    let mut app = App::new(&splash);

    assert_eq!(splash.prevents.load(Ordering::SeqCst), 1);
    assert_eq!(splash.hides.load(Ordering::SeqCst), 0);
    assert!(!app.ready_to_render());

    app.set_font_state(FontLoadState::Ready, &splash);
    assert_eq!(splash.hides.load(Ordering::SeqCst), 1);
    assert!(app.ready_to_render());
}

#[test]
fn test_font_error_still_hides_splash() {
    let splash = RecordingSplash::default();
    let mut app = App::new(&splash);

    app.set_font_state(FontLoadState::Error, &splash);
    assert_eq!(splash.hides.load(Ordering::SeqCst), 1);
    assert!(app.ready_to_render());
}

#[tokio::test(start_paused = true)]
async fn test_scrolling_one_screen_hides_the_bar_everywhere() {
    let app = App::new(&NoopSplash);
    let mut timeline = app.timeline_screen();

    // Scroll the timeline down past the hysteresis band.
    timeline.on_scroll(&ScrollEvent::with_offset_y(90.0));
    assert_eq!(app.tab_bar_visibility().state(), TabBarState::Hidden);
    settle().await;

    // The bar component (owned at the shell level) followed the animation.
    let layout = app.tab_bar().layout(app.routes(), 0.0);
    assert_eq!(layout.translate_y, HIDDEN_TRANSLATE_Y);

    // A different screen talks to the same controller: focusing it reveals
    // the bar again for everyone.
    let map = app.map_screen();
    map.on_focus();
    assert_eq!(app.tab_bar_visibility().state(), TabBarState::Shown);
    settle().await;

    let layout = app.tab_bar().layout(app.routes(), 0.0);
    assert_eq!(layout.translate_y, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_blur_never_leaves_the_bar_hidden() {
    let app = App::new(&NoopSplash);
    let mut notifications = app.notifications_screen();

    notifications.on_scroll(&ScrollEvent::with_offset_y(300.0));
    assert_eq!(app.tab_bar_visibility().state(), TabBarState::Hidden);

    // Navigating away blurs the screen before anything else happens.
    notifications.on_blur();
    assert_eq!(app.tab_bar_visibility().state(), TabBarState::Shown);

    settle().await;
    assert_eq!(app.tab_bar_visibility().value(), 0.0);
}

#[test]
fn test_tab_press_resolves_navigation_and_haptics() {
    let mut app = App::new(&NoopSplash);
    let haptics = RecordingHaptics::default();

    // Pressing an unfocused tab on iOS: navigate with a light impact.
    let action = handle_tab_press(app.routes(), "map-key", true);
    match action {
        TabPressAction::Navigate { route, haptic } => {
            assert_eq!(route, "map");
            assert_eq!(haptic, Some(HapticCue::Light));
            perform_haptic(haptic.unwrap(), &haptics);
        }
        TabPressAction::None => panic!("expected navigation"),
    }
    assert_eq!(*haptics.impacts.lock().unwrap(), vec![ImpactStyle::Light]);

    // After the router lands on the tab, pressing it again is a no-op.
    app.switch_tab(NavigationTab::Map);
    assert_eq!(
        handle_tab_press(app.routes(), "map-key", true),
        TabPressAction::None
    );
}

#[test]
fn test_bar_layout_serializes_for_the_host() -> anyhow::Result<()> {
    let app = App::new(&NoopSplash);
    let layout = app.tab_bar().layout(app.routes(), 34.0);

    let json = serde_json::to_value(&layout)?;
    assert_eq!(json["tabs"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["postButton"]["accessibilityLabel"], "Create a new post");
    assert_eq!(json["bottomPadding"], 50.0);

    Ok(())
}

#[test]
fn test_token_renderer_observed_through_the_preview_screen() {
    let app = App::new(&NoopSplash);
    let preview = app.tokens_preview_screen();
    let model = preview.model();

    // The preview rows are exactly the renderer's output.
    assert_eq!(render_token_value(&TokenValue::Number(16.0)), "16px");
    assert_eq!(
        render_token_value(&TokenValue::from("#3A3A3A")),
        "#3A3A3A"
    );
    assert_eq!(model.color_rows[0].value.text, "#3A3A3A");
    assert_eq!(
        model.motion_lines[0].text,
        "motion-content: 260ms • cubic-bezier(0, 0, 0.2, 1)"
    );
    assert_eq!(
        model.motion_lines[2].text,
        "border-0.3: 0.3px / rgba(15, 23, 42, 0.18)"
    );
}
