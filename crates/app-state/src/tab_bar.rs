//! Tab-bar visibility controller
//!
//! The floating split tab bar is owned once at the navigation-shell level,
//! while scroll gestures happen inside independently mounted screens. This
//! module provides the shared controller that keeps them synchronized: a
//! single animated scalar in `[0, 1]` (0 = fully shown, 1 = fully hidden),
//! a discrete shown/hidden state machine, and the scroll-delta policy that
//! drives it.
//!
//! One [`TabBarVisibility`] is constructed by the app shell and handed (as
//! an `Arc`) to the tab bar and to every screen's scroll handler. Multiple
//! independent instances would desynchronize the bar across screens, so the
//! controller is always injected, never re-created per screen.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use app_state::tab_bar::{AutoHideScrollHandler, ScrollEvent, TabBarState, TabBarVisibility};
//!
//! #[tokio::main]
//! async fn main() {
//!     let visibility = Arc::new(TabBarVisibility::new());
//!     let mut handler = AutoHideScrollHandler::new(Arc::clone(&visibility));
//!
//!     handler.on_scroll(&ScrollEvent::with_offset_y(120.0));
//!     assert_eq!(visibility.state(), TabBarState::Hidden);
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};

use crate::motion::CubicBezier;

/// Duration of the show/hide animation
pub const SHOW_HIDE_DURATION: Duration = Duration::from_millis(340);

/// Fixed delay before a show/hide animation starts moving
pub const ANIMATION_DELAY: Duration = Duration::from_millis(260);

/// Easing curve for show/hide transitions
pub const VISIBILITY_EASING: CubicBezier = CubicBezier::new(0.2, 0.0, 0.2, 1.0);

/// Scroll deltas within `±SCROLL_HYSTERESIS` px are treated as jitter
pub const SCROLL_HYSTERESIS: f32 = 6.0;

/// Vertical offset of the bar when fully hidden, in pixels
pub const HIDDEN_TRANSLATE_Y: f32 = 160.0;

/// Animation frame interval (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Discrete visibility state of the tab bar
///
/// The state reflects the *intended* target: it flips as soon as a
/// transition is requested, before the animation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabBarState {
    /// Bar visible (value target 0)
    #[default]
    Shown,
    /// Bar slid off-screen (value target 1)
    Hidden,
}

impl TabBarState {
    /// Animated-value target for this state
    pub fn target_value(&self) -> f32 {
        match self {
            TabBarState::Shown => 0.0,
            TabBarState::Hidden => 1.0,
        }
    }
}

/// Events broadcast as animations start and finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// A show/hide animation was scheduled
    AnimationStarted {
        /// State the animation is heading toward
        target: TabBarState,
    },
    /// An animation ran to completion without being interrupted
    AnimationCompleted {
        /// State the animation was heading toward
        target: TabBarState,
    },
}

/// A scheduled animation task, kept so the next transition can cancel it
struct ActiveAnimation {
    id: u64,
    handle: tokio::task::JoinHandle<()>,
}

/// Mutable controller state behind one lock
struct VisibilityInner {
    state: TabBarState,
    active: Option<ActiveAnimation>,
}

/// Shared animated visibility for the tab bar
///
/// Mutations happen on the host event loop in response to scroll and
/// focus/blur callbacks; the animation itself runs as a spawned task that
/// samples the easing curve at frame intervals and publishes through a
/// watch channel. Starting a new animation aborts the previous task
/// outright (last-writer-wins, no queueing).
pub struct TabBarVisibility {
    inner: Mutex<VisibilityInner>,
    value_tx: watch::Sender<f32>,
    events_tx: broadcast::Sender<VisibilityEvent>,
    animation_ids: AtomicU64,
}

impl TabBarVisibility {
    /// Create a controller in the `Shown` state with value 0
    pub fn new() -> Self {
        let (value_tx, _) = watch::channel(0.0);
        let (events_tx, _) = broadcast::channel(16);

        TabBarVisibility {
            inner: Mutex::new(VisibilityInner {
                state: TabBarState::Shown,
                active: None,
            }),
            value_tx,
            events_tx,
            animation_ids: AtomicU64::new(0),
        }
    }

    /// Animate the bar off-screen; no-op if already hidden
    pub fn hide(self: &Arc<Self>) {
        self.run_animation(TabBarState::Hidden);
    }

    /// Animate the bar back on-screen; no-op if already shown
    pub fn show(self: &Arc<Self>) {
        self.run_animation(TabBarState::Shown);
    }

    /// Current animated value in `[0, 1]`
    pub fn value(&self) -> f32 {
        *self.value_tx.borrow()
    }

    /// Current discrete state (the intended target)
    pub fn state(&self) -> TabBarState {
        self.inner.lock().state
    }

    /// Whether an animation task is currently in flight
    pub fn is_animating(&self) -> bool {
        self.inner.lock().active.is_some()
    }

    /// Subscribe to the animated value
    pub fn subscribe_value(&self) -> watch::Receiver<f32> {
        self.value_tx.subscribe()
    }

    /// Subscribe to animation start/completion events
    pub fn subscribe_events(&self) -> broadcast::Receiver<VisibilityEvent> {
        self.events_tx.subscribe()
    }

    fn run_animation(self: &Arc<Self>, next_state: TabBarState) {
        let mut inner = self.inner.lock();
        if inner.state == next_state {
            return;
        }

        // Cancel whatever is in flight; the new transition wins.
        if let Some(active) = inner.active.take() {
            active.handle.abort();
        }

        // State flips now: it tracks the intended target, not progress.
        inner.state = next_state;

        let id = self.animation_ids.fetch_add(1, Ordering::Relaxed);
        let this = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ANIMATION_DELAY).await;

            let from = *this.value_tx.borrow();
            let to = next_state.target_value();
            let started = tokio::time::Instant::now();
            let mut frames = tokio::time::interval(FRAME_INTERVAL);

            loop {
                frames.tick().await;
                let elapsed = started.elapsed();
                if elapsed >= SHOW_HIDE_DURATION {
                    break;
                }
                let progress = elapsed.as_secs_f32() / SHOW_HIDE_DURATION.as_secs_f32();
                let eased = VISIBILITY_EASING.eval(progress);
                // send_replace keeps publishing even with no subscribers.
                this.value_tx.send_replace(from + (to - from) * eased);
            }

            this.value_tx.send_replace(to);

            // Clear the in-flight slot unless a newer animation replaced us.
            {
                let mut inner = this.inner.lock();
                if inner.active.as_ref().map(|a| a.id) == Some(id) {
                    inner.active = None;
                }
            }

            tracing::debug!(state = ?next_state, "tab bar animation completed");
            let _ = this
                .events_tx
                .send(VisibilityEvent::AnimationCompleted { target: next_state });
        });

        inner.active = Some(ActiveAnimation { id, handle });
        drop(inner);

        tracing::debug!(state = ?next_state, "tab bar animation started");
        let _ = self
            .events_tx
            .send(VisibilityEvent::AnimationStarted { target: next_state });
    }
}

impl Default for TabBarVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TabBarVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabBarVisibility")
            .field("state", &self.state())
            .field("value", &self.value())
            .field("is_animating", &self.is_animating())
            .finish()
    }
}

/// Vertical bar offset for an animated value in `[0, 1]`
pub fn translate_y(value: f32) -> f32 {
    value.clamp(0.0, 1.0) * HIDDEN_TRANSLATE_Y
}

// =============================================================================
// Scroll Events
// =============================================================================

/// Content offset reported by a scroll container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentOffset {
    /// Horizontal offset in pixels
    pub x: f32,
    /// Vertical offset in pixels
    pub y: f32,
}

/// A scroll event emitted by the host scroll view
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollEvent {
    /// Current content offset
    pub content_offset: ContentOffset,
}

impl ScrollEvent {
    /// Convenience constructor for a vertical offset
    pub fn with_offset_y(y: f32) -> Self {
        ScrollEvent {
            content_offset: ContentOffset { x: 0.0, y },
        }
    }
}

// =============================================================================
// Auto-Hide Policy
// =============================================================================

/// Callback invoked with each scroll event before the auto-hide policy runs
pub type ExternalScrollCallback = Box<dyn Fn(&ScrollEvent) + Send + Sync>;

/// Per-screen scroll handler that drives the shared visibility controller
///
/// Each scrollable screen owns one handler instance; all handlers share the
/// same [`TabBarVisibility`]. Scrolling down past the hysteresis band hides
/// the bar, scrolling up (or reaching the top) shows it, and focus/blur
/// always force the bar back to shown so navigation never strands it
/// off-screen.
pub struct AutoHideScrollHandler {
    visibility: Arc<TabBarVisibility>,
    last_offset_y: f32,
    on_external_scroll: Option<ExternalScrollCallback>,
}

impl AutoHideScrollHandler {
    /// Create a handler bound to the shared controller
    pub fn new(visibility: Arc<TabBarVisibility>) -> Self {
        AutoHideScrollHandler {
            visibility,
            last_offset_y: 0.0,
            on_external_scroll: None,
        }
    }

    /// Chain an additional scroll observer ahead of the policy
    pub fn with_external_scroll<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ScrollEvent) + Send + Sync + 'static,
    {
        self.on_external_scroll = Some(Box::new(callback));
        self
    }

    /// Handle one scroll event
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        if let Some(callback) = &self.on_external_scroll {
            callback(event);
        }

        let offset_y = event.content_offset.y;
        let delta = offset_y - self.last_offset_y;
        self.last_offset_y = offset_y;

        // At (or rubber-banding above) the top, or a deliberate scroll up.
        if offset_y <= 0.0 || delta < -SCROLL_HYSTERESIS {
            self.visibility.show();
            return;
        }

        if delta > SCROLL_HYSTERESIS {
            self.visibility.hide();
        }
    }

    /// Screen gained focus: the bar must be visible
    pub fn on_focus(&self) {
        self.visibility.show();
    }

    /// Screen lost focus: never leave the bar hidden behind a navigation
    pub fn on_blur(&self) {
        self.visibility.show();
    }

    /// Last observed vertical offset
    pub fn last_offset_y(&self) -> f32 {
        self.last_offset_y
    }

    /// The shared controller this handler drives
    pub fn visibility(&self) -> &Arc<TabBarVisibility> {
        &self.visibility
    }
}

impl std::fmt::Debug for AutoHideScrollHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoHideScrollHandler")
            .field("last_offset_y", &self.last_offset_y)
            .field("has_external_scroll", &self.on_external_scroll.is_some())
            .finish()
    }
}
