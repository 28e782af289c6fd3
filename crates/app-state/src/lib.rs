//! Shared runtime state for Rovrov
//!
//! This crate owns the state that outlives any single screen: the tab-bar
//! visibility controller (an animated scalar plus a shown/hidden state
//! machine shared by every scrollable screen) and the cubic-bezier motion
//! math that drives it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod motion;
pub mod tab_bar;

pub use motion::CubicBezier;
pub use tab_bar::{
    translate_y, AutoHideScrollHandler, ContentOffset, ScrollEvent, TabBarState, TabBarVisibility,
    VisibilityEvent, ANIMATION_DELAY, HIDDEN_TRANSLATE_Y, SCROLL_HYSTERESIS, SHOW_HIDE_DURATION,
};
