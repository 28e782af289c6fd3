//! Platform side effects for Rovrov
//!
//! Haptic feedback and splash-screen control are host capabilities the UI
//! merely requests. Neither is allowed to fail loudly: a missing vibration
//! motor or an already-hidden splash screen must never crash a view, so
//! every call site goes through the `*_quietly` wrappers that swallow and
//! log errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod haptics;
pub mod splash;

pub use haptics::{impact_quietly, HapticEngine, HapticError, ImpactStyle, NoopHaptics};
pub use splash::{hide_quietly, prevent_auto_hide_quietly, NoopSplash, SplashError, SplashScreen};
