//! Haptic feedback
//!
//! Tab presses play a light impact and the compose button a medium one,
//! on iOS only. The engine itself is host-provided; the UI calls through
//! [`impact_quietly`] so playback failures disappear into the log.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a haptic engine may report
#[derive(Debug, Error)]
pub enum HapticError {
    /// No haptic hardware or the engine is not ready
    #[error("haptic engine unavailable: {0}")]
    Unavailable(String),
    /// The impact could not be played
    #[error("haptic playback failed: {0}")]
    Playback(String),
}

/// Impact feedback strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    /// Light impact (tab switch)
    Light,
    /// Medium impact (compose button)
    Medium,
}

/// A host haptic engine
#[cfg_attr(test, mockall::automock)]
pub trait HapticEngine: Send + Sync {
    /// Play an impact of the given strength
    fn impact(&self, style: ImpactStyle) -> Result<(), HapticError>;
}

/// Engine for platforms without haptics; every impact succeeds silently
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticEngine for NoopHaptics {
    fn impact(&self, _style: ImpactStyle) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Play an impact, swallowing any failure
pub fn impact_quietly(engine: &dyn HapticEngine, style: ImpactStyle) {
    if let Err(err) = engine.impact(style) {
        tracing::debug!(%err, ?style, "haptic impact failed");
    }
}
