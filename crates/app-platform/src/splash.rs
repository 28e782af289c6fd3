//! Splash-screen control
//!
//! The app shell keeps the splash screen up until fonts settle, then hides
//! it. Both calls race the host's own lifecycle (the splash may already be
//! hidden), so failures are swallowed and logged.

use thiserror::Error;

/// Errors a splash-screen controller may report
#[derive(Debug, Error)]
pub enum SplashError {
    /// The splash screen is not controllable in this state
    #[error("splash screen unavailable: {0}")]
    Unavailable(String),
}

/// A host splash-screen controller
#[cfg_attr(test, mockall::automock)]
pub trait SplashScreen: Send + Sync {
    /// Keep the splash visible past the default auto-hide point
    fn prevent_auto_hide(&self) -> Result<(), SplashError>;
    /// Hide the splash screen
    fn hide(&self) -> Result<(), SplashError>;
}

/// Controller for hosts without a splash screen
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSplash;

impl SplashScreen for NoopSplash {
    fn prevent_auto_hide(&self) -> Result<(), SplashError> {
        Ok(())
    }

    fn hide(&self) -> Result<(), SplashError> {
        Ok(())
    }
}

/// Keep the splash up, swallowing any failure (it may already be hidden)
pub fn prevent_auto_hide_quietly(splash: &dyn SplashScreen) {
    if let Err(err) = splash.prevent_auto_hide() {
        tracing::debug!(%err, "splash prevent_auto_hide failed");
    }
}

/// Hide the splash, swallowing any failure
pub fn hide_quietly(splash: &dyn SplashScreen) {
    if let Err(err) = splash.hide() {
        tracing::debug!(%err, "splash hide failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_controller_succeeds() {
        assert!(NoopSplash.prevent_auto_hide().is_ok());
        assert!(NoopSplash.hide().is_ok());
    }

    #[test]
    fn test_quiet_wrappers_swallow_failure() {
        let mut splash = MockSplashScreen::new();
        splash
            .expect_prevent_auto_hide()
            .returning(|| Err(SplashError::Unavailable("already hidden".to_string())));
        splash
            .expect_hide()
            .returning(|| Err(SplashError::Unavailable("already hidden".to_string())));

        // Neither call may panic or propagate.
        prevent_auto_hide_quietly(&splash);
        hide_quietly(&splash);
    }

    #[test]
    fn test_hide_quietly_calls_through() {
        let mut splash = MockSplashScreen::new();
        splash.expect_hide().times(1).returning(|| Ok(()));
        hide_quietly(&splash);
    }
}
