//! Design-system provider
//!
//! One [`DesignSystem`] is built by the app shell and cloned into every
//! consumer. Cloning shares the same underlying registry, so every screen
//! and the tab bar read identical token values; there is no ambient lookup
//! and no runtime override machinery because the registry never changes.

use crate::tokens::{ColorTokenName, DesignTokens};
use std::sync::Arc;

/// Shared, read-only access to the token registry
#[derive(Debug, Clone)]
pub struct DesignSystem {
    tokens: Arc<DesignTokens>,
}

impl DesignSystem {
    /// Create a provider over the Rovrov token table
    pub fn new() -> Self {
        Self::with_tokens(DesignTokens::rovrov())
    }

    /// Create a provider over an explicit token table
    pub fn with_tokens(tokens: DesignTokens) -> Self {
        DesignSystem {
            tokens: Arc::new(tokens),
        }
    }

    /// The shared registry
    pub fn tokens(&self) -> &Arc<DesignTokens> {
        &self.tokens
    }

    /// Background color of the root surface wrapping the whole UI tree
    pub fn surface_color(&self) -> &str {
        self.tokens.color(ColorTokenName::SurfaceBase)
    }
}

impl Default for DesignSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_registry() {
        let system = DesignSystem::new();
        let clone = system.clone();
        assert!(Arc::ptr_eq(system.tokens(), clone.tokens()));
    }

    #[test]
    fn test_surface_color() {
        let system = DesignSystem::new();
        assert_eq!(system.surface_color(), "rgba(248, 250, 255, 0.96)");
    }

    #[test]
    fn test_default_table_is_valid() {
        let system = DesignSystem::default();
        assert!(system.tokens().validate().is_ok());
    }
}
