//! Content models for Rovrov
//!
//! This crate provides the data types rendered by the screen layer together
//! with the in-memory sample content the app ships with. There is no
//! networking or persistence behind these types; every screen renders
//! fixtures defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod map;
pub mod notifications;
pub mod timeline;

pub use account::{sample_quick_actions, ProfileSnapshot, QuickAction};
pub use map::{sample_suggested_pins, MapPin};
pub use notifications::{sample_notices, Notice};
pub use timeline::{sample_cafe_shots, sample_timeline_cards, CafeShot, TimelineCard};
