//! # BucketList
//!
//! A single-screen map viewer: a map centered on a fixed city, five fixed
//! points of interest drawn as annotations, and a toolbar that flies the
//! camera to a point and opens a detail sheet with its distance from the
//! city center.
//!
//! The camera and the selection live in one [`ViewState`] value owned by
//! [`MapScreen`]; every user action replaces it as a whole.

pub mod animation;
pub mod core;
pub mod screen;
#[cfg(feature = "egui")]
pub mod ui;
pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::ScreenConfig,
    geo::{geodesic_distance, LatLng, LatLngBounds, Point},
    region::{CameraPosition, CoordinateRegion},
    viewport::Viewport,
};

pub use crate::screen::{
    attraction::Attraction,
    catalog::{Catalog, Glyph, PointOfInterest},
    controller::MapScreen,
    detail::AttractionDetail,
    events::ScreenEvent,
    state::{Phase, Transition, ViewState},
};

#[cfg(feature = "egui")]
pub use ui::screen_view::MapScreenView;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid attraction: {0}")]
    InvalidAttraction(String),

    #[error("Unknown attraction: {0}")]
    UnknownAttraction(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
