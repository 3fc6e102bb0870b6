//! Prelude module for common bucketlist types
//!
//! `use bucketlist::prelude::*;` brings in the screen model and, with the
//! `egui` feature, the view.

pub use crate::core::{
    config::{CameraAnimationConfig, CameraAnimationProfile, MapTheme, ScreenConfig},
    constants::CITY_CENTER,
    geo::{format_kilometers, geodesic_distance, LatLng, LatLngBounds, Point},
    region::{CameraPosition, CoordinateRegion},
    viewport::Viewport,
};

pub use crate::screen::{
    attraction::Attraction,
    catalog::{Catalog, Glyph, PointOfInterest, POINTS_OF_INTEREST},
    controller::MapScreen,
    detail::AttractionDetail,
    events::ScreenEvent,
    state::{Phase, Transition, ViewState},
};

pub use crate::animation::{CameraAnimator, CameraFrame, EasingType};

#[cfg(feature = "egui")]
pub use crate::ui::{MapCanvas, MapScreenView, ScreenStyle};

pub use crate::{MapError, Result};
