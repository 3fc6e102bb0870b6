//! Fixed geography and camera spans for the screen.
//! Keeping them in a single place makes the catalog and the camera agree.

use crate::core::geo::LatLng;

/// San Francisco city center, the reference point for every distance shown.
pub const CITY_CENTER: LatLng = LatLng::new(37.7749, -122.4194);

/// Display name of the reference city.
pub const CITY_NAME: &str = "San Francisco";

/// Title overlaid at the top of the map.
pub const SCREEN_TITLE: &str = "San Francisco / California";

/// Square span (meters) of the city-wide camera set when the screen appears.
pub const WIDE_REGION_METERS: f64 = 30_000.0;

/// Square span (meters) of the camera after selecting a point of interest.
pub const FOCUS_REGION_METERS: f64 = 800.0;

/// Square span (meters) of the close-up map inside the detail sheet.
pub const DETAIL_REGION_METERS: f64 = 500.0;

/// Default square tile size in pixels for the Web Mercator pixel space.
pub const TILE_SIZE: f64 = 256.0;

/// Meters spanned by one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Web Mercator latitude limit.
pub const MAX_LATITUDE: f64 = 85.0511287798;

pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 20.0;
