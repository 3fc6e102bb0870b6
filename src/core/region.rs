use crate::core::constants::METERS_PER_DEGREE_LAT;
use crate::core::geo::{LatLng, LatLngBounds};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// A rectangular area of the map: a center plus north-south and east-west
/// extents in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRegion {
    pub center: LatLng,
    pub latitudinal_meters: f64,
    pub longitudinal_meters: f64,
}

impl CoordinateRegion {
    /// Creates a region without validation (compile-time constants)
    pub fn new(center: LatLng, latitudinal_meters: f64, longitudinal_meters: f64) -> Self {
        Self {
            center,
            latitudinal_meters,
            longitudinal_meters,
        }
    }

    /// Square region of `meters` x `meters` around `center`
    pub fn square(center: LatLng, meters: f64) -> Self {
        Self::new(center, meters, meters)
    }

    /// Creates a region after checking the center and both spans
    pub fn try_new(center: LatLng, latitudinal_meters: f64, longitudinal_meters: f64) -> Result<Self> {
        let region = Self::new(center, latitudinal_meters, longitudinal_meters);
        region.validate()?;
        Ok(region)
    }

    pub fn validate(&self) -> Result<()> {
        self.center.validate()?;
        for (axis, meters) in [
            ("latitudinal", self.latitudinal_meters),
            ("longitudinal", self.longitudinal_meters),
        ] {
            if !meters.is_finite() || meters <= 0.0 {
                return Err(MapError::InvalidRegion(format!(
                    "{axis} span must be a positive number of meters, got {meters}"
                )));
            }
        }
        Ok(())
    }

    /// Span of the region in degrees (lat, lng).
    ///
    /// Longitude degrees shrink with latitude, so the east-west span is
    /// scaled by `1 / cos(lat)`.
    pub fn span_degrees(&self) -> LatLng {
        let lat_span = self.latitudinal_meters / METERS_PER_DEGREE_LAT;
        let cos_lat = self.center.lat.to_radians().cos().max(1e-6);
        let lng_span = self.longitudinal_meters / (METERS_PER_DEGREE_LAT * cos_lat);
        LatLng::new(lat_span, lng_span)
    }

    /// Geographic bounds covered by the region
    pub fn bounds(&self) -> LatLngBounds {
        let span = self.span_degrees();
        LatLngBounds::from_coords(
            self.center.lat - span.lat / 2.0,
            self.center.lng - span.lng / 2.0,
            self.center.lat + span.lat / 2.0,
            self.center.lng + span.lng / 2.0,
        )
    }
}

/// Where the map camera points.
///
/// `Automatic` leaves framing to the map, which shows every annotation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum CameraPosition {
    #[default]
    Automatic,
    Region(CoordinateRegion),
}

impl CameraPosition {
    pub fn region(&self) -> Option<&CoordinateRegion> {
        match self {
            Self::Automatic => None,
            Self::Region(region) => Some(region),
        }
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, Self::Automatic)
    }

    pub fn center(&self) -> Option<LatLng> {
        self.region().map(|r| r.center)
    }
}

impl From<CoordinateRegion> for CameraPosition {
    fn from(region: CoordinateRegion) -> Self {
        Self::Region(region)
    }
}
