use crate::core::constants::{MAX_LATITUDE, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};
use crate::core::geo::{LatLng, LatLngBounds, Point};
use crate::core::region::{CameraPosition, CoordinateRegion};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The drawn view of the map: center, fractional zoom and pixel size.
///
/// A [`CameraPosition`] says what the user should see; a `Viewport` is that
/// request resolved against the size of the widget it is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center: Self::clamp_center(center),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size,
        }
    }

    /// Viewport showing `region` inside a widget of `size` pixels
    pub fn for_region(region: &CoordinateRegion, size: Point) -> Self {
        let mut viewport = Self::new(region.center, MIN_ZOOM, size);
        viewport.fit_bounds(&region.bounds(), 0.0);
        viewport.center = Self::clamp_center(region.center);
        viewport
    }

    /// Resolves a camera. `Automatic` frames `content` (the annotations) with
    /// some padding, or the whole world when there is no content.
    pub fn for_camera(camera: &CameraPosition, content: Option<&LatLngBounds>, size: Point) -> Self {
        match camera {
            CameraPosition::Region(region) => Self::for_region(region, size),
            CameraPosition::Automatic => match content {
                Some(bounds) => {
                    let mut viewport = Self::new(bounds.center(), MIN_ZOOM, size);
                    viewport.fit_bounds(bounds, 40.0);
                    viewport
                }
                None => Self::new(LatLng::default(), MIN_ZOOM, size),
            },
        }
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2_f64.powf(self.zoom)
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    /// (Web Mercator, EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let world = TILE_SIZE * 2_f64.powf(z);

        let lat = LatLng::clamp_lat(lat_lng.lat).to_radians();
        let x = (lat_lng.lng + 180.0) / 360.0;
        let y = (1.0 - (PI / 4.0 + lat / 2.0).tan().ln() / PI) / 2.0;

        Point::new(x * world, y * world)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let world = TILE_SIZE * 2_f64.powf(z);

        let lng = pixel.x / world * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * pixel.y / world);
        let lat = n.sinh().atan().to_degrees();

        LatLng::new(lat, lng)
    }

    /// Converts a geographical coordinate to pixel coordinates relative to
    /// the top-left corner of the viewport
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let origin = self.project(&self.center, None);
        self.project(lat_lng, None)
            .subtract(&origin)
            .add(&self.size.multiply(0.5))
    }

    /// Converts viewport pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let origin = self.project(&self.center, None);
        let world = pixel.subtract(&self.size.multiply(0.5)).add(&origin);
        self.unproject(&world, None)
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let nw = self.pixel_to_lat_lng(&Point::new(0.0, 0.0));
        let se = self.pixel_to_lat_lng(&self.size);

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Centers on `bounds` and picks the largest (fractional) zoom at which
    /// they fit inside the viewport minus `padding` pixels on every side
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: f64) {
        self.center = Self::clamp_center(bounds.center());

        let available = Point::new(
            (self.size.x - 2.0 * padding).max(1.0),
            (self.size.y - 2.0 * padding).max(1.0),
        );

        let nw = self.project(
            &LatLng::new(bounds.north_east.lat, bounds.south_west.lng),
            Some(0.0),
        );
        let se = self.project(
            &LatLng::new(bounds.south_west.lat, bounds.north_east.lng),
            Some(0.0),
        );

        let width = (se.x - nw.x).abs();
        let height = (se.y - nw.y).abs();

        let zoom_x = if width > 0.0 { (available.x / width).log2() } else { MAX_ZOOM };
        let zoom_y = if height > 0.0 { (available.y / height).log2() } else { MAX_ZOOM };

        self.zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Clamps center to world bounds
    fn clamp_center(center: LatLng) -> LatLng {
        LatLng::new(
            center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
            center.lng.clamp(-180.0, 180.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}
