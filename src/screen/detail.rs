use crate::core::config::ScreenConfig;
use crate::core::geo::{format_kilometers, geodesic_distance, LatLng};
use crate::core::region::CoordinateRegion;
use crate::screen::attraction::Attraction;

/// Read-only content of the detail sheet for one attraction
#[derive(Debug, Clone, PartialEq)]
pub struct AttractionDetail {
    attraction: Attraction,
    reference: LatLng,
    reference_name: String,
    map_region: CoordinateRegion,
}

impl AttractionDetail {
    pub fn new(attraction: Attraction, config: &ScreenConfig) -> Self {
        let map_region = config.detail_region(attraction.coordinate());
        Self {
            attraction,
            reference: config.city_center,
            reference_name: config.city_name.clone(),
            map_region,
        }
    }

    pub fn attraction(&self) -> &Attraction {
        &self.attraction
    }

    pub fn name(&self) -> &str {
        self.attraction.name()
    }

    pub fn description(&self) -> &str {
        self.attraction.description()
    }

    /// Close-up region for the sheet's map
    pub fn map_region(&self) -> &CoordinateRegion {
        &self.map_region
    }

    pub fn reference(&self) -> LatLng {
        self.reference
    }

    /// Geodesic distance from the reference point in meters
    pub fn distance_meters(&self) -> f64 {
        geodesic_distance(&self.attraction.coordinate(), &self.reference)
    }

    /// Distance in kilometers with one decimal, `None` if it could not be computed
    pub fn distance_km_text(&self) -> Option<String> {
        format_kilometers(self.distance_meters())
    }

    /// Full line shown under the description; omitted when there is no distance
    pub fn distance_label(&self) -> Option<String> {
        self.distance_km_text()
            .map(|km| format!("📍 Distance from {}: {} km", self.reference_name, km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::CITY_CENTER;

    fn detail_at(coordinate: LatLng) -> AttractionDetail {
        let attraction = Attraction::new("Somewhere", coordinate, "A place").unwrap();
        AttractionDetail::new(attraction, &ScreenConfig::default())
    }

    #[test]
    fn test_city_center_is_zero_km_away() {
        let detail = detail_at(CITY_CENTER);
        assert_eq!(detail.distance_km_text().as_deref(), Some("0.0"));
        assert_eq!(
            detail.distance_label().as_deref(),
            Some("📍 Distance from San Francisco: 0.0 km")
        );
    }

    #[test]
    fn test_apple_park_distance_matches_primitive() {
        let apple = LatLng::new(37.3346, -122.0090);
        let detail = detail_at(apple);

        let expected = format!("{:.1}", geodesic_distance(&apple, &CITY_CENTER) / 1000.0);
        assert_eq!(detail.distance_km_text(), Some(expected));

        let km = detail.distance_meters() / 1000.0;
        assert!(km > 55.0 && km < 65.0, "got {km}");
    }

    #[test]
    fn test_map_region_is_close_up() {
        let detail = detail_at(LatLng::new(36.5323, -116.9325));
        assert_eq!(detail.map_region().center, LatLng::new(36.5323, -116.9325));
        assert_eq!(detail.map_region().latitudinal_meters, 500.0);
        assert_eq!(detail.map_region().longitudinal_meters, 500.0);
        assert_eq!(detail.description(), "A place");
    }
}
