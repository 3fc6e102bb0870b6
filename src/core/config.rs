//! Configuration for the map screen
//!
//! Every value has a fixed default matching the shipped screen. The structs
//! exist so tests and embedders can build variations (e.g. a screen without
//! camera animation) through presets or `with_*` methods, and so the fixed
//! values are checked in one place.

use crate::animation::easing::EasingType;
use crate::core::constants::{
    CITY_CENTER, CITY_NAME, DETAIL_REGION_METERS, FOCUS_REGION_METERS, SCREEN_TITLE,
    WIDE_REGION_METERS,
};
use crate::core::geo::LatLng;
use crate::core::region::CoordinateRegion;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Base map look. The screen ships with `Satellite` (a hybrid style with
/// labels over imagery colors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapTheme {
    Light,
    Dark,
    #[default]
    Satellite,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CameraAnimationProfile {
    #[default]
    Smooth,
    Instant,
    Custom(CameraAnimationConfig),
}

impl CameraAnimationProfile {
    pub fn resolve(&self) -> CameraAnimationConfig {
        match self {
            Self::Smooth => CameraAnimationConfig {
                enabled: true,
                duration_ms: 350,
                easing: EasingType::EaseOut,
            },
            Self::Instant => CameraAnimationConfig {
                enabled: false,
                duration_ms: 0,
                easing: EasingType::Linear,
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraAnimationConfig {
    pub enabled: bool,
    pub duration_ms: u64,
    pub easing: EasingType,
}

impl Default for CameraAnimationConfig {
    fn default() -> Self {
        CameraAnimationProfile::default().resolve()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Title overlaid on the map
    pub title: String,
    /// Name used in the distance line of the detail sheet
    pub city_name: String,
    /// Reference point for the city-wide camera and every distance
    pub city_center: LatLng,
    /// Square span of the camera when the screen appears
    pub wide_span_meters: f64,
    /// Square span of the camera after a selection
    pub focus_span_meters: f64,
    /// Square span of the close-up map in the detail sheet
    pub detail_span_meters: f64,
    pub theme: MapTheme,
    pub animation: CameraAnimationConfig,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: SCREEN_TITLE.to_string(),
            city_name: CITY_NAME.to_string(),
            city_center: CITY_CENTER,
            wide_span_meters: WIDE_REGION_METERS,
            focus_span_meters: FOCUS_REGION_METERS,
            detail_span_meters: DETAIL_REGION_METERS,
            theme: MapTheme::default(),
            animation: CameraAnimationConfig::default(),
        }
    }
}

impl ScreenConfig {
    pub fn with_theme(mut self, theme: MapTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_animation(mut self, profile: CameraAnimationProfile) -> Self {
        self.animation = profile.resolve();
        self
    }

    pub fn with_city(mut self, name: impl Into<String>, center: LatLng) -> Self {
        self.city_name = name.into();
        self.city_center = center;
        self
    }

    /// Parses a JSON document. Missing fields keep their defaults and the
    /// result is validated.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| MapError::InvalidConfig(format!("malformed JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MapError::InvalidConfig(e.to_string()))
    }

    /// Checks the center and all three spans
    pub fn validate(&self) -> Result<()> {
        self.city_center
            .validate()
            .map_err(|e| MapError::InvalidConfig(format!("city center: {e}")))?;

        for (name, meters) in [
            ("wide", self.wide_span_meters),
            ("focus", self.focus_span_meters),
            ("detail", self.detail_span_meters),
        ] {
            if !meters.is_finite() || meters <= 0.0 {
                return Err(MapError::InvalidConfig(format!(
                    "{name} span must be positive, got {meters}"
                )));
            }
        }
        Ok(())
    }

    /// City-wide camera region shown when the screen appears
    pub fn wide_region(&self) -> CoordinateRegion {
        CoordinateRegion::square(self.city_center, self.wide_span_meters)
    }

    /// Camera region after selecting a point at `center`
    pub fn focus_region(&self, center: LatLng) -> CoordinateRegion {
        CoordinateRegion::square(center, self.focus_span_meters)
    }

    /// Close-up region for the detail sheet map
    pub fn detail_region(&self, center: LatLng) -> CoordinateRegion {
        CoordinateRegion::square(center, self.detail_span_meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_shipped_screen() {
        let config = ScreenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.city_center, LatLng::new(37.7749, -122.4194));
        assert_eq!(config.wide_region().latitudinal_meters, 30_000.0);
        assert_eq!(config.focus_region(CITY_CENTER).longitudinal_meters, 800.0);
        assert_eq!(config.detail_region(CITY_CENTER).latitudinal_meters, 500.0);
        assert_eq!(config.theme, MapTheme::Satellite);
        assert!(config.animation.enabled);
        assert_eq!(CameraAnimationProfile::default(), CameraAnimationProfile::Smooth);
        assert_eq!(config.animation.duration_ms, 350);
    }

    #[test]
    fn test_instant_profile_disables_animation() {
        let config = ScreenConfig::default().with_animation(CameraAnimationProfile::Instant);
        assert!(!config.animation.enabled);
        assert_eq!(config.animation.duration_ms, 0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ScreenConfig::default();
        config.focus_span_meters = 0.0;
        assert!(matches!(config.validate(), Err(MapError::InvalidConfig(_))));

        let config = ScreenConfig::default().with_city("Nowhere", LatLng::new(95.0, 0.0));
        assert!(matches!(config.validate(), Err(MapError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_overrides_only_given_fields() {
        let config = ScreenConfig::from_json(
            r#"{ "city_name": "Oakland", "focus_span_meters": 1200.0, "theme": "Dark" }"#,
        )
        .unwrap();
        assert_eq!(config.city_name, "Oakland");
        assert_eq!(config.focus_span_meters, 1200.0);
        assert_eq!(config.theme, MapTheme::Dark);
        assert_eq!(config.wide_span_meters, 30_000.0);
        assert_eq!(config.city_center, CITY_CENTER);

        let reparsed = ScreenConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(reparsed.city_name, "Oakland");
        assert_eq!(reparsed.animation, config.animation);
    }

    #[test]
    fn test_json_errors_are_config_errors() {
        assert!(matches!(
            ScreenConfig::from_json("{ not json"),
            Err(MapError::InvalidConfig(_))
        ));
        assert!(matches!(
            ScreenConfig::from_json(r#"{ "wide_span_meters": -5.0 }"#),
            Err(MapError::InvalidConfig(_))
        ));
    }
}
