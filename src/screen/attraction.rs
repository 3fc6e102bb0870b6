use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point of interest as presented in the detail sheet.
///
/// Built fresh for every selection, so two selections of the same place are
/// two different attractions (different `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    id: Uuid,
    name: String,
    coordinate: LatLng,
    description: String,
}

impl Attraction {
    /// Validates the name and coordinate and assigns a new id
    pub fn new(
        name: impl Into<String>,
        coordinate: LatLng,
        description: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MapError::InvalidAttraction(
                "name must not be empty".to_string(),
            ));
        }
        coordinate.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            coordinate,
            description: description.into(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> LatLng {
        self.coordinate
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_attraction_gets_its_own_id() {
        let coord = LatLng::new(37.3346, -122.0090);
        let a = Attraction::new("Apple Park", coord, "Campus").unwrap();
        let b = Attraction::new("Apple Park", coord, "Campus").unwrap();

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a.name(), b.name());
        assert_eq!(a.coordinate(), b.coordinate());
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = Attraction::new("   ", LatLng::new(0.0, 0.0), "").unwrap_err();
        assert!(matches!(err, MapError::InvalidAttraction(_)));
    }

    #[test]
    fn test_rejects_invalid_coordinate() {
        let err = Attraction::new("Nowhere", LatLng::new(0.0, 200.0), "").unwrap_err();
        assert!(matches!(err, MapError::InvalidCoordinates(_)));
    }
}
