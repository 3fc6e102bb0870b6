//! The five points of interest shown on the screen.
//!
//! One table drives both the map annotations and the selector buttons.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::screen::events::ScreenEvent;
use crate::{MapError, Result};
use fxhash::FxHashMap;
use once_cell::sync::Lazy;

/// Marker symbol drawn inside a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    /// RGB of the symbol
    pub foreground: [u8; 3],
    /// RGB of the circle
    pub background: [u8; 3],
}

impl Glyph {
    pub const fn new(symbol: &'static str, foreground: [u8; 3], background: [u8; 3]) -> Self {
        Self {
            symbol,
            foreground,
            background,
        }
    }
}

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];
const GREEN: [u8; 3] = [52, 199, 89];
const BLUE: [u8; 3] = [0, 122, 255];
const YELLOW: [u8; 3] = [255, 204, 0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOfInterest {
    /// Selector button text
    pub label: &'static str,
    /// Title drawn under the map annotation
    pub annotation_title: &'static str,
    /// Name shown in the detail sheet
    pub name: &'static str,
    pub coordinate: LatLng,
    pub description: &'static str,
    pub glyph: Glyph,
}

impl PointOfInterest {
    /// The selection event this point's button sends
    pub fn select_event(&self) -> ScreenEvent {
        ScreenEvent::select(self.coordinate, self.name, self.description)
    }
}

pub static POINTS_OF_INTEREST: [PointOfInterest; 5] = [
    PointOfInterest {
        label: "Google",
        annotation_title: "Google Headquarters",
        name: "Google HQ",
        coordinate: LatLng::new(37.4221, -122.0853),
        description: "Google's global headquarters, located in Mountain View, California. \
                      Home to innovation, AI, and the famous Android lawn statues.",
        glyph: Glyph::new("G", WHITE, GREEN),
    },
    PointOfInterest {
        label: "Apple",
        annotation_title: "Apple Headquarters",
        name: "Apple Park",
        coordinate: LatLng::new(37.3346, -122.0090),
        description: "Apple’s futuristic campus, shaped like a spaceship, in Cupertino. \
                      A marvel of design and sustainability.",
        glyph: Glyph::new("🍎", BLACK, WHITE),
    },
    PointOfInterest {
        label: "Meta",
        annotation_title: "Meta Headquarters",
        name: "Meta HQ",
        coordinate: LatLng::new(37.4851, -122.1483),
        description: "Meta’s headquarters, home to Facebook, Instagram, and VR development. \
                      Known for its open and creative workspace.",
        glyph: Glyph::new("∞", WHITE, BLUE),
    },
    PointOfInterest {
        label: "Walk of Fame",
        annotation_title: "Walk of Fame",
        name: "Hollywood Walk of Fame",
        coordinate: LatLng::new(34.1016, -118.3296),
        description: "An iconic Los Angeles landmark honoring thousands of celebrities \
                      across the entertainment industry.",
        glyph: Glyph::new("★", YELLOW, BLACK),
    },
    PointOfInterest {
        label: "DV",
        annotation_title: "Death Valley",
        name: "Death Valley",
        coordinate: LatLng::new(36.5323, -116.9325),
        description: "One of the hottest places on Earth, offering stunning desert \
                      landscapes and dramatic views.",
        glyph: Glyph::new("💀", WHITE, BLACK),
    },
];

/// Lookup wrapper over the point table
#[derive(Debug, Clone)]
pub struct Catalog {
    points: &'static [PointOfInterest],
    by_label: FxHashMap<&'static str, usize>,
    by_annotation: FxHashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new(points: &'static [PointOfInterest]) -> Self {
        let by_label = points
            .iter()
            .enumerate()
            .map(|(i, p)| (p.label, i))
            .collect();
        let by_annotation = points
            .iter()
            .enumerate()
            .map(|(i, p)| (p.annotation_title, i))
            .collect();
        Self {
            points,
            by_label,
            by_annotation,
        }
    }

    pub fn points(&self) -> &'static [PointOfInterest] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finds the point behind a selector button
    pub fn by_label(&self, label: &str) -> Result<&'static PointOfInterest> {
        let points = self.points;
        self.by_label
            .get(label)
            .map(|&i| &points[i])
            .ok_or_else(|| MapError::UnknownAttraction(label.to_string()))
    }

    /// Finds an annotation by its map title
    pub fn annotation(&self, title: &str) -> Option<&'static PointOfInterest> {
        let points = self.points;
        self.by_annotation.get(title).map(|&i| &points[i])
    }

    /// Bounds of every annotation, used to frame the automatic camera
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.points.iter().map(|p| &p.coordinate))
    }
}

/// Index over [`POINTS_OF_INTEREST`], built on first use
pub(crate) static STANDARD_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(&POINTS_OF_INTEREST));

impl Catalog {
    /// The shipped five-point catalog
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }
}

impl Default for Catalog {
    fn default() -> Self {
        STANDARD_CATALOG.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_consistent() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 5);
        for point in catalog.points() {
            assert!(point.coordinate.is_valid(), "{}", point.name);
            assert!(!point.name.is_empty());
            assert!(!point.description.is_empty());
            assert_eq!(catalog.by_label(point.label).unwrap(), point);
            assert_eq!(catalog.annotation(point.annotation_title), Some(point));
        }
    }

    #[test]
    fn test_lookup_by_label() {
        let catalog = Catalog::default();
        let apple = catalog.by_label("Apple").unwrap();
        assert_eq!(apple.name, "Apple Park");
        assert_eq!(apple.coordinate, LatLng::new(37.3346, -122.0090));

        assert!(matches!(
            catalog.by_label("Netflix"),
            Err(MapError::UnknownAttraction(_))
        ));
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let catalog = Catalog::standard();
        let bounds = catalog.bounds().unwrap();
        assert!(catalog.points().iter().all(|p| bounds.contains(&p.coordinate)));
    }

    #[test]
    fn test_descriptions_have_single_spaces() {
        for point in &POINTS_OF_INTEREST {
            assert!(!point.description.contains("  "), "{}", point.name);
        }
    }
}
