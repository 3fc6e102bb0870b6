//! egui rendering of the map screen.

pub mod detail_view;
pub mod map_view;
pub mod screen_view;
pub mod style;
pub mod toolbar;

pub use map_view::MapCanvas;
pub use screen_view::MapScreenView;
pub use style::{AnnotationStyle, ScreenStyle, SheetStyle};
