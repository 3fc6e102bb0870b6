use crate::core::config::MapTheme;
use egui::{Color32, FontId, Stroke};

/// Colors and sizes for everything drawn by the screen
#[derive(Debug, Clone)]
pub struct ScreenStyle {
    /// Map fill (there is no tile imagery)
    pub background_color: Color32,
    /// Graticule lines
    pub grid_stroke: Stroke,
    /// Title plate over the map
    pub title_background: Color32,
    pub title_text: Color32,
    pub title_font: FontId,
    pub annotations: AnnotationStyle,
    pub sheet: SheetStyle,
}

/// Style for the circular point-of-interest annotations
#[derive(Debug, Clone)]
pub struct AnnotationStyle {
    pub radius: f32,
    pub glyph_font: FontId,
    pub label_font: FontId,
    pub label_color: Color32,
    pub label_shadow: Color32,
    pub ring: Stroke,
}

/// Style for the detail sheet
#[derive(Debug, Clone)]
pub struct SheetStyle {
    pub width: f32,
    pub map_height: f32,
    pub map_rounding: f32,
    pub marker_color: Color32,
    pub marker_radius: f32,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            radius: 16.0,
            glyph_font: FontId::proportional(16.0),
            label_font: FontId::proportional(12.0),
            label_color: Color32::WHITE,
            label_shadow: Color32::from_rgba_unmultiplied(0, 0, 0, 180),
            ring: Stroke::new(1.5, Color32::from_rgba_unmultiplied(255, 255, 255, 200)),
        }
    }
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            width: 380.0,
            map_height: 250.0,
            map_rounding: 12.0,
            marker_color: Color32::from_rgb(255, 59, 48),
            marker_radius: 9.0,
        }
    }
}

impl ScreenStyle {
    pub fn for_theme(theme: MapTheme) -> Self {
        match theme {
            MapTheme::Light => Self {
                background_color: Color32::from_rgb(242, 239, 233),
                grid_stroke: Stroke::new(1.0, Color32::from_rgb(214, 208, 196)),
                title_background: Color32::from_rgba_unmultiplied(255, 255, 255, 200),
                title_text: Color32::BLACK,
                title_font: FontId::proportional(28.0),
                annotations: AnnotationStyle {
                    label_color: Color32::from_gray(30),
                    label_shadow: Color32::from_rgba_unmultiplied(255, 255, 255, 200),
                    ..AnnotationStyle::default()
                },
                sheet: SheetStyle::default(),
            },
            MapTheme::Dark => Self {
                background_color: Color32::from_rgb(36, 37, 40),
                grid_stroke: Stroke::new(1.0, Color32::from_rgb(62, 64, 70)),
                title_background: Color32::from_rgba_unmultiplied(30, 30, 30, 200),
                title_text: Color32::WHITE,
                title_font: FontId::proportional(28.0),
                annotations: AnnotationStyle::default(),
                sheet: SheetStyle::default(),
            },
            MapTheme::Satellite => Self {
                background_color: Color32::from_rgb(46, 62, 48),
                grid_stroke: Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 40)),
                title_background: Color32::from_rgba_unmultiplied(240, 240, 240, 190),
                title_text: Color32::BLACK,
                title_font: FontId::proportional(28.0),
                annotations: AnnotationStyle::default(),
                sheet: SheetStyle::default(),
            },
        }
    }
}

impl Default for ScreenStyle {
    fn default() -> Self {
        Self::for_theme(MapTheme::default())
    }
}

/// Converts a catalog RGB triple
pub fn rgb(color: [u8; 3]) -> Color32 {
    Color32::from_rgb(color[0], color[1], color[2])
}
