use crate::core::geo::{LatLng, Point};
use crate::core::viewport::Viewport;
use crate::screen::catalog::PointOfInterest;
use crate::ui::style::{rgb, ScreenStyle};
use egui::{Align2, Color32, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};

/// Graticule spacings in degrees, coarse to fine
const GRID_STEPS: [f64; 13] = [
    10.0, 5.0, 2.0, 1.0, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01, 0.005, 0.002, 0.001,
];

/// Minimum distance between graticule lines in pixels
const MIN_GRID_SPACING_PX: f64 = 80.0;

/// Immediate-mode map canvas.
///
/// Paints the background, a lat/lng graticule, the point-of-interest
/// annotations and an optional single pin. It never changes any state; the
/// viewport is decided by the caller.
pub struct MapCanvas<'a> {
    viewport: Viewport,
    annotations: &'a [PointOfInterest],
    marker: Option<(&'a str, LatLng)>,
    style: &'a ScreenStyle,
    size: Option<Vec2>,
    rounding: f32,
}

impl<'a> MapCanvas<'a> {
    pub fn new(viewport: Viewport, style: &'a ScreenStyle) -> Self {
        Self {
            viewport,
            annotations: &[],
            marker: None,
            style,
            size: None,
            rounding: 0.0,
        }
    }

    pub fn annotations(mut self, annotations: &'a [PointOfInterest]) -> Self {
        self.annotations = annotations;
        self
    }

    /// Plain pin with a title, used by the detail sheet's close-up map
    pub fn marker(mut self, title: &'a str, position: LatLng) -> Self {
        self.marker = Some((title, position));
        self
    }

    /// Set the canvas size (otherwise uses available space)
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn rounding(mut self, rounding: f32) -> Self {
        self.rounding = rounding;
        self
    }

    fn to_screen(&self, rect: Rect, lat_lng: &LatLng) -> Pos2 {
        let p = self.viewport.lat_lng_to_pixel(lat_lng);
        rect.min + Vec2::new(p.x as f32, p.y as f32)
    }

    fn paint_graticule(&self, painter: &Painter, rect: Rect) {
        let px_per_degree = 256.0 * self.viewport.scale() / 360.0;
        let step = GRID_STEPS
            .iter()
            .rev()
            .copied()
            .find(|step| step * px_per_degree >= MIN_GRID_SPACING_PX)
            .unwrap_or(GRID_STEPS[0]);

        let bounds = self.viewport.bounds();
        let stroke = self.style.grid_stroke;

        let mut lng = (bounds.south_west.lng / step).floor() * step;
        while lng <= bounds.north_east.lng {
            let x = self.to_screen(rect, &LatLng::new(self.viewport.center.lat, lng)).x;
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
            lng += step;
        }

        let mut lat = (bounds.south_west.lat / step).floor() * step;
        while lat <= bounds.north_east.lat {
            let y = self.to_screen(rect, &LatLng::new(lat, self.viewport.center.lng)).y;
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
            lat += step;
        }
    }

    fn paint_annotation(&self, painter: &Painter, rect: Rect, point: &PointOfInterest) {
        let style = &self.style.annotations;
        let center = self.to_screen(rect, &point.coordinate);
        if !rect.expand(style.radius * 4.0).contains(center) {
            return;
        }

        painter.circle_filled(center, style.radius, rgb(point.glyph.background));
        painter.circle_stroke(center, style.radius, style.ring);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            point.glyph.symbol,
            style.glyph_font.clone(),
            rgb(point.glyph.foreground),
        );

        let label_pos = center + Vec2::new(0.0, style.radius + 4.0);
        painter.text(
            label_pos + Vec2::new(1.0, 1.0),
            Align2::CENTER_TOP,
            point.annotation_title,
            style.label_font.clone(),
            style.label_shadow,
        );
        painter.text(
            label_pos,
            Align2::CENTER_TOP,
            point.annotation_title,
            style.label_font.clone(),
            style.label_color,
        );
    }

    fn paint_marker(&self, painter: &Painter, rect: Rect, title: &str, position: &LatLng) {
        let sheet = &self.style.sheet;
        let head = self.to_screen(rect, position) - Vec2::new(0.0, sheet.marker_radius * 1.6);
        let tip = self.to_screen(rect, position);

        painter.line_segment([head, tip], Stroke::new(2.0, sheet.marker_color));
        painter.circle_filled(head, sheet.marker_radius, sheet.marker_color);
        painter.circle_filled(head, sheet.marker_radius * 0.35, Color32::WHITE);
        painter.text(
            tip + Vec2::new(0.0, 4.0),
            Align2::CENTER_TOP,
            title,
            self.style.annotations.label_font.clone(),
            self.style.annotations.label_color,
        );
    }
}

impl<'a> Widget for MapCanvas<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = self.size.unwrap_or_else(|| ui.available_size());
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        // The caller's viewport may have been computed for another size
        let canvas = MapCanvas {
            viewport: Viewport::new(
                self.viewport.center,
                self.viewport.zoom,
                Point::new(rect.width() as f64, rect.height() as f64),
            ),
            ..self
        };

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, canvas.rounding, canvas.style.background_color);
        canvas.paint_graticule(&painter, rect);

        for point in canvas.annotations {
            canvas.paint_annotation(&painter, rect, point);
        }
        if let Some((title, position)) = canvas.marker {
            canvas.paint_marker(&painter, rect, title, &position);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::CITY_CENTER;
    use crate::screen::catalog::POINTS_OF_INTEREST;

    #[test]
    fn test_to_screen_centers_viewport() {
        let style = ScreenStyle::default();
        let viewport = Viewport::new(CITY_CENTER, 12.0, Point::new(400.0, 300.0));
        let canvas = MapCanvas::new(viewport, &style).annotations(&POINTS_OF_INTEREST);
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(400.0, 300.0));

        let pos = canvas.to_screen(rect, &CITY_CENTER);
        assert!((pos.x - 210.0).abs() < 0.01);
        assert!((pos.y - 170.0).abs() < 0.01);
    }

    #[test]
    fn test_canvas_paints_in_headless_frame() {
        let ctx = egui::Context::default();
        let style = ScreenStyle::default();
        let viewport = Viewport::new(CITY_CENTER, 9.0, Point::new(640.0, 480.0));

        let mut rect = Rect::NOTHING;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.add(
                    MapCanvas::new(viewport, &style)
                        .annotations(&POINTS_OF_INTEREST)
                        .marker("Center", CITY_CENTER)
                        .size(Vec2::new(320.0, 240.0)),
                );
                rect = response.rect;
            });
        });

        assert_eq!(rect.size(), Vec2::new(320.0, 240.0));
    }
}
