use crate::screen::catalog::PointOfInterest;
use egui::Ui;

/// Evenly spaced row of selector buttons, one per point of interest.
///
/// Returns the point whose button was clicked this frame.
pub fn selector_row(ui: &mut Ui, points: &'static [PointOfInterest]) -> Option<&'static PointOfInterest> {
    if points.is_empty() {
        return None;
    }

    let mut clicked = None;
    ui.columns(points.len(), |columns| {
        for (column, point) in columns.iter_mut().zip(points) {
            column.vertical_centered(|ui| {
                if ui.button(point.label).clicked() {
                    clicked = Some(point);
                }
            });
        }
    });
    clicked
}
