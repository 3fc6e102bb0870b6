use crate::core::geo::Point;
use crate::core::viewport::Viewport;
use crate::screen::detail::AttractionDetail;
use crate::ui::map_view::MapCanvas;
use crate::ui::style::ScreenStyle;
use egui::{Align, Layout, RichText, Ui, Vec2};

/// Draws the detail sheet body. Returns `true` when "Done" was clicked.
pub fn show_detail(ui: &mut Ui, detail: &AttractionDetail, style: &ScreenStyle) -> bool {
    let sheet = &style.sheet;
    let mut done = false;

    ui.set_width(sheet.width);
    ui.vertical_centered(|ui| {
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            if ui.button("Done").clicked() {
                done = true;
            }
        });

        ui.label(RichText::new(detail.name()).size(30.0).strong());
        ui.add_space(12.0);

        let map_size = Vec2::new(sheet.width, sheet.map_height);
        let viewport = Viewport::for_region(
            detail.map_region(),
            Point::new(map_size.x as f64, map_size.y as f64),
        );
        ui.add(
            MapCanvas::new(viewport, style)
                .marker(detail.name(), detail.attraction().coordinate())
                .rounding(sheet.map_rounding)
                .size(map_size),
        );

        ui.add_space(12.0);
        ui.label(RichText::new(detail.description()).size(15.0));
        ui.add_space(8.0);
        ui.separator();

        if let Some(label) = detail.distance_label() {
            ui.label(RichText::new(label).strong());
        }
        ui.add_space(10.0);
    });

    done
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScreenConfig;
    use crate::core::geo::LatLng;
    use crate::screen::attraction::Attraction;

    #[test]
    fn test_detail_renders_without_click() {
        let attraction = Attraction::new(
            "Apple Park",
            LatLng::new(37.3346, -122.0090),
            "Apple’s futuristic campus",
        )
        .unwrap();
        let detail = AttractionDetail::new(attraction, &ScreenConfig::default());
        let style = ScreenStyle::default();

        let ctx = egui::Context::default();
        let mut done = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                done = show_detail(ui, &detail, &style);
            });
        });
        assert!(!done);
    }
}
