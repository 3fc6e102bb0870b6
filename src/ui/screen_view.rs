use crate::animation::camera::{CameraAnimator, CameraFrame};
use crate::core::geo::Point;
use crate::core::region::CameraPosition;
use crate::core::viewport::Viewport;
use crate::screen::controller::MapScreen;
use crate::screen::events::ScreenEvent;
use crate::ui::detail_view::show_detail;
use crate::ui::map_view::MapCanvas;
use crate::ui::style::ScreenStyle;
use crate::ui::toolbar::selector_row;
use egui::{Align2, Context, Id, Key, RichText};
use std::time::Instant;

/// The whole map screen as an egui view.
///
/// Owns a [`MapScreen`] and turns clicks into [`ScreenEvent`]s. Events are
/// collected while drawing and applied once per frame, after every panel has
/// been laid out with the same state.
pub struct MapScreenView {
    screen: MapScreen,
    style: ScreenStyle,
    animator: CameraAnimator,
    shown_camera: Option<CameraPosition>,
}

impl MapScreenView {
    pub fn new(screen: MapScreen) -> Self {
        let style = ScreenStyle::for_theme(screen.config().theme);
        let animator = CameraAnimator::new(&screen.config().animation);
        Self {
            screen,
            style,
            animator,
            shown_camera: None,
        }
    }

    pub fn screen(&self) -> &MapScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut MapScreen {
        &mut self.screen
    }

    pub fn style(&self) -> &ScreenStyle {
        &self.style
    }

    /// Frame currently drawn by the main map, if any frame has been drawn
    pub fn displayed_frame(&self, now: Instant) -> Option<CameraFrame> {
        self.animator.frame_at(now)
    }

    pub fn show(&mut self, ctx: &Context) {
        if !self.screen.has_appeared() {
            self.apply(ScreenEvent::Appear);
        }

        let mut pending: Option<ScreenEvent> = None;

        egui::TopBottomPanel::bottom("selector_toolbar")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                if let Some(point) = selector_row(ui, self.screen.annotations()) {
                    pending = Some(point.select_event());
                }
                ui.add_space(6.0);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let size = Point::new(rect.width() as f64, rect.height() as f64);
                let now = Instant::now();
                let frame = self.update_camera(size, now);

                ui.add(
                    MapCanvas::new(frame.to_viewport(size), &self.style)
                        .annotations(self.screen.annotations()),
                );

                if self.animator.is_animating(now) {
                    ctx.request_repaint();
                }
            });

        egui::Area::new(Id::new("screen_title"))
            .anchor(Align2::CENTER_TOP, [0.0, 40.0])
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(self.style.title_background)
                    .rounding(12.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&self.screen.config().title)
                                .font(self.style.title_font.clone())
                                .color(self.style.title_text)
                                .strong(),
                        );
                    });
            });

        if let Some(detail) = self.screen.detail() {
            let mut done = false;
            egui::Window::new(detail.name())
                .id(Id::new(("attraction_detail", detail.attraction().id())))
                .title_bar(false)
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_BOTTOM, [0.0, -56.0])
                .show(ctx, |ui| {
                    done = show_detail(ui, &detail, &self.style);
                });

            let escape = ctx.input(|i| i.key_pressed(Key::Escape));
            if (done || escape) && pending.is_none() {
                pending = Some(ScreenEvent::Dismiss);
            }
        }

        if let Some(event) = pending {
            self.apply(event);
            ctx.request_repaint();
        }
    }

    /// Resolves the camera for `size` and feeds the animator.
    ///
    /// A new camera animates from the current frame; a resize of the same
    /// camera just jumps to the refitted frame.
    fn update_camera(&mut self, size: Point, now: Instant) -> CameraFrame {
        let camera = *self.screen.camera();
        let content = self.screen.catalog().bounds();
        let target = CameraFrame::from(Viewport::for_camera(&camera, content.as_ref(), size));

        let animate = matches!(self.shown_camera, Some(shown) if shown != camera);
        self.animator.set_target(target, now, animate);
        self.shown_camera = Some(camera);

        self.animator.frame_at(now).unwrap_or(target)
    }

    fn apply(&mut self, event: ScreenEvent) {
        if let Err(e) = self.screen.handle_event(event) {
            log::warn!("screen event failed: {e}");
        }
    }
}

impl Default for MapScreenView {
    fn default() -> Self {
        Self::new(MapScreen::default())
    }
}
