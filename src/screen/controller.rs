use crate::core::config::ScreenConfig;
use crate::core::region::CameraPosition;
use crate::screen::attraction::Attraction;
use crate::screen::catalog::{Catalog, PointOfInterest};
use crate::screen::detail::AttractionDetail;
use crate::screen::events::ScreenEvent;
use crate::screen::state::{Transition, ViewState};
use crate::Result;

/// Owner of the screen's [`ViewState`].
///
/// All mutation goes through [`MapScreen::handle_event`], which computes the
/// next state first and then replaces the old one in a single assignment.
#[derive(Debug, Clone)]
pub struct MapScreen {
    state: ViewState,
    config: ScreenConfig,
    catalog: &'static Catalog,
    appeared: bool,
}

impl MapScreen {
    pub fn new(config: ScreenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: ViewState::new(),
            config,
            catalog: Catalog::standard(),
            appeared: false,
        })
    }

    /// Applies one event.
    ///
    /// Returns `Ok(None)` when the event has nothing to do (a repeated
    /// `Appear`, an `Appear` after something was already selected, or
    /// `Dismiss` with no selection). On error the state is left
    /// exactly as it was.
    pub fn handle_event(&mut self, event: ScreenEvent) -> Result<Option<Transition>> {
        match &event {
            ScreenEvent::Appear if self.appeared => {
                log::debug!("appear ignored: screen already visible");
                return Ok(None);
            }
            ScreenEvent::Appear if self.state.is_focused() => {
                self.appeared = true;
                log::debug!("appear ignored: camera is focused on a selection");
                return Ok(None);
            }
            ScreenEvent::Dismiss if !self.state.is_focused() => {
                log::debug!("dismiss ignored: nothing selected");
                return Ok(None);
            }
            _ => {}
        }

        let next = self.state.next(&event, &self.config).map_err(|e| {
            log::warn!("rejected {event:?}: {e}");
            e
        })?;

        let transition = Transition {
            from: self.state.phase(),
            to: next.phase(),
        };

        match &event {
            ScreenEvent::Appear => {
                self.appeared = true;
                log::debug!("screen appeared, camera -> {:?}", next.camera());
            }
            ScreenEvent::SelectAttraction { name, .. } => {
                log::info!("selected {name} ({:?} -> {:?})", transition.from, transition.to);
            }
            ScreenEvent::Dismiss => log::info!("detail dismissed"),
        }

        self.state = next;
        Ok(Some(transition))
    }

    /// One-time "became visible" effect: moves the camera to the city
    pub fn on_appear(&mut self) -> Result<Option<Transition>> {
        self.handle_event(ScreenEvent::Appear)
    }

    /// What a selector button does
    pub fn select(&mut self, point: &PointOfInterest) -> Result<Option<Transition>> {
        self.handle_event(point.select_event())
    }

    pub fn select_by_label(&mut self, label: &str) -> Result<Option<Transition>> {
        let point = self.catalog.by_label(label)?;
        self.select(point)
    }

    pub fn dismiss(&mut self) -> Result<Option<Transition>> {
        self.handle_event(ScreenEvent::Dismiss)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn camera(&self) -> &CameraPosition {
        self.state.camera()
    }

    pub fn selected_attraction(&self) -> Option<&Attraction> {
        self.state.selected_attraction()
    }

    /// The detail sheet is shown iff this is true
    pub fn is_detail_presented(&self) -> bool {
        self.state.is_focused()
    }

    pub fn has_appeared(&self) -> bool {
        self.appeared
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// The map annotations. Same five entries in every state.
    pub fn annotations(&self) -> &'static [PointOfInterest] {
        self.catalog.points()
    }

    pub fn annotation(&self, title: &str) -> Option<&'static PointOfInterest> {
        self.catalog.annotation(title)
    }

    /// Detail sheet content for the current selection
    pub fn detail(&self) -> Option<AttractionDetail> {
        self.selected_attraction()
            .map(|attraction| AttractionDetail::new(attraction.clone(), &self.config))
    }
}

impl Default for MapScreen {
    fn default() -> Self {
        Self {
            state: ViewState::new(),
            config: ScreenConfig::default(),
            catalog: Catalog::standard(),
            appeared: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::screen::state::Phase;
    use crate::MapError;

    #[test]
    fn test_appear_happens_once() {
        let mut screen = MapScreen::default();
        assert!(screen.on_appear().unwrap().is_some());
        assert!(screen.has_appeared());

        screen.select_by_label("Meta").unwrap();
        let camera = *screen.camera();
        assert_eq!(screen.on_appear().unwrap(), None);
        assert_eq!(screen.camera(), &camera);
    }

    #[test]
    fn test_appear_after_selection_keeps_focus() {
        let mut screen = MapScreen::default();
        screen.select_by_label("Apple").unwrap();
        let before = screen.state().clone();

        assert_eq!(screen.on_appear().unwrap(), None);
        assert!(screen.has_appeared());
        assert_eq!(screen.state(), &before);
        assert_eq!(screen.camera().center(), Some(LatLng::new(37.3346, -122.0090)));
        assert_eq!(screen.camera().region().unwrap().latitudinal_meters, 800.0);

        // Closing the sheet later does not bring the city-wide camera back
        screen.dismiss().unwrap();
        assert_eq!(screen.on_appear().unwrap(), None);
        assert_eq!(screen.camera(), before.camera());
    }

    #[test]
    fn test_dismiss_without_selection_is_ignored() {
        let mut screen = MapScreen::default();
        screen.on_appear().unwrap();
        let before = screen.state().clone();
        assert_eq!(screen.dismiss().unwrap(), None);
        assert_eq!(screen.state(), &before);
    }

    #[test]
    fn test_rejected_event_leaves_state_untouched() {
        let mut screen = MapScreen::default();
        screen.on_appear().unwrap();
        screen.select_by_label("Google").unwrap();
        let before = screen.state().clone();

        let err = screen
            .handle_event(ScreenEvent::select(LatLng::new(0.0, 999.0), "Bad", ""))
            .unwrap_err();
        assert!(matches!(err, MapError::InvalidCoordinates(_)));
        assert_eq!(screen.state(), &before);

        assert!(screen.select_by_label("Nope").is_err());
        assert_eq!(screen.state(), &before);
    }

    #[test]
    fn test_detail_follows_selection() {
        let mut screen = MapScreen::default();
        assert!(screen.detail().is_none());

        let transition = screen.select_by_label("DV").unwrap().unwrap();
        assert_eq!(transition, Transition { from: Phase::Idle, to: Phase::Focused });

        let detail = screen.detail().unwrap();
        assert_eq!(detail.name(), "Death Valley");
        assert!(screen.is_detail_presented());

        screen.dismiss().unwrap();
        assert!(screen.detail().is_none());
        assert!(!screen.is_detail_presented());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = ScreenConfig::default();
        config.wide_span_meters = -1.0;
        assert!(MapScreen::new(config).is_err());
    }
}
