use crate::core::config::ScreenConfig;
use crate::core::region::CameraPosition;
use crate::screen::attraction::Attraction;
use crate::screen::events::ScreenEvent;
use crate::Result;

/// Camera and selection of the map screen as a single value.
///
/// The detail sheet is visible exactly when the state is `Focused`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle {
        camera: CameraPosition,
    },
    Focused {
        camera: CameraPosition,
        attraction: Attraction,
    },
}

/// Which variant a [`ViewState`] is, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Focused,
}

/// Before/after phases of one applied event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Idle {
            camera: CameraPosition::Automatic,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera(&self) -> &CameraPosition {
        match self {
            Self::Idle { camera } | Self::Focused { camera, .. } => camera,
        }
    }

    pub fn selected_attraction(&self) -> Option<&Attraction> {
        match self {
            Self::Idle { .. } => None,
            Self::Focused { attraction, .. } => Some(attraction),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle { .. } => Phase::Idle,
            Self::Focused { .. } => Phase::Focused,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.phase() == Phase::Focused
    }

    /// Computes the state that follows `event`.
    ///
    /// Pure: `self` is untouched and an invalid selection returns an error
    /// before anything is built, so callers can swap the result in with a
    /// single assignment.
    pub fn next(&self, event: &ScreenEvent, config: &ScreenConfig) -> Result<ViewState> {
        let next = match event {
            // A focused camera always stays on its attraction
            ScreenEvent::Appear => match self {
                Self::Idle { .. } => Self::Idle {
                    camera: CameraPosition::Region(config.wide_region()),
                },
                Self::Focused { .. } => self.clone(),
            },
            ScreenEvent::SelectAttraction {
                point,
                name,
                description,
            } => {
                let attraction = Attraction::new(name.as_str(), *point, description.as_str())?;
                Self::Focused {
                    camera: CameraPosition::Region(config.focus_region(*point)),
                    attraction,
                }
            }
            ScreenEvent::Dismiss => Self::Idle {
                camera: *self.camera(),
            },
        };
        Ok(next)
    }
}
