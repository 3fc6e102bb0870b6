use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Inputs that drive the screen state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScreenEvent {
    /// The screen became visible. Only the first one has an effect.
    Appear,
    /// A selector button was activated
    SelectAttraction {
        point: LatLng,
        name: String,
        description: String,
    },
    /// The detail sheet was closed
    Dismiss,
}

impl ScreenEvent {
    pub fn select(point: LatLng, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::SelectAttraction {
            point,
            name: name.into(),
            description: description.into(),
        }
    }
}
