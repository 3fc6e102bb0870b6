//! Screen model: what is selected, where the camera points, and the detail
//! data derived from the selection. Nothing here depends on egui.

pub mod attraction;
pub mod catalog;
pub mod controller;
pub mod detail;
pub mod events;
pub mod state;
