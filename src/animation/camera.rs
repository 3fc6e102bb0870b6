//! Camera fly-to animation.
//!
//! The screen state switches cameras instantly; this module only eases the
//! *drawn* viewport from the previous frame toward the new target.

use crate::animation::easing::{EasingType, Interpolatable};
use crate::core::config::CameraAnimationConfig;
use crate::core::geo::{LatLng, Point};
use crate::core::viewport::Viewport;
use std::time::{Duration, Instant};

/// Center and zoom of a drawn map, independent of widget size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub center: LatLng,
    pub zoom: f64,
}

impl CameraFrame {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }

    pub fn to_viewport(self, size: Point) -> Viewport {
        Viewport::new(self.center, self.zoom, size)
    }

    fn approx_eq(&self, other: &CameraFrame) -> bool {
        (self.center.lat - other.center.lat).abs() < 1e-9
            && (self.center.lng - other.center.lng).abs() < 1e-9
            && (self.zoom - other.zoom).abs() < 1e-6
    }
}

impl From<Viewport> for CameraFrame {
    fn from(viewport: Viewport) -> Self {
        Self::new(viewport.center, viewport.zoom)
    }
}

impl Interpolatable for CameraFrame {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(self.center.lerp(&other.center, t), self.zoom.lerp(&other.zoom, t))
    }
}

#[derive(Debug, Clone, Copy)]
struct Flight {
    from: CameraFrame,
    started: Instant,
}

/// Eases between camera frames over a fixed duration
#[derive(Debug, Clone)]
pub struct CameraAnimator {
    target: Option<CameraFrame>,
    flight: Option<Flight>,
    duration: Duration,
    easing: EasingType,
    enabled: bool,
}

impl CameraAnimator {
    pub fn new(config: &CameraAnimationConfig) -> Self {
        Self {
            target: None,
            flight: None,
            duration: Duration::from_millis(config.duration_ms),
            easing: config.easing,
            enabled: config.enabled && config.duration_ms > 0,
        }
    }

    pub fn target(&self) -> Option<CameraFrame> {
        self.target
    }

    /// Points the camera at `target`.
    ///
    /// With `animate` the drawn frame starts from wherever it is at `now`;
    /// otherwise (and always for the very first target) it jumps.
    pub fn set_target(&mut self, target: CameraFrame, now: Instant, animate: bool) {
        if let Some(current) = self.target {
            if current.approx_eq(&target) {
                return;
            }
        }

        self.flight = match self.frame_at(now) {
            Some(from) if animate && self.enabled => {
                log::debug!(
                    "camera flight ({:.4}, {:.4}) z{:.2} -> ({:.4}, {:.4}) z{:.2}",
                    from.center.lat,
                    from.center.lng,
                    from.zoom,
                    target.center.lat,
                    target.center.lng,
                    target.zoom
                );
                Some(Flight { from, started: now })
            }
            _ => None,
        };
        self.target = Some(target);
    }

    /// Frame to draw at `now`, `None` until a target has been set
    pub fn frame_at(&self, now: Instant) -> Option<CameraFrame> {
        let target = self.target?;
        match self.flight {
            Some(flight) => {
                let t = self.progress(flight.started, now);
                if t >= 1.0 {
                    return Some(target);
                }
                Some(flight.from.lerp(&target, self.easing.apply(t)))
            }
            None => Some(target),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.flight
            .map(|flight| self.progress(flight.started, now) < 1.0)
            .unwrap_or(false)
    }

    fn progress(&self, started: Instant, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool) -> CameraAnimationConfig {
        CameraAnimationConfig {
            enabled,
            duration_ms: 400,
            easing: EasingType::Linear,
        }
    }

    #[test]
    fn test_first_target_snaps() {
        let mut animator = CameraAnimator::new(&config(true));
        let now = Instant::now();
        assert!(animator.frame_at(now).is_none());

        let frame = CameraFrame::new(LatLng::new(37.7749, -122.4194), 11.0);
        animator.set_target(frame, now, true);
        assert_eq!(animator.frame_at(now), Some(frame));
        assert!(!animator.is_animating(now));
    }

    #[test]
    fn test_flight_interpolates_to_target() {
        let mut animator = CameraAnimator::new(&config(true));
        let start = Instant::now();
        let from = CameraFrame::new(LatLng::new(0.0, 0.0), 10.0);
        let to = CameraFrame::new(LatLng::new(10.0, 20.0), 16.0);

        animator.set_target(from, start, false);
        animator.set_target(to, start, true);

        let mid = animator.frame_at(start + Duration::from_millis(200)).unwrap();
        assert!((mid.center.lat - 5.0).abs() < 1e-9);
        assert!((mid.center.lng - 10.0).abs() < 1e-9);
        assert!((mid.zoom - 13.0).abs() < 1e-9);
        assert!(animator.is_animating(start + Duration::from_millis(200)));

        let end = start + Duration::from_millis(500);
        assert_eq!(animator.frame_at(end), Some(to));
        assert!(!animator.is_animating(end));
    }

    #[test]
    fn test_disabled_animation_jumps() {
        let mut animator = CameraAnimator::new(&config(false));
        let start = Instant::now();
        let to = CameraFrame::new(LatLng::new(10.0, 20.0), 16.0);

        animator.set_target(CameraFrame::new(LatLng::new(0.0, 0.0), 10.0), start, false);
        animator.set_target(to, start, true);
        assert_eq!(animator.frame_at(start), Some(to));
    }
}
