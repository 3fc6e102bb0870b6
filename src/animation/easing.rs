use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Interpolation trait for values that can be smoothly transitioned
pub trait Interpolatable {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

/// Easing curves available to camera transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EasingType {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    Smooth,
}

impl EasingType {
    /// Apply easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => t * t * t,
            EasingType::EaseOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingType::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            // smoothstep
            EasingType::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }
}

impl Interpolatable for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Interpolatable for LatLng {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        LatLng::new(self.lat.lerp(&other.lat, t), self.lng.lerp(&other.lng, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            EasingType::Linear,
            EasingType::EaseIn,
            EasingType::EaseOut,
            EasingType::EaseInOut,
            EasingType::Smooth,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_shapes() {
        assert_eq!(EasingType::Linear.apply(0.5), 0.5);
        assert!(EasingType::EaseIn.apply(0.5) < 0.5);
        assert!(EasingType::EaseOut.apply(0.5) > 0.5);
        assert_eq!(EasingType::Smooth.apply(0.5), 0.5);
        assert_eq!(EasingType::EaseOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_lat_lng_interpolation() {
        let start = LatLng::new(0.0, 0.0);
        let end = LatLng::new(10.0, 10.0);
        assert_eq!(start.lerp(&end, 0.5), LatLng::new(5.0, 5.0));
    }
}
