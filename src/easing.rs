//! Easing curves for tweens.

use keyframe::{ease, functions};
use serde::{Deserialize, Serialize};

/// Easing function applied to a tween's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum EaseType {
    /// Constant speed interpolation (identity curve)
    #[default]
    Linear,
    /// Slow start, fast end
    EaseIn,
    /// Fast start, slow end
    EaseOut,
    /// Slow start and end, fast middle
    EaseInOut,
    /// Quadratic ease in
    QuadIn,
    /// Quadratic ease out (smoother than linear)
    QuadOut,
    /// Quadratic ease in and out
    QuadInOut,
    /// Cubic ease out (even smoother)
    CubicOut,
}

impl EaseType {
    /// Apply the easing curve to a normalized time value (0.0 to 1.0).
    ///
    /// Input is clamped to [0,1] and the endpoints are exact: every variant
    /// maps 0.0 to 0.0 and 1.0 to 1.0.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let t = t as f64;
        let result = match self {
            EaseType::Linear => ease(functions::Linear, 0.0, 1.0, t),
            EaseType::EaseIn => ease(functions::EaseIn, 0.0, 1.0, t),
            EaseType::EaseOut => ease(functions::EaseOut, 0.0, 1.0, t),
            EaseType::EaseInOut => ease(functions::EaseInOut, 0.0, 1.0, t),
            EaseType::QuadIn => ease(functions::EaseInQuad, 0.0, 1.0, t),
            EaseType::QuadOut => ease(functions::EaseOutQuad, 0.0, 1.0, t),
            EaseType::QuadInOut => ease(functions::EaseInOutQuad, 0.0, 1.0, t),
            EaseType::CubicOut => ease(functions::EaseOutCubic, 0.0, 1.0, t),
        };
        result as f32
    }
}
