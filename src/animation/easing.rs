//! Easing curves
//!
//! Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.

use serde::{Deserialize, Serialize};

/// Control points of the standard material "fast out, slow in" curve
const FAST_OUT_SLOW_IN: (f32, f32, f32, f32) = (0.4, 0.0, 0.2, 1.0);

/// Bisection steps when inverting the bezier x(s); 2^-24 is below f32 noise
const BEZIER_STEPS: usize = 24;

/// Easing curve applied to tween progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Cubic bezier (0.4, 0.0, 0.2, 1.0), quick start and long settle
    #[default]
    FastOutSlowIn,
    /// Hermite smoothstep, 3t^2 - 2t^3
    SmoothStep,
    /// No easing
    Linear,
}

impl Easing {
    /// Apply the curve to linear progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::FastOutSlowIn => {
                let (x1, y1, x2, y2) = FAST_OUT_SLOW_IN;
                cubic_bezier(x1, y1, x2, y2, t)
            }
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
            Easing::Linear => t,
        }
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // x(s) is monotone for control x in [0, 1], so bisection always converges
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..BEZIER_STEPS {
        let mid = (lo + hi) * 0.5;
        if bezier_coord(x1, x2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    bezier_coord(y1, y2, (lo + hi) * 0.5)
}
