//! Easing curves used to remap normalized progress.
//!
//! All curves map `[0, 1]` onto `[0, 1]`, hit both endpoints exactly and are
//! monotonic non-decreasing.

use serde::{Deserialize, Serialize};

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Constant speed.
    #[default]
    Linear,
    /// Cubic, slow start.
    EaseIn,
    /// Cubic, slow end.
    EaseOut,
    /// Cubic, slow at both ends.
    EaseInOut,
}

impl EasingType {
    /// Every easing curve, in declaration order.
    pub const ALL: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::EaseIn,
        EasingType::EaseOut,
        EasingType::EaseInOut,
    ];

    /// Remaps `progress` through this curve.
    ///
    /// Input outside `[0, 1]` is clamped first.
    #[inline]
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);

        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => ease_in_cubic(t),
            EasingType::EaseOut => ease_out_cubic(t),
            EasingType::EaseInOut => ease_in_out_cubic(t),
        }
    }
}

/// Free-function form of [`EasingType::apply`].
#[inline]
#[must_use]
pub fn ease(progress: f32, kind: EasingType) -> f32 {
    kind.apply(progress)
}

fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
