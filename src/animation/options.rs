use serde::{Deserialize, Serialize};

use crate::animation::easing::EasingType;

/// Timing options of a leaf animation.
///
/// Every option is independent. Counts of `0` mean "unbounded" for the
/// respective behaviour, delays of `0` skip the waiting phase entirely.
///
/// ```rust,ignore
/// let options = AnimationOptions::new()
///     .with_easing(EasingType::EaseInOut)
///     .with_reverse(1)
///     .with_reverse_delay_ms(250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    pub easing_type: EasingType,
    /// Wait before the very first forward run.
    pub initial_delay_ms: u32,

    pub repeat: bool,
    /// Number of repeat cycles, `0` repeats forever.
    pub repeat_count: u32,
    /// Wait before each repeated forward run.
    pub repeat_delay_ms: u32,

    pub reverse: bool,
    /// Number of backward runs, `0` reverses forever.
    pub reverse_count: u32,
    /// Wait before each backward run.
    pub reverse_delay_ms: u32,
}

impl AnimationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_easing(mut self, easing_type: EasingType) -> Self {
        self.easing_type = easing_type;
        self
    }

    #[must_use]
    pub fn with_initial_delay_ms(mut self, delay_ms: u32) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    /// Enables repeating with the given cycle count (`0` = forever).
    #[must_use]
    pub fn with_repeat(mut self, count: u32) -> Self {
        self.repeat = true;
        self.repeat_count = count;
        self
    }

    #[must_use]
    pub fn with_repeat_delay_ms(mut self, delay_ms: u32) -> Self {
        self.repeat_delay_ms = delay_ms;
        self
    }

    /// Enables reversing with the given pass count (`0` = forever).
    #[must_use]
    pub fn with_reverse(mut self, count: u32) -> Self {
        self.reverse = true;
        self.reverse_count = count;
        self
    }

    #[must_use]
    pub fn with_reverse_delay_ms(mut self, delay_ms: u32) -> Self {
        self.reverse_delay_ms = delay_ms;
        self
    }

    /// Whether another repeat cycle is still allowed after `repeated` cycles.
    #[inline]
    pub(crate) fn can_repeat(&self, repeated: u32) -> bool {
        self.repeat && (self.repeat_count == 0 || self.repeat_count > repeated)
    }

    /// Whether another backward pass is still allowed after `reversed` passes.
    #[inline]
    pub(crate) fn can_reverse(&self, reversed: u32) -> bool {
        self.reverse && (self.reverse_count == 0 || self.reverse_count > reversed)
    }
}

/// Converts a span in milliseconds into whole ticks, rounding up.
///
/// Computed as `ceil(ms * rate / 1000)` in integers so the result is exact.
#[inline]
pub(crate) fn ticks_for_millis(millis: u32, ticks_per_second: u32) -> u32 {
    let ticks = (u64::from(millis) * u64::from(ticks_per_second)).div_ceil(1000);
    u32::try_from(ticks).unwrap_or(u32::MAX)
}
