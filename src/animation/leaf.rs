use crate::animation::easing::EasingType;
use crate::animation::options::{AnimationOptions, ticks_for_millis};
use crate::animation::sink::TransformSink;
use crate::animation::values::{AttributeKind, Modifier, TransformValue};

/// A single attribute transition driven one tick at a time.
///
/// # Phases
///
/// ```text
/// idle -> waiting (optional delay) -> forward -> [reverse pass] -> repeat | terminal
/// ```
///
/// Each run interpolates over `ceil(duration_ms / 1000 * tick_rate)` ticks
/// (at least one). A forward run captures its start value from the sink on
/// its first interpolating tick and targets `start ⊕ modifier`. A reverse pass
/// interpolates from wherever the sink was when the forward run completed back
/// to that run's start value.
///
/// Repeat and reverse interact as follows when a run completes:
/// - a completed reverse pass blocks the next reverse pass as long as repeat
///   capacity remains, so the leaf repeats forward first;
/// - otherwise a reverse pass is scheduled if reverse capacity remains;
/// - otherwise a forward repeat is scheduled if repeat capacity remains;
/// - otherwise the leaf is finished for good.
///
/// Once every repeat cycle is spent, an unbounded reverse count makes the leaf
/// keep reversing, each pass heading back to the previous pass' start value.
#[derive(Debug, Clone)]
pub struct LeafAnimation {
    // === Static config ===
    modifier: Modifier,
    duration_ms: u32,
    options: AnimationOptions,

    // === Runtime flags ===
    running: bool,
    waiting: bool,
    reversing: bool,
    finished: bool,
    /// Endpoints of the current run are in place.
    interpolating: bool,

    // === Counters ===
    run_count: u32,
    repeated_count: u32,
    reversed_count: u32,

    // === Tick bookkeeping ===
    current_tick: u32,
    required_ticks: u32,
    current_delay_tick: u32,
    required_delay_ticks: u32,

    // === Captured endpoints ===
    initial_value: TransformValue,
    target_value: TransformValue,
}

impl LeafAnimation {
    #[must_use]
    pub fn new(modifier: Modifier, duration_ms: u32, options: AnimationOptions) -> Self {
        let identity = TransformValue::identity(modifier.kind());
        Self {
            modifier,
            duration_ms,
            options,

            running: false,
            waiting: false,
            reversing: false,
            finished: false,
            interpolating: false,

            run_count: 0,
            repeated_count: 0,
            reversed_count: 0,

            current_tick: 0,
            required_ticks: 1,
            current_delay_tick: 0,
            required_delay_ticks: 0,

            initial_value: identity,
            target_value: identity,
        }
    }

    /// Advances the animation by one tick and writes the result into `sink`.
    ///
    /// Does nothing once the leaf is finished.
    pub fn update(&mut self, sink: &mut dyn TransformSink, ticks_per_second: u32) {
        if self.finished {
            log::warn!("Ignoring update of a finished {:?} animation", self.kind());
            return;
        }

        if !self.running {
            self.begin_run(ticks_per_second);
        }

        if self.waiting {
            if self.current_delay_tick >= self.required_delay_ticks {
                self.waiting = false;
            } else {
                self.current_delay_tick += 1;
                return;
            }
        }

        self.current_tick += 1;
        let raw_progress = self.current_tick as f32 / self.required_ticks as f32;
        let progress = self.options.easing_type.apply(raw_progress);

        if !self.interpolating {
            if !self.reversing {
                self.initial_value = TransformValue::read(self.kind(), sink);
                self.target_value = self.initial_value.compose(self.modifier);
            }
            self.interpolating = true;
        }

        self.initial_value
            .interpolate(self.target_value, progress)
            .write(sink);
        sink.mark_dirty();

        if self.current_tick >= self.required_ticks {
            self.complete_run(sink);
        }
    }

    /// Clears all runtime state so the leaf plays again from scratch.
    pub fn reset(&mut self) {
        *self = Self::new(self.modifier, self.duration_ms, self.options);
    }

    fn begin_run(&mut self, ticks_per_second: u32) {
        self.required_ticks = ticks_for_millis(self.duration_ms, ticks_per_second).max(1);
        self.current_tick = 0;
        self.interpolating = false;

        if let Some(delay_ms) = self.pending_delay_ms() {
            self.required_delay_ticks = ticks_for_millis(delay_ms, ticks_per_second);
            self.current_delay_tick = 0;
            self.waiting = true;
            log::trace!(
                "{:?} animation waiting {} ticks before run {}",
                self.kind(),
                self.required_delay_ticks,
                self.run_count + 1
            );
        }

        // "Occupied", not necessarily interpolating yet.
        self.running = true;
    }

    /// Delay that applies to the run about to start, in priority order:
    /// initial, reverse, repeat.
    fn pending_delay_ms(&self) -> Option<u32> {
        let options = &self.options;
        if self.run_count == 0 && !self.reversing && options.initial_delay_ms > 0 {
            Some(options.initial_delay_ms)
        } else if self.reversing && options.reverse_delay_ms > 0 {
            Some(options.reverse_delay_ms)
        } else if !self.reversing && self.run_count > 0 && options.repeat_delay_ms > 0 {
            Some(options.repeat_delay_ms)
        } else {
            None
        }
    }

    fn complete_run(&mut self, sink: &dyn TransformSink) {
        let mut reverse_blocked_by_repeat = false;
        if self.reversing {
            self.reversing = false;
            self.reversed_count = self.reversed_count.saturating_add(1);
            reverse_blocked_by_repeat = self.options.can_repeat(self.repeated_count);
        } else if self.run_count > 0 {
            self.repeated_count = self.repeated_count.saturating_add(1);
        }

        self.finished = true;
        self.running = false;
        self.interpolating = false;
        self.run_count = self.run_count.saturating_add(1);

        if !reverse_blocked_by_repeat && self.options.can_reverse(self.reversed_count) {
            self.reversing = true;
            self.finished = false;
            self.target_value = self.initial_value;
            self.initial_value = TransformValue::read(self.kind(), sink);
            log::trace!(
                "{:?} animation reversing (pass {})",
                self.kind(),
                self.reversed_count + 1
            );
        } else if self.options.can_repeat(self.repeated_count) {
            self.finished = false;
            log::trace!(
                "{:?} animation repeating (cycle {})",
                self.kind(),
                self.repeated_count + 1
            );
        } else {
            log::trace!(
                "{:?} animation finished after {} runs",
                self.kind(),
                self.run_count
            );
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        self.modifier.kind()
    }

    #[must_use]
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    #[must_use]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    #[must_use]
    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    #[must_use]
    pub fn easing_type(&self) -> EasingType {
        self.options.easing_type
    }

    /// The leaf is occupied: waiting out a delay or mid-run.
    #[inline]
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    #[inline]
    #[must_use]
    pub fn waiting(&self) -> bool {
        self.waiting
    }

    #[inline]
    #[must_use]
    pub fn reversing(&self) -> bool {
        self.reversing
    }

    #[inline]
    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Completed runs, forward and backward.
    #[must_use]
    pub fn run_count(&self) -> u32 {
        self.run_count
    }

    #[must_use]
    pub fn repeated_count(&self) -> u32 {
        self.repeated_count
    }

    #[must_use]
    pub fn reversed_count(&self) -> u32 {
        self.reversed_count
    }

    #[must_use]
    pub fn current_tick(&self) -> u32 {
        self.current_tick
    }

    #[must_use]
    pub fn required_ticks(&self) -> u32 {
        self.required_ticks
    }

    #[must_use]
    pub fn current_delay_tick(&self) -> u32 {
        self.current_delay_tick
    }

    #[must_use]
    pub fn required_delay_ticks(&self) -> u32 {
        self.required_delay_ticks
    }

    #[must_use]
    pub fn initial_value(&self) -> TransformValue {
        self.initial_value
    }

    #[must_use]
    pub fn target_value(&self) -> TransformValue {
        self.target_value
    }
}
