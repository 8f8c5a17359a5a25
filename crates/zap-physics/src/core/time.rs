/// Fixed-tick accumulator for the driver that calls [`World::update`](crate::World::update).
///
/// Frame times come in as variable milliseconds; `accumulate` answers how
/// many fixed ticks of `tick_ms` to run so the simulation stays deterministic.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick_ms: f32,
    accumulator: f32,
    max_ticks: u32,
}

impl FixedTimestep {
    /// Default cap on ticks per frame, so a long stall doesn't snowball.
    pub const MAX_TICKS_PER_FRAME: u32 = 10;

    /// Tick length used when the requested one is unusable (60 Hz).
    pub const DEFAULT_TICK_MS: f32 = 1000.0 / 60.0;

    /// A tick length that is not finite and positive falls back to
    /// [`DEFAULT_TICK_MS`](Self::DEFAULT_TICK_MS).
    pub fn new(tick_ms: f32) -> Self {
        let tick_ms = if tick_ms.is_finite() && tick_ms > 0.0 {
            tick_ms
        } else {
            log::warn!("Tick length must be positive (got {tick_ms} ms), using 60 Hz");
            Self::DEFAULT_TICK_MS
        };
        Self {
            tick_ms,
            accumulator: 0.0,
            max_ticks: Self::MAX_TICKS_PER_FRAME,
        }
    }

    /// Ticks at `hz` per second.
    pub fn from_hz(hz: f32) -> Self {
        Self::new(1000.0 / hz)
    }

    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks.max(1);
        self
    }

    /// Add a frame's elapsed milliseconds. Returns the number of ticks to run.
    ///
    /// Time beyond `max_ticks` worth of ticks is dropped.
    pub fn accumulate(&mut self, frame_ms: f32) -> u32 {
        let pending = self.accumulator + frame_ms.max(0.0);
        if pending >= self.tick_ms * self.max_ticks as f32 {
            self.accumulator = 0.0;
            return self.max_ticks;
        }
        let ticks = (pending / self.tick_ms) as u32;
        self.accumulator = (pending - ticks as f32 * self.tick_ms).max(0.0);
        ticks
    }

    /// Fraction of the next tick already accumulated, in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.tick_ms).clamp(0.0, 1.0)
    }

    pub fn tick_ms(&self) -> f32 {
        self.tick_ms
    }
}
