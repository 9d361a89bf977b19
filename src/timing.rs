use std::time::{Duration, Instant};

/// Ticks per second, kept within `[MIN, MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickRate(u32);

impl TickRate {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 60;
    pub const DEFAULT: u32 = 20;

    pub fn new(per_second: u32) -> Self {
        Self(per_second.clamp(Self::MIN, Self::MAX))
    }

    pub fn per_second(self) -> u32 {
        self.0
    }

    pub fn faster(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    pub fn interval(self) -> Duration {
        Duration::from_secs(1) / self.0
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Elapsed-time gate in front of each game tick.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self { last_tick: Instant::now() }
    }

    /// True once per `rate.interval()`; restarts the interval when it fires.
    pub fn tick_due(&mut self, rate: TickRate) -> bool {
        self.tick_due_at(Instant::now(), rate)
    }

    fn tick_due_at(&mut self, now: Instant, rate: TickRate) -> bool {
        if now.duration_since(self.last_tick) >= rate.interval() {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
