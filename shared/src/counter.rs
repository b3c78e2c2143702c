/// Count-up from 0 to `target`, sampled every `tick_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub target: u64,
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
            tick_ms: tick_ms.max(1),
        }
    }

    /// Displayed value after `elapsed_ms`. Linear, floored, and pinned to the
    /// exact target once the duration has passed.
    pub fn value_at(&self, elapsed_ms: u32) -> u64 {
        if elapsed_ms >= self.duration_ms {
            return self.target;
        }
        let progress = elapsed_ms as f64 / self.duration_ms as f64;
        ((self.target as f64 * progress).floor() as u64).min(self.target)
    }

    /// Number of ticks until the counter shows the target.
    pub fn tick_count(&self) -> u32 {
        self.duration_ms.div_ceil(self.tick_ms).max(1)
    }

    /// Values shown at each tick, ending with the target.
    pub fn frames(&self) -> impl Iterator<Item = u64> + '_ {
        (1..=self.tick_count()).map(move |n| self.value_at(n.saturating_mul(self.tick_ms)))
    }
}
