/// Lets an event through at most once per interval.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    interval_ms: u64,
    last_fired_ms: Option<u64>,
}

impl DebounceGate {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fired_ms: None,
        }
    }

    /// Returns true and records `now_ms` when at least `interval_ms` has
    /// passed since the last firing. Timestamps that go backwards never fire.
    pub fn should_fire(&mut self, now_ms: u64) -> bool {
        let ready = match self.last_fired_ms {
            None => true,
            Some(last) => now_ms >= last && now_ms - last >= self.interval_ms,
        };
        if ready {
            self.last_fired_ms = Some(now_ms);
        }
        ready
    }

    pub fn last_fired_ms(&self) -> Option<u64> {
        self.last_fired_ms
    }

    pub fn reset(&mut self) {
        self.last_fired_ms = None;
    }
}
