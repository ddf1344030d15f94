//! Repeating timers driven by the simulation tick
//!
//! Each timer accumulates elapsed time and reports how many times it is due.
//! A period of zero means "every tick".

use serde::{Deserialize, Serialize};

/// What a timer triggers when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    Fire,
    SpawnEnemy,
    CheckCollisions,
}

/// A repeating callback registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatingTimer {
    pub kind: TimerKind,
    /// Seconds between invocations (0 = every tick)
    pub period: f32,
    accumulator: f32,
}

impl RepeatingTimer {
    pub fn new(kind: TimerKind, period: f32) -> Self {
        Self {
            kind,
            period: period.max(0.0),
            accumulator: 0.0,
        }
    }

    /// Advance by `dt` and return how many invocations are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.period <= 0.0 {
            return 1;
        }
        self.accumulator += dt;
        let mut due = 0;
        while self.accumulator >= self.period {
            self.accumulator -= self.period;
            due += 1;
        }
        due
    }
}

/// Ordered set of repeating timers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    timers: Vec<RepeatingTimer>,
}

impl Scheduler {
    /// Register a repeating timer; re-registering a kind replaces its period
    pub fn schedule(&mut self, kind: TimerKind, period: f32) {
        self.unschedule(kind);
        self.timers.push(RepeatingTimer::new(kind, period));
    }

    pub fn unschedule(&mut self, kind: TimerKind) {
        self.timers.retain(|t| t.kind != kind);
    }

    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    /// Advance every timer and list the due invocations in registration order
    pub fn advance(&mut self, dt: f32) -> Vec<TimerKind> {
        let mut due = Vec::new();
        for timer in &mut self.timers {
            for _ in 0..timer.advance(dt) {
                due.push(timer.kind);
            }
        }
        due
    }
}
