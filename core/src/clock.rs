//! Simulation clock: tick count, speed control and pause.
//!
//! The clock is for drivers. The tick math never reads it; the
//! in-day countdown lives on `GameState::time`.

use crate::types::{RunId, Tick};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimClock {
    pub run_id:       RunId,
    pub current_tick: Tick,
    pub speed:        SimSpeed,
    pub paused:       bool,
}

impl SimClock {
    pub fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            current_tick: 0,
            speed: SimSpeed::Normal,
            paused: true,
        }
    }

    /// Advance one tick. Returns the new tick number.
    pub fn advance(&mut self) -> Tick {
        self.current_tick += 1;
        self.current_tick
    }

    pub fn pause(&mut self)  { self.paused = true;  }
    pub fn resume(&mut self) { self.paused = false; }

    pub fn set_speed(&mut self, speed: SimSpeed) {
        self.speed = speed;
    }

    pub fn ticks_per_real_second(&self) -> u32 {
        self.speed.ticks_per_real_second()
    }

    /// Wall-clock gap a real-time driver leaves between ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_real_second()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SimSpeed {
    Normal,  // 10 ticks/s (one day per 2 real seconds)
    Fast,    // 50 ticks/s
    Turbo,   // 200 ticks/s
}

impl SimSpeed {
    /// Parse a `--speed` style name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::Normal),
            "fast"   => Some(Self::Fast),
            "turbo"  => Some(Self::Turbo),
            _        => None,
        }
    }

    pub fn ticks_per_real_second(&self) -> u32 {
        match self {
            Self::Normal => 10,
            Self::Fast   => 50,
            Self::Turbo  => 200,
        }
    }
}
