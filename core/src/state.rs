//! The world record threaded through every tick and purchase.
//!
//! A `GameState` is never mutated once handed out: the tick engine and
//! the purchase mechanism both take `&GameState` and return a fresh one.

use crate::{cohort::CohortBuffer, config::SimConfig, types::Day};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    // ── Virus pool ────────────────────────────────
    pub current_viruses: f64,
    /// Everything ever produced. Never decreases.
    pub total_viruses:   f64,

    // ── Population ────────────────────────────────
    pub total_humans:      f64,
    /// Derived: total minus infected minus dead, clamped at 0.
    pub healthy_humans:    f64,
    pub dead_humans:       f64,
    pub manual_infections: u32,

    // ── Upgrade levels ────────────────────────────
    pub sanitation:          u32,
    pub rate_of_infection:   u32,
    pub rate_of_replication: u32,
    /// Purchasable but not read by the tick math.
    pub incubation_time:     u32,
    pub lethality:           f64,
    pub contagion_time:      u32,

    // ── Calendar ──────────────────────────────────
    pub day:  Day,
    /// Ticks left in the current day. A boundary fires when this is 0.
    pub time: u32,

    /// Sub-integer remainder of new infections carried between ticks.
    pub fractional_infected: f64,
    pub infected:            CohortBuffer,
}

impl GameState {
    /// Fresh world: everybody healthy, no viruses, no upgrades.
    /// `time` starts at 0 so the very first tick opens day 1.
    pub fn initial(config: &SimConfig) -> Self {
        Self {
            current_viruses:     0.0,
            total_viruses:       0.0,
            total_humans:        config.total_humans,
            healthy_humans:      config.total_humans,
            dead_humans:         0.0,
            manual_infections:   0,
            sanitation:          0,
            rate_of_infection:   0,
            rate_of_replication: 0,
            incubation_time:     0,
            lethality:           0.0,
            contagion_time:      0,
            day:                 0,
            time:                0,
            fractional_infected: 0.0,
            infected:            CohortBuffer::new(),
        }
    }

    pub fn total_infected(&self) -> f64 {
        self.infected.total()
    }

    /// Healthy humans implied by the conservation law.
    pub fn reconciled_healthy(&self) -> f64 {
        (self.total_humans - self.total_infected() - self.dead_humans).max(0.0)
    }

    /// Infected + dead + healthy. Equals `total_humans` after every tick.
    pub fn accounted_humans(&self) -> f64 {
        self.total_infected() + self.dead_humans + self.healthy_humans
    }
}

/// Start-of-game snapshot for `config`.
pub fn create_initial_state(config: &SimConfig) -> GameState {
    GameState::initial(config)
}

/// The upgradeable fields of `GameState`, selectable by name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Upgrade {
    Sanitation,
    RateOfInfection,
    RateOfReplication,
    IncubationTime,
    ContagionTime,
    Lethality,
}

impl Upgrade {
    pub fn level(&self, state: &GameState) -> f64 {
        match self {
            Self::Sanitation        => state.sanitation as f64,
            Self::RateOfInfection   => state.rate_of_infection as f64,
            Self::RateOfReplication => state.rate_of_replication as f64,
            Self::IncubationTime    => state.incubation_time as f64,
            Self::ContagionTime     => state.contagion_time as f64,
            Self::Lethality         => state.lethality,
        }
    }

    /// Write `level` into `state`. Integer levels are truncated.
    pub fn set_level(&self, state: &mut GameState, level: f64) {
        let whole = level.max(0.0) as u32;
        match self {
            Self::Sanitation        => state.sanitation = whole,
            Self::RateOfInfection   => state.rate_of_infection = whole,
            Self::RateOfReplication => state.rate_of_replication = whole,
            Self::IncubationTime    => state.incubation_time = whole,
            Self::ContagionTime     => state.contagion_time = whole,
            Self::Lethality         => state.lethality = level,
        }
    }
}
