//! The tick engine: one pure step of the epidemic model.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Transmission: infected humans shed viruses into the pool
//!   2. Contagion: the contagious window infects healthy humans
//!   3. Day boundary: only when the previous `time` is 0
//!   4. Time decrement
//!   5. Population reconciliation
//!
//! Steps 1 and 2 read the previous state only. Nothing here can fail:
//! population counts are clamped, never rejected.

use crate::{config::SimConfig, state::GameState, types::Day};
use serde::Serialize;

/// What happened at a day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayReport {
    pub day:       Day,
    /// Size of the cohort pulled off the oldest end.
    pub retired:   f64,
    pub dead:      f64,
    /// Folded back into the newest cohort.
    pub survivors: f64,
}

/// Advance `state` by one tick.
pub fn tick(state: &GameState, config: &SimConfig) -> GameState {
    advance(state, config).0
}

/// Advance `state` by one tick, also reporting the day boundary if one fired.
pub fn advance(state: &GameState, config: &SimConfig) -> (GameState, Option<DayReport>) {
    let mut next = state.clone();

    // 1. Transmission
    let transmitted = state.total_infected()
        * state.rate_of_replication as f64
        * config.replication_factor;
    next.current_viruses += transmitted;
    next.total_viruses += transmitted;

    // 2. Contagion
    let contagious = state.infected.contagious(state.contagion_time as usize);
    let new_infections = (contagious * state.rate_of_infection as f64 * config.infection_factor)
        .min(state.healthy_humans)
        .max(0.0);
    let pending = state.fractional_infected + new_infections;
    let whole = pending.floor();
    // Only whole humans move into the buffer, and never more than are healthy.
    let moved = whole.min(state.healthy_humans.floor().max(0.0));
    next.fractional_infected = if moved < whole { 0.0 } else { pending - whole };
    next.infected.add_newest(moved);

    // 3. Day boundary
    let report = if state.time == 0 {
        next.time = config.ticks_per_day;
        next.day += 1;

        let sick = next.infected.retire_oldest();
        let dead = (sick * state.lethality * config.mortality_factor).clamp(0.0, sick.max(0.0));
        let survivors = sick - dead;
        next.infected.add_newest(survivors);
        next.dead_humans += dead;

        log::debug!(
            "day={} retired={sick:.3} dead={dead:.3} survivors={survivors:.3}",
            next.day
        );
        Some(DayReport { day: next.day, retired: sick, dead, survivors })
    } else {
        None
    };

    // 4. Time decrement
    next.time = next.time.saturating_sub(1);

    // 5. Population reconciliation
    next.healthy_humans = next.reconciled_healthy();

    (next, report)
}
