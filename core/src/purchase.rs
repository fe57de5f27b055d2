//! Applying a catalog action to a state.
//!
//! `purchase` deducts unconditionally; callers gate it. `try_purchase`
//! is the guarded form the engine uses.

use crate::{
    catalog::{ActionKind, Effect},
    cohort::CohortBuffer,
    config::SimConfig,
    error::{SimError, SimResult},
    state::{GameState, Upgrade},
};

/// Fields an effect overwrites. `None` leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub current_viruses:   Option<f64>,
    pub total_viruses:     Option<f64>,
    pub healthy_humans:    Option<f64>,
    pub manual_infections: Option<u32>,
    pub infected:          Option<CohortBuffer>,
    /// Upgrade and its new level.
    pub upgrade:           Option<(Upgrade, f64)>,
}

impl StateUpdate {
    /// Overlay onto `state`; fields set here win.
    pub fn apply_to(self, mut state: GameState) -> GameState {
        if let Some(v) = self.current_viruses   { state.current_viruses = v; }
        if let Some(v) = self.total_viruses     { state.total_viruses = v; }
        if let Some(v) = self.healthy_humans    { state.healthy_humans = v; }
        if let Some(v) = self.manual_infections { state.manual_infections = v; }
        if let Some(v) = self.infected          { state.infected = v; }
        if let Some((upgrade, level)) = self.upgrade {
            upgrade.set_level(&mut state, level);
        }
        state
    }
}

/// Curried purchase: deduct `cost`, then merge the effect computed from
/// the pre-purchase state on top.
pub fn apply_action(cost: f64, effect: Effect) -> impl Fn(&GameState) -> GameState {
    move |state| {
        let mut charged = state.clone();
        charged.current_viruses -= cost;
        effect.update(state).apply_to(charged)
    }
}

/// Buy `kind` without checking funds, caps or visibility.
pub fn purchase(state: &GameState, kind: ActionKind) -> GameState {
    let def = kind.def();
    apply_action(def.cost(state), def.effect)(state)
}

/// Buy `kind`, refusing when it is hidden, maxed or unaffordable.
/// Caps that depend on simulation parameters are judged against `config`.
pub fn try_purchase(state: &GameState, kind: ActionKind, config: &SimConfig) -> SimResult<GameState> {
    let def = kind.def();
    if !def.visible(state) {
        return Err(SimError::Hidden { action: kind });
    }
    if def.maxed(state, config) {
        return Err(SimError::Maxed { action: kind });
    }
    let cost = def.cost(state);
    if state.current_viruses < cost {
        return Err(SimError::Unaffordable {
            action:    kind,
            cost,
            available: state.current_viruses,
        });
    }
    Ok(apply_action(cost, def.effect)(state))
}
