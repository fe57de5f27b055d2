//! The pull-based view a presentation layer reads after every step.
//!
//! A snapshot carries the full `GameState` plus the catalog evaluated
//! against it, so the UI never calls cost or visibility logic itself.

use crate::{
    catalog::{ActionDef, ActionKind, ACTIONS},
    clock::{SimClock, SimSpeed},
    config::SimConfig,
    state::GameState,
    types::{RunId, Tick},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GameSnapshot {
    pub run_id:  RunId,
    pub tick:    Tick,
    pub speed:   SimSpeed,
    pub paused:  bool,
    pub state:   GameState,
    pub actions: Vec<ActionView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionView {
    pub kind:        ActionKind,
    pub name:        &'static str,
    pub description: &'static str,
    pub cost:        f64,
    pub visible:     bool,
    pub affordable:  bool,
    pub maxed:       bool,
}

impl ActionView {
    pub fn evaluate(def: &ActionDef, state: &GameState, config: &SimConfig) -> Self {
        Self {
            kind:        def.kind,
            name:        def.name,
            description: def.description,
            cost:        def.cost(state),
            visible:     def.visible(state),
            affordable:  def.affordable(state),
            maxed:       def.maxed(state, config),
        }
    }

    /// Visible, affordable and not maxed.
    pub fn offered(&self) -> bool {
        self.visible && self.affordable && !self.maxed
    }
}

impl GameSnapshot {
    pub fn capture(clock: &SimClock, state: &GameState, config: &SimConfig) -> Self {
        Self {
            run_id:  clock.run_id.clone(),
            tick:    clock.current_tick,
            speed:   clock.speed,
            paused:  clock.paused,
            state:   state.clone(),
            actions: ACTIONS.iter().map(|def| ActionView::evaluate(def, state, config)).collect(),
        }
    }
}
