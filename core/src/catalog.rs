//! The upgrade catalog.
//!
//! RULE: the table is static and ordered; order is display order only.
//! Every action is data (visibility gate, cost curve, effect, cap), so
//! adding a field to `GameState` that an action should touch forces a
//! match arm here rather than a stringly-typed lookup.

use crate::{
    config::SimConfig,
    purchase::StateUpdate,
    state::{GameState, Upgrade},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Replicate,
    InfectHuman,
    LowerSanitation,
    AdaptPhysiology,
    AdaptImmuneSystem,
    WeakenDefenses,
    LowerIncubationTime,
    InvadeSystems,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        Self::Replicate,
        Self::InfectHuman,
        Self::LowerSanitation,
        Self::AdaptPhysiology,
        Self::AdaptImmuneSystem,
        Self::WeakenDefenses,
        Self::LowerIncubationTime,
        Self::InvadeSystems,
    ];

    pub fn def(self) -> &'static ActionDef {
        match self {
            Self::Replicate           => &ACTIONS[0],
            Self::InfectHuman         => &ACTIONS[1],
            Self::LowerSanitation     => &ACTIONS[2],
            Self::AdaptPhysiology     => &ACTIONS[3],
            Self::AdaptImmuneSystem   => &ACTIONS[4],
            Self::WeakenDefenses      => &ACTIONS[5],
            Self::LowerIncubationTime => &ACTIONS[6],
            Self::InvadeSystems       => &ACTIONS[7],
        }
    }
}

/// When an action is shown to the player at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    Always,
    /// Strictly more than this many viruses produced over the run.
    TotalVirusesAbove(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostCurve {
    Free,
    /// `floor(base * factor^level)` of the upgraded feature.
    Exponential { base: f64, factor: f64, upgrade: Upgrade },
    /// `floor(base - sanitation * factor^manual_infections)`, never below 0.
    /// Each manual infection deepens the sanitation discount.
    ManualInfection { base: f64, factor: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    BreedVirus,
    InfectHuman,
    Raise(Upgrade),
}

/// Design cap after which the UI stops offering the action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cap {
    None,
    Level(Upgrade, f64),
    /// Maxed once a retired cohort dies in full at the configured
    /// mortality factor.
    WholeCohortLethal,
    /// Maxed once fewer than one healthy human is left.
    HealthyHumansExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionDef {
    pub kind:        ActionKind,
    pub name:        &'static str,
    pub description: &'static str,
    pub visibility:  Visibility,
    pub cost:        CostCurve,
    pub effect:      Effect,
    pub cap:         Cap,
}

pub const SANITATION_CAP: f64 = 30.0;
pub const UPGRADE_CAP:    f64 = 50.0;

const fn raise(base: f64, upgrade: Upgrade) -> CostCurve {
    CostCurve::Exponential { base, factor: 1.04, upgrade }
}

pub static ACTIONS: [ActionDef; 8] = [
    ActionDef {
        kind:        ActionKind::Replicate,
        name:        "Replicate",
        description: "Create a new copy of the virus. Upgrades consume viruses.",
        visibility:  Visibility::Always,
        cost:        CostCurve::Free,
        effect:      Effect::BreedVirus,
        cap:         Cap::None,
    },
    ActionDef {
        kind:        ActionKind::InfectHuman,
        name:        "Infect Human",
        description: "Jump to a human host. Humans incubate the disease and make more viruses. They might infect other humans.",
        visibility:  Visibility::TotalVirusesAbove(50.0),
        cost:        CostCurve::ManualInfection { base: 100.0, factor: 1.5 },
        effect:      Effect::InfectHuman,
        cap:         Cap::HealthyHumansExhausted,
    },
    ActionDef {
        kind:        ActionKind::LowerSanitation,
        name:        "Lower sanitation",
        description: "Easier to jump to human hosts.",
        visibility:  Visibility::TotalVirusesAbove(50.0),
        cost:        CostCurve::Exponential { base: 100.0, factor: 1.02, upgrade: Upgrade::Sanitation },
        effect:      Effect::Raise(Upgrade::Sanitation),
        cap:         Cap::Level(Upgrade::Sanitation, SANITATION_CAP),
    },
    ActionDef {
        kind:        ActionKind::AdaptPhysiology,
        name:        "Adapt to human physiology",
        description: "Humans create more viruses.",
        visibility:  Visibility::TotalVirusesAbove(100.0),
        cost:        raise(200.0, Upgrade::RateOfReplication),
        effect:      Effect::Raise(Upgrade::RateOfReplication),
        cap:         Cap::Level(Upgrade::RateOfReplication, UPGRADE_CAP),
    },
    ActionDef {
        kind:        ActionKind::AdaptImmuneSystem,
        name:        "Adapt to human immune system",
        description: "Humans infect each other faster.",
        visibility:  Visibility::TotalVirusesAbove(100.0),
        cost:        raise(200.0, Upgrade::RateOfInfection),
        effect:      Effect::Raise(Upgrade::RateOfInfection),
        cap:         Cap::Level(Upgrade::RateOfInfection, UPGRADE_CAP),
    },
    ActionDef {
        kind:        ActionKind::WeakenDefenses,
        name:        "Weaken defenses",
        description: "Humans infect each other more often.",
        visibility:  Visibility::TotalVirusesAbove(100.0),
        cost:        raise(200.0, Upgrade::ContagionTime),
        effect:      Effect::Raise(Upgrade::ContagionTime),
        cap:         Cap::Level(Upgrade::ContagionTime, UPGRADE_CAP),
    },
    ActionDef {
        kind:        ActionKind::LowerIncubationTime,
        name:        "Lower incubation time",
        description: "Improved replication DNA. Time from infection to activation is lowered.",
        visibility:  Visibility::TotalVirusesAbove(100.0),
        cost:        raise(200.0, Upgrade::IncubationTime),
        effect:      Effect::Raise(Upgrade::IncubationTime),
        cap:         Cap::Level(Upgrade::IncubationTime, UPGRADE_CAP),
    },
    ActionDef {
        kind:        ActionKind::InvadeSystems,
        name:        "Invade systems",
        description: "Kill them all.",
        visibility:  Visibility::TotalVirusesAbove(10_000.0),
        cost:        raise(200.0, Upgrade::Lethality),
        effect:      Effect::Raise(Upgrade::Lethality),
        cap:         Cap::WholeCohortLethal,
    },
];

impl ActionDef {
    pub fn visible(&self, state: &GameState) -> bool {
        match self.visibility {
            Visibility::Always => true,
            Visibility::TotalVirusesAbove(threshold) => state.total_viruses > threshold,
        }
    }

    /// Advisory: `purchase` ignores this, `try_purchase` honours it.
    pub fn maxed(&self, state: &GameState, config: &SimConfig) -> bool {
        match self.cap {
            Cap::None => false,
            Cap::Level(upgrade, cap) => upgrade.level(state) >= cap,
            Cap::WholeCohortLethal => state.lethality * config.mortality_factor >= 1.0,
            Cap::HealthyHumansExhausted => state.healthy_humans < 1.0,
        }
    }

    /// Price against the pre-purchase state.
    pub fn cost(&self, state: &GameState) -> f64 {
        self.cost.evaluate(state)
    }

    pub fn affordable(&self, state: &GameState) -> bool {
        state.current_viruses >= self.cost(state)
    }

    pub fn level_up(&self, state: &GameState) -> StateUpdate {
        self.effect.update(state)
    }
}

impl CostCurve {
    pub fn evaluate(&self, state: &GameState) -> f64 {
        match *self {
            CostCurve::Free => 0.0,
            CostCurve::Exponential { base, factor, upgrade } => {
                (base * factor.powf(upgrade.level(state))).floor()
            }
            CostCurve::ManualInfection { base, factor } => {
                let discount = state.sanitation as f64 * factor.powi(state.manual_infections as i32);
                (base - discount).floor().max(0.0)
            }
        }
    }
}

impl Effect {
    /// The partial update this effect merges over a state.
    pub fn update(&self, state: &GameState) -> StateUpdate {
        match *self {
            Effect::BreedVirus => StateUpdate {
                current_viruses: Some(state.current_viruses + 1.0),
                total_viruses:   Some(state.total_viruses + 1.0),
                ..StateUpdate::default()
            },
            Effect::InfectHuman => {
                // Manual infections land in the oldest cohort, processed at
                // the next day boundary.
                let moved = state.healthy_humans.clamp(0.0, 1.0);
                let mut infected = state.infected;
                infected.add_oldest(moved);
                StateUpdate {
                    infected:          Some(infected),
                    healthy_humans:    Some(state.healthy_humans - moved),
                    manual_infections: Some(state.manual_infections + 1),
                    ..StateUpdate::default()
                }
            }
            Effect::Raise(upgrade) => StateUpdate {
                upgrade: Some((upgrade, upgrade.level(state) + 1.0)),
                ..StateUpdate::default()
            },
        }
    }
}

/// Actions the player can currently see, in catalog order.
pub fn visible_actions(state: &GameState) -> impl Iterator<Item = &'static ActionDef> + '_ {
    ACTIONS.iter().filter(move |a| a.visible(state))
}
