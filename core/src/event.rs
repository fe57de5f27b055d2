//! Everything the engine records while a run is in progress.

use crate::{
    catalog::ActionKind,
    types::{Day, RunId, Tick},
};
use serde::{Deserialize, Serialize};

/// Every event emitted during simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Engine events ──────────────────────────────
    RunInitialized {
        run_id:       RunId,
        total_humans: f64,
    },
    DayCompleted {
        tick:      Tick,
        day:       Day,
        retired:   f64,
        dead:      f64,
        survivors: f64,
    },

    // ── Player events ──────────────────────────────
    PlayerCommandReceived {
        tick:         Tick,
        command_type: String,
    },
    UpgradePurchased {
        tick:   Tick,
        action: ActionKind,
        cost:   f64,
    },
    PurchaseRejected {
        tick:   Tick,
        action: ActionKind,
        reason: String,
    },
}

impl SimEvent {
    /// Stable name for the `event_type` column of the log.
    pub fn type_name(&self) -> &'static str {
        match self {
            SimEvent::RunInitialized { .. }        => "run_initialized",
            SimEvent::DayCompleted { .. }          => "day_completed",
            SimEvent::PlayerCommandReceived { .. } => "player_command_received",
            SimEvent::UpgradePurchased { .. }      => "upgrade_purchased",
            SimEvent::PurchaseRejected { .. }      => "purchase_rejected",
        }
    }
}

/// One row of the event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventLogEntry {
    pub run_id:     RunId,
    pub tick:       Tick,
    pub source:     String,
    pub event_type: String,
    pub payload:    String, // JSON-serialized SimEvent
}
