use crate::catalog::ActionKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Cannot afford {action:?}: costs {cost}, have {available}")]
    Unaffordable {
        action:    ActionKind,
        cost:      f64,
        available: f64,
    },

    #[error("Action {action:?} is already maxed")]
    Maxed { action: ActionKind },

    #[error("Action {action:?} is not unlocked yet")]
    Hidden { action: ActionKind },

    #[error("Engine is paused")]
    Paused,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
