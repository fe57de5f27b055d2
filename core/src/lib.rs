//! Simulation core for a virus idle game: a cohort-aged epidemic model
//! advanced one tick at a time, plus the upgrade catalog the player
//! spends viruses on.
//!
//! The pure entry points are [`state::create_initial_state`],
//! [`tick::tick`], [`catalog::ACTIONS`] and [`purchase::apply_action`].
//! [`engine::SimEngine`] wraps them for drivers that want a clock,
//! queued commands and an event log.

pub mod catalog;
pub mod clock;
pub mod cohort;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod format;
pub mod purchase;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod tick;
pub mod types;
