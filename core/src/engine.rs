//! The simulation engine: the driver-facing wrapper around the pure
//! tick and purchase functions.
//!
//! ORDER within one `tick()` call (fixed, never reordered):
//!   1. Clock advance
//!   2. Queued player commands, in submission order
//!   3. Tick engine (`tick::advance`)
//!   4. Day-boundary event, if one fired
//!
//! RULES:
//!   - The engine holds exactly one `GameState` and replaces it
//!     wholesale after every step; nothing edits it in place.
//!   - Purchases go through `try_purchase`. Rejections are logged as
//!     events, not applied.
//!   - All state changes are recorded in the event store.

use crate::{
    catalog::ActionKind,
    clock::SimClock,
    command::PlayerCommand,
    config::SimConfig,
    error::{SimError, SimResult},
    event::SimEvent,
    purchase::try_purchase,
    snapshot::GameSnapshot,
    state::{create_initial_state, GameState},
    store::EventStore,
    tick,
    types::RunId,
};
use std::collections::VecDeque;

pub struct SimEngine {
    pub run_id: RunId,
    pub clock:  SimClock,
    config:     SimConfig,
    state:      GameState,
    store:      EventStore,
    queued:     VecDeque<PlayerCommand>,
}

impl SimEngine {
    pub fn new(run_id: RunId, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let mut engine = Self {
            clock:  SimClock::new(run_id.clone()),
            state:  create_initial_state(&config),
            store:  EventStore::new(),
            queued: VecDeque::new(),
            config,
            run_id,
        };
        engine.record(
            "engine",
            SimEvent::RunInitialized {
                run_id:       engine.run_id.clone(),
                total_humans: engine.config.total_humans,
            },
        )?;
        log::info!(
            "run {} initialized: {} humans, {} ticks/day",
            engine.run_id,
            engine.config.total_humans,
            engine.config.ticks_per_day
        );
        Ok(engine)
    }

    /// Engine over `SimConfig::default_test()`.
    pub fn build_test(run_id: RunId) -> SimResult<Self> {
        Self::new(run_id, SimConfig::default_test())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.clock, &self.state, &self.config)
    }

    /// Queue a command for the start of the next tick.
    pub fn submit_command(&mut self, command: PlayerCommand) {
        self.queued.push_back(command);
    }

    /// Apply a command right now, between ticks.
    /// A refused purchase is recorded and reported as an event, not an error.
    pub fn apply_command(&mut self, command: PlayerCommand) -> SimResult<Vec<SimEvent>> {
        let received = SimEvent::PlayerCommandReceived {
            tick:         self.clock.current_tick,
            command_type: command.type_name().to_string(),
        };
        self.record("player", received.clone())?;
        let mut events = vec![received];

        match command {
            PlayerCommand::Pause => self.clock.pause(),
            PlayerCommand::Resume => self.clock.resume(),
            PlayerCommand::SetSpeed { speed } => self.clock.set_speed(speed),
            PlayerCommand::Purchase { action } => match self.purchase(action) {
                Ok(event) => events.push(event),
                Err(e @ (SimError::Hidden { .. } | SimError::Maxed { .. } | SimError::Unaffordable { .. })) => {
                    events.push(SimEvent::PurchaseRejected {
                        tick: self.clock.current_tick,
                        action,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            },
        }
        Ok(events)
    }

    /// Buy `action` against the current state.
    pub fn purchase(&mut self, action: ActionKind) -> SimResult<SimEvent> {
        let tick = self.clock.current_tick;
        let cost = action.def().cost(&self.state);
        match try_purchase(&self.state, action, &self.config) {
            Ok(next) => {
                self.state = next;
                log::debug!("tick={tick} purchased {action:?} for {cost}");
                let event = SimEvent::UpgradePurchased { tick, action, cost };
                self.record("purchase", event.clone())?;
                Ok(event)
            }
            Err(e) => {
                log::warn!("tick={tick} purchase of {action:?} rejected: {e}");
                self.record(
                    "purchase",
                    SimEvent::PurchaseRejected { tick, action, reason: e.to_string() },
                )?;
                Err(e)
            }
        }
    }

    /// Advance one tick. This is the core simulation step.
    pub fn tick(&mut self) -> SimResult<Vec<SimEvent>> {
        if self.clock.paused {
            return Err(SimError::Paused);
        }

        let current_tick = self.clock.advance();
        let mut tick_events = Vec::new();

        while let Some(command) = self.queued.pop_front() {
            tick_events.extend(self.apply_command(command)?);
        }

        let (next, report) = tick::advance(&self.state, &self.config);
        self.state = next;

        if let Some(report) = report {
            let event = SimEvent::DayCompleted {
                tick:      current_tick,
                day:       report.day,
                retired:   report.retired,
                dead:      report.dead,
                survivors: report.survivors,
            };
            self.record("tick", event.clone())?;
            tick_events.push(event);
        }

        Ok(tick_events)
    }

    /// Run n ticks in a loop. Used for testing and fast-forward.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<()> {
        self.clock.resume();
        for _ in 0..n {
            self.tick()?;
        }
        self.clock.pause();
        Ok(())
    }

    fn record(&mut self, source: &str, event: SimEvent) -> SimResult<()> {
        self.store.append(&self.run_id, self.clock.current_tick, source, &event)
    }
}
