//! In-memory event log.
//!
//! RULE: only the engine appends. Runs live for the session only, so
//! the log is a plain vector ordered by insertion (and therefore tick).

use crate::{
    error::SimResult,
    event::{EventLogEntry, SimEvent},
    types::{RunId, Tick},
};

#[derive(Debug, Default, Clone)]
pub struct EventStore {
    entries: Vec<EventLogEntry>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, run_id: &RunId, tick: Tick, source: &str, event: &SimEvent) -> SimResult<()> {
        self.entries.push(EventLogEntry {
            run_id:     run_id.clone(),
            tick,
            source:     source.to_string(),
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(event)?,
        });
        Ok(())
    }

    pub fn events_for_tick(&self, tick: Tick) -> Vec<&EventLogEntry> {
        self.entries.iter().filter(|e| e.tick == tick).collect()
    }

    pub fn count_by_type(&self, event_type: &str) -> usize {
        self.entries.iter().filter(|e| e.event_type == event_type).count()
    }

    pub fn entries(&self) -> &[EventLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
