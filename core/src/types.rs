//! Shared primitive types used across the entire simulation.

/// A simulation tick. `ticks_per_day` ticks make one simulated day.
pub type Tick = u64;

/// A completed simulated day.
pub type Day = u64;

/// The canonical run identifier.
pub type RunId = String;
