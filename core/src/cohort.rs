//! Infected population bucketed by days since infection.
//!
//! A fixed ring of `COHORT_SLOTS` counters. Logical index 0 is the
//! newest cohort, index `COHORT_SLOTS - 1` the oldest. Retiring the
//! oldest cohort moves the head back by one slot instead of shifting
//! the array, so a day boundary never allocates or copies.

use serde::{Serialize, Serializer};
use std::ops::Index;

/// Maximum disease duration in simulated days.
pub const COHORT_SLOTS: usize = 30;

#[derive(Debug, Clone, Copy)]
pub struct CohortBuffer {
    slots: [f64; COHORT_SLOTS],
    /// Physical position of logical index 0.
    head:  usize,
}

impl CohortBuffer {
    pub fn new() -> Self {
        Self { slots: [0.0; COHORT_SLOTS], head: 0 }
    }

    /// Build from counts listed newest first.
    #[cfg(test)]
    fn from_cohorts(cohorts: [f64; COHORT_SLOTS]) -> Self {
        Self { slots: cohorts, head: 0 }
    }

    fn physical(&self, age: usize) -> usize {
        (self.head + age) % COHORT_SLOTS
    }

    /// Add `count` humans to the cohort at logical index `age`.
    /// Panics if `age >= COHORT_SLOTS`.
    pub fn add(&mut self, age: usize, count: f64) {
        assert!(age < COHORT_SLOTS, "cohort index {age} out of range");
        let slot = self.physical(age);
        self.slots[slot] += count;
    }

    pub fn add_newest(&mut self, count: f64) {
        self.add(0, count);
    }

    pub fn add_oldest(&mut self, count: f64) {
        self.add(COHORT_SLOTS - 1, count);
    }

    /// Remove and return the oldest cohort. Every other cohort ages by
    /// one day and the vacated slot becomes the new, empty, newest one.
    pub fn retire_oldest(&mut self) -> f64 {
        let oldest = self.physical(COHORT_SLOTS - 1);
        let sick = self.slots[oldest];
        self.slots[oldest] = 0.0;
        self.head = oldest;
        sick
    }

    /// Sum of the `window` newest cohorts, clamped to the buffer length.
    pub fn contagious(&self, window: usize) -> f64 {
        self.iter().take(window.min(COHORT_SLOTS)).sum()
    }

    pub fn total(&self) -> f64 {
        self.slots.iter().sum()
    }

    /// Cohorts newest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..COHORT_SLOTS).map(move |age| self.slots[self.physical(age)])
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0.0
    }
}

impl Default for CohortBuffer {
    fn default() -> Self { Self::new() }
}

impl Index<usize> for CohortBuffer {
    type Output = f64;

    fn index(&self, age: usize) -> &f64 {
        assert!(age < COHORT_SLOTS, "cohort index {age} out of range");
        &self.slots[self.physical(age)]
    }
}

/// Equality is over the logical sequence, not the ring layout.
impl PartialEq for CohortBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Serialize for CohortBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
