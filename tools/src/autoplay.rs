//! A seeded stand-in for a player clicking through the catalog.
//!
//! Each tick it clicks Replicate a fixed number of times, then with
//! probability `buy_chance` buys one random upgrade it can afford.

use outbreak_core::{
    catalog::ActionKind,
    engine::SimEngine,
    error::SimResult,
};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct Autoplayer {
    rng:             Pcg64Mcg,
    clicks_per_tick: u32,
    buy_chance:      f64,
    pub purchases:   u64,
}

impl Autoplayer {
    pub fn new(seed: u64, clicks_per_tick: u32) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
            clicks_per_tick,
            buy_chance: 0.25,
            purchases: 0,
        }
    }

    /// Play one tick's worth of input against the engine's current state.
    pub fn play(&mut self, engine: &mut SimEngine) -> SimResult<()> {
        for _ in 0..self.clicks_per_tick {
            engine.purchase(ActionKind::Replicate)?;
        }

        if !self.rng.gen_bool(self.buy_chance) {
            return Ok(());
        }

        let offered: Vec<ActionKind> = engine
            .snapshot()
            .actions
            .iter()
            .filter(|a| a.offered() && a.kind != ActionKind::Replicate)
            .map(|a| a.kind)
            .collect();

        if let Some(&choice) = offered.choose(&mut self.rng) {
            engine.purchase(choice)?;
            self.purchases += 1;
        }
        Ok(())
    }
}
