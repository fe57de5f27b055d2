//! Simulation parameters.
//!
//! The tick math reads its coefficients from here rather than from
//! literals, so tests can run small worlds with exact numbers.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Ticks in one simulated day. The day boundary fires once per cycle.
    pub ticks_per_day:      u32,
    /// Fixed population ceiling for the whole run.
    pub total_humans:       f64,
    /// Viruses produced per infected human per replication level, per tick.
    pub replication_factor: f64,
    /// New infections per contagious human per infection level, per tick.
    pub infection_factor:   f64,
    /// Fraction of a retired cohort killed per lethality level.
    pub mortality_factor:   f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks_per_day:      20,
            total_humans:       7_000_000_000.0,
            replication_factor: 0.1,
            infection_factor:   0.01,
            mortality_factor:   0.05,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file. Missing fields fall back to `Default`.
    pub fn load(path: &str) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::Other(anyhow::anyhow!("Cannot read {path}: {e}")))?;
        let config: SimConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Config with a 100-human world for use in tests.
    pub fn default_test() -> Self {
        Self {
            total_humans: 100.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.ticks_per_day == 0 {
            return Err(invalid("ticks_per_day must be at least 1"));
        }
        if !self.total_humans.is_finite() || self.total_humans <= 0.0 {
            return Err(invalid("total_humans must be a positive finite number"));
        }
        let factors = [
            ("replication_factor", self.replication_factor),
            ("infection_factor",   self.infection_factor),
            ("mortality_factor",   self.mortality_factor),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(&format!("{name} must be finite and non-negative, got {value}")));
            }
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> SimError {
    SimError::InvalidConfig { reason: reason.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::default_test().validate().is_ok());
    }

    #[test]
    fn zero_ticks_per_day_rejected() {
        let config = SimConfig { ticks_per_day: 0, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig { .. })));
    }

    #[test]
    fn negative_factor_rejected() {
        let config = SimConfig { mortality_factor: -0.1, ..SimConfig::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("mortality_factor"), "got: {err}");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{ "total_humans": 500 }"#).unwrap();
        assert_eq!(config.total_humans, 500.0);
        assert_eq!(config.ticks_per_day, 20);
        assert_eq!(config.mortality_factor, 0.05);
    }

    #[test]
    fn load_reads_and_validates_a_file() {
        let dir = std::env::temp_dir();
        let good = dir.join("outbreak-config-good.json");
        std::fs::write(&good, r#"{ "ticks_per_day": 10, "mortality_factor": 1.0 }"#).unwrap();
        let config = SimConfig::load(good.to_str().unwrap()).unwrap();
        assert_eq!(config.ticks_per_day, 10);
        assert_eq!(config.total_humans, 7_000_000_000.0);

        let bad = dir.join("outbreak-config-bad.json");
        std::fs::write(&bad, r#"{ "ticks_per_day": 0 }"#).unwrap();
        assert!(matches!(
            SimConfig::load(bad.to_str().unwrap()),
            Err(SimError::InvalidConfig { .. })
        ));
        let missing = SimConfig::load("/nonexistent/outbreak.json").unwrap_err();
        assert!(matches!(missing, SimError::Other(_)));
        assert!(missing.to_string().contains("Cannot read /nonexistent/outbreak.json"), "got: {missing}");

        let garbled = dir.join("outbreak-config-garbled.json");
        std::fs::write(&garbled, "{ not json").unwrap();
        assert!(matches!(
            SimConfig::load(garbled.to_str().unwrap()),
            Err(SimError::Serialization(_))
        ));
    }
}
