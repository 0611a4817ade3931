#![forbid(unsafe_code)]

//! Showcase configuration resolved from the environment and CLI flags.
//!
//! | Variable               | Meaning                                   |
//! |------------------------|-------------------------------------------|
//! | `PPLAY_SEED`           | seed for randomized demos                 |
//! | `PPLAY_DETERMINISTIC`  | `1`/`true` pins the seed when none is set |
//! | `PPLAY_DISPENSE_MS`    | vending auto-dispense delay               |
//! | `PPLAY_ADAPTER_MS`     | plug adapter follow-up delay              |
//! | `PPLAY_NARRATION_MS`   | generic sequencer tick                    |
//! | `PPLAY_LOG`            | tracing filter (falls back to `RUST_LOG`) |
//! | `PPLAY_LOG_JSON`       | `1`/`true` emits JSON log lines           |

use std::env;

use pplay_demos::DemoSettings;
use web_time::Duration;

/// Seed used in deterministic mode when no explicit seed is given.
pub const DEFAULT_DETERMINISTIC_SEED: u64 = 42;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub seed: Option<u64>,
    pub deterministic: bool,
    pub dispense_delay: Duration,
    pub adapter_delay: Duration,
    pub narration_tick: Duration,
    pub log_filter: String,
    pub log_json: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let demo = DemoSettings::default();
        Self {
            seed: None,
            deterministic: false,
            dispense_delay: demo.dispense_delay,
            adapter_delay: demo.adapter_delay,
            narration_tick: demo.narration_tick,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
        }
    }
}

impl ShowcaseConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(&env_get)
    }

    /// Read configuration through `get` (injectable for tests).
    pub fn from_env_with<F: Fn(&str) -> Option<String>>(get: &F) -> Self {
        let defaults = Self::default();
        Self {
            seed: env_u64_with("PPLAY_SEED", get),
            deterministic: env_flag_with("PPLAY_DETERMINISTIC", get),
            dispense_delay: env_ms_with("PPLAY_DISPENSE_MS", get).unwrap_or(defaults.dispense_delay),
            adapter_delay: env_ms_with("PPLAY_ADAPTER_MS", get).unwrap_or(defaults.adapter_delay),
            narration_tick: env_ms_with("PPLAY_NARRATION_MS", get)
                .unwrap_or(defaults.narration_tick),
            log_filter: ["PPLAY_LOG", "RUST_LOG"]
                .into_iter()
                .filter_map(get)
                .find(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            log_json: env_flag_with("PPLAY_LOG_JSON", get),
        }
    }

    /// Apply CLI flags. An explicit seed wins over the environment; the
    /// deterministic flag can only switch deterministic mode on.
    #[must_use]
    pub fn with_overrides(mut self, seed: Option<u64>, deterministic: bool) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self.deterministic |= deterministic;
        self
    }

    /// The seed demos will use. Without an explicit seed, deterministic mode
    /// pins [`DEFAULT_DETERMINISTIC_SEED`] and otherwise a fresh one is drawn.
    #[must_use]
    pub fn resolved_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None if self.deterministic => DEFAULT_DETERMINISTIC_SEED,
            None => rand::random(),
        }
    }

    #[must_use]
    pub fn demo_settings(&self) -> DemoSettings {
        DemoSettings {
            dispense_delay: self.dispense_delay,
            adapter_delay: self.adapter_delay,
            narration_tick: self.narration_tick,
            seed: self.resolved_seed(),
        }
    }
}

fn env_get(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn env_flag_with<F: Fn(&str) -> Option<String>>(name: &str, get: &F) -> bool {
    get(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn env_u64_with<F: Fn(&str) -> Option<String>>(name: &str, get: &F) -> Option<u64> {
    get(name).and_then(|value| value.trim().parse::<u64>().ok())
}

fn env_ms_with<F: Fn(&str) -> Option<String>>(name: &str, get: &F) -> Option<Duration> {
    env_u64_with(name, get).map(Duration::from_millis)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn map_getter<'a>(map: &'a BTreeMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).map(|value| value.to_string())
    }

    #[test]
    fn defaults_without_env() {
        let empty = BTreeMap::new();
        let config = ShowcaseConfig::from_env_with(&map_getter(&empty));
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.dispense_delay, Duration::from_millis(1000));
    }

    #[test]
    fn delays_are_read_in_milliseconds() {
        let mut env = BTreeMap::new();
        env.insert("PPLAY_DISPENSE_MS", "10");
        env.insert("PPLAY_ADAPTER_MS", " 20 ");
        env.insert("PPLAY_NARRATION_MS", "not-a-number");
        let config = ShowcaseConfig::from_env_with(&map_getter(&env));
        assert_eq!(config.dispense_delay, Duration::from_millis(10));
        assert_eq!(config.adapter_delay, Duration::from_millis(20));
        assert_eq!(
            config.narration_tick,
            DemoSettings::default().narration_tick,
            "unparseable values fall back to the default"
        );
    }

    #[test]
    fn log_filter_prefers_pplay_log() {
        let mut env = BTreeMap::new();
        env.insert("RUST_LOG", "debug");
        let config = ShowcaseConfig::from_env_with(&map_getter(&env));
        assert_eq!(config.log_filter, "debug");

        env.insert("PPLAY_LOG", "pplay_demos=trace");
        let config = ShowcaseConfig::from_env_with(&map_getter(&env));
        assert_eq!(config.log_filter, "pplay_demos=trace");

        env.insert("PPLAY_LOG", "  ");
        let config = ShowcaseConfig::from_env_with(&map_getter(&env));
        assert_eq!(config.log_filter, "debug", "blank PPLAY_LOG is skipped");
    }

    #[test]
    fn flags_accept_one_and_true() {
        for value in ["1", "true", "TRUE"] {
            let mut env = BTreeMap::new();
            env.insert("PPLAY_DETERMINISTIC", value);
            env.insert("PPLAY_LOG_JSON", value);
            let config = ShowcaseConfig::from_env_with(&map_getter(&env));
            assert!(config.deterministic, "{value} should enable deterministic mode");
            assert!(config.log_json);
        }
        let mut env = BTreeMap::new();
        env.insert("PPLAY_DETERMINISTIC", "yes");
        assert!(!ShowcaseConfig::from_env_with(&map_getter(&env)).deterministic);
    }

    #[test]
    fn cli_seed_overrides_env() {
        let mut env = BTreeMap::new();
        env.insert("PPLAY_SEED", "7");
        let config = ShowcaseConfig::from_env_with(&map_getter(&env));
        assert_eq!(config.resolved_seed(), 7);
        assert_eq!(config.clone().with_overrides(None, false).resolved_seed(), 7);
        assert_eq!(config.with_overrides(Some(9), false).resolved_seed(), 9);
    }

    #[test]
    fn deterministic_mode_pins_seed() {
        let config = ShowcaseConfig::default().with_overrides(None, true);
        assert_eq!(config.resolved_seed(), DEFAULT_DETERMINISTIC_SEED);
        assert_eq!(config.demo_settings().seed, DEFAULT_DETERMINISTIC_SEED);
    }
}
