#![forbid(unsafe_code)]

//! Tunables shared by every demo.

use web_time::Duration;

/// Delay between pressing the vending button and the automatic dispense.
pub const DEFAULT_DISPENSE_DELAY: Duration = Duration::from_millis(1000);
/// Delay before the plug adapter follow-up line appears.
pub const DEFAULT_ADAPTER_DELAY: Duration = Duration::from_millis(800);
/// Interval between narration lines of the generic sequencer.
pub const DEFAULT_NARRATION_TICK: Duration = Duration::from_millis(600);

/// Settings handed to every demo factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub dispense_delay: Duration,
    pub adapter_delay: Duration,
    pub narration_tick: Duration,
    /// Seed for demos that draw random values (singleton instance ids).
    pub seed: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            dispense_delay: DEFAULT_DISPENSE_DELAY,
            adapter_delay: DEFAULT_ADAPTER_DELAY,
            narration_tick: DEFAULT_NARRATION_TICK,
            seed: 0,
        }
    }
}

impl DemoSettings {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
