#![forbid(unsafe_code)]

//! Shared JSONL logging helpers for tests.
//!
//! Lines go to stderr and are only emitted when `PPLAY_TEST_JSONL` or `CI`
//! is set, so local test output stays quiet.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Map, Value};

/// Schema version for test JSONL logs.
pub const TEST_JSONL_SCHEMA: &str = "pplay-test-jsonl-v1";

/// Returns true if JSONL logging should be emitted.
#[must_use]
pub fn jsonl_enabled() -> bool {
    std::env::var("PPLAY_TEST_JSONL").is_ok() || std::env::var("CI").is_ok()
}

/// JSONL logger with stable run context + per-entry sequence numbering.
pub struct JsonlLogger {
    run_id: String,
    seed: Option<u64>,
    context: Vec<(String, String)>,
    seq: AtomicU64,
}

impl JsonlLogger {
    #[must_use]
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            seed: None,
            context: Vec::new(),
            seq: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a context field to all log entries.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Build one entry without emitting it.
    #[must_use]
    pub fn entry(&self, event: &str, fields: &[(&str, &str)]) -> Value {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let mut object = Map::new();
        object.insert("schema_version".into(), TEST_JSONL_SCHEMA.into());
        object.insert("run_id".into(), self.run_id.clone().into());
        object.insert("seq".into(), seq.into());
        object.insert("event".into(), event.into());
        if let Some(seed) = self.seed {
            object.insert("seed".into(), seed.into());
        }
        for (key, value) in &self.context {
            object.insert(key.clone(), value.clone().into());
        }
        for (key, value) in fields {
            object.insert((*key).to_string(), (*value).into());
        }
        Value::Object(object)
    }

    /// Emit a JSONL line if logging is enabled.
    pub fn log(&self, event: &str, fields: &[(&str, &str)]) {
        if !jsonl_enabled() {
            return;
        }
        eprintln!("{}", self.entry(event, fields));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_sequenced_and_carry_context() {
        let logger = JsonlLogger::new("run-1")
            .with_seed(7)
            .with_context("suite", "unit");
        let first = logger.entry("start", &[]);
        let second = logger.entry("step", &[("button", "Insert Coin")]);
        assert_eq!(first["seq"], 0);
        assert_eq!(second["seq"], 1);
        assert_eq!(second["schema_version"], TEST_JSONL_SCHEMA);
        assert_eq!(second["seed"], 7);
        assert_eq!(second["suite"], "unit");
        assert_eq!(second["button"], "Insert Coin");
    }

    #[test]
    fn values_are_escaped_by_serde() {
        let logger = JsonlLogger::new("quotes");
        let line = logger.entry("x", &[("text", "say \"hi\"\n")]).to_string();
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["text"], "say \"hi\"\n");
    }
}
