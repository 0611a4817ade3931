#![forbid(unsafe_code)]

//! Generic Sequencer: the fallback demo for pattern types with no dedicated
//! simulation. It narrates a fixed script, one line per tick.
//!
//! Each press of "Run Simulation" starts an independent run. Runs are not
//! guarded against each other: two overlapping runs interleave their lines in
//! the shared output region, and each stops on its own after the last line.

use std::collections::BTreeMap;

use pplay_core::{Bindings, ButtonId, Context, Duration, RegionId, Widget};

use crate::settings::DemoSettings;

pub const NARRATION: [&str; 5] = [
    "Initializing system components...",
    "Applying pattern logic...",
    "Decoupling dependencies...",
    "Optimizing interaction...",
    "Success! Pattern applied correctly.",
];

/// Cursor over [`NARRATION`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrationRun {
    next: usize,
}

impl NarrationRun {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the next line, or `None` once exhausted.
    pub fn step(&mut self) -> Option<&'static str> {
        let line = NARRATION.get(self.next).copied()?;
        self.next += 1;
        Some(line)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= NARRATION.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.next
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Run,
}

pub struct GenericSequencer {
    demo_type: String,
    tick: Duration,
    /// In-flight runs keyed by timer tag; a run is removed after its last line.
    runs: BTreeMap<u64, NarrationRun>,
    next_run: u64,
    bindings: Bindings<Msg>,
}

impl GenericSequencer {
    #[must_use]
    pub fn new(demo_type: &str, settings: &DemoSettings) -> Self {
        Self {
            demo_type: demo_type.to_string(),
            tick: settings.narration_tick,
            runs: BTreeMap::new(),
            next_run: 0,
            bindings: Bindings::new(),
        }
    }

    /// Runs that still have lines to emit.
    #[must_use]
    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }
}

impl Widget for GenericSequencer {
    fn demo_type(&self) -> &str {
        &self.demo_type
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        surface.heading(format!("Interactive simulation for {}", self.demo_type));
        self.bindings.row(surface, &[("Run Simulation", Msg::Run)]);
        surface.output(RegionId::OUTPUT, "Ready to simulate pattern logic...");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        let Some(Msg::Run) = self.bindings.resolve(button) else {
            return;
        };
        let tag = self.next_run;
        self.next_run += 1;
        cx.schedule(self.tick, tag);
        self.runs.insert(tag, NarrationRun::new());
        tracing::debug!(run = tag, overlapping = self.active_runs() > 1, "narration started");
    }

    fn timer(&mut self, tag: u64, cx: &mut Context<'_>) {
        let Some(run) = self.runs.get_mut(&tag) else {
            return;
        };
        if let Some(line) = run.step() {
            cx.surface().set(RegionId::OUTPUT, line);
        }
        if run.is_finished() {
            self.runs.remove(&tag);
        } else {
            cx.schedule(self.tick, tag);
        }
    }

    fn teardown(&mut self) {
        self.runs.clear();
    }
}
