#![forbid(unsafe_code)]

//! Singleton Guard: exactly one database instance, created on first demand.
//!
//! The guard is a single slot with compare-and-set semantics: the first
//! acquisition fills it, and every later request observes the same id.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pplay_core::{Bindings, ButtonId, Context, RegionId, Widget};

use crate::settings::DemoSettings;

pub const DEMO_TYPE: &str = "singleton-db";

const INSTANCE: RegionId = RegionId::new("instance");

/// Upper bound (exclusive) of generated instance ids.
pub const MAX_INSTANCE_ID: u32 = 10_000;

/// Outcome of [`SingletonGuard::get_instance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquired {
    Created(u32),
    Existing(u32),
}

impl Acquired {
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }
}

/// Outcome of [`SingletonGuard::try_create_another`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAttempt {
    /// The slot was empty, so this behaved like `get_instance`.
    Created(u32),
    Blocked { existing: u32 },
}

#[derive(Debug, Default)]
pub struct SingletonGuard {
    slot: Option<u32>,
}

impl SingletonGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn instance(&self) -> Option<u32> {
        self.slot
    }

    /// Return the instance, minting one with `mint` if the slot is empty.
    pub fn get_instance(&mut self, mint: impl FnOnce() -> u32) -> Acquired {
        match self.slot {
            Some(id) => Acquired::Existing(id),
            None => {
                let id = mint();
                self.slot = Some(id);
                Acquired::Created(id)
            }
        }
    }

    /// Refuse to create a second instance. Never changes an existing id.
    pub fn try_create_another(&mut self, mint: impl FnOnce() -> u32) -> CreateAttempt {
        match self.slot {
            Some(existing) => CreateAttempt::Blocked { existing },
            None => CreateAttempt::Created(self.get_instance(mint).id()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Get,
    TryCreate,
}

pub struct SingletonDemo {
    guard: SingletonGuard,
    rng: SmallRng,
    bindings: Bindings<Msg>,
}

impl SingletonDemo {
    #[must_use]
    pub fn new(settings: &DemoSettings) -> Self {
        Self {
            guard: SingletonGuard::new(),
            rng: SmallRng::seed_from_u64(settings.seed),
            bindings: Bindings::new(),
        }
    }

    fn mint(rng: &mut SmallRng) -> u32 {
        rng.random_range(0..MAX_INSTANCE_ID)
    }

    fn show_instance(id: u32, cx: &mut Context<'_>) {
        let surface = cx.surface();
        surface.set(INSTANCE, id.to_string());
        surface.set(RegionId::OUTPUT, "Returned existing instance.");
    }
}

impl Widget for SingletonDemo {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        surface.field(INSTANCE, "Database Instance ID", "None");
        self.bindings.row(
            surface,
            &[("Get Instance", Msg::Get), ("Atomic Try Create New", Msg::TryCreate)],
        );
        surface.output(RegionId::OUTPUT, "Start by getting an instance.");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        let rng = &mut self.rng;
        match self.bindings.resolve(button) {
            Some(Msg::Get) => {
                let id = self.guard.get_instance(|| Self::mint(rng)).id();
                Self::show_instance(id, cx);
            }
            Some(Msg::TryCreate) => match self.guard.try_create_another(|| Self::mint(rng)) {
                CreateAttempt::Created(id) => Self::show_instance(id, cx),
                CreateAttempt::Blocked { existing } => {
                    tracing::debug!(existing, "second singleton instance blocked");
                    cx.surface().set(
                        RegionId::OUTPUT,
                        format!("BLOCKED! Already have instance {existing}. Cannot create another."),
                    );
                }
            },
            None => {}
        }
    }
}
