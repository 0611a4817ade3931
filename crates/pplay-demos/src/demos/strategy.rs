#![forbid(unsafe_code)]

//! Strategy Selector: a hero whose attack behaviour is swapped at runtime.

use pplay_core::{Bindings, ButtonId, Context, RegionId, Widget};

pub const DEMO_TYPE: &str = "strategy-rpg";

const WEAPON: RegionId = RegionId::new("weapon");

/// Result of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub damage: u32,
    pub text: &'static str,
}

/// An interchangeable attack algorithm.
pub trait AttackStrategy {
    fn name(&self) -> &'static str;
    fn attack(&self) -> Strike;
}

struct Fists;
struct Sword;
struct Bow;
struct Staff;

impl AttackStrategy for Fists {
    fn name(&self) -> &'static str {
        "Fists"
    }

    fn attack(&self) -> Strike {
        Strike {
            damage: 0,
            text: "You punch the air. Weak.",
        }
    }
}

impl AttackStrategy for Sword {
    fn name(&self) -> &'static str {
        "Sword"
    }

    fn attack(&self) -> Strike {
        Strike {
            damage: 10,
            text: "⚔️ Slash! (10 dmg)",
        }
    }
}

impl AttackStrategy for Bow {
    fn name(&self) -> &'static str {
        "Bow"
    }

    fn attack(&self) -> Strike {
        Strike {
            damage: 8,
            text: "🏹 Thwack! (8 dmg)",
        }
    }
}

impl AttackStrategy for Staff {
    fn name(&self) -> &'static str {
        "Staff"
    }

    fn attack(&self) -> Strike {
        Strike {
            damage: 15,
            text: "🔥 Fireball! (15 dmg)",
        }
    }
}

/// Weapons the hero can equip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Fists,
    Sword,
    Bow,
    Staff,
}

impl WeaponKind {
    /// Lowercase key used in status messages.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Fists => "fists",
            Self::Sword => "sword",
            Self::Bow => "bow",
            Self::Staff => "staff",
        }
    }

    fn strategy(self) -> Box<dyn AttackStrategy> {
        match self {
            Self::Fists => Box::new(Fists),
            Self::Sword => Box::new(Sword),
            Self::Bow => Box::new(Bow),
            Self::Staff => Box::new(Staff),
        }
    }
}

/// The context object: holds whichever strategy is equipped.
pub struct Hero {
    weapon: Box<dyn AttackStrategy>,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            weapon: WeaponKind::Fists.strategy(),
        }
    }
}

impl Hero {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active strategy. No attack is performed.
    pub fn equip(&mut self, kind: WeaponKind) {
        self.weapon = kind.strategy();
    }

    /// Name of the equipped weapon.
    #[must_use]
    pub fn weapon_name(&self) -> &'static str {
        self.weapon.name()
    }

    /// Run the equipped strategy.
    #[must_use]
    pub fn attack(&self) -> Strike {
        self.weapon.attack()
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Equip(WeaponKind),
    Attack,
}

/// Widget wrapping [`Hero`].
#[derive(Default)]
pub struct StrategySelector {
    hero: Hero,
    bindings: Bindings<Msg>,
}

impl StrategySelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for StrategySelector {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        surface.field(WEAPON, "Current Weapon", self.hero.weapon_name());
        self.bindings.row(
            surface,
            &[
                ("Equip Sword", Msg::Equip(WeaponKind::Sword)),
                ("Equip Bow", Msg::Equip(WeaponKind::Bow)),
                ("Equip Staff", Msg::Equip(WeaponKind::Staff)),
            ],
        );
        self.bindings.row(surface, &[("ATTACK!", Msg::Attack)]);
        surface.output(RegionId::OUTPUT, "Select a weapon...");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        let Some(msg) = self.bindings.resolve(button) else {
            return;
        };
        let surface = cx.surface();
        match msg {
            Msg::Equip(kind) => {
                self.hero.equip(kind);
                surface.set(WEAPON, self.hero.weapon_name());
                surface.set(RegionId::OUTPUT, format!("Equipped {}", kind.key()));
            }
            Msg::Attack => {
                surface.set(RegionId::OUTPUT, self.hero.attack().text);
            }
        }
    }
}
