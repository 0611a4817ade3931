#![forbid(unsafe_code)]

//! Vending FSM: Idle → HasCoin → Dispensing → Idle.
//!
//! Invalid actions are not errors; they are self-transitions that explain
//! themselves. The only timed edge is HasCoin → Dispensing, which schedules the
//! automatic dispense.
//!
//! | State      | insert coin           | press button          | dispense              |
//! |------------|-----------------------|-----------------------|-----------------------|
//! | Idle       | → HasCoin             | Insert coin first.    | Nothing to dispense.  |
//! | HasCoin    | Already have coin!    | → Dispensing (+timer) | Nothing to dispense.  |
//! | Dispensing | Wait, dispensing...   | Already processing.   | → Idle                |

use std::fmt;

use pplay_core::{Bindings, ButtonId, Context, Duration, RegionId, TimerId, Widget};

use crate::settings::DemoSettings;

pub const DEMO_TYPE: &str = "state-vending";

const STATE: RegionId = RegionId::new("state");
const DISPENSE_TIMER: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendingState {
    #[default]
    Idle,
    HasCoin,
    Dispensing,
}

impl fmt::Display for VendingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "Idle",
            Self::HasCoin => "HasCoin",
            Self::Dispensing => "Dispensing",
        })
    }
}

/// Result of feeding one event to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: VendingState,
    pub to: VendingState,
    pub message: &'static str,
    /// The caller must arrange for `dispense` to run after the dispense delay.
    pub schedule_dispense: bool,
}

impl Transition {
    fn stay(state: VendingState, message: &'static str) -> Self {
        Self {
            from: state,
            to: state,
            message,
            schedule_dispense: false,
        }
    }

    fn moved(from: VendingState, to: VendingState, message: &'static str) -> Self {
        Self {
            from,
            to,
            message,
            schedule_dispense: false,
        }
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Default)]
pub struct VendingMachine {
    state: VendingState,
}

impl VendingMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> VendingState {
        self.state
    }

    pub fn insert_coin(&mut self) -> Transition {
        match self.state {
            VendingState::Idle => self.go(VendingState::HasCoin, "Coin accepted."),
            VendingState::HasCoin => Transition::stay(self.state, "Already have coin!"),
            VendingState::Dispensing => Transition::stay(self.state, "Wait, dispensing..."),
        }
    }

    pub fn press_button(&mut self) -> Transition {
        match self.state {
            VendingState::HasCoin => Transition {
                schedule_dispense: true,
                ..self.go(VendingState::Dispensing, "Button pressed...")
            },
            VendingState::Idle => Transition::stay(self.state, "Insert coin first."),
            VendingState::Dispensing => Transition::stay(self.state, "Already processing."),
        }
    }

    pub fn dispense(&mut self) -> Transition {
        match self.state {
            VendingState::Dispensing => self.go(VendingState::Idle, "Here is your soda! 🥤"),
            _ => Transition::stay(self.state, "Nothing to dispense."),
        }
    }

    fn go(&mut self, to: VendingState, message: &'static str) -> Transition {
        let from = self.state;
        self.state = to;
        Transition::moved(from, to, message)
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    InsertCoin,
    PressButton,
    Dispense,
}

pub struct VendingDemo {
    machine: VendingMachine,
    dispense_delay: Duration,
    pending: Option<TimerId>,
    bindings: Bindings<Msg>,
}

impl VendingDemo {
    #[must_use]
    pub fn new(settings: &DemoSettings) -> Self {
        Self {
            machine: VendingMachine::new(),
            dispense_delay: settings.dispense_delay,
            pending: None,
            bindings: Bindings::new(),
        }
    }

    fn dispense(&mut self, cx: &mut Context<'_>) -> Transition {
        let transition = self.machine.dispense();
        // At most one dispense timer per cycle; a manual dispense ends the cycle.
        if transition.changed()
            && let Some(timer) = self.pending.take()
        {
            cx.cancel(timer);
        }
        transition
    }

    fn show(&self, transition: Transition, cx: &mut Context<'_>) {
        tracing::debug!(
            from = %transition.from,
            to = %transition.to,
            message = transition.message,
            "vending transition"
        );
        let surface = cx.surface();
        surface.set(STATE, self.machine.state().to_string());
        surface.set(RegionId::OUTPUT, transition.message);
    }
}

impl Widget for VendingDemo {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        surface.field(STATE, "State", self.machine.state().to_string());
        self.bindings.row(
            surface,
            &[
                ("Insert Coin", Msg::InsertCoin),
                ("Press Button", Msg::PressButton),
                ("Dispense", Msg::Dispense),
            ],
        );
        surface.output(RegionId::OUTPUT, "Machine is idle.");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        let transition = match self.bindings.resolve(button) {
            Some(Msg::InsertCoin) => self.machine.insert_coin(),
            Some(Msg::PressButton) => {
                let transition = self.machine.press_button();
                if transition.schedule_dispense {
                    debug_assert!(self.pending.is_none(), "dispense timer already pending");
                    self.pending = Some(cx.schedule(self.dispense_delay, DISPENSE_TIMER));
                }
                transition
            }
            Some(Msg::Dispense) => self.dispense(cx),
            None => return,
        };
        self.show(transition, cx);
    }

    fn timer(&mut self, tag: u64, cx: &mut Context<'_>) {
        if tag != DISPENSE_TIMER {
            return;
        }
        self.pending = None;
        let transition = self.machine.dispense();
        self.show(transition, cx);
    }
}
