#![forbid(unsafe_code)]

//! Decorator Accumulator: condiments decorate a base coffee, one layer per add.
//!
//! Layers are kept in a flat list and the running description and cost are
//! updated as each one is applied, so an order of any length costs the same
//! per add.

use pplay_core::{Bindings, ButtonId, Context, RegionId, Widget};

pub const DEMO_TYPE: &str = "decorator-coffee";

const ORDER: RegionId = RegionId::new("order");

pub const BASE_DESCRIPTION: &str = "Coffee";
pub const BASE_COST: u32 = 5;

/// Anything that can be served.
pub trait Beverage {
    fn description(&self) -> &str;
    fn cost(&self) -> u32;
}

/// The undecorated base drink.
pub struct Coffee;

impl Beverage for Coffee {
    fn description(&self) -> &str {
        BASE_DESCRIPTION
    }

    fn cost(&self) -> u32 {
        BASE_COST
    }
}

/// One decoration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condiment {
    pub name: String,
    pub price: u32,
}

impl Condiment {
    /// Apply this layer on top of a description and cost.
    fn decorate(&self, description: &mut String, cost: u32) -> u32 {
        description.push_str(" + ");
        description.push_str(&self.name);
        cost.saturating_add(self.price)
    }
}

/// An order under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeOrder {
    condiments: Vec<Condiment>,
    description: String,
    cost: u32,
}

impl Default for CoffeeOrder {
    fn default() -> Self {
        Self {
            condiments: Vec::new(),
            description: Coffee.description().to_string(),
            cost: Coffee.cost(),
        }
    }
}

impl CoffeeOrder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decorate the current order with another condiment. Duplicates stack.
    pub fn add_condiment(&mut self, name: &str, price: u32) {
        let condiment = Condiment {
            name: name.to_string(),
            price,
        };
        self.cost = condiment.decorate(&mut self.description, self.cost);
        self.condiments.push(condiment);
    }

    /// Back to plain coffee.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn condiments(&self) -> &[Condiment] {
        &self.condiments
    }

    /// `Coffee + Milk ($7)`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} (${})", self.description, self.cost)
    }
}

impl Beverage for CoffeeOrder {
    fn description(&self) -> &str {
        &self.description
    }

    fn cost(&self) -> u32 {
        self.cost
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Add(&'static str, u32),
    Reset,
}

#[derive(Default)]
pub struct DecoratorAccumulator {
    order: CoffeeOrder,
    bindings: Bindings<Msg>,
}

impl DecoratorAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for DecoratorAccumulator {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        surface.field(ORDER, "Order", self.order.display());
        self.bindings.row(
            surface,
            &[
                ("+ Milk ($2)", Msg::Add("Milk", 2)),
                ("+ Sugar ($1)", Msg::Add("Sugar", 1)),
                ("+ Whip ($3)", Msg::Add("Whip", 3)),
                ("Reset", Msg::Reset),
            ],
        );
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        match self.bindings.resolve(button) {
            Some(Msg::Add(name, price)) => {
                // The field already shows the previous order; only the new
                // layer and the price suffix change.
                let kept = self.order.description().len();
                self.order.add_condiment(name, price);
                let order = &self.order;
                cx.surface().edit(ORDER, |text| {
                    text.truncate(kept);
                    text.push_str(&order.description()[kept..]);
                    text.push_str(&format!(" (${})", order.cost()));
                });
            }
            Some(Msg::Reset) => {
                self.order.reset();
                cx.surface().set(ORDER, self.order.display());
            }
            None => {}
        }
    }
}
