#![forbid(unsafe_code)]

//! Transport Dispatcher: a factory method picks the vehicle for a route.

use pplay_core::{Bindings, ButtonId, Context, RegionId, Widget};

pub const DEMO_TYPE: &str = "factory-transport";

pub trait Transport {
    fn deliver(&self) -> &'static str;
}

struct Truck;
struct Ship;

impl Transport for Truck {
    fn deliver(&self) -> &'static str {
        "🚚 Truck Created"
    }
}

impl Transport for Ship {
    fn deliver(&self) -> &'static str {
        "🚢 Ship Created"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Road,
    Sea,
}

/// The factory method. Callers never name a concrete vehicle.
#[must_use]
pub fn create_transport(route: Route) -> Box<dyn Transport> {
    match route {
        Route::Road => Box::new(Truck),
        Route::Sea => Box::new(Ship),
    }
}

#[derive(Default)]
pub struct TransportDispatcher {
    bindings: Bindings<Route>,
}

impl TransportDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for TransportDispatcher {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        self.bindings.row(
            surface,
            &[("Order via Road", Route::Road), ("Order via Sea", Route::Sea)],
        );
        surface.output(RegionId::OUTPUT, "🚚");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        if let Some(route) = self.bindings.resolve(button) {
            cx.surface()
                .set(RegionId::OUTPUT, create_transport(route).deliver());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_route_has_a_fixed_label() {
        assert_eq!(create_transport(Route::Road).deliver(), "🚚 Truck Created");
        assert_eq!(create_transport(Route::Sea).deliver(), "🚢 Ship Created");
    }
}
