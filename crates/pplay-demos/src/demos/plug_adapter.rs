#![forbid(unsafe_code)]

//! Plug Adapter: a US plug does not fit the EU wall socket until an adapter
//! is attached.
//!
//! Plugging a US device produces two ordered outputs for one press: the
//! immediate failure, then (after the adapter delay) the follow-up appended
//! to the same region.

use pplay_core::{Bindings, ButtonId, Context, Duration, RegionId, Widget};

use crate::settings::DemoSettings;

pub const DEMO_TYPE: &str = "adapter-plug";

const ADAPTER_TIMER: u64 = 1;

pub const ADAPTER_FOLLOW_UP: &str = "\nAttaching Adapter...\n✅ Now it fits!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us,
    Eu,
}

/// What the wall socket accepts.
pub trait EuPlug {
    fn pins(&self) -> &'static str;
}

/// A device with a US plug.
pub struct UsDevice;

impl UsDevice {
    fn flat_pins(&self) -> &'static str {
        "flat"
    }
}

pub struct EuDevice;

impl EuPlug for EuDevice {
    fn pins(&self) -> &'static str {
        "round"
    }
}

/// Makes a [`UsDevice`] look like an [`EuPlug`].
pub struct UsToEuAdapter {
    device: UsDevice,
}

impl UsToEuAdapter {
    #[must_use]
    pub fn new(device: UsDevice) -> Self {
        Self { device }
    }
}

impl EuPlug for UsToEuAdapter {
    fn pins(&self) -> &'static str {
        match self.device.flat_pins() {
            "flat" => "round",
            other => other,
        }
    }
}

/// The EU (220V) wall socket.
pub struct WallSocket;

impl WallSocket {
    #[must_use]
    pub fn fits(&self, plug: &dyn EuPlug) -> bool {
        plug.pins() == "round"
    }

    /// Try a device by region without an adapter.
    #[must_use]
    pub fn try_region(&self, region: Region) -> bool {
        match region {
            Region::Eu => self.fits(&EuDevice),
            Region::Us => false,
        }
    }
}

pub struct PlugAdapterDemo {
    adapter_delay: Duration,
    bindings: Bindings<Region>,
}

impl PlugAdapterDemo {
    #[must_use]
    pub fn new(settings: &DemoSettings) -> Self {
        Self {
            adapter_delay: settings.adapter_delay,
            bindings: Bindings::new(),
        }
    }
}

impl Widget for PlugAdapterDemo {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        self.bindings.row(
            surface,
            &[("Plug US Device", Region::Us), ("Plug EU Device", Region::Eu)],
        );
        surface.output(RegionId::OUTPUT, "Wall Socket: EU (220V)");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        let Some(region) = self.bindings.resolve(button) else {
            return;
        };
        if WallSocket.try_region(region) {
            cx.surface().set(RegionId::OUTPUT, "✅ Fits perfectly!");
        } else {
            cx.surface()
                .set(RegionId::OUTPUT, "❌ Can't fit! You need an Adapter.");
            cx.schedule(self.adapter_delay, ADAPTER_TIMER);
        }
    }

    fn timer(&mut self, tag: u64, cx: &mut Context<'_>) {
        if tag != ADAPTER_TIMER {
            return;
        }
        let adapted = UsToEuAdapter::new(UsDevice);
        if WallSocket.fits(&adapted) {
            cx.surface().append(RegionId::OUTPUT, ADAPTER_FOLLOW_UP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eu_fits_directly() {
        assert!(WallSocket.try_region(Region::Eu));
    }

    #[test]
    fn us_needs_the_adapter() {
        assert!(!WallSocket.try_region(Region::Us));
        assert!(WallSocket.fits(&UsToEuAdapter::new(UsDevice)));
    }
}
