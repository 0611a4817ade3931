#![forbid(unsafe_code)]

//! Demo registry: maps a demo type tag to a widget constructor.
//!
//! Resolution is total. A tag with no registered descriptor resolves to the
//! fallback (the Generic Sequencer), so a malformed or future catalog entry
//! still mounts something.

use std::fmt;

use pplay_core::Widget;

use crate::demos::{
    CommandQueueDemo, DecoratorAccumulator, GenericSequencer, PlugAdapterDemo, RobotBuilderDemo,
    SingletonDemo, StrategySelector, SubscriberBusDemo, TransportDispatcher, VendingDemo,
    command_queue, decorator, plug_adapter, robot_builder, singleton, strategy, subscriber_bus,
    transport, vending,
};
use crate::settings::DemoSettings;

/// Constructs a fresh widget. The first argument is the requested demo type,
/// which the fallback echoes in its heading.
pub type Factory = fn(&str, &DemoSettings) -> Box<dyn Widget>;

/// Tag reported by the fallback descriptor.
pub const FALLBACK_TYPE: &str = "generic";

#[derive(Clone, Copy)]
pub struct WidgetDescriptor {
    pub demo_type: &'static str,
    pub title: &'static str,
    pub factory: Factory,
}

impl WidgetDescriptor {
    #[must_use]
    pub const fn new(demo_type: &'static str, title: &'static str, factory: Factory) -> Self {
        Self {
            demo_type,
            title,
            factory,
        }
    }

    /// Build a widget for `requested`.
    #[must_use]
    pub fn build(&self, requested: &str, settings: &DemoSettings) -> Box<dyn Widget> {
        (self.factory)(requested, settings)
    }
}

impl fmt::Debug for WidgetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetDescriptor")
            .field("demo_type", &self.demo_type)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

fn builtin_descriptors() -> [WidgetDescriptor; 9] {
    [
        WidgetDescriptor::new(strategy::DEMO_TYPE, "Strategy Selector", |_, _| {
            Box::new(StrategySelector::new())
        }),
        WidgetDescriptor::new(subscriber_bus::DEMO_TYPE, "Subscriber Bus", |_, _| {
            Box::new(SubscriberBusDemo::new())
        }),
        WidgetDescriptor::new(decorator::DEMO_TYPE, "Decorator Accumulator", |_, _| {
            Box::new(DecoratorAccumulator::new())
        }),
        WidgetDescriptor::new(singleton::DEMO_TYPE, "Singleton Guard", |_, settings| {
            Box::new(SingletonDemo::new(settings))
        }),
        WidgetDescriptor::new(transport::DEMO_TYPE, "Transport Dispatcher", |_, _| {
            Box::new(TransportDispatcher::new())
        }),
        WidgetDescriptor::new(command_queue::DEMO_TYPE, "Command Queue", |_, _| {
            Box::new(CommandQueueDemo::new())
        }),
        WidgetDescriptor::new(vending::DEMO_TYPE, "Vending FSM", |_, settings| {
            Box::new(VendingDemo::new(settings))
        }),
        WidgetDescriptor::new(plug_adapter::DEMO_TYPE, "Plug Adapter", |_, settings| {
            Box::new(PlugAdapterDemo::new(settings))
        }),
        WidgetDescriptor::new(robot_builder::DEMO_TYPE, "Robot Builder", |_, _| {
            Box::new(RobotBuilderDemo::new())
        }),
    ]
}

const FALLBACK: WidgetDescriptor =
    WidgetDescriptor::new(FALLBACK_TYPE, "Generic Sequencer", |requested, settings| {
        Box::new(GenericSequencer::new(requested, settings))
    });

/// Ordered tag → descriptor table with a fallback.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<WidgetDescriptor>,
    fallback: WidgetDescriptor,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Registry with no specific demos; everything resolves to the fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            descriptors: Vec::new(),
            fallback: FALLBACK,
        }
    }

    /// Registry holding the nine built-in demos.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for descriptor in builtin_descriptors() {
            registry.register(descriptor);
        }
        registry
    }

    /// Add a descriptor, replacing any existing one with the same tag.
    pub fn register(&mut self, descriptor: WidgetDescriptor) {
        if let Some(slot) = self
            .descriptors
            .iter_mut()
            .find(|d| d.demo_type == descriptor.demo_type)
        {
            tracing::debug!(demo_type = descriptor.demo_type, "replacing demo descriptor");
            *slot = descriptor;
        } else {
            self.descriptors.push(descriptor);
        }
    }

    /// Resolve a tag. Never fails.
    #[must_use]
    pub fn resolve(&self, demo_type: &str) -> &WidgetDescriptor {
        self.lookup(demo_type).unwrap_or(&self.fallback)
    }

    /// Whether `demo_type` has a specific descriptor.
    #[must_use]
    pub fn is_known(&self, demo_type: &str) -> bool {
        self.lookup(demo_type).is_some()
    }

    /// Specific descriptors in registration order.
    #[must_use]
    pub fn descriptors(&self) -> &[WidgetDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub fn fallback(&self) -> &WidgetDescriptor {
        &self.fallback
    }

    fn lookup(&self, demo_type: &str) -> Option<&WidgetDescriptor> {
        self.descriptors.iter().find(|d| d.demo_type == demo_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_knows_nine_demos() {
        let registry = Registry::builtin();
        assert_eq!(registry.descriptors().len(), 9);
        for tag in [
            "strategy-rpg",
            "observer-youtube",
            "decorator-coffee",
            "singleton-db",
            "factory-transport",
            "command-remote",
            "state-vending",
            "adapter-plug",
            "builder-robot",
        ] {
            assert!(registry.is_known(tag), "{tag} should be registered");
            assert_eq!(registry.resolve(tag).demo_type, tag);
        }
    }

    #[test]
    fn unknown_tags_fall_back() {
        let registry = Registry::builtin();
        for tag in ["template-barista", "", "STRATEGY-RPG", "proxy-vault"] {
            assert!(!registry.is_known(tag));
            assert_eq!(registry.resolve(tag).demo_type, FALLBACK_TYPE);
        }
    }

    #[test]
    fn fallback_widget_reports_requested_type() {
        let registry = Registry::builtin();
        let widget = registry
            .resolve("proxy-vault")
            .build("proxy-vault", &DemoSettings::default());
        assert_eq!(widget.demo_type(), "proxy-vault");
    }

    #[test]
    fn register_replaces_same_tag() {
        let mut registry = Registry::builtin();
        registry.register(WidgetDescriptor::new(
            "strategy-rpg",
            "Replacement",
            |_, _| Box::new(RobotBuilderDemo::new()),
        ));
        assert_eq!(registry.descriptors().len(), 9);
        assert_eq!(registry.resolve("strategy-rpg").title, "Replacement");
    }

    #[test]
    fn empty_registry_resolves_everything_to_fallback() {
        let registry = Registry::empty();
        assert_eq!(registry.resolve("state-vending").demo_type, FALLBACK_TYPE);
    }
}
