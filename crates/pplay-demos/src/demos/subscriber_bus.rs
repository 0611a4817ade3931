#![forbid(unsafe_code)]

//! Subscriber Bus: a channel that pings every subscriber on upload.

use pplay_core::{Bindings, ButtonId, Context, RegionId, Widget};

pub const DEMO_TYPE: &str = "observer-youtube";

const COUNT: RegionId = RegionId::new("subscribers");

/// One registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscriber {
    pub id: u32,
}

impl Subscriber {
    /// React to a notification.
    #[must_use]
    pub fn notify(&self) -> String {
        format!("User {} pinged!", self.id)
    }
}

/// Outcome of [`SubscriberBus::publish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Publish {
    NoSubscribers,
    /// One line per subscriber, in subscription order.
    Delivered(Vec<String>),
}

/// The subject.
#[derive(Debug, Default)]
pub struct SubscriberBus {
    subscribers: Vec<Subscriber>,
}

impl SubscriberBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next subscriber; ids are sequential from 1.
    pub fn subscribe(&mut self) -> Subscriber {
        let subscriber = Subscriber {
            id: self.subscribers.len() as u32 + 1,
        };
        self.subscribers.push(subscriber);
        subscriber
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish(&self) -> Publish {
        if self.subscribers.is_empty() {
            return Publish::NoSubscribers;
        }
        Publish::Delivered(self.subscribers.iter().map(Subscriber::notify).collect())
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Subscribe,
    Upload,
}

#[derive(Default)]
pub struct SubscriberBusDemo {
    bus: SubscriberBus,
    bindings: Bindings<Msg>,
}

impl SubscriberBusDemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for SubscriberBusDemo {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        self.bindings.row(
            surface,
            &[("Add Subscriber", Msg::Subscribe), ("Upload Video!", Msg::Upload)],
        );
        surface.field(COUNT, "Subscribers", "0");
        surface.output(RegionId::OUTPUT, "Waiting...");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        let Some(msg) = self.bindings.resolve(button) else {
            return;
        };
        let surface = cx.surface();
        match msg {
            Msg::Subscribe => {
                self.bus.subscribe();
                surface.set(COUNT, self.bus.count().to_string());
            }
            Msg::Upload => {
                let text = match self.bus.publish() {
                    Publish::NoSubscribers => "No subscribers!".to_string(),
                    Publish::Delivered(lines) => lines.join("\n"),
                };
                surface.set(RegionId::OUTPUT, text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bus_reports_no_subscribers() {
        let bus = SubscriberBus::new();
        assert_eq!(bus.publish(), Publish::NoSubscribers);
    }

    #[test]
    fn publish_follows_subscription_order() {
        let mut bus = SubscriberBus::new();
        for _ in 0..3 {
            bus.subscribe();
        }
        assert_eq!(bus.count(), 3);
        assert_eq!(
            bus.publish(),
            Publish::Delivered(vec![
                "User 1 pinged!".into(),
                "User 2 pinged!".into(),
                "User 3 pinged!".into(),
            ])
        );
    }
}
