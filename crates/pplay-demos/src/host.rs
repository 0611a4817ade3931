#![forbid(unsafe_code)]

//! Mount/unmount lifecycle.
//!
//! [`DemoHost`] owns the surface, the timer queue and at most one live widget.
//! Switching demos always runs teardown to completion before the next widget
//! mounts:
//!
//! 1. cancel every timer stamped with the outgoing [`MountId`];
//! 2. call the outgoing widget's [`Widget::teardown`];
//! 3. clear the surface, which unbinds every button;
//! 4. resolve the new tag, build the widget and mount it under a fresh id.
//!
//! Mount ids are never reused, so a timer that somehow outlives its widget is
//! recognized on delivery and dropped.

use pplay_core::{ButtonId, Context, Duration, MountId, Surface, TimerQueue, Widget};

use crate::registry::Registry;
use crate::settings::DemoSettings;

/// The live widget and the bookkeeping needed to tear it down.
struct WidgetHandle {
    mount: MountId,
    requested: String,
    fallback: bool,
    widget: Box<dyn Widget>,
}

/// Hosts one demo at a time.
pub struct DemoHost {
    registry: Registry,
    settings: DemoSettings,
    surface: Surface,
    timers: TimerQueue,
    current: Option<WidgetHandle>,
    next_mount: u64,
}

impl Default for DemoHost {
    fn default() -> Self {
        Self::new(Registry::builtin(), DemoSettings::default())
    }
}

impl DemoHost {
    #[must_use]
    pub fn new(registry: Registry, settings: DemoSettings) -> Self {
        Self {
            registry,
            settings,
            surface: Surface::new(),
            timers: TimerQueue::new(),
            current: None,
            next_mount: 0,
        }
    }

    /// Replace the live demo with a fresh widget for `demo_type`.
    pub fn activate(&mut self, demo_type: &str) -> MountId {
        self.deactivate();

        self.next_mount += 1;
        let mount = MountId(self.next_mount);
        let descriptor = self.registry.resolve(demo_type);
        let fallback = !self.registry.is_known(demo_type);
        let mut widget = descriptor.build(demo_type, &self.settings);
        tracing::info!(
            %mount,
            demo_type,
            descriptor = descriptor.demo_type,
            fallback,
            "mounting demo"
        );

        let mut cx = Context::new(&mut self.surface, &mut self.timers, mount);
        widget.mount(&mut cx);
        self.current = Some(WidgetHandle {
            mount,
            requested: demo_type.to_string(),
            fallback,
            widget,
        });
        mount
    }

    /// Tear down the live demo, if any, and leave the surface empty.
    pub fn deactivate(&mut self) {
        if let Some(mut handle) = self.current.take() {
            let cancelled = self.timers.cancel_owner(handle.mount);
            handle.widget.teardown();
            tracing::info!(
                mount = %handle.mount,
                demo_type = %handle.requested,
                cancelled_timers = cancelled,
                "demo torn down"
            );
        }
        self.surface.clear();
    }

    /// Deliver a button press to the live demo.
    ///
    /// Returns `false` when nothing is mounted or the button is not bound.
    pub fn press(&mut self, button: ButtonId) -> bool {
        let Some(handle) = self.current.as_mut() else {
            return false;
        };
        if !self.surface.has_button(button) {
            tracing::debug!(%button, "press on unbound button ignored");
            return false;
        }
        tracing::debug!(mount = %handle.mount, %button, "press");
        let mut cx = Context::new(&mut self.surface, &mut self.timers, handle.mount);
        handle.widget.press(button, &mut cx);
        true
    }

    /// Press the first button whose label matches (case-insensitive).
    pub fn press_label(&mut self, label: &str) -> Option<ButtonId> {
        let button = self.surface.button_by_label(label)?;
        self.press(button).then_some(button)
    }

    /// Advance virtual time by `dt`, firing every timer that falls due.
    ///
    /// Returns the number of timers delivered to the live demo. The clock
    /// saturates at [`Duration::MAX`].
    pub fn advance(&mut self, dt: Duration) -> usize {
        let target = self.timers.now().saturating_add(dt);
        self.advance_until(target)
    }

    /// Advance virtual time to `target`, firing every timer due on the way.
    ///
    /// Timers scheduled by a callback are eligible in the same call if their
    /// deadline is still at or before `target`.
    pub fn advance_until(&mut self, target: Duration) -> usize {
        let mut delivered = 0;
        while let Some(fired) = self.timers.pop_due(target) {
            let Some(handle) = self.current.as_mut().filter(|h| h.mount == fired.owner) else {
                tracing::warn!(
                    owner = %fired.owner,
                    tag = fired.tag,
                    "dropping timer from a torn-down demo"
                );
                continue;
            };
            tracing::debug!(
                mount = %handle.mount,
                tag = fired.tag,
                at_ms = fired.deadline.as_millis() as u64,
                "timer fired"
            );
            let mut cx = Context::new(&mut self.surface, &mut self.timers, handle.mount);
            handle.widget.timer(fired.tag, &mut cx);
            delivered += 1;
        }
        self.timers.advance_to(target);
        delivered
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The tag the live demo was activated with.
    #[must_use]
    pub fn active_type(&self) -> Option<&str> {
        self.current.as_ref().map(|h| h.requested.as_str())
    }

    #[must_use]
    pub fn mount_id(&self) -> Option<MountId> {
        self.current.as_ref().map(|h| h.mount)
    }

    /// Whether the live demo is the fallback sequencer.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.current.as_ref().is_some_and(|h| h.fallback)
    }

    /// Timers pending for any owner.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Timers pending for a particular mount.
    #[must_use]
    pub fn pending_for(&self, mount: MountId) -> usize {
        self.timers.pending_for(mount)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }
}
