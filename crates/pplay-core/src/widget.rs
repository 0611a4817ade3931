#![forbid(unsafe_code)]

//! The widget contract every demo satisfies.
//!
//! A widget is mounted into a [`Surface`], receives button presses and timer
//! firings through a [`Context`], and is torn down before the next widget
//! mounts. Widgets own all of their state; nothing is shared between mounts.

use web_time::Duration;

use crate::surface::{ButtonId, Surface};
use crate::timer::{MountId, TimerId, TimerQueue};

/// Borrowed view of the host resources for the duration of one callback.
///
/// Timers scheduled through a context are stamped with the widget's
/// [`MountId`], which is what lets the host cancel them all on teardown.
pub struct Context<'a> {
    surface: &'a mut Surface,
    timers: &'a mut TimerQueue,
    mount: MountId,
}

impl<'a> Context<'a> {
    pub fn new(surface: &'a mut Surface, timers: &'a mut TimerQueue, mount: MountId) -> Self {
        Self {
            surface,
            timers,
            mount,
        }
    }

    /// The surface this widget renders into.
    pub fn surface(&mut self) -> &mut Surface {
        self.surface
    }

    /// The mount this context belongs to.
    #[must_use]
    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Schedule a one-shot timer that will be delivered to this widget's
    /// [`Widget::timer`] with `tag`.
    pub fn schedule(&mut self, after: Duration, tag: u64) -> TimerId {
        self.timers.schedule(self.mount, after, tag)
    }

    /// Cancel a timer this widget scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id)
    }

    /// Whether a timer this widget scheduled is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.is_pending(id)
    }
}

/// A mounted, stateful, event-bound micro-simulation.
pub trait Widget {
    /// The demo type tag this widget was constructed for.
    fn demo_type(&self) -> &str;

    /// Render the initial markup and bind triggers.
    fn mount(&mut self, cx: &mut Context<'_>);

    /// Handle a press on one of the widget's buttons.
    ///
    /// Presses on ids the widget did not bind are ignored.
    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>);

    /// Handle a timer this widget scheduled.
    fn timer(&mut self, _tag: u64, _cx: &mut Context<'_>) {}

    /// Release widget-held resources. Timers and surface bindings are
    /// reclaimed by the host; this hook is for anything else.
    fn teardown(&mut self) {}
}

/// Maps the [`ButtonId`]s a widget bound to its own message type.
#[derive(Debug, Clone)]
pub struct Bindings<M> {
    entries: Vec<(ButtonId, M)>,
}

impl<M> Default for Bindings<M> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<M: Clone> Bindings<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a row of buttons on `surface` and remember which message each
    /// one produces.
    pub fn row(&mut self, surface: &mut Surface, buttons: &[(&str, M)]) {
        let labels: Vec<&str> = buttons.iter().map(|(label, _)| *label).collect();
        let ids = surface.controls(&labels);
        self.entries.extend(
            ids.into_iter()
                .zip(buttons.iter().map(|(_, msg)| msg.clone())),
        );
    }

    /// Resolve a pressed button to its message.
    #[must_use]
    pub fn resolve(&self, button: ButtonId) -> Option<M> {
        self.entries
            .iter()
            .find(|(id, _)| *id == button)
            .map(|(_, msg)| msg.clone())
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
