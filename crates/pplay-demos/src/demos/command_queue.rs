#![forbid(unsafe_code)]

//! Command Queue: a remote that queues commands, runs them as a batch, and
//! undoes the most recent one.
//!
//! The queue is FIFO for execution and LIFO for undo.

use pplay_core::{Bindings, ButtonId, Context, RegionId, Widget};

pub const DEMO_TYPE: &str = "command-remote";

const QUEUED: RegionId = RegionId::new("queued");

/// A queued remote command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    pub label: String,
}

#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<RemoteCommand>,
}

impl CommandQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: impl Into<String>) {
        self.commands.push(RemoteCommand {
            label: label.into(),
        });
    }

    /// Run every queued command in insertion order and empty the queue.
    ///
    /// Returns `None` (and changes nothing) when the queue is empty.
    pub fn execute_all(&mut self) -> Option<Vec<RemoteCommand>> {
        if self.commands.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.commands))
    }

    /// Remove the most recently added command.
    pub fn undo_last(&mut self) -> Option<RemoteCommand> {
        self.commands.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.label.as_str())
    }
}

/// Join executed commands for display: `Light On, Fan On`.
#[must_use]
pub fn join_labels(commands: &[RemoteCommand]) -> String {
    commands
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Add(&'static str),
    Execute,
    Undo,
}

#[derive(Default)]
pub struct CommandQueueDemo {
    queue: CommandQueue,
    bindings: Bindings<Msg>,
}

impl CommandQueueDemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for CommandQueueDemo {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        surface.field(QUEUED, "Commands Queue", "0");
        self.bindings.row(
            surface,
            &[
                ("Light On", Msg::Add("Light On")),
                ("Fan On", Msg::Add("Fan On")),
                ("Execute All", Msg::Execute),
                ("Undo Last", Msg::Undo),
            ],
        );
        surface.output(RegionId::OUTPUT, "Ready");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        let Some(msg) = self.bindings.resolve(button) else {
            return;
        };
        let message = match msg {
            Msg::Add(label) => {
                self.queue.add(label);
                format!("Queued: {label}")
            }
            Msg::Execute => match self.queue.execute_all() {
                Some(ran) => format!("Executing: {}", join_labels(&ran)),
                None => return,
            },
            Msg::Undo => match self.queue.undo_last() {
                Some(command) => format!("Undid: {}", command.label),
                None => "Nothing to undo".to_string(),
            },
        };
        let surface = cx.surface();
        surface.set(QUEUED, self.queue.len().to_string());
        surface.set(RegionId::OUTPUT, message);
    }
}
