#![forbid(unsafe_code)]

//! Retained text surface that demos render into.
//!
//! A [`Surface`] is the container a widget draws into and binds its triggers
//! against. It holds an ordered list of rows:
//!
//! - **Heading**: a plain line of text.
//! - **Field**: a labelled value (`Label: value`) addressed by a [`RegionId`].
//! - **Controls**: a row of buttons, each with a [`ButtonId`].
//! - **Output**: a multi-line status region addressed by a [`RegionId`].
//!
//! # Invariants
//!
//! - Button ids are unique for the lifetime of the surface contents and are
//!   assigned sequentially from 1; [`Surface::clear`] resets the sequence.
//! - A cleared surface holds no buttons, so nothing can be pressed until the
//!   next widget mounts.
//! - [`Surface::revision`] strictly increases on every mutation.

use std::fmt;

/// Stable key for a field or output region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(&'static str);

impl RegionId {
    /// The conventional output region every demo writes status text into.
    pub const OUTPUT: Self = Self("output");

    /// Create a region id from a static key.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// The raw key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Identifier of a bound button on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub u16);

impl ButtonId {
    /// One-based index as shown to the user.
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A trigger affordance rendered on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: ButtonId,
    pub label: String,
}

/// One row of the surface document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Heading(String),
    Field {
        region: RegionId,
        label: String,
        value: String,
    },
    Controls(Vec<Button>),
    Output {
        region: RegionId,
        text: String,
    },
}

/// The rendering target a widget draws into.
#[derive(Debug, Default, Clone)]
pub struct Surface {
    rows: Vec<Row>,
    next_button: u16,
    revision: u64,
}

impl Surface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading row.
    pub fn heading(&mut self, text: impl Into<String>) {
        self.rows.push(Row::Heading(text.into()));
        self.bump();
    }

    /// Append a labelled field row.
    pub fn field(&mut self, region: RegionId, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(Row::Field {
            region,
            label: label.into(),
            value: value.into(),
        });
        self.bump();
    }

    /// Append a row of buttons, returning their ids in label order.
    pub fn controls<S: AsRef<str>>(&mut self, labels: &[S]) -> Vec<ButtonId> {
        let mut buttons = Vec::with_capacity(labels.len());
        for label in labels {
            self.next_button = self.next_button.saturating_add(1);
            buttons.push(Button {
                id: ButtonId(self.next_button),
                label: label.as_ref().to_string(),
            });
        }
        let ids = buttons.iter().map(|b| b.id).collect();
        self.rows.push(Row::Controls(buttons));
        self.bump();
        ids
    }

    /// Append an output region.
    pub fn output(&mut self, region: RegionId, text: impl Into<String>) {
        self.rows.push(Row::Output {
            region,
            text: text.into(),
        });
        self.bump();
    }

    /// Replace the text of a field or output region.
    ///
    /// Returns `false` (and leaves the surface untouched) when the region is
    /// not present.
    pub fn set(&mut self, region: RegionId, text: impl Into<String>) -> bool {
        let Some(slot) = self.slot_mut(region) else {
            tracing::warn!(region = region.key(), "write to unknown surface region");
            return false;
        };
        *slot = text.into();
        self.bump();
        true
    }

    /// Append text to a field or output region.
    pub fn append(&mut self, region: RegionId, text: &str) -> bool {
        let Some(slot) = self.slot_mut(region) else {
            tracing::warn!(region = region.key(), "append to unknown surface region");
            return false;
        };
        slot.push_str(text);
        self.bump();
        true
    }

    /// Edit a region's text in place.
    pub fn edit(&mut self, region: RegionId, f: impl FnOnce(&mut String)) -> bool {
        let Some(slot) = self.slot_mut(region) else {
            tracing::warn!(region = region.key(), "edit of unknown surface region");
            return false;
        };
        f(slot);
        self.bump();
        true
    }

    /// Current text of a field or output region.
    #[must_use]
    pub fn text(&self, region: RegionId) -> Option<&str> {
        self.rows.iter().find_map(|row| match row {
            Row::Field { region: r, value, .. } if *r == region => Some(value.as_str()),
            Row::Output { region: r, text } if *r == region => Some(text.as_str()),
            _ => None,
        })
    }

    /// Shorthand for the [`RegionId::OUTPUT`] region.
    #[must_use]
    pub fn output_text(&self) -> Option<&str> {
        self.text(RegionId::OUTPUT)
    }

    /// All bound buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flat_map(|row| match row {
            Row::Controls(buttons) => buttons.as_slice(),
            _ => &[],
        })
    }

    /// Find a button by label (case-insensitive, surrounding whitespace ignored).
    #[must_use]
    pub fn button_by_label(&self, label: &str) -> Option<ButtonId> {
        let wanted = label.trim();
        self.buttons()
            .find(|b| b.label.eq_ignore_ascii_case(wanted))
            .map(|b| b.id)
    }

    /// Whether a button with this id is currently bound.
    #[must_use]
    pub fn has_button(&self, id: ButtonId) -> bool {
        self.buttons().any(|b| b.id == id)
    }

    /// Number of bound buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons().count()
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// True if nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove every row and unbind every button.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.next_button = 0;
        self.bump();
    }

    /// Mutation counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Render the document as plain text.
    #[must_use]
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            match row {
                Row::Heading(text) => out.push_str(text),
                Row::Field { label, value, .. } => {
                    out.push_str(label);
                    out.push_str(": ");
                    out.push_str(value);
                }
                Row::Controls(buttons) => {
                    let line = buttons
                        .iter()
                        .map(|b| format!("[{}] {}", b.id.index(), b.label))
                        .collect::<Vec<_>>()
                        .join("  ");
                    out.push_str(&line);
                }
                Row::Output { text, .. } => out.push_str(text),
            }
            out.push('\n');
        }
        out
    }

    fn slot_mut(&mut self, region: RegionId) -> Option<&mut String> {
        self.rows.iter_mut().find_map(|row| match row {
            Row::Field { region: r, value, .. } if *r == region => Some(value),
            Row::Output { region: r, text } if *r == region => Some(text),
            _ => None,
        })
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
