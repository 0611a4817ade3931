#![forbid(unsafe_code)]

//! Surface output: plain text for people, JSON for tools.

use std::io::Write;

use pplay_core::{Row, Surface};
use pplay_demos::DemoHost;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct ButtonView<'a> {
    pub index: u16,
    pub label: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowView<'a> {
    Heading {
        text: &'a str,
    },
    Field {
        region: &'static str,
        label: &'a str,
        value: &'a str,
    },
    Controls {
        buttons: Vec<ButtonView<'a>>,
    },
    Output {
        region: &'static str,
        text: &'a str,
    },
}

impl<'a> From<&'a Row> for RowView<'a> {
    fn from(row: &'a Row) -> Self {
        match row {
            Row::Heading(text) => Self::Heading { text },
            Row::Field {
                region,
                label,
                value,
            } => Self::Field {
                region: region.key(),
                label,
                value,
            },
            Row::Controls(buttons) => Self::Controls {
                buttons: buttons
                    .iter()
                    .map(|b| ButtonView {
                        index: b.id.index(),
                        label: &b.label,
                    })
                    .collect(),
            },
            Row::Output { region, text } => Self::Output {
                region: region.key(),
                text,
            },
        }
    }
}

/// Serializable view of the host's current state.
#[derive(Debug, Serialize)]
pub struct SurfaceSnapshot<'a> {
    pub demo_type: Option<&'a str>,
    pub fallback: bool,
    pub now_ms: u64,
    pub pending_timers: usize,
    pub rows: Vec<RowView<'a>>,
}

impl<'a> SurfaceSnapshot<'a> {
    #[must_use]
    pub fn capture(host: &'a DemoHost) -> Self {
        Self {
            demo_type: host.active_type(),
            fallback: host.is_fallback(),
            now_ms: host.now().as_millis() as u64,
            pending_timers: host.pending_timers(),
            rows: rows(host.surface()),
        }
    }
}

fn rows(surface: &Surface) -> Vec<RowView<'_>> {
    surface.rows().iter().map(RowView::from).collect()
}

/// Write the surface either as plain text or as one JSON document.
pub fn write_surface<W: Write>(out: &mut W, host: &DemoHost, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &SurfaceSnapshot::capture(host))?;
        writeln!(out)?;
    } else {
        out.write_all(host.surface().render_plain().as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_matches_render_plain() {
        let mut host = DemoHost::default();
        host.activate("command-remote");
        let mut out = Vec::new();
        write_surface(&mut out, &host, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Commands Queue: 0\n[1] Light On  [2] Fan On  [3] Execute All  [4] Undo Last\nReady\n"
        );
    }

    #[test]
    fn json_output_tags_rows() {
        let mut host = DemoHost::default();
        host.activate("factory-transport");
        let mut out = Vec::new();
        write_surface(&mut out, &host, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["demo_type"], "factory-transport");
        assert_eq!(value["fallback"], false);
        assert_eq!(value["rows"][0]["kind"], "controls");
        assert_eq!(value["rows"][0]["buttons"][1]["label"], "Order via Sea");
        assert_eq!(value["rows"][1]["kind"], "output");
        assert_eq!(value["rows"][1]["text"], "🚚");
    }
}
