#![forbid(unsafe_code)]

//! Catalog browsing: `list`, `show` and `types`.

use std::io::Write;

use clap::Args;
use pplay_catalog::{Catalog, Pattern, render_detail};
use pplay_demos::{DemoHost, DemoSettings, Registry};
use serde::Serialize;

use crate::error::{Result, ShowcaseError};
use crate::render::{SurfaceSnapshot, write_surface};

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of a pattern name or category.
    #[arg(long, short)]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Pattern id, e.g. `state`.
    pub id: String,
}

#[derive(Serialize)]
struct ListEntry<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    demo_type: &'a str,
}

/// Look up a pattern or fail with [`ShowcaseError::UnknownPattern`].
pub fn find_pattern<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Pattern> {
    catalog.get(id).ok_or_else(|| ShowcaseError::UnknownPattern { id: id.to_string() })
}

pub fn run_list<W: Write>(out: &mut W, catalog: &Catalog, args: &ListArgs, json: bool) -> Result<()> {
    let query = args.filter.as_deref().unwrap_or("");
    let hits: Vec<&Pattern> = catalog.filter(query).collect();
    tracing::debug!(query, hits = hits.len(), "catalog filtered");

    if json {
        let entries: Vec<ListEntry<'_>> = hits
            .iter()
            .map(|p| ListEntry {
                id: &p.id,
                name: &p.name,
                category: p.category.as_str(),
                demo_type: p.demo_type(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    if hits.is_empty() {
        writeln!(out, "No patterns match {query:?}.")?;
    }
    for pattern in hits {
        writeln!(out, "{:<12} {:<16} {}", pattern.id, pattern.name, pattern.category)?;
    }
    Ok(())
}

pub fn run_show<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    settings: DemoSettings,
    args: &ShowArgs,
    json: bool,
) -> Result<()> {
    let pattern = find_pattern(catalog, &args.id)?;
    let mut host = DemoHost::new(Registry::builtin(), settings);
    host.activate(pattern.demo_type());

    if json {
        #[derive(Serialize)]
        struct Detail<'a> {
            pattern: &'a Pattern,
            demo: SurfaceSnapshot<'a>,
        }
        serde_json::to_writer_pretty(
            &mut *out,
            &Detail {
                pattern,
                demo: SurfaceSnapshot::capture(&host),
            },
        )?;
        writeln!(out)?;
        return Ok(());
    }

    out.write_all(render_detail(pattern).as_bytes())?;
    write_surface(out, &host, false)
}

pub fn run_types<W: Write>(out: &mut W, registry: &Registry, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct TypeEntry<'a> {
            demo_type: &'a str,
            title: &'a str,
            fallback: bool,
        }
        let entries: Vec<TypeEntry<'_>> = registry
            .descriptors()
            .iter()
            .map(|d| (d, false))
            .chain(std::iter::once((registry.fallback(), true)))
            .map(|(d, fallback)| TypeEntry {
                demo_type: d.demo_type,
                title: d.title,
                fallback,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    for descriptor in registry.descriptors() {
        writeln!(out, "{:<18} {}", descriptor.demo_type, descriptor.title)?;
    }
    let fallback = registry.fallback();
    writeln!(
        out,
        "{:<18} {} (any other type)",
        fallback.demo_type, fallback.title
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("embedded catalog parses")
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn list_filters_by_category() {
        let mut out = Vec::new();
        let args = ListArgs {
            filter: Some("structural".into()),
        };
        run_list(&mut out, &catalog(), &args, false).unwrap();
        let out = text(out);
        assert_eq!(out.lines().count(), 5);
        assert!(out.lines().all(|l| l.ends_with("Structural")));
    }

    #[test]
    fn list_reports_no_matches() {
        let mut out = Vec::new();
        let args = ListArgs {
            filter: Some("zzz".into()),
        };
        run_list(&mut out, &catalog(), &args, false).unwrap();
        assert_eq!(text(out), "No patterns match \"zzz\".\n");
    }

    #[test]
    fn show_ends_with_the_mounted_demo() {
        let mut out = Vec::new();
        let args = ShowArgs { id: "builder".into() };
        run_show(&mut out, &catalog(), DemoSettings::default(), &args, false).unwrap();
        let out = text(out);
        assert!(out.starts_with("[Creational Pattern]\nBuilder\n"));
        assert!(out.ends_with("Robot: Head\n[1] + Arms  [2] + Legs  [3] + Lasers  [4] Build!\nConstructing...\n"));
    }

    #[test]
    fn show_unknown_id_fails() {
        let mut out = Vec::new();
        let args = ShowArgs { id: "monad".into() };
        let err = run_show(&mut out, &catalog(), DemoSettings::default(), &args, false).unwrap_err();
        assert!(matches!(err, ShowcaseError::UnknownPattern { ref id } if id == "monad"));
        assert!(out.is_empty());
    }

    #[test]
    fn types_lists_fallback_last() {
        let mut out = Vec::new();
        run_types(&mut out, &Registry::builtin(), false).unwrap();
        let out = text(out);
        assert_eq!(out.lines().count(), 10);
        assert!(out.lines().last().unwrap().starts_with("generic"));
    }

    #[test]
    fn types_json_marks_fallback() {
        let mut out = Vec::new();
        run_types(&mut out, &Registry::builtin(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[9]["fallback"], true);
        assert_eq!(entries[0]["demo_type"], "strategy-rpg");
    }
}
