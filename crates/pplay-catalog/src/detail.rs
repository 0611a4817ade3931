#![forbid(unsafe_code)]

//! Plain-text detail page for one pattern.

use std::fmt::Write as _;

use crate::pattern::Pattern;

/// Title of the final section; the caller renders the mounted demo below it.
pub const DEMO_SECTION: &str = "🎮 Interactive Demo";

/// Render every section of a pattern's detail page, ending with the demo
/// section heading.
#[must_use]
pub fn render_detail(pattern: &Pattern) -> String {
    let mut out = String::new();
    // `fmt::Write` for String is infallible.
    let _ = write_detail(&mut out, pattern);
    out
}

fn write_detail(out: &mut String, p: &Pattern) -> std::fmt::Result {
    writeln!(out, "[{} Pattern]", p.category)?;
    writeln!(out, "{}", p.name)?;
    writeln!(out, "{}", p.tagline)?;

    section(out, &format!("📖 The Story: {}", p.story.title))?;
    writeln!(out, "Context: {}", p.story.context)?;
    writeln!(out)?;
    writeln!(out, "The Pain: {}", p.story.problem)?;
    writeln!(out)?;
    writeln!(out, "The Fix: {}", p.story.solution)?;
    writeln!(out)?;
    writeln!(out, "CTO says: {}", p.story.dialogue)?;

    section(out, "🧐 Deep Dive: The \"Why\"")?;
    writeln!(out, "Reason to exist: {}", p.deep_dive.reason)?;
    writeln!(out, "The Root Problem: {}", p.deep_dive.problem_detail)?;
    writeln!(out, "Key Benefit: {}", p.deep_dive.key_benefit)?;

    section(out, "💻 Code: The Good, The Bad, and The Ugly")?;
    writeln!(out, "❌ Without Pattern")?;
    writeln!(out, "{}", p.code.bad.trim())?;
    writeln!(out)?;
    writeln!(out, "✅ With {}", p.name)?;
    writeln!(out, "{}", p.code.good.trim())?;

    section(out, "🎯 When to use this?")?;
    for use_case in &p.use_cases {
        writeln!(out, "- {use_case}")?;
    }

    section(out, DEMO_SECTION)
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "─".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    fn render(id: &str) -> String {
        let catalog = Catalog::builtin().expect("embedded catalog parses");
        render_detail(catalog.get(id).expect("pattern exists"))
    }

    #[test]
    fn header_names_category_and_pattern() {
        let page = render("decorator");
        let mut lines = page.lines();
        assert_eq!(lines.next(), Some("[Structural Pattern]"));
        assert_eq!(lines.next(), Some("Decorator"));
    }

    #[test]
    fn sections_appear_in_order() {
        let page = render("strategy");
        let story = page.find("📖 The Story:").expect("story");
        let deep = page.find("🧐 Deep Dive").expect("deep dive");
        let code = page.find("💻 Code").expect("code");
        let uses = page.find("🎯 When to use this?").expect("use cases");
        let demo = page.find(DEMO_SECTION).expect("demo");
        assert!(story < deep && deep < code && code < uses && uses < demo);
    }

    #[test]
    fn every_use_case_is_listed() {
        let catalog = Catalog::builtin().expect("embedded catalog parses");
        let pattern = catalog.get("observer").expect("observer");
        let page = render_detail(pattern);
        for use_case in &pattern.use_cases {
            assert!(page.contains(&format!("- {use_case}")));
        }
    }

    #[test]
    fn good_code_header_names_the_pattern() {
        assert!(render("builder").contains("✅ With Builder"));
    }
}
