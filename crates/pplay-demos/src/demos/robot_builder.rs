#![forbid(unsafe_code)]

//! Robot Builder: parts are added step by step, then built in one go.

use std::fmt;

use pplay_core::{Bindings, ButtonId, Context, RegionId, Widget};

pub const DEMO_TYPE: &str = "builder-robot";

const PARTS: RegionId = RegionId::new("parts");

/// Every robot starts with this part.
pub const SEED_PART: &str = "Head";

/// The finished product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    pub parts: Vec<String>,
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🤖 Robot Created with: {}", self.parts.join(", "))
    }
}

#[derive(Debug, Clone)]
pub struct RobotBuilder {
    parts: Vec<String>,
}

impl Default for RobotBuilder {
    fn default() -> Self {
        Self {
            parts: vec![SEED_PART.to_string()],
        }
    }
}

impl RobotBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part. Order is call order; duplicates are kept.
    pub fn add_part(&mut self, name: impl Into<String>) -> &mut Self {
        self.parts.push(name.into());
        self
    }

    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// `Head - Arms - Legs`
    #[must_use]
    pub fn preview(&self) -> String {
        self.parts.join(" - ")
    }

    /// Hand over the accumulated robot and start again from the seed part.
    pub fn build(&mut self) -> Robot {
        let parts = std::mem::replace(&mut self.parts, vec![SEED_PART.to_string()]);
        Robot { parts }
    }
}

#[derive(Debug, Clone, Copy)]
enum Msg {
    Add(&'static str),
    Build,
}

#[derive(Default)]
pub struct RobotBuilderDemo {
    builder: RobotBuilder,
    bindings: Bindings<Msg>,
}

impl RobotBuilderDemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for RobotBuilderDemo {
    fn demo_type(&self) -> &str {
        DEMO_TYPE
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let surface = cx.surface();
        surface.field(PARTS, "Robot", self.builder.preview());
        self.bindings.row(
            surface,
            &[
                ("+ Arms", Msg::Add("Arms")),
                ("+ Legs", Msg::Add("Legs")),
                ("+ Lasers", Msg::Add("Lasers")),
                ("Build!", Msg::Build),
            ],
        );
        surface.output(RegionId::OUTPUT, "Constructing...");
    }

    fn press(&mut self, button: ButtonId, cx: &mut Context<'_>) {
        match self.bindings.resolve(button) {
            Some(Msg::Add(part)) => {
                self.builder.add_part(part);
            }
            Some(Msg::Build) => {
                let robot = self.builder.build();
                cx.surface().set(RegionId::OUTPUT, robot.to_string());
            }
            None => return,
        }
        cx.surface().set(PARTS, self.builder.preview());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_seed_part() {
        let builder = RobotBuilder::new();
        assert_eq!(builder.parts(), ["Head"]);
        assert_eq!(builder.preview(), "Head");
    }

    #[test]
    fn parts_keep_call_order_and_duplicates() {
        let mut builder = RobotBuilder::new();
        builder.add_part("Arms").add_part("Lasers").add_part("Arms");
        assert_eq!(builder.preview(), "Head - Arms - Lasers - Arms");
    }

    #[test]
    fn build_emits_and_resets() {
        let mut builder = RobotBuilder::new();
        builder.add_part("Legs");
        let robot = builder.build();
        assert_eq!(robot.to_string(), "🤖 Robot Created with: Head, Legs");
        assert_eq!(builder.parts(), ["Head"]);
    }
}
