#![forbid(unsafe_code)]

//! `play`: mount a pattern's demo and drive it, either from a script on the
//! virtual clock or interactively from stdin against the wall clock.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use clap::Args;
use pplay_catalog::Catalog;
use pplay_core::{ButtonId, Duration};
use pplay_demos::{DemoHost, DemoSettings, Registry};
use web_time::Instant;

use crate::browse::find_pattern;
use crate::error::Result;
use crate::render::write_surface;
use crate::script::{parse_script, run_script};

/// Longest the interactive loop sleeps when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

const HELP: &str = "\
Commands:
  <n>          press button n
  open <id>    switch to another pattern
  list         list pattern ids
  help         show this help
  quit         exit";

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    /// Pattern id, e.g. `state`.
    pub id: String,

    /// Steps separated by `;`: `press <label>`, `press #<n>`, `wait <ms>`.
    #[arg(long)]
    pub script: Option<String>,
}

pub fn run_play<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    settings: DemoSettings,
    args: &PlayArgs,
    json: bool,
) -> Result<()> {
    match &args.script {
        Some(script) => {
            let steps = parse_script(script)?;
            let pattern = find_pattern(catalog, &args.id)?;
            let mut host = DemoHost::new(Registry::builtin(), settings);
            host.activate(pattern.demo_type());
            run_script(&mut host, &steps)?;
            write_surface(out, &host, json)
        }
        None => {
            let mut session = Session::new(catalog, settings);
            session.open(&args.id)?;
            run_interactive(out, &mut session)
        }
    }
}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Press(u16),
    Open(String),
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if let Ok(n) = line.parse::<u16>() {
            return Self::Press(n);
        }
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));
        match verb.to_ascii_lowercase().as_str() {
            "open" if !rest.is_empty() => Self::Open(rest.to_string()),
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive selection state: the catalog, the host and the open pattern.
pub struct Session<'a> {
    catalog: &'a Catalog,
    host: DemoHost,
    pattern_id: Option<String>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, settings: DemoSettings) -> Self {
        Self {
            catalog,
            host: DemoHost::new(Registry::builtin(), settings),
            pattern_id: None,
        }
    }

    /// Switch to another pattern through the mount/unmount lifecycle.
    pub fn open(&mut self, id: &str) -> Result<()> {
        let pattern = find_pattern(self.catalog, id)?;
        self.host.activate(pattern.demo_type());
        self.pattern_id = Some(pattern.id.clone());
        Ok(())
    }

    #[must_use]
    pub fn host(&self) -> &DemoHost {
        &self.host
    }

    #[must_use]
    pub fn pattern_id(&self) -> Option<&str> {
        self.pattern_id.as_deref()
    }

    /// Fire timers due by `now` on the host clock.
    pub fn tick(&mut self, now: Duration) -> usize {
        self.host.advance_until(now)
    }

    /// How long until the next timer, capped at `cap`.
    #[must_use]
    pub fn wait_budget(&self, cap: Duration) -> Duration {
        self.host
            .next_deadline()
            .map_or(cap, |deadline| deadline.saturating_sub(self.host.now()).min(cap))
    }

    /// Apply one command. User mistakes are reported on `out`, not as errors.
    pub fn handle<W: Write>(&mut self, out: &mut W, command: Command) -> Result<Flow> {
        match command {
            Command::Press(n) => {
                if !self.host.press(ButtonId(n)) {
                    writeln!(out, "No button {n}. Buttons are numbered from 1.")?;
                }
            }
            Command::Open(id) => {
                if let Err(err) = self.open(&id) {
                    writeln!(out, "{err}")?;
                }
            }
            Command::List => {
                for pattern in self.catalog {
                    writeln!(out, "{:<12} {}", pattern.id, pattern.name)?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
            Command::Unknown(line) => writeln!(out, "Unknown command {line:?}. Type `help`.")?,
        }
        Ok(Flow::Continue)
    }

    fn redraw<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(id) = &self.pattern_id {
            writeln!(out, "── {id} ──")?;
        }
        write_surface(out, &self.host, false)?;
        out.flush()?;
        Ok(())
    }
}

/// Read commands from stdin on a helper thread and advance the host's timers
/// against the wall clock between them.
pub fn run_interactive<W: Write>(out: &mut W, session: &mut Session<'_>) -> Result<()> {
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    writeln!(out, "{HELP}")?;
    let start = Instant::now();
    session.tick(start.elapsed());
    session.redraw(out)?;
    let mut drawn = Some(session.host().surface().revision());

    loop {
        match rx.recv_timeout(session.wait_budget(IDLE_POLL)) {
            Ok(line) => {
                let command = Command::parse(&line);
                tracing::debug!(?command, "interactive command");
                let forced = matches!(command, Command::Press(_) | Command::Open(_));
                if session.handle(out, command)? == Flow::Quit {
                    break;
                }
                if forced {
                    drawn = None;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        session.tick(start.elapsed());
        let revision = session.host().surface().revision();
        if drawn != Some(revision) {
            session.redraw(out)?;
            drawn = Some(revision);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("embedded catalog parses")
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse(" 3 "), Command::Press(3));
        assert_eq!(Command::parse("open state"), Command::Open("state".into()));
        assert_eq!(Command::parse("OPEN  adapter "), Command::Open("adapter".into()));
        assert_eq!(Command::parse("open"), Command::Unknown("open".into()));
        assert_eq!(Command::parse("ls"), Command::List);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".into()));
    }

    #[test]
    fn scripted_play_prints_final_surface() {
        let mut out = Vec::new();
        let args = PlayArgs {
            id: "command".into(),
            script: Some("press Light On; press Fan On; press Execute All".into()),
        };
        run_play(&mut out, &catalog(), DemoSettings::default(), &args, false).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Commands Queue: 0\n"));
        assert!(out.ends_with("Executing: Light On, Fan On\n"));
    }

    #[test]
    fn script_errors_come_before_mounting() {
        let mut out = Vec::new();
        let args = PlayArgs {
            id: "no-such-pattern".into(),
            script: Some("wait later".into()),
        };
        let err = run_play(&mut out, &catalog(), DemoSettings::default(), &args, false).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn session_switches_through_the_lifecycle() {
        let catalog = catalog();
        let mut session = Session::new(&catalog, DemoSettings::default());
        session.open("state").unwrap();
        let mut out = Vec::new();
        session.handle(&mut out, Command::Press(1)).unwrap();
        session.handle(&mut out, Command::Press(2)).unwrap();
        assert_eq!(session.host().pending_timers(), 1);

        session.handle(&mut out, Command::Open("facade".into())).unwrap();
        assert_eq!(session.pattern_id(), Some("facade"));
        assert!(session.host().is_fallback());
        assert_eq!(session.host().pending_timers(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn session_reports_mistakes_without_failing() {
        let catalog = catalog();
        let mut session = Session::new(&catalog, DemoSettings::default());
        session.open("adapter").unwrap();
        let mut out = Vec::new();
        assert_eq!(session.handle(&mut out, Command::Press(9)).unwrap(), Flow::Continue);
        assert_eq!(
            session.handle(&mut out, Command::Open("nope".into())).unwrap(),
            Flow::Continue
        );
        assert_eq!(session.pattern_id(), Some("adapter"));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("No button 9"));
        assert!(out.contains("unknown pattern id: nope"));
        assert_eq!(session.handle(&mut io::sink(), Command::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn wait_budget_tracks_next_timer() {
        let catalog = catalog();
        let mut session = Session::new(&catalog, DemoSettings::default());
        session.open("adapter").unwrap();
        assert_eq!(session.wait_budget(IDLE_POLL), IDLE_POLL);
        session.handle(&mut io::sink(), Command::Press(1)).unwrap();
        assert_eq!(
            session.wait_budget(Duration::from_secs(5)),
            Duration::from_millis(800)
        );
        session.tick(Duration::from_millis(800));
        assert!(session.host().surface().output_text().unwrap().ends_with("✅ Now it fits!"));
    }
}
