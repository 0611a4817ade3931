#![forbid(unsafe_code)]

//! Scripted play on the virtual clock.
//!
//! A script is a `;`-separated list of steps:
//!
//! - `press <label>`: press the button with that label (case-insensitive);
//! - `press #<n>`: press the n-th button;
//! - `wait <ms>`: advance virtual time, firing due timers.
//!
//! Blank steps are skipped. Step numbers in errors are 1-based.

use pplay_core::{ButtonId, Duration};
use pplay_demos::DemoHost;

use crate::error::{Result, ShowcaseError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    PressLabel(String),
    PressIndex(u16),
    Wait(Duration),
}

pub fn parse_script(source: &str) -> Result<Vec<Step>> {
    source
        .split(';')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .enumerate()
        .map(|(i, step)| parse_step(i + 1, step))
        .collect()
}

fn parse_step(number: usize, step: &str) -> Result<Step> {
    let (verb, rest) = step
        .split_once(char::is_whitespace)
        .map_or((step, ""), |(verb, rest)| (verb, rest.trim()));
    match verb.to_ascii_lowercase().as_str() {
        "press" if rest.is_empty() => Err(ShowcaseError::script(number, "press needs a label")),
        "press" => match rest.strip_prefix('#') {
            Some(index) => index
                .parse::<u16>()
                .ok()
                .filter(|n| *n > 0)
                .map(Step::PressIndex)
                .ok_or_else(|| {
                    ShowcaseError::script(number, format!("bad button number {index:?}"))
                }),
            None => Ok(Step::PressLabel(rest.to_string())),
        },
        "wait" => rest
            .parse::<u64>()
            .map(|ms| Step::Wait(Duration::from_millis(ms)))
            .map_err(|_| ShowcaseError::script(number, format!("bad wait {rest:?}"))),
        other => Err(ShowcaseError::script(
            number,
            format!("unknown step {other:?} (expected press or wait)"),
        )),
    }
}

/// Run every step against the mounted demo.
pub fn run_script(host: &mut DemoHost, steps: &[Step]) -> Result<()> {
    for step in steps {
        tracing::debug!(?step, "script step");
        match step {
            Step::PressLabel(label) => {
                if host.press_label(label).is_none() {
                    return Err(unknown_button(host, label.clone()));
                }
            }
            Step::PressIndex(index) => {
                if !host.press(ButtonId(*index)) {
                    return Err(unknown_button(host, format!("#{index}")));
                }
            }
            Step::Wait(dt) => {
                host.advance(*dt);
            }
        }
    }
    Ok(())
}

fn unknown_button(host: &DemoHost, label: String) -> ShowcaseError {
    ShowcaseError::UnknownButton {
        label,
        demo_type: host.active_type().unwrap_or("(none)").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_step_kinds() {
        let steps = parse_script("press Insert Coin; press #2 ;wait 1000;;").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::PressLabel("Insert Coin".into()),
                Step::PressIndex(2),
                Step::Wait(Duration::from_millis(1000)),
            ]
        );
    }

    #[test]
    fn empty_script_has_no_steps() {
        assert!(parse_script("  ; ").unwrap().is_empty());
    }

    #[test]
    fn errors_carry_step_numbers() {
        let err = parse_script("press A; wait soon").unwrap_err();
        assert!(matches!(err, ShowcaseError::Script { step: 2, .. }));

        let err = parse_script("jump").unwrap_err();
        assert!(matches!(err, ShowcaseError::Script { step: 1, .. }));

        let err = parse_script("press #0").unwrap_err();
        assert!(matches!(err, ShowcaseError::Script { step: 1, .. }));

        let err = parse_script("press").unwrap_err();
        assert!(matches!(err, ShowcaseError::Script { step: 1, .. }));
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(
            parse_script("WAIT 5").unwrap(),
            vec![Step::Wait(Duration::from_millis(5))]
        );
    }

    #[test]
    fn run_reports_unknown_label() {
        let mut host = DemoHost::default();
        host.activate("state-vending");
        let steps = parse_script("press Insert Coin; press Refund").unwrap();
        let err = run_script(&mut host, &steps).unwrap_err();
        assert_eq!(err.to_string(), "no button \"Refund\" on the state-vending demo");
        assert_eq!(host.surface().output_text(), Some("Coin accepted."));
    }

    #[test]
    fn run_drives_timers() {
        let mut host = DemoHost::default();
        host.activate("state-vending");
        let steps = parse_script("press #1; press #2; wait 1000").unwrap();
        run_script(&mut host, &steps).unwrap();
        assert_eq!(host.surface().output_text(), Some("Here is your soda! 🥤"));
    }
}
