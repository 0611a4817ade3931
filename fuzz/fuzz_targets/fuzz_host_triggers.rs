#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pplay_core::{ButtonId, Duration};
use pplay_demos::DemoHost;

const TAGS: [&str; 11] = [
    "strategy-rpg",
    "observer-youtube",
    "decorator-coffee",
    "singleton-db",
    "factory-transport",
    "command-remote",
    "state-vending",
    "adapter-plug",
    "builder-robot",
    "template-barista",
    "",
];

#[derive(Debug, Arbitrary)]
enum Event {
    Activate(u8),
    Press(u8),
    Wait(u16),
    Deactivate,
}

fuzz_target!(|events: Vec<Event>| {
    let mut host = DemoHost::default();
    for event in events {
        match event {
            Event::Activate(i) => {
                let previous = host.mount_id();
                let mount = host.activate(TAGS[usize::from(i) % TAGS.len()]);
                if let Some(previous) = previous {
                    assert_ne!(previous, mount, "mount id reused");
                    assert_eq!(host.pending_for(previous), 0, "outgoing timers leaked");
                }
            }
            Event::Press(n) => {
                let bound = host.surface().has_button(ButtonId(u16::from(n)));
                assert_eq!(host.press(ButtonId(u16::from(n))), bound);
            }
            Event::Wait(ms) => {
                let before = host.now();
                host.advance(Duration::from_millis(u64::from(ms)));
                assert!(host.now() >= before, "clock went backwards");
            }
            Event::Deactivate => {
                host.deactivate();
                assert!(host.surface().is_empty());
                assert_eq!(host.pending_timers(), 0);
            }
        }

        // Every pending timer belongs to the live widget.
        let live = host.mount_id().map_or(0, |m| host.pending_for(m));
        assert_eq!(host.pending_timers(), live, "timer owned by a dead mount");
    }
});
