//! Lifecycle logging: activation and teardown are reported as structured
//! tracing events carrying the mount id and the number of cancelled timers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pplay_demos::DemoHost;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Tracing capture infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.remove("message").unwrap_or_default();
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields,
        });
    }
}

fn with_captured_tracing<F, R>(f: F) -> (R, Vec<CapturedEvent>)
where
    F: FnOnce() -> R,
{
    let capture = EventCapture::default();
    let events = Arc::clone(&capture.events);
    let subscriber = tracing_subscriber::registry().with(capture);
    let result = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    (result, events)
}

fn find<'a>(events: &'a [CapturedEvent], message: &str) -> Vec<&'a CapturedEvent> {
    events.iter().filter(|e| e.message == message).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn activation_is_logged_at_info() {
    let (_, events) = with_captured_tracing(|| {
        let mut host = DemoHost::default();
        host.activate("builder-robot");
        host.activate("prototype-clone");
    });

    let mounts = find(&events, "mounting demo");
    assert_eq!(mounts.len(), 2);
    assert!(mounts.iter().all(|e| e.level == tracing::Level::INFO));
    assert_eq!(mounts[0].fields["fallback"], "false");
    assert_eq!(mounts[1].fields["fallback"], "true");
    assert_eq!(mounts[1].fields["descriptor"], "generic");
    assert_eq!(mounts[1].fields["mount"], "mount-2");
}

#[test]
fn teardown_reports_cancelled_timers() {
    let (_, events) = with_captured_tracing(|| {
        let mut host = DemoHost::default();
        host.activate("adapter-plug");
        host.press_label("Plug US Device");
        host.press_label("Plug US Device");
        host.activate("singleton-db");
    });

    let teardowns = find(&events, "demo torn down");
    assert_eq!(teardowns.len(), 1);
    assert_eq!(teardowns[0].fields["cancelled_timers"], "2");
    assert_eq!(teardowns[0].fields["demo_type"], "adapter-plug");
}

#[test]
fn no_stale_timer_warnings_after_switching() {
    let (_, events) = with_captured_tracing(|| {
        let mut host = DemoHost::default();
        host.activate("state-vending");
        host.press_label("Insert Coin");
        host.press_label("Press Button");
        host.activate("template-barista");
        host.advance(pplay_core::Duration::from_secs(10));
    });

    assert!(events.iter().all(|e| e.level != tracing::Level::WARN));
}
