//! Integration tests for the logging facade
//!
//! These tests verify:
//! - Severity threshold filtering and threshold round-trips
//! - Tag allow-list filtering
//! - Identity-based observer registration and removal
//! - Default observer toggling and dispatch order
//! - Payload pass-through
//! - Call-site capture
//! - Observer panic isolation

use parking_lot::Mutex;
use rust_log_facade::prelude::*;
use rust_log_facade::{debug, error, info, verbose, warning};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Remembers the last notification, like a hand-written test handler
#[derive(Default)]
struct TestObserver {
    last: Mutex<Option<(LogRecord, String, Severity)>>,
    calls: AtomicUsize,
}

impl TestObserver {
    fn did_log(&self) -> bool {
        self.calls() > 0
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last(&self) -> Option<(LogRecord, String, Severity)> {
        self.last.lock().clone()
    }

    fn reset(&self) {
        *self.last.lock() = None;
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl Observer for TestObserver {
    fn notify(&self, record: &LogRecord, tag: &str, severity: Severity) {
        *self.last.lock() = Some((record.clone(), tag.to_string(), severity));
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "test"
    }
}

/// Facade with the console observer switched off so output stays readable
fn quiet_facade(threshold: Severity) -> Facade {
    Facade::builder()
        .threshold(threshold)
        .default_observer_enabled(false)
        .build()
}

fn registered(facade: &Facade) -> Arc<TestObserver> {
    let observer = Arc::new(TestObserver::default());
    facade.register(observer.clone());
    observer
}

#[test]
fn test_defaults() {
    let facade = Facade::new();
    assert!(facade.is_default_observer_enabled());
    assert!(facade.tag_filter().is_empty());
    #[cfg(debug_assertions)]
    assert_eq!(facade.threshold(), Severity::Debug);
    #[cfg(not(debug_assertions))]
    assert_eq!(facade.threshold(), Severity::Warning);
}

#[test]
fn test_observer_add_remove() {
    let facade = quiet_facade(Severity::Debug);
    let observer = Arc::new(TestObserver::default());
    assert!(!facade.contains(&observer));

    facade.register(observer.clone());
    assert!(facade.contains(&observer));

    assert_eq!(facade.unregister(&observer), 1);
    assert!(!facade.contains(&observer));
}

#[test]
fn test_unregister_unknown_is_noop() {
    let facade = quiet_facade(Severity::Debug);
    let kept = registered(&facade);
    let stranger = Arc::new(TestObserver::default());

    assert_eq!(facade.unregister(&stranger), 0);
    assert!(facade.contains(&kept));
    assert_eq!(facade.observer_count(), 1);
}

#[test]
fn test_logging_without_observers() {
    let facade = quiet_facade(Severity::Verbose);
    debug!(facade, "");
    debug!(facade, "Some content");
    assert_eq!(facade.metrics().dispatched(), 2);
}

#[test]
fn test_threshold_roundtrip() {
    let facade = quiet_facade(Severity::Debug);
    let original = facade.threshold();

    for level in Severity::ALL {
        facade.set_threshold(level);
        assert_eq!(facade.threshold(), level);
    }

    facade.set_threshold(original);
    assert_eq!(facade.threshold(), original);
}

#[test]
fn test_no_notification_after_remove() {
    let facade = quiet_facade(Severity::Debug);
    let observer = Arc::new(TestObserver::default());

    debug!(facade, "Some content");
    facade.register(observer.clone());
    facade.unregister(&observer);
    debug!(facade, "After removal");

    assert!(!observer.did_log());
}

#[test]
fn test_debug_message_tag_and_level() {
    let facade = quiet_facade(Severity::Debug);
    let observer = registered(&facade);

    debug!(facade, "Debug");
    let (record, tag, severity) = observer.last().expect("observer notified");
    assert_eq!(record.message(), "Debug");
    assert!(tag.is_empty());
    assert_eq!(severity, Severity::Debug);
}

#[test]
fn test_tag_passed_through() {
    let facade = quiet_facade(Severity::Debug);
    let observer = registered(&facade);

    debug!(facade, tag: "TAG1", "Debug2");
    let (record, tag, _) = observer.last().expect("observer notified");
    assert_eq!(record.message(), "Debug2");
    assert_eq!(tag, "TAG1");
}

#[test]
fn test_each_entry_point_sets_severity() {
    let facade = quiet_facade(Severity::Verbose);
    let observer = registered(&facade);

    verbose!(facade, tag: "TAG1", "Debug2");
    assert_eq!(observer.last().map(|l| l.2), Some(Severity::Verbose));
    debug!(facade, tag: "TAG1", "Debug2");
    assert_eq!(observer.last().map(|l| l.2), Some(Severity::Debug));
    info!(facade, tag: "TAG1", "Debug2");
    assert_eq!(observer.last().map(|l| l.2), Some(Severity::Info));
    warning!(facade, tag: "TAG1", "Debug2");
    assert_eq!(observer.last().map(|l| l.2), Some(Severity::Warning));
    error!(facade, tag: "TAG1", "Debug2");
    assert_eq!(observer.last().map(|l| l.2), Some(Severity::Error));
}

#[test]
fn test_threshold_blocks_lower_levels() {
    let facade = quiet_facade(Severity::Error);
    let observer = registered(&facade);

    verbose!(facade, tag: "TAG1", "Test");
    debug!(facade, tag: "TAG1", "Test");
    info!(facade, tag: "TAG1", "Test");
    warning!(facade, tag: "TAG1", "Test");
    assert!(!observer.did_log());
    assert!(observer.last().is_none());

    error!(facade, tag: "TAG1", "Test");
    let (record, tag, severity) = observer.last().expect("error passes");
    assert_eq!(record.message(), "Test");
    assert_eq!(tag, "TAG1");
    assert_eq!(severity, Severity::Error);
}

#[test]
fn test_every_level_at_or_above_threshold_is_delivered_once() {
    for threshold in Severity::ALL {
        let facade = quiet_facade(threshold);
        let observer = registered(&facade);

        for severity in Severity::ALL {
            observer.reset();
            facade.emit("msg", severity, "", Payload::None, Origin::caller());
            let expected = usize::from(severity >= threshold);
            assert_eq!(observer.calls(), expected, "{} at threshold {}", severity, threshold);
        }
    }
}

#[test]
fn test_origin_captured_at_call_site() {
    let facade = quiet_facade(Severity::Debug);
    let observer = registered(&facade);

    let expected_line = line!() + 1;
    error!(facade, tag: "TAG1", "Test");

    let (record, _, _) = observer.last().expect("observer notified");
    let origin = record.origin();
    assert_eq!(origin.line, expected_line);
    assert_eq!(origin.file, file!());
    assert!(
        origin.function.ends_with("test_origin_captured_at_call_site"),
        "function was {}",
        origin.function
    );
    assert!(origin.column > 0);
}

#[test]
fn test_tag_filters() {
    let facade = quiet_facade(Severity::Debug);
    let observer = registered(&facade);

    facade.set_tag_filter(["TestTag"]);

    error!(facade, "Test");
    assert!(!observer.did_log(), "untagged message must be filtered");

    error!(facade, tag: "BAD_TAG", "Test");
    assert!(!observer.did_log(), "unlisted tag must be filtered");

    error!(facade, tag: "TestTag", "Test");
    assert!(observer.did_log());
    assert_eq!(observer.last().map(|l| l.1), Some("TestTag".to_string()));
    observer.reset();

    facade.set_tag_filter(Vec::<String>::new());
    error!(facade, tag: "BAD_TAG", "Test");
    assert!(observer.did_log(), "empty filter admits every tag");
}

#[test]
fn test_payload_passthrough() {
    let facade = quiet_facade(Severity::Debug);
    let observer = registered(&facade);

    error!(facade, payload: String::from("Extra"), "Test");
    let (record, _, _) = observer.last().unwrap();
    assert_eq!(
        record.payload().downcast_ref::<String>().map(String::as_str),
        Some("Extra")
    );

    error!(facade, "Test2");
    let (record, _, _) = observer.last().unwrap();
    assert!(record.payload().is_none());
    assert!(record.payload().downcast_ref::<f32>().is_none());

    error!(facade, payload: 123_i64, "test3");
    let (record, _, _) = observer.last().unwrap();
    assert_eq!(record.payload().downcast_ref::<i64>(), Some(&123));
}

#[test]
fn test_zero_like_payload_is_not_absent() {
    let facade = quiet_facade(Severity::Debug);
    let observer = registered(&facade);

    error!(facade, payload: String::from("0"), "string zero");
    let (record, _, _) = observer.last().unwrap();
    assert!(record.payload().is_some());
    assert_eq!(record.payload().downcast_ref::<String>().unwrap(), "0");

    error!(facade, payload: 0_i32, "integer zero");
    let (record, _, _) = observer.last().unwrap();
    assert_eq!(record.payload().downcast_ref::<i32>(), Some(&0));
}

#[test]
fn test_duplicate_registration_notifies_twice_and_removes_together() {
    let facade = quiet_facade(Severity::Debug);
    let observer = Arc::new(TestObserver::default());

    facade.register(observer.clone());
    facade.register(observer.clone());
    error!(facade, "twice");
    assert_eq!(observer.calls(), 2);

    assert_eq!(facade.unregister(&observer), 2);
    assert!(!facade.contains(&observer));

    error!(facade, "never");
    assert_eq!(observer.calls(), 2);
}

#[test]
fn test_registration_order() {
    let facade = quiet_facade(Severity::Debug);
    let order = Arc::new(Mutex::new(Vec::new()));

    for name in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        facade.register(Arc::new(move |_: &LogRecord, _: &str, _: Severity| {
            order.lock().push(name);
        }));
    }

    info!(facade, "ordered");
    assert_eq!(*order.lock(), vec!["first", "second", "third"]);
}

#[test]
fn test_default_observer_toggle() {
    let default_hits = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&default_hits);

    let facade = Facade::builder()
        .threshold(Severity::Debug)
        .default_observer(Arc::new(move |_: &LogRecord, _: &str, _: Severity| {
            hits.fetch_add(1, Ordering::SeqCst);
        }))
        .build();
    let observer = registered(&facade);

    info!(facade, "both");
    assert_eq!(default_hits.load(Ordering::SeqCst), 1);
    assert_eq!(observer.calls(), 1);

    facade.set_default_observer_enabled(false);
    info!(facade, "registered only");
    assert_eq!(default_hits.load(Ordering::SeqCst), 1);
    assert_eq!(observer.calls(), 2);

    facade.set_default_observer_enabled(true);
    info!(facade, "both again");
    assert_eq!(default_hits.load(Ordering::SeqCst), 2);
}

#[test]
fn test_console_default_observer_smoke() {
    // Writes to stderr; only checks that the built-in observer is harmless.
    let facade = Facade::builder().threshold(Severity::Verbose).build();
    let observer = registered(&facade);

    warning!(facade, tag: "SMOKE", "multi\nline message");
    assert_eq!(observer.calls(), 1);
    assert_eq!(facade.metrics().observer_failures(), 0);
}

#[test]
fn test_panicking_observer_does_not_stop_fanout() {
    let facade = quiet_facade(Severity::Debug);
    facade.register(Arc::new(|_: &LogRecord, _: &str, _: Severity| {
        panic!("broken observer");
    }));
    let observer = registered(&facade);

    error!(facade, "first");
    error!(facade, "second");

    assert_eq!(observer.calls(), 2);
    assert_eq!(facade.metrics().observer_failures(), 2);
}

#[test]
fn test_observer_can_log_through_facade() {
    let facade = Arc::new(quiet_facade(Severity::Debug));
    let inner = registered(&facade);

    let reentrant_facade = Arc::downgrade(&facade);
    facade.register(Arc::new(move |record: &LogRecord, tag: &str, _: Severity| {
        if tag == "OUTER" {
            if let Some(facade) = reentrant_facade.upgrade() {
                info!(facade, tag: "INNER", "echo: {}", record.message());
            }
        }
    }));

    info!(facade, tag: "OUTER", "hello");

    let (record, tag, _) = inner.last().expect("inner message delivered");
    assert_eq!(tag, "INNER");
    assert_eq!(record.message(), "echo: hello");
    assert_eq!(inner.calls(), 2);
}

#[test]
fn test_scoped_registration_and_threshold() {
    let facade = quiet_facade(Severity::Error);
    let observer: Arc<dyn Observer> = Arc::new(TestObserver::default());

    {
        let _registration = facade.register_scoped(observer.clone());
        let _threshold = facade.scoped_threshold(Severity::Verbose);
        verbose!(facade, "inside scope");
        assert_eq!(facade.metrics().dispatched(), 1);
    }

    assert!(!facade.contains(&observer));
    assert_eq!(facade.threshold(), Severity::Error);
}

#[test]
fn test_channel_observer_preserves_order() {
    let facade = quiet_facade(Severity::Verbose);
    let (observer, receiver) = ChannelObserver::unbounded();
    facade.register(Arc::new(observer));

    for i in 0..10 {
        info!(facade, payload: i, "message {}", i);
    }

    let payloads: Vec<i32> = receiver
        .try_iter()
        .map(|o| *o.record.payload().downcast_ref::<i32>().unwrap())
        .collect();
    assert_eq!(payloads, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_config_from_json() {
    let config = FacadeConfig::from_json(
        r#"{"threshold": "warning", "tag_filter": ["DB"], "default_observer_enabled": false}"#,
    )
    .expect("valid config");
    let facade = Facade::with_config(config);
    let observer = registered(&facade);

    error!(facade, tag: "DB", "kept");
    error!(facade, tag: "UI", "dropped");
    info!(facade, tag: "DB", "dropped");

    assert_eq!(observer.calls(), 1);
    assert_eq!(facade.metrics().tag_filtered(), 1);
    assert_eq!(facade.metrics().severity_filtered(), 1);
}
