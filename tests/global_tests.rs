//! Tests for the process-wide facade
//!
//! Only `test_global_lifecycle` may create the global instance; the other
//! tests here must fail before installing anything.

use rust_log_facade::prelude::*;
use rust_log_facade::{error, install_global};
use std::sync::Arc;

#[test]
fn test_global_lifecycle() {
    let config = FacadeConfig {
        threshold: Severity::Info,
        tag_filter: Default::default(),
        default_observer_enabled: false,
    };

    let facade = init_global(config).expect("first initialization succeeds");
    assert_eq!(facade.threshold(), Severity::Info);
    assert!(std::ptr::eq(facade, global()));

    let second = init_global(FacadeConfig::default());
    assert!(matches!(second, Err(FacadeError::AlreadyInitialized)));
    assert!(matches!(
        install_global(Facade::new()),
        Err(FacadeError::AlreadyInitialized)
    ));

    let (observer, receiver) = ChannelObserver::unbounded();
    let observer = Arc::new(observer);
    global().register(observer.clone());

    error!(global(), tag: "GLOBAL", "from anywhere");
    assert_eq!(receiver.try_recv().unwrap().record.message(), "from anywhere");

    global().unregister(&observer);
    assert!(!global().contains(&observer));
}

#[test]
fn test_init_rejects_invalid_config() {
    let config = FacadeConfig {
        tag_filter: [String::new()].into_iter().collect(),
        ..FacadeConfig::default()
    };
    assert!(matches!(
        init_global(config),
        Err(FacadeError::InvalidConfiguration { .. })
    ));
}
