//! Integration tests for collecting through a `TypeRegistry` (foreign types, `dyn Any`).

use std::any::Any;
use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use fieldwalk::{
    ClassDescriptor, CollectError, ErrorKind, FieldCollector, Reflect, Sealed, TypeRegistry,
};

static SOCKET_ADDR: ClassDescriptor = ClassDescriptor::root("SocketAddr", &["ip", "port"]);
static DURATION: ClassDescriptor = ClassDescriptor::root("Duration", &["secs", "nanos"]);

#[allow(dead_code)]
#[derive(Reflect)]
struct Timeout {
    limit: u64,
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register_as::<SocketAddr>(&SOCKET_ADDR)
        .register_as::<Duration>(&DURATION)
        .register::<Timeout>();
    registry
}

fn sorted(names: impl IntoIterator<Item = String>) -> Vec<String> {
    names.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

#[test]
fn foreign_types_resolve_by_dynamic_type() {
    let registry = registry();
    let values: Vec<Box<dyn Any>> = vec![
        Box::new("127.0.0.1:80".parse::<SocketAddr>().unwrap()),
        Box::new(Duration::from_millis(5)),
        Box::new(Timeout { limit: 3 }),
    ];

    let collector = FieldCollector::new();
    let results: Vec<_> = values
        .iter()
        .map(|v| sorted(collector.collect_any(&registry, v.as_ref()).unwrap()))
        .collect();
    assert_eq!(
        results,
        vec![vec!["ip", "port"], vec!["nanos", "secs"], vec!["limit"]]
    );
}

#[test]
fn unregistered_type_is_reported() {
    let registry = registry();
    let err = FieldCollector::new()
        .collect_any(&registry, &String::from("nope"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnregisteredType);
    assert!(err.to_string().starts_with("UnregisteredType: "));
}

#[test]
fn policy_applies_to_registered_types() {
    let registry = registry();
    let err = FieldCollector::new()
        .with_policy(Sealed)
        .collect_any(&registry, &Duration::ZERO)
        .unwrap_err();
    assert!(matches!(err, CollectError::ReflectionDenied { class: "Duration", .. }));
}

#[test]
fn registry_can_be_shared_across_threads() {
    let registry = Arc::new(registry());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let value = Duration::from_secs(i);
                FieldCollector::new().collect_any(&registry, &value).unwrap().len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
