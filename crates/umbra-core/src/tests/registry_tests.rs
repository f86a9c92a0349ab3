use std::sync::Arc;

use super::fixtures::{test_registry, Badge, Label};
use crate::{
    descriptor, ComponentDescriptorRegistry, ComponentKey, RegistryError,
};

#[test]
fn resolves_by_handle_and_name_to_the_same_descriptor() {
    let registry = test_registry();
    for registered in registry.iter() {
        let by_handle = registry
            .resolve_by_handle(registered.component_handle())
            .unwrap();
        let by_name = registry.resolve_by_name(registered.component_name()).unwrap();
        assert!(Arc::ptr_eq(registered, &by_handle));
        assert!(Arc::ptr_eq(registered, &by_name));
    }
}

#[test]
fn reregistering_the_same_instance_is_a_noop() {
    let mut registry = ComponentDescriptorRegistry::new();
    let label = descriptor::<Label>();
    registry.register(Arc::clone(&label)).unwrap();
    registry.register(label).unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn conflicting_descriptor_for_a_bound_handle_is_rejected() {
    let mut registry = ComponentDescriptorRegistry::new();
    registry.register(descriptor::<Label>()).unwrap();

    // A second instance for the same component type is a different
    // descriptor object, so this is a configuration fault.
    let err = registry.register(descriptor::<Label>()).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateRegistration {
            handle: 1,
            name: "Label",
        }
    );
}

#[test]
fn unknown_handle_lookup_fails() {
    let registry = test_registry();
    let err = registry.resolve_by_handle(99).unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownComponentType(ComponentKey::Handle(99))
    );
}

#[test]
fn unknown_name_lookup_fails() {
    let registry = test_registry();
    let err = registry.resolve_by_name("Video").unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownComponentType(ComponentKey::Name("Video".to_owned()))
    );
    assert_eq!(
        err.to_string(),
        "no descriptor registered for component name `Video`"
    );
}

#[test]
fn descriptors_and_lookup_results_format_for_diagnostics() {
    let registry = test_registry();
    let label = registry.resolve_by_name("Label").unwrap();
    assert!(format!("{label:?}").contains("Label"));
    // The whole lookup result must be debug-printable for test assertions
    // and error reporting in embedders.
    let missing = registry.resolve_by_name("Video");
    assert!(format!("{missing:?}").contains("UnknownComponentType"));
}

#[test]
fn iterates_in_registration_order() {
    let mut registry = ComponentDescriptorRegistry::new();
    registry.register(descriptor::<Badge>()).unwrap();
    registry.register(descriptor::<Label>()).unwrap();

    let names: Vec<_> = registry.iter().map(|d| d.component_name()).collect();
    assert_eq!(names, vec!["Badge", "Label"]);
}

#[test]
fn sealed_registry_serves_concurrent_lookups() {
    let registry = test_registry().into_shared();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let registry = Arc::clone(&registry);
        handles.push(std::thread::spawn(move || {
            registry.resolve_by_name("Panel").unwrap().component_handle()
        }));
    }
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
