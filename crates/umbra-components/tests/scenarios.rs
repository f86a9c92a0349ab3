//! End-to-end scenarios: registry setup, node construction, and
//! clone-and-share commits over the built-in component set.

use std::sync::Arc;

use umbra_components::{default_registry, handles, TextProps};
use umbra_core::{
    ancestor_path, raw_props, replace_descendant, ComponentDescriptorRegistry, InstanceHandle,
    RawProps, RegistryError, SharedShadowNode,
};

fn text(registry: &ComponentDescriptorRegistry, tag: i64, content: &str) -> SharedShadowNode {
    registry
        .resolve_by_name("Text")
        .unwrap()
        .create_shadow_node(
            tag,
            1,
            InstanceHandle::default(),
            &raw_props! { "text" => content },
        )
        .unwrap()
        .seal()
}

fn view(
    registry: &ComponentDescriptorRegistry,
    tag: i64,
    children: Vec<SharedShadowNode>,
) -> SharedShadowNode {
    let descriptor = registry.resolve_by_name("View").unwrap();
    let mut pending = descriptor
        .create_shadow_node(tag, 1, InstanceHandle::default(), &RawProps::new())
        .unwrap();
    for child in children {
        descriptor.append_child(&mut pending, child);
    }
    pending.seal()
}

#[test]
fn creating_a_text_node_resolves_props_and_identity() {
    let registry = default_registry().unwrap();
    let node = registry
        .resolve_by_name("Text")
        .unwrap()
        .create_shadow_node(10, 1, InstanceHandle(7), &raw_props! { "text" => "hi" })
        .unwrap()
        .seal();

    assert_eq!(node.component_handle(), handles::TEXT);
    assert_eq!(node.tag(), 10);
    assert_eq!(node.root_tag(), 1);
    assert!(node.children().is_empty());
    assert_eq!(node.typed_props::<TextProps>().unwrap().text, "hi");
}

#[test]
fn children_appended_while_building_keep_their_order() {
    let registry = default_registry().unwrap();
    let parent = view(
        &registry,
        1,
        vec![text(&registry, 2, "a"), text(&registry, 3, "b")],
    );

    let tags: Vec<_> = parent.children().iter().map(|child| child.tag()).collect();
    assert_eq!(tags, vec![2, 3]);
}

#[test]
fn commit_shares_untouched_subtrees_and_preserves_the_old_tree() {
    let registry = default_registry().unwrap();
    // R(1)[ A(2)[ B(3), C(4) ] ]
    let b = text(&registry, 3, "b");
    let c = text(&registry, 4, "c");
    let a = view(&registry, 2, vec![Arc::clone(&b), Arc::clone(&c)]);
    let root = view(&registry, 1, vec![Arc::clone(&a)]);

    let text_descriptor = registry.resolve_by_handle(b.component_handle()).unwrap();
    let new_b = text_descriptor
        .clone_shadow_node(&b, Some(&raw_props! { "text" => "b2" }), None)
        .unwrap();

    let path = ancestor_path(&root, 3).unwrap();
    let new_root = replace_descendant(&registry, &path, &b, new_b).unwrap();

    // C kept its identity across the two versions.
    assert!(Arc::ptr_eq(
        &new_root.children()[0].children()[1],
        &c
    ));
    assert_eq!(
        new_root.children()[0].children()[0]
            .typed_props::<TextProps>()
            .unwrap()
            .text,
        "b2"
    );
    // The old root still reads [A[B, C]] with the original content.
    assert!(Arc::ptr_eq(&root.children()[0], &a));
    assert_eq!(
        root.children()[0].children()[0]
            .typed_props::<TextProps>()
            .unwrap()
            .text,
        "b"
    );
}

#[test]
fn unknown_component_requests_produce_no_node() {
    let registry = default_registry().unwrap();
    let err = registry.resolve_by_name("Video").unwrap_err();
    assert!(matches!(err, RegistryError::UnknownComponentType(_)));
}

#[test]
fn every_builtin_round_trips_through_both_keys() {
    let registry = default_registry().unwrap();
    assert_eq!(registry.len(), 5);
    for descriptor in registry.iter() {
        let by_handle = registry
            .resolve_by_handle(descriptor.component_handle())
            .unwrap();
        let by_name = registry
            .resolve_by_name(descriptor.component_name())
            .unwrap();
        assert!(Arc::ptr_eq(descriptor, &by_handle));
        assert!(Arc::ptr_eq(descriptor, &by_name));
    }
}

#[test]
fn rejected_creation_leaves_existing_trees_alone() {
    let registry = default_registry().unwrap();
    let root = view(&registry, 1, vec![text(&registry, 2, "hi")]);

    let err = registry
        .resolve_by_name("Image")
        .unwrap()
        .create_shadow_node(9, 1, InstanceHandle::default(), &RawProps::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "required prop `source` is missing");

    assert_eq!(root.children().len(), 1);
    assert_eq!(
        root.children()[0].typed_props::<TextProps>().unwrap().text,
        "hi"
    );
}

#[test]
#[should_panic(expected = "does not accept children")]
fn raw_text_never_accepts_children() {
    let registry = default_registry().unwrap();
    let descriptor = registry.resolve_by_name("RawText").unwrap();
    let mut pending = descriptor
        .create_shadow_node(1, 1, InstanceHandle::default(), &raw_props! { "text" => "x" })
        .unwrap();
    descriptor.append_child(&mut pending, text(&registry, 2, "child"));
}
