use std::fmt;
use std::sync::Arc;

use crate::props::{Props, SharedProps};
use crate::{ComponentHandle, ComponentName, InstanceHandle, RootTag, Tag};

/// Shared reference to a published, immutable shadow node. A node commonly
/// has several live owners at once: its parent in the current tree and its
/// former parent in an older, still-referenced snapshot.
pub type SharedShadowNode = Arc<ShadowNode>;

/// Shared child list. Clones that do not replace their children share the
/// whole list by reference, not element by element.
pub type SharedChildren = Arc<Vec<SharedShadowNode>>;

/// An immutable node of a shadow tree.
///
/// Published nodes are deeply immutable and safe for unsynchronized
/// concurrent reads. "Updating" a node means asking its descriptor for a
/// new value via `clone_shadow_node`; the old value stays valid for every
/// other tree snapshot that still references it. The only mutable stage in
/// a node's life is [`PendingShadowNode`], before publication.
pub struct ShadowNode {
    tag: Tag,
    root_tag: RootTag,
    instance_handle: InstanceHandle,
    component_handle: ComponentHandle,
    component_name: ComponentName,
    props: SharedProps,
    children: SharedChildren,
}

impl ShadowNode {
    pub(crate) fn from_parts(
        tag: Tag,
        root_tag: RootTag,
        instance_handle: InstanceHandle,
        component_handle: ComponentHandle,
        component_name: ComponentName,
        props: SharedProps,
        children: SharedChildren,
    ) -> Self {
        debug_assert_distinct_tags(&children);
        Self {
            tag,
            root_tag,
            instance_handle,
            component_handle,
            component_name,
            props,
            children,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn root_tag(&self) -> RootTag {
        self.root_tag
    }

    pub fn instance_handle(&self) -> InstanceHandle {
        self.instance_handle
    }

    pub fn component_handle(&self) -> ComponentHandle {
        self.component_handle
    }

    pub fn component_name(&self) -> ComponentName {
        self.component_name
    }

    pub fn props(&self) -> &SharedProps {
        &self.props
    }

    /// Downcasts the node's props to the concrete type produced by its
    /// descriptor. `None` when `P` is not that type.
    pub fn typed_props<P: Props>(&self) -> Option<&P> {
        self.props.as_any().downcast_ref::<P>()
    }

    pub fn children(&self) -> &[SharedShadowNode] {
        &self.children
    }

    pub(crate) fn children_list(&self) -> &SharedChildren {
        &self.children
    }
}

impl fmt::Debug for ShadowNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowNode")
            .field("tag", &self.tag)
            .field("component", &self.component_name)
            .field("props", &self.props)
            .field("children", &self.children)
            .finish()
    }
}

/// A shadow node in the Building state: exclusively owned by its builder,
/// mutable through [`PendingShadowNode::push_child`], and not yet visible
/// to anyone else.
///
/// Publication is [`PendingShadowNode::seal`], which consumes the builder;
/// after that no path back to mutability exists. The type system enforces
/// the Building → Published transition instead of a runtime flag.
pub struct PendingShadowNode {
    tag: Tag,
    root_tag: RootTag,
    instance_handle: InstanceHandle,
    component_handle: ComponentHandle,
    component_name: ComponentName,
    props: SharedProps,
    children: Vec<SharedShadowNode>,
}

impl PendingShadowNode {
    pub(crate) fn new(
        tag: Tag,
        root_tag: RootTag,
        instance_handle: InstanceHandle,
        component_handle: ComponentHandle,
        component_name: ComponentName,
        props: SharedProps,
    ) -> Self {
        Self {
            tag,
            root_tag,
            instance_handle,
            component_handle,
            component_name,
            props,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn root_tag(&self) -> RootTag {
        self.root_tag
    }

    pub fn component_handle(&self) -> ComponentHandle {
        self.component_handle
    }

    pub fn component_name(&self) -> ComponentName {
        self.component_name
    }

    pub fn children(&self) -> &[SharedShadowNode] {
        &self.children
    }

    /// Appends a child in place. Prefer going through the parent's
    /// descriptor (`append_child`), which also enforces per-type child
    /// policy.
    pub fn push_child(&mut self, child: SharedShadowNode) {
        debug_assert!(
            !self.children.iter().any(|c| c.tag() == child.tag()),
            "duplicate child tag {} under node {}",
            child.tag(),
            self.tag,
        );
        self.children.push(child);
    }

    /// Publishes the node. Consumes the builder; the returned node is
    /// immutable and arbitrarily shareable.
    pub fn seal(self) -> SharedShadowNode {
        Arc::new(ShadowNode::from_parts(
            self.tag,
            self.root_tag,
            self.instance_handle,
            self.component_handle,
            self.component_name,
            self.props,
            Arc::new(self.children),
        ))
    }
}

impl fmt::Debug for PendingShadowNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingShadowNode")
            .field("tag", &self.tag)
            .field("component", &self.component_name)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Renders a tree as an indented `[tag] Name` listing, one node per line.
pub fn format_shadow_tree(root: &SharedShadowNode) -> String {
    let mut output = String::new();
    format_node(&mut output, root, 0);
    output
}

fn format_node(output: &mut String, node: &SharedShadowNode, depth: usize) {
    let indent = "  ".repeat(depth);
    output.push_str(&format!(
        "{}[{}] {}\n",
        indent,
        node.tag(),
        node.component_name()
    ));
    for child in node.children() {
        format_node(output, child, depth + 1);
    }
}

fn debug_assert_distinct_tags(children: &[SharedShadowNode]) {
    if cfg!(debug_assertions) {
        for (index, child) in children.iter().enumerate() {
            debug_assert!(
                !children[..index].iter().any(|c| c.tag() == child.tag()),
                "duplicate child tag {} in child list",
                child.tag(),
            );
        }
    }
}
