//! Immutable shadow tree core: nodes, component descriptors, and the
//! descriptor registry.
//!
//! A shadow tree is a versioned, immutable description of a UI hierarchy
//! that a surrounding reconciler diffs against a host view hierarchy.
//! Nodes never change after publication; an "edit" clones the node and
//! every ancestor up to the root while sharing all untouched subtrees by
//! reference. Per-type behavior (prop interpretation, cloning, child
//! attachment) lives in [`ComponentDescriptor`]s resolved through the
//! [`ComponentDescriptorRegistry`], never in node subtypes.

mod descriptor;
mod node;
mod props;
mod raw_props;
mod registry;
mod tree;

pub use descriptor::{
    descriptor, Component, ComponentDescriptor, SharedComponentDescriptor,
    TypedComponentDescriptor,
};
pub use node::{format_shadow_tree, PendingShadowNode, ShadowNode, SharedChildren, SharedShadowNode};
pub use props::{Props, PropsError, SharedProps};
pub use raw_props::{RawProps, RawValue};
pub use registry::{
    ComponentDescriptorRegistry, ComponentKey, RegistryError, SharedComponentDescriptorRegistry,
};
pub use tree::{ancestor_path, find_by_tag, remove_descendant, replace_descendant, CommitError};

/// Stable integer identity of one logical UI element across its successive
/// immutable node versions.
pub type Tag = i64;

/// Identifies which root tree (surface/window) a node belongs to.
pub type RootTag = Tag;

/// Identity of a component type; constant for all nodes of that type.
pub type ComponentHandle = u64;

/// Human-readable component type identifier, used by external creation
/// requests.
pub type ComponentName = &'static str;

/// Opaque token carried unchanged across clones of a node. External
/// callback-dispatch collaborators use it for correlation; this crate never
/// inspects it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InstanceHandle(pub u64);

#[cfg(test)]
mod tests;
