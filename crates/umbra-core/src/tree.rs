use std::fmt;
use std::sync::Arc;

use crate::node::SharedShadowNode;
use crate::props::PropsError;
use crate::registry::{ComponentDescriptorRegistry, RegistryError};
use crate::Tag;

/// Failure while producing a new tree version. The operation is
/// all-or-nothing: on any error, nothing was published and every existing
/// snapshot is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    Registry(RegistryError),
    Props(PropsError),
    /// The supplied ancestor path is stale: the expected child is not in
    /// the ancestor's child list of this snapshot.
    ChildNotFound { parent_tag: Tag, child_tag: Tag },
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitError::Registry(err) => err.fmt(f),
            CommitError::Props(err) => err.fmt(f),
            CommitError::ChildNotFound {
                parent_tag,
                child_tag,
            } => write!(f, "node {child_tag} is not a child of node {parent_tag}"),
        }
    }
}

impl std::error::Error for CommitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommitError::Registry(err) => Some(err),
            CommitError::Props(err) => Some(err),
            CommitError::ChildNotFound { .. } => None,
        }
    }
}

impl From<RegistryError> for CommitError {
    fn from(err: RegistryError) -> Self {
        CommitError::Registry(err)
    }
}

impl From<PropsError> for CommitError {
    fn from(err: PropsError) -> Self {
        CommitError::Props(err)
    }
}

/// Clone-and-share: replaces `old_child` with `new_child` inside the tree
/// whose ancestor chain is `path`, and returns the new root.
///
/// `path` runs from the root down to `old_child`'s parent; the surrounding
/// reconciler supplies it (an empty path means the root itself is being
/// replaced). Every ancestor on the path is cloned through its descriptor
/// with a child list in which the previous level's node is substituted,
/// located by identity (`Arc::ptr_eq`), never by value. Sibling subtrees
/// keep their identity across versions, and the old root stays valid for
/// whoever still holds it.
pub fn replace_descendant(
    registry: &ComponentDescriptorRegistry,
    path: &[SharedShadowNode],
    old_child: &SharedShadowNode,
    new_child: SharedShadowNode,
) -> Result<SharedShadowNode, CommitError> {
    let mut old = Arc::clone(old_child);
    let mut new = new_child;
    for ancestor in path.iter().rev() {
        let children = ancestor.children();
        let index = children
            .iter()
            .position(|child| Arc::ptr_eq(child, &old))
            .ok_or(CommitError::ChildNotFound {
                parent_tag: ancestor.tag(),
                child_tag: old.tag(),
            })?;
        let mut replaced = children.to_vec();
        replaced[index] = new;
        let descriptor = registry.resolve_by_handle(ancestor.component_handle())?;
        new = descriptor.clone_shadow_node(ancestor, None, Some(replaced))?;
        old = Arc::clone(ancestor);
    }
    Ok(new)
}

/// Removes `child` from its parent's child list and rebuilds the ancestor
/// chain, returning the new root. Removal is a whole-list children
/// replacement with the target absent, not a separate node operation.
///
/// `path` runs from the root down to `child`'s parent and must not be
/// empty; a root cannot be detached from its own tree.
pub fn remove_descendant(
    registry: &ComponentDescriptorRegistry,
    path: &[SharedShadowNode],
    child: &SharedShadowNode,
) -> Result<SharedShadowNode, CommitError> {
    let (parent, ancestors) = path.split_last().ok_or(CommitError::ChildNotFound {
        parent_tag: child.tag(),
        child_tag: child.tag(),
    })?;
    let children = parent.children();
    let index = children
        .iter()
        .position(|c| Arc::ptr_eq(c, child))
        .ok_or(CommitError::ChildNotFound {
            parent_tag: parent.tag(),
            child_tag: child.tag(),
        })?;
    let mut remaining = children.to_vec();
    remaining.remove(index);
    let descriptor = registry.resolve_by_handle(parent.component_handle())?;
    let new_parent = descriptor.clone_shadow_node(parent, None, Some(remaining))?;
    replace_descendant(registry, ancestors, parent, new_parent)
}

/// Depth-first lookup of a node by tag within one snapshot.
pub fn find_by_tag(root: &SharedShadowNode, tag: Tag) -> Option<SharedShadowNode> {
    if root.tag() == tag {
        return Some(Arc::clone(root));
    }
    root.children()
        .iter()
        .find_map(|child| find_by_tag(child, tag))
}

/// Computes the ancestor chain (root down to parent) of the node with
/// `tag`, in the form [`replace_descendant`] consumes. Returns an empty
/// path for the root itself, `None` when the tag is absent from this
/// snapshot.
///
/// Convenience for embedders without their own ancestry index; the
/// mutation algorithm itself always takes a caller-supplied path.
pub fn ancestor_path(root: &SharedShadowNode, tag: Tag) -> Option<Vec<SharedShadowNode>> {
    if root.tag() == tag {
        return Some(Vec::new());
    }
    let mut path = Vec::new();
    if walk(root, tag, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn walk(node: &SharedShadowNode, tag: Tag, path: &mut Vec<SharedShadowNode>) -> bool {
    path.push(Arc::clone(node));
    for child in node.children() {
        if child.tag() == tag {
            return true;
        }
        if walk(child, tag, path) {
            return true;
        }
    }
    path.pop();
    false
}
