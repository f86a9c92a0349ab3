use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::node::{PendingShadowNode, ShadowNode, SharedShadowNode};
use crate::props::{Props, PropsError, SharedProps};
use crate::raw_props::RawProps;
use crate::{ComponentHandle, ComponentName, InstanceHandle, RootTag, Tag};

/// Strongly typed definition of one component type.
///
/// Implemented once per type in the component set; the runtime only ever
/// sees it through the type-erased [`ComponentDescriptor`] produced by
/// [`descriptor`]. Both `component_handle` and `component_name` must be
/// constants: every node of the type reports the same handle for its whole
/// lifetime, and the handle is the registry key.
pub trait Component: 'static {
    type Props: Props + Clone;

    fn component_handle() -> ComponentHandle;

    fn component_name() -> ComponentName;

    /// Interprets a full raw bag into typed props. Prop policy is
    /// type-specific: tolerant types fall back to defaults for absent
    /// keys, strict types return [`PropsError::MissingProp`].
    fn create_props(raw: &RawProps) -> Result<Self::Props, PropsError>;

    /// Partial-update merge: keys present in `raw` override `base`, all
    /// other properties keep their prior values.
    fn update_props(base: &Self::Props, raw: &RawProps) -> Result<Self::Props, PropsError>;

    /// Leaf types return `false`; appending a child to them is a contract
    /// violation, not a recoverable error.
    fn children_allowed() -> bool {
        true
    }
}

/// Type-erased per-component-type strategy: creates, clones, and grafts
/// children onto shadow nodes of exactly one component type.
///
/// Descriptors are stateless, shared process-wide, and own no node. All
/// node construction goes through the descriptor resolved from the
/// registry, never through node-level inheritance.
pub trait ComponentDescriptor: fmt::Debug + Send + Sync {
    fn component_handle(&self) -> ComponentHandle;

    fn component_name(&self) -> ComponentName;

    /// Builds a new node with empty children in the Building state.
    /// Deterministic for identical inputs, apart from the fresh identity
    /// of the returned value.
    fn create_shadow_node(
        &self,
        tag: Tag,
        root_tag: RootTag,
        instance_handle: InstanceHandle,
        raw_props: &RawProps,
    ) -> Result<PendingShadowNode, PropsError>;

    /// Produces a new published node equal to `node` except for the
    /// supplied deltas: `raw_props` merges over the prior typed props
    /// (partial update), `children` replaces the child list wholesale.
    ///
    /// Always allocates a fresh node, even when both deltas are absent;
    /// the surrounding diff layer relies on identity, not value equality,
    /// to detect unchanged subtrees. `node` itself is never touched.
    fn clone_shadow_node(
        &self,
        node: &ShadowNode,
        raw_props: Option<&RawProps>,
        children: Option<Vec<SharedShadowNode>>,
    ) -> Result<SharedShadowNode, PropsError>;

    /// Appends `child` to a node still in the Building state. The `&mut`
    /// receiver confines this to the single owner of the builder; published
    /// nodes cannot reach this code path at all.
    fn append_child(&self, parent: &mut PendingShadowNode, child: SharedShadowNode);
}

/// Shared, registry-owned descriptor handle.
pub type SharedComponentDescriptor = Arc<dyn ComponentDescriptor>;

/// Bridges a [`Component`] definition to the type-erased
/// [`ComponentDescriptor`] surface.
pub struct TypedComponentDescriptor<C: Component> {
    // fn() -> C keeps the descriptor Send + Sync no matter what C is;
    // component types are never instantiated, only consulted statically.
    _marker: PhantomData<fn() -> C>,
}

impl<C: Component> TypedComponentDescriptor<C> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C: Component> Default for TypedComponentDescriptor<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component> fmt::Debug for TypedComponentDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedComponentDescriptor")
            .field("component", &C::component_name())
            .field("type", &type_name::<C>())
            .finish()
    }
}

impl<C: Component> ComponentDescriptor for TypedComponentDescriptor<C> {
    fn component_handle(&self) -> ComponentHandle {
        C::component_handle()
    }

    fn component_name(&self) -> ComponentName {
        C::component_name()
    }

    fn create_shadow_node(
        &self,
        tag: Tag,
        root_tag: RootTag,
        instance_handle: InstanceHandle,
        raw_props: &RawProps,
    ) -> Result<PendingShadowNode, PropsError> {
        let props = C::create_props(raw_props)?;
        Ok(PendingShadowNode::new(
            tag,
            root_tag,
            instance_handle,
            C::component_handle(),
            C::component_name(),
            Arc::new(props),
        ))
    }

    fn clone_shadow_node(
        &self,
        node: &ShadowNode,
        raw_props: Option<&RawProps>,
        children: Option<Vec<SharedShadowNode>>,
    ) -> Result<SharedShadowNode, PropsError> {
        let props: SharedProps = match raw_props {
            Some(raw) => {
                let base = node
                    .typed_props::<C::Props>()
                    .expect("shadow node props type mismatch");
                Arc::new(C::update_props(base, raw)?)
            }
            None => Arc::clone(node.props()),
        };
        let children = match children {
            Some(list) => Arc::new(list),
            None => Arc::clone(node.children_list()),
        };
        Ok(Arc::new(ShadowNode::from_parts(
            node.tag(),
            node.root_tag(),
            node.instance_handle(),
            node.component_handle(),
            node.component_name(),
            props,
            children,
        )))
    }

    fn append_child(&self, parent: &mut PendingShadowNode, child: SharedShadowNode) {
        assert!(
            C::children_allowed(),
            "component `{}` does not accept children",
            C::component_name(),
        );
        parent.push_child(child);
    }
}

/// Constructs the shared descriptor for a component type without naming
/// the wrapper type.
pub fn descriptor<C: Component>() -> SharedComponentDescriptor {
    Arc::new(TypedComponentDescriptor::<C>::new())
}
