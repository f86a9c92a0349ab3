use std::fmt;
use std::sync::Arc;

use ahash::RandomState;
use hashbrown::HashMap;
use indexmap::IndexMap;

use crate::descriptor::SharedComponentDescriptor;
use crate::{ComponentHandle, ComponentName};

/// Either key under which a descriptor can be looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKey {
    Handle(ComponentHandle),
    Name(String),
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKey::Handle(handle) => write!(f, "handle {handle}"),
            ComponentKey::Name(name) => write!(f, "name `{name}`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A handle or name is already bound to a different descriptor
    /// instance. A startup-time configuration fault; re-registering the
    /// identical instance is a no-op instead.
    DuplicateRegistration {
        handle: ComponentHandle,
        name: ComponentName,
    },
    /// Lookup miss; recoverable by the caller as "unsupported element
    /// type".
    UnknownComponentType(ComponentKey),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateRegistration { handle, name } => write!(
                f,
                "component `{name}` (handle {handle}) is already registered \
                 with a different descriptor"
            ),
            RegistryError::UnknownComponentType(key) => {
                write!(f, "no descriptor registered for component {key}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Process-wide mapping from component type identity to its descriptor.
///
/// Registration happens on `&mut self` during startup; sealing the
/// registry is [`ComponentDescriptorRegistry::into_shared`], after which
/// only `&self` lookups exist and unsynchronized concurrent reads are safe
/// by construction.
#[derive(Default)]
pub struct ComponentDescriptorRegistry {
    by_handle: HashMap<ComponentHandle, SharedComponentDescriptor, RandomState>,
    by_name: IndexMap<ComponentName, ComponentHandle>,
}

/// A sealed, read-only registry.
pub type SharedComponentDescriptorRegistry = Arc<ComponentDescriptorRegistry>;

impl ComponentDescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor keyed by its reported handle and name.
    /// Registering the identical descriptor instance again is a no-op.
    pub fn register(
        &mut self,
        descriptor: SharedComponentDescriptor,
    ) -> Result<(), RegistryError> {
        let handle = descriptor.component_handle();
        let name = descriptor.component_name();
        if let Some(existing) = self.by_handle.get(&handle) {
            if Arc::ptr_eq(existing, &descriptor) {
                return Ok(());
            }
            return Err(RegistryError::DuplicateRegistration { handle, name });
        }
        if let Some(&bound) = self.by_name.get(name) {
            // Same name reported under a second handle.
            return Err(RegistryError::DuplicateRegistration {
                handle: bound,
                name,
            });
        }
        self.by_handle.insert(handle, Arc::clone(&descriptor));
        self.by_name.insert(name, handle);
        Ok(())
    }

    pub fn resolve_by_handle(
        &self,
        handle: ComponentHandle,
    ) -> Result<SharedComponentDescriptor, RegistryError> {
        self.by_handle
            .get(&handle)
            .cloned()
            .ok_or(RegistryError::UnknownComponentType(ComponentKey::Handle(
                handle,
            )))
    }

    pub fn resolve_by_name(
        &self,
        name: &str,
    ) -> Result<SharedComponentDescriptor, RegistryError> {
        let handle = self.by_name.get(name).copied().ok_or_else(|| {
            RegistryError::UnknownComponentType(ComponentKey::Name(name.to_owned()))
        })?;
        self.resolve_by_handle(handle)
    }

    pub fn len(&self) -> usize {
        self.by_handle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_handle.is_empty()
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedComponentDescriptor> {
        self.by_name.values().map(|handle| {
            self.by_handle
                .get(handle)
                .expect("name index out of sync with handle table")
        })
    }

    /// Seals the registry. No registration is possible afterwards, so the
    /// shared value is safe for concurrent lookups from any thread.
    pub fn into_shared(self) -> SharedComponentDescriptorRegistry {
        Arc::new(self)
    }
}

impl fmt::Debug for ComponentDescriptorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptorRegistry")
            .field("components", &self.by_name.keys().collect::<Vec<_>>())
            .finish()
    }
}
