//! Built-in component set for the Umbra shadow tree.
//!
//! One [`Component`](umbra_core::Component) definition per element type the
//! surrounding renderer understands, plus [`install_defaults`] to populate a
//! registry with the whole set. Prop keys follow the camelCase names used by
//! external creation requests (`backgroundColor`, `fontSize`, …).

mod image;
mod root;
mod text;
mod view;

pub use image::{Image, ImageProps};
pub use root::{Root, RootProps};
pub use text::{RawText, RawTextProps, Text, TextProps};
pub use view::{View, ViewProps};

use umbra_core::{
    descriptor, ComponentDescriptorRegistry, PropsError, RawProps, RegistryError,
};

/// Stable handles for the built-in component types.
pub mod handles {
    use umbra_core::ComponentHandle;

    pub const ROOT: ComponentHandle = 1;
    pub const VIEW: ComponentHandle = 2;
    pub const TEXT: ComponentHandle = 3;
    pub const RAW_TEXT: ComponentHandle = 4;
    pub const IMAGE: ComponentHandle = 5;
}

/// Registers every built-in descriptor. Call once during startup, before
/// the registry is sealed.
pub fn install_defaults(
    registry: &mut ComponentDescriptorRegistry,
) -> Result<(), RegistryError> {
    registry.register(descriptor::<Root>())?;
    registry.register(descriptor::<View>())?;
    registry.register(descriptor::<Text>())?;
    registry.register(descriptor::<RawText>())?;
    registry.register(descriptor::<Image>())?;
    log::debug!("installed {} built-in component descriptors", registry.len());
    Ok(())
}

/// A fresh registry with the built-in set installed.
pub fn default_registry() -> Result<ComponentDescriptorRegistry, RegistryError> {
    let mut registry = ComponentDescriptorRegistry::new();
    install_defaults(&mut registry)?;
    Ok(registry)
}

/// Colors arrive as raw numbers holding packed ARGB. Anything outside the
/// u32 range (negative, NaN, too large) is rejected rather than truncated.
pub(crate) fn color_prop(raw: &RawProps, name: &str) -> Result<Option<u32>, PropsError> {
    match raw.number(name)? {
        None => Ok(None),
        Some(value) if value >= 0.0 && value <= u32::MAX as f64 => Ok(Some(value as u32)),
        Some(_) => Err(PropsError::InvalidProp {
            name: name.to_owned(),
            expected: "packed ARGB color",
            got: "number",
        }),
    }
}

/// Merge step for an optional color: an explicitly null entry resets the
/// prop to `None`, an absent entry keeps the base value.
pub(crate) fn merge_color(
    raw: &RawProps,
    name: &str,
    base: Option<u32>,
) -> Result<Option<u32>, PropsError> {
    if raw.is_null(name) {
        return Ok(None);
    }
    Ok(color_prop(raw, name)?.or(base))
}

/// Merge step for an optional number, with the same null-resets semantics
/// as [`merge_color`].
pub(crate) fn merge_optional_number(
    raw: &RawProps,
    name: &str,
    base: Option<f64>,
) -> Result<Option<f64>, PropsError> {
    if raw.is_null(name) {
        return Ok(None);
    }
    Ok(raw.number(name)?.or(base))
}
