use std::any::Any;

use umbra_core::{Component, ComponentHandle, ComponentName, Props, PropsError, RawProps};

use crate::handles;

/// Props for a surface root. The root itself carries no configuration;
/// sizing comes from the host surface, which is a layout concern outside
/// this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootProps;

impl Props for RootProps {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The container at the top of each shadow tree; one per `root_tag`.
pub struct Root;

impl Component for Root {
    type Props = RootProps;

    fn component_handle() -> ComponentHandle {
        handles::ROOT
    }

    fn component_name() -> ComponentName {
        "Root"
    }

    fn create_props(_raw: &RawProps) -> Result<RootProps, PropsError> {
        Ok(RootProps)
    }

    fn update_props(_base: &RootProps, _raw: &RawProps) -> Result<RootProps, PropsError> {
        Ok(RootProps)
    }
}
