use std::any::Any;

use umbra_core::{Component, ComponentHandle, ComponentName, Props, PropsError, RawProps};

use crate::{handles, merge_color, merge_optional_number};

/// Props for the generic container element. Every key is optional; absent
/// keys fall back to the defaults below. On update, absent keys keep the
/// prior value and an explicit null clears an `Option` prop back to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewProps {
    pub opacity: f64,
    pub background_color: Option<u32>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub flex_grow: f64,
}

impl Default for ViewProps {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            background_color: None,
            width: None,
            height: None,
            flex_grow: 0.0,
        }
    }
}

impl Props for ViewProps {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct View;

impl Component for View {
    type Props = ViewProps;

    fn component_handle() -> ComponentHandle {
        handles::VIEW
    }

    fn component_name() -> ComponentName {
        "View"
    }

    fn create_props(raw: &RawProps) -> Result<ViewProps, PropsError> {
        Self::update_props(&ViewProps::default(), raw)
    }

    fn update_props(base: &ViewProps, raw: &RawProps) -> Result<ViewProps, PropsError> {
        Ok(ViewProps {
            opacity: raw.number("opacity")?.unwrap_or(base.opacity),
            background_color: merge_color(raw, "backgroundColor", base.background_color)?,
            width: merge_optional_number(raw, "width", base.width)?,
            height: merge_optional_number(raw, "height", base.height)?,
            flex_grow: raw.number("flexGrow")?.unwrap_or(base.flex_grow),
        })
    }
}
