use std::any::Any;

use umbra_core::{Component, ComponentHandle, ComponentName, Props, PropsError, RawProps};

use crate::{color_prop, handles, merge_color};

/// Props for the image element. `source` is required: an image without one
/// cannot be resolved by any renderer, so the bag is rejected outright.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageProps {
    pub source: String,
    pub tint_color: Option<u32>,
}

impl Props for ImageProps {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct Image;

impl Component for Image {
    type Props = ImageProps;

    fn component_handle() -> ComponentHandle {
        handles::IMAGE
    }

    fn component_name() -> ComponentName {
        "Image"
    }

    fn create_props(raw: &RawProps) -> Result<ImageProps, PropsError> {
        Ok(ImageProps {
            source: raw.required_string("source")?.to_owned(),
            tint_color: color_prop(raw, "tintColor")?,
        })
    }

    fn update_props(base: &ImageProps, raw: &RawProps) -> Result<ImageProps, PropsError> {
        Ok(ImageProps {
            source: match raw.string("source")? {
                Some(source) => source.to_owned(),
                None => base.source.clone(),
            },
            tint_color: merge_color(raw, "tintColor", base.tint_color)?,
        })
    }

    fn children_allowed() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::raw_props;

    #[test]
    fn missing_source_is_rejected() {
        let err = Image::create_props(&RawProps::new()).unwrap_err();
        assert_eq!(
            err,
            PropsError::MissingProp {
                name: "source".to_owned(),
            }
        );
    }

    #[test]
    fn update_keeps_source_unless_overridden() {
        let base = Image::create_props(&raw_props! { "source" => "a.png" }).unwrap();
        let updated =
            Image::update_props(&base, &raw_props! { "tintColor" => 0xff000000u32 as i64 })
                .unwrap();
        assert_eq!(updated.source, "a.png");
        assert_eq!(updated.tint_color, Some(0xff000000));
    }
}
