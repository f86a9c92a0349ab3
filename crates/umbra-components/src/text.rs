use std::any::Any;

use umbra_core::{Component, ComponentHandle, ComponentName, Props, PropsError, RawProps};

use crate::{handles, merge_color, merge_optional_number};

/// Props for the styled text container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProps {
    pub text: String,
    pub font_size: Option<f64>,
    pub color: Option<u32>,
}

impl Props for TextProps {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct Text;

impl Component for Text {
    type Props = TextProps;

    fn component_handle() -> ComponentHandle {
        handles::TEXT
    }

    fn component_name() -> ComponentName {
        "Text"
    }

    fn create_props(raw: &RawProps) -> Result<TextProps, PropsError> {
        Self::update_props(&TextProps::default(), raw)
    }

    fn update_props(base: &TextProps, raw: &RawProps) -> Result<TextProps, PropsError> {
        Ok(TextProps {
            text: match raw.string("text")? {
                Some(text) => text.to_owned(),
                None => base.text.clone(),
            },
            font_size: merge_optional_number(raw, "fontSize", base.font_size)?,
            color: merge_color(raw, "color", base.color)?,
        })
    }
}

/// Props for the leaf text run inside a `Text` container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTextProps {
    pub text: String,
}

impl Props for RawTextProps {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Leaf element: raw character data, no children ever.
pub struct RawText;

impl Component for RawText {
    type Props = RawTextProps;

    fn component_handle() -> ComponentHandle {
        handles::RAW_TEXT
    }

    fn component_name() -> ComponentName {
        "RawText"
    }

    fn create_props(raw: &RawProps) -> Result<RawTextProps, PropsError> {
        Ok(RawTextProps {
            text: raw.string("text")?.unwrap_or_default().to_owned(),
        })
    }

    fn update_props(base: &RawTextProps, raw: &RawProps) -> Result<RawTextProps, PropsError> {
        Ok(RawTextProps {
            text: match raw.string("text")? {
                Some(text) => text.to_owned(),
                None => base.text.clone(),
            },
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
    fn text_tolerates_an_empty_bag() {
        let props = Text::create_props(&RawProps::new()).unwrap();
        assert_eq!(props.text, "");
        assert_eq!(props.font_size, None);
    }

    #[test]
    fn update_keeps_text_when_only_styling_changes() {
        let base = Text::create_props(&raw_props! { "text" => "hi" }).unwrap();
        let updated = Text::update_props(&base, &raw_props! { "fontSize" => 16.0 }).unwrap();
        assert_eq!(updated.text, "hi");
        assert_eq!(updated.font_size, Some(16.0));
    }

    #[test]
    fn explicit_null_clears_font_size() {
        let base = Text::create_props(&raw_props! { "text" => "hi", "fontSize" => 16.0 }).unwrap();
        let updated =
            Text::update_props(&base, &raw_props! { "fontSize" => umbra_core::RawValue::Null })
                .unwrap();
        assert_eq!(updated.font_size, None);
        assert_eq!(updated.text, "hi");
    }

    #[test]
    fn raw_text_parses_its_run() {
        let props = RawText::create_props(&raw_props! { "text" => "chunk" }).unwrap();
        assert_eq!(props.text, "chunk");
    }
}
