use indexmap::IndexMap;

use crate::props::PropsError;

/// A variant value inside a raw property bag.
///
/// Produced by an external collaborator (a UI description protocol, a test
/// fixture); this crate never parses the wire format behind it. Only a
/// descriptor's prop interpretation looks at individual values.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<RawValue>),
    Map(RawProps),
    /// Opaque external handle (image source token, event emitter id, …).
    Handle(u64),
}

impl RawValue {
    fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Boolean(_) => "boolean",
            RawValue::Number(_) => "number",
            RawValue::String(_) => "string",
            RawValue::Array(_) => "array",
            RawValue::Map(_) => "map",
            RawValue::Handle(_) => "handle",
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Boolean(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(value: Vec<RawValue>) -> Self {
        RawValue::Array(value)
    }
}

impl From<RawProps> for RawValue {
    fn from(value: RawProps) -> Self {
        RawValue::Map(value)
    }
}

/// An opaque, type-erased mapping of property names to [`RawValue`]s.
///
/// Insertion order is preserved so diagnostics and debug output stay
/// deterministic. A `Null` value is treated as "absent" by every typed
/// accessor, which lets callers reset a property back to its default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProps {
    entries: IndexMap<String, RawValue>,
}

impl RawProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// True for an explicitly null entry, as opposed to an absent one.
    /// Typed accessors read both as "no value"; prop interpreters that
    /// distinguish "leave unchanged" from "reset" check this first.
    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(RawValue::Null))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the string value under `name`, `Ok(None)` when absent or null.
    pub fn string(&self, name: &str) -> Result<Option<&str>, PropsError> {
        match self.present(name) {
            None => Ok(None),
            Some(RawValue::String(value)) => Ok(Some(value)),
            Some(other) => Err(self.invalid(name, "string", other)),
        }
    }

    pub fn number(&self, name: &str) -> Result<Option<f64>, PropsError> {
        match self.present(name) {
            None => Ok(None),
            Some(RawValue::Number(value)) => Ok(Some(*value)),
            Some(other) => Err(self.invalid(name, "number", other)),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<Option<bool>, PropsError> {
        match self.present(name) {
            None => Ok(None),
            Some(RawValue::Boolean(value)) => Ok(Some(*value)),
            Some(other) => Err(self.invalid(name, "boolean", other)),
        }
    }

    pub fn handle(&self, name: &str) -> Result<Option<u64>, PropsError> {
        match self.present(name) {
            None => Ok(None),
            Some(RawValue::Handle(value)) => Ok(Some(*value)),
            Some(other) => Err(self.invalid(name, "handle", other)),
        }
    }

    /// Like [`RawProps::string`], but absence is an error. Used by component
    /// types whose prop policy rejects partial bags.
    pub fn required_string(&self, name: &str) -> Result<&str, PropsError> {
        self.string(name)?.ok_or_else(|| PropsError::MissingProp {
            name: name.to_owned(),
        })
    }

    pub fn required_number(&self, name: &str) -> Result<f64, PropsError> {
        self.number(name)?.ok_or_else(|| PropsError::MissingProp {
            name: name.to_owned(),
        })
    }

    fn present(&self, name: &str) -> Option<&RawValue> {
        match self.entries.get(name) {
            Some(RawValue::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    fn invalid(&self, name: &str, expected: &'static str, got: &RawValue) -> PropsError {
        PropsError::InvalidProp {
            name: name.to_owned(),
            expected,
            got: got.kind(),
        }
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawProps {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = RawProps::new();
        for (name, value) in iter {
            bag.insert(name, value);
        }
        bag
    }
}

/// Builds a [`RawProps`] bag from `name => value` pairs.
#[macro_export]
macro_rules! raw_props {
    () => {
        $crate::RawProps::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut bag = $crate::RawProps::new();
        $(bag.insert($name, $value);)+
        bag
    }};
}
