use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Resolved, typed, immutable configuration data for one node.
///
/// One concrete props type exists per component type; the descriptor for
/// that type is the only code that constructs or reads it concretely.
/// Everything else holds props behind [`SharedProps`] and never mutates
/// them in place.
pub trait Props: Any + fmt::Debug + Send + Sync {
    /// For descriptor-side downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Shared, immutable typed props. Owned jointly by every node version that
/// carries them.
pub type SharedProps = Arc<dyn Props>;

/// A descriptor rejected a raw property bag it cannot interpret.
///
/// Recoverable: the single create/update request fails and no existing
/// tree is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropsError {
    MissingProp {
        name: String,
    },
    InvalidProp {
        name: String,
        expected: &'static str,
        got: &'static str,
    },
}

impl fmt::Display for PropsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropsError::MissingProp { name } => {
                write!(f, "required prop `{name}` is missing")
            }
            PropsError::InvalidProp {
                name,
                expected,
                got,
            } => {
                write!(f, "prop `{name}` has type {got}; expected {expected}")
            }
        }
    }
}

impl std::error::Error for PropsError {}
