use thiserror::Error;

use crate::value::Value;

/// Error produced by the checked accessors on [`Value`].
///
/// None of the rendering or comparison operations of this crate can fail;
/// only asking a value for a type it does not hold does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("expected a value of type `{expected}`, found `{actual}`")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl ValueError {
    pub(crate) fn type_mismatch(expected: &'static str, actual: &Value) -> Self {
        ValueError::TypeMismatch {
            expected,
            actual: actual.type_name(),
        }
    }
}
