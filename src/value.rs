pub mod format;
pub mod record;

use std::any;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::value::record::Record;

/// The fundamental structured value of this crate. A `Value` is a tree of
/// the runtime categories the renderer in [`crate::to_string_of`] knows how
/// to display: scalars, strings, dates, paths, type descriptors, comparator
/// objects, lists, and insertion-ordered records.
///
/// Cyclic values are unrepresentable: a `Value` owns its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The absence of a value
    Nothing,
    /// A boolean value
    Bool(bool),
    /// A default-width integer
    Int(i32),
    /// A 64-bit integer, kept distinct from [`Value::Int`] so the two never
    /// render identically
    Long(i64),
    /// A single-precision float, kept distinct from [`Value::Double`]
    Float(f32),
    /// A double-precision float
    Double(f64),
    /// A string value
    String(String),
    /// A two-dimensional geometric size
    Dimension { width: i32, height: i32 },
    /// A file system path, rendered verbatim
    FilePath(PathBuf),
    /// A type descriptor: the fully qualified name of a type
    Type(String),
    /// A comparator-like callable, identified by its type name
    Comparator(String),
    /// A local date-time without offset
    Date(NaiveDateTime),
    /// An ordered sequence of values, arbitrarily nested
    List(Vec<Value>),
    /// An insertion-ordered key/value mapping
    Record(Record),
}

impl Value {
    pub fn nothing() -> Value {
        Value::Nothing
    }

    pub fn boolean(b: impl Into<bool>) -> Value {
        Value::Bool(b.into())
    }

    pub fn int(i: impl Into<i32>) -> Value {
        Value::Int(i.into())
    }

    pub fn long(i: impl Into<i64>) -> Value {
        Value::Long(i.into())
    }

    pub fn float(f: impl Into<f32>) -> Value {
        Value::Float(f.into())
    }

    pub fn double(f: impl Into<f64>) -> Value {
        Value::Double(f.into())
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    pub fn dimension(width: i32, height: i32) -> Value {
        Value::Dimension { width, height }
    }

    pub fn file_path(p: impl Into<PathBuf>) -> Value {
        Value::FilePath(p.into())
    }

    pub fn date(d: impl Into<NaiveDateTime>) -> Value {
        Value::Date(d.into())
    }

    pub fn list(items: impl IntoIterator<Item = impl Into<Value>>) -> Value {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// A descriptor for the type `T` itself, carrying its fully qualified
    /// name (e.g. `value_utils::value::record::Record`).
    pub fn type_of<T: ?Sized>() -> Value {
        Value::Type(any::type_name::<T>().to_string())
    }

    /// A value standing for the given comparator object. Only the type name
    /// is captured; closures keep the `{{closure}}` marker in theirs, which
    /// is how the renderer recognizes an anonymous comparator.
    pub fn comparator_of<C: ?Sized>(_comparator: &C) -> Value {
        Value::Comparator(any::type_name::<C>().to_string())
    }

    /// Get the name of the type of the value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nothing => "nothing",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Dimension { .. } => "dimension",
            Value::FilePath(_) => "file path",
            Value::Type(_) => "type",
            Value::Comparator(_) => "comparator",
            Value::Date(_) => "date",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Value::Nothing)
    }

    /// Returns true if the value is empty
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Nothing => true,
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Record(record) => record.is_empty(),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(ValueError::type_mismatch("boolean", other)),
        }
    }

    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(ValueError::type_mismatch("string", other)),
        }
    }

    /// Converts an integer value to an `i64`, widening if needed.
    pub fn as_i64(&self) -> Result<i64, ValueError> {
        match self {
            Value::Int(i) => Ok(i64::from(*i)),
            Value::Long(i) => Ok(*i),
            other => Err(ValueError::type_mismatch("long", other)),
        }
    }

    /// Converts a floating point value to an `f64`, widening if needed.
    pub fn as_f64(&self) -> Result<f64, ValueError> {
        match self {
            Value::Float(f) => Ok(f64::from(*f)),
            Value::Double(f) => Ok(*f),
            other => Err(ValueError::type_mismatch("double", other)),
        }
    }

    pub fn as_path(&self) -> Result<&Path, ValueError> {
        match self {
            Value::FilePath(p) => Ok(p),
            other => Err(ValueError::type_mismatch("file path", other)),
        }
    }

    pub fn as_list(&self) -> Result<&[Value], ValueError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(ValueError::type_mismatch("list", other)),
        }
    }

    pub fn as_record(&self) -> Result<&Record, ValueError> {
        match self {
            Value::Record(record) => Ok(record),
            other => Err(ValueError::type_mismatch("record", other)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Long(i)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Value {
        Value::Float(f)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Double(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<PathBuf> for Value {
    fn from(p: PathBuf) -> Value {
        Value::FilePath(p)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Value {
        Value::Date(d)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Value {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Value {
        Value::list(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Value {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Value {
        match value {
            Some(value) => value.into(),
            None => Value::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_the_held_value() {
        assert_eq!(Value::string("hi").as_str(), Ok("hi"));
        assert_eq!(Value::boolean(true).as_bool(), Ok(true));
        assert_eq!(Value::int(7).as_i64(), Ok(7));
        assert_eq!(Value::long(7).as_i64(), Ok(7));
        assert_eq!(Value::float(1.5).as_f64(), Ok(1.5));
        assert_eq!(Value::double(1.5).as_f64(), Ok(1.5));
    }

    #[test]
    fn accessors_report_the_actual_type_on_mismatch() {
        assert_eq!(
            Value::int(7).as_str(),
            Err(ValueError::TypeMismatch {
                expected: "string",
                actual: "integer",
            })
        );
        assert_eq!(
            Value::nothing().as_record(),
            Err(ValueError::TypeMismatch {
                expected: "record",
                actual: "nothing",
            })
        );
    }

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(Value::from(20), Value::Int(20));
        assert_eq!(Value::from(20i64), Value::Long(20));
        assert_eq!(Value::from(20.0f32), Value::Float(20.0));
        assert_eq!(Value::from(20.0f64), Value::Double(20.0));
        assert_eq!(Value::from(None::<i32>), Value::Nothing);
        assert_eq!(
            Value::from(vec!["s1", "s2"]),
            Value::List(vec![Value::string("s1"), Value::string("s2")])
        );
        assert_eq!(Value::from(["s1"]), Value::List(vec![Value::string("s1")]));
    }

    #[test]
    fn emptiness_covers_strings_lists_and_records() {
        assert!(Value::nothing().is_empty());
        assert!(Value::string("").is_empty());
        assert!(Value::list(Vec::<Value>::new()).is_empty());
        assert!(!Value::string("x").is_empty());
        assert!(!Value::int(0).is_empty());
    }
}
