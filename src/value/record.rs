//! The insertion ordered mapping type [`Record`].
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A key/value mapping that preserves insertion order.
///
/// Keys are full [`Value`]s, compared with their intrinsic equality.
/// Inserting an existing key replaces its value in place, so the position a
/// key first appeared at is the position it keeps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    inner: Vec<(Value, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Insert a key/value pair, returning the value previously held under
    /// an equal key, if any.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.inner.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.inner.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.inner.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &Value) -> Option<&mut Value> {
        self.inner
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.inner.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.inner.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.iter().map(|(_, v)| v)
    }
}

impl FromIterator<(Value, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        let mut record = Record::new();
        record.extend(iter);
        record
    }
}

impl Extend<(Value, Value)> for Record {
    fn extend<T: IntoIterator<Item = (Value, Value)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

pub struct IntoIter {
    iter: std::vec::IntoIter<(Value, Value)>,
}

impl Iterator for IntoIter {
    type Item = (Value, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl FusedIterator for IntoIter {}

impl IntoIterator for Record {
    type Item = (Value, Value);

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.inner.into_iter(),
        }
    }
}

pub struct Iter<'a> {
    iter: std::slice::Iter<'a, (Value, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, val): &(_, _)| (key, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(key, val): &(_, _)| (key, val))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a Value, &'a Value);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            iter: self.inner.iter(),
        }
    }
}

/// Builds a [`Record`] from `key => value` pairs. Both sides take anything
/// convertible into a [`Value`].
///
/// ```rust
/// use value_utils::{record, Value};
///
/// let record = record! {
///     "key1" => "value1",
///     "key2" => 20i64,
/// };
/// assert_eq!(record.get(&Value::string("key2")), Some(&Value::Long(20)));
/// ```
#[macro_export]
macro_rules! record {
    {$($key:expr => $val:expr),+ $(,)?} => {{
        let mut record = $crate::Record::new();
        $(record.insert($crate::Value::from($key), $crate::Value::from($val));)+
        record
    }};
    {} => {
        $crate::Record::new()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let record = record! {
            "b" => 1,
            "a" => 2,
            "c" => 3,
        };
        let keys: Vec<_> = record.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![Value::string("b"), Value::string("a"), Value::string("c")]
        );
    }

    #[test]
    fn insert_replaces_in_place_and_returns_the_displaced_value() {
        let mut record = record! { "a" => 1, "b" => 2 };
        let displaced = record.insert("a", 10);
        assert_eq!(displaced, Some(Value::Int(1)));
        assert_eq!(record.len(), 2);
        // "a" kept its original position
        assert_eq!(record.keys().next(), Some(&Value::string("a")));
        assert_eq!(record.get(&Value::string("a")), Some(&Value::Int(10)));
    }

    #[test]
    fn keys_may_be_any_value() {
        let mut record = Record::new();
        record.insert(Value::Int(1), "one");
        record.insert(Value::boolean(true), "yes");
        assert!(record.contains_key(&Value::Int(1)));
        assert_eq!(
            record.get(&Value::boolean(true)),
            Some(&Value::string("yes"))
        );
        assert_eq!(record.get(&Value::Int(2)), None);
    }

    #[test]
    fn iterates_pairs_in_order() {
        let record = record! { "a" => 1, "b" => 2 };
        let pairs: Vec<_> = record.into_iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Value::string("a"), Value::Int(1)),
                (Value::string("b"), Value::Int(2)),
            ]
        );
    }
}
