use serde_json::Value;

use crate::core::errors::{AppError, AppResult};

/// One decoded catalog response. Always a JSON object at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    value: Value,
}

impl Document {
    pub fn from_value(value: Value) -> Option<Self> {
        value.is_object().then_some(Self { value })
    }

    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Value>(bytes)
            .ok()
            .and_then(Self::from_value)
    }

    pub fn root(&self) -> Node<'_> {
        Node { value: &self.value }
    }
}

/// Borrowed view into a document with fallible, typed accessors.
///
/// Paths are dot separated object keys, e.g. `"generation.name"`. A missing key or a value
/// of the wrong type turns into [`AppError::MalformedDocument`] naming the path.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    value: &'a Value,
}

impl<'a> Node<'a> {
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        path.split('.')
            .try_fold(self.value, |current, key| current.get(key))
    }

    pub fn str_field(&self, path: &str) -> AppResult<&'a str> {
        self.get(path)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::missing_field(path))
    }

    pub fn i64_field(&self, path: &str) -> AppResult<i64> {
        self.get(path)
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::missing_field(path))
    }

    /// Absent and `null` both read as `None`; a present non-integer is still an error.
    pub fn opt_i64_field(&self, path: &str) -> AppResult<Option<i64>> {
        match self.get(path) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| AppError::missing_field(path)),
        }
    }

    pub fn bool_field(&self, path: &str) -> AppResult<bool> {
        self.get(path)
            .and_then(Value::as_bool)
            .ok_or_else(|| AppError::missing_field(path))
    }

    pub fn items(&self, path: &str) -> AppResult<Vec<Node<'a>>> {
        self.get(path)
            .and_then(Value::as_array)
            .map(|items| items.iter().map(|value| Node { value }).collect())
            .ok_or_else(|| AppError::missing_field(path))
    }
}
