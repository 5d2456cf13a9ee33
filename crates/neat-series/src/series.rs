use std::fmt;

use crate::error::{CleanError, Result};

/// A single index entry: either an integer position/key or a string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum IndexLabel {
    Int(i64),
    Str(String),
}

impl fmt::Display for IndexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexLabel::Int(i) => write!(f, "{}", i),
            IndexLabel::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for IndexLabel {
    fn from(value: i64) -> Self {
        IndexLabel::Int(value)
    }
}

impl From<&str> for IndexLabel {
    fn from(value: &str) -> Self {
        IndexLabel::Str(value.to_string())
    }
}

impl From<String> for IndexLabel {
    fn from(value: String) -> Self {
        IndexLabel::Str(value)
    }
}

/// Ordered, indexed column of values.
///
/// Text columns are `Series<Option<String>>`; `None` marks a missing element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series<T> {
    name: Option<String>,
    index: Vec<IndexLabel>,
    values: Vec<T>,
}

impl<T> Series<T> {
    /// Build a series with a positional index `0..n`.
    pub fn new(values: Vec<T>) -> Self {
        let index = (0..values.len() as i64).map(IndexLabel::Int).collect();
        Self {
            name: None,
            index,
            values,
        }
    }

    /// Build a series with an explicit index. Lengths must match.
    pub fn with_index(index: Vec<IndexLabel>, values: Vec<T>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(CleanError::IndexLength {
                index: index.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            name: None,
            index,
            values,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index(&self) -> &[IndexLabel] {
        &self.index
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Look up an element by index label. With duplicate labels the first wins.
    pub fn get(&self, label: &IndexLabel) -> Option<&T> {
        self.index
            .iter()
            .position(|l| l == label)
            .map(|pos| &self.values[pos])
    }

    /// Element at a position, ignoring the index labels.
    pub fn iloc(&self, position: usize) -> Option<&T> {
        self.values.get(position)
    }

    /// Element-wise apply that keeps name and index.
    pub fn map<U, F>(&self, mut f: F) -> Series<U>
    where
        F: FnMut(&T) -> U,
    {
        Series {
            name: self.name.clone(),
            index: self.index.clone(),
            values: self.values.iter().map(&mut f).collect(),
        }
    }

    /// Fallible element-wise apply in index order.
    ///
    /// `f` receives the element position; the first error aborts the whole call.
    pub fn try_map<U, F>(&self, mut f: F) -> Result<Series<U>>
    where
        F: FnMut(usize, &T) -> Result<U>,
    {
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(pos, v)| f(pos, v))
            .collect::<Result<Vec<U>>>()?;
        Ok(Series {
            name: self.name.clone(),
            index: self.index.clone(),
            values,
        })
    }
}

impl Series<Option<String>> {
    /// Text series from a list of strings, none of them missing.
    pub fn from_strs<S: AsRef<str>>(values: &[S]) -> Self {
        Series::new(
            values
                .iter()
                .map(|s| Some(s.as_ref().to_string()))
                .collect(),
        )
    }

    /// Element-wise apply over text elements. A missing element yields `InputType`.
    pub(crate) fn try_map_text<U, F>(&self, mut f: F) -> Result<Series<U>>
    where
        F: FnMut(usize, &str) -> Result<U>,
    {
        self.try_map(|pos, v| match v {
            Some(text) => f(pos, text),
            None => {
                tracing::debug!(position = pos, "missing element in text series");
                Err(CleanError::InputType { position: pos })
            }
        })
    }
}

impl<T> From<Vec<T>> for Series<T> {
    fn from(values: Vec<T>) -> Self {
        Series::new(values)
    }
}
