use std::collections::BTreeSet;

/// Digits removed by default, in the order the exclusion list is matched against.
pub const DIGITS: &str = "0123456789";

/// ASCII punctuation: every printable, non-alphanumeric, non-space ASCII character.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A caller-supplied argument that is either a single value or a list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> OneOrMany<U> {
        match self {
            OneOrMany::One(v) => OneOrMany::One(f(v)),
            OneOrMany::Many(list) => OneOrMany::Many(list.into_iter().map(f).collect()),
        }
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            OneOrMany::One(v) => vec![v].into_iter(),
            OneOrMany::Many(list) => list.into_iter(),
        }
    }
}

/// Options for stripping digits and punctuation.
///
/// `keep` excludes characters from the punctuation part of the removal set;
/// `keep_digits` holds the decimal rendering of the digits to exclude from the
/// digit part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOptions {
    pub remove_punctuation: bool,
    pub keep: Vec<char>,
    pub keep_digits: Vec<String>,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            remove_punctuation: true,
            keep: Vec::new(),
            keep_digits: Vec::new(),
        }
    }
}

impl StripOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove_punctuation(mut self, yes: bool) -> Self {
        self.remove_punctuation = yes;
        self
    }

    /// Characters to keep. Strings contribute each of their characters.
    pub fn keep<I, S>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for s in chars {
            self.keep.extend(s.as_ref().chars());
        }
        self
    }

    /// Digits to keep. Values are matched by their decimal rendering, so any
    /// integer type (or an already stringified big integer) works.
    pub fn keep_digits<I, D>(mut self, digits: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: ToString,
    {
        self.keep_digits.extend(digits.into_iter().map(|d| d.to_string()));
        self
    }

    /// Resolve the options into the concrete set of characters to delete.
    pub fn removal_set(&self) -> RemovalSet {
        let punctuation: BTreeSet<char> = if self.remove_punctuation {
            PUNCTUATION
                .chars()
                .filter(|c| !self.keep.contains(c))
                .collect()
        } else {
            BTreeSet::new()
        };

        // Each value is matched against what is left of the digit list, so a
        // multi-digit value only counts when it is still a contiguous run.
        let mut digits = DIGITS.to_string();
        for value in &self.keep_digits {
            digits = digits.replace(value.as_str(), "");
        }

        let mut chars = punctuation;
        chars.extend(digits.chars());
        RemovalSet { chars }
    }
}

/// Final set of characters deleted from every element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalSet {
    chars: BTreeSet<char>,
}

impl RemovalSet {
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Delete every character of the set from `text`, keeping order and case.
    pub fn strip(&self, text: &str) -> String {
        text.chars().filter(|c| !self.contains(*c)).collect()
    }
}
