//! Collect the distinct values of one filename component across a list of
//! filenames.

use crate::field::FieldSelector;
use crate::scheme::{IlluminaFilename, ParseError};
use fxhash::FxHashSet;
use itertools::Itertools;
use log::debug;

/// Delimiter placed between values in the joined output.
pub const VALUE_SEPARATOR: &str = " ";

/// An insertion-ordered set of distinct, non-empty strings.
#[derive(Clone, Debug, Default)]
pub struct FieldValueSet<'a> {
    seen: FxHashSet<&'a str>,
    values: Vec<&'a str>,
}

impl<'a> FieldValueSet<'a> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` unless it is empty or already present. Returns true if
    /// the value was added.
    pub fn insert(&mut self, value: &'a str) -> bool {
        if value.is_empty() || !self.seen.insert(value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Whether `value` is present.
    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no value has been added.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.values.iter().copied()
    }

    /// Join the values with single spaces, or `None` if there are none.
    pub fn into_joined(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.values.iter().join(VALUE_SEPARATOR))
        }
    }
}

impl<'a> Extend<&'a str> for FieldValueSet<'a> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> FromIterator<&'a str> for FieldValueSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = FieldValueSet::new();
        set.extend(iter);
        set
    }
}

/// Collect the distinct values of `field` from the whitespace-separated
/// filenames in `input`, in order of first occurrence, joined by single spaces.
///
/// Filenames that do not parse, and filenames whose `field` is empty, are
/// skipped. Returns `None` when nothing was collected.
pub fn collect_field(input: &str, field: FieldSelector) -> Option<String> {
    collect_field_with(input, field, |token, err| {
        debug!("skipping {token:?} while collecting {field}: {err}");
    })
}

/// Same as [`collect_field`], calling `on_reject` with every filename that
/// failed to parse.
pub fn collect_field_with<F>(input: &str, field: FieldSelector, mut on_reject: F) -> Option<String>
where
    F: FnMut(&str, &ParseError),
{
    let mut values = FieldValueSet::new();
    for token in input.split_whitespace() {
        match IlluminaFilename::parse(token) {
            Ok(name) => {
                values.insert(name.field(field));
            }
            Err(err) => on_reject(token, &err),
        }
    }
    values.into_joined()
}
