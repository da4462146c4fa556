use std::fmt;

pub use crate::types::{Label, Value};

/// Canonical labeled measurement consumed by the chain builder.
///
/// The value is the sort key; the label is satellite data carried through
/// sorting unchanged. Records have no identity beyond their content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Display label (e.g. a country name).
    pub label: Label,
    /// Sort key; chains order descending by this value.
    pub value: Value,
}

impl Record {
    /// Builds a record from a label and its value.
    pub fn new(label: impl Into<Label>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\", {})", self.label, self.value)
    }
}
