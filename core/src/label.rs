//! Label values and item references.
//!
//! Labels are the atomic values a category is made of. Gridlock supports
//! integer labels (positions, ages, house numbers) and text labels (names,
//! colors). Labels are unique within a category but may repeat between
//! categories; a repeated label must then be referenced together with its
//! category name.

use std::fmt;

/// A label within a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// 64-bit signed integer label.
    Int(i64),
    /// UTF-8 text label.
    Text(String),
}

impl Label {
    /// Returns true if this is an integer label.
    pub fn is_int(&self) -> bool {
        matches!(self, Label::Int(_))
    }

    /// Get as integer if this is an Int label.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Label::Int(i) => Some(*i),
            Label::Text(_) => None,
        }
    }

    /// Get as string slice if this is a Text label.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Label::Int(_) => None,
            Label::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(i) => write!(f, "{}", i),
            Label::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}

impl From<i32> for Label {
    fn from(v: i32) -> Self {
        Label::Int(v as i64)
    }
}

impl From<&str> for Label {
    fn from(v: &str) -> Self {
        Label::Text(v.to_string())
    }
}

impl From<String> for Label {
    fn from(v: String) -> Self {
        Label::Text(v)
    }
}

/// A caller-facing reference to an item.
///
/// A bare label resolves only if it occurs in exactly one category; labels
/// repeated between categories must be qualified with the category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    /// A label looked up across all categories.
    Bare(Label),
    /// A (category name, label) pair.
    Qualified(String, Label),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Bare(label) => write!(f, "{}", label),
            ItemRef::Qualified(cat, label) => write!(f, "({}, {})", cat, label),
        }
    }
}

impl From<Label> for ItemRef {
    fn from(label: Label) -> Self {
        ItemRef::Bare(label)
    }
}

impl From<i64> for ItemRef {
    fn from(v: i64) -> Self {
        ItemRef::Bare(Label::Int(v))
    }
}

impl From<i32> for ItemRef {
    fn from(v: i32) -> Self {
        ItemRef::Bare(Label::Int(v as i64))
    }
}

impl From<&str> for ItemRef {
    fn from(v: &str) -> Self {
        ItemRef::Bare(Label::Text(v.to_string()))
    }
}

impl From<String> for ItemRef {
    fn from(v: String) -> Self {
        ItemRef::Bare(Label::Text(v))
    }
}

impl<L: Into<Label>> From<(&str, L)> for ItemRef {
    fn from((category, label): (&str, L)) -> Self {
        ItemRef::Qualified(category.to_string(), label.into())
    }
}
