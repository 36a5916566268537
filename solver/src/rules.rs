//! Gap arguments for ordering rules.

use std::ops::Bound;

use gridlock_constraint::BoundKind;

/// How far apart two items must sit in the ordering category.
///
/// `Any` and `Within` compare by the category's declared label order and
/// work for any ordered labels; the numeric variants subtract label values
/// and require integer labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Any positive distance in declaration order.
    Any,
    /// At most this many steps of declaration order.
    Within(i64),
    /// Numeric difference of exactly this much.
    Exactly(i64),
    /// Numeric difference of at least this much.
    AtLeast(i64),
    /// Numeric difference within this inclusive range.
    Between(i64, i64),
}

impl Gap {
    pub(crate) fn bound(self) -> BoundKind {
        match self {
            Gap::Any => BoundKind::Banded { width: None },
            Gap::Within(w) => BoundKind::Banded { width: Some(w) },
            Gap::Exactly(k) => BoundKind::Exact(k),
            Gap::AtLeast(k) => BoundKind::Range {
                lower: Bound::Included(k),
                upper: Bound::Unbounded,
            },
            Gap::Between(lo, hi) => BoundKind::Range {
                lower: Bound::Included(lo),
                upper: Bound::Included(hi),
            },
        }
    }

    /// Whether this gap subtracts label values (as opposed to comparing
    /// declaration-order ranks).
    pub(crate) fn is_numeric(self) -> bool {
        !matches!(self, Gap::Any | Gap::Within(_))
    }
}
