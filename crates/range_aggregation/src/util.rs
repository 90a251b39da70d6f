use std::ops::RangeInclusive;

use crate::error::{RangeError, Result};

/// Identity of the max reduction; stands in for subtrees disjoint from a query.
pub(crate) const NEG_INF: i64 = i64::MIN;

#[inline(always)]
pub(crate) fn disjoint(first: i64, last: i64, range: &RangeInclusive<i64>) -> bool {
    last < *range.start() || first > *range.end()
}

#[inline(always)]
pub(crate) fn covers(range: &RangeInclusive<i64>, first: i64, last: i64) -> bool {
    *range.start() <= first && last <= *range.end()
}

#[inline(always)]
pub(crate) fn midpoint(first: i64, last: i64) -> i64 {
    debug_assert!(first < last);
    first + (last - first) / 2
}

pub(crate) fn check_range(
    requested: &RangeInclusive<i64>,
    valid: &RangeInclusive<i64>,
) -> Result<()> {
    if requested.is_empty() || !covers(valid, *requested.start(), *requested.end()) {
        tracing::debug!(?requested, ?valid, "refusing out-of-bounds range");
        return Err(RangeError::OutOfBounds {
            requested: requested.clone(),
            valid: valid.clone(),
        });
    }
    Ok(())
}
