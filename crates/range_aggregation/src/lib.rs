mod dot;
mod error;
mod naive;
mod node;
mod tree;
mod util;

use std::ops::RangeInclusive;

pub use dot::Dot;
pub use error::{RangeError, Result};
pub use naive::NaiveRangeAddMax;
pub use tree::RangeAggregationTree;

/// Range add / range max over a fixed integer index range.
///
/// - Ranges are inclusive: `first..=last`, and must lie inside [`bounds`](Self::bounds).
/// - Every index starts at zero.
/// - A range that is empty or escapes the bounds is refused with
///   [`RangeError::OutOfBounds`] and changes nothing.
/// - `query` takes `&mut self`: implementations may reorganise internal state while answering.
pub trait RangeAddMax: Sized {
    fn new(lo: i64, hi: i64) -> Self;
    fn bounds(&self) -> RangeInclusive<i64>;
    fn update(&mut self, range: RangeInclusive<i64>, delta: i64) -> Result<()>;
    fn query(&mut self, range: RangeInclusive<i64>) -> Result<i64>;

    /// Maximum over the whole index range.
    fn query_all(&mut self) -> i64;

    fn update_point(&mut self, index: i64, delta: i64) -> Result<()> {
        self.update(index..=index, delta)
    }

    fn query_point(&mut self, index: i64) -> Result<i64> {
        self.query(index..=index)
    }
}
