use std::io;
use std::ops::RangeInclusive;

use crate::RangeAddMax;
use crate::dot::Dot;
use crate::error::Result;
use crate::node::Node;
use crate::util::check_range;

/// Range add / range max over a fixed index range `[lo, hi]`.
///
/// Every node is allocated up front; updates are deferred at the highest node
/// they fully cover and pushed down only when a later operation needs to split
/// that node. Queries push too, so both operations need `&mut self`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeAggregationTree {
    root: Node,
}

impl RangeAggregationTree {
    /// Builds a tree over `[lo, hi]` with every index at zero.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn build(lo: i64, hi: i64) -> Self {
        assert!(lo <= hi, "empty index range: lo = {lo}, hi = {hi}");
        let tree = Self {
            root: Node::build(lo, hi),
        };
        tracing::debug!(lo, hi, nodes = tree.node_count(), "built range aggregation tree");
        tree
    }

    /// Number of indices covered.
    pub fn len(&self) -> u64 {
        self.root.last.abs_diff(self.root.first) + 1
    }

    /// A tree always covers at least one index.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn node_count(&self) -> u64 {
        2 * self.len() - 1
    }

    pub fn dot(&self) -> Dot<'_> {
        Dot { root: &self.root }
    }

    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }

    pub fn write_dot<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self.dot())
    }
}

impl RangeAddMax for RangeAggregationTree {
    fn new(lo: i64, hi: i64) -> Self {
        Self::build(lo, hi)
    }

    fn bounds(&self) -> RangeInclusive<i64> {
        self.root.first..=self.root.last
    }

    fn update(&mut self, range: RangeInclusive<i64>, delta: i64) -> Result<()> {
        check_range(&range, &self.bounds())?;
        tracing::trace!(?range, delta, "range update");
        self.root.update(&range, delta);
        Ok(())
    }

    fn query(&mut self, range: RangeInclusive<i64>) -> Result<i64> {
        check_range(&range, &self.bounds())?;
        let max = self.root.query(&range);
        tracing::trace!(?range, max, "range query");
        Ok(max)
    }

    fn query_all(&mut self) -> i64 {
        self.root.total()
    }
}

#[cfg(test)]
mod tests {
    use super::RangeAggregationTree;
    use crate::{RangeAddMax, RangeError};

    #[test]
    fn sizes() {
        let tree = RangeAggregationTree::build(0, 10);
        assert_eq!(tree.len(), 11);
        assert_eq!(tree.node_count(), 21);
        assert_eq!(tree.bounds(), 0..=10);

        let tree = RangeAggregationTree::build(-4, -4);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    #[should_panic(expected = "empty index range")]
    fn reversed_bounds_panic() {
        RangeAggregationTree::build(5, 4);
    }

    #[test]
    fn refused_requests_leave_tree_untouched() {
        let mut tree = RangeAggregationTree::build(0, 10);
        tree.update(2..=7, 5).unwrap();
        let before = tree.clone();

        assert_eq!(
            tree.update(-1..=5, 3),
            Err(RangeError::OutOfBounds {
                requested: -1..=5,
                valid: 0..=10,
            })
        );
        assert!(tree.update(9..=11, 3).is_err());
        assert!(tree.query(3..=11).is_err());
        assert_eq!(tree, before);
    }

    #[test]
    fn query_all_sees_pending_root_add() {
        let mut tree = RangeAggregationTree::build(0, 10);
        tree.update(0..=10, 6).unwrap();
        assert_eq!(tree.query_all(), 6);
        tree.update_point(4, -10).unwrap();
        assert_eq!(tree.query_all(), 6);
        assert_eq!(tree.query_point(4).unwrap(), -4);
    }
}
