use std::ops::RangeInclusive;

use crate::util::{NEG_INF, covers, disjoint, midpoint};

/// One segment `[first, last]` of the index range.
///
/// `value + lazy` is the maximum over the segment. `lazy` is an add that the
/// children have not seen yet; it is always zero on leaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) first: i64,
    pub(crate) last: i64,
    pub(crate) value: i64,
    pub(crate) lazy: i64,
    pub(crate) children: Option<Box<Children>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Children {
    pub(crate) left: Node,
    pub(crate) right: Node,
}

impl Node {
    pub(crate) fn build(first: i64, last: i64) -> Self {
        let children = (first < last).then(|| {
            let mid = midpoint(first, last);
            Box::new(Children {
                left: Self::build(first, mid),
                right: Self::build(mid + 1, last),
            })
        });
        Self {
            first,
            last,
            value: 0,
            lazy: 0,
            children,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    #[inline]
    pub(crate) fn total(&self) -> i64 {
        self.value + self.lazy
    }

    fn apply(&mut self, delta: i64) {
        if self.is_leaf() {
            self.value += delta;
        } else {
            self.lazy += delta;
        }
    }

    fn push(&mut self) {
        if self.lazy == 0 {
            return;
        }
        if let Some(children) = self.children.as_deref_mut() {
            children.left.apply(self.lazy);
            children.right.apply(self.lazy);
        }
        self.value += self.lazy;
        self.lazy = 0;
    }

    fn pull(&mut self) {
        if let Some(children) = self.children.as_deref() {
            self.value = children.left.total().max(children.right.total());
        }
    }

    pub(crate) fn update(&mut self, range: &RangeInclusive<i64>, delta: i64) {
        if disjoint(self.first, self.last, range) {
            return;
        }
        // a non-disjoint leaf is always covered
        if covers(range, self.first, self.last) {
            self.apply(delta);
            return;
        }
        self.push();
        if let Some(children) = self.children.as_deref_mut() {
            children.left.update(range, delta);
            children.right.update(range, delta);
        }
        self.pull();
    }

    pub(crate) fn query(&mut self, range: &RangeInclusive<i64>) -> i64 {
        if disjoint(self.first, self.last, range) {
            return NEG_INF;
        }
        if covers(range, self.first, self.last) {
            return self.total();
        }
        self.push();
        let Some(children) = self.children.as_deref_mut() else {
            return self.value;
        };
        let best = children.left.query(range).max(children.right.query(range));
        // the answer may only span part of this node, so refresh from both children
        self.pull();
        best
    }
}
