use std::ops::{Range, RangeInclusive};

use crate::RangeAddMax;
use crate::error::Result;
use crate::util::{NEG_INF, check_range};

/// Dense array that applies every add index by index.
///
/// Linear per operation; kept as the reference answer for tests and as the
/// baseline in benchmarks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NaiveRangeAddMax {
    lo: i64,
    values: Vec<i64>,
}

impl NaiveRangeAddMax {
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    fn slots(&self, range: &RangeInclusive<i64>) -> Range<usize> {
        let start = range.start().abs_diff(self.lo) as usize;
        let end = range.end().abs_diff(self.lo) as usize + 1;
        start..end
    }
}

impl RangeAddMax for NaiveRangeAddMax {
    fn new(lo: i64, hi: i64) -> Self {
        assert!(lo <= hi, "empty index range: lo = {lo}, hi = {hi}");
        let len = hi.abs_diff(lo) as usize + 1;
        Self {
            lo,
            values: vec![0; len],
        }
    }

    fn bounds(&self) -> RangeInclusive<i64> {
        self.lo..=self.lo + (self.values.len() - 1) as i64
    }

    fn update(&mut self, range: RangeInclusive<i64>, delta: i64) -> Result<()> {
        check_range(&range, &self.bounds())?;
        let slots = self.slots(&range);
        for value in &mut self.values[slots] {
            *value += delta;
        }
        Ok(())
    }

    fn query(&mut self, range: RangeInclusive<i64>) -> Result<i64> {
        check_range(&range, &self.bounds())?;
        let slots = self.slots(&range);
        Ok(self.values[slots].iter().copied().max().unwrap_or(NEG_INF))
    }

    fn query_all(&mut self) -> i64 {
        self.values.iter().copied().max().unwrap_or(NEG_INF)
    }
}
