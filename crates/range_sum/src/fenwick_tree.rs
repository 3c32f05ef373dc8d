use crate::RangeSumError;
use crate::util::check_range;
use crate::util::check_size;
use crate::util::check_values;
use crate::util::filled;
use crate::util::lowbit;

/// Binary indexed tree over `size` values.
///
/// - Point updates are additive.
/// - Queries are inclusive on both ends and 0-indexed.
/// - Sums wrap on `i64` overflow.
/// - `tree[i]` (1-indexed) holds the sum of `(i - lowbit(i), i]`.
#[derive(Clone, Debug)]
pub struct FenwickTree {
    size: usize,
    tree: Vec<i64>,
}

impl FenwickTree {
    pub fn new(size: usize) -> Result<Self, RangeSumError> {
        check_size(size)?;
        Ok(Self {
            size,
            tree: filled(size.checked_add(1), 0)?,
        })
    }

    pub fn from_values(values: &[i64]) -> Result<Self, RangeSumError> {
        let mut fenwick = Self::new(values.len())?;
        fenwick.build(values)?;
        Ok(fenwick)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Always `false`: `new` rejects a size of 0.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Replaces the current contents with `values`.
    pub fn build(&mut self, values: &[i64]) -> Result<(), RangeSumError> {
        check_values(self.size, values)?;
        log::debug!("building fenwick tree of size {}", self.size);

        self.tree.fill(0);
        for (i, &v) in values.iter().enumerate() {
            self.add(i, v);
        }
        Ok(())
    }

    /// Adds `delta` to the value at `index`.
    pub fn update(&mut self, index: usize, delta: i64) -> Result<(), RangeSumError> {
        check_range(index, index, self.size)?;
        log::trace!("fenwick update index={index} delta={delta}");
        self.add(index, delta);
        Ok(())
    }

    /// Sum of `[0, index]`.
    pub fn query_prefix(&self, index: usize) -> Result<i64, RangeSumError> {
        check_range(index, index, self.size)?;
        Ok(self.prefix(index + 1))
    }

    /// Sum of `[left, right]`.
    pub fn query(&self, left: usize, right: usize) -> Result<i64, RangeSumError> {
        check_range(left, right, self.size)?;
        if left == 0 {
            return Ok(self.prefix(right + 1));
        }
        Ok(self.prefix(right + 1).wrapping_sub(self.prefix(left)))
    }

    pub fn point(&self, index: usize) -> Result<i64, RangeSumError> {
        self.query(index, index)
    }

    fn add(&mut self, index: usize, delta: i64) {
        let mut i = index + 1;
        while i <= self.size {
            self.tree[i] = self.tree[i].wrapping_add(delta);
            i += lowbit(i);
        }
    }

    /// Sum of the first `count` values.
    fn prefix(&self, count: usize) -> i64 {
        let mut i = count;
        let mut sum = 0_i64;
        while i > 0 {
            sum = sum.wrapping_add(self.tree[i]);
            i -= lowbit(i);
        }
        sum
    }
}
