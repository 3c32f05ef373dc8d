use crate::RangeSumError;
use crate::util::check_range;
use crate::util::check_size;
use crate::util::check_values;
use crate::util::filled;
use crate::util::midpoint;

const ROOT: usize = 1;

/// Segment tree with range assignment and range-sum query.
///
/// Node `v` covers `[tl, tr]`; its children are `2v` and `2v + 1`. A node
/// with `has_lazy[v]` set already carries the sum of its pending fill in
/// `tree[v]`, but its children do not yet. Sums wrap on `i64` overflow.
#[derive(Clone, Debug)]
pub struct LazySegmentTree {
    len: usize,
    tree: Vec<i64>,
    lazy: Vec<i64>,
    has_lazy: Vec<bool>,
}

impl LazySegmentTree {
    pub fn new(len: usize) -> Result<Self, RangeSumError> {
        check_size(len)?;
        let slots = len.checked_mul(4);
        Ok(Self {
            len,
            tree: filled(slots, 0)?,
            lazy: filled(slots, 0)?,
            has_lazy: filled(slots, false)?,
        })
    }

    pub fn from_values(values: &[i64]) -> Result<Self, RangeSumError> {
        let mut seg = Self::new(values.len())?;
        seg.build(values)?;
        Ok(seg)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: `new` rejects a length of 0.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replaces the current contents with `values`. O(len).
    pub fn build(&mut self, values: &[i64]) -> Result<(), RangeSumError> {
        check_values(self.len, values)?;
        log::debug!("building lazy segment tree of length {}", self.len);

        self.has_lazy.fill(false);
        self.build_node(values, ROOT, 0, self.len - 1);
        Ok(())
    }

    /// Assigns `value` to every position in `[left, right]`.
    pub fn update(&mut self, left: usize, right: usize, value: i64) -> Result<(), RangeSumError> {
        check_range(left, right, self.len)?;
        log::trace!("lazy segment tree assign [{left}, {right}] = {value}");
        self.update_node(ROOT, 0, self.len - 1, left, right, value);
        Ok(())
    }

    /// Point assignment.
    pub fn set(&mut self, pos: usize, value: i64) -> Result<(), RangeSumError> {
        self.update(pos, pos, value)
    }

    /// Sum of `[left, right]`.
    ///
    /// Takes `&mut self` since partially covered nodes push their pending
    /// fill down before their children are read.
    pub fn query(&mut self, left: usize, right: usize) -> Result<i64, RangeSumError> {
        check_range(left, right, self.len)?;
        Ok(self.query_node(ROOT, 0, self.len - 1, left, right))
    }

    pub fn get(&mut self, pos: usize) -> Result<i64, RangeSumError> {
        self.query(pos, pos)
    }

    fn build_node(&mut self, values: &[i64], v: usize, tl: usize, tr: usize) {
        if tl == tr {
            self.tree[v] = values[tl];
            return;
        }
        let tm = midpoint(tl, tr);
        self.build_node(values, 2 * v, tl, tm);
        self.build_node(values, 2 * v + 1, tm + 1, tr);
        self.pull_up(v);
    }

    fn update_node(&mut self, v: usize, tl: usize, tr: usize, l: usize, r: usize, value: i64) {
        // no overlap
        if tl > r || tr < l {
            return;
        }
        // total overlap
        if l <= tl && tr <= r {
            self.apply(v, tl, tr, value);
            return;
        }

        self.push_down(v, tl, tr);
        let tm = midpoint(tl, tr);
        self.update_node(2 * v, tl, tm, l, r, value);
        self.update_node(2 * v + 1, tm + 1, tr, l, r, value);
        self.pull_up(v);
    }

    fn query_node(&mut self, v: usize, tl: usize, tr: usize, l: usize, r: usize) -> i64 {
        if tl > r || tr < l {
            return 0;
        }
        if l <= tl && tr <= r {
            return self.tree[v];
        }

        self.push_down(v, tl, tr);
        let tm = midpoint(tl, tr);
        let left = self.query_node(2 * v, tl, tm, l, r);
        left.wrapping_add(self.query_node(2 * v + 1, tm + 1, tr, l, r))
    }

    /// `tl` and `tr` must be the true bounds of `v`.
    #[inline(always)]
    fn apply(&mut self, v: usize, tl: usize, tr: usize, value: i64) {
        self.tree[v] = ((tr - tl + 1) as i64).wrapping_mul(value);
        self.lazy[v] = value;
        self.has_lazy[v] = true;
    }

    #[inline(always)]
    fn pull_up(&mut self, v: usize) {
        self.tree[v] = self.tree[2 * v].wrapping_add(self.tree[2 * v + 1]);
    }

    fn push_down(&mut self, v: usize, tl: usize, tr: usize) {
        if !self.has_lazy[v] {
            return;
        }
        let tm = midpoint(tl, tr);
        let value = self.lazy[v];
        self.apply(2 * v, tl, tm, value);
        self.apply(2 * v + 1, tm + 1, tr, value);
        self.has_lazy[v] = false;
    }
}
