mod error;
mod fenwick_tree;
mod lazy_segment_tree;
mod util;

pub use error::RangeSumError;
pub use fenwick_tree::FenwickTree;
pub use lazy_segment_tree::LazySegmentTree;

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::{FenwickTree, LazySegmentTree, RangeSumError};

    fn brute_force_sum(values: &[i64], l: usize, r: usize) -> i64 {
        debug_assert!(l <= r);
        values[l..=r].iter().sum()
    }

    fn ordered(n: usize, a: usize, b: usize) -> (usize, usize) {
        let (a, b) = (a % n, b % n);
        (a.min(b), a.max(b))
    }

    #[test]
    fn known_cases_match_bruteforce() {
        let cases: &[&[i64]] = &[
            &[1],
            &[2, 1],
            &[1, 2],
            &[2, 2],
            &[5, 1, 4, 1, 3],
            &[3, 2, 1, 0],
            &[0, 1, 2, 3],
            &[7, 7, 7, 7],
            &[-4, 9, -1, 0, 6, -6, 2],
        ];

        for &values in cases {
            let ft = FenwickTree::from_values(values).unwrap();
            let mut seg = LazySegmentTree::from_values(values).unwrap();

            let n = values.len();
            for l in 0..n {
                for r in l..n {
                    let expected = brute_force_sum(values, l, r);
                    assert_eq!(ft.query(l, r), Ok(expected), "fenwick l={l} r={r}");
                    assert_eq!(seg.query(l, r), Ok(expected), "lazy l={l} r={r}");
                }
            }
        }
    }

    #[test]
    fn smallest_trees_are_not_empty() {
        let ft = FenwickTree::new(1).unwrap();
        let seg = LazySegmentTree::new(1).unwrap();
        assert_eq!((ft.len(), ft.is_empty()), (1, false));
        assert_eq!((seg.len(), seg.is_empty()), (1, false));
        assert_eq!(FenwickTree::from_values(&[]).unwrap_err(), RangeSumError::InvalidSize);
        assert_eq!(
            LazySegmentTree::from_values(&[]).unwrap_err(),
            RangeSumError::InvalidSize
        );
    }

    #[test]
    fn errors_are_shared() {
        let ft = FenwickTree::new(3).unwrap();
        let mut seg = LazySegmentTree::new(3).unwrap();
        assert_eq!(ft.query(1, 5), seg.query(1, 5));
        assert_eq!(
            ft.query(1, 5).unwrap_err().to_string(),
            "range [1, 5] is out of bounds for length 3"
        );
        assert_eq!(
            RangeSumError::LengthMismatch {
                expected: 3,
                actual: 1
            }
            .to_string(),
            "expected 3 values, got 1"
        );
    }

    proptest! {
        #[test]
        fn lazy_sum_is_additive(
            values in vec(-1_000_i64..1_000, 2..64),
            a in any::<usize>(),
            b in any::<usize>(),
            c in any::<usize>(),
        ) {
            let n = values.len();
            let mut seg = LazySegmentTree::from_values(&values).unwrap();
            let (l, r) = ordered(n, a, b);
            prop_assume!(l < r);
            let m = l + c % (r - l);

            let whole = seg.query(l, r).unwrap();
            let split = seg.query(l, m).unwrap() + seg.query(m + 1, r).unwrap();
            prop_assert_eq!(whole, split);
        }

        #[test]
        fn lazy_assignment_only_touches_range(
            values in vec(-1_000_i64..1_000, 1..64),
            a in any::<usize>(),
            b in any::<usize>(),
            x in -1_000_i64..1_000,
        ) {
            let n = values.len();
            let mut seg = LazySegmentTree::from_values(&values).unwrap();
            let (l, r) = ordered(n, a, b);
            seg.update(l, r, x).unwrap();

            for (i, &before) in values.iter().enumerate() {
                let expected = if (l..=r).contains(&i) { x } else { before };
                prop_assert_eq!(seg.get(i).unwrap(), expected);
            }
        }

        #[test]
        fn lazy_tracks_naive_model(
            values in vec(-100_i64..100, 1..48),
            ops in vec((any::<usize>(), any::<usize>(), -100_i64..100), 0..64),
        ) {
            let n = values.len();
            let mut model = values.clone();
            let mut seg = LazySegmentTree::from_values(&values).unwrap();

            for (a, b, x) in ops {
                let (l, r) = ordered(n, a, b);
                model[l..=r].fill(x);
                seg.update(l, r, x).unwrap();
                prop_assert_eq!(seg.query(0, n - 1).unwrap(), model.iter().sum::<i64>());
            }
        }

        #[test]
        fn fenwick_prefix_is_range_from_zero(
            values in vec(-1_000_i64..1_000, 1..64),
            deltas in vec((any::<usize>(), -1_000_i64..1_000), 0..32),
        ) {
            let n = values.len();
            let mut ft = FenwickTree::from_values(&values).unwrap();
            for (i, d) in deltas {
                ft.update(i % n, d).unwrap();
            }
            for i in 0..n {
                prop_assert_eq!(ft.query_prefix(i).unwrap(), ft.query(0, i).unwrap());
            }
        }

        #[test]
        fn point_assignment_agrees_with_fenwick(
            values in vec(-1_000_i64..1_000, 1..64),
            sets in vec((any::<usize>(), -1_000_i64..1_000), 0..32),
        ) {
            let n = values.len();
            let mut ft = FenwickTree::from_values(&values).unwrap();
            let mut seg = LazySegmentTree::from_values(&values).unwrap();

            for (i, x) in sets {
                let i = i % n;
                let current = ft.point(i).unwrap();
                ft.update(i, x - current).unwrap();
                seg.set(i, x).unwrap();
            }
            for l in 0..n {
                prop_assert_eq!(ft.query(l, n - 1).unwrap(), seg.query(l, n - 1).unwrap());
            }
        }
    }
}
