use crate::RangeSumError;

#[inline(always)]
pub(crate) fn check_size(len: usize) -> Result<(), RangeSumError> {
    if len == 0 {
        log::debug!("rejected zero-sized tree");
        return Err(RangeSumError::InvalidSize);
    }
    Ok(())
}

/// `slots` copies of `fill`, or `InvalidSize` when the allocation cannot be made.
pub(crate) fn filled<T: Clone>(slots: Option<usize>, fill: T) -> Result<Vec<T>, RangeSumError> {
    let Some(slots) = slots else {
        log::debug!("rejected tree: slot count overflows usize");
        return Err(RangeSumError::InvalidSize);
    };
    let mut storage = Vec::new();
    if storage.try_reserve_exact(slots).is_err() {
        log::debug!("rejected tree: cannot allocate {slots} slots");
        return Err(RangeSumError::InvalidSize);
    }
    storage.resize(slots, fill);
    Ok(storage)
}

#[inline(always)]
pub(crate) fn check_values(len: usize, values: &[i64]) -> Result<(), RangeSumError> {
    if values.len() != len {
        log::debug!("rejected build: expected {len} values, got {}", values.len());
        return Err(RangeSumError::LengthMismatch {
            expected: len,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Inclusive `[left, right]` must satisfy `left <= right < len`.
#[inline(always)]
pub(crate) fn check_range(left: usize, right: usize, len: usize) -> Result<(), RangeSumError> {
    if left > right || right >= len {
        log::debug!("rejected range [{left}, {right}] for length {len}");
        return Err(RangeSumError::IndexOutOfRange { left, right, len });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[inline(always)]
pub(crate) fn midpoint(tl: usize, tr: usize) -> usize {
    debug_assert!(tl <= tr);
    tl + (tr - tl) / 2
}
