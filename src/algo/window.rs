//! Fixed-size sliding window driver.
//!
//! A window `[left, right]` slides over the sequence once. The aggregate is
//! updated incrementally on every step and must always equal the reduction of
//! `seq[left..=right]`.

use tracing::trace;

use crate::error::{Result, WindowError};

/// State folded over the elements currently inside a window.
pub trait WindowAggregate<T: ?Sized> {
    /// `item` entered the window on the right.
    fn push(&mut self, item: &T);
    /// `item` left the window on the left.
    fn pop(&mut self, item: &T);
}

/// Running sum of 32-bit elements, widened to `i64`.
///
/// A window would need more than 2^32 elements before the sum could overflow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sum(pub i64);

impl Sum {
    pub fn of<T: Copy + Into<i32>>(items: &[T]) -> Self {
        let mut sum = Sum::default();
        for item in items {
            sum.push(item);
        }
        sum
    }
}

impl<T: Copy + Into<i32>> WindowAggregate<T> for Sum {
    fn push(&mut self, item: &T) {
        let x: i32 = (*item).into();
        self.0 += i64::from(x);
    }
    fn pop(&mut self, item: &T) {
        let x: i32 = (*item).into();
        self.0 -= i64::from(x);
    }
}

/// Number of elements in the window equal to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatching<T> {
    target: T,
    count: usize,
}

impl<T> CountMatching<T> {
    pub fn new(target: T) -> Self {
        CountMatching { target, count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T: PartialEq> WindowAggregate<T> for CountMatching<T> {
    fn push(&mut self, item: &T) {
        if *item == self.target {
            self.count += 1;
        }
    }
    fn pop(&mut self, item: &T) {
        if *item == self.target {
            self.count -= 1;
        }
    }
}

impl<T: ?Sized, A, B> WindowAggregate<T> for (A, B)
where
    A: WindowAggregate<T>,
    B: WindowAggregate<T>,
{
    fn push(&mut self, item: &T) {
        self.0.push(item);
        self.1.push(item);
    }
    fn pop(&mut self, item: &T) {
        self.0.pop(item);
        self.1.pop(item);
    }
}

/// Visits every contiguous window of exactly `k` elements, left to right.
///
/// `visit` receives the aggregate of the full window together with its
/// inclusive bounds. Fails when `k` is zero or larger than the sequence.
pub fn fixed_windows<T, A, F>(seq: &[T], k: usize, mut aggregate: A, mut visit: F) -> Result<()>
where
    A: WindowAggregate<T>,
    F: FnMut(&A, usize, usize),
{
    if k == 0 || k > seq.len() {
        return Err(WindowError::InvalidWidth {
            width: k,
            len: seq.len(),
        });
    }
    let mut left = 0;
    for (right, item) in seq.iter().enumerate() {
        aggregate.push(item);
        if right + 1 < k {
            continue;
        }
        trace!(left, right, "window full");
        visit(&aggregate, left, right);
        aggregate.pop(&seq[left]);
        left += 1;
    }
    Ok(())
}

/// Smallest sum over all windows of `width` elements.
pub fn min_window_sum<T: Copy + Into<i32>>(seq: &[T], width: usize) -> Result<i64> {
    let mut best = i64::MAX;
    fixed_windows(seq, width, Sum::default(), |sum, _, _| best = best.min(sum.0))?;
    Ok(best)
}
