pub mod n1423 {
    use crate::algo::window::{min_window_sum, Sum};
    use crate::error::{Result, WindowError};

    /// Best total of `k` cards taken from either end of the row.
    ///
    /// The cards left behind always form one contiguous block of
    /// `len - k` cards, so the answer is the total minus the cheapest such block.
    pub fn max_score<T: Copy + Into<i32>>(card_points: &[T], k: usize) -> Result<i64> {
        let len = card_points.len();
        if k > len {
            return Err(WindowError::InvalidWidth { width: k, len });
        }
        let total = Sum::of(card_points).0;
        let rest = len - k;
        if rest == 0 {
            return Ok(total);
        }
        Ok(total - min_window_sum(card_points, rest)?)
    }
}

pub mod n2090 {
    use tracing::debug;

    use crate::algo::window::{fixed_windows, Sum};

    /// Floor average of each window of radius `k`, stored at the window's
    /// centre. Positions without a full window on both sides are `None`.
    pub fn averages<T: Copy + Into<i32>>(nums: &[T], k: usize) -> Vec<Option<i64>> {
        let mut out = vec![None; nums.len()];
        let width = match k.checked_mul(2).and_then(|w| w.checked_add(1)) {
            Some(w) => w,
            None => return out,
        };
        let divisor = width as i64;
        let scan = fixed_windows(nums, width, Sum::default(), |sum, left, _| {
            out[left + k] = Some(sum.0.div_euclid(divisor));
        });
        match scan {
            Ok(()) => out,
            // fewer than 2k+1 elements: no position has a full window
            Err(e) => {
                debug!(%e, "no centred window");
                vec![None; nums.len()]
            }
        }
    }

    /// Same as [`averages`] with `-1` marking the missing slots.
    pub fn get_averages<T: Copy + Into<i32>>(nums: &[T], k: usize) -> Vec<i64> {
        averages(nums, k)
            .into_iter()
            .map(|slot| slot.unwrap_or(-1))
            .collect()
    }
}

pub mod n2461 {
    use std::hash::Hash;

    use crate::algo::counter::Counter;
    use crate::algo::window::{fixed_windows, Sum};
    use crate::error::Result;

    /// Largest sum of a length-`k` subarray whose elements are all distinct,
    /// or `0` when there is none.
    pub fn maximum_subarray_sum<T>(nums: &[T], k: usize) -> Result<i64>
    where
        T: Copy + Into<i32> + Eq + Hash,
    {
        let mut res = 0;
        fixed_windows(nums, k, (Sum::default(), Counter::<T>::new()), |(sum, seen), _, _| {
            if seen.distinct() == k {
                res = res.max(sum.0);
            }
        })?;
        Ok(res)
    }
}

pub mod n2841 {
    use std::hash::Hash;

    use crate::algo::counter::Counter;
    use crate::algo::window::{fixed_windows, Sum};
    use crate::error::Result;

    /// Largest sum of a length-`k` subarray holding at least `m` distinct
    /// values, or `0` when there is none.
    pub fn max_sum<T>(nums: &[T], m: usize, k: usize) -> Result<i64>
    where
        T: Copy + Into<i32> + Eq + Hash,
    {
        let mut res = 0;
        fixed_windows(nums, k, (Sum::default(), Counter::<T>::new()), |(sum, seen), _, _| {
            if seen.distinct() >= m {
                res = res.max(sum.0);
            }
        })?;
        Ok(res)
    }
}
