pub mod easy;
pub mod hard;
pub mod medium;

use tracing::warn;

use self::easy::{n0020, n0027, n2379};
use self::hard::n0076;
use self::medium::{n1423, n2090, n2461, n2841};
use crate::error::{non_negative, Result, WindowError};

/// Entry points shaped like the exercise signatures.
///
/// The `try_*` forms report bad input. The plain forms log it and fall back
/// to the exercise's "no answer" value.
pub struct Solution;

impl Solution {
    pub fn try_max_score(card_points: Vec<i32>, k: i32) -> Result<i64> {
        n1423::max_score(&card_points, non_negative("k", k)?)
    }

    pub fn max_score(card_points: Vec<i32>, k: i32) -> i64 {
        Self::try_max_score(card_points, k).unwrap_or_else(|e| rejected("max_score", e, 0))
    }

    pub fn is_valid(s: String) -> bool {
        n0020::is_valid(&s)
    }

    pub fn try_get_averages(nums: Vec<i32>, k: i32) -> Result<Vec<i64>> {
        Ok(n2090::get_averages(&nums, non_negative("k", k)?))
    }

    pub fn get_averages(nums: Vec<i32>, k: i32) -> Vec<i64> {
        let len = nums.len();
        Self::try_get_averages(nums, k)
            .unwrap_or_else(|e| rejected("get_averages", e, vec![-1; len]))
    }

    pub fn try_minimum_recolors(blocks: String, k: i32) -> Result<i32> {
        let count = n2379::minimum_recolors(&blocks, non_negative("k", k)?)?;
        // never more than k
        Ok(count as i32)
    }

    pub fn minimum_recolors(blocks: String, k: i32) -> i32 {
        Self::try_minimum_recolors(blocks, k)
            .unwrap_or_else(|e| rejected("minimum_recolors", e, 0))
    }

    pub fn try_maximum_subarray_sum(nums: Vec<i32>, k: i32) -> Result<i64> {
        n2461::maximum_subarray_sum(&nums, non_negative("k", k)?)
    }

    pub fn maximum_subarray_sum(nums: Vec<i32>, k: i32) -> i64 {
        Self::try_maximum_subarray_sum(nums, k)
            .unwrap_or_else(|e| rejected("maximum_subarray_sum", e, 0))
    }

    pub fn remove_element(nums: &mut Vec<i32>, val: i32) -> i32 {
        n0027::remove_element(nums, &val) as i32
    }

    pub fn try_max_sum(nums: Vec<i32>, m: i32, k: i32) -> Result<i64> {
        n2841::max_sum(&nums, non_negative("m", m)?, non_negative("k", k)?)
    }

    pub fn max_sum(nums: Vec<i32>, m: i32, k: i32) -> i64 {
        Self::try_max_sum(nums, m, k).unwrap_or_else(|e| rejected("max_sum", e, 0))
    }

    pub fn try_min_window(s: String, t: String) -> Result<Option<String>> {
        Ok(n0076::min_window(&s, &t)?.map(str::to_owned))
    }

    pub fn min_window(s: String, t: String) -> String {
        Self::try_min_window(s, t)
            .unwrap_or_else(|e| rejected("min_window", e, None))
            .unwrap_or_default()
    }
}

fn rejected<T>(problem: &str, err: WindowError, fallback: T) -> T {
    warn!(problem, error = %err, "invalid input");
    fallback
}
