//! JSON case files for the demo binary.
//!
//! A case file is an array of objects tagged by `problem`:
//!
//! ```json
//! [
//!   { "problem": "max_score", "card_points": [9, 7, 7, 9, 7, 7, 9], "k": 7 },
//!   { "problem": "min_window", "s": "ADOBECODEBANC", "t": "ABC" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde_derive::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::error::Result;
use crate::leetcode::Solution;

#[derive(Debug, Error)]
pub enum CaseFileError {
    #[error("failed to read case file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed case file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum Case {
    MaxScore { card_points: Vec<i32>, k: i32 },
    IsValid { s: String },
    GetAverages { nums: Vec<i32>, k: i32 },
    MinimumRecolors { blocks: String, k: i32 },
    MaximumSubarraySum { nums: Vec<i32>, k: i32 },
    RemoveElement { nums: Vec<i32>, val: i32 },
    MaxSum { nums: Vec<i32>, m: i32, k: i32 },
    MinWindow { s: String, t: String },
}

impl Case {
    pub fn name(&self) -> &'static str {
        match self {
            Case::MaxScore { .. } => "max_score",
            Case::IsValid { .. } => "is_valid",
            Case::GetAverages { .. } => "get_averages",
            Case::MinimumRecolors { .. } => "minimum_recolors",
            Case::MaximumSubarraySum { .. } => "maximum_subarray_sum",
            Case::RemoveElement { .. } => "remove_element",
            Case::MaxSum { .. } => "max_sum",
            Case::MinWindow { .. } => "min_window",
        }
    }

    /// Runs the case and renders its answer as JSON.
    pub fn run(self) -> Result<Value> {
        let answer = match self {
            Case::MaxScore { card_points, k } => json!(Solution::try_max_score(card_points, k)?),
            Case::IsValid { s } => json!(Solution::is_valid(s)),
            Case::GetAverages { nums, k } => json!(Solution::try_get_averages(nums, k)?),
            Case::MinimumRecolors { blocks, k } => {
                json!(Solution::try_minimum_recolors(blocks, k)?)
            }
            Case::MaximumSubarraySum { nums, k } => {
                json!(Solution::try_maximum_subarray_sum(nums, k)?)
            }
            Case::RemoveElement { mut nums, val } => {
                let k = Solution::remove_element(&mut nums, val);
                nums.truncate(k as usize);
                json!({ "len": k, "nums": nums })
            }
            Case::MaxSum { nums, m, k } => json!(Solution::try_max_sum(nums, m, k)?),
            Case::MinWindow { s, t } => json!(Solution::try_min_window(s, t)?),
        };
        Ok(answer)
    }
}

pub fn parse(text: &str) -> std::result::Result<Vec<Case>, CaseFileError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load(path: &Path) -> std::result::Result<Vec<Case>, CaseFileError> {
    debug!(path = %path.display(), "loading cases");
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// One output line: `<problem>: <answer>` or `<problem>: error: <reason>`.
pub fn render(case: Case) -> String {
    let name = case.name();
    match case.run() {
        Ok(answer) => format!("{}: {}", name, answer),
        Err(e) => format!("{}: error: {}", name, e),
    }
}
