//! Sliding window and two pointer exercises.
//!
//! `algo` holds the shared window driver and frequency tables, and
//! `leetcode::solution` holds one module per exercise built on top of them.

pub mod algo;
pub mod error;
pub mod io_examples;
pub mod leetcode;

pub use error::{Result, WindowError};
pub use leetcode::Solution;
