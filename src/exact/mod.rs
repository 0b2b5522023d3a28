//! Exact search for small instances.
//!
//! - [`exhaustive_search`] — Scores every visiting order with the origin fixed

mod exhaustive;

pub use exhaustive::{exhaustive_search, next_permutation};
