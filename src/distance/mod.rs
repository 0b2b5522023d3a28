//! Distance matrices.
//!
//! Provides the dense pairwise distance matrix the optimizer reads from.

mod matrix;

pub use matrix::DistanceMatrix;
