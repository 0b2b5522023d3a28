//! Local search refinement for candidate routes.
//!
//! - [`two_opt`] — First-improvement 2-opt segment reversal

mod two_opt;

pub use two_opt::two_opt_improve;
