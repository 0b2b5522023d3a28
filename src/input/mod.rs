//! Optimizer inputs and their validation.
//!
//! - [`DeliveryRequest`] — Items plus distance matrix, checked against the
//!   optimizer's preconditions
//! - [`ResolvedBatch`] — Keeps the resolved subset of a geocoded batch and
//!   reports the addresses that failed
//! - [`InputError`] — Everything that can be wrong with an input

mod error;
mod request;
mod resolution;

pub use error::InputError;
pub use request::DeliveryRequest;
pub use resolution::{Resolution, ResolvedBatch};
