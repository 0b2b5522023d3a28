//! Input validation errors.

use thiserror::Error;

/// Why a delivery request cannot be handed to the optimizer.
///
/// The optimizer itself never fails; these errors describe inputs that
/// break its preconditions, and batches where too few addresses resolved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Item count and matrix dimension differ.
    #[error("{items} items but a {matrix}x{matrix} distance matrix")]
    LengthMismatch {
        /// Number of items.
        items: usize,
        /// Matrix dimension.
        matrix: usize,
    },
    /// Location 0 does not carry the origin item.
    #[error("location 0 must be the origin")]
    MissingOrigin,
    /// An origin item appears at a location other than 0.
    #[error("origin item at location {index}; only location 0 may be the origin")]
    MisplacedOrigin {
        /// Offending location.
        index: usize,
    },
    /// A matrix entry is negative, NaN or infinite.
    #[error("invalid distance {value} from {from} to {to}")]
    InvalidDistance {
        /// Row.
        from: usize,
        /// Column.
        to: usize,
        /// Offending value.
        value: f64,
    },
    /// A diagonal entry is not zero.
    #[error("distance from {index} to itself is {value}, expected 0")]
    NonZeroDiagonal {
        /// Location.
        index: usize,
        /// Offending value.
        value: f64,
    },
    /// Recorded source indices do not line up with the items.
    #[error("{indices} source indices recorded for {items} items")]
    ProvenanceMismatch {
        /// Number of recorded source indices.
        indices: usize,
        /// Number of items.
        items: usize,
    },
    /// A matrix row has the wrong number of columns.
    #[error("distance matrix row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        /// Row index.
        row: usize,
        /// Actual row length.
        len: usize,
        /// Expected row length.
        expected: usize,
    },
    /// The courier's own position could not be resolved.
    #[error("could not resolve the current address: {label}")]
    UnresolvedOrigin {
        /// Address as entered.
        label: String,
    },
    /// Fewer than two points (origin plus one stop) resolved.
    #[error("{resolved} resolved location(s); need the origin and at least one stop (unresolved: {})", .failed.join(", "))]
    TooFewResolved {
        /// Number of resolved points, origin included.
        resolved: usize,
        /// Addresses that failed to resolve.
        failed: Vec<String>,
    },
}
