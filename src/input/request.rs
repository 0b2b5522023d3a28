//! Validated optimizer input.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::Item;

use super::InputError;

/// Items and distances for one optimization, aligned by location index.
///
/// Deserialized requests are unchecked; call [`DeliveryRequest::validate`]
/// (or go through [`Optimizer::optimize_request`](crate::optimizer::Optimizer::optimize_request),
/// which does) before trusting one.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::input::{DeliveryRequest, InputError};
/// use perishable_routing::models::Item;
///
/// let dm = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).unwrap();
/// let request = DeliveryRequest::new(vec![Item::origin(), Item::perishable()], dm.clone()).unwrap();
/// assert_eq!(request.len(), 2);
///
/// let err = DeliveryRequest::new(vec![Item::perishable(), Item::origin()], dm).unwrap_err();
/// assert_eq!(err, InputError::MissingOrigin);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    items: Vec<Item>,
    distances: DistanceMatrix,
    /// Caller-side position of each location (e.g. in the submitted form).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    source_indices: Vec<usize>,
    /// Addresses dropped because they did not resolve.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    failed: Vec<String>,
}

impl DeliveryRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Any [`InputError`] describing the first violated precondition.
    pub fn new(items: Vec<Item>, distances: DistanceMatrix) -> Result<Self, InputError> {
        let request = Self {
            items,
            distances,
            source_indices: Vec::new(),
            failed: Vec::new(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Records where each location came from and which addresses were dropped.
    pub(crate) fn with_provenance(mut self, source_indices: Vec<usize>, failed: Vec<String>) -> Self {
        self.source_indices = source_indices;
        self.failed = failed;
        self
    }

    /// Checks the optimizer's preconditions.
    ///
    /// - one item per matrix row
    /// - recorded source indices, if any, one per item
    /// - the origin at location 0 and nowhere else
    /// - finite, non-negative distances
    /// - a zero diagonal
    ///
    /// An empty request is valid.
    ///
    /// # Errors
    ///
    /// The first violation found, in the order listed above.
    pub fn validate(&self) -> Result<(), InputError> {
        let n = self.items.len();
        if n != self.distances.size() {
            return Err(InputError::LengthMismatch {
                items: n,
                matrix: self.distances.size(),
            });
        }
        if !self.source_indices.is_empty() && self.source_indices.len() != n {
            return Err(InputError::ProvenanceMismatch {
                indices: self.source_indices.len(),
                items: n,
            });
        }
        if n == 0 {
            return Ok(());
        }
        if !self.items[0].kind().is_origin() {
            return Err(InputError::MissingOrigin);
        }
        if let Some(index) = (1..n).find(|&i| self.items[i].kind().is_origin()) {
            return Err(InputError::MisplacedOrigin { index });
        }

        for from in 0..n {
            for (to, &value) in self.distances.row(from).iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(InputError::InvalidDistance { from, to, value });
                }
            }
        }
        if let Some(index) = (0..n).find(|&i| self.distances.get(i, i) != 0.0) {
            return Err(InputError::NonZeroDiagonal {
                index,
                value: self.distances.get(index, index),
            });
        }

        Ok(())
    }

    /// Items, one per location.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Pairwise distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of locations, origin included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when there are no locations at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Caller-side index of `location`, or `location` itself when no
    /// provenance was recorded.
    pub fn source_index(&self, location: usize) -> usize {
        self.source_indices.get(location).copied().unwrap_or(location)
    }

    /// Addresses dropped before optimization.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }
}
