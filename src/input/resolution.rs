//! Partial-resolution batches.
//!
//! Addresses are resolved to points by an external geocoder before a
//! distance matrix can be fetched. A failed address must not sink the
//! whole batch: it is reported and the rest of the stops go ahead, as long
//! as the origin and at least one stop resolved.

use tracing::warn;

use crate::distance::DistanceMatrix;
use crate::models::{Item, ItemKind};

use super::{DeliveryRequest, InputError};

/// Outcome of resolving one address.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    /// The address resolved to `point`, with a normalized `label`.
    Resolved {
        /// Resolved position, e.g. `(longitude, latitude)`.
        point: T,
        /// Normalized address label.
        label: String,
    },
    /// The address could not be resolved (not found, ambiguous, or out of region).
    Unresolved {
        /// Address as entered.
        label: String,
    },
}

impl<T> Resolution<T> {
    /// Shorthand for [`Resolution::Resolved`].
    pub fn resolved(point: T, label: impl Into<String>) -> Self {
        Self::Resolved {
            point,
            label: label.into(),
        }
    }

    /// Shorthand for [`Resolution::Unresolved`].
    pub fn unresolved(label: impl Into<String>) -> Self {
        Self::Unresolved {
            label: label.into(),
        }
    }
}

/// The resolved subset of a batch, ready for a distance-matrix lookup.
///
/// Location 0 is always the origin. `points()` is what the distance
/// provider should be queried with; its answer goes to
/// [`ResolvedBatch::into_request`].
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::input::{ResolvedBatch, Resolution};
/// use perishable_routing::models::ItemKind;
///
/// let batch = ResolvedBatch::from_resolutions(
///     Resolution::resolved((77.61, 12.93), "Koramangala"),
///     vec![
///         (Resolution::unresolved("Nowhere Lane"), ItemKind::Perishable),
///         (Resolution::resolved((77.64, 12.97), "Indiranagar"), ItemKind::NonPerishable),
///     ],
/// )
/// .unwrap();
/// assert_eq!(batch.points().len(), 2);
/// assert_eq!(batch.failed(), &["Nowhere Lane".to_string()]);
///
/// let dm = DistanceMatrix::from_rows(vec![vec![0.0, 6.1], vec![6.1, 0.0]]).unwrap();
/// let request = batch.into_request(dm).unwrap();
/// assert_eq!(request.source_index(1), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBatch<T> {
    points: Vec<T>,
    items: Vec<Item>,
    source_indices: Vec<usize>,
    failed: Vec<String>,
}

impl<T> ResolvedBatch<T> {
    /// Keeps the resolved entries of a batch.
    ///
    /// `stops` are numbered from 1 in the order given; these numbers are
    /// the source indices recorded for each kept location.
    ///
    /// # Errors
    ///
    /// - [`InputError::UnresolvedOrigin`] if the origin failed
    /// - [`InputError::MisplacedOrigin`] if a stop is tagged as the origin
    /// - [`InputError::TooFewResolved`] if no stop resolved
    pub fn from_resolutions(
        origin: Resolution<T>,
        stops: impl IntoIterator<Item = (Resolution<T>, ItemKind)>,
    ) -> Result<Self, InputError> {
        let (origin_point, origin_label) = match origin {
            Resolution::Resolved { point, label } => (point, label),
            Resolution::Unresolved { label } => {
                warn!(%label, "origin address did not resolve");
                return Err(InputError::UnresolvedOrigin { label });
            }
        };

        let mut batch = Self {
            points: vec![origin_point],
            items: vec![Item::origin().with_label(origin_label)],
            source_indices: vec![0],
            failed: Vec::new(),
        };

        for (offset, (resolution, kind)) in stops.into_iter().enumerate() {
            let source = offset + 1;
            if kind.is_origin() {
                return Err(InputError::MisplacedOrigin { index: source });
            }
            match resolution {
                Resolution::Resolved { point, label } => {
                    batch.points.push(point);
                    batch.items.push(Item::new(kind).with_label(label));
                    batch.source_indices.push(source);
                }
                Resolution::Unresolved { label } => {
                    warn!(%label, source, kind = kind.as_str(), "stop address did not resolve");
                    batch.failed.push(label);
                }
            }
        }

        if batch.points.len() < 2 {
            return Err(InputError::TooFewResolved {
                resolved: batch.points.len(),
                failed: batch.failed,
            });
        }
        Ok(batch)
    }

    /// Resolved points, origin first.
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// Items for the resolved points.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Addresses that failed to resolve.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Attaches the provider's distance matrix for [`Self::points`].
    ///
    /// # Errors
    ///
    /// Any [`InputError`] from [`DeliveryRequest::validate`], most likely
    /// [`InputError::LengthMismatch`] when the matrix was fetched for a
    /// different point set.
    pub fn into_request(self, distances: DistanceMatrix) -> Result<DeliveryRequest, InputError> {
        let request = DeliveryRequest::new(self.items, distances)?;
        Ok(request.with_provenance(self.source_indices, self.failed))
    }
}
