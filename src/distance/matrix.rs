//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// A dense n×n distance matrix stored in row-major order.
///
/// Entries are road distances supplied by an upstream provider, so the
/// triangle inequality is not assumed. The matrix is read-only to the
/// optimizer.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 2), 8.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows, as returned by a
    /// distance-matrix provider.
    ///
    /// # Errors
    ///
    /// [`InputError::RaggedMatrix`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(InputError::RaggedMatrix {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend(values);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row `from` as a slice: distances from `from` to every location.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from` by raw distance.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is
    /// empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = InputError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(dm: DistanceMatrix) -> Self {
        if dm.size == 0 {
            return Vec::new();
        }
        dm.data.chunks(dm.size).map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 4.0],
            vec![8.0, 4.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_from_rows() {
        let dm = sample();
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(2, 1) - 4.0).abs() < 1e-10);
        assert!((dm.get(1, 1)).abs() < 1e-10);
        assert_eq!(dm.row(1), &[5.0, 0.0, 4.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            InputError::RaggedMatrix {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let dm = DistanceMatrix::from_rows(Vec::new()).expect("empty is square");
        assert_eq!(dm.size(), 0);
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = sample();
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_keeps_first() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 3.0, 3.0, 3.0, 0.0, 1.0, 3.0, 1.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_serde_as_nested_rows() {
        let dm = sample();
        let json = serde_json::to_string(&dm).expect("serialize");
        assert_eq!(json, "[[0.0,5.0,8.0],[5.0,0.0,4.0],[8.0,4.0,0.0]]");
        let back: DistanceMatrix = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, dm);
        assert!(serde_json::from_str::<DistanceMatrix>("[[0.0,1.0]]").is_err());
    }
}
