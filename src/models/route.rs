//! Route type: a visiting order over all locations.

use serde::Serialize;

/// An ordered visit sequence over locations `0..n`, starting at the origin.
///
/// Every route handed out by the engine is a permutation of `0..n` with
/// `route[0] == 0`. Routes are values: refinement produces a new route and
/// never touches one already returned.
///
/// # Examples
///
/// ```
/// use perishable_routing::models::Route;
///
/// let route = Route::from_order(vec![0, 2, 1, 3]).unwrap();
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.stops(), &[2, 1, 3]);
/// assert_eq!(route.position_of(1), Some(2));
///
/// // Must start at the origin and visit every location once.
/// assert!(Route::from_order(vec![1, 0, 2]).is_none());
/// assert!(Route::from_order(vec![0, 2, 2]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Route {
    order: Vec<usize>,
}

impl Route {
    /// Creates a route from an explicit order.
    ///
    /// Returns `None` unless `order` is a permutation of `0..order.len()`
    /// beginning with `0`. The empty order is accepted.
    pub fn from_order(order: Vec<usize>) -> Option<Self> {
        if !is_valid_order(&order) {
            return None;
        }
        Some(Self { order })
    }

    /// Wraps an order produced by one of the engine's own constructors.
    pub(crate) fn from_order_unchecked(order: Vec<usize>) -> Self {
        debug_assert!(is_valid_order(&order), "invalid route order {order:?}");
        Self { order }
    }

    /// The identity route `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Full visit order, origin included.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Delivery stops in visit order (origin excluded).
    pub fn stops(&self) -> &[usize] {
        self.order.get(1..).unwrap_or(&[])
    }

    /// Number of locations in the route, origin included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for the empty route.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Route position at which `location` is visited.
    pub fn position_of(&self, location: usize) -> Option<usize> {
        self.order.iter().position(|&l| l == location)
    }

    /// Iterates over locations in visit order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.order.iter()
    }

    /// Consumes the route, returning the visit order.
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }
}

impl AsRef<[usize]> for Route {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Checks the route invariants: starts at 0 and visits each of `0..n` once.
fn is_valid_order(order: &[usize]) -> bool {
    if order.is_empty() {
        return true;
    }
    if order[0] != 0 {
        return false;
    }
    let mut seen = vec![false; order.len()];
    for &loc in order {
        if loc >= order.len() || seen[loc] {
            return false;
        }
        seen[loc] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::from_order(vec![]).expect("empty is valid");
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(r.stops().is_empty());
    }

    #[test]
    fn test_route_origin_only() {
        let r = Route::identity(1);
        assert_eq!(r.as_slice(), &[0]);
        assert!(r.stops().is_empty());
    }

    #[test]
    fn test_route_rejects_bad_start() {
        assert!(Route::from_order(vec![1, 0]).is_none());
    }

    #[test]
    fn test_route_rejects_duplicates_and_gaps() {
        assert!(Route::from_order(vec![0, 1, 1]).is_none());
        assert!(Route::from_order(vec![0, 1, 3]).is_none());
    }

    #[test]
    fn test_route_positions() {
        let r = Route::from_order(vec![0, 3, 1, 2]).expect("valid");
        assert_eq!(r.position_of(3), Some(1));
        assert_eq!(r.position_of(0), Some(0));
        assert_eq!(r.position_of(7), None);
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![0, 3, 1, 2]);
        assert_eq!(r.into_vec(), vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_route_serializes_as_array() {
        let r = Route::identity(3);
        let json = serde_json::to_string(&r).expect("serialize");
        assert_eq!(json, "[0,1,2]");
    }
}
