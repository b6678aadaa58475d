//! The capacity request.

/// `ReserveRequest`
///
/// A request to reserve a given capacity, to be passed to `SimpleVector::from`.
///
/// See `reserve`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ReserveRequest(usize);

impl ReserveRequest {
    /// Creates a request for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self(capacity)
    }

    /// Returns the capacity requested.
    pub const fn capacity(self) -> usize {
        self.0
    }
}

impl From<usize> for ReserveRequest {
    fn from(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

/// Creates a request for `capacity` slots.
///
/// #   Example
///
/// ```
/// #   use simple_vector::vector::{reserve, SimpleVector};
/// let vec: SimpleVector<i32> = SimpleVector::from(reserve(5));
///
/// assert_eq!(0, vec.len());
/// assert_eq!(5, vec.capacity());
/// ```
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
