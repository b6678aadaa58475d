//! The ArrayOwner.

use super::root::{boxed::Box, fmt, mem, ops, ptr, vec::Vec};

use super::allocation::try_allocate_with;
use super::failure::{panic_from_failure, Result};

/// `ArrayOwner`
///
/// The exclusive owner of a single heap-allocated buffer of `T`, or of nothing at all.
///
/// The `ArrayOwner` has no notion of length distinct from the number of slots it owns: every slot is initialized, and
/// every slot is dropped when the buffer is freed.
///
/// The `ArrayOwner` is deliberately not `Clone`: duplicating a buffer is the business of the containers built atop it.
pub struct ArrayOwner<T> {
    //  Invariant: `None` whenever there are no slots.
    items: Option<Box<[T]>>,
}

impl<T> ArrayOwner<T> {
    /// Creates an empty instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::array::ArrayOwner;
    /// let owner: ArrayOwner<i32> = ArrayOwner::new();
    ///
    /// assert!(!owner.is_allocated());
    /// assert!(owner.get().is_null());
    /// ```
    pub const fn new() -> Self {
        Self { items: None }
    }

    /// Creates an instance owning `len` default-initialized slots.
    ///
    /// If `len` is 0, no memory is allocated and the instance is empty.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn try_with_len(len: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::try_from_fn(len, |_| T::default())
    }

    /// Creates an instance owning `len` default-initialized slots.
    ///
    /// Calling this method is equivalent to calling `try_with_len` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::array::ArrayOwner;
    /// let owner: ArrayOwner<i32> = ArrayOwner::with_len(3);
    ///
    /// assert_eq!(&[0, 0, 0], owner.as_slice());
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::try_with_len(len).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates an instance owning `len` slots, the ith slot initialized with `fill(i)`.
    ///
    /// If `len` is 0, `fill` is never invoked, no memory is allocated, and the instance is empty.
    ///
    /// If `fill` panics, the slots initialized so far are dropped and the memory is released.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn try_from_fn<F>(len: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        if len == 0 {
            return Ok(Self::new());
        }

        let items = try_allocate_with(len, fill)?;

        Ok(Self { items: Some(items) })
    }

    /// Creates an instance owning `len` slots, the ith slot initialized with `fill(i)`.
    ///
    /// Calling this method is equivalent to calling `try_from_fn` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::array::ArrayOwner;
    /// let owner = ArrayOwner::from_fn(3, |i| i * 2);
    ///
    /// assert_eq!(&[0, 2, 4], owner.as_slice());
    /// ```
    pub fn from_fn<F>(len: usize, fill: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::try_from_fn(len, fill).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Adopts a buffer previously relinquished by `into_raw`.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `raw` was obtained from `into_raw`, or from `Box::into_raw` on a `Box<[T]>`.
    /// -   Assumes that `raw` is not owned by anything else.
    pub unsafe fn from_raw(raw: *mut [T]) -> Self {
        //  Safety:
        //  -   `raw` is the result of `Box::into_raw`, as per pre-condition.
        Self::from(unsafe { Box::from_raw(raw) })
    }

    /// Returns whether a buffer is owned, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::array::ArrayOwner;
    /// assert!(!ArrayOwner::<i32>::with_len(0).is_allocated());
    /// assert!(ArrayOwner::<i32>::with_len(1).is_allocated());
    /// ```
    pub fn is_allocated(&self) -> bool {
        self.items.is_some()
    }

    /// Returns the number of slots owned.
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }

    /// Returns whether no slot is owned.
    pub fn is_empty(&self) -> bool {
        !self.is_allocated()
    }

    /// Returns a pointer to the first slot, or a null pointer if no buffer is owned.
    ///
    /// The pointer does not carry ownership.
    pub fn get(&self) -> *const T {
        self.items.as_ref().map_or(ptr::null(), |items| items.as_ptr())
    }

    /// Returns a mutable pointer to the first slot, or a null pointer if no buffer is owned.
    ///
    /// The pointer does not carry ownership.
    pub fn get_mut(&mut self) -> *mut T {
        self.items.as_mut().map_or(ptr::null_mut(), |items| items.as_mut_ptr())
    }

    /// Returns all the slots.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_deref().unwrap_or(&[])
    }

    /// Returns all the slots.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.items.as_deref_mut().unwrap_or(&mut [])
    }

    /// Relinquishes the buffer, if any, leaving the instance empty.
    ///
    /// The caller is now in charge of the buffer.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::array::ArrayOwner;
    /// let mut owner = ArrayOwner::from_fn(2, |i| i);
    ///
    /// let buffer = owner.release();
    ///
    /// assert_eq!(Some(&[0, 1][..]), buffer.as_deref());
    /// assert!(!owner.is_allocated());
    /// ```
    #[must_use = "dropping the released buffer frees it"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.items.take()
    }

    /// Relinquishes the buffer as a raw pointer.
    ///
    /// The buffer is leaked unless re-adopted by `from_raw`. An empty instance yields a dangling, empty, slice pointer.
    #[must_use = "the buffer is leaked unless re-adopted"]
    pub fn into_raw(mut self) -> *mut [T] {
        let items = self.release().unwrap_or_default();
        Box::into_raw(items)
    }

    /// Empties the instance, returning the former content as a new instance.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the buffers of `self` and `other`.
    ///
    /// No memory is allocated, no element is moved.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::array::ArrayOwner;
    /// let mut a = ArrayOwner::from_fn(1, |_| 'a');
    /// let mut b = ArrayOwner::new();
    ///
    /// a.swap(&mut b);
    ///
    /// assert!(!a.is_allocated());
    /// assert_eq!(&['a'], b.as_slice());
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.items, &mut other.items);
    }
}

impl<T> Default for ArrayOwner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayOwner<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ArrayOwner").field(&self.as_slice()).finish()
    }
}

impl<T> From<Box<[T]>> for ArrayOwner<T> {
    fn from(items: Box<[T]>) -> Self {
        if items.is_empty() {
            return Self::new();
        }

        Self { items: Some(items) }
    }
}

impl<T> From<Vec<T>> for ArrayOwner<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from(items.into_boxed_slice())
    }
}

/// Unchecked access: the index is only checked against the number of slots.
impl<T> ops::Index<usize> for ArrayOwner<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "{} >= {}", index, self.len());

        &self.as_slice()[index]
    }
}

impl<T> ops::IndexMut<usize> for ArrayOwner<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "{} >= {}", index, self.len());

        &mut self.as_mut_slice()[index]
    }
}

//  mod tests
