//! The SimpleVector

use super::root::{boxed::Box, cmp, fmt, hash, iter, mem, ops, slice, vec::Vec};

use super::array::ArrayOwner;
use super::failure::{panic_from_failure, Failure, Result};
use super::growth;
use super::reserve::ReserveRequest;

//
//  Public Interface
//

/// `SimpleVector`
pub struct SimpleVector<T> {
    //  The buffer, of exactly `capacity` slots.
    storage: ArrayOwner<T>,
    //  The number of live elements, at the front of `storage`.
    //
    //  The slots past `length` hold default-initialized, or stale, values.
    length: usize,
    //  The number of slots of `storage`.
    capacity: usize,
}

impl<T> SimpleVector<T> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::vector::SimpleVector;
    /// let vec: SimpleVector<i32> = SimpleVector::new();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub const fn new() -> Self {
        Self { storage: ArrayOwner::new(), length: 0, capacity: 0 }
    }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::simple_vector;
    /// let vec = simple_vector![1, 2, 3];
    /// assert_eq!(3, vec.len());
    /// ```
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns the number of elements the instance can hold without reallocating.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::vector::SimpleVector;
    /// let mut vec = SimpleVector::new();
    /// vec.push_back(1);
    /// vec.push_back(2);
    /// vec.push_back(3);
    ///
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether the instance contains any element, or not.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a reference to the ith element, if any.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns a reference to the ith element, if any.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns a reference to the ith element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfRange` if `i` is not less than `len()`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::failure::Failure;
    /// #   use simple_vector::simple_vector;
    /// let vec = simple_vector![1, 2, 3];
    ///
    /// assert_eq!(Ok(&3), vec.at(2));
    /// assert_eq!(Err(Failure::OutOfRange { index: 3, length: 3 }), vec.at(3));
    /// ```
    pub fn at(&self, i: usize) -> Result<&T> {
        let length = self.length;
        self.get(i).ok_or(Failure::OutOfRange { index: i, length })
    }

    /// Returns a reference to the ith element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfRange` if `i` is not less than `len()`.
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T> {
        let length = self.length;
        self.get_mut(i).ok_or(Failure::OutOfRange { index: i, length })
    }

    /// Returns the elements, as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.storage.as_slice()[..self.length]
    }

    /// Returns the elements, as a slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let length = self.length;
        &mut self.storage.as_mut_slice()[..length]
    }

    /// Returns a pointer to the first slot, or a null pointer if nothing was ever allocated.
    ///
    /// The pointer is stable as long as the instance is not reallocated.
    pub fn as_ptr(&self) -> *const T {
        self.storage.get()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its capacity. The elements are not dropped until they are
    /// overwritten, or the instance itself is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::simple_vector;
    /// let mut vec = simple_vector![1, 2, 3];
    ///
    /// vec.clear();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn clear(&mut self) {
        self.length = 0;
    }

    /// Removes the last element from the logical extent of the instance.
    ///
    /// The element is not dropped until it is overwritten, or the instance itself is dropped.
    ///
    /// The instance should not be empty; this is only checked in Debug, and popping an empty instance otherwise has
    /// no effect.
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back on empty SimpleVector");

        self.length = self.length.saturating_sub(1);
    }

    /// Removes the element at `index`, shifting all elements after it one slot toward the front.
    ///
    /// Returns `index`, which is now the index of the element which followed the erased one, if any.
    ///
    /// `index` should be less than `len()`; this is only checked in Debug, and otherwise panics on the slice bounds.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::simple_vector;
    /// let mut vec = simple_vector![1, 2, 3];
    ///
    /// assert_eq!(0, vec.erase(0));
    /// assert_eq!(&[2, 3], vec.as_slice());
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        debug_assert!(index < self.length, "{} >= {}", index, self.length);

        let length = self.length;

        //  The erased element ends up past the new length.
        self.storage.as_mut_slice()[index..length].rotate_left(1);
        self.length -= 1;

        index
    }

    /// Exchanges the content of `self` and `other`.
    ///
    /// No memory is allocated, no element is moved.
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        mem::swap(&mut self.length, &mut other.length);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Empties the instance, returning the former content as a new instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::simple_vector;
    /// let mut vec = simple_vector![1, 2, 3];
    /// let taken = vec.take();
    ///
    /// assert_eq!(&[1, 2, 3], taken.as_slice());
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a new instance containing `len` default-initialized elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::vector::SimpleVector;
    /// let vec: SimpleVector<i32> = SimpleVector::with_len(3);
    ///
    /// assert_eq!(&[0, 0, 0], vec.as_slice());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn with_len(len: usize) -> Self {
        Self::try_with_len(len).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance containing `len` default-initialized elements.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_with_len(len: usize) -> Result<Self> {
        let storage = ArrayOwner::try_with_len(len)?;

        Ok(Self { storage, length: len, capacity: len })
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// The memory is allocated immediately, unless `capacity` is 0.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::failure::Failure;
    /// #   use simple_vector::vector::SimpleVector;
    /// let vec = SimpleVector::<u64>::try_with_capacity(usize::MAX);
    /// assert_eq!(Some(Failure::BytesOverflow), vec.err());
    ///
    /// let vec = SimpleVector::<u64>::try_with_capacity(4).unwrap();
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let storage = ArrayOwner::try_with_len(capacity)?;

        Ok(Self { storage, length: 0, capacity })
    }

    /// Ensures a capacity of at least `capacity`.
    ///
    /// Calling this method has no effect if the capacity is already sufficient, otherwise the instance is reallocated
    /// with a capacity of exactly `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left unmodified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::failure::Failure;
    /// #   use simple_vector::vector::SimpleVector;
    /// let mut vec: SimpleVector<u64> = SimpleVector::new();
    ///
    /// assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX));
    /// assert_eq!(0, vec.capacity());
    ///
    /// assert_eq!(Ok(()), vec.try_reserve(6));
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity > self.capacity {
            self.try_reallocate(capacity)?;
        }

        Ok(())
    }

    /// Ensures a capacity of at least `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn reserve(&mut self, capacity: usize) {
        self.try_reserve(capacity).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Resizes the instance to `len` elements.
    ///
    /// -   Shrinking merely shortens the logical extent, the elements past `len` are not dropped.
    /// -   Growing default-initializes the new elements, reallocating if necessary to the larger of `len` and twice
    ///     the current capacity.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left unmodified.
    pub fn try_resize(&mut self, len: usize) -> Result<()> {
        if len > self.capacity {
            //  Slots past the current length are freshly default-initialized.
            self.try_reallocate(growth::resized(self.capacity, len))?;
        } else if len > self.length {
            for slot in &mut self.storage.as_mut_slice()[self.length..len] {
                *slot = T::default();
            }
        }

        self.length = len;

        Ok(())
    }

    /// Resizes the instance to `len` elements.
    ///
    /// Calling this method is equivalent to calling `try_resize` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::simple_vector;
    /// let mut vec = simple_vector![1, 2, 3];
    ///
    /// vec.resize(1);
    /// assert_eq!(&[1], vec.as_slice());
    ///
    /// vec.resize(2);
    /// assert_eq!(&[1, 0], vec.as_slice());
    ///
    /// vec.resize(5);
    /// assert_eq!(&[1, 0, 0, 0, 0], vec.as_slice());
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn resize(&mut self, len: usize) {
        self.try_resize(len).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Appends an element to the back.
    ///
    /// If the instance is full, its capacity is doubled first, or set to 1 if it was 0.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left unmodified and `value`
    /// is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        self.try_grow_if_full()?;

        let length = self.length;
        self.storage[length] = value;
        self.length += 1;

        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// Calling this method is equivalent to calling `try_push_back` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::vector::SimpleVector;
    /// let mut vec = SimpleVector::new();
    ///
    /// vec.push_back(1);
    /// assert_eq!(1, vec.capacity());
    ///
    /// vec.push_back(2);
    /// assert_eq!(2, vec.capacity());
    ///
    /// vec.push_back(3);
    /// assert_eq!(4, vec.capacity());
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Inserts `value` at `index`, shifting all elements at and after it one slot toward the back.
    ///
    /// Returns `index`, the index of the inserted element. If the instance is full, it grows as per `push_back`.
    ///
    /// `index` should be less than or equal to `len()`; this is only checked in Debug.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left unmodified and `value`
    /// is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize> {
        debug_assert!(index <= self.length, "{} > {}", index, self.length);

        self.try_grow_if_full()?;

        let length = self.length;
        let slots = self.storage.as_mut_slice();

        slots[length] = value;
        slots[index..=length].rotate_right(1);

        self.length += 1;

        Ok(index)
    }

    /// Inserts `value` at `index`, shifting all elements at and after it one slot toward the back.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::simple_vector;
    /// let mut vec = simple_vector![1, 2, 3];
    ///
    /// assert_eq!(0, vec.insert(0, 0));
    /// assert_eq!(&[0, 1, 2, 3], vec.as_slice());
    ///
    /// assert_eq!(4, vec.insert(vec.len(), 4));
    /// assert_eq!(&[0, 1, 2, 3, 4], vec.as_slice());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Appends multiple elements to the back, growing as per `push_back`.
    ///
    /// #   Errors
    ///
    /// Returns an error if any of the values cannot be pushed. The values pushed before the failure are retained, the
    /// value which failed to be pushed is dropped, and the remainder of `collection` is not consumed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::vector::SimpleVector;
    /// let mut vec = SimpleVector::new();
    ///
    /// assert_eq!(Ok(()), vec.try_extend([1, 2, 3]));
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        for value in collection {
            self.try_push_back(value)?;
        }

        Ok(())
    }

    //  Doubles the capacity if there is no room for another element.
    fn try_grow_if_full(&mut self) -> Result<()> {
        if self.length < self.capacity {
            return Ok(());
        }

        self.try_reallocate(growth::grown(self.capacity)?)
    }

    //  Moves the elements into a new buffer of exactly `capacity` slots.
    //
    //  The old buffer, and whatever stale values it still holds, is dropped once swapped out.
    fn try_reallocate(&mut self, capacity: usize) -> Result<()> {
        debug_assert!(capacity >= self.length);

        let length = self.length;
        let mut storage = ArrayOwner::try_with_len(capacity)?;

        storage.as_mut_slice()[..length].swap_with_slice(&mut self.storage.as_mut_slice()[..length]);

        self.storage.swap(&mut storage);
        self.capacity = capacity;

        Ok(())
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates a new instance containing `len` clones of `value`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use simple_vector::vector::SimpleVector;
    /// let vec = SimpleVector::from_elem(3, 'a');
    ///
    /// assert_eq!(&['a', 'a', 'a'], vec.as_slice());
    /// ```
    pub fn from_elem(len: usize, value: T) -> Self {
        Self::try_from_elem(len, value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance containing `len` clones of `value`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_from_elem(len: usize, value: T) -> Result<Self> {
        let storage = ArrayOwner::try_from_fn(len, |_| value.clone())?;

        Ok(Self { storage, length: len, capacity: len })
    }

    /// Creates a new instance containing clones of `items`, with a capacity of exactly `items.len()`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_from_slice(items: &[T]) -> Result<Self> {
        let length = items.len();
        let storage = ArrayOwner::try_from_fn(length, |i| items[i].clone())?;

        Ok(Self { storage, length, capacity: length })
    }
}

/// A copy has a capacity of exactly its length.
///
/// #   Example
///
/// ```
/// #   use simple_vector::vector::SimpleVector;
/// let mut vec = SimpleVector::with_capacity(8);
/// vec.push_back(1);
///
/// let copy = vec.clone();
///
/// assert_eq!(vec, copy);
/// assert_eq!(1, copy.capacity());
/// ```
impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }

    //  Copy then swap: should cloning panic, `self` is left untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("capacity", &self.capacity)
            .field("length", &self.length)
            .field("items", &self.as_slice())
            .finish()
    }
}

/// Allocates the requested capacity immediately.
///
/// #   Panics
///
/// Panics if the memory cannot be allocated; see `SimpleVector::try_with_capacity` for the faillible equivalent.
impl<T> From<ReserveRequest> for SimpleVector<T>
where
    T: Default,
{
    fn from(request: ReserveRequest) -> Self {
        Self::with_capacity(request.capacity())
    }
}

impl<T> From<Box<[T]>> for SimpleVector<T> {
    fn from(items: Box<[T]>) -> Self {
        let storage = ArrayOwner::from(items);
        let length = storage.len();

        Self { storage, length, capacity: length }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from(items.into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        let items: Box<[T]> = Box::new(items);
        Self::from(items)
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        Self::try_from_slice(items).unwrap_or_else(|failure| panic_from_failure(failure))
    }
}

impl<T: Default> iter::Extend<T> for SimpleVector<T> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }
}

impl<T: Default> iter::FromIterator<T> for SimpleVector<T> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        let mut result = Self::new();
        result.extend(collection);
        result
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut items: Vec<T> = self.storage.release().map(Vec::from).unwrap_or_default();
        items.truncate(self.length);
        items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Unchecked access: the index is only checked against `len()` in Debug.
impl<T> ops::Index<usize> for SimpleVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.length, "{} >= {}", index, self.length);

        &self.storage[index]
    }
}

impl<T> ops::IndexMut<usize> for SimpleVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.length, "{} >= {}", index, self.length);

        &mut self.storage[index]
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

/// Lexicographical ordering of the elements.
///
/// #   Example
///
/// ```
/// #   use simple_vector::simple_vector;
/// assert!(simple_vector![1, 2] < simple_vector![1, 2, 3]);
/// assert!(simple_vector![1, 3] > simple_vector![1, 2, 9]);
/// ```
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: hash::Hash> hash::Hash for SimpleVector<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

//  mod tests
