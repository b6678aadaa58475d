//! #   The SimpleVector.
//!
//! The `SimpleVector` is a growable array: a contiguous buffer, owned by an `ArrayOwner`, of which only the first
//! `len()` elements are logically present.
//!
//! ##  Under the covers.
//!
//! The `SimpleVector` tracks two counters:
//!
//! -   The length, the number of elements present.
//! -   The capacity, the number of slots of the buffer.
//!
//! Every slot of the buffer is initialized at all times, slots past the length holding either default values or the
//! remnants of popped, cleared, or erased elements. The main consequences are:
//!
//! -   Growing requires `T: Default`, so as to fill the new slots.
//! -   Popping, clearing, or erasing does not drop the element; it is dropped when overwritten, or when the buffer is
//!     released.
//!
//! #   Example: basic
//!
//! General usage of `SimpleVector` involves pushing elements with `push_back`, and accessing them by index.
//!
//! The faillible equivalents exist too: `try_push_back`, `try_insert`, `try_resize` and `try_reserve` will return a
//! `Result` indicating whether the operation succeeded, and the cause of its failure if it did not.
//!
//! ```
//! use simple_vector::vector::SimpleVector;
//!
//! let mut vec = SimpleVector::new();
//! vec.push_back(1);
//! vec.push_back(2);
//!
//! assert_eq!(2, vec.len());
//! assert_eq!(1, vec[0]);
//!
//! vec.extend([3, 4, 5]);
//!
//! assert_eq!(5, vec.len());
//! assert_eq!(4, vec[3]);
//!
//! for x in &vec {
//!     println!("{}", x);
//! }
//! ```
//!
//! #   Example: accessing elements
//!
//! `SimpleVector` provides multiple ways to access elements:
//!
//! -   The `Index` and `IndexMut` traits provide unchecked access: the index is checked against the length in Debug
//!     only, and against the capacity otherwise.
//! -   The `at` and `at_mut` methods provide checked access, failing with `Failure::OutOfRange`.
//! -   The `get` and `get_mut` methods provide checked access, returning an `Option`.
//!
//! ```
//! use simple_vector::failure::Failure;
//! use simple_vector::simple_vector;
//!
//! let mut vec = simple_vector![1, 2, 3];
//!
//! assert_eq!(Ok(&1), vec.at(0));
//! assert_eq!(Err(Failure::OutOfRange { index: 3, length: 3 }), vec.at(3));
//!
//! assert_eq!(Some(&2), vec.get(1));
//! assert_eq!(None, vec.get(3));
//!
//! vec[2] = 9;
//! assert_eq!(9, vec[2]);
//! ```
//!
//! #   Example: managing capacity
//!
//! `SimpleVector` provides multiple ways to manage the capacity available:
//!
//! -   Appending to a full instance doubles its capacity, starting from 1.
//! -   Resizing past the capacity grows to the larger of twice the capacity and the requested length.
//! -   The `reserve` function builds a request from which to construct an instance of a given capacity.
//! -   The `reserve` and `try_reserve` methods grow the capacity to exactly the requested amount, if larger.
//!
//! ```
//! use simple_vector::failure::Failure;
//! use simple_vector::vector::{reserve, SimpleVector};
//!
//! let mut vec: SimpleVector<u64> = SimpleVector::from(reserve(3));
//! assert_eq!(3, vec.capacity());
//!
//! vec.extend([1, 2, 3, 4]);
//! assert_eq!(6, vec.capacity());
//!
//! vec.resize(13);
//! assert_eq!(13, vec.capacity());
//!
//! //  Attempting to reserve more than can be addressed is not possible, and leaves the instance untouched.
//! assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX));
//! assert_eq!(13, vec.capacity());
//! ```
//!
//! #   Example: sharing is caring
//!
//! A `SimpleVector<T>` can be sent, or shared, across threads whenever `T` can. Mutation requires exclusive access,
//! hence concurrent mutation is ruled out at compile-time.
//!
//! ```
//! use simple_vector::simple_vector;
//!
//! fn ensure_send<T: Send>(_: T) {}
//! fn ensure_sync<T: Sync>(_: T) {}
//!
//! let vec = simple_vector!["Hello".to_string()];
//!
//! ensure_sync(&vec);
//! ensure_send(vec);
//! ```
//!
//! Types that are not Send, however, prevent from sending `SimpleVector` across threads.
//!
//! ```compile_fail
//! use std::rc::Rc;
//! use simple_vector::simple_vector;
//!
//! fn ensure_send<T: Send>(_: T) {}
//!
//! let vec = simple_vector![Rc::new(3)];
//!
//! ensure_send(vec);
//! ```

mod growth;
mod reserve;
mod vector;

#[cfg(test)]
mod properties;

pub use self::reserve::{reserve, ReserveRequest};
pub use self::vector::SimpleVector;

use super::array;
use super::failure;
use super::root;

/// Creates a `SimpleVector` containing the arguments.
///
/// -   `simple_vector![]` creates an empty instance.
/// -   `simple_vector![a, b, c]` creates an instance containing the given elements, in order.
/// -   `simple_vector![value; n]` creates an instance containing `n` clones of `value`.
///
/// In all cases, the capacity is exactly the length.
///
/// #   Example
///
/// ```
/// use simple_vector::simple_vector;
///
/// let vec = simple_vector![1, 2, 3];
/// assert_eq!(&[1, 2, 3], vec.as_slice());
/// assert_eq!(3, vec.capacity());
///
/// let vec = simple_vector!['x'; 2];
/// assert_eq!(&['x', 'x'], vec.as_slice());
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::vector::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::vector::SimpleVector::from_elem($n, $value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::vector::SimpleVector::from([$($x),+])
    };
}
