//! #   The ArrayOwner.
//!
//! The `ArrayOwner` is the exclusive owner of a single contiguous heap-allocated buffer, much like a `Box<[T]>`, with
//! the additional possibility of owning nothing at all.
//!
//! It is the storage building block of the `SimpleVector`, and knows nothing of length or capacity: all its slots are
//! initialized, and all are dropped when the buffer is freed.
//!
//! #   Example
//!
//! ```
//! use simple_vector::array::ArrayOwner;
//!
//! let mut owner: ArrayOwner<i32> = ArrayOwner::with_len(3);
//! owner[1] = 4;
//!
//! assert_eq!(&[0, 4, 0], owner.as_slice());
//!
//! //  Ownership is transferred by moving, or by taking.
//! let mut other = owner.take();
//! assert!(!owner.is_allocated());
//!
//! //  Or relinquished altogether.
//! let buffer = other.release();
//! assert_eq!(Some(&[0, 4, 0][..]), buffer.as_deref());
//! assert!(!other.is_allocated());
//! ```

mod allocation;
mod owner;

pub use self::owner::ArrayOwner;

use super::failure;
use super::root;
