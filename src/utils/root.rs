//! Re-export core/alloc/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{cmp, fmt, hash, iter, mem, ops, ptr, result, slice};

#[cfg(not(feature = "with-std"))]
pub use ::alloc::{alloc, boxed, vec};

#[cfg(feature = "with-std")]
pub use std::{alloc, boxed, cmp, fmt, hash, iter, mem, ops, ptr, result, slice, vec};

#[cfg(feature = "with-std")]
pub use std::error;

#[cfg(not(feature = "with-std"))]
pub mod error {

pub trait Error : super::fmt::Debug + super::fmt::Display {}

}
