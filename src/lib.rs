#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Simple Vector Library
//!
//! A minimal growable array, in two layers:
//! -   The `ArrayOwner`: the exclusive owner of a single heap-allocated buffer.
//! -   The `SimpleVector`: a `Vec`-like container built atop an `ArrayOwner`, tracking length and capacity.
//!
//! The `SimpleVector` doubles its capacity whenever it runs out of room, and offers both unchecked and checked
//! access to its elements.

#[cfg(not(feature = "with-std"))]
extern crate alloc;

pub mod array;
pub mod failure;
pub mod vector;

mod utils;

use self::utils::root;
