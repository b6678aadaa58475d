//! The growth policy of the SimpleVector.

use super::root::cmp;

use super::failure::{Failure, Result};

//  Returns the capacity to grow to when full: 1 if empty, twice the current capacity otherwise.
//
//  #   Fails
//
//  -   If doubling overflows.
pub fn grown(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Ok(1);
    }

    capacity.checked_mul(2).ok_or(Failure::ElementsOverflow)
}

//  Returns the capacity to grow to in order to accomodate `target` elements at once.
//
//  Twice the current capacity, unless insufficient to reach `target`.
pub fn resized(capacity: usize, target: usize) -> usize {
    capacity.checked_mul(2).map_or(target, |doubled| cmp::max(target, doubled))
}
