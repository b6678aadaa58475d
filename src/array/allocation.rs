//! Raw allocation of fully initialized buffers.

use super::root::{alloc, boxed::Box, mem, ptr};

use super::failure::{Failure, Result};

/// Layout, re-exported.
pub type Layout = alloc::Layout;

//  Allocates a buffer of `len` elements, the ith element being initialized with `fill(i)`.
//
//  Zero-sized layouts, whether because `len` is 0 or because `T` is zero-sized, do not allocate. Every element is
//  nonetheless produced by `fill`, hence the cost is linear in `len` even for zero-sized `T`.
//
//  If `fill` panics, the elements initialized so far are dropped and the memory is released.
//
//  #   Errors
//
//  -   BytesOverflow, if the size of the buffer in bytes overflows.
//  -   ElementsOverflow, if `T` is zero-sized and `len` exceeds `MAX_ZERO_SIZED_ELEMENTS`.
//  -   OutOfMemory, if the global allocator fails to provide the memory.
pub fn try_allocate_with<T, F>(len: usize, mut fill: F) -> Result<Box<[T]>>
where
    F: FnMut(usize) -> T,
{
    let layout = allocation_layout::<T>(len)?;

    let pointer = if layout.size() == 0 {
        ptr::NonNull::<T>::dangling().as_ptr()
    } else {
        //  Safety:
        //  -   The size of the layout is non-zero.
        let raw = unsafe { alloc::alloc(layout) };

        if raw.is_null() { return Err(Failure::OutOfMemory) }

        //  The layout guarantees the alignment of T.
        raw as *mut T
    };

    let mut partial = PartialBuffer { pointer, initialized: 0, layout };

    for index in 0..len {
        let value = fill(index);

        //  Safety:
        //  -   index is within the allocated extent.
        //  -   The slot at index is not yet initialized.
        unsafe { ptr::write(pointer.add(index), value) };

        partial.initialized += 1;
    }

    mem::forget(partial);

    //  Safety:
    //  -   pointer was allocated by the global allocator with the layout of `[T; len]`, or is dangling and suitably
    //      aligned for a zero-sized layout.
    //  -   All `len` elements are initialized.
    Ok(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(pointer, len)) })
}

//  Maximum number of elements of a zero-sized buffer, matching the bound on any other buffer.
pub const MAX_ZERO_SIZED_ELEMENTS: usize = isize::MAX as usize;

//  Computes the layout for a given number of elements.
//
//  #   Fails
//
//  -   If the necessary size overflows.
//  -   If `T` is zero-sized and `len` exceeds `MAX_ZERO_SIZED_ELEMENTS`.
pub fn allocation_layout<T>(len: usize) -> Result<Layout> {
    if mem::size_of::<T>() == 0 && len > MAX_ZERO_SIZED_ELEMENTS {
        return Err(Failure::ElementsOverflow);
    }

    Layout::array::<T>(len).map_err(|_| Failure::BytesOverflow)
}

//
//  Implementation Details
//

//  A buffer in the process of being initialized.
//
//  Only the first `initialized` elements are initialized.
struct PartialBuffer<T> {
    pointer: *mut T,
    initialized: usize,
    layout: Layout,
}

impl<T> Drop for PartialBuffer<T> {
    fn drop(&mut self) {
        //  Safety:
        //  -   The first `initialized` elements are initialized.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.pointer, self.initialized)) };

        if self.layout.size() == 0 {
            return;
        }

        //  Safety:
        //  -   The pointer was allocated with this very layout, by the global allocator.
        unsafe { alloc::dealloc(self.pointer as *mut u8, self.layout) };
    }
}
