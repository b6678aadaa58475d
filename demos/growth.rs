//! A simple growth example.
//!
//! In this example, elements are appended one at a time, and each reallocation is reported along with the new
//! capacity.
//!
//! Then the vector is resized well past its capacity, which grows it straight to the requested length.

extern crate simple_vector;

use simple_vector::vector::{reserve, SimpleVector};

fn main() {
    const NUMBER_ELEMENTS: u32 = 20;

    let mut vec = SimpleVector::new();
    let mut pointer = vec.as_ptr();

    for i in 0..NUMBER_ELEMENTS {
        vec.push_back(i);

        if vec.as_ptr() != pointer {
            println!("Reallocated at length {}: capacity {}", vec.len(), vec.capacity());
            pointer = vec.as_ptr();
        }
    }

    vec.resize(100);
    println!("Resized to length {}: capacity {}", vec.len(), vec.capacity());

    let reserved: SimpleVector<u32> = SimpleVector::from(reserve(16));
    println!("Reserved: length {}, capacity {}", reserved.len(), reserved.capacity());

    match vec.at(100) {
        Ok(x) => println!("Unexpected element: {}", x),
        Err(failure) => println!("Checked access failed: {}", failure),
    }
}
