//! Property tests of the SimpleVector, checked against `Vec`.

use proptest::prelude::*;

use super::{reserve, SimpleVector};

#[derive(Clone, Debug)]
enum Operation {
    PushBack(u32),
    PopBack,
    Insert(usize, u32),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<u32>().prop_map(Operation::PushBack),
        1 => Just(Operation::PopBack),
        2 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Operation::Insert(i, v)),
        1 => any::<usize>().prop_map(Operation::Erase),
        1 => (0usize..64).prop_map(Operation::Resize),
        1 => (0usize..64).prop_map(Operation::Reserve),
        1 => Just(Operation::Clear),
    ]
}

//  Applies `operation` to both, keeping indexes within bounds.
fn apply(vec: &mut SimpleVector<u32>, model: &mut Vec<u32>, operation: Operation) {
    match operation {
        Operation::PushBack(value) => {
            vec.push_back(value);
            model.push(value);
        },
        Operation::PopBack => {
            if !model.is_empty() {
                vec.pop_back();
                model.pop();
            }
        },
        Operation::Insert(index, value) => {
            let index = index % (model.len() + 1);
            assert_eq!(index, vec.insert(index, value));
            model.insert(index, value);
        },
        Operation::Erase(index) => {
            if !model.is_empty() {
                let index = index % model.len();
                assert_eq!(index, vec.erase(index));
                model.remove(index);
            }
        },
        Operation::Resize(len) => {
            vec.resize(len);
            model.resize(len, 0);
        },
        Operation::Reserve(capacity) => {
            vec.reserve(capacity);
        },
        Operation::Clear => {
            vec.clear();
            model.clear();
        },
    }
}

proptest! {
    #[test]
    fn matches_vec(operations in proptest::collection::vec(operation(), 0..64)) {
        let mut vec = SimpleVector::new();
        let mut model = Vec::new();

        for operation in operations {
            apply(&mut vec, &mut model, operation);

            prop_assert!(vec.len() <= vec.capacity());
            prop_assert_eq!(model.as_slice(), vec.as_slice());
        }
    }

    #[test]
    fn push_back_growth(n in 0usize..2048) {
        let mut vec = SimpleVector::new();
        let mut reallocations = 0u32;
        let mut pointer = vec.as_ptr();

        for i in 0..n {
            vec.push_back(i as u64);

            if vec.as_ptr() != pointer {
                reallocations += 1;
                pointer = vec.as_ptr();
            }
        }

        prop_assert!(vec.capacity() >= n);
        prop_assert!(vec.capacity() < 2 * n.max(1));
        //  One reallocation per power of 2, up to and including the capacity.
        prop_assert_eq!(if n == 0 { 0 } else { vec.capacity().trailing_zeros() + 1 }, reallocations);
    }

    #[test]
    fn reserve_smaller_is_stable(
        items in proptest::collection::vec(any::<u8>(), 1..32),
        requested in 0usize..64,
    ) {
        let mut vec = SimpleVector::from(items.clone());
        let capacity = vec.capacity();
        let pointer = vec.as_ptr();

        vec.reserve(requested);

        if requested <= capacity {
            prop_assert_eq!(capacity, vec.capacity());
            prop_assert_eq!(pointer, vec.as_ptr());
        } else {
            prop_assert_eq!(requested, vec.capacity());
        }

        prop_assert_eq!(items.as_slice(), vec.as_slice());
    }

    #[test]
    fn equality_across_construction(items in proptest::collection::vec(any::<i16>(), 0..32)) {
        let literal = SimpleVector::from(items.as_slice());
        let pushed: SimpleVector<_> = items.iter().copied().collect();

        let mut reserved = SimpleVector::from(reserve(items.len()));
        reserved.extend(items.iter().copied());

        prop_assert_eq!(&literal, &pushed);
        prop_assert_eq!(&literal, &reserved);
        prop_assert_eq!(items.len(), reserved.capacity());
    }

    #[test]
    fn ordering_is_lexicographic(
        a in proptest::collection::vec(0u8..4, 0..6),
        b in proptest::collection::vec(0u8..4, 0..6),
    ) {
        let (x, y) = (SimpleVector::from(a.as_slice()), SimpleVector::from(b.as_slice()));

        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        prop_assert_eq!(a == b, x == y);
    }

    #[test]
    fn at_bounds(items in proptest::collection::vec(any::<u8>(), 1..32)) {
        let vec = SimpleVector::from(items.as_slice());

        prop_assert!(vec.at(vec.len() - 1).is_ok());
        prop_assert!(vec.at(vec.len()).is_err());
    }

    #[test]
    fn clear_is_idempotent(items in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut once = SimpleVector::from(items.as_slice());
        once.clear();

        let mut twice = SimpleVector::from(items.as_slice());
        twice.clear();
        twice.clear();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.capacity(), twice.capacity());
        prop_assert_eq!(items.len(), twice.capacity());
    }
}
