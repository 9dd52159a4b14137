//! Property-based tests verifying the index mapper is a bijection.
//!
//! For every shape: find_index(unravel_index(i)) == i for i in 0..count, and
//! every in-range coordinate maps into 0..count.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::collections::HashSet;

use ctrlgrid::{
    CpManager, Shape, find_index,
    index::unravel_index,
};
use proptest::{collection::vec, prelude::*};

/// Shapes with one to four parametric dimensions and small sizes.
fn shapes() -> impl Strategy<Value = Vec<usize>> {
    vec(1usize..6, 1..=4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every flat index survives a trip through coordinates.
    #[test]
    fn index_roundtrip(size in shapes()) {
        let count = Shape::new(&size).expect("valid shape").count();
        for i in 0..count {
            let coords = unravel_index(&size, i);
            prop_assert_eq!(find_index(&size, &coords), i);
        }
    }

    /// Distinct in-range coordinates never collide.
    #[test]
    fn mapping_is_injective(size in shapes()) {
        let count: usize = size.iter().product();
        let mut seen = HashSet::new();
        let mut coords = vec![0usize; size.len()];
        for _ in 0..count {
            let idx = find_index(&size, &coords);
            prop_assert!(idx < count, "{:?} -> {} out of range", coords, idx);
            prop_assert!(seen.insert(idx), "{:?} collides at {}", coords, idx);
            for (axis, c) in coords.iter_mut().enumerate() {
                *c += 1;
                if *c < size[axis] {
                    break;
                }
                *c = 0;
            }
        }
        prop_assert_eq!(seen.len(), count);
    }

    /// Setting then reading a point at the same position is exact.
    #[test]
    fn set_get_roundtrip(
        size in shapes(),
        point in vec(-1.0e6f64..1.0e6, 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut cm = CpManager::new(&size).expect("valid shape");
        let coords = unravel_index(&size, pick.index(cm.count()));
        cm.set_pt(&point, &coords).expect("in range");
        prop_assert_eq!(cm.pt(&coords).expect("in range").as_slice(), point.as_slice());
        prop_assert!(cm.is_changed());
    }
}

/// The documented example position.
#[test]
fn known_offsets() {
    assert_eq!(find_index(&[6, 7, 11], &[2, 1, 5]), 2 + 6 + 5 * 6 * 7);
    assert_eq!(find_index(&[6, 7, 11], &[0, 0, 0]), 0);
    assert_eq!(find_index(&[6, 7, 11], &[5, 6, 10]), 6 * 7 * 11 - 1);
}
