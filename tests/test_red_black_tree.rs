extern crate balanced_trees;
extern crate rand;

use self::rand::Rng;
use balanced_trees::red_black_tree::{Color, RedBlackSet};
use std::collections::BTreeSet;
use std::vec::Vec;

const NUM_OF_OPERATIONS: usize = 100_000;

// Upper bound on the height of a red black tree with `len` nodes.
fn max_height(len: usize) -> usize {
    2 * ((len + 1) as f64).log2().ceil() as usize
}

#[test]
fn int_test_red_black_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut expected = BTreeSet::new();
    for i in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 50_000);

        assert_eq!(set.insert(key), expected.insert(key));
        assert_eq!(set.root_color(), Some(Color::Black));
        if i % 1_000 == 0 {
            assert!(set.height() <= max_height(set.len()));
        }
    }

    assert_eq!(set.len(), expected.len());
    assert!(set.height() <= max_height(set.len()));
    assert!(set.black_height() * 2 >= set.height());
    assert_eq!(set.min(), expected.iter().next());
    assert_eq!(set.max(), expected.iter().next_back());

    for key in 0..50_000 {
        assert_eq!(set.contains(&key), expected.contains(&key));
    }
    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert_eq!(
        set.into_iter().collect::<Vec<u32>>(),
        expected.into_iter().collect::<Vec<u32>>(),
    );
}

#[test]
fn int_test_red_black_set_sequential() {
    let mut set = RedBlackSet::new();
    for key in (0..NUM_OF_OPERATIONS).rev() {
        assert!(set.insert(key));
    }
    assert_eq!(set.len(), NUM_OF_OPERATIONS);
    assert!(set.height() <= max_height(NUM_OF_OPERATIONS));
    assert_eq!(
        set.iter().cloned().collect::<Vec<usize>>(),
        (0..NUM_OF_OPERATIONS).collect::<Vec<usize>>(),
    );
}
