//! Index-based node storage.

use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A copyable reference to an object stored in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Handle {
    index: usize,
}

impl Handle {
    pub fn index(self) -> usize {
        self.index
    }
}

/// A grow-only allocator for a single type of object.
///
/// Every object is owned by the arena and is destroyed exactly once, when the arena itself is
/// dropped or cleared. Objects refer to each other through `Handle`s, so a handle can be stored
/// in several places without implying ownership.
pub struct Arena<T> {
    blocks: Vec<T>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena { blocks: Vec::new() }
    }

    /// Moves `value` into the arena and returns the handle it can be reached through.
    pub fn allocate(&mut self, value: T) -> Handle {
        self.blocks.push(value);
        Handle {
            index: self.blocks.len() - 1,
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.blocks.get(handle.index)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.blocks.get_mut(handle.index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Destroys every object in the arena. All outstanding handles become dangling.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Consumes the arena, yielding its objects in allocation order. The object behind `handle`
    /// ends up at position `handle.index()`.
    pub fn into_vec(self) -> Vec<T> {
        self.blocks
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Handle};

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new();
        assert_eq!(arena.allocate(0), Handle { index: 0 });
        assert_eq!(arena.allocate(0), Handle { index: 1 });
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_get() {
        let mut arena = Arena::new();
        let handle = arena.allocate(7);
        assert_eq!(arena.get(handle), Some(&7));
        assert_eq!(arena[handle], 7);
    }

    #[test]
    fn test_get_dangling() {
        let arena: Arena<u32> = Arena::new();
        assert_eq!(arena.get(Handle { index: 0 }), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let handle = arena.allocate(0);
        arena[handle] += 2;
        *arena.get_mut(handle).unwrap() += 1;
        assert_eq!(arena[handle], 3);
    }

    #[test]
    #[should_panic]
    fn test_index_after_clear() {
        let mut arena = Arena::new();
        let handle = arena.allocate(0);
        arena.clear();
        let _ = arena[handle];
    }

    #[test]
    fn test_into_vec() {
        let mut arena = Arena::new();
        let first = arena.allocate('a');
        let second = arena.allocate('b');
        let blocks = arena.into_vec();
        assert_eq!(blocks[first.index()], 'a');
        assert_eq!(blocks[second.index()], 'b');
    }
}
