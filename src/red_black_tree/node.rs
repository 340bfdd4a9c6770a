use crate::arena::Handle;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// `left` and `right` are the structural edges of the tree. `parent` only mirrors them so that
/// the insertion fixup can walk upwards; it never decides when a node is destroyed.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Option<Handle>) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }
}
