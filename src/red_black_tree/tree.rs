use crate::arena::{Arena, Handle};
use crate::red_black_tree::node::{Color, Node};
use std::cmp::{self, Ordering};

/// The nodes of a red black tree together with a handle to its root.
///
/// Every node lives in `arena`, which is the sole owner of all of them: dropping the tree
/// destroys each node exactly once.
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Option<Handle>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<Handle> {
        self.root
    }

    pub fn node(&self, handle: Handle) -> &Node<T> {
        &self.arena[handle]
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn is_red(&self, handle: Option<Handle>) -> bool {
        match handle {
            None => false,
            Some(handle) => self.arena[handle].color == Color::Red,
        }
    }

    // Points whatever referred to `old` (its parent's child slot, or the root) at `new`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Handle) {
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = Some(new);
                } else {
                    node.right = Some(new);
                }
            },
        }
    }

    fn rotate_left(&mut self, handle: Handle) {
        trace!("rotating red black subtree left");
        let child = self.arena[handle]
            .right
            .expect("Expected right child node to be `Some`.");
        let inner = self.arena[child].left;
        let parent = self.arena[handle].parent;

        self.arena[handle].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(handle);
        }
        self.arena[child].parent = parent;
        self.replace_child(parent, handle, child);
        self.arena[child].left = Some(handle);
        self.arena[handle].parent = Some(child);
    }

    fn rotate_right(&mut self, handle: Handle) {
        trace!("rotating red black subtree right");
        let child = self.arena[handle]
            .left
            .expect("Expected left child node to be `Some`.");
        let inner = self.arena[child].right;
        let parent = self.arena[handle].parent;

        self.arena[handle].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(handle);
        }
        self.arena[child].parent = parent;
        self.replace_child(parent, handle, child);
        self.arena[child].right = Some(handle);
        self.arena[handle].parent = Some(child);
    }

    /// Inserts `key` with an iterative descent, then restores the color invariants. Returns
    /// `false` and leaves the tree untouched if the key is already present.
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let mut parent = None;
        let mut curr = self.root;
        let mut side = Ordering::Equal;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            side = key.cmp(&node.key);
            parent = curr;
            curr = match side {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return false,
            };
        }

        let handle = self.arena.allocate(Node::new(key, parent));
        match parent {
            None => self.root = Some(handle),
            Some(parent) => {
                if side == Ordering::Less {
                    self.arena[parent].left = Some(handle);
                } else {
                    self.arena[parent].right = Some(handle);
                }
            },
        }

        self.fix_insert(handle);
        true
    }

    // Walks up from a freshly inserted red node while its parent is also red.
    fn fix_insert(&mut self, mut handle: Handle) {
        loop {
            let parent = match self.arena[handle].parent {
                Some(parent) if self.arena[parent].color == Color::Red => parent,
                _ => break,
            };
            // the root is black, so a red parent always has a parent of its own
            let grandparent = self.arena[parent]
                .parent
                .expect("Expected a red node to have a parent.");
            let parent_is_left = self.arena[grandparent].left == Some(parent);
            let uncle = if parent_is_left {
                self.arena[grandparent].right
            } else {
                self.arena[grandparent].left
            };

            match uncle {
                Some(uncle) if self.arena[uncle].color == Color::Red => {
                    trace!("pushing red black violation up to grandparent");
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    handle = grandparent;
                },
                _ => {
                    let mut parent = parent;
                    if parent_is_left {
                        if self.arena[parent].right == Some(handle) {
                            self.rotate_left(parent);
                            parent = handle;
                        }
                        self.arena[parent].color = Color::Black;
                        self.arena[grandparent].color = Color::Red;
                        self.rotate_right(grandparent);
                    } else {
                        if self.arena[parent].left == Some(handle) {
                            self.rotate_right(parent);
                            parent = handle;
                        }
                        self.arena[parent].color = Color::Black;
                        self.arena[grandparent].color = Color::Red;
                        self.rotate_left(grandparent);
                    }
                    break;
                },
            }
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }

    pub fn find(&self, key: &T) -> Option<Handle>
    where
        T: Ord,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Greater => node.right,
                Ordering::Less => {
                    ret = Some(&node.key);
                    node.left
                },
                Ordering::Equal => return Some(&node.key),
            };
        }
        ret
    }

    pub fn floor(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    ret = Some(&node.key);
                    node.right
                },
                Ordering::Equal => return Some(&node.key),
            };
        }
        ret
    }

    pub fn min(&self) -> Option<&T> {
        self.root.map(|mut handle| {
            while let Some(left) = self.arena[handle].left {
                handle = left;
            }
            &self.arena[handle].key
        })
    }

    pub fn max(&self) -> Option<&T> {
        self.root.map(|mut handle| {
            while let Some(right) = self.arena[handle].right {
                handle = right;
            }
            &self.arena[handle].key
        })
    }

    fn subtree_height(&self, handle: Option<Handle>) -> usize {
        match handle {
            None => 0,
            Some(handle) => {
                let node = &self.arena[handle];
                cmp::max(self.subtree_height(node.left), self.subtree_height(node.right)) + 1
            },
        }
    }

    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// Number of black nodes on the path from the root to its leftmost absent child. Every other
    /// such path has the same count.
    pub fn black_height(&self) -> usize {
        let mut ret = 0;
        let mut curr = self.root;
        while let Some(handle) = curr {
            if !self.is_red(curr) {
                ret += 1;
            }
            curr = self.arena[handle].left;
        }
        ret
    }

    fn push_in_order(&self, handle: Option<Handle>, handles: &mut Vec<Handle>) {
        if let Some(handle) = handle {
            let node = &self.arena[handle];
            self.push_in_order(node.left, handles);
            handles.push(handle);
            self.push_in_order(node.right, handles);
        }
    }

    /// Consumes the tree, yielding its keys in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.arena.len());
        self.push_in_order(self.root, &mut order);

        let mut keys = self
            .arena
            .into_vec()
            .into_iter()
            .map(|node| Some(node.key))
            .collect::<Vec<Option<T>>>();
        order
            .into_iter()
            .filter_map(|handle| keys[handle.index()].take())
            .collect()
    }

    /// Collects `(depth, key)` pairs in reverse in-order, which is the order rows appear in a
    /// sideways rendering of the tree.
    pub fn sideways<'a>(
        &'a self,
        handle: Option<Handle>,
        depth: usize,
        rows: &mut Vec<(usize, &'a T)>,
    ) {
        if let Some(handle) = handle {
            let node = &self.arena[handle];
            self.sideways(node.right, depth + 1, rows);
            rows.push((depth, &node.key));
            self.sideways(node.left, depth + 1, rows);
        }
    }
}
