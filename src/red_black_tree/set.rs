use crate::arena::Handle;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::Tree;
use crate::shape;
use std::fmt::Display;
use std::vec;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree where every node is colored red or
/// black. The root is black, no red node has a red child, and every path from a node down to an
/// absent child passes through the same number of black nodes. Together these keep the longest
/// path at most twice as long as the shortest one.
///
/// Each node keeps a reference to its parent so that the fixup after an insertion can walk back
/// towards the root without recursion. Keys cannot be removed once inserted; duplicate keys are
/// rejected and leave the set untouched.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::{Color, RedBlackSet};
///
/// let mut set = RedBlackSet::new();
/// for key in &[10, 20, 30, 15, 25] {
///     set.insert(*key);
/// }
///
/// assert_eq!(set.len(), 5);
/// assert_eq!(set.root_color(), Some(Color::Black));
/// assert_eq!(
///     set.iter().collect::<Vec<&u32>>(),
///     vec![&10, &15, &20, &25, &30],
/// );
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
    len: usize,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            tree: Tree::new(),
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `false` if the key was already present, in which case
    /// the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = self.tree.insert(key);
        if inserted {
            self.len += 1;
        } else {
            debug!("ignoring duplicate key in red black set");
        }
        inserted
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.tree.find(key).is_some()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty set has
    /// a height of zero.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the number of black nodes on any path from the root to an absent child.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.black_height(), 0);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.black_height(), 1);
    /// ```
    pub fn black_height(&self) -> usize {
        self.tree.black_height()
    }

    /// Returns the color of the root, or `None` if the set is empty. A non-empty set always has
    /// a black root.
    pub fn root_color(&self) -> Option<Color> {
        self.tree.root().map(|handle| self.tree.node(handle).color)
    }

    /// Returns the color of the node holding `key`, or `None` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::{Color, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.color(&1), Some(Color::Black));
    /// assert_eq!(set.color(&2), Some(Color::Red));
    /// assert_eq!(set.color(&3), None);
    /// ```
    pub fn color(&self, key: &T) -> Option<Color>
    where
        T: Ord,
    {
        self.tree.find(key).map(|handle| self.tree.node(handle).color)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.tree.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.tree.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal,
    /// and every call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<T> {
        RedBlackSetIter {
            tree: &self.tree,
            current: self.tree.root(),
            stack: Vec::new(),
        }
    }

    /// Renders the tree sideways: the root sits in the leftmost column, right subtrees are
    /// printed above their parent and left subtrees below it.
    pub fn shape(&self) -> String
    where
        T: Display,
    {
        let mut rows = Vec::with_capacity(self.len);
        self.tree.sideways(self.tree.root(), 0, &mut rows);
        shape::render(rows)
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            keys: self.tree.into_sorted_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    keys: vec::IntoIter<T>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T>
where
    T: 'a,
{
    tree: &'a Tree<T>,
    current: Option<Handle>,
    stack: Vec<Handle>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.current = self.tree.node(handle).left;
            self.stack.push(handle);
        }
        let tree = self.tree;
        self.stack.pop().map(|handle| {
            let node = tree.node(handle);
            self.current = node.right;
            &node.key
        })
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use crate::red_black_tree::Color;

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.root_color(), None);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_min_max_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.root_color(), Some(Color::Black));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_scenario() {
        let mut set = RedBlackSet::new();
        for key in &[10, 20, 30, 15, 25] {
            set.insert(*key);
        }
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&10, &15, &20, &25, &30]);
        assert_eq!(set.root_color(), Some(Color::Black));
        assert_eq!(set.color(&15), Some(Color::Red));
        assert_eq!(set.color(&25), Some(Color::Red));
        assert_eq!(set.black_height(), 2);
        assert_eq!(set.height(), 3);
    }

    #[test]
    fn test_min_max() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_shape() {
        let mut set = RedBlackSet::new();
        for key in &[10, 20, 30] {
            set.insert(*key);
        }
        assert_eq!(set.shape(), "\n          30\n\n20\n\n          10\n");
    }

    #[test]
    fn test_clear() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().next(), None);
        assert!(set.insert(2));
        assert_eq!(set.root_color(), Some(Color::Black));
    }

    #[test]
    fn test_into_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&set).into_iter().count(), 3);
    }
}
