use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::shape;
use std::fmt::Display;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every node caches the height
/// of its subtree, and after each insertion or removal the nodes on the path back to the root
/// are rotated wherever that invariant is broken.
///
/// Duplicate keys are rejected: inserting a key that is already present leaves the set
/// untouched.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(30);
/// set.insert(24);
/// set.insert(20);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.height(), 2);
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&20, &24, &30]);
///
/// assert!(set.remove(&24));
/// assert!(!set.remove(&35));
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None, len: 0 }
    }

    /// Inserts a key into the set. Returns `false` if the key was already present, in which case
    /// the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        } else {
            debug!("ignoring duplicate key in avl set");
        }
        inserted
    }

    /// Removes a key from the set. Returns `false` if the key was absent, in which case the set
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        let removed = tree::remove(&mut self.tree, key);
        if removed {
            self.len -= 1;
        } else {
            debug!("ignoring removal of absent key from avl set");
        }
        removed
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        tree::find(&self.tree, key).is_some()
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
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty set has
    /// a height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), 0);
    /// for key in 0..7 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the height of the left subtree minus the height of the right subtree of the node
    /// holding `key`, or `None` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.balance_factor(&2), Some(1));
    /// assert_eq!(set.balance_factor(&1), Some(0));
    /// assert_eq!(set.balance_factor(&3), None);
    /// ```
    pub fn balance_factor(&self, key: &T) -> Option<i32>
    where
        T: Ord,
    {
        tree::find(&self.tree, key).map(|node| node.balance())
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal,
    /// and every call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Renders the tree sideways: the root sits in the leftmost column, right subtrees are
    /// printed above their parent and left subtrees below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.shape(), "\n          3\n\n2\n\n          1\n");
    /// ```
    pub fn shape(&self) -> String
    where
        T: Display,
    {
        let mut rows = Vec::with_capacity(self.len);
        tree::sideways(&self.tree, 0, &mut rows);
        shape::render(rows)
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type IntoIter = AvlSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref key, ref right, ..
            } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_absent() {
        let mut set = AvlSet::new();
        set.insert(30);
        set.insert(24);
        set.insert(20);
        set.insert(31);
        assert!(!set.remove(&35));
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&20, &24, &30, &31]);
    }

    #[test]
    fn test_min_max() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = AvlSet::new();
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
    fn test_balance_factor() {
        let mut set = AvlSet::new();
        for key in &[30, 24, 20, 31] {
            set.insert(*key);
        }
        assert_eq!(set.balance_factor(&24), Some(-1));
        assert_eq!(set.balance_factor(&30), Some(-1));
        assert_eq!(set.balance_factor(&20), Some(0));
        assert_eq!(set.balance_factor(&35), None);
    }

    #[test]
    fn test_shape() {
        let mut set = AvlSet::new();
        for key in &[30, 24, 20, 31] {
            set.insert(*key);
        }
        assert_eq!(
            set.shape(),
            "\n                    31\n\n          30\n\n24\n\n          20\n",
        );
    }

    #[test]
    fn test_clear() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&set).into_iter().count(), 3);
    }
}
