use crate::avl_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// The position of a newly inserted key relative to the root of the subtree it was inserted
/// into.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Landing {
    Root,
    Left,
    Right,
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating avl subtree left");
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating avl subtree right");
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the height invariant at the root of `tree`, assuming both of its subtrees already
// satisfy it. When `landing` is given, the double rotation is chosen by where an inserted key
// ended up inside the heavy child; otherwise by the heavy child's balance factor.
fn rebalance<T>(tree: &mut Tree<T>, landing: Option<Landing>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let balance = node.balance();
    if balance > 1 {
        let inner = match landing {
            Some(landing) => landing == Landing::Right,
            None => balance_factor(&node.left) < 0,
        };
        if inner {
            let child = node
                .left
                .take()
                .expect("Expected left child node to be `Some`.");
            node.left = Some(rotate_left(child));
        }
        node = rotate_right(node);
    } else if balance < -1 {
        let inner = match landing {
            Some(landing) => landing == Landing::Left,
            None => balance_factor(&node.right) > 0,
        };
        if inner {
            let child = node
                .right
                .take()
                .expect("Expected right child node to be `Some`.");
            node.right = Some(rotate_right(child));
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

fn insert_landing<T>(tree: &mut Tree<T>, key: T) -> Option<Landing>
where
    T: Ord,
{
    let (ret, child_landing) = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => (Landing::Left, insert_landing(&mut node.left, key)?),
            Ordering::Greater => (Landing::Right, insert_landing(&mut node.right, key)?),
            Ordering::Equal => return None,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Some(Landing::Root);
        },
    };

    rebalance(tree, Some(child_landing));
    Some(ret)
}

/// Inserts `key` into the tree. Returns `false` and leaves the tree untouched if the key is
/// already present.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    insert_landing(tree, key).is_some()
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            rebalance(tree, None);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

/// Removes `key` from the tree, rebalancing every ancestor of the removed position. Returns
/// `false` and leaves the tree untouched if the key is absent.
pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return false,
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                *tree = child;
                return true;
            },
            (left, right) => {
                node.left = left;
                node.right = right;
                let successor = remove_min(&mut node.right);
                node.key = successor.key;
                true
            },
        },
    };

    *tree = Some(node);
    if removed {
        rebalance(tree, None);
    }
    removed
}

pub fn find<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.key) {
        Ordering::Less => find(&node.left, key),
        Ordering::Greater => find(&node.right, key),
        Ordering::Equal => Some(&**node),
    })
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.key) {
        Ordering::Greater => ceil(&node.right, key),
        Ordering::Less => match ceil(&node.left, key) {
            None => Some(&node.key),
            res => res,
        },
        Ordering::Equal => Some(&node.key),
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.key) {
        Ordering::Less => floor(&node.left, key),
        Ordering::Greater => match floor(&node.right, key) {
            None => Some(&node.key),
            res => res,
        },
        Ordering::Equal => Some(&node.key),
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Collects `(depth, key)` pairs in reverse in-order, which is the order rows appear in a
/// sideways rendering of the tree.
pub fn sideways<'a, T>(tree: &'a Tree<T>, depth: usize, rows: &mut Vec<(usize, &'a T)>) {
    if let Some(ref node) = tree {
        sideways(&node.right, depth + 1, rows);
        rows.push((depth, &node.key));
        sideways(&node.left, depth + 1, rows);
    }
}
