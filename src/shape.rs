//! Sideways rendering of binary trees for debugging.
//!
//! The tree is printed rotated by 90 degrees: the root is in the leftmost column, each level is
//! indented by a further [`INDENT`] columns, and a node's right subtree is printed above it while
//! its left subtree is printed below it. Every node occupies a blank line followed by its key.

use std::fmt::{Display, Write};

/// Number of columns between two consecutive levels.
pub const INDENT: usize = 10;

/// Renders rows of `(depth, key)` given in reverse in-order (right subtree, node, left subtree).
///
/// # Examples
///
/// ```
/// use balanced_trees::shape;
///
/// let rendered = shape::render(vec![(1, &3), (0, &2), (1, &1)]);
/// assert_eq!(rendered, "\n          3\n\n2\n\n          1\n");
/// ```
pub fn render<'a, T, I>(rows: I) -> String
where
    T: 'a + Display,
    I: IntoIterator<Item = (usize, &'a T)>,
{
    let mut ret = String::new();
    for (depth, key) in rows {
        ret.push('\n');
        ret.extend(std::iter::repeat(' ').take(depth * INDENT));
        // writing into a `String` cannot fail
        let _ = writeln!(ret, "{}", key);
    }
    ret
}
