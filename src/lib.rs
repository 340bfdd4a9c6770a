//! Self-balancing binary search trees.
//!
//! Two independent ordered sets are provided: [`avl_tree::AvlSet`], which keeps the heights of
//! sibling subtrees within one of each other, and [`red_black_tree::RedBlackSet`], which keeps
//! a color bit per node. Both reject duplicate keys and iterate in ascending order.

#[macro_use]
extern crate log;

mod arena;
pub mod avl_tree;
pub mod red_black_tree;
pub mod shape;
