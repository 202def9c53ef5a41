//! This crate exposes a Binary Search Tree whose ordering is supplied by
//! the caller instead of being baked into the element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the element
//! that was inserted and will sometimes have child `Node`s. The most
//! important invariants of the BST in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree compare less
//!    than its own element.
//! 2. For every `Node`, all the `Node`s in its right subtree compare
//!    greater than or equal to its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). The [`unbalanced`] tree
//! never restructures itself so its height depends only on insertion order: random
//! insertions give `O(lg N)` but sorted insertions give `O(N)`.
//!
//! ## Comparators
//!
//! "Less than" is decided by a [`Comparator`]. [`Natural`] uses the element's
//! [`Ord`] implementation, closures returning [`std::cmp::Ordering`] work as-is, and
//! [`Signed`] adapts closures returning a negative/zero/positive integer.
//!
//! ```
//! use cmp_bst::Tree;
//!
//! let mut by_length = Tree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! by_length.insert("hello");
//!
//! assert!(by_length.contains(&"world"));
//! assert!(!by_length.contains(&"hi"));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod comparator;
pub mod unbalanced;

pub use comparator::{Comparator, Natural, Reversed, Signed};
pub use unbalanced::Tree;
