//! An unbalanced BST ordered by a pluggable [`Comparator`]. Nothing is ever rotated so the shape
//! of the tree is entirely determined by insertion order - inserting in ascending order produces
//! a tree that is really a linked list.
//!
//! Elements that compare equal to an existing element are kept, not replaced. They go into the
//! right subtree of the element they tie with and every insertion counts towards
//! [`size`][Tree::size].
//!
//! # Examples
//!
//! ```
//! use cmp_bst::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! for x in [5, 3, 8, 1] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.size(), 4);
//! assert!(tree.contains(&3));
//! assert!(!tree.contains(&9));
//!
//! // Duplicates are retained.
//! tree.insert(3);
//! assert_eq!(tree.size(), 5);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::comparator::{Comparator, Natural, Signed};

/// A Binary Search Tree holding `T`s ordered by `C`. This can be used for inserting elements and
/// checking whether an element is present.
pub struct Tree<T, C = Natural> {
    root: Option<Box<Node<T>>>,
    size: usize,
    comparator: C,
}

/// A single element and the (possibly empty) subtrees on either side of it.
struct Node<T> {
    element: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Generates a new, empty `Tree` ordered by `T`'s own [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, F> Tree<T, Signed<F>> {
    /// Generates a new, empty `Tree` ordered by a function returning a negative number when its
    /// first argument is smaller, zero when they're equal, and a positive number otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::unbalanced::Tree;
    ///
    /// // Order strings by their length.
    /// let mut tree = Tree::with_compare_fn(|a: &&str, b: &&str| a.len() as i32 - b.len() as i32);
    /// tree.insert("three");
    /// tree.insert("one");
    ///
    /// // Same length as "one" so it's considered present.
    /// assert!(tree.contains(&"two"));
    /// assert!(!tree.contains(&"four"));
    /// ```
    pub fn with_compare_fn(compare: F) -> Self
    where
        F: Fn(&T, &T) -> i32,
    {
        Self::with_comparator(Signed(compare))
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by the given comparator. Closures of the form
    /// `Fn(&T, &T) -> Ordering` are comparators too. Passing `None` (as an `Option<C>`) orders
    /// the tree naturally.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.insert(5);
    /// tree.insert(8);
    ///
    /// assert!(tree.contains(&8));
    /// assert!(!tree.contains(&3));
    /// ```
    pub fn with_comparator(comparator: C) -> Self
    where
        C: Comparator<T>,
    {
        Self {
            root: None,
            size: 0,
            comparator,
        }
    }

    /// How many elements have been inserted into this tree, duplicates included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether nothing has been inserted into this tree yet.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.size == 0, self.root.is_none());
        self.size == 0
    }

    /// The comparator ordering this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{Natural, Reversed, Tree};
    ///
    /// let tree: Tree<i32, _> = Tree::with_comparator(Reversed(Natural));
    /// assert_eq!(tree.comparator(), &Reversed(Natural));
    /// ```
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts the element into the tree. An element comparing equal to one already in the tree
    /// is placed in that element's right subtree; nothing is ever replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(4);
    /// tree.insert(4);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert!(tree.contains(&4));
    /// ```
    pub fn insert(&mut self, element: T) {
        let comparator = &self.comparator;
        let mut depth = 0;
        let mut link = &mut self.root;

        // Walk down until we fall off the bottom of the tree. That empty slot is where the new
        // node belongs.
        while let Some(node) = link {
            link = match comparator.compare(&element, &node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *link = Some(Box::new(Node::new(element)));
        self.size += 1;
        trace!("inserted node at depth {} (size {})", depth, self.size);
    }

    /// Whether the tree contains an element comparing equal to `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.contains(&1));
    ///
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match self.comparator.compare(element, &node.element) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }
}

impl<T, C> Default for Tree<T, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> Drop for Tree<T, C> {
    /// Drops nodes from an explicit stack. Letting `Box` recurse would blow the call stack on a
    /// long enough chain of ascending insertions.
    fn drop(&mut self) {
        if self.size > 0 {
            debug!("dropping tree of {} nodes", self.size);
        }

        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Lists the elements of a subtree in pre-order: each node, then its left subtree, then its
/// right subtree.
struct PreOrder<'a, T>(Option<&'a Node<T>>);

impl<'a, T> fmt::Debug for PreOrder<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut pending: Vec<&Node<T>> = self.0.into_iter().collect();
        while let Some(node) = pending.pop() {
            list.entry(&node.element);
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }
        list.finish()
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("elements", &PreOrder(self.root.as_deref()))
            .finish()
    }
}
