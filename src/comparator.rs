//! Orderings used to place elements in a [`Tree`][crate::unbalanced::Tree].
//!
//! Anything implementing [`Comparator`] can order a tree. Out of the box that is:
//!
//! - [`Natural`], which defers to the element's own [`Ord`],
//! - any closure `Fn(&T, &T) -> Ordering`,
//! - [`Signed`], which wraps a closure returning a negative, zero, or positive integer,
//! - [`Reversed`], which flips another comparator,
//! - `Option<C>`, where `None` means "use the natural ordering".
//!
//! # Examples
//!
//! ```
//! use cmp_bst::comparator::{Comparator, Natural, Reversed, Signed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//!
//! let signed = Signed(|a: &i32, b: &i32| a - b);
//! assert_eq!(signed.compare(&7, &7), Ordering::Equal);
//! ```

use std::cmp::Ordering;

/// A three-way comparison between two `T`s.
///
/// Implementations must describe a consistent total order. A tree built with an inconsistent
/// comparator stays memory safe but may place elements arbitrarily and answer
/// [`contains`][crate::unbalanced::Tree::contains] wrongly.
pub trait Comparator<T> {
    /// Reports whether `a` is less than, equal to, or greater than `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The element type's own ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Adapts a function returning a signed integer into a [`Comparator`]. A negative result means
/// "less", zero means "equal", and a positive result means "greater".
#[derive(Clone, Copy, Debug)]
pub struct Signed<F>(pub F);

impl<T, F> Comparator<T> for Signed<F>
where
    F: Fn(&T, &T) -> i32,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }
}

/// Inverts the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C> Comparator<T> for Reversed<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// An absent comparator falls back to [`Natural`] ordering.
impl<T, C> Comparator<T> for Option<C>
where
    T: Ord,
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Some(comparator) => comparator.compare(a, b),
            None => Natural.compare(a, b),
        }
    }
}
