//! Module contains [`Link`], an immutable node of a singly linked chain,
//! and the streams walking such chains.
//!
//! Chains are persistent: nodes never change once built, and any number of
//! chains (or [`LinkStack`](crate::stack::LinkStack)s) may share a common tail.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use pullstream::prelude::*;
//!
//! let tail = Link::from_items([2, 3]);
//! let a = Link::new(1, tail.clone());
//! let b = Link::new(0, tail);
//!
//! assert_eq!(a.stream().copied().list(), [1, 2, 3]);
//! assert_eq!(b.stream().copied().list(), [0, 2, 3]);
//! assert!(Rc::ptr_eq(a.next().unwrap(), b.next().unwrap()));
//! ```

#[allow(clippy::module_inception)]
mod link;
mod stream;

pub use link::*;
pub use stream::*;
