//! Module contains the [`Stack`] capability and [`LinkStack`], its implementation
//! over a persistent chain of [`Link`](crate::link::Link)s.
//!
//! A [`LinkStack`] is mutable, but the chain under it is not:
//! pushing and popping move the stack's head pointer and never touch a node.
//! Cloning a stack, or taking its [`tail()`](LinkStack::tail), is O(1) and shares
//! the chain with the original.
//!
//! # Example
//!
//! ```
//! use pullstream::prelude::*;
//!
//! let mut stack = LinkStack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! let snapshot = stack.clone();
//! assert_eq!(snapshot, stack);
//!
//! stack.pop();
//! stack.push(3);
//!
//! assert_eq!(stack.stream().copied().list(), [3, 1]);
//! assert_eq!(snapshot.stream().copied().list(), [2, 1]);
//! assert_ne!(snapshot, stack);
//! ```

mod link_stack;
mod popping;
#[allow(clippy::module_inception)]
mod stack;

pub use link_stack::*;
pub use popping::*;
pub use stack::*;
