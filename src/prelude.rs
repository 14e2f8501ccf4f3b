//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the traits and containers of this crate,
//! plus the [`stream`](crate::stream) module itself for its constructors.
//!
//! # Example
//!
//! ```
//! use pullstream::prelude::*;
//!
//! assert_eq!(stream::of([1, 2, 3]).count(), 3);
//! ```

pub use crate::link::Link;
pub use crate::maybe::Maybe;
pub use crate::stack::{LinkStack, Stack};
pub use crate::stream::{
    self, IntoStream, JoinFormat, PeekStream, ReverseStreamable, Stream, Streamable, Walk,
    Walkable,
};
