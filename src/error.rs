//! Errors reported by this crate.
//!
//! Running out of items is never an error here: streams, stacks and consumers
//! report it with [`None`]. The types below cover the few operations
//! that promise an answer and cannot give one.

use derive_more::{Display, Error, IsVariant};

/// Returned by [`Cursor::next()`](crate::stream::Cursor::next) when the stream has no
/// item left.
///
/// A cursor only fails this way when it is asked for an item after
/// [`has_next()`](crate::stream::Cursor::has_next) returned `false`
/// (or without asking first).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no element left in the stream")]
pub struct NoSuchElement;

/// Returned by [`slice()`](crate::util::slice) and [`slice_str()`](crate::util::slice_str)
/// when the requested range does not fit the sequence.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SliceError {
    /// The start index resolved to a position before index 0.
    #[display("slice start {start} precedes the start of a sequence of length {len}")]
    StartOutOfBounds { start: isize, len: usize },
    /// The end index resolved to a position past the end of the sequence.
    #[display("slice end {end} exceeds the length {len}")]
    EndOutOfBounds { end: isize, len: usize },
    /// The resolved byte index splits a UTF-8 sequence.
    #[display("byte index {index} is not on a char boundary")]
    NotCharBoundary { index: usize },
}
