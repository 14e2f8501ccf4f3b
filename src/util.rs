//! Small helpers around slices, strings and files.

use std::{fs, io, path::Path};

use crate::error::SliceError;

/// Returns the sub-slice of `items` from `start` (inclusive) to `end` (exclusive).
///
/// A negative `start` counts back from the end: `-1` is the last item.
/// A negative `end` counts back from *one past* the end: `-1` means `items.len()`,
/// so `slice(items, 0, -1)` is the whole slice.
/// A `start` past the `end` gives an empty slice.
///
/// # Errors
///
/// Returns [`SliceError::StartOutOfBounds`] if `start` resolves before index 0,
/// and [`SliceError::EndOutOfBounds`] if `end` resolves past `items.len()`.
///
/// # Examples
///
/// ```
/// use pullstream::util::slice;
///
/// let items = [1, 2, 3, 4, 5];
///
/// assert_eq!(slice(&items, 0, -1), Ok(&items[..]));
/// assert_eq!(slice(&items, 2, -3), Ok(&[3][..]));
/// assert_eq!(slice(&items, -4, -2), Ok(&[2, 3, 4][..]));
/// assert!(slice(&items, 0, 6).unwrap_err().is_end_out_of_bounds());
/// ```
pub fn slice<T>(items: &[T], start: isize, end: isize) -> Result<&[T], SliceError> {
    let (start, end) = resolve(items.len(), start, end)?;
    Ok(&items[start..end])
}

/// Returns the substring of `s` between two byte offsets, resolved like [`slice()`].
///
/// # Errors
///
/// Fails like [`slice()`], and with [`SliceError::NotCharBoundary`] if an offset
/// falls inside a multi-byte character.
///
/// # Examples
///
/// ```
/// use pullstream::util::slice_str;
///
/// assert_eq!(slice_str("12345", 0, -2), Ok("1234"));
/// assert_eq!(slice_str("12345", 3, 2), Ok(""));
/// assert!(slice_str("é", 1, -1).unwrap_err().is_not_char_boundary());
/// ```
pub fn slice_str(s: &str, start: isize, end: isize) -> Result<&str, SliceError> {
    let (start, end) = resolve(s.len(), start, end)?;

    for index in [start, end] {
        if !s.is_char_boundary(index) {
            return Err(SliceError::NotCharBoundary { index });
        }
    }
    Ok(&s[start..end])
}

/// Reads the whole file at `path` into a string.
///
/// # Errors
///
/// Returns the [`io::Error`] of the underlying read, as is.
pub fn read_file(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Resolves relative bounds into a valid `start..end` range over `len` items.
fn resolve(len: usize, start: isize, end: isize) -> Result<(usize, usize), SliceError> {
    let signed_len = isize::try_from(len).unwrap_or(isize::MAX);

    let from = if start < 0 { signed_len + start } else { start };
    let to = if end < 0 { signed_len + end + 1 } else { end };

    if from < 0 {
        return Err(SliceError::StartOutOfBounds { start, len });
    }
    if to > signed_len {
        return Err(SliceError::EndOutOfBounds { end, len });
    }

    // `from` is non-negative here, and `to` is at most `len`.
    let from = from.unsigned_abs();
    let to = to.max(0).unsigned_abs();
    Ok((from.min(to), to))
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use super::*;

    proptest! {
        #[test]
        fn agrees_with_range_indexing(
            items in propvec(any::<u8>(), ..=8),
            start in -10_isize..10,
            end in -10_isize..10,
        ) {
            agrees_with_range_indexing_impl(items, start, end)?;
        }
    }

    fn agrees_with_range_indexing_impl(items: Vec<u8>, start: isize, end: isize) -> TestCaseResult {
        let len = items.len() as isize;
        let from = if start < 0 { len + start } else { start };
        let to = if end < 0 { len + end + 1 } else { end };

        match slice(&items, start, end) {
            Ok(sliced) => {
                prop_assert!(from >= 0 && to <= len);
                let expected: &[u8] = if from < to {
                    &items[from as usize..to as usize]
                } else {
                    &[]
                };
                prop_assert_eq!(sliced, expected);
            }
            Err(error) => prop_assert!(
                (error.is_start_out_of_bounds() && from < 0)
                    || (error.is_end_out_of_bounds() && to > len)
            ),
        }
        Ok(())
    }
}
