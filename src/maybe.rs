//! Module contains [`Maybe`], a value that is either present or absent.

use std::fmt::Display;

use derive_more::IsVariant;

/// A value that is either [`Present`](Maybe::Present) or [`Absent`](Maybe::Absent).
///
/// It carries the same information as [`Option`] and converts to and from it
/// losslessly. Equality, ordering and hashing are structural.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let present = Maybe::from(Some(3));
///
/// assert!(present.is_present());
/// assert_eq!(present.into_option(), Some(3));
/// assert_eq!(Maybe::<i32>::default(), Maybe::Absent);
/// assert_eq!(Option::<i32>::from(Maybe::Absent), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, IsVariant)]
pub enum Maybe<T> {
    /// Holds a value.
    Present(T),
    /// Holds nothing.
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// Converts into an [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Present({value})"),
            Self::Absent => f.write_str("Absent"),
        }
    }
}
