use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    fmt::Display,
    hash::Hash,
};

#[cfg(feature = "itertools")]
use itertools::MinMaxResult;

#[cfg(feature = "itertools")]
use super::ZipEither;
use super::{
    Cloned, Copied, Cursor, Distinct, DistinctBy, DropFirst, DropWhile, FMap, Filter,
    FilterMap, Flatten, Indexed, Inspect, Iter, JoinFormat, Limit, Map, Peekable, TakeWhile,
    Then, UpThrough, UpTo, Zip, ZipLong, assert_stream,
};

/// A pull-based, single-pass, lazy sequence of items.
///
/// This trait requires one method, [`next`](Stream::next), which either returns the next
/// item or [`None`] if the stream is over. Once it has returned [`None`],
/// it must keep returning [`None`] (see the [module docs](crate::stream#exhaustion)).
///
/// Every other method is provided:
///
/// - *Operators* consume this stream and return a new one. They are lazy:
///   building `stream.map(f).filter(p)` pulls nothing.
/// - *Consumers* pull this stream, usually until it is exhausted, and return a result.
///
/// # Implementing
///
/// ```
/// use pullstream::prelude::*;
///
/// /// Counts down to (and including) zero.
/// struct Countdown(Option<u32>);
///
/// impl Stream for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Option<u32> {
///         let current = self.0?;
///         self.0 = current.checked_sub(1);
///         Some(current)
///     }
/// }
///
/// assert_eq!(Countdown(Some(3)).list(), [3, 2, 1, 0]);
/// assert_eq!(Countdown(Some(3)).foldl(0, |sum, n| sum + n), 6);
/// ```
///
/// # Relation to [`Iterator`]
///
/// The protocol is the same as [`Iterator`]'s, except that exhaustion is guaranteed to
/// be permanent. Any iterator can become a stream with [`IntoStream::into_stream()`]
/// (which fuses it), and any stream can be iterated with [`Stream::iter()`].
///
/// [`IntoStream::into_stream()`]: super::IntoStream::into_stream
#[must_use = "streams are lazy and do nothing unless pulled"]
pub trait Stream {
    /// The type of the items yielded by this stream.
    type Item;

    /// Pulls the next item, or returns [`None`] if the stream is over.
    ///
    /// Once this returns [`None`], subsequent calls must return [`None`] as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut stream = stream::of([1, 2]);
    ///
    /// assert_eq!(stream.next(), Some(1));
    /// assert_eq!(stream.next(), Some(2));
    /// assert_eq!(stream.next(), None);
    /// assert_eq!(stream.next(), None);
    /// ```
    fn next(&mut self) -> Option<Self::Item>;

    /// Creates a stream yielding the result of `f` on each item of this stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3]).map(|x| x + 1).list(), [2, 3, 4]);
    /// ```
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        assert_stream(Map::new(self, f))
    }

    /// Creates a stream yielding only the items that satisfy `pred`.
    ///
    /// Each pull of the returned stream pulls this stream as many times as needed to
    /// find a matching item, or until this stream is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3, 4]).filter(|x| x % 2 == 0).list(), [2, 4]);
    /// ```
    #[inline]
    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        assert_stream(Filter::new(self, pred))
    }

    /// Creates a stream yielding the items of every sub-stream `f` returns,
    /// one sub-stream after another, in the order of this stream's items.
    ///
    /// Sub-streams that are empty are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let doubled = stream::of([1, 2, 3]).fmap(|x| stream::of([x, x])).list();
    /// assert_eq!(doubled, [1, 1, 2, 2, 3, 3]);
    ///
    /// let odd_only = stream::of([1_usize, 2, 3])
    ///     .fmap(|x| stream::of(vec![x; x % 2]))
    ///     .list();
    /// assert_eq!(odd_only, [1, 3]);
    /// ```
    #[inline]
    fn fmap<U, F>(self, f: F) -> FMap<Self, U, F>
    where
        Self: Sized,
        U: Stream,
        F: FnMut(Self::Item) -> U,
    {
        assert_stream(FMap::new(self, f))
    }

    /// Flattens a stream of streams.
    ///
    /// This is [`fmap()`](Stream::fmap) with the identity function.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let nested = stream::of([stream::of(vec![1, 2]), stream::of(vec![]), stream::of(vec![3])]);
    /// assert_eq!(nested.flatten().list(), [1, 2, 3]);
    /// ```
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Stream,
    {
        assert_stream(Flatten::new(self))
    }

    /// Creates a stream that both filters and maps.
    ///
    /// It is equivalent to filtering out the items for which `f` returns [`None`]
    /// and mapping the others to the content of the [`Some`], but `f` is called
    /// only once per item.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let halves = stream::of([1, 2, 3, 4])
    ///     .filter_map(|x| (x % 2 == 0).then_some(x / 2))
    ///     .list();
    ///
    /// assert_eq!(halves, [1, 2]);
    /// ```
    #[inline]
    fn filter_map<B, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        assert_stream(FilterMap::new(self, f))
    }

    /// Creates a stream that calls `f` on a reference to each item before yielding it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut seen = vec![];
    /// let total = stream::of([1, 2, 3])
    ///     .inspect(|&x| seen.push(x))
    ///     .foldl(0, |sum, x| sum + x);
    ///
    /// assert_eq!(total, 6);
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    #[inline]
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        assert_stream(Inspect::new(self, f))
    }

    /// Creates a stream that copies every referenced item.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let nums = vec![1, 2, 3];
    /// let copied: Vec<i32> = nums.stream().copied().list();
    ///
    /// assert_eq!(copied, nums);
    /// ```
    #[inline]
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Stream<Item = &'a T>,
        T: Copy + 'a,
    {
        assert_stream(Copied::new(self))
    }

    /// Creates a stream that clones every referenced item.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// let cloned: Vec<String> = words.stream().cloned().list();
    ///
    /// assert_eq!(cloned, words);
    /// ```
    #[inline]
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Stream<Item = &'a T>,
        T: Clone + 'a,
    {
        assert_stream(Cloned::new(self))
    }

    /// Creates a stream yielding the items of this stream until (and excluding)
    /// the first item satisfying `stop`.
    ///
    /// The matching item is pulled, then dropped. Once it has been met, this
    /// stream is never pulled again. If no item matches, the returned stream
    /// yields every item of this stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3, 4]).up_to(|x| x % 3 == 0).list(), [1, 2]);
    /// assert_eq!(stream::of([1, 2]).up_to(|&x| x > 5).list(), [1, 2]);
    /// ```
    #[inline]
    fn up_to<F>(self, stop: F) -> UpTo<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        assert_stream(UpTo::new(self, stop))
    }

    /// Creates a stream yielding the items of this stream until (and including)
    /// the first item satisfying `stop`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3, 4]).up_through(|x| x % 3 == 0).list(), [1, 2, 3]);
    /// ```
    #[inline]
    fn up_through<F>(self, stop: F) -> UpThrough<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        assert_stream(UpThrough::new(self, stop))
    }

    /// Creates a stream that skips the leading items satisfying `pred`, then yields
    /// every remaining item, including later ones that would satisfy `pred`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3, 1]).drop_while(|&x| x < 3).list(), [3, 1]);
    /// ```
    #[inline]
    fn drop_while<F>(self, pred: F) -> DropWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        assert_stream(DropWhile::new(self, pred))
    }

    /// Creates a stream that skips the first `n` items of this stream.
    ///
    /// `drop(0)` yields every item; `drop(1)` skips only the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3, 4]).drop(2).list(), [3, 4]);
    /// assert_eq!(stream::of([1, 2]).drop(5).list(), [] as [i32; 0]);
    /// ```
    #[inline]
    fn drop(self, n: usize) -> DropFirst<Self>
    where
        Self: Sized,
    {
        assert_stream(DropFirst::new(self, n))
    }

    /// Creates a stream yielding items as long as they satisfy `keep`.
    ///
    /// This is [`up_to()`](Stream::up_to) with the negated predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3, 1]).take_while(|&x| x < 3).list(), [1, 2]);
    /// ```
    #[inline]
    fn take_while<F>(self, keep: F) -> TakeWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        assert_stream(TakeWhile::new(self, keep))
    }

    /// Creates a stream yielding at most the first `n` items of this stream.
    ///
    /// Once `n` items have been yielded, this stream is not pulled anymore,
    /// which makes `limit` the usual way to bound an infinite stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::transitive(1, |&x| Some(x * 2)).limit(4).list(), [1, 2, 4, 8]);
    /// ```
    #[inline]
    fn limit(self, n: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        assert_stream(Limit::new(self, n))
    }

    /// Creates a stream yielding each distinct item once, in first-seen order.
    ///
    /// The returned stream keeps a clone of every distinct item it has yielded,
    /// so its memory grows with the number of distinct items.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 1, 2, 3, 1, 2, 3, 3, 2]).distinct().list(), [1, 2, 3]);
    /// ```
    #[inline]
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        assert_stream(Distinct::new(self))
    }

    /// Creates a stream yielding only the first item of each distinct key,
    /// as computed by `selector`.
    ///
    /// The returned stream keeps every key it has seen.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let list = stream::of([2, 3, 2, 5, 4, 6, 4, 2]).distinct_by(|x| x / 2).list();
    /// assert_eq!(list, [2, 5, 6]);
    /// ```
    #[inline]
    fn distinct_by<K, F>(self, selector: F) -> DistinctBy<Self, K, F>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        assert_stream(DistinctBy::new(self, selector))
    }

    /// Creates a stream of pairs pulled in lockstep from this stream and `other`.
    ///
    /// It ends as soon as either stream ends. When this stream ends first,
    /// `other` is not pulled for that step.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let pairs = stream::of([1, 2, 3]).zip(stream::of(["a", "b"])).list();
    /// assert_eq!(pairs, [(1, "a"), (2, "b")]);
    /// ```
    #[inline]
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Stream,
    {
        assert_stream(Zip::new(self, other))
    }

    /// Creates a stream of pairs pulled in lockstep from this stream and `other`,
    /// running until both are exhausted.
    ///
    /// The side that ran out is reported as [`None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let pairs = stream::of([1, 2, 3]).zip_long(stream::of([2, 4])).list();
    /// assert_eq!(pairs, [(Some(1), Some(2)), (Some(2), Some(4)), (Some(3), None)]);
    /// ```
    #[inline]
    fn zip_long<B>(self, other: B) -> ZipLong<Self, B>
    where
        Self: Sized,
        B: Stream,
    {
        assert_stream(ZipLong::new(self, other))
    }

    /// Like [`zip_long()`](Stream::zip_long), but yields [`EitherOrBoth`] items.
    ///
    /// # Examples
    ///
    /// ```
    /// use itertools::EitherOrBoth::{Both, Left};
    /// use pullstream::prelude::*;
    ///
    /// let pairs = stream::of([1, 2]).zip_either(stream::of(["a"])).list();
    /// assert_eq!(pairs, [Both(1, "a"), Left(2)]);
    /// ```
    ///
    /// [`EitherOrBoth`]: itertools::EitherOrBoth
    #[cfg(feature = "itertools")]
    #[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
    #[inline]
    fn zip_either<B>(self, other: B) -> ZipEither<Self, B>
    where
        Self: Sized,
        B: Stream,
    {
        assert_stream(ZipEither::new(self, other))
    }

    /// Creates a stream yielding every item of this stream, then every item of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2]).then(stream::of([3])).list(), [1, 2, 3]);
    /// ```
    #[inline]
    fn then<B>(self, other: B) -> Then<Self, B>
    where
        Self: Sized,
        B: Stream<Item = Self::Item>,
    {
        assert_stream(Then::new(self, other))
    }

    /// Creates a stream pairing each item with its index, starting at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of(['a', 'b']).indexed().list(), [(0, 'a'), (1, 'b')]);
    /// ```
    #[inline]
    fn indexed(self) -> Indexed<Self>
    where
        Self: Sized,
    {
        assert_stream(Indexed::new(self))
    }

    /// Creates a stream that can look one item ahead without consuming it.
    ///
    /// See [`PeekStream`](super::PeekStream).
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut stream = stream::of([1, 2]).peekable();
    ///
    /// assert_eq!(stream.peek(), Some(&1));
    /// assert_eq!(stream.peek(), Some(&1));
    /// assert_eq!(stream.next(), Some(1));
    /// assert_eq!(stream.next(), Some(2));
    /// assert_eq!(stream.peek(), None);
    /// ```
    #[inline]
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        assert_stream(Peekable::new(self))
    }

    /// Borrows this stream, so that an operator or a consumer can pull part of it
    /// while the stream stays usable afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut stream = stream::of([1, 2, 3, 4]);
    ///
    /// assert_eq!(stream.by_ref().limit(2).list(), [1, 2]);
    /// assert_eq!(stream.list(), [3, 4]);
    /// ```
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Calls `f` on every item of this stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut sum = 0;
    /// stream::of([1, 2, 3]).each(|x| sum += x);
    ///
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    fn each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(item) = self.next() {
            f(item);
        }
    }

    /// Folds every item into an accumulator, from left to right, starting from `seed`.
    ///
    /// The result is `f(...f(f(seed, x1), x2)..., xn)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3]).foldl(0, |acc, x| acc * 10 + x), 123);
    /// ```
    fn foldl<B, F>(mut self, seed: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut accum = seed;
        while let Some(item) = self.next() {
            accum = f(accum, item);
        }
        accum
    }

    /// Folds every item into an accumulator, from right to left, starting from `seed`.
    ///
    /// The result is `f(...f(f(seed, xn), xn-1)..., x1)`.
    ///
    /// All items are buffered before the first call to `f`,
    /// so this never returns on an infinite stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3]).foldr(0, |acc, x| acc * 10 + x), 321);
    /// ```
    fn foldr<B, F>(self, seed: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.list().into_iter().rev().fold(seed, f)
    }

    /// Folds the items from left to right, using the first item as the seed.
    ///
    /// Returns [`None`] if the stream is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3]).reduce(|acc, x| acc * 10 + x), Some(123));
    /// assert_eq!(stream::empty::<i32>().reduce(|acc, x| acc + x), None);
    /// ```
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next()?;
        Some(self.foldl(first, f))
    }

    /// Folds the items from right to left, using the last item as the seed.
    ///
    /// Returns [`None`] if the stream is empty. Like [`foldr()`](Stream::foldr),
    /// this buffers every item first.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3]).reduce_right(|acc, x| acc * 10 + x), Some(321));
    /// assert_eq!(stream::empty::<i32>().reduce_right(|acc, x| acc + x), None);
    /// ```
    fn reduce_right<F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut items = self.list();
        let last = items.pop()?;
        Some(items.into_iter().rev().fold(last, f))
    }

    /// Pulls the next item. This is [`next()`](Stream::next) under a consumer's name.
    #[inline]
    fn first(&mut self) -> Option<Self::Item> {
        self.next()
    }

    /// Returns the first item satisfying `pred`, pulling no further than that item.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut stream = stream::of([1, 2, 3, 4]);
    ///
    /// assert_eq!(stream.first_where(|x| x % 2 == 0), Some(2));
    /// assert_eq!(stream.next(), Some(3));
    /// assert_eq!(stream.first_where(|x| x % 5 == 0), None);
    /// ```
    fn first_where<F>(&mut self, mut pred: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if pred(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Returns the last item, exhausting the stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3]).last(), Some(3));
    /// assert_eq!(stream::empty::<i32>().last(), None);
    /// ```
    #[inline]
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.foldl(None, |_, item| Some(item))
    }

    /// Returns the last item satisfying `pred`, exhausting the stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3, 4]).last_where(|x| x % 2 == 0), Some(4));
    /// assert_eq!(stream::of([1, 2, 3, 4]).last_where(|x| x % 5 == 0), None);
    /// ```
    fn last_where<F>(self, mut pred: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        self.foldl(None, |last, item| if pred(&item) { Some(item) } else { last })
    }

    /// Tests whether any item satisfies `pred`, stopping at the first one that does.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut stream = stream::of([1, 2, 3]);
    ///
    /// assert!(stream.any(|x| x % 2 == 0));
    /// assert_eq!(stream.next(), Some(3));
    /// assert!(!stream::empty::<i32>().any(|_| true));
    /// ```
    fn any<F>(&mut self, mut pred: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if pred(item) {
                return true;
            }
        }
        false
    }

    /// Tests whether every item satisfies `pred`, stopping at the first one that does not.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert!(stream::of([1, 2, 3]).all(|x| x < 4));
    /// assert!(!stream::of([1, 2, 3, 4]).all(|x| x < 4));
    /// assert!(stream::empty::<i32>().all(|_| false));
    /// ```
    fn all<F>(&mut self, mut pred: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if !pred(item) {
                return false;
            }
        }
        true
    }

    /// Counts the items, exhausting the stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3]).count(), 3);
    /// assert_eq!(stream::empty::<i32>().count(), 0);
    /// ```
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.foldl(0, |count, _| count + 1)
    }

    /// Counts the items equal to `value`, exhausting the stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 1, 3, 1]).count_of(&1), 3);
    /// ```
    fn count_of(self, value: &Self::Item) -> usize
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.foldl(0, |count, item| if item == *value { count + 1 } else { count })
    }

    /// Returns the greatest item, or [`None`] if the stream is empty.
    ///
    /// If several items are equally greatest, the first one is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 3, 2]).max(), Some(3));
    /// assert_eq!(stream::empty::<i32>().max(), None);
    /// ```
    #[inline]
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the least item, or [`None`] if the stream is empty.
    ///
    /// If several items are equally least, the first one is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([3, 1, 2]).min(), Some(1));
    /// assert_eq!(stream::empty::<i32>().min(), None);
    /// ```
    #[inline]
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Returns the item with the greatest key, keeping the first one on ties.
    ///
    /// `f` is called once per item.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let longest = stream::of(["ab", "cde", "fgh", "i"]).max_by_key(|s| s.len());
    /// assert_eq!(longest, Some("cde"));
    /// ```
    fn max_by_key<K, F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        select_by_key(self, f, Ordering::Greater)
    }

    /// Returns the item with the least key, keeping the first one on ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let shortest = stream::of(["ab", "c", "de", "f"]).min_by_key(|s| s.len());
    /// assert_eq!(shortest, Some("c"));
    /// ```
    fn min_by_key<K, F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        select_by_key(self, f, Ordering::Less)
    }

    /// Returns the greatest item according to `compare`, keeping the first one on ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let max = stream::of([(1, 'a'), (3, 'b'), (3, 'c')]).max_by(|a, b| a.0.cmp(&b.0));
    /// assert_eq!(max, Some((3, 'b')));
    /// ```
    fn max_by<F>(self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        select_by(self, compare, Ordering::Greater)
    }

    /// Returns the least item according to `compare`, keeping the first one on ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let min = stream::of([(3, 'a'), (1, 'b'), (1, 'c')]).min_by(|a, b| a.0.cmp(&b.0));
    /// assert_eq!(min, Some((1, 'b')));
    /// ```
    fn min_by<F>(self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        select_by(self, compare, Ordering::Less)
    }

    /// Returns both the least and the greatest item, following the tie rules of
    /// [`Itertools::minmax()`](itertools::Itertools::minmax).
    ///
    /// # Examples
    ///
    /// ```
    /// use itertools::MinMaxResult;
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([3, 1, 2]).min_max(), MinMaxResult::MinMax(1, 3));
    /// assert_eq!(stream::of([7]).min_max(), MinMaxResult::OneElement(7));
    /// assert_eq!(stream::empty::<i32>().min_max(), MinMaxResult::NoElements);
    /// ```
    #[cfg(feature = "itertools")]
    #[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
    fn min_max(self) -> MinMaxResult<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        itertools::Itertools::minmax(self.iter())
    }

    /// Returns both the item with the least key and the item with the greatest key,
    /// following the tie rules of
    /// [`Itertools::minmax_by_key()`](itertools::Itertools::minmax_by_key).
    #[cfg(feature = "itertools")]
    #[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
    fn min_max_by_key<K, F>(self, f: F) -> MinMaxResult<Self::Item>
    where
        Self: Sized,
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        itertools::Itertools::minmax_by_key(self.iter(), f)
    }

    /// Pulls every remaining item into a [`Vec`], in encounter order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3]).list(), vec![1, 2, 3]);
    /// ```
    #[inline]
    fn list(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Same as [`list()`](Stream::list). A [`Vec`] is already mutable;
    /// this method exists for readers who want the intent spelled out.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut list = stream::of([1, 2, 3]).mutable_list();
    /// list.push(4);
    ///
    /// assert_eq!(list, [1, 2, 3, 4]);
    /// ```
    #[inline]
    fn mutable_list(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.list()
    }

    /// Pulls every remaining item into a boxed slice, in encounter order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(*stream::of([1, 2, 3]).array(), [1, 2, 3]);
    /// ```
    #[inline]
    fn array(self) -> Box<[Self::Item]>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Pulls every remaining item into a [`HashSet`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use pullstream::prelude::*;
    ///
    /// assert_eq!(stream::of([1, 2, 3, 2]).set(), HashSet::from([1, 2, 3]));
    /// ```
    #[inline]
    fn set(self) -> HashSet<Self::Item>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        self.collect()
    }

    /// Pulls every remaining item into any container implementing [`FromIterator`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::VecDeque;
    /// use pullstream::prelude::*;
    ///
    /// let deque: VecDeque<_> = stream::of([1, 2, 3]).collect();
    /// assert_eq!(deque, [1, 2, 3]);
    ///
    /// let stack: LinkStack<_> = stream::of([1, 2, 3]).collect();
    /// assert_eq!(stack.peek(), Some(&1));
    /// ```
    #[inline]
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromIterator<Self::Item>,
    {
        C::from_iter(self.iter())
    }

    /// Builds a [`HashMap`] from the key-value pairs `f` returns for each item.
    ///
    /// When several items produce the same key, the last one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use pullstream::prelude::*;
    ///
    /// let map = stream::of(["a", "bb", "cc"]).associate(|s| (s.len(), s));
    /// assert_eq!(map, HashMap::from([(1, "a"), (2, "cc")]));
    /// ```
    fn associate<K, V, F>(self, f: F) -> HashMap<K, V>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(Self::Item) -> (K, V),
    {
        self.map(f).collect()
    }

    /// Groups the items by the key `selector` computes for each of them.
    ///
    /// Groups are listed in the order their key was first seen,
    /// and each group keeps its items in encounter order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let groups = stream::of([2, 3, 4, 5, 6, 7]).group_by(|x| x / 2);
    /// assert_eq!(groups, [(1, vec![2, 3]), (2, vec![4, 5]), (3, vec![6, 7])]);
    /// ```
    fn group_by<K, F>(mut self, mut selector: F) -> Vec<(K, Vec<Self::Item>)>
    where
        Self: Sized,
        K: Eq + Hash + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        let mut positions = HashMap::new();
        let mut groups: Vec<(K, Vec<Self::Item>)> = Vec::new();

        while let Some(item) = self.next() {
            let key = selector(&item);
            let position = *positions.entry(key.clone()).or_insert_with(|| {
                groups.push((key, Vec::new()));
                groups.len() - 1
            });
            groups[position].1.push(item);
        }

        groups
    }

    /// Splits the items into those satisfying `pred` and the others,
    /// preserving their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let (even, odd) = stream::of([1, 2, 3, 4]).partition(|x| x % 2 == 0);
    ///
    /// assert_eq!(even, [2, 4]);
    /// assert_eq!(odd, [1, 3]);
    /// ```
    fn partition<F>(self, mut pred: F) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();

        self.each(|item| {
            if pred(&item) {
                matching.push(item);
            } else {
                rest.push(item);
            }
        });

        (matching, rest)
    }

    /// Renders the items into a string, as described by `format`,
    /// calling `transform` on each rendered item.
    ///
    /// When `format` has a limit, the items past the limit are still pulled
    /// (the stream is always exhausted) but are never passed to `transform`.
    /// See [`JoinFormat`] for the details.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let s = stream::of([1, 2, 3])
    ///     .join_to_string(JoinFormat::new().prefix("[").postfix("]").limit(2), |x| x * 2);
    ///
    /// assert_eq!(s, "[2, 4, ...]");
    /// ```
    fn join_to_string<D, F>(self, format: JoinFormat<'_>, transform: F) -> String
    where
        Self: Sized,
        D: Display,
        F: FnMut(Self::Item) -> D,
    {
        format.join(self, transform)
    }

    /// Turns this stream into an [`Iterator`].
    ///
    /// The iterator pulls from this stream, so it can feed `for` loops and
    /// every [`Iterator`] API.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut sum = 0;
    /// for x in stream::of([1, 2, 3]).iter() {
    ///     sum += x;
    /// }
    ///
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Turns this stream into a [`Cursor`], a view asking "is there more?"
    /// before taking an item.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::{error::NoSuchElement, prelude::*};
    ///
    /// let mut cursor = stream::of([1]).cursor();
    ///
    /// assert!(cursor.has_next());
    /// assert_eq!(cursor.next(), Ok(1));
    /// assert!(!cursor.has_next());
    /// assert_eq!(cursor.next(), Err(NoSuchElement));
    /// ```
    #[inline]
    fn cursor(self) -> Cursor<Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        S::next(self)
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        S::next(self)
    }
}

/// Keeps the first item whose comparison to the current pick is `wanted`,
/// so that ties keep the earliest item.
fn select_by<S, F>(mut stream: S, mut compare: F, wanted: Ordering) -> Option<S::Item>
where
    S: Stream,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut best = stream.next()?;
    while let Some(item) = stream.next() {
        if compare(&item, &best) == wanted {
            best = item;
        }
    }
    Some(best)
}

fn select_by_key<S, K, F>(mut stream: S, mut f: F, wanted: Ordering) -> Option<S::Item>
where
    S: Stream,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let first = stream.next()?;
    let mut best = (f(&first), first);
    while let Some(item) = stream.next() {
        let key = f(&item);
        if key.cmp(&best.0) == wanted {
            best = (key, item);
        }
    }
    Some(best.1)
}
