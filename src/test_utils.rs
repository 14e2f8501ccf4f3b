use std::fmt::Debug;

use crate::stream::Stream;

/// Asserts that `stream` yields exactly `expected`, then stays exhausted.
pub fn assert_stream_yields<S>(mut stream: S, expected: &[S::Item])
where
    S: Stream,
    S::Item: PartialEq + Debug,
{
    for (i, want) in expected.iter().enumerate() {
        match stream.next() {
            Some(got) => assert_eq!(&got, want, "item {i} differs"),
            None => panic!("stream ended after {i} items, expected {}", expected.len()),
        }
    }

    assert!(stream.next().is_none(), "stream yields more than {} items", expected.len());
    assert!(stream.next().is_none(), "stream revived after its end");
}

/// Checks a pass-through stream built by `builder` over `[1, 2, 3]` and over nothing.
pub fn test_stream<S>(mut builder: impl FnMut(Vec<i32>) -> S)
where
    S: Stream<Item = i32>,
{
    assert_stream_yields(builder(vec![1, 2, 3]), &[1, 2, 3]);
    assert_stream_yields(builder(vec![]), &[]);
}
