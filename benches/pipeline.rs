use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use pullstream::prelude::*;
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn pipeline(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(-1000..=1000))
        .take(500_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("filter_map_sum");
    bench_fn!(group.iter_filter_map_sum(&nums));
    bench_fn!(group.stream_filter_map_sum(&nums));
    group.finish();

    let mut group = criterion.benchmark_group("fmap_count");
    bench_fn!(group.iter_flat_map_count(&nums[..50_000]));
    bench_fn!(group.stream_fmap_count(&nums[..50_000]));
    group.finish();

    let mut group = criterion.benchmark_group("distinct_len");
    bench_fn!(group.iter_distinct_len(&nums));
    bench_fn!(group.stream_distinct_len(&nums));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = pipeline
}
criterion_main!(benches);

fn iter_filter_map_sum(nums: &[i32]) -> i64 {
    nums.iter()
        .filter(|&&num| num % 3 == 0)
        .map(|&num| i64::from(num) * 2)
        .sum()
}

fn stream_filter_map_sum(nums: &[i32]) -> i64 {
    nums.stream()
        .filter(|&&num| num % 3 == 0)
        .map(|&num| i64::from(num) * 2)
        .foldl(0, |sum, num| sum + num)
}

fn iter_flat_map_count(nums: &[i32]) -> usize {
    nums.iter()
        .flat_map(|&num| 0..num.rem_euclid(8))
        .count()
}

fn stream_fmap_count(nums: &[i32]) -> usize {
    nums.stream()
        .fmap(|&num| stream::of(0..num.rem_euclid(8)))
        .count()
}

fn iter_distinct_len(nums: &[i32]) -> usize {
    let mut seen = std::collections::HashSet::new();
    nums.iter().filter(|&&num| seen.insert(num)).count()
}

fn stream_distinct_len(nums: &[i32]) -> usize {
    nums.stream().copied().distinct().count()
}
