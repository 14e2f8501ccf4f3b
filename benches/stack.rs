use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use pullstream::prelude::*;
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn stack(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(1..=i32::MAX))
        .take(100_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("push_pop");
    bench_fn!(group.vec_push_pop(&nums));
    bench_fn!(group.link_stack_push_pop(&nums));
    group.finish();

    let mut group = criterion.benchmark_group("snapshot_pop");
    bench_fn!(group.vec_snapshot_pop(&nums[..5_000]));
    bench_fn!(group.link_stack_snapshot_pop(&nums[..5_000]));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = stack
}
criterion_main!(benches);

fn vec_push_pop(nums: &[i32]) -> i64 {
    let mut stack = Vec::new();
    stack.extend_from_slice(nums);

    let mut sum = 0;
    while let Some(num) = stack.pop() {
        sum += i64::from(num);
    }
    sum
}

fn link_stack_push_pop(nums: &[i32]) -> i64 {
    let mut stack = LinkStack::new();
    for &num in nums {
        stack.push(num);
    }

    stack
        .popping_stream()
        .foldl(0, |sum, num| sum + i64::from(num))
}

// Every tenth push keeps a snapshot that must survive later pops.
fn vec_snapshot_pop(nums: &[i32]) -> usize {
    let mut stack = Vec::new();
    let mut snapshots = Vec::new();
    for (i, &num) in nums.iter().enumerate() {
        stack.push(num);
        if i % 10 == 0 {
            snapshots.push(stack.clone());
        }
    }
    stack.truncate(0);
    snapshots.len()
}

fn link_stack_snapshot_pop(nums: &[i32]) -> usize {
    let mut stack = LinkStack::new();
    let mut snapshots = Vec::new();
    for (i, &num) in nums.iter().enumerate() {
        stack.push(num);
        if i % 10 == 0 {
            snapshots.push(stack.clone());
        }
    }
    stack.truncate(0);
    snapshots.len()
}
