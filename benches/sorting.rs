use std::cell::RefCell;

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use pattern_algorithms::{merge_sort, merge_sort_count_inversions, quickselect_with, quicksort_with};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const INPUT_SIZES: &[(&str, usize)] = &[
    ("l1_4k", 4 * 1024),
    ("l2_64k", 64 * 1024),
    ("l3_1m", 1024 * 1024),
];

fn make_input(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(i32::MIN..=i32::MAX)).collect()
}

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");
    for &(label, len) in INPUT_SIZES {
        let input = make_input(len, 0x5EED ^ len as u64);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("sort", label), |b| {
            b.iter(|| merge_sort(black_box(input.as_slice())))
        });
        group.bench_function(BenchmarkId::new("count_inversions", label), |b| {
            b.iter(|| merge_sort_count_inversions(black_box(input.as_slice())).1)
        });
    }
    group.finish();
}

fn bench_quick_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_sort");
    for &(label, len) in INPUT_SIZES {
        let input = make_input(len, 0x5EED ^ len as u64);
        group.throughput(Throughput::Elements(len as u64));

        // Scratch buffer refilled from `input` before every run.
        let data = RefCell::new(vec![0i32; len]);
        let mut rng = StdRng::seed_from_u64(len as u64);

        group.bench_function(BenchmarkId::new("sort_random", label), |b| {
            b.iter_batched(
                || data.borrow_mut().copy_from_slice(&input),
                |()| quicksort_with(black_box(data.borrow_mut().as_mut_slice()), &mut rng),
                BatchSize::LargeInput,
            )
        });

        let sorted: Vec<i32> = (0..len as i32).collect();
        group.bench_function(BenchmarkId::new("sort_presorted", label), |b| {
            b.iter_batched(
                || data.borrow_mut().copy_from_slice(&sorted),
                |()| quicksort_with(black_box(data.borrow_mut().as_mut_slice()), &mut rng),
                BatchSize::LargeInput,
            )
        });

        group.bench_function(BenchmarkId::new("select_median", label), |b| {
            b.iter_batched(
                || data.borrow_mut().copy_from_slice(&input),
                |()| {
                    let mut values = data.borrow_mut();
                    let median =
                        quickselect_with(black_box(values.as_mut_slice()), len / 2, &mut rng).copied();
                    median
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge_sort, bench_quick_sort);
criterion_main!(benches);
