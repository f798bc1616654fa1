use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use value_utils::{ComparatorStrategy, ComparisonStrategy, StandardComparisonStrategy};

/// Data with no repeats at all.
fn unique_data(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

/// Data where roughly five percent of the elements repeat an earlier one.
fn data_with_duplicates(n: usize) -> Vec<u32> {
    let mut data = unique_data(n);
    for i in 0..n / 20 {
        data.push((i * 7 % n) as u32);
    }
    data
}

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicates_from");

    // the scan is quadratic, keep the sizes modest
    for &n in &[256usize, 1024] {
        let unique = unique_data(n);
        let with_dups = data_with_duplicates(n);

        group.bench_with_input(
            BenchmarkId::new("standard/all_unique", n),
            &unique,
            |b, data| {
                b.iter(|| {
                    let duplicates =
                        StandardComparisonStrategy.duplicates_from(Some(black_box(data.clone())));
                    black_box(duplicates);
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("standard/with_dups", n),
            &with_dups,
            |b, data| {
                b.iter(|| {
                    let duplicates =
                        StandardComparisonStrategy.duplicates_from(Some(black_box(data.clone())));
                    black_box(duplicates);
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("comparator/with_dups", n),
            &with_dups,
            |b, data| {
                let strategy = ComparatorStrategy::new(|left: &u32, right: &u32| left.cmp(right));
                b.iter(|| {
                    let duplicates = strategy.duplicates_from(Some(black_box(data.clone())));
                    black_box(duplicates);
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_duplicates);
criterion_main!(benches);
