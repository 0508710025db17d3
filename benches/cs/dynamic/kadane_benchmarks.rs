use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kadane_mss::{find, max_subarray_sum, try_max_subarray};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_random_vec(size: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(-1_000..1_000)).collect()
}

fn bench_kadane(c: &mut Criterion) {
    let mut group = c.benchmark_group("kadane");

    for size in [1_000, 10_000, 100_000] {
        let data = generate_random_vec(size);

        group.bench_with_input(BenchmarkId::new("find_i64", size), &data, |b, data| {
            b.iter(|| find::<i64, _>(black_box(data.as_slice())))
        });

        group.bench_with_input(BenchmarkId::new("sum_only_i64", size), &data, |b, data| {
            b.iter(|| max_subarray_sum::<i64, _>(black_box(data.as_slice())))
        });

        group.bench_with_input(BenchmarkId::new("checked_i64", size), &data, |b, data| {
            b.iter(|| try_max_subarray::<i64, _>(black_box(data.as_slice())))
        });

        group.bench_with_input(BenchmarkId::new("find_bigint", size), &data, |b, data| {
            b.iter(|| find::<BigInt, _>(black_box(data.as_slice())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kadane);
criterion_main!(benches);
