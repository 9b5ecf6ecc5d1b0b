//! Criterion benchmarks comparing the columnar vector against a `Vec` of
//! records.
//!
//! Operations:
//! - multiply_by_itself_one: square one field of every record
//! - multiply_by_itself_all: square every field of every record
//!
//! Each runs with a sequential and a strided access pattern over several
//! container sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scattered::{get, record, Vector};
use std::hint::black_box;

record! {
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct SmallObject in k {
        pub d0: f64 as D0,
        pub d1: f64 as D1,
        pub d2: f64 as D2,
        pub d3: f64 as D3,
        pub d4: f64 as D4,
        pub d5: f64 as D5,
        pub d6: f64 as D6,
        pub d7: f64 as D7,
    }
}

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const STRIDES: [usize; 2] = [1, 4];

fn random_objects(len: usize) -> Vec<SmallObject> {
    let mut rng = StdRng::seed_from_u64(0x5ca7);
    (0..len)
        .map(|_| SmallObject {
            d0: rng.gen(),
            d1: rng.gen(),
            d2: rng.gen(),
            d3: rng.gen(),
            d4: rng.gen(),
            d5: rng.gen(),
            d6: rng.gen(),
            d7: rng.gen(),
        })
        .collect()
}

fn square_all(o: &mut SmallObject) {
    o.d0 *= o.d0;
    o.d1 *= o.d1;
    o.d2 *= o.d2;
    o.d3 *= o.d3;
    o.d4 *= o.d4;
    o.d5 *= o.d5;
    o.d6 *= o.d6;
    o.d7 *= o.d7;
}

/// Benchmark: square `d0` only. The columnar layout walks one column.
fn benchmark_multiply_by_itself_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_by_itself_one");
    for &len in &SIZES {
        let records = random_objects(len);
        let mut scattered: Vector<SmallObject> = records.iter().copied().collect();
        let mut packed = records;

        for &stride in &STRIDES {
            group.throughput(Throughput::Elements((len / stride) as u64));
            let id = format!("stride_{stride}/{len}");

            group.bench_function(BenchmarkId::new("scattered", &id), |b| {
                b.iter(|| {
                    for d0 in scattered.column_mut::<k::D0>().iter_mut().step_by(stride) {
                        *d0 *= *d0;
                    }
                    black_box(&scattered);
                })
            });

            group.bench_function(BenchmarkId::new("vec", &id), |b| {
                b.iter(|| {
                    for o in packed.iter_mut().step_by(stride) {
                        o.d0 *= o.d0;
                    }
                    black_box(&packed);
                })
            });
        }
    }
    group.finish();
}

/// Benchmark: square every field through a record proxy.
fn benchmark_multiply_by_itself_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_by_itself_all");
    for &len in &SIZES {
        let records = random_objects(len);
        let mut scattered: Vector<SmallObject> = records.iter().copied().collect();
        let mut packed = records;

        for &stride in &STRIDES {
            group.throughput(Throughput::Elements((len / stride) as u64));
            let id = format!("stride_{stride}/{len}");

            group.bench_function(BenchmarkId::new("scattered", &id), |b| {
                b.iter(|| {
                    for mut o in scattered.iter_mut().step_by(stride) {
                        let mut record = o.to_record();
                        square_all(&mut record);
                        o.set(record);
                    }
                    black_box(&scattered);
                })
            });

            group.bench_function(BenchmarkId::new("vec", &id), |b| {
                b.iter(|| {
                    for o in packed.iter_mut().step_by(stride) {
                        square_all(o);
                    }
                    black_box(&packed);
                })
            });
        }
    }
    group.finish();
}

/// Benchmark: sequential read of one field through the uniform accessor.
fn benchmark_read_one_field(c: &mut Criterion) {
    let records = random_objects(10_000);
    let scattered: Vector<SmallObject> = records.iter().copied().collect();

    c.bench_function("read_one_field_via_cursor", |b| {
        b.iter(|| {
            let mut it = scattered.begin();
            let end = scattered.end();
            let mut sum = 0.0;
            while it != end {
                sum += *get::<k::D3, _>(&it);
                it.inc();
            }
            black_box(sum)
        })
    });
}

criterion_group!(
    benches,
    benchmark_multiply_by_itself_one,
    benchmark_multiply_by_itself_all,
    benchmark_read_one_field
);
criterion_main!(benches);
