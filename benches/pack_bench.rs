//! Criterion benchmarks for scalar packing.
//!
//! Run with: cargo bench

use bytestruct::{double, pack, try_unpack, unpack, Endian};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    group.throughput(Throughput::Elements(1));

    group.bench_function("pack_u32_big", |b| {
        let mut buffer = [0u8; 4];
        let mut i = 0u32;
        b.iter(|| {
            pack(black_box(i), &mut buffer, Endian::Big);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("unpack_u64_little", |b| {
        let buffer = [1u8, 2, 3, 4, 5, 6, 7, 8];
        b.iter(|| unpack::<u64>(black_box(&buffer), Endian::Little));
    });

    group.bench_function("try_unpack_i32_big", |b| {
        let buffer = [0xFFu8; 16];
        b.iter(|| try_unpack::<i32>(black_box(&buffer[3..]), Endian::Big));
    });

    group.finish();
}

fn bench_double(c: &mut Criterion) {
    let mut group = c.benchmark_group("double");
    group.throughput(Throughput::Elements(1));

    let buffer = 0.1f64.to_bits().to_be_bytes();

    group.bench_function("to_single", |b| {
        b.iter(|| double::to_single(black_box(&buffer), Endian::Big));
    });

    group.bench_function("to_single_rounded", |b| {
        b.iter(|| double::to_single_rounded(black_box(&buffer), Endian::Big));
    });

    group.finish();
}

criterion_group!(benches, bench_scalars, bench_double);
criterion_main!(benches);
