//! Benchmark for chunk generation and payload encoding.
//!
//! Run with: cargo bench --package strata_procedural --bench chunk_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use strata_procedural::{generate_chunk, material_at, ChunkCoord, VOXELS_PER_CHUNK};

fn benchmark_single_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_generation");
    group.throughput(Throughput::Elements(VOXELS_PER_CHUNK as u64));

    group.bench_function("surface_chunk", |b| {
        let mut coord = 0i32;
        b.iter(|| {
            coord = coord.wrapping_add(1);
            black_box(generate_chunk(ChunkCoord::new(coord, 0, coord / 2)))
        });
    });

    group.finish();
}

fn benchmark_material_at(c: &mut Criterion) {
    c.bench_function("material_at_single_voxel", |b| {
        let mut x = 0i64;
        b.iter(|| {
            x += 1;
            black_box(material_at(black_box(x), black_box(11), black_box(x / 3)))
        });
    });
}

fn benchmark_payload_encoding(c: &mut Criterion) {
    let grid = generate_chunk(ChunkCoord::new(7, 0, -3));

    let mut group = c.benchmark_group("chunk_encoding");
    group.throughput(Throughput::Bytes(grid.encode_payload().len() as u64));

    group.bench_function("encode_payload", |b| {
        b.iter(|| black_box(grid.encode_payload()));
    });
    group.bench_function("to_frame", |b| {
        b.iter(|| black_box(grid.to_frame()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_chunk,
    benchmark_material_at,
    benchmark_payload_encoding
);
criterion_main!(benches);
