/// Benchmark suite for chunk generation and face-culled meshing
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxel_world::{
    Block, Chunk, ChunkCoordinate, MeshBuilder, PerlinNoiseGenerator, TerrainGenerator,
    VertexLayout, World,
};

fn bench_mesh_empty(c: &mut Criterion) {
    c.bench_function("mesh_empty", |b| {
        let chunk = Chunk::new(ChunkCoordinate::new(0, 0));
        let builder = MeshBuilder::default();
        b.iter(|| builder.build(black_box(&chunk)));
    });
}

fn bench_mesh_solid(c: &mut Criterion) {
    c.bench_function("mesh_solid", |b| {
        let chunk = Chunk::filled(ChunkCoordinate::new(0, 0), Block::SOLID);
        let builder = MeshBuilder::default();
        b.iter(|| builder.build(black_box(&chunk)));
    });
}

fn bench_mesh_terrain(c: &mut Criterion) {
    let chunk = PerlinNoiseGenerator::new(0)
        .generate_chunk(ChunkCoordinate::new(0, 0))
        .unwrap();

    let mut group = c.benchmark_group("mesh_terrain");
    for layout in [VertexLayout::Position, VertexLayout::PositionNormal] {
        let builder = MeshBuilder::new(layout);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{layout:?}")), &chunk, |b, chunk| {
            b.iter(|| builder.build(black_box(chunk)));
        });
    }
    group.finish();
}

fn bench_generate_terrain(c: &mut Criterion) {
    c.bench_function("generate_terrain", |b| {
        let generator = PerlinNoiseGenerator::new(0);
        b.iter(|| generator.generate_chunk(black_box(ChunkCoordinate::new(3, -2))));
    });
}

fn bench_mesh_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_area");
    group.sample_size(10);

    for distance in [0u32, 1, 2] {
        let mut world = World::with_seed(0);
        let center = ChunkCoordinate::new(0, 0);
        let chunks = world.load_area(center, distance).unwrap();
        let guards: Vec<_> = chunks.iter().map(|chunk| chunk.get()).collect();
        let builder = MeshBuilder::default();

        group.bench_with_input(BenchmarkId::from_parameter(distance), &guards, |b, guards| {
            b.iter(|| builder.build_combined(guards.iter().map(|chunk| &**chunk), center));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_mesh_empty,
    bench_mesh_solid,
    bench_mesh_terrain,
    bench_generate_terrain,
    bench_mesh_area
);
criterion_main!(benches);
