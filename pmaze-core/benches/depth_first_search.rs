use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pmaze_core::{Generator, MazeConfig};

const SMALL: MazeConfig = MazeConfig {
    rows: 12,
    columns: 20,
};
const LARGE: MazeConfig = MazeConfig {
    rows: 200,
    columns: 300,
};

pub fn dfs_small(c: &mut Criterion) {
    let generator = Generator::default();
    c.bench_function("dfs_12x20", |b| {
        b.iter(|| generator.generate_seeded(black_box(&SMALL), Some(0)).unwrap())
    });
}

pub fn dfs_large(c: &mut Criterion) {
    let generator = Generator::default();
    c.bench_function("dfs_200x300", |b| {
        b.iter(|| generator.generate_seeded(black_box(&LARGE), Some(0)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = dfs_small, dfs_large}
criterion_main!(benches);
