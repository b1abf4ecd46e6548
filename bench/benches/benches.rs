use criterion::{Criterion, criterion_group, criterion_main};
use glam::DVec2;
use noiser::{
    NoiseField, Shaping,
    utils::{flatten2, pixel_centers, sample_grid},
};

const SIZE: usize = 257;
const SEED: u64 = 2025;
const AREA: DVec2 = DVec2::new(SIZE as f64, SIZE as f64);

fn field(octaves: i32) -> NoiseField {
    let mut field = NoiseField::with_seed(AREA, 32.0, SEED);
    field.set_value_range(-1.0, 1.0);
    field.set_octaves(octaves);
    field
}

fn bench_construct(c: &mut Criterion) {
    c.bench_function("NoiseField::with_seed (chunk 4)", |b| {
        b.iter(|| NoiseField::with_seed(AREA, 4.0, SEED))
    });
}

fn bench_single_octave(c: &mut Criterion) {
    let points = pixel_centers(AREA, SIZE, SIZE);
    let field = field(1);
    c.bench_function("generate_noise 1 octave + flatten", |b| {
        b.iter(|| {
            let values = field.generate_noise(&points);
            let _flat = flatten2(&values);
        })
    });
}

fn bench_raw_samples(c: &mut Criterion) {
    let points = pixel_centers(AREA, SIZE, SIZE);
    let field = field(1);
    c.bench_function("sample_grid raw single octave", |b| {
        b.iter(|| sample_grid(&field, &points))
    });
}

fn bench_octaves(c: &mut Criterion) {
    let points = pixel_centers(AREA, SIZE, SIZE);
    let field = field(6);
    c.bench_function("generate_noise 6 octaves", |b| {
        b.iter(|| field.generate_noise(&points))
    });
}

fn bench_parallel(c: &mut Criterion) {
    let points = pixel_centers(AREA, SIZE, SIZE);
    let field = field(6);
    c.bench_function("par_generate_noise 6 octaves", |b| {
        b.iter(|| field.par_generate_noise(&points))
    });
}

fn bench_into_reused_grid(c: &mut Criterion) {
    let points = pixel_centers(AREA, SIZE, SIZE);
    let mut field = field(4);
    field.set_shaping_curve(Shaping::signed_smootherstep());
    let mut values = Vec::new();
    c.bench_function("generate_noise_into 4 octaves, quintic shaping", |b| {
        b.iter(|| field.generate_noise_into(&points, &mut values))
    });
}

criterion_group!(
    noise_benchmarks,
    bench_construct,
    bench_single_octave,
    bench_raw_samples,
    bench_octaves,
    bench_parallel,
    bench_into_reused_grid
);
criterion_main!(noise_benchmarks);
