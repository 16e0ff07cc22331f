use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use impossible_objects::{
    build_stairs_path, generate_cube, generate_stairs, generate_triangle, sample, AnimationState,
    CubeParams, IllusionParams, MarkerStyle, StairsParams,
};

fn stairs_params(steps_per_side: u32) -> StairsParams {
    StairsParams {
        steps_per_side,
        step_height: 0.5,
        step_depth: 2.0,
        reveal_true_geometry: false,
    }
}

/// Benchmark: stairs generation across loop sizes
fn bench_stairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("stairs");

    for steps_per_side in [4u32, 16, 64].iter() {
        let params = stairs_params(*steps_per_side);
        group.bench_with_input(BenchmarkId::new("generate", steps_per_side), steps_per_side, |b, _| {
            b.iter(|| black_box(generate_stairs(black_box(&params))))
        });
        group.bench_with_input(BenchmarkId::new("path", steps_per_side), steps_per_side, |b, _| {
            b.iter(|| black_box(build_stairs_path(black_box(&params))))
        });
    }

    group.finish();
}

/// Benchmark: fixed-topology generators
fn bench_triangle_and_cube(c: &mut Criterion) {
    let params = IllusionParams {
        reveal_true_geometry: true,
        ..Default::default()
    };
    let triangle = params.triangle();
    let cube = CubeParams {
        size: params.cube_size,
        reveal_true_geometry: true,
    };

    c.bench_function("triangle_generate", |b| {
        b.iter(|| black_box(generate_triangle(black_box(&triangle))))
    });
    c.bench_function("cube_generate", |b| b.iter(|| black_box(generate_cube(black_box(&cube)))));
}

/// Benchmark: one second of marker playback at 60 fps
fn bench_sampler(c: &mut Criterion) {
    let path = build_stairs_path(&stairs_params(16));
    let style = MarkerStyle::default();

    c.bench_function("sample_60_frames", |b| {
        b.iter(|| {
            let mut state = AnimationState::new();
            for _ in 0..60 {
                black_box(sample(&path, &mut state, 1.0 / 60.0, 2.0, &style));
            }
            black_box(state.progress())
        })
    });
}

criterion_group!(benches, bench_stairs, bench_triangle_and_cube, bench_sampler);
criterion_main!(benches);
