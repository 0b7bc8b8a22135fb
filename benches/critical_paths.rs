//! Criterion benchmarks for confetti critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Field: particle field generation
//! - Motion: per-particle motion derivation
//! - Plan: full explosion planning, sequential and parallel
//! - Color: palette color parsing during validation

use confetti::color::parse_color;
use confetti::explosion::Explosion;
use confetti::field::generate_particles;
use confetti::models::{ExplosionConfig, ExplosionOptions, Particle};
use confetti::motion::derive_motion_parameters;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNTS: [usize; 3] = [50, 200, 2000];

fn explosion_with(count: usize) -> Explosion {
    Explosion::new(ExplosionOptions { particle_count: Some(count as i64), ..Default::default() })
}

// =============================================================================
// Field Benchmarks
// =============================================================================

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");
    let colors = confetti::constants::default_colors();

    for count in COUNTS {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("generate", count), &count, |b, &count| {
            b.iter(|| generate_particles(black_box(count), black_box(&colors)))
        });
    }

    group.finish();
}

// =============================================================================
// Motion Benchmarks
// =============================================================================

fn bench_motion(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion");
    let config = ExplosionConfig::default();
    let particle = Particle::new("#FFC700", 137.0);
    let mut rng = StdRng::seed_from_u64(42);

    group.bench_function("derive_single", |b| {
        b.iter(|| derive_motion_parameters(black_box(&particle), black_box(&config), &mut rng))
    });

    group.finish();
}

// =============================================================================
// Plan Benchmarks
// =============================================================================

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");

    for count in COUNTS {
        let explosion = explosion_with(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("sequential", count), &explosion, |b, e| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| e.plan(&mut rng))
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &explosion, |b, e| {
            b.iter(|| e.plan_parallel())
        });
    }

    group.finish();
}

// =============================================================================
// Color Benchmarks
// =============================================================================

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    // Hex fast path
    group.bench_function("parse_hex_6", |b| b.iter(|| parse_color(black_box("#FFC700"))));

    // lightningcss path
    group.bench_function("parse_named", |b| b.iter(|| parse_color(black_box("gold"))));
    group.bench_function("parse_hsl", |b| {
        b.iter(|| parse_color(black_box("hsl(45, 100%, 50%)")))
    });

    let palette = confetti::constants::default_colors();
    group.bench_function("parse_default_palette", |b| {
        b.iter(|| {
            for color in &palette {
                let _ = parse_color(black_box(color));
            }
        })
    });

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_field, bench_motion, bench_plan, bench_color);

criterion_main!(benches);
