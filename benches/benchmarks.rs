use criterion::{criterion_group, criterion_main, Criterion};
use rasterinfo::{GeoTransform, RoundingPolicy};
use std::hint::black_box;

const SIZE: (i64, i64) = (256, 256);

fn utm() -> GeoTransform {
    GeoTransform::new(10., 0., 399960., 0., -10., 5000040.)
}

fn bench_pixel_to_world(c: &mut Criterion) {
    let transform = utm();
    c.bench_function("pixel_to_world", |b| {
        b.iter(|| {
            for row in 0..SIZE.0 {
                for col in 0..SIZE.1 {
                    black_box(transform.pixel_to_world(row, col));
                }
            }
        })
    });
}

fn bench_world_to_pixel(c: &mut Criterion) {
    let transform = utm();
    c.bench_function("world_to_pixel", |b| {
        b.iter(|| {
            for row in 0..SIZE.0 {
                for col in 0..SIZE.1 {
                    let (x, y) = transform.pixel_center_to_world(row, col);
                    black_box(transform.world_to_pixel(x, y, RoundingPolicy::Floor)).ok();
                }
            }
        })
    });
}

criterion_group!(benches, bench_pixel_to_world, bench_world_to_pixel);
criterion_main!(benches);
