//! Benchmarks for the stampcard pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stampcard::{composite, encode_png, AlphaMask, Offset, Raster, Sprite};

fn synthetic_card() -> Raster {
    Raster::filled(800, 600, [50.0, 50.0, 50.0])
}

fn synthetic_sprite(weight: f32) -> Sprite {
    Sprite::from_parts(
        Raster::filled(64, 64, [220.0, 30.0, 30.0]),
        AlphaMask::uniform(64, 64, weight),
    )
    .expect("matching dimensions")
}

// -- Compositing benchmarks --

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");

    let sprite = synthetic_sprite(0.5);
    let three_days = [
        Offset::new(10, 10),
        Offset::new(100, 200),
        Offset::new(700, 500),
    ];

    group.bench_function("three_days", |b| {
        b.iter(|| {
            let mut card = synthetic_card();
            composite(&mut card, &sprite, black_box(&three_days)).unwrap();
            card
        })
    });

    let full_month: Vec<Offset> = (0..31)
        .map(|i| Offset::new((i % 7) * 100, (i / 7) * 100))
        .collect();

    group.bench_function("full_month", |b| {
        b.iter(|| {
            let mut card = synthetic_card();
            composite(&mut card, &sprite, black_box(&full_month)).unwrap();
            card
        })
    });

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let card = synthetic_card();
    group.bench_function("png_800x600", |b| {
        b.iter(|| encode_png(black_box(&card)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_composite, bench_encode);
criterion_main!(benches);
