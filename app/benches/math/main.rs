/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sftrig::{TableOptions, cosf, generate_tables, sinf};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::cosf(i as f32));
            }
        })
    });

    c.bench_function("system: cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::cos(i as f32));
            }
        })
    });

    c.bench_function("sftrig: cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cosf(i as f32));
            }
        })
    });

    c.bench_function("sftrig: cosf small", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cosf(i as f32 * 1e-5));
            }
        })
    });

    c.bench_function("libm::sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sinf(i as f32));
            }
        })
    });

    c.bench_function("sftrig: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinf(i as f32));
            }
        })
    });

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let huge: Vec<f32> = (0..1000)
        .map(|_| f32::from_bits(rng.random_range(0x4b00_0000u32..0x7f80_0000)))
        .collect();

    c.bench_function("libm::cosf huge", |b| {
        b.iter(|| {
            for &x in huge.iter() {
                black_box(libm::cosf(x));
            }
        })
    });

    c.bench_function("sftrig: cosf huge", |b| {
        b.iter(|| {
            for &x in huge.iter() {
                black_box(cosf(x));
            }
        })
    });

    c.bench_function("sftrig: generate tables", |b| {
        b.iter(|| black_box(generate_tables(&TableOptions::default())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
