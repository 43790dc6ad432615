// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vantage_integrate::Integrator;

fn add(s: &f64, d: &f64) -> f64 {
    s + d
}

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate/fold");

    // Bounded buffers evict on every step once full; compare against unbounded growth.
    for cap in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(10_000));
        group.bench_with_input(BenchmarkId::new("bounded", cap), &cap, |b, &cap| {
            b.iter(|| {
                let mut it = Integrator::bounded(0.0, add, cap);
                for i in 0..10_000 {
                    it.integrate(f64::from(i));
                }
                black_box(it.into_state())
            });
        });
    }

    group.bench_function("unbounded", |b| {
        b.iter(|| {
            let mut it = Integrator::unbounded(0.0, add);
            for i in 0..10_000 {
                it.integrate(f64::from(i));
            }
            black_box(it.into_state())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_integrate);
criterion_main!(benches);
