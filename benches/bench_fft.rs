use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fftvet::{Complex64, FftImpl, RecursiveFftImpl, RustFftImpl};

fn generate_input(size: usize) -> Vec<Complex64> {
    (0..size)
        .map(|i| Complex64::new((i as f64 * 0.1).sin(), (i as f64 * 0.1).cos()))
        .collect()
}

// Both implementations on identical inputs, per power-of-two size. Doubling
// the size should scale the recursive kernel's time as O(N log N).
fn bench_forward(c: &mut Criterion) {
    let implementations: Vec<Box<dyn FftImpl<f64>>> = vec![
        Box::new(RustFftImpl::forward()),
        Box::new(RecursiveFftImpl::forward()),
    ];
    for pow in [6usize, 8, 10, 12, 14] {
        let size = 1usize << pow;
        let input = generate_input(size);
        let mut group = c.benchmark_group(format!("forward_{}", size));
        for fft in &implementations {
            group.bench_function(BenchmarkId::new(fft.name(), size), |b| {
                b.iter(|| fft.calculate(black_box(&input)).unwrap())
            });
        }
        group.finish();
    }
}

fn bench_inverse(c: &mut Criterion) {
    let implementations: Vec<Box<dyn FftImpl<f64>>> = vec![
        Box::new(RustFftImpl::inverse()),
        Box::new(RecursiveFftImpl::inverse()),
    ];
    let size = 1usize << 10;
    let input = generate_input(size);
    let mut group = c.benchmark_group(format!("inverse_{}", size));
    for fft in &implementations {
        group.bench_function(BenchmarkId::new(fft.name(), size), |b| {
            b.iter(|| fft.calculate(black_box(&input)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
