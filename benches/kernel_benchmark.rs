//! Kernel and training benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use svmscope::classifier::SvmClassifier;
use svmscope::core::{KernelKind, Point};
use svmscope::data;
use svmscope::kernel::{
    Kernel, LinearKernel, PolynomialKernel, RbfKernel, SigmoidKernel,
};

fn bench_kernels(c: &mut Criterion) {
    let x = Point::new(0.7, -1.3);
    let y = Point::new(-2.1, 0.4);

    let mut group = c.benchmark_group("kernel_compute");
    group.bench_function("linear", |b| {
        let k = LinearKernel::new();
        b.iter(|| k.compute(black_box(x), black_box(y)))
    });
    group.bench_function("rbf", |b| {
        let k = RbfKernel::new(0.5);
        b.iter(|| k.compute(black_box(x), black_box(y)))
    });
    group.bench_function("poly", |b| {
        let k = PolynomialKernel::cubic(0.5);
        b.iter(|| k.compute(black_box(x), black_box(y)))
    });
    group.bench_function("sigmoid", |b| {
        let k = SigmoidKernel::new(0.5, 0.0);
        b.iter(|| k.compute(black_box(x), black_box(y)))
    });
    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let clusters = data::two_clusters(data::DEFAULT_SEED);
    let rings = data::circles(60, 0.5, 0.1, data::DEFAULT_SEED);

    let mut group = c.benchmark_group("fit");
    group.bench_function("two_clusters_rbf", |b| {
        b.iter(|| {
            SvmClassifier::new()
                .fit(black_box(&clusters))
                .expect("fit")
        })
    });
    group.bench_function("circles_rbf", |b| {
        b.iter(|| SvmClassifier::new().fit(black_box(&rings)).expect("fit"))
    });
    group.bench_function("two_clusters_linear", |b| {
        b.iter(|| {
            SvmClassifier::new()
                .with_kernel(KernelKind::Linear)
                .fit(black_box(&clusters))
                .expect("fit")
        })
    });
    group.finish();
}

criterion_group!(benches, bench_kernels, bench_fit);
criterion_main!(benches);
