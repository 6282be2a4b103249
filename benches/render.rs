use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tangrams::export::{eps, pdf, png, svg};
use tangrams::figures::catalog;
use tangrams::{ExportOptions, Figure};

fn build_all(c: &mut Criterion) {
    c.bench_function("build every figure", |b| {
        b.iter(|| {
            for entry in catalog() {
                black_box(entry.build());
            }
        })
    });
}

fn encode(c: &mut Criterion) {
    let figures: Vec<Figure> = catalog().iter().map(|e| e.build()).collect();
    let opts = ExportOptions::default();

    c.bench_function("pdf", |b| {
        b.iter(|| {
            for fig in &figures {
                black_box(pdf::document(fig, &opts).unwrap());
            }
        })
    });
    c.bench_function("eps", |b| {
        b.iter(|| {
            for fig in &figures {
                black_box(eps::document(fig, &opts).unwrap());
            }
        })
    });
    c.bench_function("svg", |b| {
        b.iter(|| {
            for fig in &figures {
                black_box(svg::document(fig, &opts).unwrap().to_string());
            }
        })
    });
    c.bench_function("png", |b| {
        b.iter(|| {
            for fig in &figures {
                black_box(png::render(fig, &opts).unwrap());
            }
        })
    });
}

criterion_group!(benches, build_all, encode);
criterion_main!(benches);
