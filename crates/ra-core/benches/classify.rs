use std::collections::HashMap;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ra_core::{
    CoherenceLevel, PHI_BANDS, compute_multiwave_coherence, frequency_to_band, material_by_name,
};

fn bench_frequency_to_band(c: &mut Criterion) {
    let freqs: Vec<f64> = (0..256).map(|i| i as f64 * 0.015).collect();
    c.bench_function("frequency_to_band/256", |b| {
        b.iter(|| {
            for f in &freqs {
                black_box(frequency_to_band(black_box(*f)));
            }
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let values: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
    c.bench_function("coherence_classify/101", |b| {
        b.iter(|| {
            for v in &values {
                let _ = black_box(CoherenceLevel::classify(black_box(*v)));
            }
        })
    });
}

fn bench_multiwave(c: &mut Criterion) {
    let amplitudes: HashMap<&str, f64> = PHI_BANDS.iter().map(|b| (b.name, 0.4)).collect();
    let phases: HashMap<&str, f64> = PHI_BANDS
        .iter()
        .map(|b| (b.name, f64::from(b.index) * 0.1))
        .collect();
    c.bench_function("multiwave_coherence/5_bands", |b| {
        b.iter(|| compute_multiwave_coherence(black_box(&amplitudes), black_box(&phases), 0.0))
    });
}

fn bench_material_lookup(c: &mut Criterion) {
    c.bench_function("material_by_name", |b| {
        b.iter(|| material_by_name(black_box("Obsidian")))
    });
}

criterion_group!(
    benches,
    bench_frequency_to_band,
    bench_classify,
    bench_multiwave,
    bench_material_lookup
);
criterion_main!(benches);
