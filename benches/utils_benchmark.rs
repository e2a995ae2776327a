use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pitch_tuner::{
    detector::{autocorrelation::AutocorrelationDetector, internals::find_rising_inflection},
    DetectorConfig, Tuner,
};

const SAMPLE_RATE: u32 = 48000;
const SIZE: usize = 2048;

fn signal(freq: f64) -> Vec<f32> {
    // Signal coming from some source (microphone, generated, etc...)
    let dt = 1.0 / SAMPLE_RATE as f64;
    (0..SIZE)
        .map(|x| (0.8 * (2.0 * PI * x as f64 * dt * freq).sin()) as f32)
        .collect()
}

pub fn utils_benchmark(c: &mut Criterion) {
    let low = signal(82.41);
    let high = signal(880.0);

    c.bench_function("find_rising_inflection 82 Hz", |b| {
        b.iter(|| find_rising_inflection(black_box(&low[..]), 0.92, 0.05))
    });
    c.bench_function("find_rising_inflection 880 Hz", |b| {
        b.iter(|| find_rising_inflection(black_box(&high[..]), 0.92, 0.05))
    });
}

pub fn pitch_detect_benchmark(c: &mut Criterion) {
    let signal = signal(300.0);
    let noise: Vec<f32> = (0..SIZE)
        .map(|x| (((x * 7919) % 257) as f32 / 128.0 - 1.0) * 0.3)
        .collect();

    let detector =
        AutocorrelationDetector::<f32>::new(SIZE, SAMPLE_RATE, &DetectorConfig::default()).unwrap();
    let mut tuner = Tuner::<f32>::new(DetectorConfig::default(), SIZE, SAMPLE_RATE).unwrap();

    c.bench_function("Autocorrelation estimate", |b| {
        b.iter(|| detector.estimate(black_box(&signal)).unwrap().unwrap());
    });

    c.bench_function("Autocorrelation estimate noise", |b| {
        b.iter(|| detector.estimate(black_box(&noise)).unwrap());
    });

    c.bench_function("Tuner process_samples", |b| {
        b.iter(|| tuner.process_samples(black_box(&signal)).unwrap());
    });
}

criterion_group!(benches, pitch_detect_benchmark, utils_benchmark);
criterion_main!(benches);
