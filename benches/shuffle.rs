use secure_shuffle::shuffle::secure_shuffle;
use secure_shuffle::source::SystemRandomSource;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_shuffle(c: &mut Criterion) {
    let mut source = SystemRandomSource::new();

    let mut small: Vec<u64> = (0..64).collect();
    c.bench_function("secure shuffle 64 elements", |b| {
        b.iter(|| secure_shuffle(black_box(&mut small), Some(&mut source)).unwrap())
    });

    let mut large: Vec<u64> = (0..4096).collect();
    c.bench_function("secure shuffle 4096 elements", |b| {
        b.iter(|| secure_shuffle(black_box(&mut large), Some(&mut source)).unwrap())
    });
}

criterion_group!(benches, bench_shuffle);
criterion_main!(benches);
