use criterion::{black_box, criterion_group, criterion_main, Criterion};
use char_sequences::{AnySequence, SequenceArray, SequenceRing};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn filled<S: AnySequence + Default>(n: usize) -> S {
    let mut seq = S::default();
    for ch in ALPHABET.chars().cycle().take(n) {
        seq.append(ch.encode_utf8(&mut [0; 4])).unwrap();
    }
    seq
}

fn bench_append(c: &mut Criterion) {
    let n = 64;
    let mut group = c.benchmark_group("SequenceArray vs SequenceRing (Append 64)");
    group.bench_function("SequenceArray", |b| {
        b.iter(|| {
            let mut seq = SequenceArray::new();
            for _ in 0..n {
                seq.append(black_box("A")).unwrap();
            }
            seq
        })
    });

    group.bench_function("SequenceRing", |b| {
        b.iter(|| {
            let mut seq = SequenceRing::new();
            for _ in 0..n {
                seq.append(black_box("A")).unwrap();
            }
            seq
        })
    });
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let n = 64;
    let arr: SequenceArray = filled(n);
    let ring: SequenceRing = filled(n);

    let mut group = c.benchmark_group("SequenceArray vs SequenceRing (Get 64)");
    group.bench_function("SequenceArray", |b| {
        b.iter(|| {
            for i in 0..n {
                black_box(arr.get(black_box(i)).unwrap());
            }
        })
    });

    group.bench_function("SequenceRing", |b| {
        b.iter(|| {
            for i in 0..n {
                black_box(ring.get(black_box(i)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_reshape(c: &mut Criterion) {
    let n = 256;
    let arr: SequenceArray = filled(n);
    let ring: SequenceRing = filled(n);

    let mut group = c.benchmark_group("Reverse + DeleteAll (256)");
    group.bench_function("SequenceArray", |b| {
        b.iter(|| {
            let mut seq = arr.clone();
            seq.reverse();
            seq.delete_all(black_box("A")).unwrap();
            seq
        })
    });

    group.bench_function("SequenceRing", |b| {
        b.iter(|| {
            let mut seq = ring.clone();
            seq.reverse();
            seq.delete_all(black_box("A")).unwrap();
            seq
        })
    });
    group.finish();
}

criterion_group!(benches, bench_append, bench_get, bench_reshape);
criterion_main!(benches);
