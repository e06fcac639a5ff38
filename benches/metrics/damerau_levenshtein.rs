use criterion::{black_box, criterion_group, criterion_main, Criterion};

use textdist::metrics::damerau_levenshtein::{damerau_levenshtein, damerau_levenshtein_str};

fn bench_short_words(c: &mut Criterion) {
    c.bench_function("damerau_levenshtein short words", |b| {
        b.iter(|| damerau_levenshtein_str(black_box("kitten"), black_box("sitting")))
    });
}

fn bench_shared_affixes(c: &mut Criterion) {
    // The trimming fast paths should make this pair nearly free despite the
    // operand lengths.
    let a = "the quick brown fox jumped over the lazy dog";
    let b = "the quick brown cat jumped over the lazy dog";

    c.bench_function("damerau_levenshtein shared affixes", |bench| {
        bench.iter(|| damerau_levenshtein_str(black_box(a), black_box(b)))
    });
}

fn bench_dissimilar_sentences(c: &mut Criterion) {
    let a = "pack my box with five dozen liquor jugs";
    let b = "sphinx of black quartz judge my vow";

    c.bench_function("damerau_levenshtein dissimilar sentences", |bench| {
        bench.iter(|| damerau_levenshtein_str(black_box(a), black_box(b)))
    });
}

fn bench_token_sequences(c: &mut Criterion) {
    let a: Vec<&str> = "the quick brown fox jumped over the lazy dog".split(' ').collect();
    let b: Vec<&str> = "the lazy dog jumped over the quick brown fox".split(' ').collect();

    c.bench_function("damerau_levenshtein token sequences", |bench| {
        bench.iter(|| damerau_levenshtein(black_box(&a), black_box(&b)))
    });
}

criterion_group!(
    benches,
    bench_short_words,
    bench_shared_affixes,
    bench_dissimilar_sentences,
    bench_token_sequences
);
criterion_main!(benches);
