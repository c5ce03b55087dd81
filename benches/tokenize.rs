use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use gsam_rs::{build_trie_from_chars, GeneralSam, GreedyTokenizer};

/// A deterministic synthetic vocabulary of two- and three-syllable words
fn vocab() -> Vec<String> {
    const SYLS: [&str; 12] = [
        "ba", "be", "bi", "da", "do", "du", "ga", "go", "ka", "ku", "ma", "mo",
    ];

    let mut words = Vec::new();
    for a in SYLS {
        for b in SYLS {
            words.push(format!("{}{}", a, b));
        }
    }
    for a in SYLS {
        for b in SYLS.iter().take(4) {
            for c in SYLS.iter().take(4) {
                words.push(format!("{}{}{}", a, b, c));
            }
        }
    }
    words
}

fn text(words: &[String], len: usize) -> String {
    let mut out = String::new();
    let mut i = 0;
    while out.chars().count() < len {
        out.push_str(&words[i % words.len()]);
        // sprinkle in symbols outside the vocabulary
        if i % 7 == 0 {
            out.push('x');
        }
        i += 1;
    }
    out
}

fn bench_construction(c: &mut Criterion) {
    let words = vocab();

    c.bench_function("build_sam_from_trie", |b| {
        b.iter(|| {
            let (trie, _) = build_trie_from_chars(black_box(&words)).unwrap();
            GeneralSam::from_trie(&trie).unwrap()
        })
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let words = vocab();
    let (trie, _) = build_trie_from_chars(&words).unwrap();
    let sam = GeneralSam::from_trie(&trie).unwrap();
    let tokenizer = GreedyTokenizer::from_sam_and_trie(sam, trie).unwrap();
    let input = text(&words, 10_000);

    c.bench_function("tokenize_10k_chars", |b| {
        b.iter(|| tokenizer.tokenize_chars(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, bench_construction, bench_tokenize);
criterion_main!(benches);
