//! Morse Tree Benchmarks
//!
//! Benchmarks for the Morse tree codec using the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use morse_tree_lib::config::render::RenderConfig;
use morse_tree_lib::data_structures::morse_tree::STANDARD_ALPHABET;
use morse_tree_lib::data_structures::{MorseTree, SharedMorseTree};
use morse_tree_lib::render::{self, TreeLayout};
use std::time::Duration;

const PANGRAM: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789";

/// Build text of roughly `len` characters by repeating the pangram.
fn sample_text(len: usize) -> String {
    PANGRAM.chars().cycle().take(len).collect::<String>().trim().to_string()
}

/// Benchmark building the tree and single-character operations
fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("morse_tree");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    group.throughput(Throughput::Elements(STANDARD_ALPHABET.len() as u64));
    group.bench_function("load_standard_alphabet", |b| {
        b.iter(|| {
            let mut tree = MorseTree::new();
            black_box(tree.load_standard_alphabet())
        });
    });

    let tree = MorseTree::with_standard_alphabet();

    // E is found first in pre-order, 0 last
    for c in ['E', 'Q', '0'] {
        group.bench_with_input(BenchmarkId::new("lookup", c), &c, |b, &c| {
            b.iter(|| tree.lookup(black_box(c)));
        });
    }

    for (c, code) in [('E', "."), ('Q', "--.-"), ('0', "-----")] {
        group.bench_with_input(BenchmarkId::new("decode_symbol", c), code, |b, code| {
            b.iter(|| tree.decode_symbol(black_box(code)));
        });
    }

    group.bench_function("remove_and_reinsert", |b| {
        b.iter_batched(
            MorseTree::with_standard_alphabet,
            |mut tree| {
                tree.remove(black_box('9'));
                tree.insert(black_box('9'))
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark encoding and decoding of whole messages
fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("morse_codec");
    let tree = MorseTree::with_standard_alphabet();

    for size in [16, 256, 4096].iter() {
        let text = sample_text(*size);
        let code = match tree.encode_word(&text) {
            Ok(code) => code,
            Err(e) => panic!("sample text failed to encode: {e}"),
        };

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode_word", size), &text, |b, text| {
            b.iter(|| tree.encode_word(black_box(text)));
        });

        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode_word", size), &code, |b, code| {
            b.iter(|| tree.decode_word(black_box(code)));
        });
    }

    let shared = SharedMorseTree::from_tree(tree.clone());
    let text = sample_text(256);
    group.bench_function("shared_encode_word", |b| {
        b.iter(|| shared.encode_word(black_box(&text)));
    });

    group.finish();
}

/// Benchmark the renderers over the full alphabet
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("morse_render");
    let tree = MorseTree::with_standard_alphabet();
    let config = RenderConfig::default();

    group.bench_function("layout", |b| {
        b.iter(|| TreeLayout::compute(black_box(tree.root()), &config));
    });

    if let Some(layout) = TreeLayout::compute(tree.root(), &config) {
        group.bench_function("svg", |b| b.iter(|| black_box(&layout).to_svg()));
    }

    group.bench_function("outline", |b| {
        b.iter(|| render::outline(black_box(tree.root())));
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_tree_operations, bench_codec, bench_render
}

criterion_main!(benches);
