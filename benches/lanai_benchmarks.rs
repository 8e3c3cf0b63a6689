//! Lanai Benchmarks
//!
//! Benchmarks for the trie's hot paths, implemented with Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkId,
    Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use lanai_lib::data_structures::LanaiTrie;

/// Zero-padded numeric keys of `width` bytes; neighbours share long prefixes.
fn keys(count: usize, width: usize) -> Vec<String> {
    (0..count).map(|i| format!("{:0width$}", i, width = width)).collect()
}

/// Benchmark the Lanai Trie
fn bench_lanai_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Insert benchmark with different key sizes
    for key_length in [8, 16, 32, 64].iter() {
        let keys = keys(1000, *key_length);
        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::new("insert", key_length), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = LanaiTrie::new();
                for key in keys {
                    black_box(trie.insert(key));
                }
                trie
            });
        });
    }

    // Lookup benchmark, hits and misses
    group.bench_function("contains", |b| {
        let keys = keys(1000, 16);
        let trie: LanaiTrie = keys.iter().collect();
        let mut index = 0;
        b.iter(|| {
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(trie.contains(key));
            black_box(trie.contains("not-a-stored-key"));
        });
    });

    // Removal with compaction
    group.bench_function("remove_all", |b| {
        let keys = keys(1000, 16);
        b.iter_batched(
            || keys.iter().collect::<LanaiTrie>(),
            |mut trie| {
                for key in &keys {
                    black_box(trie.remove(key).is_ok());
                }
                trie
            },
            BatchSize::LargeInput,
        );
    });

    // Teardown of a populated trie
    group.bench_function("teardown", |b| {
        let keys = keys(1000, 32);
        b.iter_batched(
            || keys.iter().collect::<LanaiTrie>(),
            drop,
            BatchSize::LargeInput,
        );
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
    targets = bench_lanai_trie
}

criterion_main!(benches);
