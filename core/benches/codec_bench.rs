use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};

use hksave_core::prelude::*;

/// Save-shaped document with `n` scene entries.
fn save_document(n: usize) -> Value {
    let scenes: Vec<Value> = (0..n)
        .map(|i| json!({"sceneName": format!("Crossroads_{i:02}"), "id": format!("Geo Rock {i}"), "activated": i % 2 == 0}))
        .collect();
    json!({
        "playerData": {"geo": 1250, "health": 5, "maxHealth": 9, "hasDash": true},
        "sceneData": {"persistentBoolItems": scenes},
    })
}

pub fn encode_benchmark(c: &mut Criterion) {
    let codec = SaveCodec::default();
    let mut group = c.benchmark_group("encode");
    for n in [10usize, 100, 1000] {
        let doc = save_document(n);
        let len = serde_json::to_vec(&doc).map(|v| v.len()).unwrap_or(0);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &doc, |b, doc| {
            b.iter(|| codec.encode(black_box(doc)))
        });
    }
    group.finish();
}

pub fn decode_benchmark(c: &mut Criterion) {
    let codec = SaveCodec::default();
    let mut group = c.benchmark_group("decode");
    for n in [10usize, 100, 1000] {
        let raw = match codec.encode(&save_document(n)) {
            Ok(raw) => raw,
            Err(e) => panic!("encode failed: {e}"),
        };
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::new("standard", n), &raw, |b, raw| {
            b.iter(|| codec.decode(black_box(raw)))
        });
    }

    let plain = serde_json::to_vec(&save_document(100)).unwrap_or_default();
    group.bench_function("raw-text", |b| b.iter(|| codec.decode(black_box(&plain))));
    group.finish();
}

criterion_group!(benches, encode_benchmark, decode_benchmark);
criterion_main!(benches);
