use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use zpak::{dumpb, encode_to_vec, loadb, Value};

fn sample_record() -> Value {
    Value::Map(vec![
        ("id".to_string(), Value::Int(12345)),
        ("name".to_string(), Value::Str("benchmark".to_string())),
        ("ratio".to_string(), Value::Float(0.618)),
        (
            "tags".to_string(),
            Value::Array(vec![
                Value::Str("fast".to_string()),
                Value::Str("compact".to_string()),
            ]),
        ),
        ("ok".to_string(), Value::Bool(true)),
        ("extra".to_string(), Value::Null),
    ])
}

fn bench_encode_scalar(c: &mut Criterion) {
    let v = Value::Int(123456789);
    c.bench_function("encode scalar int", |b| {
        b.iter(|| {
            let buf = encode_to_vec(black_box(&v)).unwrap();
            black_box(buf);
        })
    });
}

fn bench_encode_nested(c: &mut Criterion) {
    let v = sample_record();
    c.bench_function("encode nested map", |b| {
        b.iter(|| {
            let buf = encode_to_vec(black_box(&v)).unwrap();
            black_box(buf);
        })
    });
}

fn bench_decode_nested(c: &mut Criterion) {
    let bytes = encode_to_vec(&sample_record()).unwrap();
    c.bench_function("decode nested map", |b| {
        b.iter(|| {
            let v = zpak::decode_from_slice(black_box(&bytes)).unwrap();
            black_box(v);
        })
    });
}

fn bench_dump_load_batch(c: &mut Criterion) {
    let values: Vec<Value> = (0..100).map(|_| sample_record()).collect();

    c.bench_function("dumpb 100 records", |b| {
        b.iter(|| {
            let bytes = dumpb(black_box(&values)).unwrap();
            black_box(bytes);
        })
    });

    let bytes = dumpb(&values).unwrap();
    c.bench_function("loadb 100 records", |b| {
        b.iter(|| {
            let loaded = loadb(black_box(&bytes)).unwrap();
            black_box(loaded);
        })
    });
}

// то же дерево значений через текстовый формат, для сравнения
fn bench_against_json(c: &mut Criterion) {
    let values: Vec<Value> = (0..100).map(|_| sample_record()).collect();
    let json: Vec<serde_json::Value> = values
        .iter()
        .cloned()
        .map(|v| serde_json::Value::try_from(v).unwrap())
        .collect();
    let json_bytes = serde_json::to_vec(&json).unwrap();
    let zpak_bytes = dumpb(&values).unwrap();

    c.bench_function("loadb 100 records (zpak)", |b| {
        b.iter(|| {
            let loaded = loadb(black_box(&zpak_bytes)).unwrap();
            black_box(loaded);
        })
    });

    c.bench_function("from_slice 100 records (serde_json)", |b| {
        b.iter(|| {
            let loaded: Vec<serde_json::Value> =
                serde_json::from_slice(black_box(&json_bytes)).unwrap();
            black_box(loaded);
        })
    });
}

criterion_group!(
    benches,
    bench_encode_scalar,
    bench_encode_nested,
    bench_decode_nested,
    bench_dump_load_batch,
    bench_against_json,
);
criterion_main!(benches);
