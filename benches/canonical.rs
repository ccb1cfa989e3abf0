use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_canon::{decode, encode, from_str, to_string, ObjectMap, Value};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn wide_object(size: usize) -> Value {
    let obj: ObjectMap = (0..size)
        .map(|i| (i.to_string(), Value::from(i as f64 * 0.5)))
        .collect();
    Value::Object(obj)
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = user();
    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = to_string(&user()).unwrap();
    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(&text)))
    });
}

fn benchmark_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("products");

    for size in [10, 100, 1000].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU-{:05}", i),
                name: format!("Product {}", i),
                price: 9.99 + i as f64,
                quantity: i,
            })
            .collect();
        let text = to_string(&products).unwrap();

        group.bench_with_input(BenchmarkId::new("serialize", size), &products, |b, p| {
            b.iter(|| to_string(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("deserialize", size), &text, |b, t| {
            b.iter(|| from_str::<Vec<Product>>(black_box(t)))
        });
    }

    group.finish();
}

fn benchmark_key_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_object");
    group.sample_size(20);

    for size in [1_000, 100_000].iter() {
        let value = wide_object(*size);
        let text = encode(&value).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &value, |b, v| {
            b.iter(|| encode(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, t| {
            b.iter(|| decode(black_box(t)))
        });
    }

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = user();
    let mut group = c.benchmark_group("comparison");

    group.bench_function("canon_serialize", |b| {
        b.iter(|| serde_canon::to_string(black_box(&user)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    let canon_str = serde_canon::to_string(&user).unwrap();
    let json_str = serde_json::to_string(&user).unwrap();

    group.bench_function("canon_deserialize", |b| {
        b.iter(|| serde_canon::from_str::<User>(black_box(&canon_str)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<User>(black_box(&json_str)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_products,
    benchmark_key_sorting,
    benchmark_comparison_with_json
);
criterion_main!(benches);
