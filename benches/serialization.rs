use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cson::value::escape_str;
use cson::{cson_record, to_string, to_string_batch, Record};

cson_record! {
    #[derive(Clone)]
    struct User {
        id: i64,
        #[cson(rename = "displayName")]
        name: String,
        email: String,
        active: bool,
    }
}

cson_record! {
    #[derive(Clone)]
    struct Product {
        sku: String,
        name: String,
        price: f64,
        quantity: i32,
    }
}

fn user(i: i64) -> User {
    User {
        id: i,
        name: format!("User {}", i),
        email: format!("user{}@example.com", i),
        active: i % 2 == 0,
    }
}

fn product(i: i32) -> Product {
    Product {
        sku: format!("SKU{}", i),
        name: format!("Product {}", i),
        price: 9.99 + f64::from(i),
        quantity: i,
    }
}

fn benchmark_serialize_single(c: &mut Criterion) {
    let user = user(123);

    c.bench_function("serialize_single_record", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_serialize_homogeneous(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_homogeneous");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size).map(product).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string_batch(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_serialize_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_mixed");

    for size in [10, 50, 100, 500].iter() {
        let users: Vec<User> = (0..*size).map(i64::from).map(user).collect();
        let products: Vec<Product> = (0..*size).map(product).collect();
        let records: Vec<&dyn Record> = users
            .iter()
            .zip(&products)
            .flat_map(|(u, p)| [u as &dyn Record, p as &dyn Record])
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string_batch(black_box(&records)))
        });
    }
    group.finish();
}

fn benchmark_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_strings");

    let plain = "This is a medium length string with some content";
    let marked = "🔥 hot 🍲 soup with 🌶️ and a \\ backslash ✅";

    group.bench_function("plain", |b| b.iter(|| escape_str(black_box(plain))));
    group.bench_function("marked", |b| b.iter(|| escape_str(black_box(marked))));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_single,
    benchmark_serialize_homogeneous,
    benchmark_serialize_mixed,
    benchmark_escaping,
);
criterion_main!(benches);
