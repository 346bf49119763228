use chrono::NaiveDateTime;
use cleanbook::{validate_form, FormSchema};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

fn booking_form_benchmark(c: &mut Criterion) {
    let now = NaiveDateTime::parse_from_str("2026-10-16 14:00", "%Y-%m-%d %H:%M").unwrap();
    let values: HashMap<String, String> = [
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("phone", "+1 (555) 123-4567"),
        ("address", "12 Main Street"),
        ("service", "deep-clean"),
        ("date", "2026-10-20"),
        ("time", "09:30"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    let fields = FormSchema::booking().snapshot(&values);

    c.bench_function("validate booking form", |b| {
        b.iter(|| validate_form(black_box(&fields), black_box(now)))
    });
}

criterion_group!(benches, booking_form_benchmark);
criterion_main!(benches);
