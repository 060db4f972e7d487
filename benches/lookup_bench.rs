use criterion::{criterion_group, criterion_main, Criterion};
use keeb::layouts::build_qwerty_layout;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let kb = build_qwerty_layout();

    c.bench_function("get_key_point (last key)", |b| {
        b.iter(|| kb.get_key_point(black_box('m')))
    });

    c.bench_function("get_key_point (absent)", |b| {
        b.iter(|| kb.get_key_point(black_box(';')))
    });

    c.bench_function("build_qwerty_layout", |b| b.iter(build_qwerty_layout));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
