#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: pathinfo vs the url crate's form decoder
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pathinfo::{Config, PathInfo, Separator, codec};
use url::form_urlencoded;

fn bench_decode_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_simple");

    group.bench_function("pathinfo", |b| {
        b.iter(|| PathInfo::new(black_box("/a-1/b-2/c-3")));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box("a=1&b=2&c=3").as_bytes())
                .into_owned()
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_decode_escaped(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_escaped");
    let path = "/name-Jos%C3%A9+Garc%C3%ADa/tag-a%2Fb/tag-c+d/q-100%25/note-%3Cok%3E";
    let query = "name=Jos%C3%A9+Garc%C3%ADa&tag=a%2Fb&tag=c+d&q=100%25&note=%3Cok%3E";

    group.bench_function("pathinfo", |b| {
        b.iter(|| PathInfo::new(black_box(path)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(query).as_bytes())
                .into_owned()
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_custom_separators(c: &mut Criterion) {
    let config = Config::default()
        .with_pair_separator(Separator::literal(";").unwrap())
        .with_key_value_separator(Separator::literal("=").unwrap());
    let input = ";a=1;b=2;c=3;a=4;d=5;";

    c.bench_function("decode_custom_separators", |b| {
        b.iter(|| PathInfo::with_config(black_box(input), config.clone()));
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let input = "some value/with-separators and ünïcödé";
    let encoded = codec::encode(input);

    group.bench_function("encode", |b| {
        b.iter(|| codec::encode(black_box(input)));
    });

    group.bench_function("decode", |b| {
        b.iter(|| codec::decode(black_box(&encoded)));
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let params = PathInfo::new("/a-1/a-2/b-x%20y/c-%2F");

    c.bench_function("to_path_string", |b| {
        b.iter(|| black_box(&params).to_path_string());
    });
}

criterion_group!(
    benches,
    bench_decode_simple,
    bench_decode_escaped,
    bench_custom_separators,
    bench_codec,
    bench_serialize
);
criterion_main!(benches);
