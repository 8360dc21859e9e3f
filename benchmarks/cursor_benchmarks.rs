#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Cursor benchmarks: param-cursor vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// param-cursor
use param_cursor::{ParamCursor, params};

// Rust url crate
use url::Url as UrlCrate;

const SHORT: &str = "https://example.com/search?q=rust&page=1";
const TRACKED: &str = "https://shop.example.com/item/42?utm_source=news&utm_medium=mail&id=42&color=red&size=m&utm_campaign=fall&ref=home#reviews";

/// A long query with `n` parameters
fn long_query(n: usize) -> String {
    let mut url = String::from("https://example.com/?");
    for i in 0..n {
        if i > 0 {
            url.push('&');
        }
        url.push_str(&format!("key{i}=value{i}"));
    }
    url.push_str("#end");
    url
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    let long = long_query(200);

    for (name, input) in [("short", SHORT), ("tracked", TRACKED), ("long", long.as_str())] {
        group.bench_function(format!("param_cursor/{name}"), |b| {
            b.iter(|| {
                let mut cursor = ParamCursor::new(black_box(input));
                let mut n = 0;
                while cursor.advance() {
                    n += cursor.key().map_or(0, str::len);
                }
                n
            });
        });

        group.bench_function(format!("params_iter/{name}"), |b| {
            b.iter(|| params(black_box(input)).map(|p| p.key.len()).sum::<usize>());
        });

        group.bench_function(format!("url_crate/{name}"), |b| {
            b.iter(|| {
                let url = UrlCrate::parse(black_box(input)).unwrap();
                url.query_pairs().map(|(k, _)| k.len()).sum::<usize>()
            });
        });
    }

    group.finish();
}

fn bench_strip_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_tracking");

    group.bench_function("param_cursor", |b| {
        b.iter(|| {
            let mut cursor = ParamCursor::new(black_box(TRACKED));
            while cursor.advance() {
                if cursor.key().is_some_and(|k| k.starts_with("utm_")) {
                    cursor.remove().unwrap();
                }
            }
            cursor.insert_last("page", Some("2"));
            cursor.into_string()
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = UrlCrate::parse(black_box(TRACKED)).unwrap();
            let kept: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| !k.starts_with("utm_"))
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            url.query_pairs_mut()
                .clear()
                .extend_pairs(kept)
                .append_pair("page", "2");
            url.to_string()
        });
    });

    group.finish();
}

fn bench_render_cached(c: &mut Criterion) {
    let long = long_query(200);
    let mut cursor = ParamCursor::new(&long);
    for _ in 0..100 {
        cursor.advance();
    }
    cursor.insert_after("inserted", Some("1")).unwrap();

    c.bench_function("render_cached/long", |b| {
        b.iter(|| black_box(&cursor).render().len());
    });
}

criterion_group!(
    benches,
    bench_traverse,
    bench_strip_tracking,
    bench_render_cached
);
criterion_main!(benches);
