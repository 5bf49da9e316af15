// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use browser_headers::{apply, Browser};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reqwest::header::{HeaderMap, HeaderValue};

fn apply_benchmark(c: &mut Criterion) {
    let mut base = HeaderMap::new();
    base.insert("accept", HeaderValue::from_static("*/*"));
    base.insert("accept-charset", HeaderValue::from_static("utf-8"));
    base.insert("user-agent", HeaderValue::from_static("bench"));

    c.bench_function("apply_chrome", |b| {
        b.iter(|| {
            let mut headers = base.clone();
            apply(&mut headers, black_box(Browser::Chrome));
            black_box(headers)
        })
    });

    c.bench_function("apply_all_browsers", |b| {
        let mut headers = base.clone();
        b.iter(|| {
            for browser in Browser::ALL {
                apply(&mut headers, black_box(browser));
            }
        })
    });
}

fn parse_benchmark(c: &mut Criterion) {
    let names = ["Firefox", "internet explorer 9", "msie6", "unknown"];

    c.bench_function("browser_from_name", |b| {
        b.iter(|| {
            for name in &names {
                black_box(Browser::from_name(black_box(name)));
            }
        })
    });
}

criterion_group!(benches, apply_benchmark, parse_benchmark);
criterion_main!(benches);
