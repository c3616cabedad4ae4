//! Benchmarks for feed filtering
//!
//! The filter runs on every render, so it has to stay cheap for a full page
//! of headlines and for larger synthetic feeds.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tazza_khabar::{Article, ArticleBuilder, Category, filter};

const CATEGORIES: [&str; 4] = ["Business", "Sports", "Tech", "Weather"];

/// Generate a synthetic feed of `size` articles
fn generate_feed(size: usize) -> Vec<Article> {
    (0..size)
        .map(|i| {
            ArticleBuilder::new()
                .title(format!("Headline number {} about {}", i, CATEGORIES[i % 4]))
                .content(format!(
                    "Body text for story {}. Markets, matches, releases and rain. [+{} chars]",
                    i,
                    i * 7
                ))
                .category(CATEGORIES[i % 4])
                .url(format!("https://example.com/story/{}", i))
                .build()
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [20, 100, 1000] {
        let feed = generate_feed(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("all_empty", size), &feed, |b, feed| {
            b.iter(|| filter(black_box(feed), &Category::All, black_box("")))
        });

        group.bench_with_input(BenchmarkId::new("all_term", size), &feed, |b, feed| {
            b.iter(|| filter(black_box(feed), &Category::All, black_box("RAIN")))
        });

        let tech = Category::Named("Tech".to_string());
        group.bench_with_input(BenchmarkId::new("category_term", size), &feed, |b, feed| {
            b.iter(|| filter(black_box(feed), &tech, black_box("release")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
