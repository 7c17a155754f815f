//! Benchmarks for menu rendering.

use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sitenav_config::{ItemMarker, MenuSettings};
use sitenav_menu::{Navigation, RequestPath};
use sitenav_sitemap::{NodeRecord, Sitemap};

/// Create a sitemap with specified depth and breadth, parents first.
fn create_sitemap(depth: usize, breadth: usize) -> Sitemap {
    fn add_level(
        records: &mut Vec<NodeRecord>,
        parent: &str,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
    ) {
        if current_depth > max_depth {
            return;
        }
        for i in 0..breadth {
            let path = format!("{parent}.section-{i}");
            let id = i64::try_from(records.len()).unwrap();
            records.push(NodeRecord::new(path.clone(), format!("Section {i}"), id));
            add_level(records, &path, current_depth + 1, max_depth, breadth);
        }
    }

    let mut records = vec![NodeRecord::new("root", "Home", 0)];
    add_level(&mut records, "root", 1, depth, breadth);
    Sitemap::from_records(records).unwrap()
}

fn deep_url(depth: usize) -> String {
    let mut url = String::new();
    for _ in 0..depth {
        write!(url, "/section-1").unwrap();
    }
    url
}

fn bench_active_branch(c: &mut Criterion) {
    let sitemap = create_sitemap(4, 6);
    let nav = Navigation::new(MenuSettings {
        show_root: true,
        item_markers: vec![ItemMarker::FirstLast, ItemMarker::Number],
        ..MenuSettings::default()
    });

    let mut group = c.benchmark_group("active_branch");
    for depth in [1, 2, 4] {
        let request = RequestPath::parse(&deep_url(depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &request, |b, request| {
            b.iter(|| nav.render_html(&sitemap, request).unwrap());
        });
    }
    group.finish();
}

fn bench_open_all(c: &mut Criterion) {
    let sitemap = create_sitemap(4, 6);
    let nav = Navigation::new(MenuSettings {
        open_all: true,
        ..MenuSettings::default()
    });
    let request = RequestPath::parse("/section-1");

    c.bench_function("open_all", |b| {
        b.iter(|| nav.build(&sitemap, &request).unwrap());
    });
}

criterion_group!(benches, bench_active_branch, bench_open_all);
criterion_main!(benches);
