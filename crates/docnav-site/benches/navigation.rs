//! Benchmarks for slug resolution and navigation tree building.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docnav_site::{ContentEntry, NavSettings, Navigator, SlugCache};

/// Create entries for `sections` sections with `pages` pages and one
/// subsection each, in the default locale and `fr`.
fn create_entries(sections: usize, pages: usize) -> Vec<ContentEntry> {
    let mut entries = vec![
        ContentEntry::new("home", "Home"),
        ContentEntry::new("fr/index.mdx", "Accueil"),
    ];

    for locale in ["", "fr/"] {
        for s in 0..sections {
            entries.push(
                ContentEntry::new(format!("{locale}section-{s}/index.mdx"), format!("Section {s}"))
                    .with_order(u32::try_from(s).unwrap()),
            );
            entries.push(ContentEntry::new(
                format!("{locale}section-{s}/advanced/index.mdx"),
                "Advanced",
            ));
            for p in 0..pages {
                entries.push(ContentEntry::new(
                    format!("{locale}section-{s}/page-{p}.mdx"),
                    format!("Page {p}"),
                ));
                entries.push(ContentEntry::new(
                    format!("{locale}section-{s}/advanced/topic-{p}.mdx"),
                    format!("Topic {p}"),
                ));
            }
        }
    }

    entries
}

fn bench_resolve_slug(c: &mut Criterion) {
    let settings = NavSettings::default();
    let entries = create_entries(8, 10);

    let mut group = c.benchmark_group("resolve_slug");

    group.bench_function("cached", |b| {
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        b.iter(|| {
            for entry in &entries {
                black_box(nav.resolve_slug(&entry.id));
            }
        });
    });

    group.bench_function("uncached", |b| {
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        b.iter(|| {
            cache.clear();
            for entry in &entries {
                black_box(nav.resolve_slug(&entry.id));
            }
        });
    });

    group.finish();
}

fn bench_build_full_tree(c: &mut Criterion) {
    let settings = NavSettings::default();

    let mut group = c.benchmark_group("build_full_tree");

    for (sections, pages) in [(4, 5), (8, 10), (16, 20)] {
        let entries = create_entries(sections, pages);
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        group.bench_with_input(
            BenchmarkId::new("default_locale", format!("s{sections}_p{pages}")),
            &entries,
            |b, entries| b.iter(|| nav.build_full_tree(entries, None)),
        );
        group.bench_with_input(
            BenchmarkId::new("fr", format!("s{sections}_p{pages}")),
            &entries,
            |b, entries| b.iter(|| nav.build_full_tree(entries, Some("fr"))),
        );
    }

    group.finish();
}

fn bench_sidebar_and_pagination(c: &mut Criterion) {
    let settings = NavSettings::default();
    let entries = create_entries(8, 10);
    let cache = SlugCache::new();
    let nav = Navigator::new(&settings, &cache);

    let mut group = c.benchmark_group("display");

    group.bench_function("prepare_for_display", |b| {
        b.iter(|| nav.prepare_for_display(nav.build_full_tree(&entries, Some("fr")), Some("fr")))
    });

    group.bench_function("adjacent_pages", |b| {
        b.iter(|| nav.adjacent_pages(&entries, "/docs/section-4/advanced/topic-3/", None))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_slug,
    bench_build_full_tree,
    bench_sidebar_and_pagination,
);
criterion_main!(benches);
