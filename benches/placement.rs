//! Performance measurement for full-zone scatter placement

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stickerfield::algorithm::placer::{PlacementConfig, StickerPlacer};
use stickerfield::assets::catalog::AssetCatalog;
use stickerfield::spatial::surface::{MemorySurface, SurfaceRegistry};

/// Measures a full zone scatter at increasing sticker counts
fn bench_scatter_zone(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter_zone");

    for count in &[6usize, 15, 60, 240] {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let mut registry = SurfaceRegistry::new();
                registry.insert("bench-zone", MemorySurface::new(1600.0, 720.0));

                let mut placer = StickerPlacer::seeded(
                    AssetCatalog::default(),
                    PlacementConfig::default(),
                    12345,
                );
                placer.place(&mut registry, "bench-zone", black_box(count));

                black_box(registry.get("bench-zone").map(|s| s.stickers().len()));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scatter_zone);
criterion_main!(benches);
