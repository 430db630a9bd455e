use chrono::NaiveTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hexclock_core::{
    compute_bundle, BlockStatus, BundleInputs, Category, CompletionSet, EngineConfig,
    ResonanceEntry, TimeBlock,
};

fn make_inputs(block_count: usize) -> BundleInputs {
    let completion = CompletionSet::from_pairs(
        Category::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| (*c, (i as f64) * 17.0)),
    );
    let blocks: Vec<TimeBlock> = (0..block_count)
        .map(|i| TimeBlock {
            id: format!("block-{}", i),
            start: NaiveTime::from_hms_opt((6 + i as u32) % 24, (i as u32 * 7) % 60, 0).unwrap(),
            duration_min: 30 + (i as i64 % 4) * 15,
            category: Category::ALL[i % Category::COUNT],
            status: BlockStatus::Planned,
            title: None,
            progress: None,
        })
        .collect();
    let resonance: Vec<ResonanceEntry> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| ResonanceEntry {
            category: *c,
            count: i as u32 * 2,
            has_resonance: i % 2 == 0,
        })
        .collect();
    BundleInputs::new(
        400,
        completion,
        blocks,
        resonance,
        NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
    )
}

fn bench_compute_bundle(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_bundle");
    let config = EngineConfig::default();

    for block_count in [0usize, 4, 16, 64] {
        let inputs = make_inputs(block_count);
        group.bench_with_input(
            BenchmarkId::new("blocks", block_count),
            &inputs,
            |b, inputs| {
                b.iter(|| compute_bundle(black_box(&config), black_box(inputs)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute_bundle);
criterion_main!(benches);
