use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use smartwaste_inventory::{InventoryItem, InventoryStore, ItemDraft, rank, top_urgent};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()
}

/// Stock with expiry dates spread from two weeks overdue to a month out.
fn stock(size: usize) -> Vec<InventoryItem> {
    let at = Utc.with_ymd_and_hms(2026, 1, 19, 8, 0, 0).unwrap();
    let mut store = InventoryStore::new();
    for n in 0..size {
        let offset = (n as i64 * 7919) % 45 - 14;
        let expiry = (today() + Duration::days(offset)).format("%Y-%m-%d").to_string();
        store
            .add_item(&ItemDraft::new(format!("item-{n}"), 1.0, "pcs", expiry), at)
            .unwrap();
    }
    store.list_inventory().to_vec()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [10usize, 100, 1_000] {
        let items = stock(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("full", size), &items, |b, items| {
            b.iter(|| rank(black_box(items), today()));
        });

        group.bench_with_input(BenchmarkId::new("top_3", size), &items, |b, items| {
            b.iter(|| top_urgent(black_box(items), today(), 3));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
