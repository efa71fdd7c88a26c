//! Performance benchmarks for the off-day ledger engine.
//!
//! This benchmark suite exercises the hot paths:
//! - Greedy allocation across many candidate grants
//! - Availability listing over a large grant store
//! - Aggregate scans
//! - The full HTTP round trip for usage creation
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

use offday_engine::api::{create_router, AppState};
use offday_engine::engine::{
    create_grant, create_usage, get_aggregates, list_available_grants, CreateGrantRequest,
    CreateUsageRequest,
};
use offday_engine::store::Ledger;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Seeds a single-personnel ledger with alternating full and half grants.
fn seed_ledger(grant_count: usize) -> Ledger {
    let mut ledger = Ledger::new(vec!["Alice".to_string()]);
    for i in 0..grant_count {
        create_grant(
            &mut ledger,
            CreateGrantRequest {
                personnel: "Alice".to_string(),
                granted_date: "2026-03-02".to_string(),
                duration_type: if i % 2 == 0 { "FULL" } else { "HALF" }.to_string(),
                reason_type: "OTHERS".to_string(),
                other_details: "duty cover".to_string(),
                provided_by: "OC".to_string(),
                ..Default::default()
            },
        )
        .expect("Failed to seed grant");
    }
    ledger
}

fn full_day_usage(ids: Vec<String>) -> CreateUsageRequest {
    CreateUsageRequest {
        personnel: "Alice".to_string(),
        intended_date: "2026-03-04".to_string(),
        session: "FULL".to_string(),
        selected_ids: ids,
        comments: String::new(),
    }
}

/// Benchmark: Greedy full-day allocation over varying candidate counts.
fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation");

    for candidate_count in [2, 8, 32, 128].iter() {
        group.throughput(Throughput::Elements(*candidate_count as u64));
        group.bench_with_input(
            BenchmarkId::new("full_day_draw", candidate_count),
            candidate_count,
            |b, &count| {
                b.iter_batched(
                    || {
                        let ledger = seed_ledger(count);
                        let ids: Vec<String> = ledger
                            .grants
                            .iter()
                            .map(|g| g.id.clone())
                            .collect();
                        (ledger, ids)
                    },
                    |(mut ledger, ids)| {
                        let created = create_usage(&mut ledger, full_day_usage(ids)).unwrap();
                        black_box(created)
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

/// Benchmark: Availability listing over a large grant store.
fn bench_list_available(c: &mut Criterion) {
    let ledger = seed_ledger(500);

    c.bench_function("list_available_500_grants", |b| {
        b.iter(|| black_box(list_available_grants(&ledger, "Alice")))
    });
}

/// Benchmark: Aggregate scan over a populated ledger.
fn bench_aggregates(c: &mut Criterion) {
    let mut ledger = seed_ledger(500);
    // Consume part of the balance so the scan covers both stores.
    for i in 0..100 {
        let id = format!("G-{:04}", i * 2 + 1);
        create_usage(&mut ledger, full_day_usage(vec![id]))
            .expect("Failed to seed usage");
    }

    c.bench_function("aggregates_500_grants_100_usages", |b| {
        b.iter(|| black_box(get_aggregates(&ledger, "Alice")))
    });
}

/// Benchmark: Full HTTP round trip for usage creation.
fn bench_http_usage_roundtrip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let body = serde_json::json!({
        "personnel": "Alice",
        "intended_date": "2026-03-04",
        "session": "FULL",
        "selected_ids": ["G-0001"],
        "comments": ""
    })
    .to_string();

    c.bench_function("http_create_usage", |b| {
        b.to_async(&rt).iter_batched(
            || {
                let state = AppState::new(seed_ledger(8));
                create_router(state)
            },
            |router| {
                let body = body.clone();
                async move {
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/usages")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_allocation,
    bench_list_available,
    bench_aggregates,
    bench_http_usage_roundtrip,
);
criterion_main!(benches);
