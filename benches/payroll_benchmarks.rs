//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite tracks the cost of a monthly payroll preview:
//! - Single-employee preview: < 100μs mean
//! - 100-employee preview: < 10ms mean
//! - HTTP preview round trip: < 1ms mean for a small roster
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::PayPolicy;
use payroll_engine::engine::PayrollEngine;
use payroll_engine::models::{Attendance, AttendanceStatus, Employee, Holiday, Recurrence, Role};
use payroll_engine::store::MemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Seeds a store with `count` employees and full March 2026 attendance,
/// overtime on one weekday each.
fn seeded_store(count: i64) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .put_holiday(Holiday {
            id: 1,
            name: "Founders Day".to_string(),
            date: Some(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()),
            recurrence: Recurrence::None,
            recurrence_day: 0,
            recurrence_month: 0,
        })
        .unwrap();

    let mut record_id = 0;
    for user_id in 1..=count {
        store
            .put_user(Employee {
                id: user_id,
                name: format!("Employee {}", user_id),
                username: format!("emp{}", user_id),
                role: if user_id % 10 == 0 {
                    Role::Supervisor
                } else {
                    Role::Employee
                },
                base_salary: dec("26000"),
                is_active: true,
                deactivated_at: None,
            })
            .unwrap();

        let mut day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        while day <= end {
            if day.weekday() != Weekday::Sun {
                record_id += 1;
                let overtime = if day.day() == 12 {
                    dec("2.00")
                } else {
                    Decimal::ZERO
                };
                store
                    .put_attendance(Attendance {
                        id: record_id,
                        user_id,
                        date: day,
                        check_in: None,
                        check_out: None,
                        status: AttendanceStatus::Present,
                        is_complete: true,
                        regular_hours: dec("8.00"),
                        overtime_hours: overtime,
                    })
                    .unwrap();
            }
            day = day.succ_opt().unwrap();
        }
    }
    store
}

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview");

    for count in [1_i64, 10, 100] {
        let engine = PayrollEngine::with_store(seeded_store(count), PayPolicy::default());
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &engine,
            |b, engine| {
                b.iter(|| {
                    let preview = engine.preview(black_box(3), black_box(2026)).unwrap();
                    black_box(preview)
                })
            },
        );
    }
    group.finish();
}

fn bench_http_preview(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(PayrollEngine::with_store(
        seeded_store(10),
        PayPolicy::default(),
    ));

    c.bench_function("http_preview_10_employees", |b| {
        b.to_async(&runtime).iter(|| {
            let router = create_router(state.clone());
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("GET")
                            .uri("/payroll/preview?month=3&year=2026")
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

fn bench_csv_export(c: &mut Criterion) {
    let engine = PayrollEngine::with_store(seeded_store(100), PayPolicy::default());
    engine.generate(1, 3, 2026).unwrap();

    c.bench_function("csv_export_100_employees", |b| {
        b.iter(|| {
            let bytes = engine.export_csv(black_box(3), black_box(2026)).unwrap();
            black_box(bytes)
        })
    });
}

criterion_group!(benches, bench_preview, bench_http_preview, bench_csv_export);
criterion_main!(benches);
