//! Performance benchmarks for the timesheet engine.
//!
//! This benchmark suite covers the hot paths a dashboard refresh hits:
//! - Single day calculation
//! - Monthly aggregation of a full month of punches
//! - Yearly aggregation for a batch of employees
//! - Timesheet request through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use chrono::{NaiveDate, Weekday};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::calculation::{
    build_monthly_timesheet, calculate_daily_hours, calculate_monthly_totals, generate_month_days,
};
use timesheet_engine::config::ConfigLoader;
use timesheet_engine::models::DailyPunchRecord;
use timesheet_engine::store::TimesheetStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::in_memory(config)
}

/// Punches for every working day of a month, with a late evening every Friday.
fn month_of_records(employee_id: &str, year: i32, month0: u32) -> Vec<DailyPunchRecord> {
    generate_month_days(year, month0)
        .iter()
        .filter(|day| !day.is_sunday)
        .map(|day| {
            let record = DailyPunchRecord::new(employee_id, day.date);
            match day.weekday {
                Weekday::Sat => record.with_punches(Some("08:00"), None, None, Some("12:00")),
                Weekday::Fri => {
                    record.with_punches(Some("08:00"), Some("12:00"), Some("13:00"), Some("19:30"))
                }
                _ => record.with_punches(Some("08:00"), Some("12:00"), Some("13:00"), Some("17:00")),
            }
        })
        .collect()
}

/// Benchmark: Single day calculation.
fn bench_single_day(c: &mut Criterion) {
    let record = DailyPunchRecord::new("emp_bench", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
        .with_punches(Some("08:00"), Some("12:00"), Some("13:00"), Some("19:30"));

    c.bench_function("single_day", |b| {
        b.iter(|| calculate_daily_hours(black_box(Some(&record)), false, false))
    });
}

/// Benchmark: Monthly aggregation and full timesheet.
fn bench_monthly(c: &mut Criterion) {
    let records = month_of_records("emp_bench", 2026, 2);

    let mut group = c.benchmark_group("monthly");
    group.throughput(Throughput::Elements(31));
    group.bench_function("totals", |b| {
        b.iter(|| calculate_monthly_totals(2026, 2, black_box(&records)))
    });
    group.bench_function("timesheet", |b| {
        b.iter(|| build_monthly_timesheet("emp_bench", 2026, 2, black_box(&records)))
    });
    group.finish();
}

/// Benchmark: A year of monthly totals for batches of employees.
fn bench_yearly_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("yearly_batch");
    group.sample_size(20);

    for employees in [10_usize, 100] {
        let records: Vec<Vec<Vec<DailyPunchRecord>>> = (0..employees)
            .map(|i| {
                let id = format!("emp_batch_{:03}", i);
                (0..12).map(|month| month_of_records(&id, 2026, month)).collect()
            })
            .collect();

        group.throughput(Throughput::Elements(employees as u64));
        group.bench_with_input(BenchmarkId::from_parameter(employees), &records, |b, records| {
            b.iter(|| {
                let total: i64 = records
                    .iter()
                    .flat_map(|months| {
                        months.iter().enumerate().map(|(month, recs)| {
                            calculate_monthly_totals(2026, month as u32, recs).total_worked_minutes
                        })
                    })
                    .sum();
                black_box(total)
            })
        });
    }

    group.finish();
}

/// Benchmark: Timesheet request through the router.
fn bench_timesheet_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    rt.block_on(async {
        for record in month_of_records("emp_001", 2026, 2) {
            state.store().upsert_record(record).await.unwrap();
        }
    });
    let router = create_router(state);

    c.bench_function("timesheet_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/employees/emp_001/timesheets/2026/2")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_day,
    bench_monthly,
    bench_yearly_batch,
    bench_timesheet_request
);
criterion_main!(benches);
