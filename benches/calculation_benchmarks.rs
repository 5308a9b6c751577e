//! Performance benchmarks for the settlement engine.
//!
//! Covers:
//! - Direct engine calls for each calculator type
//! - A full termination request through the HTTP router
//! - A batch of 100 requests
//! - Scaling with the number of periods
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use settlement_engine::api::{AppState, create_router};
use settlement_engine::calculation::calculate_settlement;
use settlement_engine::config::{ConfigLoader, StatutoryRates};
use settlement_engine::models::{
    CalculatorParams, ComputationMode, InclusionFlags, PastDueItem, PastDueKind, Period,
    PremiumBase, SettlementInput, TerminationMotive, ValueMode,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/clt").expect("Failed to load config");
    AppState::new(config)
}

/// Creates `count` consecutive one-year periods starting in 2015.
fn create_periods(count: usize) -> Vec<Period> {
    let first = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let start = first + Duration::days(365 * i as i64);
            Period::new(
                format!("p{}", i + 1),
                start,
                start + Duration::days(364),
                Decimal::new(300_000 + 10_000 * i as i64, 2),
            )
        })
        .collect()
}

fn create_input(calculator: CalculatorParams, period_count: usize) -> SettlementInput {
    let periods = create_periods(period_count);
    let past_due_items = vec![PastDueItem {
        id: "late".to_string(),
        kind: PastDueKind::LateSalary,
        label: PastDueKind::LateSalary.default_label().to_string(),
        description: "Ref 2023".to_string(),
        value: Decimal::new(300_000, 2),
        quantity: Decimal::ONE,
        active: true,
        mode: ValueMode::Auto,
        period_id: periods[0].id.clone(),
    }];

    SettlementInput {
        calculator,
        periods,
        past_due_items,
        flags: InclusionFlags::default(),
        fgts_balance: Decimal::new(1_000_000, 2),
    }
}

/// Creates a termination request body with the given number of periods.
fn create_request_body(period_count: usize) -> String {
    let periods: Vec<serde_json::Value> = create_periods(period_count)
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id,
                "start": p.start.map(|d| d.to_string()).unwrap_or_default(),
                "end": p.end.map(|d| d.to_string()).unwrap_or_default(),
                "salary": p.salary.to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "calculator": {"type": "termination", "motive": "unjustified_dismissal"},
        "periods": periods,
        "fgts_balance": "10000.00"
    })
    .to_string()
}

/// Benchmark: engine call per calculator type, three periods each.
fn bench_engine_by_calculator(c: &mut Criterion) {
    let rates = StatutoryRates::default();
    let calculators = [
        (
            "termination",
            CalculatorParams::Termination {
                motive: TerminationMotive::UnjustifiedDismissal,
            },
        ),
        (
            "overtime",
            CalculatorParams::Overtime {
                hours: Decimal::new(10, 0),
                extra_percent: Decimal::new(50, 0),
                mode: ComputationMode::MonthlyAverage,
            },
        ),
        (
            "hazard_pay",
            CalculatorParams::HazardPay {
                grade_percent: Decimal::new(20, 0),
                base: PremiumBase::MinimumWage,
            },
        ),
        ("fgts_arrears", CalculatorParams::FgtsArrears),
        (
            "salary_difference",
            CalculatorParams::SalaryDifference {
                owed_salary: Decimal::new(4500, 0),
                mode: ComputationMode::MonthlyAverage,
            },
        ),
    ];

    let mut group = c.benchmark_group("engine");
    for (name, calculator) in calculators {
        let input = create_input(calculator, 3);
        group.bench_with_input(BenchmarkId::new("calculator", name), &input, |b, input| {
            b.iter(|| black_box(calculate_settlement(black_box(input), &rates)))
        });
    }
    group.finish();
}

/// Benchmark: one termination request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_request_body(1);

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 requests with varying period counts.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let requests: Vec<String> = (0..100).map(|i| create_request_body(1 + i % 5)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: overtime over a growing number of periods.
fn bench_scaling(c: &mut Criterion) {
    let rates = StatutoryRates::default();
    let mut group = c.benchmark_group("scaling");

    for period_count in [1usize, 2, 4, 8, 16] {
        let input = create_input(
            CalculatorParams::Overtime {
                hours: Decimal::new(20, 0),
                extra_percent: Decimal::new(50, 0),
                mode: ComputationMode::MonthlyAverage,
            },
            period_count,
        );

        group.throughput(Throughput::Elements(period_count as u64));
        group.bench_with_input(
            BenchmarkId::new("periods", period_count),
            &input,
            |b, input| b.iter(|| black_box(calculate_settlement(input, &rates))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_engine_by_calculator,
    bench_single_request,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
