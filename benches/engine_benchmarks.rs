//! Performance benchmarks for the accounting engine.
//!
//! This benchmark suite tracks the hot paths:
//! - Single salary calculation
//! - Bulk payroll runs at batch sizes of 100 and 1000
//! - The query pipeline (search + sort + paginate) over 10k records
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use books_engine::models::{Adjustment, AdjustmentKind, Employee};
use books_engine::payroll::{Attendance, PayrollLedger, calculate_employee_salary};
use books_engine::query::{Query, SortOrder};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Creates an employee with a couple of adjustments on both sides.
fn create_employee(index: usize) -> Employee {
    Employee {
        id: format!("emp_{:04}", index),
        name: format!("Employee {}", index),
        base_salary: dec("80000") + Decimal::from(index),
        allowances: vec![
            Adjustment {
                id: "transport".to_string(),
                name: "Transport Allowance".to_string(),
                amount: dec("1500.00"),
                kind: AdjustmentKind::Fixed,
            },
            Adjustment {
                id: "housing".to_string(),
                name: "Housing Allowance".to_string(),
                amount: dec("10"),
                kind: AdjustmentKind::Percentage,
            },
        ],
        deductions: vec![Adjustment {
            id: "income_tax".to_string(),
            name: "Income Tax".to_string(),
            amount: dec("10"),
            kind: AdjustmentKind::Percentage,
        }],
        join_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        is_active: true,
    }
}

fn create_staff(count: usize) -> Vec<Employee> {
    (0..count).map(create_employee).collect()
}

/// Benchmark: a single salary calculation.
fn bench_single_salary(c: &mut Criterion) {
    let employee = create_employee(0);
    let attendance = Attendance {
        working_days: 22,
        total_days: 30,
        leave_days: 2,
    };

    c.bench_function("single_salary", |b| {
        b.iter(|| {
            let breakdown = calculate_employee_salary(
                black_box(&employee),
                black_box(attendance),
                Decimal::ZERO,
                Decimal::ZERO,
            )
            .unwrap();
            black_box(breakdown)
        })
    });
}

/// Benchmark: bulk payroll runs at increasing batch sizes.
fn bench_bulk_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_payroll");

    for &size in &[100usize, 1000] {
        let staff = create_staff(size);
        let ids: Vec<String> = staff.iter().map(|e| e.id.clone()).collect();
        let overrides = HashMap::new();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut ledger = PayrollLedger::new();
                let outcomes = ledger
                    .process_bulk(black_box(&staff), black_box(&ids), 3, 2026, &overrides)
                    .unwrap();
                black_box(outcomes)
            })
        });
    }

    group.finish();
}

/// Benchmark: the query pipeline over a large record collection.
fn bench_query_pipeline(c: &mut Criterion) {
    let staff = create_staff(10_000);

    c.bench_function("query_pipeline_10k", |b| {
        b.iter(|| {
            let page = Query::over(black_box(&staff))
                .search(&[|e: &Employee| Some(e.name.as_str())], "employee 9")
                .sort_by_text(|e| Some(e.name.as_str()), SortOrder::Asc)
                .page(2, 25);
            black_box(page)
        })
    });
}

criterion_group!(
    benches,
    bench_single_salary,
    bench_bulk_runs,
    bench_query_pipeline
);
criterion_main!(benches);
