use chrono::NaiveDate;
use fuellog::metrics::cost::UNDATED;
use fuellog::metrics::{
    FuelReport, average_economy, best_economy, cost_mismatches, cost_per_distance, monthly_cost,
    real_world_economy, total_cost, trip_distances, valid_distance,
};
use fuellog::models::{ConsumptionRow, RefillRow};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn refill(m: u32, d: u32, price: f64, qty: f64, odo: f64) -> RefillRow {
    RefillRow::new(date(m, d), "PTT", "E20", price, qty, odo)
}

fn reading(economy: f64, mode: &str) -> ConsumptionRow {
    let mut r = ConsumptionRow::new(date(1, 1), economy, 1000.0);
    r.mode = mode.to_string();
    r
}

#[test]
fn test_trip_distances_keep_order_and_negatives() {
    let rows = vec![
        refill(1, 1, 40.0, 30.0, 1000.0),
        refill(1, 10, 40.0, 30.0, 1300.0),
        refill(1, 20, 40.0, 30.0, 1250.0),
    ];
    assert_eq!(trip_distances(&rows), vec![300.0, -50.0]);
    assert_eq!(valid_distance(&rows), 300.0);
}

#[test]
fn test_trip_distances_need_two_refills() {
    assert!(trip_distances(&[]).is_empty());
    assert!(trip_distances(&[refill(1, 1, 40.0, 30.0, 1000.0)]).is_empty());
}

#[test]
fn test_real_world_economy_skips_first_fill_volume() {
    let rows = vec![
        refill(1, 3, 40.0, 35.0, 1000.0),
        refill(1, 12, 41.0, 30.0, 1400.0),
        refill(2, 1, 40.0, 28.0, 1800.0),
    ];
    let eco = real_world_economy(&rows).unwrap();
    assert!((eco - 800.0 / 58.0).abs() < 1e-9);
}

#[test]
fn test_real_world_economy_without_data() {
    assert_eq!(real_world_economy(&[]), None);
    assert_eq!(real_world_economy(&[refill(1, 1, 40.0, 30.0, 1000.0)]), None);
    let no_fuel = vec![
        refill(1, 1, 40.0, 30.0, 1000.0),
        refill(1, 5, 40.0, 0.0, 1200.0),
    ];
    assert_eq!(real_world_economy(&no_fuel), None);
}

#[test]
fn test_monthly_cost_groups_in_first_seen_order() {
    let rows = vec![
        refill(2, 1, 10.0, 50.0, 1000.0), // 500
        refill(1, 15, 20.0, 30.0, 1300.0), // 600
        refill(2, 20, 10.0, 45.0, 1600.0), // 450
    ];
    let months = monthly_cost(&rows);
    assert_eq!(
        months,
        vec![("2026-02".to_string(), 950.0), ("2026-01".to_string(), 600.0)]
    );
    assert_eq!(total_cost(&rows), 1550.0);
    let summed: f64 = months.iter().map(|(_, v)| v).sum();
    assert_eq!(summed, total_cost(&rows));
}

#[test]
fn test_monthly_cost_undated_bucket() {
    let mut undated = refill(1, 1, 10.0, 10.0, 1000.0);
    undated.date = None;
    let rows = vec![undated, refill(3, 2, 10.0, 20.0, 1200.0)];

    let months = monthly_cost(&rows);
    assert_eq!(months[0], (UNDATED.to_string(), 100.0));
    assert_eq!(months[1], ("2026-03".to_string(), 200.0));
}

#[test]
fn test_cost_per_distance_ignores_negative_trips() {
    let rows = vec![
        refill(1, 1, 10.0, 10.0, 1000.0),
        refill(1, 5, 10.0, 10.0, 1300.0),
        refill(1, 9, 10.0, 10.0, 1250.0),
        refill(1, 14, 10.0, 10.0, 1450.0),
    ];
    // valid distance 300 + 200, cost of every refill counts
    assert_eq!(cost_per_distance(&rows), Some(400.0 / 500.0));
}

#[test]
fn test_cost_per_distance_without_valid_distance() {
    assert_eq!(cost_per_distance(&[]), None);
    let backwards = vec![
        refill(1, 1, 10.0, 10.0, 1300.0),
        refill(1, 5, 10.0, 10.0, 1000.0),
    ];
    assert_eq!(cost_per_distance(&backwards), None);
}

#[test]
fn test_average_and_best_economy() {
    let rows = vec![
        reading(15.0, "City"),
        reading(18.0, "Highway"),
        reading(18.0, "Eco"),
        reading(13.0, ""),
    ];
    assert_eq!(average_economy(&rows), Some(16.0));
    assert_eq!(best_economy(&rows), Some((18.0, "Highway".to_string())));

    assert_eq!(average_economy(&[]), None);
    assert_eq!(best_economy(&[]), None);
}

#[test]
fn test_cost_mismatches_are_reported_not_fixed() {
    let mut off = refill(1, 5, 40.0, 30.0, 1400.0);
    off.total_cost = 1190.0;
    let close = {
        let mut r = refill(1, 9, 40.0, 30.0, 1800.0);
        r.total_cost = 1200.004;
        r
    };
    let rows = vec![refill(1, 1, 40.0, 30.0, 1000.0), off, close];

    let found = cost_mismatches(&rows);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, 1);
    assert!((found[0].1 + 10.0).abs() < 1e-9);
    assert_eq!(rows[1].total_cost, 1190.0);
}

#[test]
fn test_report_on_empty_logs() {
    let report = FuelReport::build(&[], &[]);
    assert_eq!(report.readings, 0);
    assert_eq!(report.average_economy, None);
    assert_eq!(report.best_economy, None);
    assert_eq!(report.real_world_economy, None);
    assert_eq!(report.cost_per_distance, None);
    assert!(report.trip_distances.is_empty());
    assert!(report.monthly_cost.is_empty());
    assert_eq!(report.total_cost, 0.0);
}

#[test]
fn test_report_counts_negative_trips() {
    let refills = vec![
        refill(1, 1, 40.0, 30.0, 1000.0),
        refill(1, 10, 40.0, 30.0, 1300.0),
        refill(1, 20, 40.0, 30.0, 1250.0),
    ];
    let report = FuelReport::build(&[reading(15.0, "City")], &refills);
    assert_eq!(report.refills, 3);
    assert_eq!(report.negative_trips, 1);
    assert_eq!(report.total_volume, 90.0);
    assert_eq!(report.monthly_cost, vec![("2026-01".to_string(), 3600.0)]);
}

#[test]
fn test_monthly_cost_single_month() {
    let rows = vec![
        refill(1, 3, 10.0, 50.0, 1000.0), // 500
        refill(1, 12, 20.0, 30.0, 1400.0), // 600
        refill(1, 28, 10.0, 45.0, 1800.0), // 450
    ];
    assert_eq!(monthly_cost(&rows), vec![("2026-01".to_string(), 1550.0)]);
}
