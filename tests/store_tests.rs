mod common;

use chrono::NaiveDate;
use common::setup_test_dir;
use fuellog::errors::AppError;
use fuellog::models::schema::{CONSUMPTION, DATE, MODE, ODOMETER, ROUTE, STATION, TOTAL_COST};
use fuellog::models::{CellValue, ConsumptionRow, LogKind, RefillRow, schema_for};
use fuellog::store::LogStore;
use std::fs;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
}

#[test]
fn test_load_missing_file_is_empty() {
    let root = setup_test_dir("store_missing");
    let store = LogStore::new(&root);

    for kind in LogKind::ALL {
        assert!(store.load(kind).unwrap().is_empty());
    }
    assert!(!store.path_for(LogKind::Refill).exists());
}

#[test]
fn test_append_then_load_round_trip() {
    let root = setup_test_dir("store_append");
    let store = LogStore::new(&root);

    let mut reading = ConsumptionRow::new(day(10), 14.2, 1250.0);
    reading.mode = "City".to_string();
    reading.route = "Bangkok → Ayutthaya, ถนนพหลโยธิน".to_string();
    store.append(&reading.to_row(), LogKind::Consumption).unwrap();

    let refill = RefillRow::new(day(12), "PTT, Rama 4", "E20", 32.49, 35.5, 1400.0);
    store.append(&refill.to_row(), LogKind::Refill).unwrap();

    let cons = store.load(LogKind::Consumption).unwrap();
    assert_eq!(cons.len(), 1);
    assert_eq!(ConsumptionRow::from_row(&cons[0]), reading);

    let refills = store.load(LogKind::Refill).unwrap();
    assert_eq!(refills.len(), 1);
    assert_eq!(RefillRow::from_row(&refills[0]), refill);
}

#[test]
fn test_header_follows_declared_order() {
    let root = setup_test_dir("store_header");
    let store = LogStore::new(&root);

    store
        .append(&ConsumptionRow::new(day(1), 15.0, 900.0).to_row(), LogKind::Consumption)
        .unwrap();

    let content = fs::read_to_string(store.path_for(LogKind::Consumption)).unwrap();
    let first = content.lines().next().unwrap();
    assert_eq!(first, "Date,Consumption,Odometer,Mode,Route");
    assert!(content.contains("2026-01-01,15,900,,"));
}

#[test]
fn test_append_keeps_duplicates_and_order() {
    let root = setup_test_dir("store_duplicates");
    let store = LogStore::new(&root);

    let a = ConsumptionRow::new(day(1), 15.0, 900.0).to_row();
    let b = ConsumptionRow::new(day(2), 16.0, 1000.0).to_row();
    store.append(&a, LogKind::Consumption).unwrap();
    store.append(&b, LogKind::Consumption).unwrap();
    store.append(&a, LogKind::Consumption).unwrap();

    let rows = store.load(LogKind::Consumption).unwrap();
    assert_eq!(rows, vec![a.clone(), b, a]);
}

#[test]
fn test_replace_all_after_deletion_keeps_order() {
    let root = setup_test_dir("store_replace");
    let store = LogStore::new(&root);

    for (i, odo) in [1000.0, 1300.0, 1600.0].iter().enumerate() {
        let row = RefillRow::new(day(i as u32 + 1), "PTT", "E20", 40.0, 30.0, *odo).to_row();
        store.append(&row, LogKind::Refill).unwrap();
    }

    let mut rows = store.load(LogKind::Refill).unwrap();
    rows.remove(1);
    store.replace_all(&rows, LogKind::Refill).unwrap();

    let after = store.load(LogKind::Refill).unwrap();
    let odos: Vec<f64> = after.iter().map(|r| r.numeric(ODOMETER)).collect();
    assert_eq!(odos, vec![1000.0, 1600.0]);
}

#[test]
fn test_replace_all_with_nothing_leaves_header_only() {
    let root = setup_test_dir("store_replace_empty");
    let store = LogStore::new(&root);

    store
        .append(&ConsumptionRow::new(day(1), 15.0, 900.0).to_row(), LogKind::Consumption)
        .unwrap();
    store.replace_all(&[], LogKind::Consumption).unwrap();

    assert!(store.load(LogKind::Consumption).unwrap().is_empty());
    let content = fs::read_to_string(store.path_for(LogKind::Consumption)).unwrap();
    assert_eq!(content.trim(), "Date,Consumption,Odometer,Mode,Route");
}

#[test]
fn test_update_and_remove_by_index() {
    let root = setup_test_dir("store_update_remove");
    let store = LogStore::new(&root);

    for odo in [1000.0, 1200.0] {
        store
            .append(&ConsumptionRow::new(day(5), 15.0, odo).to_row(), LogKind::Consumption)
            .unwrap();
    }

    let mut changed = ConsumptionRow::new(day(6), 17.5, 1250.0);
    changed.mode = "Highway".to_string();
    store
        .update(LogKind::Consumption, 1, changed.to_row())
        .unwrap();

    let removed = store.remove(LogKind::Consumption, 0).unwrap();
    assert_eq!(removed.numeric(ODOMETER), 1000.0);

    let rows = store.load(LogKind::Consumption).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(ConsumptionRow::from_row(&rows[0]), changed);

    assert!(store.remove(LogKind::Consumption, 5).is_err());
    assert!(
        store
            .update(LogKind::Consumption, 3, changed.to_row())
            .is_err()
    );
}

#[test]
fn test_legacy_file_is_reconciled_and_upgraded_on_rewrite() {
    let root = setup_test_dir("store_legacy");
    let store = LogStore::new(&root);

    fs::write(
        store.path_for(LogKind::Consumption),
        "Date,Consumption,Odometer\n2026-01-10,14.2,1250\n2026-01-12,15.8,1400\n",
    )
    .unwrap();

    let rows = store.load(LogKind::Consumption).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text(MODE), "");
    assert_eq!(rows[1].text(ROUTE), "");

    let extra = ConsumptionRow::new(day(15), 16.0, 1600.0).to_row();
    store.append(&extra, LogKind::Consumption).unwrap();

    let content = fs::read_to_string(store.path_for(LogKind::Consumption)).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Date,Consumption,Odometer,Mode,Route"));
    assert_eq!(lines.next(), Some("2026-01-10,14.2,1250,,"));
    assert_eq!(store.load(LogKind::Consumption).unwrap().len(), 3);
}

#[test]
fn test_bad_cells_load_as_sentinels() {
    let root = setup_test_dir("store_bad_cells");
    let store = LogStore::new(&root);

    fs::write(
        store.path_for(LogKind::Refill),
        "Date,Station,FuelType,PricePerUnit,Quantity,TotalCost,Odometer\n\
         yesterday,PTT,E20,n/a,30,1200,abc\n",
    )
    .unwrap();

    let rows = store.load(LogKind::Refill).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(DATE), Some(&CellValue::Date(None)));
    assert_eq!(rows[0].numeric("PricePerUnit"), 0.0);
    assert_eq!(rows[0].numeric(ODOMETER), 0.0);
    // stored total is trusted
    assert_eq!(rows[0].numeric(TOTAL_COST), 1200.0);
    assert_eq!(rows[0].text(STATION), "PTT");
}

#[test]
fn test_extra_columns_survive_rewrite() {
    let root = setup_test_dir("store_extras");
    let store = LogStore::new(&root);

    fs::write(
        store.path_for(LogKind::Consumption),
        "Date,Consumption,Odometer,Mode,Route,Weather\n2026-01-10,14.2,1250,City,,rain\n",
    )
    .unwrap();

    store
        .append(&ConsumptionRow::new(day(11), 15.0, 1300.0).to_row(), LogKind::Consumption)
        .unwrap();

    let rows = store.load(LogKind::Consumption).unwrap();
    assert_eq!(rows[0].text("Weather"), "rain");
    assert_eq!(rows[1].text("Weather"), "");

    let content = fs::read_to_string(store.path_for(LogKind::Consumption)).unwrap();
    assert!(content.starts_with("Date,Consumption,Odometer,Mode,Route,Weather"));
}

#[test]
fn test_repeated_loads_are_identical() {
    let root = setup_test_dir("store_idempotent");
    let store = LogStore::new(&root);

    fs::write(
        store.path_for(LogKind::Consumption),
        "Date,Consumption\n10/01/2026,\"14,2\"\n,bad\n",
    )
    .unwrap();

    let first = store.load(LogKind::Consumption).unwrap();
    store.replace_all(&first, LogKind::Consumption).unwrap();
    let second = store.load(LogKind::Consumption).unwrap();

    let schema = schema_for(LogKind::Consumption);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert!(a.same_declared(b, schema));
    }
    assert_eq!(first[0].numeric(CONSUMPTION), 14.2);
    assert_eq!(first[0].date(DATE), Some(day(10)));
}

#[test]
fn test_ensure_file_writes_header_once() {
    let root = setup_test_dir("store_ensure");
    let store = LogStore::new(&root);

    assert!(store.ensure_file(LogKind::Refill).unwrap());
    assert!(!store.ensure_file(LogKind::Refill).unwrap());

    let content = fs::read_to_string(store.path_for(LogKind::Refill)).unwrap();
    assert_eq!(
        content.trim(),
        "Date,Station,FuelType,PricePerUnit,Quantity,TotalCost,Odometer"
    );
}

#[test]
fn test_odometer_with_thousands_comma_loads_whole() {
    let root = setup_test_dir("store_thousands");
    let store = LogStore::new(&root);

    fs::write(
        store.path_for(LogKind::Consumption),
        "Date,Consumption,Odometer\n2026-01-10,14.2,\"12,345\"\n",
    )
    .unwrap();

    let rows = store.load(LogKind::Consumption).unwrap();
    assert_eq!(rows[0].numeric(ODOMETER), 12345.0);

    // same reading as the extractor makes of the dashboard text
    let fields = fuellog::extract::extract(
        &[fuellog::extract::RecognizedSpan::new("12,345 km")],
        15.5,
        1250,
    );
    assert_eq!(fields.odometer as f64, rows[0].numeric(ODOMETER));
}

#[test]
fn test_unwritable_data_dir_is_an_error() {
    let root = setup_test_dir("store_unwritable");
    let blocker = common::write_file(&root, "not_a_dir", "keep me\n");
    let store = LogStore::new(&blocker);

    let row = ConsumptionRow::new(day(1), 15.0, 900.0).to_row();
    assert!(matches!(
        store.append(&row, LogKind::Consumption),
        Err(AppError::Io(_))
    ));
    assert!(matches!(
        store.replace_all(&[row], LogKind::Consumption),
        Err(AppError::Io(_))
    ));
    assert!(matches!(
        store.ensure_file(LogKind::Refill),
        Err(AppError::Io(_))
    ));

    assert_eq!(fs::read_to_string(&blocker).unwrap(), "keep me\n");
}
