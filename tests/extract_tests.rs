use fuellog::extract::{ExtractedFields, RecognizedSpan, Thresholds, extract, extract_with};

const DEF_ECO: f64 = 15.5;
const DEF_ODO: u64 = 1250;

fn spans(texts: &[&str]) -> Vec<RecognizedSpan> {
    texts.iter().map(|t| RecognizedSpan::new(t)).collect()
}

fn defaults() -> ExtractedFields {
    ExtractedFields {
        economy: DEF_ECO,
        odometer: DEF_ODO,
    }
}

#[test]
fn test_empty_input_returns_fallbacks() {
    assert_eq!(extract(&[], DEF_ECO, DEF_ODO), defaults());
}

#[test]
fn test_economy_above_ceiling_is_rejected() {
    let out = extract(&spans(&["120.5 km/L"]), DEF_ECO, DEF_ODO);
    assert_eq!(out, defaults());

    let out = extract(&spans(&["15.2 km/L"]), DEF_ECO, DEF_ODO);
    assert_eq!(out.economy, 15.2);
    assert_eq!(out.odometer, DEF_ODO);
}

#[test]
fn test_zero_economy_is_rejected() {
    let out = extract(&spans(&["0.0 km/L"]), DEF_ECO, DEF_ODO);
    assert_eq!(out.economy, DEF_ECO);
}

#[test]
fn test_odometer_with_distance_marker() {
    let out = extract(&spans(&["ODO 45678 km"]), DEF_ECO, DEF_ODO);
    assert_eq!(out.odometer, 45678);
    assert_eq!(out.economy, DEF_ECO);

    // thousands separator is dropped
    let out = extract(&spans(&["12,345 km"]), DEF_ECO, DEF_ODO);
    assert_eq!(out.odometer, 12345);
}

#[test]
fn test_odometer_at_or_below_floor_is_rejected() {
    let out = extract(&spans(&["45 km", "100 km"]), DEF_ECO, DEF_ODO);
    assert_eq!(out.odometer, DEF_ODO);
}

#[test]
fn test_decimal_distance_is_not_an_economy() {
    // trip meter reading, not a consumption figure
    let out = extract(&spans(&["TRIP A 123.4 km"]), DEF_ECO, DEF_ODO);
    assert_eq!(out, defaults());
}

#[test]
fn test_bare_decimal_is_an_economy_guess() {
    let out = extract(&spans(&["16.8"]), DEF_ECO, DEF_ODO);
    assert_eq!(out.economy, 16.8);
}

#[test]
fn test_text_without_digits_is_ignored() {
    let out = extract(&spans(&["km/L", "AVG", "."]), DEF_ECO, DEF_ODO);
    assert_eq!(out, defaults());
}

#[test]
fn test_last_qualifying_span_wins() {
    let out = extract(
        &spans(&["14.1 km/L", "ODO 30500 km", "16.3 km/L", "ODO 30512 km", "99.9 km/L"]),
        DEF_ECO,
        DEF_ODO,
    );
    assert_eq!(out.economy, 16.3);
    assert_eq!(out.odometer, 30512);
}

#[test]
fn test_custom_thresholds() {
    let loose = Thresholds {
        economy_ceiling: 100.0,
        odometer_floor: 10,
        ..Thresholds::default()
    };
    let out = extract_with(&spans(&["80.5 km/L", "45 km"]), DEF_ECO, DEF_ODO, &loose);
    assert_eq!(out.economy, 80.5);
    assert_eq!(out.odometer, 45);
}

#[test]
fn test_low_confidence_spans_are_skipped() {
    let strict = Thresholds {
        min_confidence: Some(0.5),
        ..Thresholds::default()
    };
    let input = vec![
        RecognizedSpan::with_confidence("14.0 km/L", 0.9),
        RecognizedSpan::with_confidence("17.0 km/L", 0.3),
        RecognizedSpan::new("ODO 22000 km"),
    ];

    let out = extract_with(&input, DEF_ECO, DEF_ODO, &strict);
    assert_eq!(out.economy, 14.0);
    // no confidence reported: never skipped
    assert_eq!(out.odometer, 22000);

    // without a threshold confidence is ignored
    let out = extract(&input, DEF_ECO, DEF_ODO);
    assert_eq!(out.economy, 17.0);
}

#[test]
fn test_spelled_out_economy_units() {
    for text in ["15.2 km/liter", "15.2 km/litre", "15.2 KM / Liters"] {
        let out = extract(&spans(&[text]), DEF_ECO, DEF_ODO);
        assert_eq!(out.economy, 15.2, "{}", text);
    }
}
