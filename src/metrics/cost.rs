use crate::models::RefillRow;
use crate::utils::date::month_label;

/// Label used for refills whose date is unset.
pub const UNDATED: &str = "undated";

/// Stored `TotalCost` summed per `YYYY-MM` month.
///
/// Months appear in the order they are first seen in `rows`, not in
/// calendar order. Months without refills have no entry.
pub fn monthly_cost(rows: &[RefillRow]) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = Vec::new();
    for row in rows {
        let label = row
            .date
            .as_ref()
            .map(month_label)
            .unwrap_or_else(|| UNDATED.to_string());

        match out.iter_mut().find(|(l, _)| *l == label) {
            Some((_, sum)) => *sum += row.total_cost,
            None => out.push((label, row.total_cost)),
        }
    }
    out
}

pub fn total_cost(rows: &[RefillRow]) -> f64 {
    rows.iter().map(|r| r.total_cost).sum()
}

pub fn total_volume(rows: &[RefillRow]) -> f64 {
    rows.iter().map(|r| r.quantity).sum()
}

/// Positions (0-based) whose stored total disagrees with price × quantity,
/// with the stored-minus-expected difference. Nothing is corrected.
pub fn cost_mismatches(rows: &[RefillRow]) -> Vec<(usize, f64)> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, r)| r.cost_mismatch().map(|d| (i, d)))
        .collect()
}
