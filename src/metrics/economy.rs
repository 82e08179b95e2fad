use crate::models::ConsumptionRow;

/// Mean of the `Consumption` readings. `None` when there are no rows.
pub fn average_economy(rows: &[ConsumptionRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let sum: f64 = rows.iter().map(|r| r.consumption).sum();
    Some(sum / rows.len() as f64)
}

/// Highest reading with its driving mode; the first occurrence wins ties.
pub fn best_economy(rows: &[ConsumptionRow]) -> Option<(f64, String)> {
    let mut best: Option<&ConsumptionRow> = None;
    for row in rows {
        match best {
            Some(b) if row.consumption <= b.consumption => {}
            _ => best = Some(row),
        }
    }
    best.map(|r| (r.consumption, r.mode.clone()))
}
