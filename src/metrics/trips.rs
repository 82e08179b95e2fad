use crate::models::RefillRow;

/// Odometer delta between consecutive refills, in the order given.
///
/// The first refill has no trip and is skipped, so the result has
/// `rows.len() - 1` entries. Rows are not sorted here: a negative delta
/// means bad data or an odometer reset and is returned as-is.
pub fn trip_distances(rows: &[RefillRow]) -> Vec<f64> {
    rows.windows(2)
        .map(|w| w[1].odometer - w[0].odometer)
        .collect()
}

/// Distance covered over fuel bought, excluding the first fill's volume
/// (the tank level before the log started is unknown).
/// `None` with fewer than two refills or no fuel after the first.
pub fn real_world_economy(rows: &[RefillRow]) -> Option<f64> {
    let (first, last) = match rows {
        [first, .., last] => (first, last),
        _ => return None,
    };

    let volume: f64 = rows[1..].iter().map(|r| r.quantity).sum();
    if volume == 0.0 {
        return None;
    }

    Some((last.odometer - first.odometer) / volume)
}

/// Sum of non-negative trip distances.
pub fn valid_distance(rows: &[RefillRow]) -> f64 {
    trip_distances(rows).into_iter().filter(|d| *d >= 0.0).sum()
}

/// Total spent over total valid distance.
///
/// Negative trips are left out of the distance but their cost still counts,
/// so bad odometer entries show up as a higher cost per distance.
/// `None` when no valid distance is available.
pub fn cost_per_distance(rows: &[RefillRow]) -> Option<f64> {
    let distance = valid_distance(rows);
    if distance <= 0.0 {
        return None;
    }
    Some(super::cost::total_cost(rows) / distance)
}
