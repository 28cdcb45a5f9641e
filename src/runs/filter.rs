//! Ordering and filtering of run lists.

use super::types::Run;

/// Copy of `runs` ordered by date, oldest first. Same-day runs keep their
/// relative order.
pub fn sorted_by_date(runs: &[Run]) -> Vec<Run> {
    let mut sorted = runs.to_vec();
    sorted.sort_by_key(|run| run.date);
    sorted
}

/// Runs whose distance equals `distance`, or every run when no distance is
/// selected.
pub fn filter_by_distance(runs: &[Run], distance: Option<f64>) -> Vec<Run> {
    match distance {
        Some(selected) => runs
            .iter()
            .filter(|run| run.distance == Some(selected))
            .cloned()
            .collect(),
        None => runs.to_vec(),
    }
}

/// Distinct logged distances in ascending order.
pub fn distance_options(runs: &[Run]) -> Vec<f64> {
    let mut distances: Vec<f64> = runs
        .iter()
        .filter_map(|run| run.distance)
        .filter(|d| d.is_finite())
        .collect();
    distances.sort_by(f64::total_cmp);
    distances.dedup();
    distances
}
