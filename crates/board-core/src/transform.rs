// File: crates/board-core/src/transform.rs
// Summary: Series transformer; ranks, slices and reorders aggregated points for a view.

use crate::aggregate::{AggregatedPoint, GroupKey};
use crate::view::{ViewMode, ViewState};

/// Stable descending sort by magnitude; equal values keep their input order.
pub fn rank_descending(points: &[AggregatedPoint]) -> Vec<AggregatedPoint> {
    let mut out = points.to_vec();
    out.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude()));
    out
}

/// Rank and slice `points` for `view`.
///
/// `BottomN` returns the tail of the descending ranking, still in descending order.
/// An `n` larger than the input returns the whole ranking.
pub fn transform(points: &[AggregatedPoint], view: &ViewState) -> Vec<AggregatedPoint> {
    let mut ranked = rank_descending(points);
    let n = view.n as usize;
    match view.mode {
        ViewMode::All => {}
        ViewMode::TopN => ranked.truncate(n),
        ViewMode::BottomN => {
            let skip = ranked.len().saturating_sub(n);
            ranked.drain(..skip);
        }
    }
    ranked
}

/// Top `keep` groups plus one `other_label` group holding the sum of the rest.
/// The remainder group is omitted when it sums to zero.
pub fn with_other(points: &[AggregatedPoint], keep: usize, other_label: &str) -> Vec<AggregatedPoint> {
    let mut ranked = rank_descending(points);
    if ranked.len() <= keep {
        return ranked;
    }
    let rest: f64 = ranked.drain(keep..).map(|p| p.magnitude()).sum();
    if rest > 0.0 {
        ranked.push(AggregatedPoint::scalar(GroupKey::label(other_label), rest));
    }
    ranked
}

/// Top `n` groups other than `pinned`, followed by `pinned` itself when present.
pub fn ranked_with_pinned(points: &[AggregatedPoint], n: usize, pinned: &GroupKey) -> Vec<AggregatedPoint> {
    let others: Vec<AggregatedPoint> = points.iter().filter(|p| &p.key != pinned).cloned().collect();
    let mut out = rank_descending(&others);
    out.truncate(n);
    if let Some(p) = points.iter().find(|p| &p.key == pinned) {
        out.push(p.clone());
    }
    out
}

/// Ascending by key (dates, months, labels); used by time series.
pub fn chronological(points: &[AggregatedPoint]) -> Vec<AggregatedPoint> {
    let mut out = points.to_vec();
    out.sort_by(|a, b| a.key.cmp(&b.key));
    out
}

/// Sum of scalar magnitudes; used for share/percentage labels.
pub fn total(points: &[AggregatedPoint]) -> f64 {
    points.iter().map(AggregatedPoint::magnitude).filter(|v| v.is_finite()).sum()
}
