// File: crates/board-core/tests/transform.rs
// Purpose: Ranking and slicing of aggregated points per view mode.

use board_core::transform::{chronological, ranked_with_pinned, rank_descending, total, with_other};
use board_core::{transform, AggregatedPoint, GroupKey, ViewState};

fn pts(values: &[(&str, f64)]) -> Vec<AggregatedPoint> {
    values.iter().map(|&(k, v)| AggregatedPoint::scalar(GroupKey::label(k), v)).collect()
}

fn keys(points: &[AggregatedPoint]) -> Vec<String> {
    points.iter().map(|p| p.key.to_string()).collect()
}

#[test]
fn top_n_is_descending_prefix() {
    let p = pts(&[("a", 3.0), ("b", 9.0), ("c", 1.0), ("d", 7.0), ("e", 5.0)]);
    let out = transform(&p, &ViewState::top(3));
    assert_eq!(keys(&out), ["b", "d", "e"]);
}

#[test]
fn bottom_n_is_tail_of_descending_ranking() {
    let p = pts(&[("a", 3.0), ("b", 9.0), ("c", 1.0), ("d", 7.0), ("e", 5.0)]);
    let out = transform(&p, &ViewState::bottom(2));
    assert_eq!(keys(&out), ["a", "c"]);
}

#[test]
fn n_larger_than_input_returns_everything() {
    let p = pts(&[("a", 1.0), ("b", 2.0)]);
    assert_eq!(transform(&p, &ViewState::top(10)).len(), 2);
    assert_eq!(transform(&p, &ViewState::bottom(10)).len(), 2);
}

#[test]
fn all_mode_keeps_every_point_ranked() {
    let p = pts(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
    assert_eq!(keys(&transform(&p, &ViewState::all())), ["c", "b", "a"]);
}

#[test]
fn empty_input_and_zero_n() {
    assert!(transform(&[], &ViewState::top(10)).is_empty());
    let p = pts(&[("a", 1.0)]);
    assert!(transform(&p, &ViewState::top(0)).is_empty());
    assert!(transform(&p, &ViewState::bottom(0)).is_empty());
}

#[test]
fn ties_keep_input_order() {
    let p = pts(&[("x", 2.0), ("y", 5.0), ("z", 2.0), ("w", 2.0)]);
    assert_eq!(keys(&rank_descending(&p)), ["y", "x", "z", "w"]);
}

#[test]
fn input_is_not_modified() {
    let p = pts(&[("a", 1.0), ("b", 2.0)]);
    let before = p.clone();
    let _ = transform(&p, &ViewState::top(1));
    assert_eq!(p, before);
}

#[test]
fn remainder_folds_into_other() {
    let p = pts(&[("a", 5.0), ("b", 4.0), ("c", 3.0), ("d", 2.0), ("e", 1.0)]);
    let out = with_other(&p, 2, "Other");
    assert_eq!(keys(&out), ["a", "b", "Other"]);
    assert_eq!(out[2].magnitude(), 6.0);
    assert_eq!(total(&out), total(&p));

    let short = with_other(&p, 10, "Other");
    assert_eq!(short.len(), 5);
}

#[test]
fn pinned_key_is_appended_after_peers() {
    let p = pts(&[("a", 5.0), ("me", 10.0), ("b", 4.0), ("c", 3.0)]);
    let out = ranked_with_pinned(&p, 2, &GroupKey::label("me"));
    assert_eq!(keys(&out), ["a", "b", "me"]);

    let missing = ranked_with_pinned(&p, 2, &GroupKey::label("nobody"));
    assert_eq!(keys(&missing), ["me", "a"]);
}

#[test]
fn chronological_orders_by_day() {
    use chrono::NaiveDate;
    let d = |s: &str| GroupKey::Day(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap());
    let p = vec![
        AggregatedPoint::scalar(d("2020-03-01"), 1.0),
        AggregatedPoint::scalar(d("2019-12-31"), 2.0),
        AggregatedPoint::scalar(d("2020-01-15"), 3.0),
    ];
    let out = chronological(&p);
    assert_eq!(keys(&out), ["2019-12-31", "2020-01-15", "2020-03-01"]);
}

#[test]
fn ranked_views_are_slices_of_all() {
    let p = pts(&[("a", 3.0), ("b", 9.0), ("c", 1.0), ("d", 7.0), ("e", 5.0), ("f", 5.0)]);
    let all = transform(&p, &ViewState::all());
    for k in 0..8u32 {
        let top = transform(&p, &ViewState::top(k));
        let bottom = transform(&p, &ViewState::bottom(k));
        let len = (k as usize).min(all.len());
        assert_eq!(top, all[..len]);
        assert_eq!(bottom, all[all.len() - len..]);
        assert_eq!(transform(&p, &ViewState::top(k)), top, "same inputs, same output");
    }
}
