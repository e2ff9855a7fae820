// File: crates/board-core/tests/pipeline.rs
// Purpose: Render target lifecycle and dashboard event routing end to end.

mod common;

use std::sync::Arc;

use board_core::charts::{BarChart, CandlestickChart};
use board_core::{ChartError, Dashboard, FilterEvent, FilterField, Frame, RenderState, RenderTarget, ViewMode, ViewState};
use board_core::draw::Shape;
use common::sample;

fn records() -> Arc<[board_core::Record]> { sample().into() }

#[test]
fn mount_draws_default_view() {
    let t = RenderTarget::mount(Box::new(BarChart::default()), records());
    assert_eq!(t.id(), "bar");
    assert_eq!(t.view(), &ViewState::top(10));
    assert_eq!(t.state(), RenderState::Idle);
    assert_eq!(t.frame().data_shape_count(), 3);
    assert_eq!(t.stats().redraws, 1);
    assert_eq!(t.stats().aggregations, 1);
}

#[test]
fn view_change_reuses_cached_groups() {
    let mut t = RenderTarget::mount(Box::new(BarChart::default()), records());
    let frame = t.on_filter_change(&FilterEvent::view("Bottom 2")).unwrap();
    assert_eq!(frame.data_shape_count(), 2);
    assert_eq!(t.view().mode, ViewMode::BottomN);
    assert_eq!(t.stats().redraws, 2);
    assert_eq!(t.stats().aggregations, 1, "ranking change must not re-aggregate");
}

#[test]
fn filter_change_reaggregates() {
    let mut t = RenderTarget::mount(Box::new(CandlestickChart::default()), records());
    assert_eq!(t.stats().aggregations, 1);
    t.on_filter_change(&FilterEvent::brand("Nike")).unwrap();
    assert_eq!(t.stats().aggregations, 2);
    // Same selection again: cache hit.
    t.on_filter_change(&FilterEvent::brand("Nike")).unwrap();
    assert_eq!(t.stats().aggregations, 2);
    assert_eq!(t.stats().redraws, 3);
}

#[test]
fn invalid_event_leaves_state_untouched() {
    let mut t = RenderTarget::mount(Box::new(BarChart::default()), records());
    let before: Frame = t.frame().clone();
    let view = t.view().clone();

    let err = t.on_filter_change(&FilterEvent::view("Sideways 3")).unwrap_err();
    assert!(matches!(err, ChartError::InvalidFilterValue { field: "view", .. }));
    assert_eq!(t.frame(), &before);
    assert_eq!(t.view(), &view);
    assert_eq!(t.stats().redraws, 1);
}

#[test]
fn empty_selection_renders_placeholder() {
    let mut t = RenderTarget::mount(Box::new(CandlestickChart::default()), records());
    assert!(!t.frame().is_placeholder());

    t.on_filter_change(&FilterEvent::year("2021")).unwrap();
    assert_eq!(t.view().filter.month, Some(3), "month resets to the first month of the new year");
    assert_eq!(t.frame().data_shape_count(), 1);

    let frame = t.on_filter_change(&FilterEvent::brand("Nike")).unwrap();
    assert!(frame.is_placeholder());
    assert_eq!(frame.commands.len(), 1);
    assert_eq!(frame.data_shape_count(), 0);
    assert!(frame.axes.is_empty());
}

#[test]
fn empty_dataset_mounts_placeholders() {
    let d = Dashboard::with_default_charts(Vec::<board_core::Record>::new());
    assert_eq!(d.charts().len(), 8);
    assert!(d.charts().iter().all(|c| c.frame().is_placeholder()));
}

#[test]
fn dispatch_redraws_only_listening_charts() {
    let mut d = Dashboard::with_default_charts(sample());
    let mut sink: Vec<Frame> = Vec::new();

    let n = d.dispatch(&FilterEvent::brand("Nike"), &mut sink).unwrap();
    let mut ids: Vec<&str> = sink.iter().map(|f| f.chart_id).collect();
    ids.sort();
    assert_eq!(n, 5);
    assert_eq!(ids, ["candlestick", "industry", "line", "pie", "treemap"]);

    sink.clear();
    assert_eq!(d.dispatch(&FilterEvent::view("Top 2"), &mut sink).unwrap(), 1);
    assert_eq!(d.dispatch(&FilterEvent::year("2020"), &mut sink).unwrap(), 1);
    assert_eq!(d.dispatch(&FilterEvent::month("February"), &mut sink).unwrap(), 1);
    assert_eq!(sink.len(), 3);

    let bar = d.chart("bar").unwrap();
    assert_eq!(bar.frame().data_shape_count(), 2);
    let line = d.chart("line").unwrap();
    assert_eq!(line.view().filter.brand.as_deref(), Some("Nike"));
}

#[test]
fn dispatch_rejects_invalid_values_before_any_change() {
    let mut d = Dashboard::with_default_charts(sample());
    let mut sink: Vec<Frame> = Vec::new();
    let before: Vec<Frame> = d.charts().iter().map(|c| c.frame().clone()).collect();

    assert!(d.dispatch(&FilterEvent::year("twenty"), &mut sink).is_err());
    assert!(d.dispatch(&FilterEvent::month("Smarch"), &mut sink).is_err());
    assert!(sink.is_empty());
    let after: Vec<Frame> = d.charts().iter().map(|c| c.frame().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn unmount_and_lookup() {
    let mut d = Dashboard::with_default_charts(sample());
    assert!(d.chart("pie").is_ok());
    d.unmount("pie").unwrap();
    assert!(matches!(d.chart("pie"), Err(ChartError::UnknownChart(_))));
    assert!(d.unmount("pie").is_err());
    assert_eq!(d.charts().len(), 7);

    let mut sink: Vec<Frame> = Vec::new();
    assert_eq!(d.dispatch(&FilterEvent::industry("Retail"), &mut sink).unwrap(), 0);
}

#[test]
fn present_all_hands_every_frame_to_sink() {
    let d = Dashboard::with_default_charts(sample());
    let mut sink: Vec<Frame> = Vec::new();
    d.present_all(&mut sink).unwrap();
    assert_eq!(sink.len(), 8);
}

#[test]
fn teardown_reports_work_done() {
    let mut t = RenderTarget::mount(Box::new(BarChart::default()), records());
    t.update(ViewState::all());
    let stats = t.teardown();
    assert_eq!(stats.redraws, 2);
}

#[test]
fn listeners_per_field() {
    let d = Dashboard::with_default_charts(sample());
    let listening = |f: FilterField| d.charts().iter().filter(|c| c.listens_to(f)).count();
    assert_eq!(listening(FilterField::Brand), 5);
    assert_eq!(listening(FilterField::ViewMode), 1);
    assert_eq!(listening(FilterField::Year), 1);
    assert_eq!(listening(FilterField::Industry), 1);
}

#[test]
fn bar_ranking_leaves_other_ranked_charts_alone() {
    let mut d = Dashboard::with_default_charts(sample());
    let mut sink: Vec<Frame> = Vec::new();
    let country = d.chart("country").unwrap().frame().clone();
    let volume = d.chart("volume").unwrap().frame().clone();

    assert_eq!(d.dispatch(&FilterEvent::view("Top 1"), &mut sink).unwrap(), 1);
    let ids: Vec<&str> = sink.iter().map(|f| f.chart_id).collect();
    assert_eq!(ids, ["bar"]);
    assert_eq!(d.chart("bar").unwrap().frame().data_shape_count(), 1);
    assert_eq!(d.chart("country").unwrap().frame(), &country);
    assert_eq!(d.chart("country").unwrap().view(), &ViewState::all());
    assert_eq!(d.chart("volume").unwrap().frame(), &volume);
}

#[test]
fn dispatch_to_reaches_one_chart() {
    let mut d = Dashboard::with_default_charts(sample());
    let mut sink: Vec<Frame> = Vec::new();

    assert_eq!(d.dispatch_to("line", &FilterEvent::brand("Toyota"), &mut sink).unwrap(), 1);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].chart_id, "line");
    assert_eq!(d.chart("line").unwrap().view().filter.brand.as_deref(), Some("Toyota"));
    assert_eq!(d.chart("candlestick").unwrap().view().filter.brand.as_deref(), Some("Apple"));

    // Addressed but not listening: nothing redraws.
    assert_eq!(d.dispatch_to("country", &FilterEvent::view("Top 1"), &mut sink).unwrap(), 0);
    assert!(d.dispatch_to("nope", &FilterEvent::brand("Nike"), &mut sink).is_err());
    assert_eq!(sink.len(), 1);
}

#[test]
fn dashboard_update_replaces_one_view() {
    let mut d = Dashboard::with_default_charts(sample());
    let mut sink: Vec<Frame> = Vec::new();
    d.update("country", ViewState::top(1), &mut sink).unwrap();
    assert_eq!(sink.len(), 1);
    assert_eq!(d.chart("country").unwrap().frame().data_shape_count(), 1);
    assert_eq!(d.chart("bar").unwrap().frame().data_shape_count(), 3);
    assert!(d.update("nope", ViewState::all(), &mut sink).is_err());
}

#[test]
fn brand_all_clears_single_brand_charts() {
    let mut d = Dashboard::with_default_charts(sample());
    let mut sink: Vec<Frame> = Vec::new();
    assert_eq!(d.dispatch(&FilterEvent::brand("All"), &mut sink).unwrap(), 5);

    for id in ["candlestick", "line", "industry"] {
        let f = d.chart(id).unwrap().frame();
        assert!(f.is_placeholder(), "{id} should wait for a brand");
        assert_eq!(f.data_shape_count(), 0, "{id}");
        assert!(f.commands.iter().all(|c| matches!(c.shape, Shape::Placeholder { .. })), "{id}");
    }
    for id in ["pie", "treemap"] {
        let f = d.chart(id).unwrap().frame();
        assert!(f.data_shape_count() > 0, "{id}");
        assert!(f.data_commands().all(|c| !c.style.highlighted), "{id}");
    }
}

/// Accepts `ok` frames, then fails.
struct FailingSink {
    ok: usize,
    seen: Vec<&'static str>,
}

impl board_core::FrameSink for FailingSink {
    fn present(&mut self, frame: &Frame) -> anyhow::Result<()> {
        if self.seen.len() == self.ok {
            anyhow::bail!("sink closed");
        }
        self.seen.push(frame.chart_id);
        Ok(())
    }
}

#[test]
fn sink_failure_still_applies_event_everywhere() {
    let mut d = Dashboard::with_default_charts(sample());
    let mut sink = FailingSink { ok: 1, seen: Vec::new() };

    assert!(d.dispatch(&FilterEvent::brand("Nike"), &mut sink).is_err());
    assert_eq!(sink.seen.len(), 1);
    for id in ["candlestick", "industry", "line"] {
        assert_eq!(d.chart(id).unwrap().view().filter.brand.as_deref(), Some("Nike"), "{id}");
    }
}
