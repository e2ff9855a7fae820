// File: crates/board-core/tests/charts.rs
// Purpose: Per-chart frames: shapes, ordering, highlights and tooltips.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use board_core::charts::{
    BarChart, CandlestickChart, CountryChart, IndustryComparisonChart, LineChart, PieChart, TreemapChart, VolumeChart,
};
use board_core::draw::ShapeKind;
use board_core::{default_recipes, ChartRecipe, FillKey, FilterEvent, Frame, GroupKey, RenderTarget, Shape};
use common::{approx, daily_series, rec, sample};

fn mount(recipe: impl ChartRecipe + 'static, records: Vec<board_core::Record>) -> RenderTarget {
    RenderTarget::mount(Box::new(recipe), Arc::from(records))
}

fn payload_keys(f: &Frame) -> Vec<String> {
    f.data_commands().filter_map(|c| c.payload.as_ref()).map(|p| p.key.to_string()).collect()
}

fn texts(f: &Frame) -> Vec<String> {
    f.commands
        .iter()
        .filter_map(|c| match &c.shape {
            Shape::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn count_kind(f: &Frame, kind: ShapeKind) -> usize {
    f.commands.iter().filter(|c| c.shape.kind() == kind).count()
}

#[test]
fn recipes_have_unique_ids() {
    let ids: HashSet<&str> = default_recipes().iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), 8);
}

#[test]
fn every_data_shape_has_a_tooltip() {
    for recipe in default_recipes() {
        let t = RenderTarget::mount(recipe, Arc::from(sample()));
        assert!(t.frame().data_shape_count() > 0, "{} drew nothing", t.id());
        assert!(t.frame().data_commands().all(|c| c.tooltip.is_some()), "{}", t.id());
    }
}

#[test]
fn bar_ranks_industries_by_average_close() {
    let t = mount(BarChart::default(), sample());
    let f = t.frame();
    assert_eq!(f.title, "Average Close Price by Industry");
    assert_eq!(payload_keys(f), ["Automotive", "Technology", "Retail"]);
    assert_eq!(f.axes.len(), 2);
    let tip = f.data_commands().next().and_then(|c| c.tooltip.clone()).unwrap();
    assert_eq!(tip, "Automotive\nAvg Close: $202.50");
}

#[test]
fn bars_can_be_hit_tested() {
    let t = mount(BarChart::default(), sample());
    let cmd = t.frame().data_commands().nth(1).unwrap();
    let Shape::Rect { x, y, width, height } = cmd.shape else { panic!("bar should be a rect") };
    let hit = t.frame().hit_test(x + width / 2.0, y + height / 2.0).unwrap();
    assert_eq!(hit.payload.as_ref().unwrap().key, GroupKey::label("Technology"));
    assert!(t.frame().hit_test(1.0, 1.0).is_none());
}

#[test]
fn volume_labels_use_si_suffixes() {
    let t = mount(VolumeChart::default(), sample());
    let f = t.frame();
    assert_eq!(payload_keys(f), ["Apple", "Nike", "Adidas", "Toyota", "Sony"]);
    let labels = texts(f);
    for want in ["5.0k", "1.5k", "900"] {
        assert!(labels.iter().any(|l| l == want), "missing label {want} in {labels:?}");
    }
}

#[test]
fn industry_comparison_pins_selected_brand_last() {
    let mut t = mount(IndustryComparisonChart::default(), sample());
    let f = t.frame();
    assert_eq!(f.title, "Industry Comparison: Technology");
    assert_eq!(payload_keys(f), ["Sony", "Apple"]);
    let last = f.data_commands().last().unwrap();
    assert!(last.style.highlighted);
    assert_eq!(last.style.fill, FillKey::Highlight);
    assert!(texts(f).iter().any(|l| l == "106.00"));

    let f = t.on_filter_change(&FilterEvent::brand("Adidas")).unwrap();
    assert_eq!(f.title, "Industry Comparison: Retail");
    assert_eq!(payload_keys(f), ["Nike", "Adidas"]);

    let f = t.on_filter_change(&FilterEvent::brand("All")).unwrap();
    assert!(f.is_placeholder());
}

#[test]
fn pie_shares_and_highlight() {
    let mut t = mount(PieChart::default(), sample());
    let f = t.frame();
    assert_eq!(count_kind(f, ShapeKind::Arc), 3);
    assert_eq!(payload_keys(f), ["Technology", "Retail", "Automotive"]);
    assert!(texts(f).iter().any(|l| l == "50.0%"));
    assert!(f.data_commands().all(|c| !c.style.highlighted));

    // 3 o'clock, mid-ring: inside the first half of the donut.
    let hit = f.hit_test(210.0 + 100.0, 190.0).unwrap();
    assert_eq!(hit.payload.as_ref().unwrap().key, GroupKey::label("Technology"));

    let f = t.on_filter_change(&FilterEvent::brand("Nike")).unwrap();
    let lit: Vec<String> = f
        .data_commands()
        .filter(|c| c.style.highlighted)
        .map(|c| c.payload.as_ref().unwrap().key.to_string())
        .collect();
    assert_eq!(lit, ["Retail"]);
}

#[test]
fn pie_folds_small_industries_into_other() {
    let mut rows = Vec::new();
    for i in 0..12 {
        for _ in 0..(12 - i) {
            rows.push(rec("2020-01-02", "B", &format!("Ind{i:02}"), "USA", 1.0, 1.0, 1.0, 1.0, 1.0));
        }
    }
    let t = mount(PieChart::default(), rows);
    let keys = payload_keys(t.frame());
    assert_eq!(keys.len(), 11);
    assert_eq!(keys.last().map(String::as_str), Some("Other"));
    let other = t.frame().data_commands().last().unwrap().payload.as_ref().unwrap().magnitude();
    assert_eq!(other, 3.0);
}

#[test]
fn treemap_highlights_selected_brand_and_shortens_labels() {
    let mut rows = sample();
    rows.push(rec("2020-01-02", "International Widgets", "Industrial", "USA", 1.0, 1.0, 1.0, 1.0, 10000.0));
    let mut t = mount(TreemapChart::default(), rows);
    let f = t.frame();
    assert_eq!(count_kind(f, ShapeKind::Rect), 6);
    assert_eq!(payload_keys(f)[0], "International Widgets");
    assert!(texts(f).iter().any(|l| l == "Internatio..."));
    assert!(texts(f).iter().any(|l| l == "Apple"));

    let f = t.on_filter_change(&FilterEvent::brand("Apple")).unwrap();
    let lit: Vec<&board_core::DrawCommand> = f.data_commands().filter(|c| c.style.highlighted).collect();
    assert_eq!(lit.len(), 1);
    assert_eq!(lit[0].payload.as_ref().unwrap().key, GroupKey::label("Apple"));
}

#[test]
fn candles_for_default_month() {
    let t = mount(CandlestickChart::default(), sample());
    let f = t.frame();
    assert_eq!(f.title, "Candlestick Chart – Apple OHLC");
    assert_eq!(payload_keys(f), ["2020-01-02", "2020-01-03"]);
    let fills: Vec<FillKey> = f.data_commands().map(|c| c.style.fill).collect();
    assert_eq!(fills, [FillKey::Up, FillKey::Down]);
    assert_eq!(count_kind(f, ShapeKind::Line), 2);
    assert!(f.axes.iter().any(|a| a.title == "January"));
}

#[test]
fn candlestick_reports_missing_month() {
    let mut t = mount(CandlestickChart::default(), sample());
    let f = t.on_filter_change(&FilterEvent::month("December")).unwrap();
    assert!(f.is_placeholder());
    let msg = f.commands.iter().find_map(|c| match &c.shape {
        Shape::Placeholder { message, .. } => Some(message.clone()),
        _ => None,
    });
    assert_eq!(msg.as_deref(), Some("No data available for selected year and month"));
}

#[test]
fn candles_never_mix_brands() {
    let rows = vec![
        rec("2020-01-02", "Apple", "Technology", "USA", 100.0, 105.0, 99.0, 104.0, 1000.0),
        rec("2020-01-02", "Nike", "Retail", "USA", 50.0, 52.0, 49.0, 51.0, 800.0),
    ];
    let mut t = mount(CandlestickChart::default(), rows);

    let f = t.on_filter_change(&FilterEvent::brand("All")).unwrap();
    assert!(f.is_placeholder());
    assert_eq!(f.data_shape_count(), 0);
    let msg = f.commands.iter().find_map(|c| match &c.shape {
        Shape::Placeholder { message, .. } => Some(message.clone()),
        _ => None,
    });
    assert_eq!(msg.as_deref(), Some("Select a brand"));

    let f = t.on_filter_change(&FilterEvent::brand("Nike")).unwrap();
    let candles: Vec<_> = f.data_commands().filter_map(|c| c.payload.as_ref().and_then(|p| p.ohlc())).collect();
    assert_eq!(candles.len(), 1);
    assert!(approx(candles[0].open, 50.0) && approx(candles[0].close, 51.0));
    assert!(approx(candles[0].high, 52.0) && approx(candles[0].low, 49.0));
}

#[test]
fn line_follows_selected_brand() {
    let mut t = mount(LineChart::default(), sample());
    let f = t.frame();
    assert_eq!(count_kind(f, ShapeKind::Polyline), 1);
    assert_eq!(f.data_shape_count(), 4);
    assert_eq!(f.data_commands().next().unwrap().tooltip.as_deref(), Some("$104.00"));

    let Shape::Circle { cx, .. } = f.data_commands().nth(2).unwrap().shape else { panic!("marker") };
    let near = f.nearest_x(cx + 1.0).unwrap();
    assert_eq!(near.payload.as_ref().unwrap().key.to_string(), "2020-02-03");

    let f = t.on_filter_change(&FilterEvent::brand("Toyota")).unwrap();
    assert_eq!(f.data_shape_count(), 2);
}

#[test]
fn long_line_series_are_downsampled() {
    let t = mount(LineChart::default().with_max_points(500), daily_series("Acme", 3000));
    let f = t.frame();
    assert_eq!(f.data_shape_count(), 500);
    let Some(Shape::Polyline { points }) = f.commands.iter().map(|c| &c.shape).find(|s| s.kind() == ShapeKind::Polyline).cloned() else {
        panic!("polyline")
    };
    assert_eq!(points.len(), 500);
    assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn country_bars_are_proportional() {
    let t = mount(CountryChart::default(), sample());
    let heights: Vec<f64> = t
        .frame()
        .data_commands()
        .filter_map(|c| match c.shape {
            Shape::Rect { height, .. } => Some(height),
            _ => None,
        })
        .collect();
    assert_eq!(heights.len(), 3);
    assert!(approx(heights[0], 2.0 * heights[1]));
    assert!(approx(heights[0], 6.0 * heights[2]));
}
