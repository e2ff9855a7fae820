// File: crates/board-core/src/charts/mod.rs
// Summary: Chart recipe trait (per-chart strategy) plus the shared bar/axis emitters.

mod bar;
mod candlestick;
mod country;
mod industry;
mod line;
mod pie;
mod treemap;
mod volume;

pub use bar::BarChart;
pub use candlestick::CandlestickChart;
pub use country::CountryChart;
pub use industry::IndustryComparisonChart;
pub use line::LineChart;
pub use pie::PieChart;
pub use treemap::TreemapChart;
pub use volume::VolumeChart;

use crate::aggregate::AggregatedPoint;
use crate::controller::FilterField;
use crate::draw::{AxisGuide, AxisSide, DrawCommand, Frame, Shape, StyleHints, TextAnchor, Tick};
use crate::format;
use crate::geometry::Rect;
use crate::record::Record;
use crate::scale::{build_scale, AxisKind, BandScale, LinearScale, ScaleSpec, TimeScale};
use crate::transform::transform;
use crate::types::Layout;
use crate::view::{FilterSelection, ViewState};

/// Per-chart-kind strategy: which records to group and how, which groups to show,
/// and which shapes encode them. The render target drives the pipeline.
pub trait ChartRecipe {
    fn id(&self) -> &'static str;

    fn title(&self, records: &[Record], view: &ViewState) -> String;

    fn layout(&self) -> Layout;

    /// Whether a filter event on `field` concerns this chart.
    fn listens_to(&self, field: FilterField) -> bool;

    fn default_view(&self, records: &[Record]) -> ViewState;

    /// The part of the view the aggregation depends on. Views with equal
    /// grouping reuse the cached aggregation.
    fn grouping(&self, _view: &ViewState) -> FilterSelection {
        FilterSelection::default()
    }

    fn aggregate(&self, records: &[Record], view: &ViewState) -> Vec<AggregatedPoint>;

    fn select(&self, points: &[AggregatedPoint], view: &ViewState) -> Vec<AggregatedPoint> {
        transform(points, view)
    }

    /// Adjust a freshly merged view against the data (e.g. reset a month that
    /// does not exist in the newly selected year).
    fn reconcile(&self, _records: &[Record], _prev: &ViewState, next: ViewState) -> ViewState {
        next
    }

    fn empty_message(&self, _view: &ViewState) -> String {
        "No data available".to_string()
    }

    /// Emit axes and shapes for a non-empty selection into `frame`.
    fn emit(&self, points: &[AggregatedPoint], view: &ViewState, frame: &mut Frame);
}

/// The eight dashboard charts with their default configuration.
pub fn default_recipes() -> Vec<Box<dyn ChartRecipe>> {
    vec![
        Box::new(BarChart::default()),
        Box::new(CandlestickChart::default()),
        Box::new(LineChart::default()),
        Box::new(PieChart::default()),
        Box::new(TreemapChart::default()),
        Box::new(CountryChart::default()),
        Box::new(IndustryComparisonChart::default()),
        Box::new(VolumeChart::default()),
    ]
}

// ---- shared emitters ---------------------------------------------------------

pub(crate) fn linear_axis(scale: &LinearScale, side: AxisSide, offset: f64, title: &str, fmt: fn(f64) -> String) -> AxisGuide {
    let ticks = scale
        .ticks(if matches!(side, AxisSide::Left) { 10 } else { 5 })
        .into_iter()
        .map(|v| Tick { pos: scale.map(v), label: fmt(v) })
        .collect();
    let (a, b) = scale.range;
    AxisGuide { side, offset, span: (a.min(b), a.max(b)), title: title.to_string(), ticks }
}

pub(crate) fn band_axis(scale: &BandScale, side: AxisSide, offset: f64, title: &str) -> AxisGuide {
    let half = scale.bandwidth() * 0.5;
    let ticks = scale
        .keys
        .iter()
        .enumerate()
        .map(|(i, k)| Tick { pos: scale.position_at(i) + half, label: k.to_string() })
        .collect();
    AxisGuide { side, offset, span: scale.range, title: title.to_string(), ticks }
}

pub(crate) fn time_axis(scale: &TimeScale, side: AxisSide, offset: f64, title: &str, count: usize, fmt: &str) -> AxisGuide {
    let ticks = scale
        .ticks(count)
        .into_iter()
        .map(|d| Tick { pos: scale.map(d), label: d.format(fmt).to_string() })
        .collect();
    AxisGuide { side, offset, span: scale.range, title: title.to_string(), ticks }
}

pub(crate) fn plain(v: f64) -> String {
    if v.fract().abs() < 1e-9 { format!("{v:.0}") } else { format!("{v}") }
}

/// Shared shape of the ranked horizontal bar charts (bar, volume, industry comparison).
pub(crate) struct HorizontalBars<'a> {
    pub x_title: &'a str,
    pub y_title: &'a str,
    pub axis_fmt: fn(f64) -> String,
    pub style: &'a dyn Fn(&AggregatedPoint) -> StyleHints,
    pub tooltip: &'a dyn Fn(&AggregatedPoint) -> String,
    pub value_label: Option<&'a dyn Fn(f64) -> String>,
    pub padding: f64,
}

impl HorizontalBars<'_> {
    pub fn emit(&self, points: &[AggregatedPoint], layout: &Layout, frame: &mut Frame) {
        let plot = layout.plot();
        let y = match build_scale(points, AxisKind::Categorical, (plot.top, plot.bottom)) {
            ScaleSpec::Band(b) => BandScale::new(b.keys, b.range, self.padding),
            _ => return,
        };
        let x = match build_scale(points, AxisKind::Numeric, (plot.left, plot.right)) {
            ScaleSpec::Linear(s) => s,
            _ => return,
        };

        frame.axes.push(linear_axis(&x, AxisSide::Top, plot.top, self.x_title, self.axis_fmt));
        frame.axes.push(band_axis(&y, AxisSide::Left, plot.left, self.y_title));

        let x0 = x.map(0.0);
        let bw = y.bandwidth();
        for (i, p) in points.iter().enumerate() {
            let top = y.position_at(i);
            let right = x.map(p.magnitude());
            let bar = Rect::from_ltrb(x0, top, right.max(x0), top + bw);
            frame.commands.push(DrawCommand::data(Shape::rect(bar), (self.style)(p), p.clone(), (self.tooltip)(p)));
            if let Some(label) = self.value_label {
                frame.commands.push(DrawCommand::label(bar.right + 5.0, top + bw * 0.5 + 4.0, label(p.magnitude()), TextAnchor::Start));
            }
        }
    }
}

pub(crate) fn si_axis(v: f64) -> String { format::si(v) }
