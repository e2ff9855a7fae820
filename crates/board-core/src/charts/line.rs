// File: crates/board-core/src/charts/line.rs
// Summary: Closing price over time for one brand, downsampled for long histories.

use super::{linear_axis, plain, time_axis, ChartRecipe};
use crate::aggregate::{aggregate_dated, AggregatedPoint, Reducer};
use crate::controller::FilterField;
use crate::downsample::lttb_indices;
use crate::draw::{AxisSide, DrawCommand, FillKey, Frame, Shape, StyleHints};
use crate::filters;
use crate::format;
use crate::record::{Field, Record};
use crate::scale::{build_scale, AxisKind, ScaleSpec};
use crate::transform::chronological;
use crate::types::{Insets, Layout};
use crate::view::{FilterSelection, ViewState};

pub struct LineChart {
    /// Point budget; longer series are reduced with LTTB.
    pub max_points: usize,
    pub marker_radius: f64,
}

impl Default for LineChart {
    fn default() -> Self { Self { max_points: 1500, marker_radius: 3.0 } }
}

impl LineChart {
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points.max(2);
        self
    }
}

impl ChartRecipe for LineChart {
    fn id(&self) -> &'static str { "line" }

    fn title(&self, _records: &[Record], view: &ViewState) -> String {
        match &view.filter.brand {
            Some(b) => format!("Closing Price Over Time – {b}"),
            None => "Closing Price Over Time".to_string(),
        }
    }

    fn layout(&self) -> Layout { Layout::new(600, 400, Insets::new(80, 30, 50, 90)) }

    fn listens_to(&self, field: FilterField) -> bool { field == FilterField::Brand }

    fn default_view(&self, records: &[Record]) -> ViewState {
        let view = ViewState::all();
        match filters::brands(records).into_iter().next() {
            Some(b) => view.with_brand(b),
            None => view,
        }
    }

    fn grouping(&self, view: &ViewState) -> FilterSelection {
        FilterSelection { brand: view.filter.brand.clone(), ..FilterSelection::default() }
    }

    fn aggregate(&self, records: &[Record], view: &ViewState) -> Vec<AggregatedPoint> {
        let Some(brand) = view.filter.brand.as_deref() else { return Vec::new() };
        let rows = records.iter().filter(|r| r.brand_name == brand && r.close.is_finite());
        aggregate_dated(rows, Reducer::Mean(Field::Close))
    }

    fn select(&self, points: &[AggregatedPoint], _view: &ViewState) -> Vec<AggregatedPoint> {
        let ordered = chronological(points);
        if ordered.len() <= self.max_points {
            return ordered;
        }
        let xy: Vec<(f64, f64)> = ordered.iter().enumerate().map(|(i, p)| (i as f64, p.magnitude())).collect();
        lttb_indices(&xy, self.max_points).into_iter().map(|i| ordered[i].clone()).collect()
    }

    fn empty_message(&self, view: &ViewState) -> String {
        match &view.filter.brand {
            Some(b) => format!("No closing prices for {b}"),
            None => "Select a brand".to_string(),
        }
    }

    fn emit(&self, points: &[AggregatedPoint], _view: &ViewState, frame: &mut Frame) {
        let plot = self.layout().plot();
        let (ScaleSpec::Time(x), ScaleSpec::Linear(y)) = (
            build_scale(points, AxisKind::Time, (plot.left, plot.right)),
            build_scale(points, AxisKind::Numeric, (plot.bottom, plot.top)),
        ) else {
            return;
        };

        frame.axes.push(time_axis(&x, AxisSide::Bottom, plot.bottom, "Date", 6, "%Y-%m"));
        frame.axes.push(linear_axis(&y, AxisSide::Left, plot.left, "Price", plain));

        let path: Vec<(f64, f64)> = points
            .iter()
            .filter_map(|p| p.key.as_day().map(|d| (x.map(d), y.map(p.magnitude()))))
            .collect();
        frame.commands.push(DrawCommand::decoration(Shape::Polyline { points: path.clone() }, StyleHints::fill(FillKey::Primary)));

        // Hover targets: one marker per point, looked up by nearest x.
        for (p, &(cx, cy)) in points.iter().zip(&path) {
            frame.commands.push(DrawCommand::data(
                Shape::Circle { cx, cy, r: self.marker_radius },
                StyleHints::fill(FillKey::Marker),
                p.clone(),
                format::currency(p.magnitude()),
            ));
        }
    }
}
