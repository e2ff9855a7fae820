// File: crates/board-core/src/charts/country.rs
// Summary: Record count per country as vertical bars.

use super::{band_axis, linear_axis, plain, ChartRecipe};
use crate::aggregate::{aggregate, by_country, AggregatedPoint, Reducer};
use crate::controller::FilterField;
use crate::draw::{AxisSide, DrawCommand, FillKey, Frame, Shape, StyleHints};
use crate::format;
use crate::geometry::Rect;
use crate::record::Record;
use crate::scale::{build_scale, AxisKind, ScaleSpec};
use crate::types::{Insets, Layout};
use crate::view::ViewState;

#[derive(Default)]
pub struct CountryChart;

impl ChartRecipe for CountryChart {
    fn id(&self) -> &'static str { "country" }

    fn title(&self, _records: &[Record], _view: &ViewState) -> String {
        "Country-wise Record Distribution".to_string()
    }

    fn layout(&self) -> Layout { Layout::new(600, 400, Insets::new(80, 30, 60, 100)) }

    /// Fixed view; only the bar chart carries a view dropdown.
    fn listens_to(&self, _field: FilterField) -> bool { false }

    fn default_view(&self, _records: &[Record]) -> ViewState { ViewState::all() }

    fn aggregate(&self, records: &[Record], _view: &ViewState) -> Vec<AggregatedPoint> {
        aggregate(records, by_country, Reducer::Count)
    }

    fn emit(&self, points: &[AggregatedPoint], _view: &ViewState, frame: &mut Frame) {
        let plot = self.layout().plot();
        let (ScaleSpec::Band(x), ScaleSpec::Linear(y)) = (
            build_scale(points, AxisKind::Categorical, (plot.left, plot.right)),
            build_scale(points, AxisKind::Numeric, (plot.bottom, plot.top)),
        ) else {
            return;
        };

        frame.axes.push(band_axis(&x, AxisSide::Bottom, plot.bottom, "Country"));
        frame.axes.push(linear_axis(&y, AxisSide::Left, plot.left, "Number of Records", plain));

        let bw = x.bandwidth();
        let base = y.map(0.0);
        for (i, p) in points.iter().enumerate() {
            let left = x.position_at(i);
            let top = y.map(p.magnitude()).min(base);
            let bar = Rect::from_ltrb(left, top, left + bw, base);
            let tip = format!("{}\nRecords: {}", p.key, format::thousands(p.magnitude()));
            frame.commands.push(DrawCommand::data(Shape::rect(bar), StyleHints::fill(FillKey::Primary), p.clone(), tip));
        }
    }
}
