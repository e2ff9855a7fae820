// File: crates/board-core/src/charts/bar.rs
// Summary: Average close price by industry, ranked, with a Top/Bottom/All view selector.

use super::{plain, ChartRecipe, HorizontalBars};
use crate::aggregate::{aggregate, by_industry, AggregatedPoint, Reducer};
use crate::controller::FilterField;
use crate::draw::{FillKey, Frame, StyleHints};
use crate::format;
use crate::record::{Field, Record};
use crate::types::{Insets, Layout};
use crate::view::ViewState;

pub struct BarChart {
    pub default_n: u32,
}

impl Default for BarChart {
    fn default() -> Self { Self { default_n: 10 } }
}

impl ChartRecipe for BarChart {
    fn id(&self) -> &'static str { "bar" }

    fn title(&self, _records: &[Record], _view: &ViewState) -> String {
        "Average Close Price by Industry".to_string()
    }

    fn layout(&self) -> Layout { Layout::new(600, 400, Insets::new(180, 30, 60, 60)) }

    fn listens_to(&self, field: FilterField) -> bool { field == FilterField::ViewMode }

    fn default_view(&self, _records: &[Record]) -> ViewState { ViewState::top(self.default_n) }

    fn aggregate(&self, records: &[Record], _view: &ViewState) -> Vec<AggregatedPoint> {
        aggregate(records, by_industry, Reducer::Mean(Field::Close))
    }

    fn emit(&self, points: &[AggregatedPoint], _view: &ViewState, frame: &mut Frame) {
        HorizontalBars {
            x_title: "Average Close Price (USD)",
            y_title: "Industry",
            axis_fmt: plain,
            style: &|_| StyleHints::fill(FillKey::Primary),
            tooltip: &|p| format!("{}\nAvg Close: {}", p.key, format::currency(p.magnitude())),
            value_label: None,
            padding: 0.2,
        }
        .emit(points, &self.layout(), frame);
    }
}
