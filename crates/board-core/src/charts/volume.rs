// File: crates/board-core/src/charts/volume.rs
// Summary: Total traded volume by brand, Top 10 by default, with SI value labels.

use super::{si_axis, ChartRecipe, HorizontalBars};
use crate::aggregate::{aggregate, by_brand, AggregatedPoint, Reducer};
use crate::controller::FilterField;
use crate::draw::{FillKey, Frame, StyleHints};
use crate::format;
use crate::record::{Field, Record};
use crate::types::{Insets, Layout};
use crate::view::ViewState;

pub struct VolumeChart {
    pub default_n: u32,
}

impl Default for VolumeChart {
    fn default() -> Self { Self { default_n: 10 } }
}

impl ChartRecipe for VolumeChart {
    fn id(&self) -> &'static str { "volume" }

    fn title(&self, _records: &[Record], _view: &ViewState) -> String {
        "Total Trade Volume by Brand".to_string()
    }

    fn layout(&self) -> Layout { Layout::new(600, 420, Insets::new(150, 30, 60, 80)) }

    /// Fixed view; only the bar chart carries a view dropdown.
    fn listens_to(&self, _field: FilterField) -> bool { false }

    fn default_view(&self, _records: &[Record]) -> ViewState { ViewState::top(self.default_n) }

    fn aggregate(&self, records: &[Record], _view: &ViewState) -> Vec<AggregatedPoint> {
        aggregate(records, by_brand, Reducer::Sum(Field::Volume))
    }

    fn emit(&self, points: &[AggregatedPoint], _view: &ViewState, frame: &mut Frame) {
        HorizontalBars {
            x_title: "Total Volume (Units)",
            y_title: "Brand",
            axis_fmt: si_axis,
            style: &|_| StyleHints::fill(FillKey::Primary),
            tooltip: &|p| format!("{}\nVolume: {}", p.key, format::grouped(p.magnitude())),
            value_label: Some(&format::si as &dyn Fn(f64) -> String),
            padding: 0.2,
        }
        .emit(points, &self.layout(), frame);
    }
}
