// File: crates/board-core/src/charts/industry.rs
// Summary: Selected brand against its strongest industry peers by average close.

use super::{plain, ChartRecipe, HorizontalBars};
use crate::aggregate::{aggregate, by_brand, AggregatedPoint, GroupKey, Reducer};
use crate::controller::FilterField;
use crate::draw::{FillKey, Frame, StyleHints};
use crate::filters;
use crate::format;
use crate::record::{Field, Record};
use crate::transform::ranked_with_pinned;
use crate::types::{Insets, Layout};
use crate::view::{FilterSelection, ViewState};

pub struct IndustryComparisonChart {
    /// Peers shown next to the selected brand.
    pub peers: usize,
}

impl Default for IndustryComparisonChart {
    fn default() -> Self { Self { peers: 5 } }
}

fn two_decimals(v: f64) -> String { format!("{v:.2}") }

fn industry_of<'a>(records: &'a [Record], brand: &str) -> Option<&'a str> {
    records.iter().find(|r| r.brand_name == brand).map(|r| r.industry_tag.as_str())
}

impl ChartRecipe for IndustryComparisonChart {
    fn id(&self) -> &'static str { "industry" }

    fn title(&self, records: &[Record], view: &ViewState) -> String {
        match view.filter.brand.as_deref().and_then(|b| industry_of(records, b)) {
            Some(industry) => format!("Industry Comparison: {industry}"),
            None => "Industry Comparison".to_string(),
        }
    }

    fn layout(&self) -> Layout { Layout::new(600, 400, Insets::new(130, 30, 70, 80)) }

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
        let Some(industry) = view.filter.brand.as_deref().and_then(|b| industry_of(records, b)) else {
            return Vec::new();
        };
        let peers = records.iter().filter(|r| r.industry_tag == industry);
        aggregate(peers, by_brand, Reducer::Mean(Field::Close))
    }

    fn select(&self, points: &[AggregatedPoint], view: &ViewState) -> Vec<AggregatedPoint> {
        match &view.filter.brand {
            Some(b) => ranked_with_pinned(points, self.peers, &GroupKey::label(b.as_str())),
            None => Vec::new(),
        }
    }

    fn empty_message(&self, view: &ViewState) -> String {
        match &view.filter.brand {
            Some(b) => format!("No data available for {b}"),
            None => "Select a brand to compare its industry".to_string(),
        }
    }

    fn emit(&self, points: &[AggregatedPoint], view: &ViewState, frame: &mut Frame) {
        let selected = view.filter.brand.as_deref().map(GroupKey::label);
        let style = |p: &AggregatedPoint| {
            if Some(&p.key) == selected.as_ref() {
                StyleHints::highlighted(FillKey::Highlight)
            } else {
                StyleHints::fill(FillKey::Primary)
            }
        };
        HorizontalBars {
            x_title: "Average Close Price (USD)",
            y_title: "Brand",
            axis_fmt: plain,
            style: &style,
            tooltip: &|p| format!("{}\nAvg Close: {}", p.key, format::currency(p.magnitude())),
            value_label: Some(&two_decimals as &dyn Fn(f64) -> String),
            padding: 0.3,
        }
        .emit(points, &self.layout(), frame);
    }
}
