// File: crates/board-core/src/charts/treemap.rs
// Summary: Traded volume by brand as a squarified treemap; the selected brand is highlighted.

use super::ChartRecipe;
use crate::aggregate::{aggregate, by_brand, AggregatedPoint, Reducer};
use crate::controller::FilterField;
use crate::draw::{DrawCommand, FillKey, Frame, Shape, StyleHints, TextAnchor};
use crate::format;
use crate::layout::treemap;
use crate::record::{Field, Record};
use crate::transform::rank_descending;
use crate::types::{Insets, Layout};
use crate::view::ViewState;

pub struct TreemapChart {
    pub padding: f64,
    /// Longest brand name printed inside a cell before it is cut with "...".
    pub max_label_chars: usize,
}

impl Default for TreemapChart {
    fn default() -> Self { Self { padding: 2.0, max_label_chars: 10 } }
}

fn shorten(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let head: String = name.chars().take(max).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

impl ChartRecipe for TreemapChart {
    fn id(&self) -> &'static str { "treemap" }

    fn title(&self, _records: &[Record], _view: &ViewState) -> String { "Volume by Brand".to_string() }

    fn layout(&self) -> Layout { Layout::new(1000, 440, Insets::new(20, 20, 20, 20)) }

    fn listens_to(&self, field: FilterField) -> bool { field == FilterField::Brand }

    fn default_view(&self, _records: &[Record]) -> ViewState { ViewState::all() }

    fn aggregate(&self, records: &[Record], _view: &ViewState) -> Vec<AggregatedPoint> {
        aggregate(records.iter().filter(|r| r.volume.is_finite()), by_brand, Reducer::Sum(Field::Volume))
    }

    fn select(&self, points: &[AggregatedPoint], _view: &ViewState) -> Vec<AggregatedPoint> {
        rank_descending(points)
    }

    fn emit(&self, points: &[AggregatedPoint], view: &ViewState, frame: &mut Frame) {
        let plot = self.layout().plot();
        let values: Vec<f64> = points.iter().map(AggregatedPoint::magnitude).collect();
        let cells = treemap(&values, plot, self.padding, true);
        let selected = view.filter.brand.as_deref();

        for (i, (p, cell)) in points.iter().zip(&cells).enumerate() {
            let style = if p.key.as_label().is_some() && p.key.as_label() == selected {
                StyleHints::highlighted(FillKey::Highlight)
            } else {
                StyleHints::fill(FillKey::Category(i))
            };
            let tip = format!("{}\nVolume: {}", p.key, format::grouped(p.magnitude()));
            frame.commands.push(DrawCommand::data(Shape::rect(*cell), style, p.clone(), tip));
        }
        for (p, cell) in points.iter().zip(&cells) {
            if cell.width() > 40.0 && cell.height() > 20.0 {
                let (x, y) = cell.center();
                frame.commands.push(DrawCommand::label(x, y + 4.0, shorten(&p.key.to_string(), self.max_label_chars), TextAnchor::Middle));
            }
        }
    }
}
