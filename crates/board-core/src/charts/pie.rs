// File: crates/board-core/src/charts/pie.rs
// Summary: Industry share of records as a donut: top industries plus "Other", with a legend.

use super::ChartRecipe;
use crate::aggregate::{aggregate, by_industry, AggregatedPoint, Reducer};
use crate::controller::FilterField;
use crate::draw::{DrawCommand, FillKey, Frame, Shape, StyleHints, TextAnchor};
use crate::format;
use crate::geometry::{polar, Rect};
use crate::layout::pie_angles;
use crate::record::Record;
use crate::transform::{total, with_other};
use crate::types::{Insets, Layout};
use crate::view::ViewState;

pub struct PieChart {
    /// Industries shown individually; the rest fold into "Other".
    pub keep: usize,
    pub inner_radius: f64,
}

impl Default for PieChart {
    fn default() -> Self { Self { keep: 10, inner_radius: 40.0 } }
}

impl PieChart {
    const CHART_W: f64 = 460.0;
    const CHART_H: f64 = 360.0;

    fn center(&self) -> (f64, f64) { (Self::CHART_W / 2.0 - 20.0, Self::CHART_H / 2.0 + 10.0) }

    fn radius(&self) -> f64 { Self::CHART_W.min(Self::CHART_H) / 2.0 - 30.0 }
}

impl ChartRecipe for PieChart {
    fn id(&self) -> &'static str { "pie" }

    fn title(&self, _records: &[Record], _view: &ViewState) -> String {
        "Industry Tag Distribution".to_string()
    }

    fn layout(&self) -> Layout {
        Layout::new(Self::CHART_W as u32 + 150, Self::CHART_H as u32 + 50, Insets::new(0, 0, 30, 0))
    }

    fn listens_to(&self, field: FilterField) -> bool {
        matches!(field, FilterField::Brand | FilterField::Industry)
    }

    fn default_view(&self, _records: &[Record]) -> ViewState { ViewState::all() }

    fn aggregate(&self, records: &[Record], _view: &ViewState) -> Vec<AggregatedPoint> {
        aggregate(records, by_industry, Reducer::Count)
    }

    fn select(&self, points: &[AggregatedPoint], _view: &ViewState) -> Vec<AggregatedPoint> {
        with_other(points, self.keep, "Other")
    }

    /// A brand selection highlights that brand's industry; clearing the brand clears it.
    fn reconcile(&self, records: &[Record], prev: &ViewState, mut next: ViewState) -> ViewState {
        if next.filter.brand != prev.filter.brand {
            next.filter.industry = next
                .filter
                .brand
                .as_deref()
                .and_then(|b| records.iter().find(|r| r.brand_name == b))
                .map(|r| r.industry_tag.clone());
        }
        next
    }

    fn emit(&self, points: &[AggregatedPoint], view: &ViewState, frame: &mut Frame) {
        let (cx, cy) = self.center();
        let radius = self.radius();
        let label_r = (radius / 2.0 + (radius - 10.0)) / 2.0;
        let sum = total(points);
        let highlight = view.filter.industry.as_deref();

        let styles: Vec<StyleHints> = points
            .iter()
            .enumerate()
            .map(|(i, p)| match highlight {
                Some(h) if p.key.as_label() == Some(h) => StyleHints::highlighted(FillKey::Highlight),
                _ => StyleHints::fill(FillKey::Category(i)),
            })
            .collect();

        let angles = pie_angles(&points.iter().map(AggregatedPoint::magnitude).collect::<Vec<_>>());
        for ((p, &(a0, a1)), style) in points.iter().zip(&angles).zip(&styles) {
            let share = if sum > 0.0 { p.magnitude() / sum } else { 0.0 };
            let arc = Shape::Arc { cx, cy, inner_radius: self.inner_radius, outer_radius: radius, start_angle: a0, end_angle: a1 };
            frame.commands.push(DrawCommand::data(arc, *style, p.clone(), format!("{}\n{}", p.key, format::percent(share))));
        }
        for (p, &(a0, a1)) in points.iter().zip(&angles) {
            let share = if sum > 0.0 { p.magnitude() / sum } else { 0.0 };
            let (lx, ly) = polar(cx, cy, label_r, (a0 + a1) / 2.0);
            frame.commands.push(DrawCommand::label(lx, ly + 4.0, format::percent(share), TextAnchor::Middle));
        }

        // Legend, vertically centered beside the donut.
        let lx = Self::CHART_W - 25.0;
        let ly = (Self::CHART_H - points.len() as f64 * 20.0) / 2.0 + 20.0;
        for (i, (p, style)) in points.iter().zip(&styles).enumerate() {
            let y = ly + i as f64 * 20.0;
            frame.commands.push(DrawCommand::decoration(Shape::rect(Rect::from_xywh(lx, y, 12.0, 12.0)), *style));
            frame.commands.push(DrawCommand::label(lx + 18.0, y + 10.0, p.key.to_string(), TextAnchor::Start));
        }
    }
}
