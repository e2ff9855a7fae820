// File: crates/board-core/src/charts/candlestick.rs
// Summary: Daily OHLC candles of one brand for a selected year and month.

use super::{linear_axis, plain, time_axis, ChartRecipe};
use crate::aggregate::{aggregate_dated, AggregatedPoint, Reducer};
use crate::controller::FilterField;
use crate::draw::{AxisSide, DrawCommand, FillKey, Frame, Shape, StyleHints};
use crate::filters::{self, month_name};
use crate::geometry::Rect;
use crate::record::Record;
use crate::scale::{build_extent_scale, TimeScale};
use crate::transform::chronological;
use crate::types::{Insets, Layout};
use crate::view::{FilterSelection, ViewState};

pub struct CandlestickChart {
    /// Body width as a fraction of the per-candle slot.
    pub body_ratio: f64,
}

impl Default for CandlestickChart {
    fn default() -> Self { Self { body_ratio: 0.7 } }
}

fn in_selection(r: &Record, brand: &str, f: &FilterSelection) -> bool {
    r.brand_name == brand
        && f.year.map_or(true, |y| r.year() == Some(y))
        && f.month.map_or(true, |m| r.month() == Some(m))
}

impl ChartRecipe for CandlestickChart {
    fn id(&self) -> &'static str { "candlestick" }

    fn title(&self, _records: &[Record], view: &ViewState) -> String {
        format!("Candlestick Chart – {} OHLC", view.filter.brand.as_deref().unwrap_or(filters::ALL))
    }

    fn layout(&self) -> Layout { Layout::new(700, 380, Insets::new(80, 80, 30, 120)) }

    fn listens_to(&self, field: FilterField) -> bool {
        matches!(field, FilterField::Brand | FilterField::Year | FilterField::Month)
    }

    /// First brand, earliest year, first month with data in that year.
    fn default_view(&self, records: &[Record]) -> ViewState {
        let year = filters::years(records).first().copied();
        let month = year.and_then(|y| filters::months_for_year(records, y).first().copied());
        ViewState::all().with_filter(FilterSelection {
            brand: filters::brands(records).into_iter().next(),
            year,
            month,
            industry: None,
        })
    }

    fn grouping(&self, view: &ViewState) -> FilterSelection {
        FilterSelection { industry: None, ..view.filter.clone() }
    }

    /// A new year resets the month to the first month that has data in it.
    fn reconcile(&self, records: &[Record], prev: &ViewState, mut next: ViewState) -> ViewState {
        if next.filter.year != prev.filter.year {
            next.filter.month = next.filter.year.and_then(|y| filters::months_for_year(records, y).first().copied());
        }
        next
    }

    /// Candles never mix brands: without a selected brand there is nothing to draw.
    fn aggregate(&self, records: &[Record], view: &ViewState) -> Vec<AggregatedPoint> {
        let Some(brand) = view.filter.brand.as_deref() else { return Vec::new() };
        aggregate_dated(records.iter().filter(|r| in_selection(r, brand, &view.filter)), Reducer::Ohlc)
    }

    fn select(&self, points: &[AggregatedPoint], _view: &ViewState) -> Vec<AggregatedPoint> {
        chronological(points)
    }

    fn empty_message(&self, view: &ViewState) -> String {
        match view.filter.brand {
            Some(_) => "No data available for selected year and month".to_string(),
            None => "Select a brand".to_string(),
        }
    }

    fn emit(&self, points: &[AggregatedPoint], view: &ViewState, frame: &mut Frame) {
        let plot = self.layout().plot();
        let n = points.len().max(1) as f64;
        let slot = (plot.width() / n).max(3.0);
        let body = slot * self.body_ratio;
        let half = body * 0.5;

        let days: Vec<_> = points.iter().filter_map(|p| p.key.as_day()).collect();
        let (Some(&first), Some(&last)) = (days.iter().min(), days.iter().max()) else { return; };
        let x = TimeScale::new((first, last), (plot.left + half, (plot.right - half).max(plot.left + half)));
        let y = build_extent_scale(points, (plot.bottom, plot.top));

        let month_title = view.filter.month.and_then(month_name).unwrap_or("Date");
        frame.axes.push(time_axis(&x, AxisSide::Bottom, plot.bottom, month_title, 10, "%d"));
        frame.axes.push(linear_axis(&y, AxisSide::Left, plot.left, "Price", plain));

        for p in points {
            let (Some(day), Some(c)) = (p.key.as_day(), p.ohlc()) else { continue };
            let cx = x.map(day);
            frame.commands.push(DrawCommand::decoration(
                Shape::Line { x1: cx, y1: y.map(c.high), x2: cx, y2: y.map(c.low) },
                StyleHints::fill(FillKey::Wick),
            ));
            let top = y.map(c.open.max(c.close));
            let height = (y.map(c.open) - y.map(c.close)).abs().max(1.0);
            let fill = if c.is_up() { FillKey::Up } else { FillKey::Down };
            let tip = format!(
                "{}\nOpen: {:.1}\nHigh: {:.1}\nLow: {:.1}\nClose: {:.1}",
                day.format("%Y-%m-%d"),
                c.open,
                c.high,
                c.low,
                c.close
            );
            frame.commands.push(DrawCommand::data(
                Shape::rect(Rect::from_xywh(cx - half, top, body, height)),
                StyleHints::fill(fill),
                p.clone(),
                tip,
            ));
        }
    }
}
