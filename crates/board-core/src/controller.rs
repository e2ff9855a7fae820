// File: crates/board-core/src/controller.rs
// Summary: Filter events from UI widgets and the dashboard that routes them to chart instances.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::charts::{default_recipes, ChartRecipe};
use crate::draw::FrameSink;
use crate::error::{ChartError, Result};
use crate::filters::parse_month;
use crate::kpi::Kpis;
use crate::record::Record;
use crate::target::RenderTarget;
use crate::view::{parse_view_label, ViewMode, ViewState};

/// Dimension a filter widget selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Brand,
    Year,
    Month,
    ViewMode,
    Industry,
}

impl FilterField {
    pub fn name(self) -> &'static str {
        match self {
            FilterField::Brand => "brand",
            FilterField::Year => "year",
            FilterField::Month => "month",
            FilterField::ViewMode => "view",
            FilterField::Industry => "industry",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for FilterField {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brand" => Ok(FilterField::Brand),
            "year" => Ok(FilterField::Year),
            "month" => Ok(FilterField::Month),
            "view" | "view-mode" | "viewmode" | "mode" => Ok(FilterField::ViewMode),
            "industry" => Ok(FilterField::Industry),
            other => Err(ChartError::UnknownField(other.to_string())),
        }
    }
}

/// `filterChanged` event: which widget changed and its new value, verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterEvent {
    pub field: FilterField,
    pub value: String,
}

impl FilterEvent {
    pub fn new(field: FilterField, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }

    pub fn brand(value: impl Into<String>) -> Self { Self::new(FilterField::Brand, value) }
    pub fn year(value: impl Into<String>) -> Self { Self::new(FilterField::Year, value) }
    pub fn month(value: impl Into<String>) -> Self { Self::new(FilterField::Month, value) }
    pub fn view(value: impl Into<String>) -> Self { Self::new(FilterField::ViewMode, value) }
    pub fn industry(value: impl Into<String>) -> Self { Self::new(FilterField::Industry, value) }

    /// Build from the untyped `{field, value}` payload.
    pub fn parse(field: &str, value: impl Into<String>) -> Result<Self> {
        Ok(Self::new(field.parse()?, value))
    }

    /// Typed change carried by this event.
    pub fn change(&self) -> Result<FilterChange> {
        let v = self.value.trim();
        let invalid = || ChartError::InvalidFilterValue { field: self.field.name(), value: self.value.clone() };
        let all_or = |s: &str| if s.is_empty() || s.eq_ignore_ascii_case("all") { None } else { Some(s.to_string()) };
        match self.field {
            FilterField::Brand => Ok(FilterChange::Brand(all_or(v))),
            FilterField::Industry => Ok(FilterChange::Industry(all_or(v))),
            FilterField::Year => v.parse::<i32>().map(FilterChange::Year).map_err(|_| invalid()),
            FilterField::Month => {
                if v.eq_ignore_ascii_case("no data") {
                    Ok(FilterChange::Month(None))
                } else {
                    parse_month(v).map(|m| FilterChange::Month(Some(m))).ok_or_else(invalid)
                }
            }
            FilterField::ViewMode => parse_view_label(v).map(|(mode, n)| FilterChange::View { mode, n }).ok_or_else(invalid),
        }
    }
}

/// Validated filter change. `None` clears a selection ("All").
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterChange {
    Brand(Option<String>),
    Industry(Option<String>),
    Year(i32),
    Month(Option<u32>),
    View { mode: ViewMode, n: u32 },
}

/// Every chart instance of one page, sharing the loaded records.
pub struct Dashboard {
    records: Arc<[Record]>,
    charts: Vec<RenderTarget>,
}

impl Dashboard {
    pub fn new(records: impl Into<Arc<[Record]>>) -> Self {
        Self { records: records.into(), charts: Vec::new() }
    }

    /// Dashboard with all eight charts mounted at their default views.
    pub fn with_default_charts(records: impl Into<Arc<[Record]>>) -> Self {
        let mut d = Self::new(records);
        for recipe in default_recipes() {
            d.mount(recipe);
        }
        d
    }

    pub fn mount(&mut self, recipe: Box<dyn ChartRecipe>) -> &RenderTarget {
        let idx = self.charts.len();
        self.charts.push(RenderTarget::mount(recipe, Arc::clone(&self.records)));
        &self.charts[idx]
    }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn charts(&self) -> &[RenderTarget] { &self.charts }

    pub fn chart(&self, id: &str) -> Result<&RenderTarget> {
        self.index_of(id).map(|idx| &self.charts[idx])
    }

    /// Remove a chart instance; its state is dropped with it.
    pub fn unmount(&mut self, id: &str) -> Result<()> {
        let idx = self.index_of(id)?;
        self.charts.remove(idx).teardown();
        Ok(())
    }

    pub fn kpis(&self) -> Kpis { Kpis::compute(self.records.iter()) }

    /// Hand every current frame to `sink`.
    pub fn present_all(&self, sink: &mut dyn FrameSink) -> anyhow::Result<()> {
        for c in &self.charts {
            sink.present(c.frame())?;
        }
        Ok(())
    }

    /// Route `event` to every chart listening on its field; each of them redraws
    /// once and its new frame goes to `sink`. Returns the number of redrawn charts.
    /// An invalid value is rejected before any chart changes.
    pub fn dispatch(&mut self, event: &FilterEvent, sink: &mut dyn FrameSink) -> anyhow::Result<usize> {
        self.route(event, None, sink)
    }

    /// Like [`Dashboard::dispatch`], but only chart `id` may react.
    pub fn dispatch_to(&mut self, id: &str, event: &FilterEvent, sink: &mut dyn FrameSink) -> anyhow::Result<usize> {
        self.chart(id)?;
        self.route(event, Some(id), sink)
    }

    /// Replace the view of chart `id` and present its new frame.
    pub fn update(&mut self, id: &str, view: ViewState, sink: &mut dyn FrameSink) -> anyhow::Result<()> {
        let idx = self.index_of(id)?;
        let frame = self.charts[idx].update(view);
        sink.present(frame)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.charts.iter().position(|c| c.id() == id).ok_or_else(|| ChartError::UnknownChart(id.to_string()))
    }

    /// Every receiving chart is updated before any frame is presented, so a
    /// failing sink cannot leave the page half applied.
    fn route(&mut self, event: &FilterEvent, only: Option<&str>, sink: &mut dyn FrameSink) -> anyhow::Result<usize> {
        let change = event.change().map_err(|e| {
            log::warn!("rejected filter event: {e}");
            e
        })?;
        let mut redrawn = Vec::new();
        for (idx, c) in self.charts.iter_mut().enumerate() {
            if only.map_or(true, |id| c.id() == id) && c.listens_to(event.field) {
                c.apply_change(&change);
                redrawn.push(idx);
            }
        }
        log::debug!("dispatch {}={:?}: {} chart(s) redrawn", event.field, event.value, redrawn.len());
        for &idx in &redrawn {
            sink.present(self.charts[idx].frame())?;
        }
        Ok(redrawn.len())
    }
}
