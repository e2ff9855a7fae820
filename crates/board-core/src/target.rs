// File: crates/board-core/src/target.rs
// Summary: Render target; owns one chart instance's view state, cached grouping and current frame.

use std::sync::Arc;

use crate::aggregate::AggregatedPoint;
use crate::charts::ChartRecipe;
use crate::controller::{FilterChange, FilterEvent, FilterField};
use crate::draw::Frame;
use crate::error::Result;
use crate::record::Record;
use crate::view::{FilterSelection, ViewState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Last frame is complete; waiting for input.
    Idle,
    Redrawing,
}

/// Counters describing the work done by one chart instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub redraws: u64,
    pub aggregations: u64,
}

struct GroupCache {
    grouping: FilterSelection,
    points: Vec<AggregatedPoint>,
}

pub struct RenderTarget {
    recipe: Box<dyn ChartRecipe>,
    records: Arc<[Record]>,
    view: ViewState,
    cache: Option<GroupCache>,
    frame: Frame,
    state: RenderState,
    stats: RenderStats,
}

impl RenderTarget {
    /// Mount a chart: compute its default view and draw the first frame.
    pub fn mount(recipe: Box<dyn ChartRecipe>, records: Arc<[Record]>) -> Self {
        let view = recipe.default_view(&records);
        let layout = recipe.layout();
        let frame = Frame::new(recipe.id(), String::new(), layout.width, layout.height);
        let mut t = Self {
            recipe,
            records,
            view,
            cache: None,
            frame,
            state: RenderState::Idle,
            stats: RenderStats::default(),
        };
        t.redraw();
        t
    }

    pub fn id(&self) -> &'static str { self.recipe.id() }
    pub fn view(&self) -> &ViewState { &self.view }
    pub fn frame(&self) -> &Frame { &self.frame }
    pub fn state(&self) -> RenderState { self.state }
    pub fn stats(&self) -> RenderStats { self.stats }
    pub fn listens_to(&self, field: FilterField) -> bool { self.recipe.listens_to(field) }

    /// Replace the view wholesale and redraw.
    pub fn update(&mut self, view: ViewState) -> &Frame {
        self.view = self.recipe.reconcile(&self.records, &self.view, view);
        self.redraw();
        &self.frame
    }

    /// Merge a filter event into a new view and redraw once. Invalid values are
    /// rejected without touching the current view or frame.
    pub fn on_filter_change(&mut self, event: &FilterEvent) -> Result<&Frame> {
        let change = event.change().map_err(|e| {
            log::warn!("{}: rejected filter event: {e}", self.recipe.id());
            e
        })?;
        Ok(self.apply_change(&change))
    }

    pub(crate) fn apply_change(&mut self, change: &FilterChange) -> &Frame {
        let next = self.view.apply(change);
        self.update(next)
    }

    /// Clear the chart; consumes the instance.
    pub fn teardown(self) -> RenderStats {
        log::debug!("{}: torn down after {} redraw(s)", self.recipe.id(), self.stats.redraws);
        self.stats
    }

    /// Full pipeline run: aggregate (or reuse the cache), select, emit. The next
    /// frame is assembled separately and swapped in once complete.
    fn redraw(&mut self) {
        self.state = RenderState::Redrawing;

        let grouping = self.recipe.grouping(&self.view);
        let stale = self.cache.as_ref().map_or(true, |c| c.grouping != grouping);
        if stale {
            let points = self.recipe.aggregate(&self.records, &self.view);
            log::debug!("{}: aggregated {} group(s) for {:?}", self.recipe.id(), points.len(), grouping);
            self.cache = Some(GroupCache { grouping, points });
            self.stats.aggregations += 1;
        }
        let points: &[AggregatedPoint] = match &self.cache {
            Some(c) => &c.points,
            None => &[],
        };
        let selected = self.recipe.select(points, &self.view);

        let layout = self.recipe.layout();
        let title = self.recipe.title(&self.records, &self.view);
        let next = if selected.is_empty() {
            let msg = self.recipe.empty_message(&self.view);
            Frame::placeholder(self.recipe.id(), title, layout.width, layout.height, &msg)
        } else {
            let mut f = Frame::new(self.recipe.id(), title, layout.width, layout.height);
            self.recipe.emit(&selected, &self.view, &mut f);
            f
        };

        log::debug!(
            "{}: frame for [{}] with {} command(s), {} data shape(s)",
            self.recipe.id(),
            self.view,
            next.commands.len(),
            next.data_shape_count()
        );
        self.frame = next;
        self.stats.redraws += 1;
        self.state = RenderState::Idle;
    }
}
