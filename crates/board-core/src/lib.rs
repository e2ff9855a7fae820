// File: crates/board-core/src/lib.rs
// Summary: Core library entry point; exports the dashboard pipeline (aggregate, transform, scale, render target).

pub mod aggregate;
pub mod charts;
pub mod controller;
pub mod downsample;
pub mod draw;
pub mod error;
pub mod filters;
pub mod format;
pub mod geometry;
pub mod kpi;
pub mod layout;
pub mod record;
pub mod scale;
pub mod source;
pub mod target;
pub mod transform;
pub mod types;
pub mod view;

pub use aggregate::{aggregate, AggregatedPoint, GroupKey, Ohlc, PointValue, Reducer};
pub use charts::{default_recipes, ChartRecipe};
pub use controller::{Dashboard, FilterChange, FilterEvent, FilterField};
pub use downsample::lttb_indices;
pub use draw::{DrawCommand, FillKey, Frame, FrameSink, Shape, StyleHints};
pub use error::{ChartError, Result};
pub use kpi::{KpiCard, Kpis};
pub use record::{Field, Record};
pub use scale::{build_scale, AxisKind, BandScale, LinearScale, ScaleKind, ScaleSpec, TimeScale};
pub use source::{load_csv, read_csv};
pub use target::{RenderState, RenderStats, RenderTarget};
pub use transform::transform;
pub use types::{Insets, Layout};
pub use view::{FilterSelection, ViewMode, ViewState};
