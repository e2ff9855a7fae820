// File: crates/board-core/src/draw.rs
// Summary: Renderer-agnostic draw primitives and the frame a chart hands to its renderer.

use crate::aggregate::AggregatedPoint;
use crate::geometry::{to_polar, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Donut slice; angles in radians clockwise from 12 o'clock.
    Arc { cx: f64, cy: f64, inner_radius: f64, outer_radius: f64, start_angle: f64, end_angle: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Polyline { points: Vec<(f64, f64)> },
    Text { x: f64, y: f64, text: String, anchor: TextAnchor },
    /// Stand-in for an empty selection.
    Placeholder { x: f64, y: f64, message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Line,
    Arc,
    Circle,
    Polyline,
    Text,
    Placeholder,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Arc { .. } => ShapeKind::Arc,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Polyline { .. } => ShapeKind::Polyline,
            Shape::Text { .. } => ShapeKind::Text,
            Shape::Placeholder { .. } => ShapeKind::Placeholder,
        }
    }

    pub fn rect(r: Rect) -> Shape {
        Shape::Rect { x: r.left, y: r.top, width: r.width().max(0.0), height: r.height().max(0.0) }
    }

    fn contains(&self, px: f64, py: f64) -> bool {
        match *self {
            Shape::Rect { x, y, width, height } => Rect::from_xywh(x, y, width, height).contains(px, py),
            Shape::Circle { cx, cy, r } => (px - cx).powi(2) + (py - cy).powi(2) <= r * r,
            Shape::Arc { cx, cy, inner_radius, outer_radius, start_angle, end_angle } => {
                let (r, a) = to_polar(cx, cy, px, py);
                r >= inner_radius && r <= outer_radius && a >= start_angle && a < end_angle
            }
            _ => false,
        }
    }

    /// Horizontal anchor used for nearest-x lookups.
    fn anchor_x(&self) -> Option<f64> {
        match *self {
            Shape::Rect { x, width, .. } => Some(x + width * 0.5),
            Shape::Line { x1, x2, .. } => Some((x1 + x2) * 0.5),
            Shape::Circle { cx, .. } => Some(cx),
            _ => None,
        }
    }
}

/// Semantic fill; the renderer's theme decides the actual color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillKey {
    Primary,
    /// Candle closing above its open.
    Up,
    Down,
    Wick,
    Marker,
    /// Entry of the categorical palette.
    Category(usize),
    Highlight,
    Label,
    Muted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleHints {
    pub fill: FillKey,
    pub highlighted: bool,
}

impl StyleHints {
    pub const fn fill(fill: FillKey) -> Self { Self { fill, highlighted: false } }
    pub const fn highlighted(fill: FillKey) -> Self { Self { fill, highlighted: true } }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub shape: Shape,
    pub style: StyleHints,
    /// Underlying value for tooltip lookup; `None` for decorations.
    pub payload: Option<AggregatedPoint>,
    pub tooltip: Option<String>,
}

impl DrawCommand {
    pub fn decoration(shape: Shape, style: StyleHints) -> Self {
        Self { shape, style, payload: None, tooltip: None }
    }

    pub fn data(shape: Shape, style: StyleHints, payload: AggregatedPoint, tooltip: String) -> Self {
        Self { shape, style, payload: Some(payload), tooltip: Some(tooltip) }
    }

    pub fn label(x: f64, y: f64, text: impl Into<String>, anchor: TextAnchor) -> Self {
        Self::decoration(Shape::Text { x, y, text: text.into(), anchor }, StyleHints::fill(FillKey::Label))
    }

    pub fn is_data(&self) -> bool { self.payload.is_some() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Top,
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis.
    pub pos: f64,
    pub label: String,
}

/// Axis line, ticks and title. `offset` is the pixel coordinate of the axis line
/// across its direction (y for horizontal axes, x for vertical ones).
#[derive(Clone, Debug, PartialEq)]
pub struct AxisGuide {
    pub side: AxisSide,
    pub offset: f64,
    pub span: (f64, f64),
    pub title: String,
    pub ticks: Vec<Tick>,
}

/// One complete visual state of one chart instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub chart_id: &'static str,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub axes: Vec<AxisGuide>,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(chart_id: &'static str, title: impl Into<String>, width: u32, height: u32) -> Self {
        Self { chart_id, title: title.into(), width, height, axes: Vec::new(), commands: Vec::new() }
    }

    /// Frame holding a single placeholder and nothing else.
    pub fn placeholder(chart_id: &'static str, title: impl Into<String>, width: u32, height: u32, message: &str) -> Self {
        let mut f = Self::new(chart_id, title, width, height);
        f.commands.push(DrawCommand::decoration(
            Shape::Placeholder { x: width as f64 / 2.0, y: height as f64 / 2.0, message: message.to_string() },
            StyleHints::fill(FillKey::Muted),
        ));
        f
    }

    pub fn is_placeholder(&self) -> bool {
        self.commands.iter().any(|c| c.shape.kind() == ShapeKind::Placeholder)
    }

    /// Number of commands carrying a payload.
    pub fn data_shape_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_data()).count()
    }

    pub fn data_commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.is_data())
    }

    /// Topmost data command under the pointer.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&DrawCommand> {
        self.commands.iter().rev().find(|c| c.is_data() && c.shape.contains(x, y))
    }

    /// Data command whose horizontal anchor is closest to `x`.
    pub fn nearest_x(&self, x: f64) -> Option<&DrawCommand> {
        self.data_commands()
            .filter_map(|c| c.shape.anchor_x().map(|ax| ((ax - x).abs(), c)))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, c)| c)
    }
}

/// Rendering collaborator receiving finished frames.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> anyhow::Result<()>;
}

impl FrameSink for Vec<Frame> {
    fn present(&mut self, frame: &Frame) -> anyhow::Result<()> {
        self.push(frame.clone());
        Ok(())
    }
}
