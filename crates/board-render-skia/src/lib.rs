// File: crates/board-render-skia/src/lib.rs
// Summary: Headless frame rendering using Skia CPU raster surfaces, plus PNG/SVG frame sinks.

pub mod svg;
pub mod theme;

use std::path::{Path, PathBuf};

use anyhow::Result;
use board_core::draw::{AxisGuide, AxisSide, TextAnchor};
use board_core::{DrawCommand, Frame, FrameSink, Shape};
use skia_safe as skia;

pub use svg::{frame_to_svg, SvgSink};
pub use theme::Theme;

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 6.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Titles, tick labels and text commands. Off for pixel-exact tests.
    pub draw_labels: bool,
    /// Device pixels per frame unit.
    pub scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::dark(), draw_labels: true, scale: 1.0 }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

pub struct SkiaRenderer {
    pub options: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(options: RenderOptions) -> Self { Self { options } }

    fn device_size(&self, frame: &Frame) -> (i32, i32) {
        let s = self.options.scale.max(0.1);
        ((frame.width as f32 * s).round().max(1.0) as i32, (frame.height as f32 * s).round().max(1.0) as i32)
    }

    fn paint_surface(&self, frame: &Frame) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul(self.device_size(frame))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.options.theme.background);
        canvas.scale((self.options.scale, self.options.scale));
        self.draw_frame(canvas, frame);
        Ok(surface)
    }

    /// Encode `frame` as PNG bytes.
    pub fn render_png_bytes(&self, frame: &Frame) -> Result<Vec<u8>> {
        let mut surface = self.paint_surface(frame)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels: `(pixels, width, height, stride)`.
    pub fn render_rgba8(&self, frame: &Frame) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.paint_surface(frame)?;
        let (w, h) = self.device_size(frame);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed for {}", frame.chart_id);
        }
        Ok((px, w as u32, h as u32, stride))
    }

    pub fn render_to_png(&self, frame: &Frame, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_png_bytes(frame)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_frame(&self, canvas: &skia::Canvas, frame: &Frame) {
        let theme = &self.options.theme;
        draw_grid(canvas, frame, theme);
        for axis in &frame.axes {
            self.draw_axis(canvas, axis);
        }
        for cmd in &frame.commands {
            self.draw_command(canvas, cmd);
        }
        if self.options.draw_labels && !frame.title.is_empty() {
            let x = frame.width as f32 / 2.0;
            draw_text(canvas, &frame.title, x, TITLE_SIZE + 6.0, TITLE_SIZE, theme.title, TextAnchor::Middle);
        }
    }

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &AxisGuide) {
        let theme = &self.options.theme;
        let paint = stroke(theme.axis_line, 1.0);
        let off = axis.offset as f32;
        let (a, b) = (axis.span.0 as f32, axis.span.1 as f32);
        let labels = self.options.draw_labels;

        match axis.side {
            AxisSide::Top | AxisSide::Bottom => {
                let dir = if axis.side == AxisSide::Top { -1.0 } else { 1.0 };
                canvas.draw_line((a, off), (b, off), &paint);
                for t in &axis.ticks {
                    let x = t.pos as f32;
                    canvas.draw_line((x, off), (x, off + dir * TICK_LEN), &paint);
                    if labels {
                        let y = if dir > 0.0 { off + TICK_LEN + LABEL_SIZE + 2.0 } else { off - TICK_LEN - 4.0 };
                        draw_text(canvas, &t.label, x, y, LABEL_SIZE, theme.axis_label, TextAnchor::Middle);
                    }
                }
                if labels && !axis.title.is_empty() {
                    let y = if dir > 0.0 { off + 44.0 } else { off - 30.0 };
                    draw_text(canvas, &axis.title, (a + b) / 2.0, y, LABEL_SIZE + 1.0, theme.axis_label, TextAnchor::Middle);
                }
            }
            AxisSide::Left => {
                canvas.draw_line((off, a), (off, b), &paint);
                for t in &axis.ticks {
                    let y = t.pos as f32;
                    canvas.draw_line((off - TICK_LEN, y), (off, y), &paint);
                    if labels {
                        draw_text(canvas, &t.label, off - TICK_LEN - 3.0, y + 4.0, LABEL_SIZE, theme.axis_label, TextAnchor::End);
                    }
                }
                if labels && !axis.title.is_empty() {
                    canvas.save();
                    canvas.translate((12.0, (a + b) / 2.0));
                    canvas.rotate(-90.0, None);
                    draw_text(canvas, &axis.title, 0.0, LABEL_SIZE, LABEL_SIZE + 1.0, theme.axis_label, TextAnchor::Middle);
                    canvas.restore();
                }
            }
        }
    }

    fn draw_command(&self, canvas: &skia::Canvas, cmd: &DrawCommand) {
        let theme = &self.options.theme;
        let color = theme.fill(cmd.style.fill);
        match &cmd.shape {
            Shape::Rect { x, y, width, height } => {
                let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
                canvas.draw_rect(rect, &fill(color));
                if cmd.style.highlighted {
                    canvas.draw_rect(rect, &stroke(theme.highlight_stroke, 2.0));
                }
            }
            Shape::Line { x1, y1, x2, y2 } => {
                canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &stroke(color, 1.0));
            }
            Shape::Arc { cx, cy, inner_radius, outer_radius, start_angle, end_angle } => {
                let path = donut_slice(*cx, *cy, *inner_radius, *outer_radius, *start_angle, *end_angle);
                canvas.draw_path(&path, &fill(color));
                canvas.draw_path(&path, &stroke(theme.background, 1.0));
                if cmd.style.highlighted {
                    canvas.draw_path(&path, &stroke(theme.highlight_stroke, 2.0));
                }
            }
            Shape::Circle { cx, cy, r } => {
                canvas.draw_circle((*cx as f32, *cy as f32), *r as f32, &fill(color));
            }
            Shape::Polyline { points } => {
                let Some((&(x0, y0), rest)) = points.split_first() else { return };
                let mut path = skia::Path::new();
                path.move_to((x0 as f32, y0 as f32));
                for &(x, y) in rest {
                    path.line_to((x as f32, y as f32));
                }
                canvas.draw_path(&path, &stroke(color, 2.0));
            }
            Shape::Text { x, y, text, anchor } => {
                if self.options.draw_labels {
                    draw_text(canvas, text, *x as f32, *y as f32, LABEL_SIZE, color, *anchor);
                }
            }
            Shape::Placeholder { x, y, message } => {
                if self.options.draw_labels {
                    draw_text(canvas, message, *x as f32, *y as f32, TITLE_SIZE, theme.muted, TextAnchor::Middle);
                }
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

/// Horizontal grid lines at the left-axis ticks, across the horizontal axis span.
fn draw_grid(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let Some(left) = frame.axes.iter().find(|a| a.side == AxisSide::Left) else { return };
    let Some(across) = frame.axes.iter().find(|a| a.side != AxisSide::Left) else { return };
    let paint = stroke(theme.grid, 1.0);
    let (x0, x1) = (across.span.0 as f32, across.span.1 as f32);
    for t in &left.ticks {
        canvas.draw_line((x0, t.pos as f32), (x1, t.pos as f32), &paint);
    }
}

/// Ring segment; angles in radians clockwise from 12 o'clock.
fn donut_slice(cx: f64, cy: f64, r0: f64, r1: f64, a0: f64, a1: f64) -> skia::Path {
    let oval = |r: f64| skia::Rect::from_ltrb((cx - r) as f32, (cy - r) as f32, (cx + r) as f32, (cy + r) as f32);
    // Skia measures degrees clockwise from 3 o'clock.
    let start = a0.to_degrees() as f32 - 90.0;
    let sweep = ((a1 - a0).to_degrees() as f32).min(359.99);
    let mut path = skia::Path::new();
    path.arc_to(oval(r1), start, sweep, true);
    if r0 > 0.0 {
        path.arc_to(oval(r0), start + sweep, -sweep, false);
    } else {
        path.line_to((cx as f32, cy as f32));
    }
    path.close();
    path
}

fn draw_text(canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, anchor: TextAnchor) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    let mut font = skia::Font::default();
    font.set_size(size);
    let dx = match anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => font.measure_str(text, Some(&paint)).0 / 2.0,
        TextAnchor::End => font.measure_str(text, Some(&paint)).0,
    };
    // Multi-line tooltips are never drawn; labels are single-line.
    canvas.draw_str(text, (x - dx, y), &font, &paint);
}

/// `003-bar.png`-style names keep the event order visible in a directory listing.
pub fn frame_file_name(seq: usize, frame: &Frame, ext: &str) -> String {
    format!("{seq:03}-{}.{ext}", frame.chart_id)
}

/// Writes every presented frame as a numbered PNG under `dir`.
pub struct PngSink {
    renderer: SkiaRenderer,
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngSink {
    pub fn new(dir: impl Into<PathBuf>, options: RenderOptions) -> Self {
        Self { renderer: SkiaRenderer::new(options), dir: dir.into(), written: Vec::new() }
    }

    pub fn written(&self) -> &[PathBuf] { &self.written }
}

impl FrameSink for PngSink {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let path = self.dir.join(frame_file_name(self.written.len(), frame, "png"));
        self.renderer.render_to_png(frame, &path)?;
        log::info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
