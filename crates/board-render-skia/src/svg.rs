// File: crates/board-render-skia/src/svg.rs
// Summary: SVG serialization of frames; data shapes carry their tooltip as a <title>.

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use anyhow::Result;
use board_core::draw::{AxisSide, TextAnchor};
use board_core::geometry::polar;
use board_core::{DrawCommand, Frame, FrameSink, Shape};

use crate::theme::{hex, Theme};
use crate::{frame_file_name, RenderOptions};

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

fn anchor(a: TextAnchor) -> &'static str {
    match a {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn arc_path(cx: f64, cy: f64, r0: f64, r1: f64, a0: f64, a1: f64) -> String {
    // A full ring cannot be expressed as one arc; stop just short of it.
    let a1 = a1.min(a0 + std::f64::consts::TAU - 1e-4);
    let large = u8::from(a1 - a0 > std::f64::consts::PI);
    let (ox0, oy0) = polar(cx, cy, r1, a0);
    let (ox1, oy1) = polar(cx, cy, r1, a1);
    let (ix1, iy1) = polar(cx, cy, r0, a1);
    let (ix0, iy0) = polar(cx, cy, r0, a0);
    format!(
        "M{ox0:.2},{oy0:.2}A{r1:.2},{r1:.2} 0 {large} 1 {ox1:.2},{oy1:.2}L{ix1:.2},{iy1:.2}A{r0:.2},{r0:.2} 0 {large} 0 {ix0:.2},{iy0:.2}Z"
    )
}

fn write_command(out: &mut String, cmd: &DrawCommand, theme: &Theme, labels: bool) -> fmt::Result {
    let color = hex(theme.fill(cmd.style.fill));
    let outline = if cmd.style.highlighted {
        format!(r#" stroke="{}" stroke-width="2""#, hex(theme.highlight_stroke))
    } else {
        String::new()
    };
    let title = cmd.tooltip.as_deref().map(|t| format!("<title>{}</title>", escape(t))).unwrap_or_default();

    match &cmd.shape {
        Shape::Rect { x, y, width, height } => writeln!(
            out,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" fill="{color}"{outline}>{title}</rect>"#
        ),
        Shape::Line { x1, y1, x2, y2 } => writeln!(
            out,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{color}"/>"#
        ),
        Shape::Arc { cx, cy, inner_radius, outer_radius, start_angle, end_angle } => {
            let d = arc_path(*cx, *cy, *inner_radius, *outer_radius, *start_angle, *end_angle);
            writeln!(out, r#"<path d="{d}" fill="{color}"{outline}>{title}</path>"#)
        }
        Shape::Circle { cx, cy, r } => {
            writeln!(out, r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{color}">{title}</circle>"#)
        }
        Shape::Polyline { points } => {
            let pts = points.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect::<Vec<_>>().join(" ");
            writeln!(out, r#"<polyline points="{pts}" fill="none" stroke="{color}" stroke-width="2"/>"#)
        }
        Shape::Text { x, y, text, anchor: a } if labels => writeln!(
            out,
            r#"<text x="{x:.2}" y="{y:.2}" fill="{color}" font-size="11" text-anchor="{}">{}</text>"#,
            anchor(*a),
            escape(text)
        ),
        Shape::Placeholder { x, y, message } if labels => writeln!(
            out,
            r#"<text x="{x:.2}" y="{y:.2}" fill="{}" font-size="16" text-anchor="middle">{}</text>"#,
            hex(theme.muted),
            escape(message)
        ),
        Shape::Text { .. } | Shape::Placeholder { .. } => Ok(()),
    }
}

/// Serialize `frame` as a standalone SVG document.
pub fn frame_to_svg(frame: &Frame, options: &RenderOptions) -> Result<String> {
    let theme = &options.theme;
    let labels = options.draw_labels;
    let axis = hex(theme.axis_line);
    let label = hex(theme.axis_label);
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = frame.width,
        h = frame.height
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, hex(theme.background))?;
    if labels && !frame.title.is_empty() {
        writeln!(
            out,
            r#"<text x="{}" y="22" fill="{}" font-size="16" text-anchor="middle">{}</text>"#,
            frame.width / 2,
            hex(theme.title),
            escape(&frame.title)
        )?;
    }

    for a in &frame.axes {
        let (s0, s1) = a.span;
        let off = a.offset;
        writeln!(out, r#"<g class="axis" stroke="{axis}" fill="{label}" font-size="11">"#)?;
        match a.side {
            AxisSide::Top | AxisSide::Bottom => {
                let dir = if a.side == AxisSide::Top { -1.0 } else { 1.0 };
                writeln!(out, r#"<line x1="{s0:.2}" y1="{off:.2}" x2="{s1:.2}" y2="{off:.2}"/>"#)?;
                for t in &a.ticks {
                    let (x, y2) = (t.pos, off + dir * 6.0);
                    writeln!(out, r#"<line x1="{x:.2}" y1="{off:.2}" x2="{x:.2}" y2="{y2:.2}"/>"#)?;
                    if labels {
                        let ty = if dir > 0.0 { off + 19.0 } else { off - 10.0 };
                        writeln!(out, r#"<text x="{x:.2}" y="{ty:.2}" stroke="none" text-anchor="middle">{}</text>"#, escape(&t.label))?;
                    }
                }
                if labels && !a.title.is_empty() {
                    let ty = if dir > 0.0 { off + 44.0 } else { off - 30.0 };
                    writeln!(
                        out,
                        r#"<text x="{:.2}" y="{ty:.2}" stroke="none" text-anchor="middle">{}</text>"#,
                        (s0 + s1) / 2.0,
                        escape(&a.title)
                    )?;
                }
            }
            AxisSide::Left => {
                writeln!(out, r#"<line x1="{off:.2}" y1="{s0:.2}" x2="{off:.2}" y2="{s1:.2}"/>"#)?;
                for t in &a.ticks {
                    let (y, x0) = (t.pos, off - 6.0);
                    writeln!(out, r#"<line x1="{x0:.2}" y1="{y:.2}" x2="{off:.2}" y2="{y:.2}"/>"#)?;
                    if labels {
                        let tx = off - 9.0;
                        let ty = y + 4.0;
                        writeln!(out, r#"<text x="{tx:.2}" y="{ty:.2}" stroke="none" text-anchor="end">{}</text>"#, escape(&t.label))?;
                    }
                }
                if labels && !a.title.is_empty() {
                    let cy = (s0 + s1) / 2.0;
                    writeln!(
                        out,
                        r#"<text transform="translate(12,{cy:.2}) rotate(-90)" y="11" stroke="none" text-anchor="middle">{}</text>"#,
                        escape(&a.title)
                    )?;
                }
            }
        }
        writeln!(out, "</g>")?;
    }

    for cmd in &frame.commands {
        write_command(&mut out, cmd, theme, labels)?;
    }
    out.push_str("</svg>\n");
    Ok(out)
}

/// Writes every presented frame as a numbered SVG under `dir`.
pub struct SvgSink {
    options: RenderOptions,
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SvgSink {
    pub fn new(dir: impl Into<PathBuf>, options: RenderOptions) -> Self {
        Self { options, dir: dir.into(), written: Vec::new() }
    }

    pub fn written(&self) -> &[PathBuf] { &self.written }
}

impl FrameSink for SvgSink {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(frame_file_name(self.written.len(), frame, "svg"));
        std::fs::write(&path, frame_to_svg(frame, &self.options)?)?;
        log::info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
