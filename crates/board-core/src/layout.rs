// File: crates/board-core/src/layout.rs
// Summary: Non-axis layouts: pie/donut angles and squarified treemap rectangles.

use std::f64::consts::TAU;

use crate::geometry::Rect;

/// Golden ratio; target aspect ratio of squarified cells.
const PHI: f64 = 1.618_033_988_749_895;

/// Start/end angles (radians, clockwise from 12 o'clock) for each value, in input order.
/// Non-finite or negative values get an empty slice; an all-zero input yields empty slices.
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let total: f64 = values.iter().map(|&v| clean(v)).sum();
    let mut a = 0.0;
    values
        .iter()
        .map(|&v| {
            let sweep = if total > 0.0 { clean(v) / total * TAU } else { 0.0 };
            let slice = (a, a + sweep);
            a += sweep;
            slice
        })
        .collect()
}

/// Squarified treemap of `values` over `area`. Returned rects follow input order.
pub fn squarify(values: &[f64], area: Rect) -> Vec<Rect> {
    let clean: Vec<f64> = values.iter().map(|&v| if v.is_finite() && v > 0.0 { v } else { 0.0 }).collect();
    let mut out = vec![Rect::from_ltrb(area.left, area.top, area.left, area.top); clean.len()];
    let mut remaining: f64 = clean.iter().sum();
    if remaining <= 0.0 {
        return out;
    }

    let (mut x0, mut y0, mut x1, mut y1) = (area.left, area.top, area.right, area.bottom);
    let n = clean.len();
    let mut i0 = 0usize;
    let mut i1 = 0usize;

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Next non-empty value starts the row.
        let mut sum = 0.0;
        while i1 < n {
            sum = clean[i1];
            i1 += 1;
            if sum > 0.0 { break; }
        }
        let mut min_v = sum;
        let mut max_v = sum;
        let alpha = (dy / dx).max(dx / dy) / (remaining * PHI);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = (max_v / beta).max(beta / min_v);

        // Grow the row while its worst aspect ratio keeps improving.
        while i1 < n {
            let v = clean[i1];
            let grown = sum + v;
            let (gmin, gmax) = (min_v.min(v), max_v.max(v));
            beta = grown * grown * alpha;
            let ratio = (gmax / beta).max(beta / gmin);
            if ratio > min_ratio { break; }
            sum = grown;
            min_v = gmin;
            max_v = gmax;
            min_ratio = ratio;
            i1 += 1;
        }

        let row = i0..i1;
        if dx < dy {
            // Horizontal strip across the top.
            let y_end = if remaining > 0.0 { y0 + dy * sum / remaining } else { y1 };
            let mut x = x0;
            for i in row {
                let w = if sum > 0.0 { dx * clean[i] / sum } else { 0.0 };
                out[i] = Rect::from_ltrb(x, y0, x + w, y_end);
                x += w;
            }
            y0 = y_end;
        } else {
            // Vertical strip down the left side.
            let x_end = if remaining > 0.0 { x0 + dx * sum / remaining } else { x1 };
            let mut y = y0;
            for i in row {
                let h = if sum > 0.0 { dy * clean[i] / sum } else { 0.0 };
                out[i] = Rect::from_ltrb(x0, y, x_end, y + h);
                y += h;
            }
            x0 = x_end;
        }
        remaining -= sum;
        i0 = i1;
    }
    out
}

/// Treemap with `padding` pixels around the edge and between cells, optionally rounded.
pub fn treemap(values: &[f64], area: Rect, padding: f64, round: bool) -> Vec<Rect> {
    let half = padding * 0.5;
    squarify(values, area.inset(padding - half))
        .into_iter()
        .map(|r| {
            let r = r.inset(half);
            if round { r.rounded() } else { r }
        })
        .collect()
}
