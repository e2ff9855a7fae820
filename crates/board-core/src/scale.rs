// File: crates/board-core/src/scale.rs
// Summary: Band (categorical), linear (value) and time scales, derived fresh for every frame.

use chrono::{Datelike, NaiveDate};

use crate::aggregate::{AggregatedPoint, GroupKey};

/// Fractional gap between bands (inner and outer) used by every categorical axis.
pub const DEFAULT_BAND_PADDING: f64 = 0.2;
/// Tick count the "nice" extension aims for.
pub const DEFAULT_TICKS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Categorical,
    Numeric,
    Time,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Band,
    Time,
}

/// Continuous mapping from a value domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if !d0.is_finite() || !d1.is_finite() {
            d0 = 0.0;
            d1 = 1.0;
        }
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { domain: (d0, d1), range }
    }

    /// Domain `[0, max]`; non-positive or missing maxima widen to `[0, 1]`.
    pub fn zero_based(max: f64, range: (f64, f64)) -> Self {
        let max = if max.is_finite() && max > 0.0 { max } else { 1.0 };
        Self::new((0.0, max), range)
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let rspan = r1 - r0;
        if rspan.abs() < 1e-12 { return d0; }
        d0 + (px - r0) / rspan * (d1 - d0)
    }

    /// Extend the domain outward to round tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut d0, mut d1) = self.domain;
        let mut prev: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_step(d0, d1, count);
            if !step.is_finite() || step <= 0.0 || prev == Some(step) { break; }
            d0 = (d0 / step).floor() * step;
            d1 = (d1 / step).ceil() * step;
            prev = Some(step);
        }
        self.domain = (d0, d1);
        self
    }

    /// Round values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Tick spacing of the form 1, 2 or 5 x 10^k for about `count` intervals.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() { return 0.0; }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let step = tick_step(lo, hi, count);
    if step <= 0.0 { return vec![lo]; }
    // Work in integer multiples so fractional steps don't accumulate error.
    let inv = if step < 1.0 { (1.0 / step).round() } else { 0.0 };
    let (i0, i1) = if inv > 0.0 {
        ((lo * inv - 1e-9).ceil() as i64, (hi * inv + 1e-9).floor() as i64)
    } else {
        ((lo / step - 1e-9).ceil() as i64, (hi / step + 1e-9).floor() as i64)
    };
    (i0..=i1)
        .map(|i| if inv > 0.0 { i as f64 / inv } else { i as f64 * step })
        .collect()
}

/// Evenly spaced bands, one per key, in the given key order.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    pub keys: Vec<GroupKey>,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    pub fn new(keys: Vec<GroupKey>, range: (f64, f64), padding: f64) -> Self {
        Self { keys, range, padding: padding.clamp(0.0, 1.0) }
    }

    pub fn len(&self) -> usize { self.keys.len() }
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    /// Distance between the starts of two adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.keys.len() as f64;
        let (r0, r1) = self.range;
        (r1 - r0) / (n - self.padding + 2.0 * self.padding).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 { self.step() * (1.0 - self.padding) }

    fn first_start(&self) -> f64 {
        let n = self.keys.len() as f64;
        let (r0, r1) = self.range;
        let used = self.step() * (n - self.padding);
        r0 + (r1 - r0 - used) * 0.5
    }

    pub fn index_of(&self, key: &GroupKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Pixel where the band for `key` starts.
    pub fn position(&self, key: &GroupKey) -> Option<f64> {
        self.index_of(key).map(|i| self.position_at(i))
    }

    pub fn position_at(&self, i: usize) -> f64 {
        self.first_start() + self.step() * i as f64
    }

    pub fn center(&self, key: &GroupKey) -> Option<f64> {
        self.position(key).map(|p| p + self.bandwidth() * 0.5)
    }
}

/// Calendar dates mapped linearly onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (NaiveDate, NaiveDate),
    pub range: (f64, f64),
    days: LinearScale,
}

impl TimeScale {
    /// A single distinct date widens to a one-day span.
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let (a, b) = if domain.0 <= domain.1 { domain } else { (domain.1, domain.0) };
        let d0 = day_number(a);
        let d1 = day_number(b).max(d0 + 1.0);
        Self { domain: (a, b), range, days: LinearScale::new((d0, d1), range) }
    }

    #[inline]
    pub fn map(&self, date: NaiveDate) -> f64 { self.days.map(day_number(date)) }

    /// Fractional day number (days from CE) under `px`.
    pub fn invert(&self, px: f64) -> f64 { self.days.invert(px) }

    pub fn invert_date(&self, px: f64) -> Option<NaiveDate> {
        let d = self.invert(px).round();
        if !d.is_finite() || d < i32::MIN as f64 || d > i32::MAX as f64 { return None; }
        NaiveDate::from_num_days_from_ce_opt(d as i32)
    }

    /// Whole-day ticks, at most about `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (d0, d1) = self.days.domain;
        let step = tick_step(d0, d1, count).max(1.0);
        let mut out = Vec::new();
        let mut d = (d0 / step).ceil() * step;
        while d <= d1 + 1e-9 {
            if let Some(date) = NaiveDate::from_num_days_from_ce_opt(d as i32) {
                if date <= self.domain.1 { out.push(date); }
            }
            d += step;
        }
        out
    }
}

#[inline]
fn day_number(d: NaiveDate) -> f64 { d.num_days_from_ce() as f64 }

/// Scale derived from one transformed series.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleSpec {
    Linear(LinearScale),
    Band(BandScale),
    Time(TimeScale),
}

impl ScaleSpec {
    pub fn kind(&self) -> ScaleKind {
        match self {
            ScaleSpec::Linear(_) => ScaleKind::Linear,
            ScaleSpec::Band(_) => ScaleKind::Band,
            ScaleSpec::Time(_) => ScaleKind::Time,
        }
    }

    pub fn range(&self) -> (f64, f64) {
        match self {
            ScaleSpec::Linear(s) => s.range,
            ScaleSpec::Band(s) => s.range,
            ScaleSpec::Time(s) => s.range,
        }
    }

    pub fn as_linear(&self) -> Option<&LinearScale> {
        if let ScaleSpec::Linear(s) = self { Some(s) } else { None }
    }

    pub fn as_band(&self) -> Option<&BandScale> {
        if let ScaleSpec::Band(s) = self { Some(s) } else { None }
    }

    pub fn as_time(&self) -> Option<&TimeScale> {
        if let ScaleSpec::Time(s) = self { Some(s) } else { None }
    }
}

/// Build the scale for one axis of `points` (already transformed, in display order).
///
/// - Categorical: one band per key, in order.
/// - Numeric: `[0, max]` extended to a nice bound.
/// - Time: `[min date, max date]` of the `Day` keys.
pub fn build_scale(points: &[AggregatedPoint], axis: AxisKind, range: (f64, f64)) -> ScaleSpec {
    match axis {
        AxisKind::Categorical => {
            let keys = points.iter().map(|p| p.key.clone()).collect();
            ScaleSpec::Band(BandScale::new(keys, range, DEFAULT_BAND_PADDING))
        }
        AxisKind::Numeric => {
            let max = points.iter().map(|p| p.extent().1).filter(|v| v.is_finite()).fold(f64::NEG_INFINITY, f64::max);
            ScaleSpec::Linear(LinearScale::zero_based(max, range).nice(DEFAULT_TICKS))
        }
        AxisKind::Time => {
            let mut days = points.iter().filter_map(|p| p.key.as_day());
            let first = days.next().unwrap_or_default();
            let (lo, hi) = days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
            ScaleSpec::Time(TimeScale::new((lo, hi), range))
        }
    }
}

/// Value scale spanning `[min low, max high]` of the points (candlesticks), niced.
pub fn build_extent_scale(points: &[AggregatedPoint], range: (f64, f64)) -> LinearScale {
    let (lo, hi) = points
        .iter()
        .map(AggregatedPoint::extent)
        .filter(|(l, h)| l.is_finite() && h.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (l, h)| (lo.min(l), hi.max(h)));
    if !lo.is_finite() || !hi.is_finite() {
        return LinearScale::new((0.0, 100.0), range);
    }
    LinearScale::new((lo, hi), range).nice(DEFAULT_TICKS)
}
