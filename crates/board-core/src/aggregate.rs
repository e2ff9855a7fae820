// File: crates/board-core/src/aggregate.rs
// Summary: Group records by key and reduce each group to a scalar or an OHLC tuple.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use crate::record::{Field, Record};

/// Value(s) used to partition records.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Label(String),
    Day(NaiveDate),
    YearMonth { year: i32, month: u32 },
}

impl GroupKey {
    pub fn label(s: impl Into<String>) -> Self { GroupKey::Label(s.into()) }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            GroupKey::Label(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_day(&self) -> Option<NaiveDate> {
        match self {
            GroupKey::Day(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Label(s) => f.write_str(s),
            GroupKey::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            GroupKey::YearMonth { year, month } => write!(f, "{year:04}-{month:02}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ohlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Ohlc {
    pub fn is_up(&self) -> bool { self.close > self.open }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointValue {
    Scalar(f64),
    Ohlc(Ohlc),
}

/// One reduced group.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedPoint {
    pub key: GroupKey,
    pub value: PointValue,
}

impl AggregatedPoint {
    pub fn scalar(key: GroupKey, v: f64) -> Self {
        Self { key, value: PointValue::Scalar(v) }
    }

    /// Value used for ranking and for linear scales: the scalar, or the close of a candle.
    pub fn magnitude(&self) -> f64 {
        match self.value {
            PointValue::Scalar(v) => v,
            PointValue::Ohlc(c) => c.close,
        }
    }

    pub fn ohlc(&self) -> Option<Ohlc> {
        match self.value {
            PointValue::Ohlc(c) => Some(c),
            PointValue::Scalar(_) => None,
        }
    }

    /// Lowest and highest values this point spans on a value axis.
    pub fn extent(&self) -> (f64, f64) {
        match self.value {
            PointValue::Scalar(v) => (v, v),
            PointValue::Ohlc(c) => (c.low, c.high),
        }
    }
}

/// How a group of records collapses into a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reducer {
    Count,
    Sum(Field),
    Mean(Field),
    /// open = first, close = last, high = max, low = min (input order).
    Ohlc,
}

impl Reducer {
    /// `None` when the group has no usable value for the reduced field.
    pub fn reduce(&self, group: &[&Record]) -> Option<PointValue> {
        match *self {
            Reducer::Count => Some(PointValue::Scalar(group.len() as f64)),
            Reducer::Sum(field) => {
                let mut any = false;
                let mut sum = 0.0;
                for v in group.iter().map(|r| field.of(r)).filter(|v| v.is_finite()) {
                    sum += v;
                    any = true;
                }
                any.then_some(PointValue::Scalar(sum))
            }
            Reducer::Mean(field) => {
                let mut n = 0usize;
                let mut sum = 0.0;
                for v in group.iter().map(|r| field.of(r)).filter(|v| v.is_finite()) {
                    sum += v;
                    n += 1;
                }
                (n > 0).then(|| PointValue::Scalar(sum / n as f64))
            }
            Reducer::Ohlc => {
                let mut it = group.iter().filter(|r| r.has_ohlc());
                let first = it.next()?;
                let mut c = Ohlc { open: first.open, high: first.high, low: first.low, close: first.close };
                for r in it {
                    c.high = c.high.max(r.high);
                    c.low = c.low.min(r.low);
                    c.close = r.close;
                }
                Some(PointValue::Ohlc(c))
            }
        }
    }
}

/// Partition `records` by `key_fn` and reduce every group.
///
/// Every record lands in exactly one group and keys are unique. Output follows
/// first-seen key order; callers that need a ranking sort explicitly.
/// Groups whose reduction has no usable value are dropped.
pub fn aggregate<'a, I, K>(records: I, key_fn: K, reducer: Reducer) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'a Record>,
    K: Fn(&Record) -> GroupKey,
{
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<&Record>)> = Vec::new();
    for r in records {
        let key = key_fn(r);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(r),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![r]));
            }
        }
    }

    let total = groups.len();
    let out: Vec<AggregatedPoint> = groups
        .into_iter()
        .filter_map(|(key, members)| reducer.reduce(&members).map(|value| AggregatedPoint { key, value }))
        .collect();
    if out.len() < total {
        log::debug!("aggregate({:?}): dropped {} group(s) without usable values", reducer, total - out.len());
    }
    out
}

/// Group dated records by calendar day; undated records are skipped.
pub fn aggregate_dated<'a, I>(records: I, reducer: Reducer) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let dated: Vec<&Record> = records.into_iter().filter(|r| r.date.is_some()).collect();
    aggregate(dated, |r| r.date.map_or_else(|| GroupKey::label(""), GroupKey::Day), reducer)
}

pub fn by_brand(r: &Record) -> GroupKey { GroupKey::Label(r.brand_name.clone()) }

pub fn by_industry(r: &Record) -> GroupKey { GroupKey::Label(r.industry_tag.clone()) }

pub fn by_country(r: &Record) -> GroupKey { GroupKey::Label(r.country.clone()) }

/// Calendar month of the record; undated records share the `YearMonth { 0, 0 }` bucket.
pub fn by_year_month(r: &Record) -> GroupKey {
    GroupKey::YearMonth { year: r.year().unwrap_or(0), month: r.month().unwrap_or(0) }
}
