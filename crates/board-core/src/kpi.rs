// File: crates/board-core/src/kpi.rs
// Summary: Headline KPI cards (total volume, average close, brand count).

use std::collections::HashSet;

use crate::format;
use crate::record::Record;

#[derive(Clone, Debug, PartialEq)]
pub struct Kpis {
    pub total_volume: f64,
    /// `None` when no record has a usable close.
    pub avg_close: Option<f64>,
    pub total_brands: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
}

impl Kpis {
    /// Non-finite volumes and closes are ignored.
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut total_volume = 0.0;
        let mut close_sum = 0.0;
        let mut close_n = 0usize;
        let mut brands = HashSet::new();
        for r in records {
            if r.volume.is_finite() { total_volume += r.volume; }
            if r.close.is_finite() {
                close_sum += r.close;
                close_n += 1;
            }
            brands.insert(r.brand_name.as_str());
        }
        Self {
            total_volume,
            avg_close: (close_n > 0).then(|| close_sum / close_n as f64),
            total_brands: brands.len(),
        }
    }

    pub fn cards(&self) -> Vec<KpiCard> {
        vec![
            KpiCard { label: "Total Volume", value: format::thousands(self.total_volume) },
            KpiCard { label: "Average Close Price", value: self.avg_close.map_or_else(|| "-".to_string(), format::currency) },
            KpiCard { label: "Total Brands", value: self.total_brands.to_string() },
        ]
    }
}
