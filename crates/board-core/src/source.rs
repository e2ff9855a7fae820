// File: crates/board-core/src/source.rs
// Summary: Record source; reads the stock-price CSV into records (loaded once, shared read-only).

use std::io::Read;
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::record::Record;

/// Column aliases, matched case-insensitively against the header row.
const DATE: &[&str] = &["date", "datetime", "timestamp", "time"];
const BRAND: &[&str] = &["brand_name", "brand", "name"];
const INDUSTRY: &[&str] = &["industry_tag", "industry", "sector"];
const COUNTRY: &[&str] = &["country"];
const OPEN: &[&str] = &["open", "o"];
const HIGH: &[&str] = &["high", "h"];
const LOW: &[&str] = &["low", "l"];
const CLOSE: &[&str] = &["close", "c", "adj_close", "close_price"];
const VOLUME: &[&str] = &["volume", "vol", "v"];

struct Columns {
    date: usize,
    brand: usize,
    industry: Option<usize>,
    country: Option<usize>,
    open: Option<usize>,
    high: Option<usize>,
    low: Option<usize>,
    close: Option<usize>,
    volume: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[String]) -> Result<Self> {
        let idx = |names: &[&str]| -> Option<usize> {
            headers.iter().position(|h| names.iter().any(|n| h.as_str() == *n))
        };
        let optional = |names: &[&str]| {
            let found = idx(names);
            if found.is_none() {
                log::warn!("column '{}' not found; values default to empty/NaN", names[0]);
            }
            found
        };
        Ok(Self {
            date: idx(DATE).ok_or(ChartError::MissingColumn("Date"))?,
            brand: idx(BRAND).ok_or(ChartError::MissingColumn("Brand_Name"))?,
            industry: optional(INDUSTRY),
            country: optional(COUNTRY),
            open: optional(OPEN),
            high: optional(HIGH),
            low: optional(LOW),
            close: optional(CLOSE),
            volume: optional(VOLUME),
        })
    }
}

/// Read records from any CSV reader with a header row.
///
/// Rows that cannot be split into fields are skipped with a warning; bad
/// numbers become `NaN` and bad dates `None` (see [`Record::from_text`]).
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_lowercase())
        .collect::<Vec<_>>();
    let cols = Columns::resolve(&headers)?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (line, rec) in rdr.records().enumerate() {
        let rec = match rec {
            Ok(r) => r,
            Err(e) => {
                log::warn!("row {}: {}", line + 2, e);
                skipped += 1;
                continue;
            }
        };
        let cell = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).unwrap_or("");
        out.push(Record::from_text(
            cell(Some(cols.date)),
            cell(Some(cols.brand)),
            cell(cols.industry),
            cell(cols.country),
            cell(cols.open),
            cell(cols.high),
            cell(cols.low),
            cell(cols.close),
            cell(cols.volume),
        ));
    }

    let undated = out.iter().filter(|r| r.date.is_none()).count();
    log::info!("loaded {} record(s), {} skipped, {} without a usable date", out.len(), skipped, undated);
    Ok(out)
}

/// Load records from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_csv(std::io::BufReader::new(file))
}
