// File: crates/board-core/tests/common/mod.rs
// Purpose: Shared fixtures: a small multi-brand price table.
#![allow(dead_code)]

use board_core::Record;

pub fn rec(date: &str, brand: &str, industry: &str, country: &str, o: f64, h: f64, l: f64, c: f64, v: f64) -> Record {
    Record::from_text(date, brand, industry, country, &o.to_string(), &h.to_string(), &l.to_string(), &c.to_string(), &v.to_string())
}

/// Five brands across three industries and three countries.
///
/// - mean close by industry: Automotive 202.5, Technology 101, Retail 43.67
/// - volume by brand: Apple 5000, Nike 1500, Adidas 900, Toyota 700, Sony 600
/// - records by country: USA 6, Japan 3, Germany 1
pub fn sample() -> Vec<Record> {
    vec![
        rec("2020-01-02", "Apple", "Technology", "USA", 100.0, 105.0, 99.0, 104.0, 1000.0),
        rec("2020-01-03", "Apple", "Technology", "USA", 104.0, 106.0, 101.0, 102.0, 1500.0),
        rec("2020-02-03", "Apple", "Technology", "USA", 102.0, 110.0, 100.0, 108.0, 2000.0),
        rec("2021-03-01", "Apple", "Technology", "USA", 108.0, 112.0, 107.0, 110.0, 500.0),
        rec("2020-01-02", "Nike", "Retail", "USA", 50.0, 52.0, 49.0, 51.0, 800.0),
        rec("2020-01-03", "Nike", "Retail", "USA", 51.0, 53.0, 50.0, 50.0, 700.0),
        rec("2020-01-02", "Toyota", "Automotive", "Japan", 200.0, 202.0, 198.0, 201.0, 300.0),
        rec("2020-02-03", "Toyota", "Automotive", "Japan", 201.0, 205.0, 200.0, 204.0, 400.0),
        rec("2020-01-02", "Sony", "Technology", "Japan", 80.0, 82.0, 79.0, 81.0, 600.0),
        rec("2020-01-02", "Adidas", "Retail", "Germany", 30.0, 31.0, 29.0, 30.0, 900.0),
    ]
}

/// One brand with `n` consecutive daily closes following a sawtooth.
pub fn daily_series(brand: &str, n: usize) -> Vec<Record> {
    let start = chrono::NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let d = start + chrono::Duration::days(i as i64);
            let c = 100.0 + (i % 17) as f64 - (i % 5) as f64 * 0.5;
            rec(&d.format("%Y-%m-%d").to_string(), brand, "Technology", "USA", c, c + 1.0, c - 1.0, c, 1000.0)
        })
        .collect()
}

pub fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }
