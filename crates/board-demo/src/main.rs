// File: crates/board-demo/src/main.rs
// Summary: Demo loads the stock CSV, mounts every dashboard chart, replays filter events and writes PNG/SVG frames.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use board_core::filters::{self, month_name};
use board_core::{load_csv, Dashboard, FilterEvent, Frame, FrameSink};
use board_render_skia::{theme, PngSink, RenderOptions, SvgSink};

/// Fans one frame out to the PNG and SVG sinks.
struct Both {
    png: PngSink,
    svg: SvgSink,
}

impl FrameSink for Both {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.png.present(frame)?;
        self.svg.present(frame)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| "World-Stock-Prices-Dataset.csv".to_string()));
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    let theme_name = std::env::var("BOARD_THEME").unwrap_or_else(|_| "dark".to_string());

    let records = load_csv(&input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    println!("Using input file: {} ({} records)", input.display(), records.len());
    if records.is_empty() {
        anyhow::bail!("no records loaded; check headers/delimiter.");
    }

    let mut dashboard = Dashboard::with_default_charts(records);
    for card in dashboard.kpis().cards() {
        println!("{:>20}: {}", card.label, card.value);
    }

    let options = RenderOptions::default().with_theme(theme::find(&theme_name));
    log::info!("theme '{}', writing to {}", options.theme.name, out_dir.display());
    let mut sink = Both { png: PngSink::new(&out_dir, options), svg: SvgSink::new(&out_dir, options) };
    dashboard.present_all(&mut sink).context("rendering initial frames")?;

    for event in scripted_events(dashboard.records()) {
        let redrawn = dashboard
            .dispatch(&event, &mut sink)
            .with_context(|| format!("dispatching {}={}", event.field, event.value))?;
        println!("{}={:<24} -> {} chart(s) redrawn", event.field, event.value, redrawn);
    }

    report(&out_dir, sink.png.written().len());
    Ok(())
}

/// The interactions a user would typically make on the page: flip the ranking,
/// pick a brand, move the candlestick to the last year and its last month.
fn scripted_events(records: &[board_core::Record]) -> Vec<FilterEvent> {
    let mut events = vec![FilterEvent::view("Bottom 10")];
    if let Some(brand) = filters::brands(records).into_iter().nth(1) {
        events.push(FilterEvent::brand(brand));
    }
    if let Some(&year) = filters::years(records).last() {
        events.push(FilterEvent::year(year.to_string()));
        if let Some(name) = filters::months_for_year(records, year).last().copied().and_then(month_name) {
            events.push(FilterEvent::month(name));
        }
    }
    events.push(FilterEvent::view("Top 5"));
    events
}

fn report(out_dir: &Path, frames: usize) {
    println!("Wrote {} frame(s) as PNG + SVG under {}", frames, out_dir.display());
}
