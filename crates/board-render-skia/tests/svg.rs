// File: crates/board-render-skia/tests/svg.rs
// Purpose: SVG output: document shell, tooltips as titles, escaping and placeholders.

use std::sync::Arc;

use board_core::charts::{CandlestickChart, PieChart};
use board_core::{FilterEvent, FrameSink, Record, RenderTarget};
use board_render_skia::{frame_to_svg, RenderOptions, SvgSink};

fn records() -> Arc<[Record]> {
    vec![
        Record::from_text("2020-01-02", "AT&T", "Telecom", "USA", "20", "21", "19", "20.5", "500"),
        Record::from_text("2020-01-02", "Acme", "Tools <Hand>", "USA", "10", "11", "9", "10.5", "100"),
    ]
    .into()
}

#[test]
fn svg_document_with_tooltips() {
    let t = RenderTarget::mount(Box::new(PieChart::default()), records());
    let svg = frame_to_svg(t.frame(), &RenderOptions::default()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"width="610""#));
    assert_eq!(svg.matches("<path").count(), 2);
    assert!(svg.contains("<title>Telecom\n50.0%</title>"));
    assert!(svg.contains("Tools &lt;Hand&gt;"));
    assert!(!svg.contains("<Hand>"));
}

#[test]
fn labels_can_be_disabled() {
    let t = RenderTarget::mount(Box::new(PieChart::default()), records());
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let svg = frame_to_svg(t.frame(), &opts).unwrap();
    assert!(!svg.contains("<text"));
}

#[test]
fn placeholder_is_rendered_as_message() {
    let mut t = RenderTarget::mount(Box::new(CandlestickChart::default()), records());
    let frame = t.on_filter_change(&FilterEvent::brand("AT&T")).unwrap().clone();
    assert!(!frame.is_placeholder());
    let frame = t.on_filter_change(&FilterEvent::month("July")).unwrap();
    let svg = frame_to_svg(frame, &RenderOptions::default()).unwrap();
    assert!(svg.contains("No data available for selected year and month"));
    assert!(svg.contains("Candlestick Chart – AT&amp;T OHLC"));
}

#[test]
fn svg_sink_writes_serialized_frames() {
    let dir = std::path::PathBuf::from("target/test_out/svg_sink");
    let _ = std::fs::remove_dir_all(&dir);
    let t = RenderTarget::mount(Box::new(PieChart::default()), records());
    let mut sink = SvgSink::new(&dir, RenderOptions::default());
    sink.present(t.frame()).expect("present pie");
    assert_eq!(sink.written().len(), 1);
    assert!(sink.written()[0].ends_with("000-pie.svg"));
    let on_disk = std::fs::read_to_string(&sink.written()[0]).expect("output exists");
    assert_eq!(on_disk, frame_to_svg(t.frame(), &RenderOptions::default()).unwrap());
}
