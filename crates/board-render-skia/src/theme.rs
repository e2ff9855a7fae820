// File: crates/board-render-skia/src/theme.rs
// Summary: Dashboard color themes; resolves semantic fills to concrete colors.

use board_core::FillKey;
use skia_safe as skia;

const fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

/// d3 category10.
const CATEGORY10: [skia::Color; 10] = [
    rgb(0x1f, 0x77, 0xb4),
    rgb(0xff, 0x7f, 0x0e),
    rgb(0x2c, 0xa0, 0x2c),
    rgb(0xd6, 0x27, 0x28),
    rgb(0x94, 0x67, 0xbd),
    rgb(0x8c, 0x56, 0x4b),
    rgb(0xe3, 0x77, 0xc2),
    rgb(0x7f, 0x7f, 0x7f),
    rgb(0xbc, 0xbd, 0x22),
    rgb(0x17, 0xbe, 0xcf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub primary: skia::Color,
    pub highlight: skia::Color,
    /// Outline drawn around highlighted shapes.
    pub highlight_stroke: skia::Color,
    pub candle_up: skia::Color,
    pub candle_down: skia::Color,
    pub wick: skia::Color,
    pub marker: skia::Color,
    pub muted: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: rgb(18, 18, 20),
            grid: rgb(40, 40, 45),
            axis_line: rgb(180, 180, 190),
            axis_label: rgb(235, 235, 245),
            title: rgb(255, 255, 255),
            primary: rgb(0x00, 0xbc, 0xd4),
            highlight: rgb(0xff, 0x98, 0x00),
            highlight_stroke: rgb(255, 255, 255),
            candle_up: rgb(0x4c, 0xaf, 0x50),
            candle_down: rgb(0xf4, 0x43, 0x36),
            wick: rgb(0x99, 0x99, 0x99),
            marker: rgb(0xff, 0x98, 0x00),
            muted: rgb(150, 150, 160),
            palette: CATEGORY10,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: rgb(250, 250, 252),
            grid: rgb(230, 230, 235),
            axis_line: rgb(60, 60, 70),
            axis_label: rgb(20, 20, 30),
            title: rgb(0, 0, 0),
            primary: rgb(0x00, 0xbc, 0xd4),
            highlight: rgb(0x00, 0x7c, 0x91),
            highlight_stroke: rgb(0, 0, 0),
            candle_up: rgb(0x4c, 0xaf, 0x50),
            candle_down: rgb(0xf4, 0x43, 0x36),
            wick: rgb(0x99, 0x99, 0x99),
            marker: rgb(0xff, 0x98, 0x00),
            muted: rgb(100, 100, 110),
            palette: CATEGORY10,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: rgb(0x00, 0x00, 0x00),
            grid: rgb(0x22, 0x22, 0x22),
            axis_line: rgb(0xff, 0xff, 0xff),
            axis_label: rgb(0xff, 0xff, 0xff),
            title: rgb(0xff, 0xff, 0xff),
            primary: rgb(0x00, 0xff, 0xff),
            highlight: rgb(0xff, 0xff, 0x00),
            highlight_stroke: rgb(0xff, 0xff, 0xff),
            candle_up: rgb(0x00, 0xff, 0x00),
            candle_down: rgb(0xff, 0x00, 0x00),
            wick: rgb(0xcc, 0xcc, 0xcc),
            marker: rgb(0xff, 0xaa, 0x00),
            muted: rgb(0xcc, 0xcc, 0xcc),
            palette: CATEGORY10,
        }
    }

    pub fn fill(&self, key: FillKey) -> skia::Color {
        match key {
            FillKey::Primary => self.primary,
            FillKey::Up => self.candle_up,
            FillKey::Down => self.candle_down,
            FillKey::Wick => self.wick,
            FillKey::Marker => self.marker,
            FillKey::Category(i) => self.palette[i % self.palette.len()],
            FillKey::Highlight => self.highlight,
            FillKey::Label => self.axis_label,
            FillKey::Muted => self.muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name.trim())).unwrap_or_else(Theme::dark)
}

/// `#rrggbb`, for SVG attributes.
pub fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}
