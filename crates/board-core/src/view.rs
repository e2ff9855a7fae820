// File: crates/board-core/src/view.rs
// Summary: First-class view state: view mode plus the filter selection of one chart instance.

use std::fmt;

use crate::controller::FilterChange;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewMode {
    All,
    TopN,
    BottomN,
}

/// What the filters of one chart currently select. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub brand: Option<String>,
    pub year: Option<i32>,
    /// 1..=12
    pub month: Option<u32>,
    pub industry: Option<String>,
}

/// The only mutable state of a chart instance. Never patched in place:
/// every interaction builds a new value that replaces the old one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ViewState {
    pub mode: ViewMode,
    pub n: u32,
    pub filter: FilterSelection,
}

impl ViewState {
    pub fn all() -> Self {
        Self { mode: ViewMode::All, n: 0, filter: FilterSelection::default() }
    }

    pub fn top(n: u32) -> Self {
        Self { mode: ViewMode::TopN, n, filter: FilterSelection::default() }
    }

    pub fn bottom(n: u32) -> Self {
        Self { mode: ViewMode::BottomN, n, filter: FilterSelection::default() }
    }

    pub fn with_filter(mut self, filter: FilterSelection) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.filter.brand = Some(brand.into());
        self
    }

    /// Next view state after a filter change; `self` is left untouched.
    pub fn apply(&self, change: &FilterChange) -> ViewState {
        let mut next = self.clone();
        match change {
            FilterChange::Brand(b) => next.filter.brand = b.clone(),
            FilterChange::Industry(i) => next.filter.industry = i.clone(),
            FilterChange::Year(y) => next.filter.year = Some(*y),
            FilterChange::Month(m) => next.filter.month = *m,
            FilterChange::View { mode, n } => {
                next.mode = *mode;
                next.n = *n;
            }
        }
        next
    }

    /// Label shown in the view dropdown ("All", "Top 10", "Bottom 10").
    pub fn mode_label(&self) -> String {
        match self.mode {
            ViewMode::All => "All".to_string(),
            ViewMode::TopN => format!("Top {}", self.n),
            ViewMode::BottomN => format!("Bottom {}", self.n),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self { Self::top(10) }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mode_label())?;
        if let Some(b) = &self.filter.brand { write!(f, " brand={b}")?; }
        if let Some(y) = self.filter.year { write!(f, " year={y}")?; }
        if let Some(m) = self.filter.month { write!(f, " month={m}")?; }
        if let Some(i) = &self.filter.industry { write!(f, " industry={i}")?; }
        Ok(())
    }
}

/// Parse a view dropdown label: `All`, `Top N`, `Bottom N` (case-insensitive).
pub fn parse_view_label(s: &str) -> Option<(ViewMode, u32)> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("all") {
        return Some((ViewMode::All, 0));
    }
    let mut parts = s.split_whitespace();
    let word = parts.next()?.to_ascii_lowercase();
    let n = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    match word.as_str() {
        "top" => Some((ViewMode::TopN, n)),
        "bottom" => Some((ViewMode::BottomN, n)),
        _ => None,
    }
}
