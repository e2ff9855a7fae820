// File: crates/board-core/src/format.rs
// Summary: Number formatting for labels, tooltips and KPI cards.

const SI_PREFIXES: [&str; 17] = ["y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Integer with comma thousands separators: `1234567.4` -> `1,234,567`.
pub fn thousands(v: f64) -> String {
    if !v.is_finite() { return "-".to_string(); }
    let rounded = v.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 { out.push('-'); }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

/// Round to `sig` significant digits.
pub fn round_significant(v: f64, sig: u32) -> f64 {
    if v == 0.0 || !v.is_finite() { return v; }
    let mag = v.abs().log10().floor() as i32;
    let scale = 10f64.powi(mag - sig.max(1) as i32 + 1);
    (v / scale).round() * scale
}

/// Two significant digits, grouped: `1234567` -> `1,200,000`.
pub fn grouped(v: f64) -> String {
    thousands(round_significant(v, 2))
}

/// Dollar amount with two decimals: `12.345` -> `$12.35`.
pub fn currency(v: f64) -> String {
    if !v.is_finite() { return "-".to_string(); }
    format!("${v:.2}")
}

/// Share of a whole as a percentage with one decimal: `0.1234` -> `12.3%`.
pub fn percent(share: f64) -> String {
    if !share.is_finite() { return "-".to_string(); }
    format!("{:.1}%", share * 100.0)
}

/// Two significant digits with an SI suffix, billions spelled `B`:
/// `1_234_567` -> `1.2M`, `15e9` -> `15B`.
pub fn si(v: f64) -> String {
    if !v.is_finite() { return "-".to_string(); }
    if v == 0.0 { return "0.0".to_string(); }
    let rounded = round_significant(v, 2);
    let mag = rounded.abs().log10().floor() as i32;
    let k = mag.div_euclid(3).clamp(-8, 8);
    let scaled = rounded / 10f64.powi(3 * k);
    let decimals = (1 - (mag - 3 * k)).max(0) as usize;
    let prefix = match SI_PREFIXES[(k + 8) as usize] {
        "G" => "B",
        p => p,
    };
    format!("{scaled:.decimals$}{prefix}")
}
