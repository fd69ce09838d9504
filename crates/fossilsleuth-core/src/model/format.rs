/// Display formatting helpers for console summaries and chart labels.
///
/// All numeric values stay `f64`/`u64` internally; strings are only produced
/// at the output boundary.

/// Capitalize the first character and lowercase the rest, matching how
/// category labels are shown on chart axes ("large theropod" → "Large theropod").
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Format a record count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Count with its noun, pluralised with a trailing `s`: `1 record`, `2,150 records`.
pub fn format_counted(count: u64, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} {noun}{suffix}", format_count(count))
}

/// Percentage rounded to one decimal place, e.g. `72.3%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Length in meters with trailing zeros dropped: `35 m`, `12.5 m`.
pub fn format_length(meters: f64) -> String {
    if meters.fract() == 0.0 {
        format!("{meters:.0} m")
    } else {
        format!("{} m", (meters * 100.0).round() / 100.0)
    }
}
