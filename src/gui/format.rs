//! Number formatting shared by the table, summary and popover.

/// Shown wherever a value is not a finite number.
pub const PLACEHOLDER: &str = "–";

/// `1234567` -> `1,234,567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_score(v: f64) -> String {
    if v.is_finite() {
        format!("{:.2}", v)
    } else {
        PLACEHOLDER.to_string()
    }
}

pub fn format_percent(v: f64) -> String {
    if v.is_finite() {
        format!("{:.2}%", v)
    } else {
        PLACEHOLDER.to_string()
    }
}
