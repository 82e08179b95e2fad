//! Formatting utilities used for CLI and export outputs.

use crate::models::value::format_number;

/// Two decimals, thousands grouped with `,`: `12,345.60`.
pub fn money(v: f64, currency: &str) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let cents = (v.abs() * 100.0).round() as u64;
    let int = group_thousands(cents / 100);
    format!("{}{}.{:02} {}", sign, int, cents % 100, currency)
}

/// Whole kilometres with grouping, decimals only when present.
pub fn distance(v: f64) -> String {
    if v.fract() == 0.0 {
        let sign = if v < 0.0 { "-" } else { "" };
        format!("{}{} km", sign, group_thousands(v.abs() as u64))
    } else {
        format!("{:.1} km", v)
    }
}

pub fn economy(v: f64) -> String {
    format!("{:.2} km/L", v)
}

/// Numeric cell as shown in `list`: same text as persisted.
pub fn number_cell(v: f64) -> String {
    format_number(v)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
