//! Loose conversions of JSON values to text and numbers.
//!
//! Request fields are checked against their *text form* (a missing field is the
//! empty string, `12` is `"12"`, `true` is `"true"`) and numeric comparisons use a
//! lenient numeric reading (`"  42 "` is 42, `""` is 0, `"abc"` is NaN). This keeps
//! the rules independent of whether a client sent `"price": 10` or `"price": "10"`.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").expect("valid regex")
});

/// Text form of a request value.
///
/// `None` (field absent) and `null` read as `""`, numbers use their shortest
/// decimal form, arrays join their elements with `,` and objects read as
/// `"[object Object]"`.
pub fn to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => number_text(f),
            _ => n.to_string(),
        },
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| to_text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Numeric reading of a request value, NaN when it has none.
///
/// An absent field is NaN while an explicit `null` is 0, booleans are 1 and 0 and
/// arrays go through their text form.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => text_to_number(s),
        Some(array @ Value::Array(_)) => text_to_number(&to_text(Some(array))),
        Some(Value::Object(_)) => f64::NAN,
    }
}

/// Parse trimmed text as a decimal, `0x`/`0o`/`0b` integer or `Infinity` literal.
pub fn text_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u128::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::INFINITY);
    }

    if DECIMAL_LITERAL.is_match(trimmed) {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn number_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{}", f as i128)
    } else {
        f.to_string()
    }
}
