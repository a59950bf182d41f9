//! Number formatting for the stats counter.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Counter text for a `total_tracks` value, or `None` when the value should
/// leave the counter untouched (absent, zero, or not a number).
#[must_use]
pub fn total_tracks_label(total: Option<f64>) -> Option<String> {
    let total = total.filter(|t| t.is_finite() && *t != 0.0)?;
    Some(format!("{}+", locale_grouped(total)))
}

/// Group digits the way the visitor's locale does, falling back to
/// comma-separated thousands outside the browser.
#[must_use]
pub fn locale_grouped(value: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let language = web_sys::window().and_then(|w| w.navigator().language());
        if let Some(language) = language {
            let formatted: String = js_sys::Number::from(value).to_locale_string(&language).into();
            if !formatted.is_empty() {
                return formatted;
            }
        }
    }
    group_thousands(value)
}

/// `15230.0` → `"15,230"`. Fractions are rounded away.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value.is_sign_negative() && digits != "0" {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
