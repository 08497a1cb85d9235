//! Percentage extraction from free-text plans
//!
//! Initiative plans are prose ("Reduce usage by 20% through LED retrofits").
//! The valuation engine needs the percentage out of that prose and must never
//! fail on it, so extraction returns `Option` and the extractor falls back to
//! a configured default.

/// Maps a free-text plan to a percentage (e.g. `20.0` for "20%")
///
/// Implementations must be pure and must never panic.
pub trait PercentageExtractor {
    fn extract(&self, plan: &str) -> f64;
}

impl<F> PercentageExtractor for F
where
    F: Fn(&str) -> f64,
{
    fn extract(&self, plan: &str) -> f64 {
        self(plan)
    }
}

/// Default extractor: first number directly followed by `%` or "percent"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstPercentExtractor {
    /// Returned when the plan has no percentage
    pub default: f64,
}

impl FirstPercentExtractor {
    pub fn new(default: f64) -> Self {
        Self { default }
    }
}

impl Default for FirstPercentExtractor {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl PercentageExtractor for FirstPercentExtractor {
    fn extract(&self, plan: &str) -> f64 {
        extract_percentage(plan).unwrap_or(self.default)
    }
}

/// Find the first numeric token followed by a percent marker
///
/// Whitespace between the number and the marker is allowed ("20 %",
/// "20 percent"). A leading `-` is kept; callers take the magnitude.
pub fn extract_percentage(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        // Don't start in the middle of an identifier like "co2"
        if i > 0 && (bytes[i - 1].is_ascii_alphabetic() || bytes[i - 1] == b'.') {
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                i += 1;
            }
            continue;
        }

        let negative = i > 0 && bytes[i - 1] == b'-';
        let start = i;
        let mut seen_dot = false;
        while i < bytes.len() {
            match bytes[i] {
                b'0'..=b'9' => i += 1,
                b'.' if !seen_dot && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => {
                    seen_dot = true;
                    i += 1;
                }
                _ => break,
            }
        }
        let token = &text[start..i];

        if has_percent_marker(&text[i..]) {
            if let Ok(value) = token.parse::<f64>() {
                if value.is_finite() {
                    return Some(if negative { -value } else { value });
                }
            }
        }
    }

    None
}

fn has_percent_marker(rest: &str) -> bool {
    let rest = rest.trim_start();
    if rest.starts_with('%') {
        return true;
    }
    let lower = rest.get(..7).map(str::to_ascii_lowercase);
    matches!(lower.as_deref(), Some("percent"))
}
