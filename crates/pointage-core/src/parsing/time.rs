use rust_decimal::Decimal;

/// Why a time cell fell back to zero hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultReason {
    /// Absent or blank cell.
    Missing,
    /// No `:` (or `h`) separator in the cleaned text.
    NoSeparator,
    /// The hours segment is not a non-negative integer.
    InvalidHours(String),
    /// The minutes segment is not a non-negative integer.
    InvalidMinutes(String),
}

/// Result of reading a time cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeValue {
    Parsed(Decimal),
    Defaulted(DefaultReason),
}

impl TimeValue {
    /// Decimal hours, zero when the text could not be read.
    pub fn hours(&self) -> Decimal {
        match self {
            TimeValue::Parsed(h) => *h,
            TimeValue::Defaulted(_) => Decimal::ZERO,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, TimeValue::Defaulted(_))
    }
}

/// Cleanup applied to the `Temps_hhmm` column: trim and rewrite `h`/`H` to `:`.
pub fn clean_time_text(s: &str) -> String {
    s.trim().replace(['h', 'H'], ":")
}

/// Parse a loosely formatted duration into decimal hours.
///
/// Handles formats like:
/// - "8:30" -> 8.5
/// - "8h30" / "8H30" -> 8.5
/// - "08:05" -> 8.08
/// - "8:" -> 8
/// - "8 h 30" -> 8.5 (inner whitespace is dropped)
///
/// Minutes are not range-checked: "12:90" -> 13.5.
/// Anything else is `Defaulted` and counts as zero hours.
pub fn parse_time(text: Option<&str>) -> TimeValue {
    let Some(text) = text else {
        return TimeValue::Defaulted(DefaultReason::Missing);
    };

    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == 'h' || c == 'H' { ':' } else { c })
        .collect();

    if cleaned.is_empty() {
        return TimeValue::Defaulted(DefaultReason::Missing);
    }
    if !cleaned.contains(':') {
        return TimeValue::Defaulted(DefaultReason::NoSeparator);
    }

    let mut parts = cleaned.split(':');
    let hours_part = parts.next().unwrap_or("");
    let minutes_part = parts.next().unwrap_or("");

    let Some(hours) = parse_segment(hours_part) else {
        return TimeValue::Defaulted(DefaultReason::InvalidHours(hours_part.to_string()));
    };
    let Some(minutes) = parse_segment(minutes_part) else {
        return TimeValue::Defaulted(DefaultReason::InvalidMinutes(minutes_part.to_string()));
    };

    let total = Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60);
    TimeValue::Parsed(total.round_dp(2).normalize())
}

/// Decimal hours for a time cell; never fails, malformed input gives zero.
pub fn to_decimal_hours(text: Option<&str>) -> Decimal {
    parse_time(text).hours()
}

/// Empty segment counts as zero.
fn parse_segment(s: &str) -> Option<u64> {
    if s.is_empty() {
        return Some(0);
    }
    s.parse().ok()
}
