use std::fmt;

use serde::Serialize;

/// Amount and unit as shown to the user.
///
/// Only used for display. Aggregation always works on the raw `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedAmount {
    pub value: String,
    pub unit: String,
}

impl fmt::Display for FormattedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            return f.write_str(&self.value);
        }

        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Smaller unit and multiplier used when an amount drops below one.
fn smaller_unit(unit: &str) -> Option<(&'static str, f64)> {
    match unit.trim().to_lowercase().as_str() {
        "kg" => Some(("g", 1000.0)),
        "l" => Some(("ml", 1000.0)),
        "dl" => Some(("ml", 100.0)),
        "cl" => Some(("ml", 10.0)),
        _ => None,
    }
}

/// Format a scaled amount for display
///
/// Rules:
/// - 0 < amount < 1 with a known smaller unit: re-expressed in it, whole number
///   (0.5 l → "500 ml")
/// - whole numbers: no decimals (3.0 → "3")
/// - everything else: one decimal, halves rounded up (1.25 → "1.3")
pub fn format_amount(amount: f64, unit: &str) -> FormattedAmount {
    if amount > 0.0 && amount < 1.0 {
        if let Some((smaller, factor)) = smaller_unit(unit) {
            return FormattedAmount {
                value: format!("{}", (amount * factor).round()),
                unit: smaller.to_owned(),
            };
        }
    }

    let rounded = (amount * 10.0).round() / 10.0;
    let value = if rounded.fract() == 0.0 {
        format!("{}", rounded)
    } else {
        format!("{:.1}", rounded)
    };

    FormattedAmount {
        value,
        unit: unit.to_owned(),
    }
}
