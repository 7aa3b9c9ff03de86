//! Raw form fields and their coercion into a [`PreferenceRequest`].

use shared::{
    domain::FilterGroup,
    protocol::{PreferenceRequest, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE},
};

use crate::selection::SelectionState;

/// Text typed into the price inputs plus the vegetarian checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceForm {
    pub min_price: String,
    pub max_price: String,
    pub vegetarian_only: bool,
}

impl PreferenceForm {
    /// Snapshot of the selection and the coerced form fields.
    pub fn build_request(&self, selection: &SelectionState) -> PreferenceRequest {
        PreferenceRequest {
            min_price: coerce_price(&self.min_price, DEFAULT_MIN_PRICE),
            max_price: coerce_price(&self.max_price, DEFAULT_MAX_PRICE),
            calorie_level: selection.value(FilterGroup::Calories).to_string(),
            meal_type: selection.value(FilterGroup::Meal).to_string(),
            cuisine: selection.value(FilterGroup::Cuisine).to_string(),
            categories: selection.categories().to_vec(),
            spice_level: selection.value(FilterGroup::Spice).to_string(),
            prep_time: selection.value(FilterGroup::Prep).to_string(),
            vegetarian_only: self.vegetarian_only,
        }
    }
}

/// Reads a price the way a browser `parseInt(..) || default` does.
///
/// Zero counts as absent, so an explicit `0` also yields `default`. Negative
/// and out of range values are treated as non-numeric.
pub fn coerce_price(raw: &str, default: u32) -> u32 {
    match parse_leading_int(raw) {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(default),
        _ => default,
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
