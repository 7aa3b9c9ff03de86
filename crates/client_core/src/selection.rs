//! Current filter choices of the preference form.

use shared::domain::FilterGroup;

/// One value per single-valued group plus the set of selected categories.
///
/// Values are stored verbatim; the option catalogs in `shared::domain` only
/// decide which buttons a front end offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    calories: String,
    meal: String,
    cuisine: String,
    spice: String,
    prep: String,
    categories: Vec<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            calories: FilterGroup::Calories.default_value().to_string(),
            meal: FilterGroup::Meal.default_value().to_string(),
            cuisine: FilterGroup::Cuisine.default_value().to_string(),
            spice: FilterGroup::Spice.default_value().to_string(),
            prep: FilterGroup::Prep.default_value().to_string(),
            categories: Vec::new(),
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, group: FilterGroup) -> &mut String {
        match group {
            FilterGroup::Calories => &mut self.calories,
            FilterGroup::Meal => &mut self.meal,
            FilterGroup::Cuisine => &mut self.cuisine,
            FilterGroup::Spice => &mut self.spice,
            FilterGroup::Prep => &mut self.prep,
        }
    }

    pub fn value(&self, group: FilterGroup) -> &str {
        match group {
            FilterGroup::Calories => &self.calories,
            FilterGroup::Meal => &self.meal,
            FilterGroup::Cuisine => &self.cuisine,
            FilterGroup::Spice => &self.spice,
            FilterGroup::Prep => &self.prep,
        }
    }

    pub fn select(&mut self, group: FilterGroup, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(?group, %value, "filter selected");
        *self.slot_mut(group) = value;
    }

    pub fn is_active(&self, group: FilterGroup, value: &str) -> bool {
        self.value(group) == value
    }

    /// Flips membership of `value` and returns whether it is selected afterwards.
    pub fn toggle_category(&mut self, value: &str) -> bool {
        if let Some(pos) = self.categories.iter().position(|c| c == value) {
            self.categories.remove(pos);
            false
        } else {
            self.categories.push(value.to_string());
            true
        }
    }

    pub fn is_category_active(&self, value: &str) -> bool {
        self.categories.iter().any(|c| c == value)
    }

    /// Selected categories in the order they were switched on.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
