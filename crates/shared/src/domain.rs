/// Sentinel value meaning "no preference" for a single-valued filter group.
pub const ANY: &str = "any";

/// Category tag the recommender uses for dishes containing meat.
pub const NON_VEG_TAG: &str = "non_veg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    Calories,
    Meal,
    Cuisine,
    Spice,
    Prep,
}

impl FilterGroup {
    pub const ALL: [FilterGroup; 5] = [
        FilterGroup::Calories,
        FilterGroup::Meal,
        FilterGroup::Cuisine,
        FilterGroup::Spice,
        FilterGroup::Prep,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterGroup::Calories => "Calorie level",
            FilterGroup::Meal => "Meal type",
            FilterGroup::Cuisine => "Cuisine",
            FilterGroup::Spice => "Spice level",
            FilterGroup::Prep => "Preparation time",
        }
    }

    /// Options offered for the group. The first entry is the default.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterGroup::Calories => &[ANY, "low", "medium", "high"],
            FilterGroup::Meal => &[ANY, "breakfast", "lunch", "dinner", "snack"],
            FilterGroup::Cuisine => &[
                ANY,
                "bangladeshi",
                "indian",
                "chinese",
                "thai",
                "continental",
            ],
            FilterGroup::Spice => &[ANY, "mild", "medium", "hot"],
            FilterGroup::Prep => &[ANY, "quick", "medium", "long"],
        }
    }

    pub fn default_value(self) -> &'static str {
        self.options()[0]
    }
}

pub const CATEGORY_OPTIONS: &[&str] = &[
    NON_VEG_TAG,
    "vegetarian",
    "seafood",
    "rice_based",
    "street_food",
    "healthy",
    "dessert",
];

/// Human readable label for an option value, e.g. `street_food` -> `Street food`.
pub fn option_label(value: &str) -> String {
    let spaced = value.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
