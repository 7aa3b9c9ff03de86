//! Turns recommended dishes into display cards.

use std::fmt;

use shared::{domain::NON_VEG_TAG, protocol::FoodItem};

pub const FALLBACK_ICON: &str = "🍽️";
pub const TRENDING_LABEL: &str = "⭐ TRENDING";
pub const AVAILABILITY_LABEL: &str = "Available";
pub const CURRENCY_SYMBOL: &str = "৳";
/// Shown for any field the recommender left out.
pub const MISSING_VALUE: &str = "—";

const DISH_ICONS: &[(&str, &str)] = &[
    ("Beef Bhuna", "🍖"),
    ("Hilsa Fish Curry", "🐟"),
    ("Panta Bhat with Ilish", "🍚"),
    ("Dal Bhaji", "🥘"),
    ("Shorshe Ilish", "🐟"),
    ("Chicken Tikka Masala", "🍗"),
    ("Paneer Butter Masala", "🧈"),
    ("Biryani (Chicken)", "🍛"),
    ("Samosa (2 pcs)", "🥟"),
    ("Masala Dosa", "🫓"),
    ("Chicken Fried Rice", "🍚"),
    ("Sweet and Sour Chicken", "🍗"),
    ("Vegetable Spring Rolls", "🥢"),
    ("Szechuan Noodles", "🍜"),
    ("Pad Thai", "🍝"),
    ("Tom Yum Soup", "🍲"),
    ("Green Curry", "🍛"),
    ("Thai Basil Fried Rice", "🍚"),
    ("Grilled Chicken Steak", "🥩"),
    ("Caesar Salad", "🥗"),
    ("Spaghetti Carbonara", "🍝"),
    ("Beef Burger", "🍔"),
    ("Mushroom Soup", "🍄"),
    ("Fish and Chips", "🐟"),
    ("Vegetable Biryani", "🍛"),
    ("Prawn Malai Curry", "🦐"),
    ("Chicken Chow Mein", "🍜"),
    ("Mango Sticky Rice", "🥭"),
    ("Mushroom Risotto", "🍄"),
    ("Beef Kebab", "🍢"),
];

/// Icon for a dish by exact name.
pub fn dish_icon(name: &str) -> &'static str {
    DISH_ICONS
        .iter()
        .find(|(dish, _)| *dish == name)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

pub fn category_label(tag: &str) -> String {
    if tag == NON_VEG_TAG {
        "Non-Veg".to_string()
    } else {
        tag.replace('_', " ")
    }
}

/// Compact number formatting: `120.0` -> `120`, `12.5` -> `12.5`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn number_or_missing(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(value) => format!("{}{suffix}", format_number(value)),
        None => MISSING_VALUE.to_string(),
    }
}

fn text_or_missing(value: &str) -> String {
    if value.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        value.to_string()
    }
}

pub fn results_summary(count: usize) -> String {
    format!("Found {count} dishes matching your preferences")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub icon: &'static str,
    pub trending: bool,
    pub name: String,
    pub price: String,
    pub availability: &'static str,
    pub details: Vec<DetailRow>,
    pub badges: Vec<String>,
}

impl ResultCard {
    pub fn from_item(item: &FoodItem) -> Self {
        let row = |label, value: String| DetailRow { label, value };
        Self {
            icon: dish_icon(&item.name),
            trending: item.trending,
            name: item.name.clone(),
            price: match item.price {
                Some(price) => format!("{CURRENCY_SYMBOL}{}", format_number(price)),
                None => MISSING_VALUE.to_string(),
            },
            availability: AVAILABILITY_LABEL,
            details: vec![
                // Known defect carried from the web form: this row shows the calorie descriptor.
                row("Cuisine", text_or_missing(&item.calories)),
                row("Calories", text_or_missing(&item.calories)),
                row("Spice", text_or_missing(&item.spice)),
                row("Protein", number_or_missing(item.protein, "g")),
                row("Prep Time", text_or_missing(&item.prep)),
            ],
            badges: item.categories.iter().map(|c| category_label(c)).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"food-card\">\n");
        html.push_str("  <div class=\"food-header\">\n");
        html.push_str(&format!(
            "    <div class=\"food-emoji\">{}</div>\n",
            self.icon
        ));
        if self.trending {
            html.push_str(&format!(
                "    <div class=\"trending-badge\">{TRENDING_LABEL}</div>\n"
            ));
        }
        html.push_str("  </div>\n  <div class=\"food-body\">\n");
        html.push_str(&format!(
            "    <h3 class=\"food-name\">{}</h3>\n",
            escape_html(&self.name)
        ));
        html.push_str(&format!(
            "    <div class=\"price-availability\"><span class=\"food-price\">{}</span><span class=\"availability-badge\">{}</span></div>\n",
            escape_html(&self.price),
            self.availability
        ));
        html.push_str("    <div class=\"food-details\">\n");
        for detail in &self.details {
            html.push_str(&format!(
                "      <div class=\"detail-row\"><span class=\"detail-label\">{}:</span><span class=\"detail-value\">{}</span></div>\n",
                detail.label,
                escape_html(&detail.value)
            ));
        }
        html.push_str("    </div>\n    <div class=\"food-categories\">");
        for badge in &self.badges {
            html.push_str(&format!(
                "<span class=\"category-badge\">{}</span>",
                escape_html(badge)
            ));
        }
        html.push_str("</div>\n  </div>\n</div>\n");
        html
    }
}

impl fmt::Display for ResultCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)?;
        if self.trending {
            write!(f, "  [{TRENDING_LABEL}]")?;
        }
        writeln!(f)?;
        writeln!(f, "   {}  ({})", self.price, self.availability)?;
        for detail in &self.details {
            writeln!(f, "   {:<10} {}", format!("{}:", detail.label), detail.value)?;
        }
        if !self.badges.is_empty() {
            writeln!(f, "   [{}]", self.badges.join("] ["))?;
        }
        Ok(())
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The results container. Every render replaces the previous cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsGrid {
    cards: Vec<ResultCard>,
}

impl ResultsGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, items: &[FoodItem]) {
        self.cards.clear();
        self.cards.extend(items.iter().map(ResultCard::from_item));
    }

    pub fn cards(&self) -> &[ResultCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn summary(&self) -> String {
        results_summary(self.cards.len())
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"results-grid\">\n");
        for card in &self.cards {
            html.push_str(&card.to_html());
        }
        html.push_str("</div>\n");
        html
    }
}
