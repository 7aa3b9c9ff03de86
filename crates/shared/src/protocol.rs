use serde::{Deserialize, Serialize};

use crate::domain::ANY;

pub const DEFAULT_MIN_PRICE: u32 = 0;
pub const DEFAULT_MAX_PRICE: u32 = 10_000;

/// Body of `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRequest {
    pub min_price: u32,
    pub max_price: u32,
    pub calorie_level: String,
    pub meal_type: String,
    pub cuisine: String,
    pub categories: Vec<String>,
    pub spice_level: String,
    pub prep_time: String,
    pub vegetarian_only: bool,
}

impl Default for PreferenceRequest {
    fn default() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            calorie_level: ANY.to_string(),
            meal_type: ANY.to_string(),
            cuisine: ANY.to_string(),
            categories: Vec::new(),
            spice_level: ANY.to_string(),
            prep_time: ANY.to_string(),
            vegetarian_only: false,
        }
    }
}

/// One recommended dish. The shape is owned by the recommender, so every
/// field is optional on the wire and a partial item still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub spice: String,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub prep: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub trending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Absent means failure: the reply is shown as "no results".
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub recommendations: Vec<FoodItem>,
}

impl RecommendationResponse {
    /// True when the advertised count disagrees with the items actually sent.
    pub fn count_mismatch(&self) -> bool {
        self.count != self.recommendations.len() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = PreferenceRequest {
            categories: vec!["seafood".to_string()],
            vegetarian_only: true,
            ..PreferenceRequest::default()
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "minPrice": 0,
                "maxPrice": 10000,
                "calorieLevel": "any",
                "mealType": "any",
                "cuisine": "any",
                "categories": ["seafood"],
                "spiceLevel": "any",
                "prepTime": "any",
                "vegetarianOnly": true
            })
        );
    }

    #[test]
    fn response_tolerates_missing_optional_item_fields() {
        let raw = r#"{
            "success": true,
            "count": 1,
            "recommendations": [
                {"name": "Dal Bhaji", "price": 120, "calories": "low",
                 "spice": "mild", "protein": 9, "prep": "quick"}
            ]
        }"#;
        let response: RecommendationResponse = serde_json::from_str(raw).expect("decode");
        let item = &response.recommendations[0];
        assert!(item.categories.is_empty());
        assert!(!item.trending);
        assert_eq!(item.price, Some(120.0));
        assert!(!response.count_mismatch());
    }

    #[test]
    fn reply_without_success_flag_decodes_as_failure() {
        let response: RecommendationResponse =
            serde_json::from_str(r#"{"error":"no match"}"#).expect("decode");
        assert!(!response.success);
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn item_missing_descriptors_still_decodes() {
        let raw = r#"{"success": true, "count": 1,
            "recommendations": [{"name": "Pad Thai", "price": 220}]}"#;
        let response: RecommendationResponse = serde_json::from_str(raw).expect("decode");
        let item = &response.recommendations[0];
        assert_eq!(item.protein, None);
        assert_eq!(item.calories, "");
        assert_eq!(item.price, Some(220.0));
    }

    #[test]
    fn detects_count_mismatch() {
        let response = RecommendationResponse {
            success: true,
            count: 3,
            recommendations: Vec::new(),
        };
        assert!(response.count_mismatch());
    }
}
