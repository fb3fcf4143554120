//! Candidate buddies offered to finders.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Amount, BuddyId, StarRating};

/// A local service provider as listed in the recommendation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyRecommendation {
    pub id: BuddyId,
    pub name: String,
    pub city: String,
    pub specialization: String,
    pub rating: StarRating,
    #[serde(default)]
    pub reviews: u32,
    pub starting_price: Amount,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl BuddyRecommendation {
    pub fn is_in_city(&self, city: &str) -> bool {
        self.city.to_lowercase() == city.trim().to_lowercase()
    }

    /// Case-insensitive membership in the buddy's language set.
    pub fn speaks(&self, language: &str) -> bool {
        let wanted = language.trim().to_lowercase();
        self.languages.iter().any(|l| l.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rahul() -> BuddyRecommendation {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "Rahul Sharma",
            "city": "Delhi",
            "specialization": "Hauz Khas Expert",
            "rating": 4.9,
            "reviews": 127,
            "startingPrice": 2800,
            "languages": ["English", "Hindi"]
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_catalog_entry() {
        let buddy = rahul();
        assert_eq!(buddy.id.as_str(), "1");
        assert_eq!(buddy.starting_price, Amount::new(2800));
        assert_eq!(buddy.rating, StarRating::try_new(4.9).unwrap());
    }

    #[test]
    fn rejects_rating_above_five() {
        let result: Result<BuddyRecommendation, _> = serde_json::from_value(serde_json::json!({
            "id": "9",
            "name": "Too Good",
            "city": "Delhi",
            "specialization": "Everything",
            "rating": 5.5,
            "startingPrice": 100
        }));
        assert!(result.is_err());
    }

    #[test]
    fn city_and_language_match_ignore_case() {
        let buddy = rahul();
        assert!(buddy.is_in_city("delhi"));
        assert!(!buddy.is_in_city("Mumbai"));
        assert!(buddy.speaks("hindi"));
        assert!(!buddy.speaks("Tamil"));
    }
}
