use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pet-friendly venue with its reviews
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: String,
    pub location: String,
    pub allowed_pets: Vec<String>,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
    /// Mean of `reviews[*].rating`, or 0 when there are none
    pub rating: f64,
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

/// A single user review owned by a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
}

/// Listing fields supplied by a caller; identity, rating and reviews are assigned by the store
#[derive(Debug, Clone)]
pub struct NewListing {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub allowed_pets: Vec<String>,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
    pub contact_info: ContactInfo,
}

/// Review fields supplied by a caller; identity and date are assigned by the store
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}

/// Structured pet description submitted for analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetProfile {
    pub pet_name: String,
    pub pet_type: String,
    pub breed: String,
    pub age: u32,
    /// Small, Medium or Large
    pub size: String,
    pub temperament_description: String,
    pub special_needs: Vec<String>,
    /// Low, Medium or High
    pub activity_level: String,
}

impl PetProfile {
    /// Synthetic pet used to probe the provider
    pub fn probe() -> Self {
        Self {
            pet_name: "Test".to_string(),
            pet_type: "Dog".to_string(),
            breed: "Test Breed".to_string(),
            age: 1,
            size: "Small".to_string(),
            temperament_description: "Friendly".to_string(),
            special_needs: vec![],
            activity_level: "Medium".to_string(),
        }
    }
}

/// Structured compatibility analysis for a pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetAnalysis {
    pub pet_name: String,
    pub suitability_score: String,
    pub recommended_venue_types: Vec<String>,
    pub venue_requirements: Vec<String>,
    pub behavior_prediction: String,
    pub safety_considerations: Vec<String>,
    pub recommended_amenities: Vec<String>,
    pub general_advice: String,
    pub analysis_date: chrono::DateTime<chrono::Utc>,
}
