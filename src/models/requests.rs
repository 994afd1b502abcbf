use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{ContactInfo, NewListing, NewReview, PetProfile};

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Request to create a listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub description: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default, rename = "type")]
    pub category: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub allowed_pets: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

impl From<CreateListingRequest> for NewListing {
    fn from(req: CreateListingRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            description: req.description,
            category: req.category.trim().to_string(),
            location: req.location.trim().to_string(),
            allowed_pets: req.allowed_pets,
            amenities: req.amenities,
            photos: req.photos,
            contact_info: req.contact_info,
        }
    }
}

/// Request to add a review to a listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[serde(default)]
    pub user_id: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub user_name: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub comment: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(req: CreateReviewRequest) -> Self {
        let user_id = if req.user_id.trim().is_empty() {
            "anonymous".to_string()
        } else {
            req.user_id
        };

        Self {
            user_id,
            user_name: req.user_name.trim().to_string(),
            rating: req.rating,
            comment: req.comment,
        }
    }
}

/// Request body for pet analysis; absent fields take empty defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PetAnalysisRequest {
    #[validate(custom(function = "not_blank"))]
    pub pet_name: String,
    #[validate(custom(function = "not_blank"))]
    pub pet_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub breed: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temperament_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub special_needs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub activity_level: String,
}

/// Treats an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<PetAnalysisRequest> for PetProfile {
    fn from(req: PetAnalysisRequest) -> Self {
        Self {
            pet_name: req.pet_name,
            pet_type: req.pet_type,
            breed: req.breed,
            age: req.age,
            size: req.size,
            temperament_description: req.temperament_description,
            special_needs: req.special_needs,
            activity_level: req.activity_level,
        }
    }
}

/// Query string for venue recommendations; preferences travel in the body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsQuery {
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub pet_type: String,
    #[serde(default)]
    pub breed: String,
}

/// Query string for venue copy generation; allowed pets travel in the body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VenueDescriptionQuery {
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub venue_name: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub venue_type: String,
}
