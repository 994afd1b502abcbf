//! Instruction builders for the three generation tasks.
//!
//! Each builder produces a complete [`CompletionRequest`]: a fixed system
//! instruction, a user instruction templated from the caller's input, and the
//! sampling parameters for that task.

use crate::models::PetProfile;

/// Generation task the gateway is asking the provider for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Compatibility,
    VenueRecommendations,
    VenueDescription,
}

impl Task {
    pub fn temperature(self) -> f32 {
        match self {
            Task::Compatibility => 0.7,
            Task::VenueRecommendations => 0.8,
            Task::VenueDescription => 0.9,
        }
    }

    pub fn max_tokens(self) -> u32 {
        match self {
            Task::Compatibility => 1000,
            Task::VenueRecommendations => 300,
            Task::VenueDescription => 200,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Task::Compatibility => "compatibility",
            Task::VenueRecommendations => "venue_recommendations",
            Task::VenueDescription => "venue_description",
        }
    }
}

/// A single chat-completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub task: Task,
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    fn for_task(task: Task, system: &str, user: String) -> Self {
        Self {
            task,
            system: system.to_string(),
            user,
            temperature: task.temperature(),
            max_tokens: task.max_tokens(),
        }
    }
}

const COMPATIBILITY_SYSTEM: &str = "You are a professional pet behavior analyst who assesses how well a pet will do in pet-friendly venues. \
Analyze the pet described by the user and give structured venue recommendations, focusing on safety, compatibility and the pet's specific needs.

Respond only with a JSON object containing:
- suitabilityScore: a score from 1-10 with a brief explanation, formatted like \"8/10 - reason\"
- recommendedVenueTypes: array of suitable venue types (e.g. \"dog park\", \"pet cafe\", \"outdoor restaurant\")
- venueRequirements: array of specific requirements the venue should meet
- behaviorPrediction: short prediction of how the pet will behave in social venues
- safetyConsiderations: array of safety concerns to keep in mind
- recommendedAmenities: array of amenities that would benefit this pet
- generalAdvice: general advice for the owner when visiting venues";

const RECOMMENDATIONS_SYSTEM: &str = "You are an expert in pet-friendly venues. Based on the pet type, breed and the owner's preferences, \
recommend specific kinds of venues that would suit them. Respond only with a JSON array of strings.";

const DESCRIPTION_SYSTEM: &str = "You are a marketing copywriter for pet-friendly venues. \
Write engaging, welcoming descriptions that highlight a venue's pet-friendly features.";

/// Joins tags for display, or "None" when there are none
fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

pub fn compatibility_prompt(profile: &PetProfile) -> CompletionRequest {
    let user = format!(
        "Pet Details:\n\
         Name: {}\n\
         Type: {}\n\
         Breed: {}\n\
         Age: {} years old\n\
         Size: {}\n\
         Temperament: {}\n\
         Special Needs: {}\n\
         Activity Level: {}",
        profile.pet_name,
        profile.pet_type,
        profile.breed,
        profile.age,
        profile.size,
        profile.temperament_description,
        join_or_none(&profile.special_needs),
        profile.activity_level,
    );

    CompletionRequest::for_task(Task::Compatibility, COMPATIBILITY_SYSTEM, user)
}

pub fn recommendations_prompt(pet_type: &str, breed: &str, preferences: &[String]) -> CompletionRequest {
    let user = format!(
        "Pet Type: {}\n\
         Breed: {}\n\
         Owner Preferences: {}\n\n\
         Provide an array of specific venue recommendations.",
        pet_type,
        breed,
        join_or_none(preferences),
    );

    CompletionRequest::for_task(Task::VenueRecommendations, RECOMMENDATIONS_SYSTEM, user)
}

pub fn description_prompt(venue_name: &str, venue_type: &str, allowed_pets: &[String]) -> CompletionRequest {
    let user = format!(
        "Venue Name: {}\n\
         Venue Type: {}\n\
         Allowed Pets: {}\n\n\
         Write a brief, engaging description (2-3 sentences) explaining why this venue is great for pet owners.",
        venue_name,
        venue_type,
        join_or_none(allowed_pets),
    );

    CompletionRequest::for_task(Task::VenueDescription, DESCRIPTION_SYSTEM, user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_prompt_carries_profile() {
        let profile = PetProfile {
            pet_name: "Rex".to_string(),
            pet_type: "Dog".to_string(),
            breed: "Labrador".to_string(),
            age: 3,
            size: "Large".to_string(),
            temperament_description: "Playful".to_string(),
            special_needs: vec!["hip dysplasia".to_string(), "anxious".to_string()],
            activity_level: "High".to_string(),
        };

        let req = compatibility_prompt(&profile);
        assert_eq!(req.task, Task::Compatibility);
        assert!(req.user.contains("Name: Rex"));
        assert!(req.user.contains("Age: 3 years old"));
        assert!(req.user.contains("Special Needs: hip dysplasia, anxious"));
        assert!(req.system.contains("suitabilityScore"));
        assert_eq!(req.temperature, 0.7);
        assert_eq!(req.max_tokens, 1000);
    }

    #[test]
    fn test_empty_lists_render_as_none() {
        let req = recommendations_prompt("Cat", "Siamese", &[]);
        assert!(req.user.contains("Owner Preferences: None"));
        assert_eq!(req.max_tokens, 300);
    }

    #[test]
    fn test_description_sampling() {
        let req = description_prompt("Bark Bistro", "cafe", &["dogs".to_string()]);
        assert_eq!(req.temperature, 0.9);
        assert_eq!(req.max_tokens, 200);
        assert!(req.user.contains("Allowed Pets: dogs"));
    }
}
