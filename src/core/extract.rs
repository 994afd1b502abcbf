//! Decoding of provider replies into structured results, plus the fixed
//! fallback payloads used when a reply cannot be decoded.

use chrono::Utc;
use serde_json::Value;
use thiserror::Error;

use crate::models::PetAnalysis;

pub const DEFAULT_SUITABILITY_SCORE: &str = "5/10 - Unable to analyze";
pub const DEFAULT_BEHAVIOR_PREDICTION: &str = "Behavior prediction unavailable";
pub const DEFAULT_GENERAL_ADVICE: &str = "Consult with venue staff about pet policies";

pub const FALLBACK_SUITABILITY_SCORE: &str = "Unable to analyze - please try again later";

/// Errors raised while decoding a provider reply
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("reply is empty")]
    Empty,
}

/// Removes a surrounding Markdown code fence (```json ... ```), if any
pub fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") on the opening fence line
    match body.find('\n') {
        Some(idx) => body[idx + 1..].trim(),
        None => body.trim(),
    }
}

fn string_field(root: &Value, key: &str) -> Option<String> {
    root.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(root: &Value, key: &str) -> Vec<String> {
    root.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Decode a compatibility analysis reply.
///
/// Only an unparseable reply is an error. Every field is read on its own: a
/// missing or wrongly typed string takes its documented default, a missing or
/// wrongly typed list is empty, and non-string list items are dropped. A JSON
/// root that is not an object therefore decodes to all defaults.
pub fn parse_analysis(pet_name: &str, reply: &str) -> Result<PetAnalysis, DecodeError> {
    let root: Value = serde_json::from_str(strip_code_fence(reply))?;

    Ok(PetAnalysis {
        pet_name: pet_name.to_string(),
        suitability_score: string_field(&root, "suitabilityScore")
            .unwrap_or_else(|| DEFAULT_SUITABILITY_SCORE.to_string()),
        recommended_venue_types: string_list(&root, "recommendedVenueTypes"),
        venue_requirements: string_list(&root, "venueRequirements"),
        behavior_prediction: string_field(&root, "behaviorPrediction")
            .unwrap_or_else(|| DEFAULT_BEHAVIOR_PREDICTION.to_string()),
        safety_considerations: string_list(&root, "safetyConsiderations"),
        recommended_amenities: string_list(&root, "recommendedAmenities"),
        general_advice: string_field(&root, "generalAdvice")
            .unwrap_or_else(|| DEFAULT_GENERAL_ADVICE.to_string()),
        analysis_date: Utc::now(),
    })
}

/// Static analysis returned when the provider fails or its reply is unusable
pub fn fallback_analysis(pet_name: &str) -> PetAnalysis {
    PetAnalysis {
        pet_name: pet_name.to_string(),
        suitability_score: FALLBACK_SUITABILITY_SCORE.to_string(),
        recommended_venue_types: vec!["Contact venue directly for pet policy information".to_string()],
        venue_requirements: vec!["Verify pet-friendly status before visiting".to_string()],
        behavior_prediction: "Analysis unavailable".to_string(),
        safety_considerations: vec![
            "Always supervise your pet".to_string(),
            "Bring necessary supplies".to_string(),
        ],
        recommended_amenities: vec!["Water bowls".to_string(), "Pet waste stations".to_string()],
        general_advice: "Service temporarily unavailable. Please consult with venue staff about their pet policies."
            .to_string(),
        analysis_date: Utc::now(),
    }
}

/// Decode a venue recommendations reply (a JSON array of strings; `null` is empty)
pub fn parse_recommendations(reply: &str) -> Result<Vec<String>, DecodeError> {
    let parsed: Option<Vec<String>> = serde_json::from_str(strip_code_fence(reply))?;
    Ok(parsed.unwrap_or_default())
}

pub fn fallback_recommendations() -> Vec<String> {
    vec![
        "Dog parks".to_string(),
        "Pet-friendly cafes".to_string(),
        "Outdoor restaurants".to_string(),
    ]
}

/// Decode a venue description reply (free text, trimmed)
pub fn parse_description(reply: &str) -> Result<String, DecodeError> {
    let text = reply.trim();
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(text.to_string())
}

/// Templated description built from the inputs alone
pub fn fallback_description(venue_name: &str, allowed_pets: &[String]) -> String {
    format!(
        "{} welcomes {} and provides a comfortable environment for pets and their owners.",
        venue_name,
        allowed_pets.join(" and ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_reply_takes_defaults() {
        let reply = r#"{"suitabilityScore":"9/10","recommendedVenueTypes":["dog park"]}"#;
        let analysis = parse_analysis("Rex", reply).unwrap();

        assert_eq!(analysis.pet_name, "Rex");
        assert_eq!(analysis.suitability_score, "9/10");
        assert_eq!(analysis.recommended_venue_types, vec!["dog park"]);
        assert!(analysis.venue_requirements.is_empty());
        assert!(analysis.safety_considerations.is_empty());
        assert!(analysis.recommended_amenities.is_empty());
        assert_eq!(analysis.behavior_prediction, DEFAULT_BEHAVIOR_PREDICTION);
        assert_eq!(analysis.general_advice, DEFAULT_GENERAL_ADVICE);
    }

    #[test]
    fn test_wrong_types_are_tolerated() {
        let reply = r#"{
            "suitabilityScore": 8,
            "venueRequirements": "fenced yard",
            "safetyConsiderations": ["leash", 3, "", null, "water"],
            "behaviorPrediction": null
        }"#;
        let analysis = parse_analysis("Mia", reply).unwrap();

        assert_eq!(analysis.suitability_score, DEFAULT_SUITABILITY_SCORE);
        assert!(analysis.venue_requirements.is_empty());
        assert_eq!(analysis.safety_considerations, vec!["leash", "water"]);
        assert_eq!(analysis.behavior_prediction, DEFAULT_BEHAVIOR_PREDICTION);
    }

    #[test]
    fn test_non_object_root_yields_defaults() {
        let analysis = parse_analysis("Rex", "[1, 2, 3]").unwrap();
        assert_eq!(analysis.suitability_score, DEFAULT_SUITABILITY_SCORE);
        assert!(analysis.recommended_venue_types.is_empty());
    }

    #[test]
    fn test_plain_text_is_an_error() {
        assert!(matches!(
            parse_analysis("Rex", "Rex seems like a lovely dog!"),
            Err(DecodeError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_code_fence_is_stripped() {
        let reply = "```json\n{\"suitabilityScore\": \"7/10 - calm\"}\n```";
        let analysis = parse_analysis("Rex", reply).unwrap();
        assert_eq!(analysis.suitability_score, "7/10 - calm");

        assert_eq!(strip_code_fence("```[\"a\"]```"), "[\"a\"]");
        assert_eq!(strip_code_fence("  plain  "), "plain");
        assert_eq!(strip_code_fence("```unterminated"), "```unterminated");
    }

    #[test]
    fn test_fallback_analysis_payload() {
        let fallback = fallback_analysis("Rex");
        assert_eq!(fallback.pet_name, "Rex");
        assert_eq!(fallback.suitability_score, FALLBACK_SUITABILITY_SCORE);
        assert_eq!(
            fallback.safety_considerations,
            vec!["Always supervise your pet", "Bring necessary supplies"]
        );
        assert_eq!(fallback.recommended_amenities, vec!["Water bowls", "Pet waste stations"]);
    }

    #[test]
    fn test_recommendations() {
        assert_eq!(
            parse_recommendations(r#"["Dog beaches", "Hiking trails"]"#).unwrap(),
            vec!["Dog beaches", "Hiking trails"]
        );
        assert!(parse_recommendations("null").unwrap().is_empty());
        assert!(parse_recommendations(r#"{"venues": []}"#).is_err());
        assert!(parse_recommendations(r#"[1, 2]"#).is_err());
        assert_eq!(fallback_recommendations().len(), 3);
    }

    #[test]
    fn test_description() {
        assert_eq!(parse_description("  Cozy spot.\n").unwrap(), "Cozy spot.");
        assert!(matches!(parse_description("   "), Err(DecodeError::Empty)));

        let pets = vec!["dogs".to_string(), "cats".to_string()];
        assert_eq!(
            fallback_description("Paws Cafe", &pets),
            "Paws Cafe welcomes dogs and cats and provides a comfortable environment for pets and their owners."
        );
    }
}
