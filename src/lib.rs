//! Octopets - pet-friendly venue directory service
//!
//! Serves venue listings and reviews from an in-memory store, and wraps a
//! chat-completion provider to produce pet/venue compatibility analysis.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::Outcome;
pub use models::{Listing, PetAnalysis, PetProfile, Review};
pub use routes::{configure_routes, AppState};
pub use services::{CompletionClient, ListingStore, PetAnalysisGateway};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let probe = PetProfile::probe();
        assert_eq!(probe.pet_type, "Dog");
    }
}
