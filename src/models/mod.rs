// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ContactInfo, Listing, NewListing, NewReview, PetAnalysis, PetProfile, Review};
pub use requests::{
    CreateListingRequest, CreateReviewRequest, PetAnalysisRequest, RecommendationsQuery,
    VenueDescriptionQuery,
};
pub use responses::{
    AnalysisHealthResponse, DebugInfoResponse, ErrorResponse, HealthResponse,
    RecommendationsResponse, VenueDescriptionResponse,
};
