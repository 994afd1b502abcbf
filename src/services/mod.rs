// Service exports
pub mod completion;
pub mod gateway;
pub mod seed;
pub mod store;

pub use completion::{CompletionClient, CompletionError, DemoCompletionClient, OpenAiClient};
pub use gateway::{GatewayError, PetAnalysisGateway, ProviderHealth};
pub use seed::seed_store;
pub use store::{ListingStore, StoreError};
