// Core logic exports
pub mod extract;
pub mod outcome;
pub mod prompts;
pub mod rating;

pub use extract::DecodeError;
pub use outcome::Outcome;
pub use prompts::{CompletionRequest, Task};
pub use rating::mean_rating;
