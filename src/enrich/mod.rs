pub mod dtos;
pub mod errors;
pub mod fallback;
pub mod handlers;
pub mod pipeline;
pub mod prompt;
pub mod provider;

pub use dtos::{EnrichRequest, EnrichmentResult, SourceRef};
pub use errors::EnrichError;
pub use fallback::FallbackProvider;
pub use pipeline::LiveProvider;
pub use provider::{EnrichmentProvider, ProviderMode};
