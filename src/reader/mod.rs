pub mod client;
pub mod errors;
pub mod types;

pub use client::ReaderClient;
pub use errors::ReaderError;
pub use types::FetchedPage;
