pub mod app_state;
pub mod config;
pub mod enrich;
pub mod health;
pub mod llm;
pub mod reader;
pub mod store;
