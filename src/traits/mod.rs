pub mod ai_provider;
pub mod token_source;
