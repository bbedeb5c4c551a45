pub mod ai_providers;
pub mod credential_configurator;
pub mod gcp_token_source;
