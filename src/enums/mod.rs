pub mod ai_provider_error;
