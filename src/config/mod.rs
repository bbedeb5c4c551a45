pub mod constants;
pub mod environment;
pub mod vertex_config;
