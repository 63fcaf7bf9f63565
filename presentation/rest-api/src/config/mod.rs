pub mod app_config;
pub mod cors_config;
pub mod error;
pub mod openai_config;
pub mod server_config;
pub mod storage_config;
pub mod suggestion_config;
