pub mod chat;
pub mod engine_config;
pub mod search_result;
