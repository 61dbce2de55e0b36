pub mod chat_history_route;
pub mod chat_request;
pub mod chat_response;
pub mod chat_route;
