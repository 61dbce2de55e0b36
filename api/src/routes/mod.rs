pub mod chat;
pub mod docs;
pub mod health_route;
pub mod search;
pub mod suggestions_route;
