pub mod docs_response;
pub mod docs_route;
