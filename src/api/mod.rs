//! HTTP API module for status, repair bay, phase lookup and service endpoints.

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::AppState;
pub use openapi::ApiDoc;
pub use routes::create_router;
