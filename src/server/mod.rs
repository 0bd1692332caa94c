//! HTTP server layer: application state, handlers, routing and the
//! public response shapes.

pub mod handlers;
pub mod response;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;
