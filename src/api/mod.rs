//! Dashboard API facade.
//!
//! Routes the JSON endpoints onto the record store and the insight
//! core, and maps core errors onto HTTP statuses. The router is
//! composable — `dashboard_router()` returns a `Router` that can be
//! mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::dashboard_router;
pub use types::ApiContext;
