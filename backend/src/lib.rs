//! Backend library modules for the synthetic record service.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
