//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the record port, so they stay testable without generating real data.

use std::sync::Arc;

use crate::domain::RecordLimits;
use crate::domain::ports::RecordPages;

/// Dependency bundle for the record handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Page generation and CSV export.
    pub records: Arc<dyn RecordPages>,
    /// Per-request ceilings applied while resolving queries.
    pub limits: RecordLimits,
}

impl HttpState {
    /// Bundle a record port with the configured limits.
    pub fn new(records: Arc<dyn RecordPages>, limits: RecordLimits) -> Self {
        Self { records, limits }
    }
}
