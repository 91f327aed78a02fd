//! Record page domain service.
//!
//! Implements the [`RecordPages`] driving port on top of the deterministic
//! generator. Each call builds its own seeded locale, so concurrent requests
//! never share pseudo-random state. Generation runs on tokio's blocking pool
//! because a page at the size and error ceilings is CPU-bound for long
//! enough to stall an HTTP worker.

use async_trait::async_trait;
use synthetic_records::{PageRequest, PersonRecord, generate_page, to_csv_bytes};
use tokio::task;
use tracing::{error, info};

use crate::domain::Error;
use crate::domain::ports::RecordPages;

/// Generator-backed implementation of [`RecordPages`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordPagesService;

impl RecordPagesService {
    async fn off_worker<T, F>(work: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        task::spawn_blocking(work).await.map_err(|err| {
            error!(error = %err, "record generation task failed");
            Error::internal(format!("record generation failed: {err}"))
        })
    }

    fn log_page(request: &PageRequest, records: usize) {
        info!(
            region = %request.region(),
            seed = request.seed(),
            errors = request.errors().value(),
            page = request.page(),
            limit = request.limit(),
            records,
            "generated record page"
        );
    }
}

#[async_trait]
impl RecordPages for RecordPagesService {
    async fn generate(&self, request: &PageRequest) -> Result<Vec<PersonRecord>, Error> {
        let owned = *request;
        let records = Self::off_worker(move || generate_page(&owned)).await?;
        Self::log_page(request, records.len());
        Ok(records)
    }

    async fn export_csv(&self, request: &PageRequest) -> Result<Vec<u8>, Error> {
        let owned = *request;
        let (count, bytes) = Self::off_worker(move || {
            let records = generate_page(&owned);
            (records.len(), to_csv_bytes(&records))
        })
        .await?;
        Self::log_page(request, count);
        bytes.map_err(|err| {
            error!(error = %err, "csv export failed");
            Error::internal(format!("csv export failed: {err}"))
        })
    }
}
