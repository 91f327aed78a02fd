//! Record generation endpoints.
//!
//! ```text
//! GET /generate?region=ru&seed=42&errors=1.5&page=2&limit=10
//! GET /export?region=de&seed=7
//! ```
//!
//! Both endpoints accept the same free-text parameters. Only the region is
//! validated strictly; other values fall back to their defaults.

use actix_web::{HttpResponse, get, http::header, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::RecordQuery;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PersonRecordSchema};
use crate::inbound::http::state::HttpState;

/// Content type of the CSV download.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
/// Attachment header value of the CSV download.
pub const CSV_DISPOSITION: &str = "attachment; filename=\"data.csv\"";

/// Query parameters shared by `/generate` and `/export`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecordParams {
    /// Region code: `en`, `ru` or `de`. Defaults to `en`.
    #[param(example = "ru")]
    pub region: Option<String>,
    /// Base seed; any integer. Defaults to `0`.
    #[param(example = "42")]
    pub seed: Option<String>,
    /// Expected typos per field, e.g. `1.5`. Defaults to `0`.
    #[param(example = "1.5")]
    pub errors: Option<String>,
    /// One-based page number. Defaults to `1`.
    #[param(example = "2")]
    pub page: Option<String>,
    /// Records per page. Defaults to `20`.
    #[param(example = "10")]
    pub limit: Option<String>,
}

impl From<RecordParams> for RecordQuery {
    fn from(params: RecordParams) -> Self {
        Self {
            region: params.region,
            seed: params.seed,
            errors: params.errors,
            page: params.page,
            limit: params.limit,
        }
    }
}

/// Generate one page of records as JSON.
#[utoipa::path(
    get,
    path = "/generate",
    params(RecordParams),
    responses(
        (status = 200, description = "Page of synthetic records", body = [PersonRecordSchema]),
        (status = 400, description = "Unsupported region", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "generateRecords"
)]
#[get("/generate")]
pub async fn generate_records(
    state: web::Data<HttpState>,
    params: web::Query<RecordParams>,
) -> ApiResult<HttpResponse> {
    let request = RecordQuery::from(params.into_inner()).resolve(&state.limits)?;
    let records = state.records.generate(&request).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Generate one page of records as a CSV attachment.
#[utoipa::path(
    get,
    path = "/export",
    params(RecordParams),
    responses(
        (
            status = 200,
            description = "CSV with a header row and one row per record",
            content_type = "text/csv",
            headers(("Content-Disposition" = String, description = "attachment; filename=\"data.csv\"")),
            body = String
        ),
        (status = 400, description = "Unsupported region", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "exportRecords"
)]
#[get("/export")]
pub async fn export_records(
    state: web::Data<HttpState>,
    params: web::Query<RecordParams>,
) -> ApiResult<HttpResponse> {
    let request = RecordQuery::from(params.into_inner()).resolve(&state.limits)?;
    let bytes = state.records.export_csv(&request).await?;
    Ok(HttpResponse::Ok()
        .content_type(CSV_CONTENT_TYPE)
        .insert_header((header::CONTENT_DISPOSITION, CSV_DISPOSITION))
        .body(bytes))
}
