//! OpenAPI schema definitions for domain and library types.
//!
//! Neither the domain error nor `synthetic_records::PersonRecord` derives
//! `ToSchema`; the wrappers here describe them for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request failed validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "unsupported region: fr")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`synthetic_records::PersonRecord`].
#[derive(ToSchema)]
#[schema(as = synthetic_records::PersonRecord, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonRecordSchema {
    /// One-based position across all pages.
    #[schema(example = 21)]
    number: u64,
    /// Random identifier, not reproducible.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Person name, possibly containing typos.
    #[schema(example = "Ada Lovelace")]
    full_name: String,
    /// Regional address, possibly containing typos.
    #[schema(example = "12 Baker Street, Apt. 3, London, Kent 90210")]
    address: String,
    /// Regional phone number, possibly containing typos.
    #[schema(example = "+1 (555) 010-4477")]
    phone_number: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::PartialSchema;

    use super::*;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    #[case("invalid_request")]
    #[case("not_found")]
    #[case("internal_error")]
    fn error_code_schema_lists_variant(#[case] variant: &str) {
        assert!(schema_to_json::<ErrorCodeSchema>().contains(variant));
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(json.contains("traceId"), "schema should use camelCase: {json}");
    }

    #[rstest]
    #[case("number")]
    #[case("fullName")]
    #[case("phoneNumber")]
    fn person_record_schema_matches_json_body(#[case] field: &str) {
        let json = schema_to_json::<PersonRecordSchema>();
        assert!(json.contains(field), "missing {field} in {json}");
    }
}
