//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the record and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], so domain types
//! stay free of utoipa derives. The document backs Swagger UI in debug builds
//! and is printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, PersonRecordSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Synthetic records API",
        description = "Reproducible pages of fake person records with optional typo noise."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::records::generate_records,
        crate::inbound::http::records::export_records,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(PersonRecordSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "records", description = "Synthetic record generation and export"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema fields.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const RECORD_SCHEMA_NAME: &str = "synthetic_records.PersonRecord";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/generate")]
    #[case("/export")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn path_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "message")]
    #[case(RECORD_SCHEMA_NAME, "fullName")]
    #[case(RECORD_SCHEMA_NAME, "phoneNumber")]
    fn schema_has_field(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("registered schema");

        assert_object_schema_has_field(schema, field);
    }

    #[test]
    fn generate_documents_every_query_parameter() {
        let json = ApiDoc::openapi().to_json().expect("openapi json");
        for param in ["region", "seed", "errors", "page", "limit"] {
            assert!(json.contains(&format!("\"name\":\"{param}\"")), "missing {param}");
        }
    }
}
