//! Domain types and services for record generation.
//!
//! Purpose: keep request interpretation, error payloads and the record
//! generation use-case free of HTTP concerns. Inbound adapters translate
//! transport input into these types and map [`Error`] back out.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - TraceId: request correlation identifier in task-local storage.
//! - RecordQuery / RecordLimits: lenient query parsing with ceilings.
//! - RecordPagesService: generator-backed implementation of the
//!   [`ports::RecordPages`] port.

pub mod error;
pub mod ports;
mod record_pages_service;
mod record_query;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::record_pages_service::RecordPagesService;
pub use self::record_query::{DEFAULT_LIMIT, DEFAULT_PAGE, RecordLimits, RecordQuery};
pub use self::trace_id::TraceId;
