//! Deterministic synthetic person records with locale-aware typo noise.
//!
//! Records are produced page by page from a region, a base seed and an error
//! budget. The same inputs always yield the same names, addresses and phone
//! numbers; only the per-record UUID is drawn from operating-system
//! randomness. The crate has no knowledge of HTTP and is shared by the
//! backend service and the `records-export` binary.
//!
//! # Overview
//!
//! - [`Locale`] wraps a seedable generator for the `en`, `ru` and `de`
//!   regions and exposes the primitive values records are built from.
//! - [`generate_full_name`], [`generate_address`] and
//!   [`generate_phone_number`] lay those primitives out per region.
//! - [`introduce_errors`] applies delete, insert and swap edits according to
//!   an [`ErrorBudget`].
//! - [`generate_page`] seeds a locale with `seed + page` and builds `limit`
//!   [`PersonRecord`]s with absolute numbering.
//! - [`to_csv_bytes`] renders records with the fixed [`CSV_HEADERS`].
//!
//! # Example
//!
//! ```
//! use synthetic_records::{ErrorBudget, PageRequest, Region, generate_page};
//!
//! let budget = ErrorBudget::new(1.5).expect("valid budget");
//! let request = PageRequest::new(Region::Ru, 42, budget, 2, 10).expect("valid request");
//!
//! let first = generate_page(&request);
//! let second = generate_page(&request);
//!
//! assert_eq!(first.len(), 10);
//! assert_eq!(first.first().map(|r| r.number), Some(11));
//! assert_eq!(
//!     first.iter().map(|r| &r.full_name).collect::<Vec<_>>(),
//!     second.iter().map(|r| &r.full_name).collect::<Vec<_>>(),
//! );
//! ```

mod atomic_io;
mod error;
mod export;
pub mod export_cli;
mod fields;
mod locale;
mod noise;
mod page;
mod record;
mod region;

pub use error::{ExportError, GenerationError};
pub use export::{CSV_HEADERS, to_csv_bytes, write_csv};
pub use fields::{generate_address, generate_full_name, generate_phone_number};
pub use locale::Locale;
pub use noise::{ErrorBudget, introduce_errors};
pub use page::{PageRequest, generate_page};
pub use record::{PersonRecord, generate_record};
pub use region::Region;
