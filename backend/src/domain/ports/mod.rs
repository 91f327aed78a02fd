//! Driving ports exposed to inbound adapters.

mod record_pages;

#[cfg(test)]
pub use record_pages::MockRecordPages;
pub use record_pages::{FixtureRecordPages, RecordPages};
