//! Driving port for producing pages of synthetic records.
//!
//! HTTP handlers depend on this port rather than on the generator crate so
//! that failure paths (for example a CSV serialisation error) can be
//! exercised with test doubles.

use async_trait::async_trait;
use synthetic_records::{PageRequest, PersonRecord};
use uuid::Uuid;

use crate::domain::Error;

/// Use-case port for generating and exporting record pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordPages: Send + Sync {
    /// Generate the records for `request`.
    async fn generate(&self, request: &PageRequest) -> Result<Vec<PersonRecord>, Error>;

    /// Generate the records for `request` and render them as CSV bytes.
    async fn export_csv(&self, request: &PageRequest) -> Result<Vec<u8>, Error>;
}

/// Fixture port returning one fixed record per requested row.
///
/// Numbers follow the request's page and limit; every other field is a
/// constant so assertions stay simple.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecordPages;

impl FixtureRecordPages {
    fn records(request: &PageRequest) -> Vec<PersonRecord> {
        let first = request.first_index();
        (1..=u64::from(request.limit()))
            .map(|offset| PersonRecord {
                number: first.saturating_add(offset),
                id: Uuid::nil(),
                full_name: "Ada Lovelace".to_owned(),
                address: "12, Marylebone Road, London, Greater London, NW1 5LR".to_owned(),
                phone_number: "020 7946 0018".to_owned(),
            })
            .collect()
    }
}

#[async_trait]
impl RecordPages for FixtureRecordPages {
    async fn generate(&self, request: &PageRequest) -> Result<Vec<PersonRecord>, Error> {
        Ok(Self::records(request))
    }

    async fn export_csv(&self, request: &PageRequest) -> Result<Vec<u8>, Error> {
        synthetic_records::to_csv_bytes(&Self::records(request))
            .map_err(|err| Error::internal(format!("fixture export failed: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use synthetic_records::{ErrorBudget, Region};

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_numbers_follow_the_page() {
        let request =
            PageRequest::new(Region::En, 0, ErrorBudget::NONE, 3, 2).expect("valid request");

        let records = FixtureRecordPages
            .generate(&request)
            .await
            .expect("fixture records");

        let numbers: Vec<u64> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, [5, 6]);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_export_has_header_and_rows() {
        let request =
            PageRequest::new(Region::De, 0, ErrorBudget::NONE, 1, 3).expect("valid request");

        let bytes = FixtureRecordPages
            .export_csv(&request)
            .await
            .expect("fixture csv");

        let text = String::from_utf8(bytes).expect("utf-8");
        assert_eq!(text.lines().count(), 4);
    }
}
