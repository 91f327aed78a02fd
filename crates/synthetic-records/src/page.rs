//! Page generation: seed once, then build `limit` records.

use crate::error::GenerationError;
use crate::locale::Locale;
use crate::noise::ErrorBudget;
use crate::record::{PersonRecord, generate_record};
use crate::region::Region;

/// Validated parameters for one page of records.
///
/// # Example
///
/// ```
/// use synthetic_records::{ErrorBudget, PageRequest, Region, generate_page};
///
/// let request = PageRequest::new(Region::En, 42, ErrorBudget::NONE, 1, 3).expect("valid");
/// let records = generate_page(&request);
///
/// assert_eq!(records.len(), 3);
/// assert_eq!(records.iter().map(|r| r.number).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    region: Region,
    seed: i64,
    errors: ErrorBudget,
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Validates and builds a page request.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidPage`] when `page` is zero and
    /// [`GenerationError::InvalidLimit`] when `limit` is zero.
    pub fn new(
        region: Region,
        seed: i64,
        errors: ErrorBudget,
        page: u32,
        limit: u32,
    ) -> Result<Self, GenerationError> {
        if page == 0 {
            return Err(GenerationError::InvalidPage { value: page });
        }
        if limit == 0 {
            return Err(GenerationError::InvalidLimit { value: limit });
        }
        Ok(Self {
            region,
            seed,
            errors,
            page,
            limit,
        })
    }

    /// Region to generate for.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Base seed supplied by the caller.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// Error budget applied to every field.
    #[must_use]
    pub const fn errors(&self) -> ErrorBudget {
        self.errors
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Records per page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Seed the locale is reset to: base seed plus page, wrapping.
    #[must_use]
    #[expect(
        clippy::cast_sign_loss,
        reason = "negative sums are reinterpreted bit-for-bit as seeds"
    )]
    pub fn effective_seed(&self) -> u64 {
        self.seed.wrapping_add(i64::from(self.page)) as u64
    }

    /// Zero-based index of the first record on this page.
    #[must_use]
    pub fn first_index(&self) -> u64 {
        u64::from(self.page - 1).saturating_mul(u64::from(self.limit))
    }
}

/// Generates the records for one page.
///
/// A fresh [`Locale`] is seeded with [`PageRequest::effective_seed`] and
/// drained synchronously, so concurrent requests never interleave their
/// pseudo-random sequences.
#[must_use]
pub fn generate_page(request: &PageRequest) -> Vec<PersonRecord> {
    let mut locale = Locale::new(request.region(), request.effective_seed());
    let first = request.first_index();
    (0..u64::from(request.limit()))
        .map(|offset| generate_record(&mut locale, request.errors(), first.saturating_add(offset)))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::fields::{generate_address, generate_full_name, generate_phone_number};

    fn request(region: Region, seed: i64, errors: f64, page: u32, limit: u32) -> PageRequest {
        let budget = ErrorBudget::new(errors).expect("budget");
        PageRequest::new(region, seed, budget, page, limit).expect("valid request")
    }

    fn strip_ids(records: &[PersonRecord]) -> Vec<PersonRecord> {
        records.iter().map(PersonRecord::without_id).collect()
    }

    #[test]
    fn rejects_page_zero() {
        let result = PageRequest::new(Region::En, 0, ErrorBudget::NONE, 0, 20);
        assert_eq!(result, Err(GenerationError::InvalidPage { value: 0 }));
    }

    #[test]
    fn rejects_limit_zero() {
        let result = PageRequest::new(Region::En, 0, ErrorBudget::NONE, 1, 0);
        assert_eq!(result, Err(GenerationError::InvalidLimit { value: 0 }));
    }

    #[rstest]
    #[case(42, 1, 43)]
    #[case(0, 3, 3)]
    #[case(-1, 1, 0)]
    #[case(-5, 1, u64::MAX - 3)]
    #[case(i64::MAX, 1, 1_u64 << 63)]
    fn effective_seed_adds_page(#[case] seed: i64, #[case] page: u32, #[case] expected: u64) {
        assert_eq!(request(Region::En, seed, 0.0, page, 1).effective_seed(), expected);
    }

    #[test]
    fn numbers_continue_across_pages() {
        let records = generate_page(&request(Region::En, 7, 0.0, 3, 4));
        let numbers: Vec<u64> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, [9, 10, 11, 12]);
    }

    #[rstest]
    #[case(Region::En)]
    #[case(Region::Ru)]
    #[case(Region::De)]
    fn generation_is_deterministic(#[case] region: Region) {
        let req = request(region, 42, 2.5, 2, 10);
        assert_eq!(strip_ids(&generate_page(&req)), strip_ids(&generate_page(&req)));
    }

    #[test]
    fn pages_differ_under_same_seed() {
        let first = generate_page(&request(Region::En, 42, 0.0, 1, 10));
        let second = generate_page(&request(Region::En, 42, 0.0, 2, 10));
        let first_names: Vec<&str> = first.iter().map(|r| r.full_name.as_str()).collect();
        let second_names: Vec<&str> = second.iter().map(|r| r.full_name.as_str()).collect();
        assert_ne!(first_names, second_names);
    }

    #[test]
    fn english_scenario_without_noise_matches_field_generators() {
        let records = generate_page(&request(Region::En, 42, 0.0, 1, 3));
        assert_eq!(records.len(), 3);

        let mut baseline = Locale::new(Region::En, 43);
        for (number, record) in (1_u64..).zip(records.iter()) {
            assert_eq!(record.number, number);
            assert_eq!(record.full_name, generate_full_name(&mut baseline));
            assert_eq!(record.address, generate_address(&mut baseline));
            assert_eq!(record.phone_number, generate_phone_number(&mut baseline));
            assert!(!record.full_name.is_empty());
            assert!(!record.address.is_empty());
            assert!(!record.phone_number.is_empty());
        }
    }

    #[test]
    fn russian_noise_is_reproducible() {
        let req = request(Region::Ru, 0, 1.5, 1, 1);
        let first = generate_page(&req);
        let second = generate_page(&req);

        assert_eq!(first.len(), 1);
        assert_eq!(strip_ids(&first), strip_ids(&second));
        assert_ne!(first.first().map(|r| r.id), second.first().map(|r| r.id));
    }

    #[test]
    fn russian_noise_usually_changes_the_name() {
        // A swap at the last position or of equal neighbours can be a no-op,
        // so the check is statistical rather than per seed.
        let mut changed = 0_u32;
        for seed in 0..100 {
            let records = generate_page(&request(Region::Ru, seed, 1.5, 1, 1));
            let clean_request = request(Region::Ru, seed, 0.0, 1, 1);
            let mut baseline = Locale::new(Region::Ru, clean_request.effective_seed());
            let clean = generate_full_name(&mut baseline);
            if records.first().is_some_and(|r| r.full_name != clean) {
                changed += 1;
            }
        }
        assert!(changed >= 85, "only {changed} of 100 names changed");
    }
}
