//! Lenient interpretation of record generation query parameters.
//!
//! Clients send every parameter as free text. Only the region is validated
//! strictly; malformed numbers fall back to their defaults so that a typo in
//! `page` still yields a page. Configured ceilings bound the work done per
//! request.

use serde_json::json;
use synthetic_records::{ErrorBudget, PageRequest, Region};
use tracing::debug;

use super::Error;

/// Records per page when `limit` is absent or unusable.
pub const DEFAULT_LIMIT: u32 = 20;
/// Page used when `page` is absent or unusable.
pub const DEFAULT_PAGE: u32 = 1;

/// Upper bounds applied to every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordLimits {
    max_limit: u32,
    max_errors: ErrorBudget,
}

impl RecordLimits {
    /// Builds limits, raising a zero `max_limit` to one and treating an
    /// invalid `max_errors` as zero.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::RecordLimits;
    ///
    /// let limits = RecordLimits::new(0, -3.0);
    /// assert_eq!(limits.max_limit(), 1);
    /// assert_eq!(limits.max_errors().value(), 0.0);
    /// ```
    #[must_use]
    pub fn new(max_limit: u32, max_errors: f64) -> Self {
        Self {
            max_limit: max_limit.max(1),
            max_errors: ErrorBudget::new(max_errors).unwrap_or_default(),
        }
    }

    /// Largest accepted `limit`.
    #[must_use]
    pub const fn max_limit(&self) -> u32 {
        self.max_limit
    }

    /// Largest accepted error budget.
    #[must_use]
    pub const fn max_errors(&self) -> ErrorBudget {
        self.max_errors
    }
}

impl Default for RecordLimits {
    fn default() -> Self {
        Self::new(1000, 1000.0)
    }
}

/// Raw query parameters as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    /// Region code, `en` when absent or blank.
    pub region: Option<String>,
    /// Base seed, `0` when absent or not an integer.
    pub seed: Option<String>,
    /// Error budget, `0` when absent, negative or not a number.
    pub errors: Option<String>,
    /// One-based page, `1` when absent, zero or not an integer.
    pub page: Option<String>,
    /// Records per page, `20` when absent, zero or not an integer.
    pub limit: Option<String>,
}

impl RecordQuery {
    /// Resolves the raw parameters into a validated [`PageRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::invalid_request`] with `{"field": "region", "value": …}`
    /// details when the region is not one of `en`, `ru` or `de`.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{RecordLimits, RecordQuery};
    /// use synthetic_records::Region;
    ///
    /// let query = RecordQuery {
    ///     region: Some("de".to_owned()),
    ///     seed: Some("42".to_owned()),
    ///     errors: Some("oops".to_owned()),
    ///     page: Some("0".to_owned()),
    ///     limit: Some("5000".to_owned()),
    /// };
    /// let request = query.resolve(&RecordLimits::default()).expect("valid region");
    ///
    /// assert_eq!(request.region(), Region::De);
    /// assert_eq!(request.seed(), 42);
    /// assert_eq!(request.page(), 1);
    /// assert_eq!(request.limit(), 1000);
    /// ```
    pub fn resolve(&self, limits: &RecordLimits) -> Result<PageRequest, Error> {
        let region = parse_region(self.region.as_deref())?;
        let seed = self.seed.as_deref().map_or(0, lenient_seed);
        let errors = self
            .errors
            .as_deref()
            .map_or(ErrorBudget::NONE, lenient_errors)
            .min(limits.max_errors());
        let page = self
            .page
            .as_deref()
            .map_or(DEFAULT_PAGE, |raw| lenient_positive(raw, "page", DEFAULT_PAGE));
        let limit = self
            .limit
            .as_deref()
            .map_or(DEFAULT_LIMIT, |raw| lenient_positive(raw, "limit", DEFAULT_LIMIT))
            .min(limits.max_limit());

        PageRequest::new(region, seed, errors, page, limit)
            .map_err(|err| Error::internal(format!("resolved request rejected: {err}")))
    }
}

fn parse_region(raw: Option<&str>) -> Result<Region, Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Region::default()),
        Some(value) => value.parse::<Region>().map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_details(json!({ "field": "region", "value": value }))
        }),
    }
}

fn lenient_seed(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or_else(|_| {
        debug!(field = "seed", value = raw, "unparsable seed, using 0");
        0
    })
}

fn lenient_errors(raw: &str) -> ErrorBudget {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(|value| ErrorBudget::new(value).ok())
        .unwrap_or_else(|| {
            debug!(field = "errors", value = raw, "unusable error budget, using 0");
            ErrorBudget::NONE
        })
}

fn lenient_positive(raw: &str, field: &'static str, fallback: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => {
            debug!(field, value = raw, fallback, "unusable value, using default");
            fallback
        }
    }
}
