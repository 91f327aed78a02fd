//! Supported generation regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Locale selector for names, address layout, phone format and typo alphabet.
///
/// # Example
///
/// ```
/// use synthetic_records::Region;
///
/// let region: Region = " RU ".parse().expect("supported region");
/// assert_eq!(region, Region::Ru);
/// assert_eq!(region.as_str(), "ru");
/// assert!("fr".parse::<Region>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// English (United Kingdom flavoured).
    #[default]
    En,
    /// Russian.
    Ru,
    /// German.
    De,
}

impl Region {
    /// Every supported region, in canonical order.
    pub const ALL: [Self; 3] = [Self::En, Self::Ru, Self::De];

    /// Lower-case region code used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::De => "de",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(normalised))
            .ok_or_else(|| GenerationError::UnsupportedRegion {
                value: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en", Region::En)]
    #[case("ru", Region::Ru)]
    #[case("de", Region::De)]
    #[case("DE", Region::De)]
    #[case("  en\t", Region::En)]
    fn parses_supported_regions(#[case] input: &str, #[case] expected: Region) {
        assert_eq!(input.parse::<Region>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("fr")]
    #[case("en_GB")]
    fn rejects_unknown_regions(#[case] input: &str) {
        assert_eq!(
            input.parse::<Region>(),
            Err(GenerationError::UnsupportedRegion {
                value: input.to_owned()
            })
        );
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(Region::default(), Region::En);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Region::Ru).expect("serialize");
        assert_eq!(json, "\"ru\"");
    }
}
