//! Field generators producing the three textual record fields.
//!
//! Address layout is a per-region contract:
//!
//! | Region | Layout |
//! |---|---|
//! | `en` | building, street address, city, county, zip |
//! | `ru` | country, city, street, building |
//! | `de` | street address, building, city |

use crate::locale::Locale;
use crate::region::Region;

const SEPARATOR: &str = ", ";

/// Generates a person name for the locale's region.
pub fn generate_full_name(locale: &mut Locale) -> String {
    locale.full_name()
}

/// Generates an address string in the locale's regional layout.
///
/// # Example
///
/// ```
/// use synthetic_records::{Locale, Region, generate_address};
///
/// let mut locale = Locale::new(Region::Ru, 42);
/// let address = generate_address(&mut locale);
///
/// assert_eq!(address.split(", ").count(), 4);
/// ```
pub fn generate_address(locale: &mut Locale) -> String {
    let parts = match locale.region() {
        Region::En => vec![
            locale.building_number(),
            locale.street_address(),
            locale.city(),
            locale.county(),
            locale.zip_code(),
        ],
        Region::Ru => vec![
            locale.country(),
            locale.city(),
            locale.street_name(),
            locale.building_number(),
        ],
        Region::De => vec![
            locale.street_address(),
            locale.building_number(),
            locale.city(),
        ],
    };
    parts.join(SEPARATOR)
}

/// Generates a phone number in the locale's format.
pub fn generate_phone_number(locale: &mut Locale) -> String {
    locale.phone_number()
}
