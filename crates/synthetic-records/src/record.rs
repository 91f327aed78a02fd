//! Record builder composing one synthetic person.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fields::{generate_address, generate_full_name, generate_phone_number};
use crate::locale::Locale;
use crate::noise::{ErrorBudget, introduce_errors};

/// One synthetic person entry.
///
/// Serialises with camelCase keys: `number`, `id`, `fullName`, `address`,
/// `phoneNumber`.
///
/// # Example
///
/// ```
/// use synthetic_records::PersonRecord;
/// use uuid::Uuid;
///
/// let record = PersonRecord {
///     number: 1,
///     id: Uuid::nil(),
///     full_name: "Ada Lovelace".to_owned(),
///     address: "12, 12 Baker Street, London, Kent, 90210".to_owned(),
///     phone_number: "020 7946 0000".to_owned(),
/// };
///
/// assert_eq!(record.number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// One-based position of the record within the whole result set.
    pub number: u64,
    /// Random identifier; not derived from the seed.
    pub id: Uuid,
    /// Possibly noisy person name.
    pub full_name: String,
    /// Possibly noisy address.
    pub address: String,
    /// Possibly noisy phone number.
    pub phone_number: String,
}

impl PersonRecord {
    /// Returns a copy with the identifier cleared, for comparisons that must
    /// ignore the random id.
    #[must_use]
    pub fn without_id(&self) -> Self {
        Self {
            id: Uuid::nil(),
            ..self.clone()
        }
    }
}

/// Builds the record at zero-based `index`.
///
/// Fields are generated and noised in the order name, address, phone; each
/// rolls its own fractional extra edit. The identifier comes from operating
/// system randomness so it never disturbs the seeded sequence.
pub fn generate_record(locale: &mut Locale, budget: ErrorBudget, index: u64) -> PersonRecord {
    let raw_name = generate_full_name(locale);
    let full_name = introduce_errors(&raw_name, budget, locale);
    let raw_address = generate_address(locale);
    let address = introduce_errors(&raw_address, budget, locale);
    let raw_phone = generate_phone_number(locale);
    let phone_number = introduce_errors(&raw_phone, budget, locale);

    PersonRecord {
        number: index.saturating_add(1),
        id: Uuid::new_v4(),
        full_name,
        address,
        phone_number,
    }
}
