//! German locale backed by the `fake` crate's `DE_DE` data.
//!
//! `DE_DE` has no German phone formats, so numbers are filled from the
//! landline and mobile patterns below.

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, CountryName, StreetName, ZipCode};
use fake::faker::name::raw::Name;
use fake::locales::DE_DE;
use rand_chacha::ChaCha8Rng;

use super::{LocaleData, fill_digits, pick};

const GERMAN_LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'ä', 'ö', 'ü', 'ß', 'Ä',
    'Ö', 'Ü',
];

const STATES: &[&str] = &[
    "Baden-Württemberg",
    "Bayern",
    "Berlin",
    "Brandenburg",
    "Bremen",
    "Hamburg",
    "Hessen",
    "Mecklenburg-Vorpommern",
    "Niedersachsen",
    "Nordrhein-Westfalen",
    "Rheinland-Pfalz",
    "Saarland",
    "Sachsen",
    "Sachsen-Anhalt",
    "Schleswig-Holstein",
    "Thüringen",
];

const PHONE_FORMATS: &[&str] = &[
    "+49 ## #######",
    "+49 ### ######",
    "0## ########",
    "0### #######",
    "+49 15# ########",
    "+49 17# #######",
    "015# ########",
    "017# #######",
];

pub(super) struct German;

impl LocaleData for German {
    fn full_name(&self, rng: &mut ChaCha8Rng) -> String {
        Name(DE_DE).fake_with_rng(rng)
    }

    fn building_number(&self, rng: &mut ChaCha8Rng) -> String {
        BuildingNumber(DE_DE).fake_with_rng(rng)
    }

    fn street_name(&self, rng: &mut ChaCha8Rng) -> String {
        StreetName(DE_DE).fake_with_rng(rng)
    }

    // German addresses put the house number after the street.
    fn street_address(&self, rng: &mut ChaCha8Rng) -> String {
        let street = self.street_name(rng);
        let building = self.building_number(rng);
        format!("{street} {building}")
    }

    fn city(&self, rng: &mut ChaCha8Rng) -> String {
        CityName(DE_DE).fake_with_rng(rng)
    }

    fn county(&self, rng: &mut ChaCha8Rng) -> String {
        pick(rng, STATES)
    }

    fn zip_code(&self, rng: &mut ChaCha8Rng) -> String {
        ZipCode(DE_DE).fake_with_rng(rng)
    }

    fn country(&self, rng: &mut ChaCha8Rng) -> String {
        CountryName(DE_DE).fake_with_rng(rng)
    }

    fn phone_number(&self, rng: &mut ChaCha8Rng) -> String {
        let format = pick(rng, PHONE_FORMATS);
        fill_digits(rng, &format)
    }

    fn alphabet(&self) -> &'static [char] {
        GERMAN_LETTERS
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn phone_numbers_use_german_prefixes() {
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        for _ in 0..50 {
            let phone = German.phone_number(&mut rng);
            assert!(
                phone.starts_with("+49 ") || phone.starts_with('0'),
                "unexpected phone {phone}"
            );
            assert!(!phone.contains('#') && !phone.contains('x'));
        }
    }

    #[test]
    fn street_address_puts_number_after_street() {
        let mut rng = ChaCha8Rng::seed_from_u64(44);
        let address = German.street_address(&mut rng);
        let last = address.rsplit(' ').next().unwrap_or_default();
        assert!(
            last.chars().next().is_some_and(|c| c.is_ascii_digit()),
            "unexpected address {address}"
        );
    }
}
