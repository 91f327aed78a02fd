//! English locale backed by the `fake` crate's `EN` data.

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, CountryName, StreetName, ZipCode};
use fake::faker::name::raw::Name;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand_chacha::ChaCha8Rng;

use super::{LocaleData, pick};

const LATIN: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const COUNTIES: &[&str] = &[
    "Avon",
    "Bedfordshire",
    "Berkshire",
    "Buckinghamshire",
    "Cambridgeshire",
    "Cheshire",
    "Cleveland",
    "Cornwall",
    "Cumbria",
    "Derbyshire",
    "Devon",
    "Dorset",
    "Durham",
    "East Sussex",
    "Essex",
    "Gloucestershire",
    "Hampshire",
    "Hertfordshire",
    "Kent",
    "Lancashire",
    "Leicestershire",
    "Lincolnshire",
    "Merseyside",
    "Norfolk",
    "North Yorkshire",
    "Northamptonshire",
    "Northumberland",
    "Nottinghamshire",
    "Oxfordshire",
    "Shropshire",
    "Somerset",
    "Staffordshire",
    "Suffolk",
    "Surrey",
    "Tyne and Wear",
    "Warwickshire",
    "West Midlands",
    "West Sussex",
    "West Yorkshire",
    "Wiltshire",
    "Worcestershire",
];

pub(super) struct English;

impl LocaleData for English {
    fn full_name(&self, rng: &mut ChaCha8Rng) -> String {
        Name(EN).fake_with_rng(rng)
    }

    fn building_number(&self, rng: &mut ChaCha8Rng) -> String {
        BuildingNumber(EN).fake_with_rng(rng)
    }

    fn street_name(&self, rng: &mut ChaCha8Rng) -> String {
        StreetName(EN).fake_with_rng(rng)
    }

    fn city(&self, rng: &mut ChaCha8Rng) -> String {
        CityName(EN).fake_with_rng(rng)
    }

    // `EN` only ships US states, so counties come from a local list.
    fn county(&self, rng: &mut ChaCha8Rng) -> String {
        pick(rng, COUNTIES)
    }

    fn zip_code(&self, rng: &mut ChaCha8Rng) -> String {
        ZipCode(EN).fake_with_rng(rng)
    }

    fn country(&self, rng: &mut ChaCha8Rng) -> String {
        CountryName(EN).fake_with_rng(rng)
    }

    fn phone_number(&self, rng: &mut ChaCha8Rng) -> String {
        PhoneNumber(EN).fake_with_rng(rng)
    }

    fn alphabet(&self) -> &'static [char] {
        LATIN
    }
}
