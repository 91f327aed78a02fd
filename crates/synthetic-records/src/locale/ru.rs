//! Russian locale.
//!
//! `fake` has no Russian data, so the vocabularies live here. Surnames are
//! stored in the masculine form and given the feminine ending when paired with
//! a female first name.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{LocaleData, fill_digits, pick};

const CYRILLIC: &[char] = &[
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с',
    'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я', 'А', 'Б', 'В', 'Г', 'Д',
    'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц',
    'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

const MALE_FIRST_NAMES: &[&str] = &[
    "Александр",
    "Алексей",
    "Андрей",
    "Борис",
    "Вадим",
    "Василий",
    "Виктор",
    "Владимир",
    "Дмитрий",
    "Евгений",
    "Иван",
    "Игорь",
    "Кирилл",
    "Константин",
    "Максим",
    "Михаил",
    "Николай",
    "Олег",
    "Павел",
    "Пётр",
    "Роман",
    "Сергей",
    "Степан",
    "Юрий",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Алина",
    "Анастасия",
    "Анна",
    "Валентина",
    "Вера",
    "Галина",
    "Дарья",
    "Екатерина",
    "Елена",
    "Ирина",
    "Ксения",
    "Лариса",
    "Людмила",
    "Марина",
    "Мария",
    "Наталья",
    "Ольга",
    "Полина",
    "Светлана",
    "Софья",
    "Татьяна",
    "Юлия",
];

const SURNAMES: &[&str] = &[
    "Алексеев",
    "Андреев",
    "Белов",
    "Беляев",
    "Васильев",
    "Волков",
    "Голубев",
    "Григорьев",
    "Егоров",
    "Жуков",
    "Зайцев",
    "Иванов",
    "Ильин",
    "Калинин",
    "Киселёв",
    "Ковалёв",
    "Козлов",
    "Комаров",
    "Королёв",
    "Кузнецов",
    "Лебедев",
    "Макаров",
    "Медведев",
    "Морозов",
    "Никитин",
    "Новиков",
    "Орлов",
    "Павлов",
    "Петров",
    "Попов",
    "Семёнов",
    "Смирнов",
    "Соколов",
    "Соловьёв",
    "Степанов",
    "Фёдоров",
    "Фомин",
    "Фролов",
];

const CITIES: &[&str] = &[
    "Архангельск",
    "Барнаул",
    "Владивосток",
    "Владимир",
    "Волгоград",
    "Воронеж",
    "Екатеринбург",
    "Иркутск",
    "Казань",
    "Калининград",
    "Краснодар",
    "Красноярск",
    "Москва",
    "Мурманск",
    "Нижний Новгород",
    "Новосибирск",
    "Омск",
    "Пермь",
    "Псков",
    "Ростов-на-Дону",
    "Самара",
    "Санкт-Петербург",
    "Саратов",
    "Тверь",
    "Томск",
    "Тула",
    "Уфа",
    "Хабаровск",
    "Челябинск",
    "Ярославль",
];

const STREET_KINDS: &[&str] = &["ул.", "пр.", "пер.", "наб.", "бул.", "ш."];

const STREET_NAMES: &[&str] = &[
    "Гагарина",
    "Горького",
    "Заречная",
    "Зелёная",
    "Кирова",
    "Комсомольская",
    "Ленина",
    "Лесная",
    "Лермонтова",
    "Мира",
    "Молодёжная",
    "Набережная",
    "Новая",
    "Октябрьская",
    "Парковая",
    "Первомайская",
    "Пушкина",
    "Садовая",
    "Советская",
    "Строителей",
    "Центральная",
    "Чехова",
    "Школьная",
];

const REGIONS: &[&str] = &[
    "Амурская область",
    "Архангельская область",
    "Белгородская область",
    "Владимирская область",
    "Волгоградская область",
    "Воронежская область",
    "Иркутская область",
    "Калужская область",
    "Кемеровская область",
    "Краснодарский край",
    "Красноярский край",
    "Ленинградская область",
    "Московская область",
    "Новосибирская область",
    "Омская область",
    "Пермский край",
    "Приморский край",
    "Ростовская область",
    "Самарская область",
    "Свердловская область",
    "Тверская область",
    "Томская область",
    "Тульская область",
    "Ярославская область",
];

const COUNTRIES: &[&str] = &[
    "Австралия",
    "Австрия",
    "Аргентина",
    "Армения",
    "Беларусь",
    "Бельгия",
    "Болгария",
    "Бразилия",
    "Великобритания",
    "Венгрия",
    "Германия",
    "Греция",
    "Грузия",
    "Дания",
    "Египет",
    "Израиль",
    "Индия",
    "Испания",
    "Италия",
    "Казахстан",
    "Канада",
    "Китай",
    "Латвия",
    "Литва",
    "Мексика",
    "Нидерланды",
    "Норвегия",
    "Польша",
    "Португалия",
    "Россия",
    "Сербия",
    "США",
    "Турция",
    "Узбекистан",
    "Финляндия",
    "Франция",
    "Чехия",
    "Швейцария",
    "Швеция",
    "Эстония",
    "Япония",
];

const PHONE_FORMATS: &[&str] = &[
    "+7 (9##) ###-##-##",
    "8 (9##) ###-##-##",
    "+7 (4##) ###-##-##",
    "8-9##-###-##-##",
];

const BUILDING_MIN: u32 = 1;
const BUILDING_MAX: u32 = 199;

pub(super) struct Russian;

/// Gives a masculine `-ов`/`-ев`/`-ёв`/`-ин` surname its feminine ending.
fn feminine_surname(surname: &str) -> String {
    format!("{surname}а")
}

impl LocaleData for Russian {
    fn full_name(&self, rng: &mut ChaCha8Rng) -> String {
        let is_female = rng.random_bool(0.5);
        let first = if is_female {
            pick(rng, FEMALE_FIRST_NAMES)
        } else {
            pick(rng, MALE_FIRST_NAMES)
        };
        let masculine = pick(rng, SURNAMES);
        let last = if is_female {
            feminine_surname(&masculine)
        } else {
            masculine
        };
        format!("{first} {last}")
    }

    fn building_number(&self, rng: &mut ChaCha8Rng) -> String {
        rng.random_range(BUILDING_MIN..=BUILDING_MAX).to_string()
    }

    fn street_name(&self, rng: &mut ChaCha8Rng) -> String {
        let kind = pick(rng, STREET_KINDS);
        let name = pick(rng, STREET_NAMES);
        format!("{kind} {name}")
    }

    fn city(&self, rng: &mut ChaCha8Rng) -> String {
        pick(rng, CITIES)
    }

    fn county(&self, rng: &mut ChaCha8Rng) -> String {
        pick(rng, REGIONS)
    }

    fn zip_code(&self, rng: &mut ChaCha8Rng) -> String {
        fill_digits(rng, "######")
    }

    fn country(&self, rng: &mut ChaCha8Rng) -> String {
        pick(rng, COUNTRIES)
    }

    fn phone_number(&self, rng: &mut ChaCha8Rng) -> String {
        let format = pick(rng, PHONE_FORMATS);
        fill_digits(rng, &format)
    }

    fn alphabet(&self) -> &'static [char] {
        CYRILLIC
    }
}
