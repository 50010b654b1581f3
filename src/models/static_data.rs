use chrono::Datelike;

pub const MONTH_PLACEHOLDER: &str = "Month";
pub const DAY_PLACEHOLDER: &str = "Day";
pub const YEAR_PLACEHOLDER: &str = "Year";
pub const COUNTRY_PLACEHOLDER: &str = "Select country/region";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const OLDEST_BIRTH_YEAR: i32 = 1900;

/// `"1 - January"` .. `"12 - December"`.
pub fn months() -> Vec<String> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{} - {}", i + 1, name))
        .collect()
}

pub fn days() -> Vec<String> {
    (1..=31).map(|d| d.to_string()).collect()
}

/// Current year first, down to 1900.
pub fn years() -> Vec<String> {
    let current = chrono::Utc::now().year();
    (OLDEST_BIRTH_YEAR..=current)
        .rev()
        .map(|y| y.to_string())
        .collect()
}

pub const COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Czech Republic",
    "Denmark",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hong Kong",
    "India",
    "Indonesia",
    "Ireland",
    "Israel",
    "Italy",
    "Japan",
    "Malaysia",
    "Mexico",
    "Netherlands",
    "New Zealand",
    "Norway",
    "Philippines",
    "Poland",
    "Portugal",
    "Singapore",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Taiwan",
    "Thailand",
    "Turkey",
    "United Kingdom",
    "United States",
    "Vietnam",
];
