use std::time::Duration;

use chrono::NaiveDate;
use phf::{phf_map, Map};
use reqwest::blocking::Client;
use reqwest::Error as RequestError;

use crate::lexicon::Language;

/// Meal plan endpoint of the Studierendenwerk Bonn.
static MEALS_URL: &str = "https://www.studierendenwerk-bonn.de/index.php?eID=meals";

/// Canteens the upstream knows, with their opaque query ids.
static CANTEENS: Map<&'static str, &'static str> = phf_map! {
    "SanktAugustin" => "1",
    "CAMPO" => "2",
    "Hofgarten" => "3",
    "FoodtruckRheinbach" => "5",
    "VenusbergBistro" => "6",
    "CasinoZEF/ZEI" => "8",
    "Foodtruck" => "19",
};

pub fn canteen_id(name: &str) -> Option<&'static str> {
    CANTEENS.get(name).copied()
}

pub fn canteen_names() -> Vec<&'static str> {
    let mut names: Vec<_> = CANTEENS.keys().copied().collect();
    names.sort_unstable();
    names
}

pub fn make_client() -> Result<Client, RequestError> {
    Client::builder()
        .gzip(true)
        .timeout(Duration::from_secs(30))
        .build()
}

/// One form-encoded POST per invocation; the body comes back as rendered
/// HTML for the requested date, canteen and language.
pub fn fetch_meal_plan(
    client: &Client,
    date: NaiveDate,
    canteen_id: &str,
    language: Language,
) -> Result<String, RequestError> {
    let date = date.format("%Y-%m-%d").to_string();
    log::debug!(
        "querying {MEALS_URL} for date={date} canteen={canteen_id} lang={}",
        language.code()
    );
    let response = client
        .post(MEALS_URL)
        .form(&[
            ("date", date.as_str()),
            ("canteen", canteen_id),
            ("L", language.query_id()),
        ])
        .send()?;
    response.error_for_status()?.text()
}
