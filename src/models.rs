use sea_orm::prelude::Date;
use serde::Deserialize;

/// Insert payload for `Catalog::create_movie`. Defaults mirror the column
/// defaults: empty tagline, zero money figures, not a draft, premiere today.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub tagline: String,
    pub description: String,
    /// Bare file name; stored under `movies/`.
    pub poster: String,
    pub year: i16,
    pub country: String,
    pub world_premiere: Date,
    pub budget: i64,
    pub box_office_us: i64,
    pub box_office_world: i64,
    pub category_id: Option<i32>,
    pub slug: String,
    pub draft: bool,
}

impl Default for NewMovie {
    fn default() -> Self {
        let today: jiff::civil::Date = jiff::Zoned::now().into();
        Self {
            title: String::new(),
            tagline: String::new(),
            description: String::new(),
            poster: String::new(),
            year: today.year(),
            country: String::new(),
            world_premiere: to_stored_date(today),
            budget: 0,
            box_office_us: 0,
            box_office_world: 0,
            category_id: None,
            slug: String::new(),
            draft: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub age: i16,
    pub description: String,
    /// Bare file name; stored under `actors/`.
    pub image: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewReview {
    pub email: String,
    pub name: String,
    pub text: String,
    pub parent_id: Option<i32>,
}

fn to_stored_date(date: jiff::civil::Date) -> Date {
    Date::from_ymd_opt(date.year().into(), date.month() as u32, date.day() as u32)
        .unwrap_or_default()
}
