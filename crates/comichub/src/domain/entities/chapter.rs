use chrono::NaiveDateTime;

/// A chapter of a comic.
///
/// `next` and `prev` hold the ids of the adjacent chapters by ascending
/// number within the same comic, when they exist.
#[derive(Debug, Clone, Default)]
pub struct Chapter {
    pub id: i64,
    pub comic_id: i64,
    pub number: f64,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub next: Option<i64>,
    pub prev: Option<i64>,
}
