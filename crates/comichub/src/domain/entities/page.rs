/// A single page image inside a chapter.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub id: i64,
    pub chapter_id: i64,
    pub page_number: i64,
    pub image_url: String,
}
