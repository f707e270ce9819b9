use async_graphql::SimpleObject;

use crate::domain::entities;

#[derive(Debug, Clone, SimpleObject)]
pub struct Page {
    pub id: i64,
    pub chapter_id: i64,
    pub page_number: i64,
    pub image_url: String,
}

impl From<entities::page::Page> for Page {
    fn from(val: entities::page::Page) -> Self {
        Self {
            id: val.id,
            chapter_id: val.chapter_id,
            page_number: val.page_number,
            image_url: val.image_url,
        }
    }
}
