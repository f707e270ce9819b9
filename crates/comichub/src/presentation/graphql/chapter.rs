use async_graphql::{Context, Object, Result};
use chrono::NaiveDateTime;
use rayon::prelude::*;

use super::{comic::Comic, page::Page};
use crate::{
    domain::{
        entities,
        services::{comic::ComicService, page::PageService},
    },
    infrastructure::domain::repositories::{
        comic::ComicRepositoryImpl, page::PageRepositoryImpl,
    },
};

/// A type represent a chapter of a comic
#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: i64,
    pub comic_id: i64,
    pub number: f64,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub next: Option<i64>,
    pub prev: Option<i64>,
}

impl From<entities::chapter::Chapter> for Chapter {
    fn from(val: entities::chapter::Chapter) -> Self {
        Self {
            id: val.id,
            comic_id: val.comic_id,
            number: val.number,
            title: val.title,
            created_at: val.created_at,
            next: val.next,
            prev: val.prev,
        }
    }
}

#[Object]
impl Chapter {
    async fn id(&self) -> i64 {
        self.id
    }

    async fn number(&self) -> f64 {
        self.number
    }

    async fn title(&self) -> String {
        self.title.clone()
    }

    async fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    async fn prev(&self) -> Option<i64> {
        self.prev
    }

    async fn next(&self) -> Option<i64> {
        self.next
    }

    async fn comic(&self, ctx: &Context<'_>) -> Result<Comic> {
        let comic = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .fetch_comic_by_id(self.comic_id)
            .await?
            .into();

        Ok(comic)
    }

    async fn pages(&self, ctx: &Context<'_>) -> Result<Vec<Page>> {
        let pages = ctx
            .data::<PageService<PageRepositoryImpl>>()?
            .fetch_pages_by_chapter_id(self.id)
            .await?
            .into_par_iter()
            .map(Into::into)
            .collect();

        Ok(pages)
    }
}
