use async_graphql::{Context, Enum, Object, Result};
use chrono::NaiveDateTime;
use rayon::prelude::*;

use super::chapter::Chapter;
use crate::{
    domain::{entities, services::chapter::ChapterService},
    infrastructure::domain::repositories::chapter::ChapterRepositoryImpl,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum ComicStatus {
    Ongoing,
    Completed,
}

impl From<entities::comic::ComicStatus> for ComicStatus {
    fn from(status: entities::comic::ComicStatus) -> Self {
        match status {
            entities::comic::ComicStatus::Ongoing => Self::Ongoing,
            entities::comic::ComicStatus::Completed => Self::Completed,
        }
    }
}

impl From<ComicStatus> for entities::comic::ComicStatus {
    fn from(status: ComicStatus) -> Self {
        match status {
            ComicStatus::Ongoing => Self::Ongoing,
            ComicStatus::Completed => Self::Completed,
        }
    }
}

/// A type represent a comic series in the catalog
#[derive(Debug, Clone)]
pub struct Comic {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub status: ComicStatus,
    pub cover_url: String,
    pub genres: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entities::comic::Comic> for Comic {
    fn from(val: entities::comic::Comic) -> Self {
        Self {
            id: val.id,
            slug: val.slug,
            title: val.title,
            author: val.author,
            synopsis: val.synopsis,
            status: val.status.into(),
            cover_url: val.cover_url,
            genres: val.genres,
            created_at: val.created_at,
            updated_at: val.updated_at,
        }
    }
}

#[Object]
impl Comic {
    async fn id(&self) -> i64 {
        self.id
    }

    async fn slug(&self) -> String {
        self.slug.clone()
    }

    async fn title(&self) -> String {
        self.title.clone()
    }

    async fn author(&self) -> String {
        self.author.clone()
    }

    async fn synopsis(&self) -> String {
        self.synopsis.clone()
    }

    async fn status(&self) -> ComicStatus {
        self.status
    }

    async fn cover_url(&self) -> String {
        self.cover_url.clone()
    }

    async fn genres(&self) -> Vec<String> {
        self.genres.clone()
    }

    async fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    async fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    async fn chapters(&self, ctx: &Context<'_>) -> Result<Vec<Chapter>> {
        let chapters = ctx
            .data::<ChapterService<ChapterRepositoryImpl>>()?
            .fetch_chapters_by_comic_id(self.id)
            .await?
            .into_par_iter()
            .map(Into::into)
            .collect();

        Ok(chapters)
    }

    async fn chapter(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "chapter number")] number: f64,
    ) -> Result<Chapter> {
        let chapter = ctx
            .data::<ChapterService<ChapterRepositoryImpl>>()?
            .fetch_chapter_by_number(self.id, number)
            .await?
            .into();

        Ok(chapter)
    }
}
