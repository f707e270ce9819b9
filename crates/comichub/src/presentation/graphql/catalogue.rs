use async_graphql::{Context, Enum, InputObject, Object, Result, SimpleObject};
use rayon::prelude::*;

use super::{
    chapter::Chapter,
    comic::{Comic, ComicStatus},
    page::Page,
};
use crate::{
    domain::{
        entities,
        services::{
            chapter::ChapterService,
            comic::ComicService,
            listing::{self, ListingQuery},
            page::PageService,
        },
    },
    infrastructure::domain::repositories::{
        chapter::ChapterRepositoryImpl, comic::ComicRepositoryImpl, page::PageRepositoryImpl,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Enum)]
pub enum SortKey {
    #[default]
    UpdatedAt,
    CreatedAt,
    Title,
    Author,
}

impl From<SortKey> for listing::SortKey {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::UpdatedAt => Self::UpdatedAt,
            SortKey::CreatedAt => Self::CreatedAt,
            SortKey::Title => Self::Title,
            SortKey::Author => Self::Author,
        }
    }
}

#[derive(Debug, SimpleObject)]
pub struct ComicsPage {
    pub items: Vec<Comic>,
    pub total_matched: i64,
    pub total_pages: i64,
}

#[derive(Default)]
pub struct CatalogueRoot;

#[Object]
impl CatalogueRoot {
    async fn comics(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "match against title or author")] search: Option<String>,
        #[graphql(desc = "genre, omit or \"all\" to match every genre")] genre: Option<String>,
        #[graphql(desc = "publication status")] status: Option<ComicStatus>,
        #[graphql(desc = "sort key", default)] sort_by: SortKey,
        #[graphql(desc = "page, starts at 1", default = 1)] page: i64,
        #[graphql(desc = "items per page", default = 20)] page_size: i64,
    ) -> Result<ComicsPage> {
        let query = ListingQuery {
            search_text: search,
            genre,
            status: status.map(Into::into),
            sort_key: sort_by.into(),
            page,
            page_size,
        };

        let listed = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .list_comics(&query)
            .await?;

        Ok(ComicsPage {
            items: listed.items.into_par_iter().map(Into::into).collect(),
            total_matched: listed.total_matched,
            total_pages: listed.total_pages,
        })
    }

    async fn comic(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "comic slug")] slug: String,
    ) -> Result<Comic> {
        let comic = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .fetch_comic_by_slug(&slug)
            .await?
            .into();

        Ok(comic)
    }

    async fn latest_comics(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "number of comics", default = 8)] limit: i64,
    ) -> Result<Vec<Comic>> {
        let comics = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .fetch_latest_comics(limit)
            .await?
            .into_par_iter()
            .map(Into::into)
            .collect();

        Ok(comics)
    }

    async fn popular_comics(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "number of comics", default = 6)] limit: i64,
    ) -> Result<Vec<Comic>> {
        let comics = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .fetch_popular_comics(limit)
            .await?
            .into_par_iter()
            .map(Into::into)
            .collect();

        Ok(comics)
    }

    async fn search_comics(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "text to match against title, author or synopsis")] query: String,
        #[graphql(desc = "number of comics", default = 10)] limit: i64,
    ) -> Result<Vec<Comic>> {
        let comics = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .search_comics(&query, limit)
            .await?
            .into_par_iter()
            .map(Into::into)
            .collect();

        Ok(comics)
    }

    async fn chapter(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "chapter id")] id: i64,
    ) -> Result<Chapter> {
        let chapter = ctx
            .data::<ChapterService<ChapterRepositoryImpl>>()?
            .fetch_chapter_by_id(id)
            .await?
            .into();

        Ok(chapter)
    }
}

#[derive(Debug, InputObject)]
pub struct ComicInput {
    pub slug: String,
    pub title: String,
    pub author: String,
    #[graphql(default)]
    pub synopsis: String,
    pub status: ComicStatus,
    #[graphql(default)]
    pub cover_url: String,
    #[graphql(default)]
    pub genres: Vec<String>,
}

impl ComicInput {
    fn into_entity(self, id: i64) -> entities::comic::Comic {
        entities::comic::Comic {
            id,
            slug: self.slug,
            title: self.title,
            author: self.author,
            synopsis: self.synopsis,
            status: self.status.into(),
            cover_url: self.cover_url,
            genres: self.genres,
            ..Default::default()
        }
    }
}

#[derive(Debug, InputObject)]
pub struct ChapterInput {
    pub comic_id: i64,
    pub number: f64,
    #[graphql(default)]
    pub title: String,
}

#[derive(Debug, InputObject)]
pub struct PageInput {
    pub page_number: i64,
    pub image_url: String,
}

#[derive(Default)]
pub struct CatalogueMutationRoot;

#[Object]
impl CatalogueMutationRoot {
    async fn create_comic(&self, ctx: &Context<'_>, input: ComicInput) -> Result<Comic> {
        let comic = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .create_comic(input.into_entity(0))
            .await?
            .into();

        Ok(comic)
    }

    async fn update_comic(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "comic id")] id: i64,
        input: ComicInput,
    ) -> Result<Comic> {
        let comic = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .update_comic(&input.into_entity(id))
            .await?
            .into();

        Ok(comic)
    }

    async fn delete_comic(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "comic id")] id: i64,
    ) -> Result<u64> {
        let rows_affected = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .delete_comic(id)
            .await?;

        Ok(rows_affected)
    }

    async fn create_chapter(&self, ctx: &Context<'_>, input: ChapterInput) -> Result<Chapter> {
        let chapter = ctx
            .data::<ChapterService<ChapterRepositoryImpl>>()?
            .create_chapter(entities::chapter::Chapter {
                comic_id: input.comic_id,
                number: input.number,
                title: input.title,
                ..Default::default()
            })
            .await?
            .into();

        Ok(chapter)
    }

    async fn delete_chapter(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "chapter id")] id: i64,
    ) -> Result<u64> {
        let rows_affected = ctx
            .data::<ChapterService<ChapterRepositoryImpl>>()?
            .delete_chapter(id)
            .await?;

        Ok(rows_affected)
    }

    async fn create_pages(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "chapter id")] chapter_id: i64,
        pages: Vec<PageInput>,
    ) -> Result<Vec<Page>> {
        let pages: Vec<entities::page::Page> = pages
            .into_iter()
            .map(|page| entities::page::Page {
                chapter_id,
                page_number: page.page_number,
                image_url: page.image_url,
                ..Default::default()
            })
            .collect();

        let inserted = ctx
            .data::<PageService<PageRepositoryImpl>>()?
            .create_pages(chapter_id, &pages)
            .await?
            .into_par_iter()
            .map(Into::into)
            .collect();

        Ok(inserted)
    }

    async fn delete_page(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "page id")] id: i64,
    ) -> Result<u64> {
        let rows_affected = ctx
            .data::<PageService<PageRepositoryImpl>>()?
            .delete_page(id)
            .await?;

        Ok(rows_affected)
    }
}
