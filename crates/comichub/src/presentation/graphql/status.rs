use async_graphql::{Context, Object, Result, SimpleObject};

use crate::{
    domain::services::{chapter::ChapterService, comic::ComicService, page::PageService},
    infrastructure::domain::repositories::{
        chapter::ChapterRepositoryImpl, comic::ComicRepositoryImpl, page::PageRepositoryImpl,
    },
};

#[derive(Debug, SimpleObject)]
struct Status {
    version: String,
}

#[derive(Debug, SimpleObject)]
struct CatalogStats {
    comics: i64,
    chapters: i64,
    pages: i64,
}

#[derive(Default)]
pub struct StatusRoot;

#[Object]
impl StatusRoot {
    async fn server_status(&self) -> Status {
        Status {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    async fn catalog_stats(&self, ctx: &Context<'_>) -> Result<CatalogStats> {
        let comics = ctx
            .data::<ComicService<ComicRepositoryImpl>>()?
            .count_comics()
            .await?;
        let chapters = ctx
            .data::<ChapterService<ChapterRepositoryImpl>>()?
            .count_chapters()
            .await?;
        let pages = ctx
            .data::<PageService<PageRepositoryImpl>>()?
            .count_pages()
            .await?;

        Ok(CatalogStats {
            comics,
            chapters,
            pages,
        })
    }
}
