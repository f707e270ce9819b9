use async_graphql::{EmptySubscription, MergedObject, Schema, extensions::Logger};

use super::{
    catalogue::{CatalogueMutationRoot, CatalogueRoot},
    status::StatusRoot,
};
use crate::{
    domain::services::{chapter::ChapterService, comic::ComicService, page::PageService},
    infrastructure::domain::repositories::{
        chapter::ChapterRepositoryImpl, comic::ComicRepositoryImpl, page::PageRepositoryImpl,
    },
};

pub type ComicHubSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(CatalogueRoot, StatusRoot);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CatalogueMutationRoot);

pub fn build(
    comic_svc: ComicService<ComicRepositoryImpl>,
    chapter_svc: ChapterService<ChapterRepositoryImpl>,
    page_svc: PageService<PageRepositoryImpl>,
) -> ComicHubSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription::default(),
    )
    .extension(Logger)
    .data(comic_svc)
    .data(chapter_svc)
    .data(page_svc)
    .finish()
}
