use thiserror::Error;

use crate::domain::{
    entities::page::Page,
    repositories::page::{PageRepository, PageRepositoryError},
};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<PageRepositoryError> for PageError {
    fn from(e: PageRepositoryError) -> Self {
        match e {
            PageRepositoryError::DbError(e) => Self::Other(anyhow::anyhow!("{e}")),
        }
    }
}

pub struct PageService<R>
where
    R: PageRepository,
{
    repo: R,
}

impl<R> PageService<R>
where
    R: PageRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn fetch_pages_by_chapter_id(&self, chapter_id: i64) -> Result<Vec<Page>, PageError> {
        Ok(self.repo.get_pages_by_chapter_id(chapter_id).await?)
    }

    pub async fn create_pages(
        &self,
        chapter_id: i64,
        pages: &[Page],
    ) -> Result<Vec<Page>, PageError> {
        self.repo.insert_pages(pages).await?;

        Ok(self.repo.get_pages_by_chapter_id(chapter_id).await?)
    }

    pub async fn delete_page(&self, id: i64) -> Result<u64, PageError> {
        Ok(self.repo.delete_page_by_id(id).await?)
    }

    pub async fn count_pages(&self) -> Result<i64, PageError> {
        Ok(self.repo.count_pages().await?)
    }
}
