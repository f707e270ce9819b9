use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::page::Page;

#[derive(Debug, Error)]
pub enum PageRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Pages in reading order.
    async fn get_pages_by_chapter_id(
        &self,
        chapter_id: i64,
    ) -> Result<Vec<Page>, PageRepositoryError>;

    async fn insert_pages(&self, pages: &[Page]) -> Result<(), PageRepositoryError>;

    async fn delete_page_by_id(&self, id: i64) -> Result<u64, PageRepositoryError>;

    async fn count_pages(&self) -> Result<i64, PageRepositoryError>;
}
