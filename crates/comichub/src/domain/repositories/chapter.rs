use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::chapter::Chapter;

#[derive(Debug, Error)]
pub enum ChapterRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn get_chapter_by_id(&self, id: i64) -> Result<Chapter, ChapterRepositoryError>;

    async fn get_chapter_by_comic_id_number(
        &self,
        comic_id: i64,
        number: f64,
    ) -> Result<Chapter, ChapterRepositoryError>;

    /// Newest chapter first.
    async fn get_chapters_by_comic_id(
        &self,
        comic_id: i64,
    ) -> Result<Vec<Chapter>, ChapterRepositoryError>;

    async fn insert_chapter(&self, chapter: &mut Chapter) -> Result<(), ChapterRepositoryError>;

    async fn insert_chapters(&self, chapters: &[Chapter]) -> Result<(), ChapterRepositoryError>;

    async fn delete_chapter_by_id(&self, id: i64) -> Result<u64, ChapterRepositoryError>;

    async fn count_chapters(&self) -> Result<i64, ChapterRepositoryError>;
}
