use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::comic::Comic;

#[derive(Debug, Error)]
pub enum ComicRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

#[async_trait]
pub trait ComicRepository: Send + Sync {
    async fn get_all_comics(&self) -> Result<Vec<Comic>, ComicRepositoryError>;

    async fn get_comic_by_id(&self, id: i64) -> Result<Comic, ComicRepositoryError>;

    async fn get_comic_by_slug(&self, slug: &str) -> Result<Comic, ComicRepositoryError>;

    /// Most recently updated series first.
    async fn get_latest_comics(&self, limit: i64) -> Result<Vec<Comic>, ComicRepositoryError>;

    /// Most recently added series first.
    async fn get_recently_added_comics(
        &self,
        limit: i64,
    ) -> Result<Vec<Comic>, ComicRepositoryError>;

    /// Case-insensitive match against title, author and synopsis.
    async fn search_comics(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Comic>, ComicRepositoryError>;

    async fn insert_comic(&self, comic: &mut Comic) -> Result<(), ComicRepositoryError>;

    async fn update_comic(&self, comic: &Comic) -> Result<(), ComicRepositoryError>;

    async fn delete_comic_by_id(&self, id: i64) -> Result<u64, ComicRepositoryError>;

    async fn count_comics(&self) -> Result<i64, ComicRepositoryError>;
}
