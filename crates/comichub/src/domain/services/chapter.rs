use thiserror::Error;

use crate::domain::{
    entities::chapter::Chapter,
    repositories::chapter::{ChapterRepository, ChapterRepositoryError},
};

#[derive(Debug, Error)]
pub enum ChapterError {
    #[error("chapter not found")]
    NotFound,
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<ChapterRepositoryError> for ChapterError {
    fn from(e: ChapterRepositoryError) -> Self {
        match e {
            ChapterRepositoryError::DbError(sqlx::Error::RowNotFound) => Self::NotFound,
            ChapterRepositoryError::DbError(e) => Self::Other(anyhow::anyhow!("{e}")),
        }
    }
}

pub struct ChapterService<R>
where
    R: ChapterRepository,
{
    repo: R,
}

impl<R> ChapterService<R>
where
    R: ChapterRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn fetch_chapter_by_id(&self, id: i64) -> Result<Chapter, ChapterError> {
        Ok(self.repo.get_chapter_by_id(id).await?)
    }

    pub async fn fetch_chapter_by_number(
        &self,
        comic_id: i64,
        number: f64,
    ) -> Result<Chapter, ChapterError> {
        Ok(self
            .repo
            .get_chapter_by_comic_id_number(comic_id, number)
            .await?)
    }

    pub async fn fetch_chapters_by_comic_id(
        &self,
        comic_id: i64,
    ) -> Result<Vec<Chapter>, ChapterError> {
        Ok(self.repo.get_chapters_by_comic_id(comic_id).await?)
    }

    pub async fn create_chapter(&self, mut chapter: Chapter) -> Result<Chapter, ChapterError> {
        self.repo.insert_chapter(&mut chapter).await?;

        Ok(self.repo.get_chapter_by_id(chapter.id).await?)
    }

    pub async fn create_chapters(&self, chapters: &[Chapter]) -> Result<(), ChapterError> {
        self.repo.insert_chapters(chapters).await?;

        Ok(())
    }

    pub async fn delete_chapter(&self, id: i64) -> Result<u64, ChapterError> {
        Ok(self.repo.delete_chapter_by_id(id).await?)
    }

    pub async fn count_chapters(&self) -> Result<i64, ChapterError> {
        Ok(self.repo.count_chapters().await?)
    }
}
