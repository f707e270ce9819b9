use thiserror::Error;

use crate::domain::{
    entities::comic::Comic,
    repositories::comic::{ComicRepository, ComicRepositoryError},
    services::listing::{self, ListingError, ListingPage, ListingQuery},
};

#[derive(Debug, Error)]
pub enum ComicError {
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error("comic not found")]
    NotFound,
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<ComicRepositoryError> for ComicError {
    fn from(e: ComicRepositoryError) -> Self {
        match e {
            ComicRepositoryError::DbError(sqlx::Error::RowNotFound) => Self::NotFound,
            ComicRepositoryError::DbError(e) => Self::Other(anyhow::anyhow!("{e}")),
        }
    }
}

pub struct ComicService<R>
where
    R: ComicRepository,
{
    repo: R,
}

impl<R> ComicService<R>
where
    R: ComicRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch the full catalog and run the listing pipeline over it.
    pub async fn list_comics(&self, query: &ListingQuery) -> Result<ListingPage, ComicError> {
        let comics = self.repo.get_all_comics().await?;

        Ok(listing::apply(&comics, query)?)
    }

    pub async fn fetch_all_comics(&self) -> Result<Vec<Comic>, ComicError> {
        Ok(self.repo.get_all_comics().await?)
    }

    pub async fn fetch_comic_by_id(&self, id: i64) -> Result<Comic, ComicError> {
        Ok(self.repo.get_comic_by_id(id).await?)
    }

    pub async fn fetch_comic_by_slug(&self, slug: &str) -> Result<Comic, ComicError> {
        Ok(self.repo.get_comic_by_slug(slug).await?)
    }

    pub async fn fetch_latest_comics(&self, limit: i64) -> Result<Vec<Comic>, ComicError> {
        Ok(self.repo.get_latest_comics(limit).await?)
    }

    /// No popularity metric is tracked yet, newest series stand in.
    pub async fn fetch_popular_comics(&self, limit: i64) -> Result<Vec<Comic>, ComicError> {
        Ok(self.repo.get_recently_added_comics(limit).await?)
    }

    pub async fn search_comics(&self, query: &str, limit: i64) -> Result<Vec<Comic>, ComicError> {
        Ok(self.repo.search_comics(query, limit).await?)
    }

    pub async fn create_comic(&self, mut comic: Comic) -> Result<Comic, ComicError> {
        self.repo.insert_comic(&mut comic).await?;

        Ok(self.repo.get_comic_by_id(comic.id).await?)
    }

    pub async fn update_comic(&self, comic: &Comic) -> Result<Comic, ComicError> {
        self.repo.update_comic(comic).await?;

        Ok(self.repo.get_comic_by_id(comic.id).await?)
    }

    pub async fn delete_comic(&self, id: i64) -> Result<u64, ComicError> {
        Ok(self.repo.delete_comic_by_id(id).await?)
    }

    pub async fn count_comics(&self) -> Result<i64, ComicError> {
        Ok(self.repo.count_comics().await?)
    }
}

#[cfg(test)]
mod test {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::services::listing::SortKey;

    struct FixedCatalog(Vec<Comic>);

    #[async_trait]
    impl ComicRepository for FixedCatalog {
        async fn get_all_comics(&self) -> Result<Vec<Comic>, ComicRepositoryError> {
            Ok(self.0.clone())
        }

        async fn get_comic_by_id(&self, _id: i64) -> Result<Comic, ComicRepositoryError> {
            Err(ComicRepositoryError::DbError(sqlx::Error::RowNotFound))
        }

        async fn get_comic_by_slug(&self, _slug: &str) -> Result<Comic, ComicRepositoryError> {
            Err(ComicRepositoryError::DbError(sqlx::Error::RowNotFound))
        }

        async fn get_latest_comics(
            &self,
            _limit: i64,
        ) -> Result<Vec<Comic>, ComicRepositoryError> {
            unimplemented!()
        }

        async fn get_recently_added_comics(
            &self,
            _limit: i64,
        ) -> Result<Vec<Comic>, ComicRepositoryError> {
            unimplemented!()
        }

        async fn search_comics(
            &self,
            _query: &str,
            _limit: i64,
        ) -> Result<Vec<Comic>, ComicRepositoryError> {
            unimplemented!()
        }

        async fn insert_comic(&self, _comic: &mut Comic) -> Result<(), ComicRepositoryError> {
            unimplemented!()
        }

        async fn update_comic(&self, _comic: &Comic) -> Result<(), ComicRepositoryError> {
            unimplemented!()
        }

        async fn delete_comic_by_id(&self, _id: i64) -> Result<u64, ComicRepositoryError> {
            unimplemented!()
        }

        async fn count_comics(&self) -> Result<i64, ComicRepositoryError> {
            Ok(self.0.len() as i64)
        }
    }

    fn catalog() -> FixedCatalog {
        FixedCatalog(
            ["Alpha", "Beta", "Gamma"]
                .iter()
                .map(|title| Comic {
                    title: title.to_string(),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_list_comics_pages_the_catalog() {
        let svc = ComicService::new(catalog());
        let query = ListingQuery {
            sort_key: SortKey::Title,
            page_size: 2,
            ..Default::default()
        };

        let page = svc.list_comics(&query).await.unwrap();

        assert_eq!(page.total_matched, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].title, "Alpha");
    }

    #[tokio::test]
    async fn test_list_comics_rejects_invalid_page() {
        let svc = ComicService::new(catalog());
        let query = ListingQuery {
            page: 0,
            ..Default::default()
        };

        let err = svc.list_comics(&query).await.unwrap_err();

        assert!(matches!(err, ComicError::Listing(_)));
    }

    #[tokio::test]
    async fn test_missing_comic_maps_to_not_found() {
        let svc = ComicService::new(catalog());

        let err = svc.fetch_comic_by_slug("missing").await.unwrap_err();

        assert!(matches!(err, ComicError::NotFound));
    }
}
