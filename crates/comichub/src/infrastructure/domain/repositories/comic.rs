use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::{
    domain::{
        entities::comic::Comic,
        repositories::comic::{ComicRepository, ComicRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Clone)]
pub struct ComicRepositoryImpl {
    pool: Pool,
}

impl ComicRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

// Unknown status or malformed genre payloads degrade to defaults.
fn comic_from_row(row: &SqliteRow) -> Comic {
    Comic {
        id: row.get(0),
        slug: row.get(1),
        title: row.get(2),
        author: row.get(3),
        synopsis: row.get(4),
        status: row.get::<String, _>(5).parse().unwrap_or_default(),
        cover_url: row.get(6),
        genres: serde_json::from_str(row.get::<String, _>(7).as_str()).unwrap_or_default(),
        created_at: row.get(8),
        updated_at: row.get(9),
    }
}

#[async_trait]
impl ComicRepository for ComicRepositoryImpl {
    async fn get_all_comics(&self) -> Result<Vec<Comic>, ComicRepositoryError> {
        let comics = sqlx::query(r#"SELECT * FROM comics"#)
            .fetch_all(&self.pool as &SqlitePool)
            .await?
            .iter()
            .map(comic_from_row)
            .collect();

        Ok(comics)
    }

    async fn get_comic_by_id(&self, id: i64) -> Result<Comic, ComicRepositoryError> {
        let row = sqlx::query(r#"SELECT * FROM comics WHERE id = ?"#)
            .bind(id)
            .fetch_one(&self.pool as &SqlitePool)
            .await?;

        Ok(comic_from_row(&row))
    }

    async fn get_comic_by_slug(&self, slug: &str) -> Result<Comic, ComicRepositoryError> {
        let row = sqlx::query(r#"SELECT * FROM comics WHERE slug = ?"#)
            .bind(slug)
            .fetch_one(&self.pool as &SqlitePool)
            .await?;

        Ok(comic_from_row(&row))
    }

    async fn get_latest_comics(&self, limit: i64) -> Result<Vec<Comic>, ComicRepositoryError> {
        let comics = sqlx::query(r#"SELECT * FROM comics ORDER BY updated_at DESC LIMIT ?"#)
            .bind(limit)
            .fetch_all(&self.pool as &SqlitePool)
            .await?
            .iter()
            .map(comic_from_row)
            .collect();

        Ok(comics)
    }

    async fn get_recently_added_comics(
        &self,
        limit: i64,
    ) -> Result<Vec<Comic>, ComicRepositoryError> {
        let comics = sqlx::query(r#"SELECT * FROM comics ORDER BY created_at DESC LIMIT ?"#)
            .bind(limit)
            .fetch_all(&self.pool as &SqlitePool)
            .await?
            .iter()
            .map(comic_from_row)
            .collect();

        Ok(comics)
    }

    async fn search_comics(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Comic>, ComicRepositoryError> {
        let pattern = format!("%{query}%");
        let comics = sqlx::query(
            r#"SELECT * FROM comics
            WHERE title LIKE ? OR author LIKE ? OR synopsis LIKE ?
            LIMIT ?"#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool as &SqlitePool)
        .await?
        .iter()
        .map(comic_from_row)
        .collect();

        Ok(comics)
    }

    async fn insert_comic(&self, comic: &mut Comic) -> Result<(), ComicRepositoryError> {
        let now = Utc::now().naive_utc();
        let row_id = sqlx::query(
            r#"
            INSERT INTO comics(
                slug,
                title,
                author,
                synopsis,
                status,
                cover_url,
                genres,
                created_at,
                updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(slug)
            DO UPDATE SET
                title=excluded.title,
                author=excluded.author,
                synopsis=excluded.synopsis,
                status=excluded.status,
                cover_url=excluded.cover_url,
                genres=excluded.genres,
                updated_at=excluded.updated_at
        "#,
        )
        .bind(&comic.slug)
        .bind(&comic.title)
        .bind(&comic.author)
        .bind(&comic.synopsis)
        .bind(comic.status.to_string())
        .bind(&comic.cover_url)
        .bind(serde_json::to_string(&comic.genres).unwrap_or_else(|_| "[]".to_string()))
        .bind(now)
        .bind(now)
        .execute(&self.pool as &SqlitePool)
        .await?
        .last_insert_rowid();

        if comic.id == 0 {
            comic.id = row_id;
        }

        Ok(())
    }

    async fn update_comic(&self, comic: &Comic) -> Result<(), ComicRepositoryError> {
        sqlx::query(
            r#"
            UPDATE comics SET
                slug = ?,
                title = ?,
                author = ?,
                synopsis = ?,
                status = ?,
                cover_url = ?,
                genres = ?,
                updated_at = ?
            WHERE id = ?
        "#,
        )
        .bind(&comic.slug)
        .bind(&comic.title)
        .bind(&comic.author)
        .bind(&comic.synopsis)
        .bind(comic.status.to_string())
        .bind(&comic.cover_url)
        .bind(serde_json::to_string(&comic.genres).unwrap_or_else(|_| "[]".to_string()))
        .bind(Utc::now().naive_utc())
        .bind(comic.id)
        .execute(&self.pool as &SqlitePool)
        .await?;

        Ok(())
    }

    async fn delete_comic_by_id(&self, id: i64) -> Result<u64, ComicRepositoryError> {
        let rows_affected = sqlx::query(r#"DELETE FROM comics WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool as &SqlitePool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn count_comics(&self) -> Result<i64, ComicRepositoryError> {
        let row = sqlx::query(r#"SELECT COUNT(1) FROM comics"#)
            .fetch_one(&self.pool as &SqlitePool)
            .await?;

        Ok(row.get(0))
    }
}
