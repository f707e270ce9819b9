use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::{
    domain::{
        entities::chapter::Chapter,
        repositories::chapter::{ChapterRepository, ChapterRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Clone)]
pub struct ChapterRepositoryImpl {
    pool: Pool,
}

impl ChapterRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

fn chapter_from_row(row: &SqliteRow) -> Chapter {
    Chapter {
        id: row.get(0),
        comic_id: row.get(1),
        number: row.get(2),
        title: row.get(3),
        created_at: row.get(4),
        next: row.get(5),
        prev: row.get(6),
    }
}

#[async_trait]
impl ChapterRepository for ChapterRepositoryImpl {
    async fn get_chapter_by_id(&self, id: i64) -> Result<Chapter, ChapterRepositoryError> {
        let row = sqlx::query(
            r#"SELECT
                        chapters.*,
                        (SELECT c.id FROM chapters c WHERE c.comic_id = chapters.comic_id AND c.number > chapters.number ORDER BY c.number ASC LIMIT 1) next,
                        (SELECT c.id FROM chapters c WHERE c.comic_id = chapters.comic_id AND c.number < chapters.number ORDER BY c.number DESC LIMIT 1) prev
                    FROM chapters WHERE id = ?"#,
        )
        .bind(id)
        .fetch_one(&self.pool as &SqlitePool)
        .await?;

        Ok(chapter_from_row(&row))
    }

    async fn get_chapter_by_comic_id_number(
        &self,
        comic_id: i64,
        number: f64,
    ) -> Result<Chapter, ChapterRepositoryError> {
        let row = sqlx::query(
            r#"SELECT
                        chapters.*,
                        (SELECT c.id FROM chapters c WHERE c.comic_id = chapters.comic_id AND c.number > chapters.number ORDER BY c.number ASC LIMIT 1) next,
                        (SELECT c.id FROM chapters c WHERE c.comic_id = chapters.comic_id AND c.number < chapters.number ORDER BY c.number DESC LIMIT 1) prev
                    FROM chapters WHERE comic_id = ? AND number = ?"#,
        )
        .bind(comic_id)
        .bind(number)
        .fetch_one(&self.pool as &SqlitePool)
        .await?;

        Ok(chapter_from_row(&row))
    }

    async fn get_chapters_by_comic_id(
        &self,
        comic_id: i64,
    ) -> Result<Vec<Chapter>, ChapterRepositoryError> {
        let chapters = sqlx::query(
            r#"SELECT
                        chapters.*,
                        (SELECT c.id FROM chapters c WHERE c.comic_id = chapters.comic_id AND c.number > chapters.number ORDER BY c.number ASC LIMIT 1) next,
                        (SELECT c.id FROM chapters c WHERE c.comic_id = chapters.comic_id AND c.number < chapters.number ORDER BY c.number DESC LIMIT 1) prev
                    FROM chapters WHERE comic_id = ? ORDER BY number DESC"#,
        )
        .bind(comic_id)
        .fetch_all(&self.pool as &SqlitePool)
        .await?
        .iter()
        .map(chapter_from_row)
        .collect();

        Ok(chapters)
    }

    async fn insert_chapter(&self, chapter: &mut Chapter) -> Result<(), ChapterRepositoryError> {
        let row_id = sqlx::query(
            r#"
            INSERT INTO chapters(
                comic_id,
                number,
                title,
                created_at
            ) VALUES (?, ?, ?, ?)
            ON CONFLICT(comic_id, number)
            DO UPDATE SET
                title=excluded.title
        "#,
        )
        .bind(chapter.comic_id)
        .bind(chapter.number)
        .bind(&chapter.title)
        .bind(Utc::now().naive_utc())
        .execute(&self.pool as &SqlitePool)
        .await?
        .last_insert_rowid();

        if chapter.id == 0 {
            chapter.id = row_id;
        }

        Ok(())
    }

    async fn insert_chapters(&self, chapters: &[Chapter]) -> Result<(), ChapterRepositoryError> {
        if chapters.is_empty() {
            return Ok(());
        }

        let mut values = vec![];
        values.resize(chapters.len(), "(?, ?, ?, ?)");

        let query_str = format!(
            r#"INSERT INTO chapters(
            comic_id,
            number,
            title,
            created_at
        ) VALUES {} ON CONFLICT(comic_id, number) DO UPDATE SET
            title=excluded.title
        "#,
            values.join(",")
        );

        let now = Utc::now().naive_utc();
        let mut query = sqlx::query(&query_str);
        for chapter in chapters {
            query = query
                .bind(chapter.comic_id)
                .bind(chapter.number)
                .bind(&chapter.title)
                .bind(now);
        }

        query.execute(&self.pool as &SqlitePool).await?;

        Ok(())
    }

    async fn delete_chapter_by_id(&self, id: i64) -> Result<u64, ChapterRepositoryError> {
        let rows_affected = sqlx::query(r#"DELETE FROM chapters WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool as &SqlitePool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn count_chapters(&self) -> Result<i64, ChapterRepositoryError> {
        let row = sqlx::query(r#"SELECT COUNT(1) FROM chapters"#)
            .fetch_one(&self.pool as &SqlitePool)
            .await?;

        Ok(row.get(0))
    }
}
