use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::{
    domain::{
        entities::page::Page,
        repositories::page::{PageRepository, PageRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Clone)]
pub struct PageRepositoryImpl {
    pool: Pool,
}

impl PageRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

fn page_from_row(row: &SqliteRow) -> Page {
    Page {
        id: row.get(0),
        chapter_id: row.get(1),
        page_number: row.get(2),
        image_url: row.get(3),
    }
}

#[async_trait]
impl PageRepository for PageRepositoryImpl {
    async fn get_pages_by_chapter_id(
        &self,
        chapter_id: i64,
    ) -> Result<Vec<Page>, PageRepositoryError> {
        let pages = sqlx::query(
            r#"SELECT * FROM pages WHERE chapter_id = ? ORDER BY page_number ASC"#,
        )
        .bind(chapter_id)
        .fetch_all(&self.pool as &SqlitePool)
        .await?
        .iter()
        .map(page_from_row)
        .collect();

        Ok(pages)
    }

    async fn insert_pages(&self, pages: &[Page]) -> Result<(), PageRepositoryError> {
        if pages.is_empty() {
            return Ok(());
        }

        let mut values = vec![];
        values.resize(pages.len(), "(?, ?, ?)");

        let query_str = format!(
            r#"INSERT INTO pages(
            chapter_id,
            page_number,
            image_url
        ) VALUES {} ON CONFLICT(chapter_id, page_number) DO UPDATE SET
            image_url=excluded.image_url
        "#,
            values.join(",")
        );

        let mut query = sqlx::query(&query_str);
        for page in pages {
            query = query
                .bind(page.chapter_id)
                .bind(page.page_number)
                .bind(&page.image_url);
        }

        query.execute(&self.pool as &SqlitePool).await?;

        Ok(())
    }

    async fn delete_page_by_id(&self, id: i64) -> Result<u64, PageRepositoryError> {
        let rows_affected = sqlx::query(r#"DELETE FROM pages WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool as &SqlitePool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn count_pages(&self) -> Result<i64, PageRepositoryError> {
        let row = sqlx::query(r#"SELECT COUNT(1) FROM pages"#)
            .fetch_one(&self.pool as &SqlitePool)
            .await?;

        Ok(row.get(0))
    }
}
