use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::placeholders;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CoursePackage {
    pub id: String,
    pub name: String,
    #[sqlx(rename = "isPublished")]
    pub is_published: Option<bool>,
}

impl CoursePackage {
    /// NULL `isPublished` counts as unpublished.
    pub fn published(&self) -> bool {
        self.is_published.unwrap_or(false)
    }

    /// Batch fetch packages to avoid one query per channel
    pub async fn find_by_ids(
        pool: &SqlitePool,
        package_ids: &[String],
    ) -> Result<Vec<Self>, sqlx::Error> {
        if package_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT id, name, isPublished FROM coursepackage WHERE id IN ({}) ORDER BY id",
            placeholders(package_ids.len())
        );

        let mut query_builder = sqlx::query_as::<_, CoursePackage>(&query);
        for package_id in package_ids {
            query_builder = query_builder.bind(package_id);
        }

        query_builder.fetch_all(pool).await
    }
}
