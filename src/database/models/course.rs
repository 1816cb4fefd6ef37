use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::placeholders;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[sqlx(rename = "packageId")]
    pub package_id: Option<String>,
    /// Not unique and not gapless; `1` marks the entry course.
    pub order: Option<i64>,
}

impl Course {
    /// Batch fetch the courses of several packages in one round trip
    pub async fn find_by_packages(
        pool: &SqlitePool,
        package_ids: &[String],
    ) -> Result<Vec<Self>, sqlx::Error> {
        if package_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            r#"SELECT id, title, packageId, "order" FROM course WHERE packageId IN ({}) ORDER BY packageId, "order", id"#,
            placeholders(package_ids.len())
        );

        let mut query_builder = sqlx::query_as::<_, Course>(&query);
        for package_id in package_ids {
            query_builder = query_builder.bind(package_id);
        }

        query_builder.fetch_all(pool).await
    }
}
