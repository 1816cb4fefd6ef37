use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::placeholders;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    #[sqlx(rename = "courseId")]
    pub course_id: Option<String>,
    pub position: Option<i64>,
}

impl Chapter {
    /// Batch fetch the chapters of several courses in one round trip
    pub async fn find_by_courses(
        pool: &SqlitePool,
        course_ids: &[String],
    ) -> Result<Vec<Self>, sqlx::Error> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT id, title, courseId, position FROM chapter WHERE courseId IN ({}) ORDER BY courseId, position, id",
            placeholders(course_ids.len())
        );

        let mut query_builder = sqlx::query_as::<_, Chapter>(&query);
        for course_id in course_ids {
            query_builder = query_builder.bind(course_id);
        }

        query_builder.fetch_all(pool).await
    }
}
