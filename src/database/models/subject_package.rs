use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Maps a free-text subject to the package students of that subject get.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubjectPackage {
    pub id: String,
    pub subject: Option<String>,
    #[sqlx(rename = "packageId")]
    pub package_id: Option<String>,
}

impl SubjectPackage {
    pub async fn find_by_subject(
        pool: &SqlitePool,
        subject: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, SubjectPackage>(
            "SELECT id, subject, packageId FROM subjectpackage WHERE subject = ? ORDER BY id LIMIT 1"
        )
        .bind(subject)
        .fetch_optional(pool)
        .await
    }
}
