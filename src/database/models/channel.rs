use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use super::placeholders;

/// Raw `status` values that keep a channel in the course link pipeline.
pub const ELIGIBLE_STATUSES: [&str; 2] = ["Active", "Notyet"];

const CHANNEL_COLUMNS: &str = "wdt_ID, name, status, subject, youtubeSubject, chat_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelStatus {
    Active,
    NotYet,
    Other(String),
}

impl ChannelStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Active") => ChannelStatus::Active,
            Some("Notyet") => ChannelStatus::NotYet,
            other => ChannelStatus::Other(other.unwrap_or_default().to_string()),
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, ChannelStatus::Active | ChannelStatus::NotYet)
    }
}

/// A chat-bound student record (`wpos_wpdatatable_23`).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Channel {
    #[sqlx(rename = "wdt_ID")]
    pub wdt_id: i64,
    pub name: Option<String>,
    pub status: Option<String>,
    pub subject: Option<String>,
    /// Resolved package reference, rewritten from `subject` on every `/c`.
    #[sqlx(rename = "youtubeSubject")]
    pub youtube_subject: Option<String>,
    pub chat_id: String,
}

impl Channel {
    pub fn status(&self) -> ChannelStatus {
        ChannelStatus::parse(self.status.as_deref())
    }

    /// The subject to map, or `None` when it is NULL or empty.
    pub fn mapped_subject(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.is_empty())
    }

    pub async fn find_eligible_by_chat_id(
        pool: &SqlitePool,
        chat_id: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!(
            "SELECT {CHANNEL_COLUMNS} FROM wpos_wpdatatable_23 WHERE chat_id = ? AND status IN ({}) ORDER BY wdt_ID",
            placeholders(ELIGIBLE_STATUSES.len())
        );

        let mut query_builder = sqlx::query_as::<_, Channel>(&query).bind(chat_id);
        for status in ELIGIBLE_STATUSES {
            query_builder = query_builder.bind(status);
        }

        query_builder.fetch_all(pool).await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        wdt_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let query = format!("SELECT {CHANNEL_COLUMNS} FROM wpos_wpdatatable_23 WHERE wdt_ID = ?");
        sqlx::query_as::<_, Channel>(&query)
            .bind(wdt_id)
            .fetch_optional(pool)
            .await
    }

    /// Writes `youtubeSubject` for one channel on an open connection or transaction.
    pub async fn set_active_package(
        conn: &mut SqliteConnection,
        wdt_id: i64,
        package_id: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE wpos_wpdatatable_23 SET youtubeSubject = ? WHERE wdt_ID = ?")
                .bind(package_id)
                .bind(wdt_id)
                .execute(conn)
                .await?;

        Ok(result.rows_affected())
    }
}
