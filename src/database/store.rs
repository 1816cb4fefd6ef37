//! Data access seam for the course link pipeline.
//!
//! The command handler only talks to [`CourseStore`], so the pipeline can be
//! driven by the SQLite-backed [`DatabaseManager`] in production and by a
//! test double when exercising failure paths.

use async_trait::async_trait;

use super::connection::DatabaseManager;
use super::graph::{self, ChannelGraph};
use super::models::{Channel, Chapter, Course, CoursePackage, SubjectPackage};
use crate::utils::logging::{log_database_error, log_database_operation};

const CHANNEL_TABLE: &str = "wpos_wpdatatable_23";

#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Channels bound to `chat_id` whose status is `Active` or `Notyet`.
    async fn fetch_channels(&self, chat_id: &str) -> Result<Vec<Channel>, sqlx::Error>;

    /// Same filter as [`CourseStore::fetch_channels`], with each channel's active
    /// package, its courses and their chapters loaded up front.
    async fn fetch_channels_with_graph(
        &self,
        chat_id: &str,
    ) -> Result<Vec<ChannelGraph>, sqlx::Error>;

    /// The `subjectpackage` row whose `subject` equals `subject` exactly.
    async fn lookup_subject_package(
        &self,
        subject: &str,
    ) -> Result<Option<SubjectPackage>, sqlx::Error>;

    /// Writes `youtube_subject` of every channel; all rows or none.
    async fn commit_batch(&self, channels: &[Channel]) -> Result<u64, sqlx::Error>;

    async fn persist(&self, channel: &Channel) -> Result<u64, sqlx::Error> {
        self.commit_batch(std::slice::from_ref(channel)).await
    }
}

#[async_trait]
impl CourseStore for DatabaseManager {
    async fn fetch_channels(&self, chat_id: &str) -> Result<Vec<Channel>, sqlx::Error> {
        log_database_operation("SELECT", CHANNEL_TABLE, Some(chat_id));
        logged(
            "SELECT",
            CHANNEL_TABLE,
            Some(chat_id),
            Channel::find_eligible_by_chat_id(&self.pool, chat_id).await,
        )
    }

    async fn fetch_channels_with_graph(
        &self,
        chat_id: &str,
    ) -> Result<Vec<ChannelGraph>, sqlx::Error> {
        let channels = self.fetch_channels(chat_id).await?;

        let package_ids = graph::referenced_packages(&channels);
        let details = format!("{} ids", package_ids.len());
        log_database_operation("SELECT", "coursepackage", Some(&details));
        let packages = logged(
            "SELECT",
            "coursepackage",
            Some(&details),
            CoursePackage::find_by_ids(&self.pool, &package_ids).await,
        )?;

        let found_ids: Vec<String> = packages.iter().map(|p| p.id.clone()).collect();
        let courses = logged(
            "SELECT",
            "course",
            Some(&format!("{} packages", found_ids.len())),
            Course::find_by_packages(&self.pool, &found_ids).await,
        )?;

        let course_ids: Vec<String> = courses.iter().map(|c| c.id.clone()).collect();
        let chapters = logged(
            "SELECT",
            "chapter",
            Some(&format!("{} courses", course_ids.len())),
            Chapter::find_by_courses(&self.pool, &course_ids).await,
        )?;

        Ok(graph::assemble(channels, packages, courses, chapters))
    }

    async fn lookup_subject_package(
        &self,
        subject: &str,
    ) -> Result<Option<SubjectPackage>, sqlx::Error> {
        log_database_operation("SELECT", "subjectpackage", Some(subject));
        logged(
            "SELECT",
            "subjectpackage",
            Some(subject),
            SubjectPackage::find_by_subject(&self.pool, subject).await,
        )
    }

    async fn commit_batch(&self, channels: &[Channel]) -> Result<u64, sqlx::Error> {
        if channels.is_empty() {
            return Ok(0);
        }

        let details = format!("{} channels", channels.len());
        log_database_operation("UPDATE", CHANNEL_TABLE, Some(&details));

        let mut tx = logged("BEGIN", CHANNEL_TABLE, Some(&details), self.pool.begin().await)?;
        let mut written = 0;
        for channel in channels {
            let result = Channel::set_active_package(
                &mut tx,
                channel.wdt_id,
                channel.youtube_subject.as_deref(),
            )
            .await;
            written += logged(
                "UPDATE",
                CHANNEL_TABLE,
                Some(&format!("channel {}", channel.wdt_id)),
                result,
            )?;
        }
        logged("COMMIT", CHANNEL_TABLE, Some(&details), tx.commit().await)?;

        Ok(written)
    }
}

/// Emits a `DB_ERROR` line for a failed query and hands the result back unchanged.
fn logged<T>(
    operation: &str,
    table: &str,
    details: Option<&str>,
    result: Result<T, sqlx::Error>,
) -> Result<T, sqlx::Error> {
    if let Err(e) = &result {
        log_database_error(operation, table, &e.to_string(), details);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_passes_values_through() {
        let ok: Result<u64, sqlx::Error> = Ok(3);
        assert_eq!(logged("UPDATE", CHANNEL_TABLE, None, ok).ok(), Some(3));
    }

    #[test]
    fn test_logged_returns_the_same_error() {
        let failed: Result<u64, sqlx::Error> = Err(sqlx::Error::PoolClosed);
        let error = logged("SELECT", "course", Some("2 packages"), failed).unwrap_err();
        assert!(matches!(error, sqlx::Error::PoolClosed));
    }
}
