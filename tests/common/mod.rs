#![allow(dead_code)]

use anyhow::Result;
use course_link_bot::database::connection::DatabaseManager;
use course_link_bot::database::seed::{
    insert_chapter, insert_channel, insert_course, insert_package, insert_subject_package,
    NewChannel,
};
use tempfile::{tempdir, TempDir};

pub async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, temp_dir))
}

/// Published package with one course (order 1) holding one chapter (position 1),
/// mapped from `subject`.
pub async fn published_package(
    db: &DatabaseManager,
    subject: &str,
    package_id: &str,
) -> Result<(String, String)> {
    let course_id = format!("{package_id}-course");
    let chapter_id = format!("{package_id}-chapter");

    insert_package(&db.pool, package_id, subject, true).await?;
    insert_subject_package(&db.pool, subject, Some(package_id)).await?;
    insert_course(&db.pool, &course_id, package_id, 1).await?;
    insert_chapter(&db.pool, &chapter_id, &course_id, 1).await?;

    Ok((course_id, chapter_id))
}

pub async fn channel(
    db: &DatabaseManager,
    wdt_id: i64,
    chat_id: &str,
    name: Option<&str>,
    status: &str,
    subject: Option<&str>,
) -> Result<()> {
    insert_channel(
        &db.pool,
        &NewChannel {
            wdt_id,
            chat_id,
            name,
            status: Some(status),
            subject,
            youtube_subject: None,
        },
    )
    .await?;
    Ok(())
}

pub async fn youtube_subject(db: &DatabaseManager, wdt_id: i64) -> Result<Option<String>> {
    let channel = course_link_bot::database::models::Channel::find_by_id(&db.pool, wdt_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("channel {wdt_id} missing"))?;
    Ok(channel.youtube_subject)
}
