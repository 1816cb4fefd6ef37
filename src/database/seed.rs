//! Row builders for bootstrapping a local database.
//!
//! The production tables are filled by the course platform. These helpers
//! exist for the `migrate seed` command and for tests.

use sqlx::{Executor, Sqlite, SqlitePool};
use uuid::Uuid;

use super::models::Channel;

pub const DEMO_STUDENT_ID: i64 = 10;
pub const DEMO_CHAT_ID: &str = "973677019";
pub const DEMO_PACKAGE_ID: &str = "demo-package";
pub const DEMO_COURSE_ID: &str = "demo-course";
pub const DEMO_CHAPTER_ID: &str = "demo-chapter";

#[derive(Debug, Clone, Default)]
pub struct NewChannel<'a> {
    pub wdt_id: i64,
    pub chat_id: &'a str,
    pub name: Option<&'a str>,
    pub status: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub youtube_subject: Option<&'a str>,
}

pub async fn insert_channel<'e, E>(
    executor: E,
    channel: &NewChannel<'_>,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO wpos_wpdatatable_23 (wdt_ID, chat_id, name, status, subject, youtubeSubject) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(channel.wdt_id)
    .bind(channel.chat_id)
    .bind(channel.name)
    .bind(channel.status)
    .bind(channel.subject)
    .bind(channel.youtube_subject)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn insert_package<'e, E>(
    executor: E,
    id: &str,
    name: &str,
    is_published: bool,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO coursepackage (id, name, isPublished) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(is_published)
        .execute(executor)
        .await?;

    Ok(())
}

/// Returns the generated row id.
pub async fn insert_subject_package<'e, E>(
    executor: E,
    subject: &str,
    package_id: Option<&str>,
) -> Result<String, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = Uuid::new_v4().to_string();

    sqlx::query("INSERT INTO subjectpackage (id, subject, packageId) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(subject)
        .bind(package_id)
        .execute(executor)
        .await?;

    Ok(id)
}

pub async fn insert_course<'e, E>(
    executor: E,
    id: &str,
    package_id: &str,
    order: i64,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"INSERT INTO course (id, title, packageId, "order", isPublished) VALUES (?, ?, ?, ?, 1)"#,
    )
        .bind(id)
        .bind(format!("Course {id}"))
        .bind(package_id)
        .bind(order)
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn insert_chapter<'e, E>(
    executor: E,
    id: &str,
    course_id: &str,
    position: i64,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO chapter (id, title, courseId, position, isPublished) VALUES (?, ?, ?, ?, 1)",
    )
        .bind(id)
        .bind(format!("Chapter {id}"))
        .bind(course_id)
        .bind(position)
        .execute(executor)
        .await?;

    Ok(())
}

/// Inserts one eligible demo student with a published one-course package,
/// all rows in a single transaction.
/// Returns `false` when the demo student already exists.
pub async fn seed_demo(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    if Channel::find_by_id(pool, DEMO_STUDENT_ID).await?.is_some() {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    insert_package(&mut *tx, DEMO_PACKAGE_ID, "Quran Basics", true).await?;
    insert_subject_package(&mut *tx, "Math", Some(DEMO_PACKAGE_ID)).await?;
    insert_course(&mut *tx, DEMO_COURSE_ID, DEMO_PACKAGE_ID, 1).await?;
    insert_chapter(&mut *tx, DEMO_CHAPTER_ID, DEMO_COURSE_ID, 1).await?;
    insert_channel(
        &mut *tx,
        &NewChannel {
            wdt_id: DEMO_STUDENT_ID,
            chat_id: DEMO_CHAT_ID,
            name: Some("Darul-Kubra"),
            status: Some("Active"),
            subject: Some("Math"),
            youtube_subject: None,
        },
    )
    .await?;
    tx.commit().await?;

    Ok(true)
}
