use anyhow::{Context, Result};
use tracing::debug;

use super::eligibility::{resolve, ResolutionRecord};
use super::reply::{build_replies, DeepLinkBuilder, ReplyMessage};
use super::sync::synchronize_packages;
use crate::database::store::CourseStore;

/// Runs the lookup pipeline for one chat.
///
/// The package refresh is committed before the graph is reloaded, so the
/// resolver always sees the references written in this same call. Any store
/// failure aborts the call and no record is returned.
pub async fn resolve_course_links<S: CourseStore + ?Sized>(
    store: &S,
    chat_id: &str,
) -> Result<Vec<ResolutionRecord>> {
    let channels = store
        .fetch_channels(chat_id)
        .await
        .context("Failed to fetch channels")?;
    debug!("Chat {} has {} candidate channels", chat_id, channels.len());

    synchronize_packages(store, channels)
        .await
        .context("Failed to synchronize channel packages")?;

    let graphs = store
        .fetch_channels_with_graph(chat_id)
        .await
        .context("Failed to load course graphs")?;

    Ok(resolve(&graphs))
}

/// [`resolve_course_links`] followed by message formatting.
pub async fn course_link_replies<S: CourseStore + ?Sized>(
    store: &S,
    links: &DeepLinkBuilder,
    chat_id: &str,
) -> Result<Vec<ReplyMessage>> {
    let records = resolve_course_links(store, chat_id).await?;
    Ok(build_replies(links, &records))
}
