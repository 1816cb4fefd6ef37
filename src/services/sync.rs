use tracing::info;

use crate::database::models::Channel;
use crate::database::store::CourseStore;

/// Outcome of one package refresh.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Every input channel with its refreshed package reference, in input order.
    pub channels: Vec<Channel>,
    /// How many channels had a different reference before the refresh.
    pub rewritten: usize,
}

/// Recomputes each channel's active package from its subject and commits the
/// changed rows as one batch.
///
/// A non-empty subject maps to the matching `subjectpackage.packageId`, or to
/// no package when nothing matches. An empty subject always clears the
/// reference, including one that was set by hand. Any store error aborts the
/// whole refresh; nothing is resolved on partially synchronized rows.
pub async fn synchronize_packages<S: CourseStore + ?Sized>(
    store: &S,
    channels: Vec<Channel>,
) -> Result<SyncReport, sqlx::Error> {
    let mut synced = Vec::with_capacity(channels.len());
    let mut changed = Vec::new();

    for mut channel in channels {
        let resolved = match channel.mapped_subject() {
            Some(subject) => store
                .lookup_subject_package(subject)
                .await?
                .and_then(|mapping| mapping.package_id),
            None => None,
        };

        if channel.youtube_subject != resolved {
            channel.youtube_subject = resolved;
            changed.push(channel.clone());
        }
        synced.push(channel);
    }

    store.commit_batch(&changed).await?;

    if !changed.is_empty() {
        info!(
            "Synchronized packages for {} channels ({} rewritten)",
            synced.len(),
            changed.len()
        );
    }

    Ok(SyncReport {
        channels: synced,
        rewritten: changed.len(),
    })
}
