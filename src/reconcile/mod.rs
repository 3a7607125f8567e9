//! Additive reconciliation of desired configurations against a live application.

pub mod endpoint;

pub use endpoint::{AchievementEndpoint, ConfigurationEndpoint, HttpEndpoint, LeaderboardEndpoint};

use crate::http::Batch;
use crate::models::remote::RemoteItem;
use crate::models::{ConfigurationResource, ResourceInfo};
use crate::util::error::{ConfigError, MutationAction};
use crate::util::validation::first_duplicate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub inserted: Vec<RemoteItem>,
    pub skipped: Vec<String>,
}

/// Inserts every desired record whose name is not already present remotely.
///
/// The remote list is read exactly once before any insert is issued, so names
/// inserted during this pass are not visible to later comparisons. Desired
/// lists naming the same item twice are rejected up front for that reason.
/// Remote items with names outside `desired` are never touched.
pub async fn reconcile<I, E>(desired: &[I], endpoint: &E) -> Result<ReconcileReport, ConfigError>
where
    I: ResourceInfo,
    E: ConfigurationEndpoint<Resource = I::Resource>,
{
    let kind = endpoint.kind();
    if let Some(name) = first_duplicate(desired.iter().map(|info| info.name())) {
        return Err(ConfigError::Validation(format!(
            "{} '{}' is listed more than once",
            kind, name
        )));
    }

    let remote = endpoint
        .list()
        .await
        .map_err(|source| ConfigError::RemoteList { kind, source })?;

    let mut report = ReconcileReport::default();
    let mut batch = Batch::new();
    for info in desired {
        let exists = remote.iter().any(|item| item.name() == Some(info.name()));
        if exists {
            info!("Skipping {} (duplicate name): {}", kind, info.name());
            report.skipped.push(info.name().to_owned());
            continue;
        }
        let resource = info.build_resource();
        let label = resource.display_name().to_owned();
        info!("Inserting {}: {}", kind, label);
        batch.add(label, endpoint.insert(resource));
    }

    if batch.is_empty() {
        debug!("Nothing to insert for {}", kind);
        return Ok(report);
    }
    debug!("Dispatching {} {} insert(s)", batch.len(), kind);
    let inserted = batch
        .execute()
        .await
        .map_err(|source| ConfigError::RemoteMutation {
            kind,
            action: MutationAction::Insert,
            source,
        })?;
    report.inserted = inserted.into_iter().map(|(_, item)| item).collect();
    Ok(report)
}

/// Deletes every currently listed item of the endpoint's kind. Returns the count.
pub async fn delete_all<E: ConfigurationEndpoint>(endpoint: &E) -> Result<usize, ConfigError> {
    let kind = endpoint.kind();
    let remote = endpoint
        .list()
        .await
        .map_err(|source| ConfigError::RemoteList { kind, source })?;

    let mut batch = Batch::new();
    for item in &remote {
        info!("Deleting {}: {}", kind, item.id);
        batch.add(item.id.clone(), endpoint.delete(&item.id));
    }
    debug!("Dispatching {} {} delete(s)", batch.len(), kind);

    let deleted = batch
        .execute()
        .await
        .map_err(|source| ConfigError::RemoteMutation {
            kind,
            action: MutationAction::Delete,
            source,
        })?;
    Ok(deleted.len())
}
