use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;

use crate::http::GamesApi;
use crate::models::achievement::AchievementResource;
use crate::models::leaderboard::LeaderboardResource;
use crate::models::remote::RemoteItem;
use crate::models::{ConfigurationResource, ResourceKind};
use crate::util::error::ApiError;

/// List/insert/delete access to one kind of configuration resource.
#[async_trait]
pub trait ConfigurationEndpoint: Send + Sync {
    type Resource: ConfigurationResource;

    fn kind(&self) -> ResourceKind;
    async fn list(&self) -> Result<Vec<RemoteItem>, ApiError>;
    async fn insert(&self, resource: Self::Resource) -> Result<RemoteItem, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

pub struct HttpEndpoint<'a, R> {
    api: &'a GamesApi,
    application_id: String,
    kind: ResourceKind,
    _resource: PhantomData<fn() -> R>,
}

pub type AchievementEndpoint<'a> = HttpEndpoint<'a, AchievementResource>;
pub type LeaderboardEndpoint<'a> = HttpEndpoint<'a, LeaderboardResource>;

impl<'a> HttpEndpoint<'a, AchievementResource> {
    pub fn achievements(api: &'a GamesApi, application_id: impl Into<String>) -> Self {
        HttpEndpoint {
            api,
            application_id: application_id.into(),
            kind: ResourceKind::Achievement,
            _resource: PhantomData,
        }
    }
}

impl<'a> HttpEndpoint<'a, LeaderboardResource> {
    pub fn leaderboards(api: &'a GamesApi, application_id: impl Into<String>) -> Self {
        HttpEndpoint {
            api,
            application_id: application_id.into(),
            kind: ResourceKind::Leaderboard,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<'a, R> ConfigurationEndpoint for HttpEndpoint<'a, R>
where
    R: ConfigurationResource + Serialize + Sync,
{
    type Resource = R;

    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn list(&self) -> Result<Vec<RemoteItem>, ApiError> {
        self.api.list_configurations(self.kind, &self.application_id).await
    }

    async fn insert(&self, resource: R) -> Result<RemoteItem, ApiError> {
        self.api
            .insert_configuration(self.kind, &self.application_id, &resource)
            .await
    }

    // delete is keyed by the resource id alone
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_configuration(self.kind, id).await
    }
}
