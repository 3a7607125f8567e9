//! User-facing configure / list / reset operations.

use std::future::Future;

use strum_macros::Display;

use crate::catalog::SampleConfig;
use crate::http::GamesApi;
use crate::models::achievement::AchievementResource;
use crate::models::leaderboard::LeaderboardResource;
use crate::reconcile::{self, AchievementEndpoint, ConfigurationEndpoint, LeaderboardEndpoint};
use crate::util::error::ConfigError;
use crate::util::validation::require_application_id;
use crate::xml::{render_app_id, render_resources_xml};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Configure,
    List,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    DoneWithError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationSignal {
    Started(Operation),
    Result(Operation, String),
    Ended(Operation, Outcome),
}

/// Receives progress signals; `Ended` fires on success and on failure.
pub trait OperationListener: Send + Sync {
    fn on_signal(&self, signal: &OperationSignal);
}

pub struct LogListener;

impl OperationListener for LogListener {
    fn on_signal(&self, signal: &OperationSignal) {
        match signal {
            OperationSignal::Started(operation) => info!("Starting {}", operation),
            OperationSignal::Result(operation, xml) => {
                debug!("{} produced {} byte(s) of resources", operation, xml.len())
            }
            OperationSignal::Ended(operation, Outcome::Done) => info!("Finished {}", operation),
            OperationSignal::Ended(operation, Outcome::DoneWithError(message)) => {
                warn!("{} failed: {}", operation, message)
            }
        }
    }
}

pub struct ConfigurationFacade<'l, A, L> {
    application_id: String,
    achievements: A,
    leaderboards: L,
    listener: &'l dyn OperationListener,
}

impl<'a, 'l> ConfigurationFacade<'l, AchievementEndpoint<'a>, LeaderboardEndpoint<'a>> {
    pub fn over_http(api: &'a GamesApi, application_id: &str, listener: &'l dyn OperationListener) -> Self {
        let application_id = application_id.trim();
        ConfigurationFacade::new(
            application_id,
            AchievementEndpoint::achievements(api, application_id),
            LeaderboardEndpoint::leaderboards(api, application_id),
            listener,
        )
    }
}

impl<'l, A, L> ConfigurationFacade<'l, A, L>
where
    A: ConfigurationEndpoint<Resource = AchievementResource>,
    L: ConfigurationEndpoint<Resource = LeaderboardResource>,
{
    pub fn new(
        application_id: impl Into<String>,
        achievements: A,
        leaderboards: L,
        listener: &'l dyn OperationListener,
    ) -> Self {
        let application_id: String = application_id.into();
        ConfigurationFacade {
            application_id: application_id.trim().to_owned(),
            achievements,
            leaderboards,
            listener,
        }
    }

    /// Inserts every missing achievement and leaderboard of `sample`, then
    /// renders the resulting configuration.
    pub async fn configure(&self, sample: &SampleConfig) -> Result<String, ConfigError> {
        require_application_id(&self.application_id)?;
        self.run(Operation::Configure, async {
            let (achievements, leaderboards) = futures::join!(
                reconcile::reconcile(&sample.achievements, &self.achievements),
                reconcile::reconcile(&sample.leaderboards, &self.leaderboards)
            );
            let achievements = achievements?;
            let leaderboards = leaderboards?;
            info!(
                "Configuration complete: {} achievement(s) and {} leaderboard(s) inserted, {} skipped",
                achievements.inserted.len(),
                leaderboards.inserted.len(),
                achievements.skipped.len() + leaderboards.skipped.len()
            );
            self.render_snapshot().await
        })
        .await
    }

    pub async fn list(&self) -> Result<String, ConfigError> {
        require_application_id(&self.application_id)?;
        self.run(Operation::List, self.render_snapshot()).await
    }

    /// Deletes every achievement and leaderboard of the application.
    pub async fn reset(&self) -> Result<String, ConfigError> {
        require_application_id(&self.application_id)?;
        self.run(Operation::Reset, async {
            let (leaderboards, achievements) = futures::join!(
                reconcile::delete_all(&self.leaderboards),
                reconcile::delete_all(&self.achievements)
            );
            let leaderboards = leaderboards?;
            let achievements = achievements?;
            info!(
                "All configuration deleted: {} achievement(s), {} leaderboard(s)",
                achievements, leaderboards
            );
            self.render_snapshot().await
        })
        .await
    }

    /// Lists both kinds concurrently and renders app id, achievements, then leaderboards.
    pub async fn render_snapshot(&self) -> Result<String, ConfigError> {
        let achievement_kind = self.achievements.kind();
        let leaderboard_kind = self.leaderboards.kind();
        let (achievements, leaderboards) = futures::try_join!(
            async {
                self.achievements
                    .list()
                    .await
                    .map_err(|source| ConfigError::RemoteList { kind: achievement_kind, source })
            },
            async {
                self.leaderboards
                    .list()
                    .await
                    .map_err(|source| ConfigError::RemoteList { kind: leaderboard_kind, source })
            }
        )?;

        let achievement_xml = render_resources_xml(&achievements, &achievement_kind.to_string());
        let leaderboard_xml = render_resources_xml(&leaderboards, &leaderboard_kind.to_string());
        Ok(format!(
            "{}\n\n{}\n{}",
            render_app_id(&self.application_id),
            achievement_xml,
            leaderboard_xml
        ))
    }

    async fn run<F>(&self, operation: Operation, work: F) -> Result<String, ConfigError>
    where
        F: Future<Output = Result<String, ConfigError>>,
    {
        self.listener.on_signal(&OperationSignal::Started(operation));
        match work.await {
            Ok(xml) => {
                self.listener
                    .on_signal(&OperationSignal::Result(operation, xml.clone()));
                self.listener
                    .on_signal(&OperationSignal::Ended(operation, Outcome::Done));
                Ok(xml)
            }
            Err(err) => {
                self.listener.on_signal(&OperationSignal::Ended(
                    operation,
                    Outcome::DoneWithError(err.to_string()),
                ));
                Err(err)
            }
        }
    }
}
