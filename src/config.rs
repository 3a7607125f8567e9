use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::http::client::{
    DEFAULT_CONFIGURATION_URL, DEFAULT_GAMES_URL, DEFAULT_MANAGEMENT_URL, MAX_PAGE_SIZE,
};
use crate::http::{Endpoints, GamesApi};
use crate::util::error::ApiError;
use crate::util::logging::parse_level;
use crate::util::validation::verbose_result_ok;

pub const DEFAULT_CONFIG_FILE: &str = "games-config.yml";

pub const ENV_ACCESS_TOKEN: &str = "GAMES_ACCESS_TOKEN";
pub const ENV_APPLICATION_ID: &str = "GAMES_APPLICATION_ID";
pub const ENV_LOG_LEVEL: &str = "GAMES_CONFIG_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointConfig {
    pub configuration: String,
    pub management: String,
    pub games: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            configuration: String::from(DEFAULT_CONFIGURATION_URL),
            management: String::from(DEFAULT_MANAGEMENT_URL),
            games: String::from(DEFAULT_GAMES_URL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub application_id: Option<String>,
    pub sample: Option<String>,
    /// YAML catalog replacing the built-in samples.
    pub catalog: Option<PathBuf>,
    pub access_token: Option<String>,
    pub endpoints: EndpointConfig,
    pub page_size: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            application_id: None,
            sample: None,
            catalog: None,
            access_token: None,
            endpoints: EndpointConfig::default(),
            page_size: MAX_PAGE_SIZE,
            log_level: String::from("info"),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        serde_yaml::from_str(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Explicit paths must load; the default file is optional and a broken one
    /// is reported and skipped.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    verbose_result_ok(
                        format!("Ignoring unreadable {}", DEFAULT_CONFIG_FILE),
                        Self::from_file(default_path),
                    )
                    .unwrap_or_default()
                } else {
                    AppConfig::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(token) = non_empty(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        if let Some(application_id) = non_empty(ENV_APPLICATION_ID) {
            self.application_id = Some(application_id);
        }
        if let Some(level) = non_empty(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn build_api(&self) -> Result<GamesApi, ApiError> {
        let endpoints = Endpoints::parse(
            &self.endpoints.configuration,
            &self.endpoints.management,
            &self.endpoints.games,
        )?;
        Ok(GamesApi::new(endpoints, self.access_token.clone()).with_page_size(self.page_size))
    }
}
