use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::achievement::AchievementInfo;
use crate::models::leaderboard::LeaderboardInfo;
use crate::models::ResourceKind;
use crate::util::error::ConfigError;
use crate::util::validation::first_duplicate;

const BUILTIN_SAMPLES: &str = include_str!("samples.yml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleConfig {
    #[serde(default)]
    pub achievements: Vec<AchievementInfo>,
    #[serde(default)]
    pub leaderboards: Vec<LeaderboardInfo>,
}

impl SampleConfig {
    /// Names must be unique per resource kind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let achievement_names = self.achievements.iter().map(|info| info.name.as_str());
        if let Some(name) = first_duplicate(achievement_names) {
            return Err(duplicate_name(ResourceKind::Achievement, name));
        }
        let leaderboard_names = self.leaderboards.iter().map(|info| info.name.as_str());
        if let Some(name) = first_duplicate(leaderboard_names) {
            return Err(duplicate_name(ResourceKind::Leaderboard, name));
        }
        Ok(())
    }
}

fn duplicate_name(kind: ResourceKind, name: &str) -> ConfigError {
    ConfigError::Validation(format!("{} '{}' is listed more than once", kind, name))
}

/// Desired configuration per sample id, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    samples: BTreeMap<String, SampleConfig>,
}

impl Catalog {
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_yaml_str(BUILTIN_SAMPLES).context("Built-in sample catalog is malformed")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read catalog {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(raw)?;
        for (id, sample) in &catalog.samples {
            sample
                .validate()
                .with_context(|| format!("Sample '{}' is invalid", id))?;
        }
        Ok(catalog)
    }

    pub fn sample(&self, id: &str) -> Result<&SampleConfig, ConfigError> {
        self.samples.get(id).ok_or_else(|| {
            ConfigError::Validation(format!(
                "Unknown sample '{}' (known samples: {})",
                id,
                self.sample_ids().collect::<Vec<_>>().join(", ")
            ))
        })
    }

    pub fn sample_ids(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(|id| id.as_str())
    }
}
