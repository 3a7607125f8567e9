use serde::{Deserialize, Serialize};

use crate::models::remote::LocalizedStringBundle;
use crate::models::{ConfigurationResource, ResourceInfo};

/// Hand-authored description of an achievement, as written in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementInfo {
    pub name: String,
    pub description: String,
    pub point_value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_to_unlock: Option<u32>,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementType {
    Standard,
    Incremental,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InitialState {
    Hidden,
    Revealed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDraft {
    pub name: LocalizedStringBundle,
    pub description: LocalizedStringBundle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_value: Option<u32>,
}

/// Body of an `achievementConfigurations.insert` request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementResource {
    pub achievement_type: AchievementType,
    pub initial_state: InitialState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_to_unlock: Option<u32>,
    pub draft: AchievementDraft,
}

impl AchievementResource {
    /// Baseline every built achievement starts from. Constructed on each call.
    pub fn skeleton() -> Self {
        AchievementResource {
            achievement_type: AchievementType::Standard,
            initial_state: InitialState::Revealed,
            steps_to_unlock: None,
            draft: AchievementDraft {
                name: LocalizedStringBundle::empty_en_us(),
                description: LocalizedStringBundle::empty_en_us(),
                point_value: None,
            },
        }
    }
}

pub fn build_achievement_resource(info: &AchievementInfo) -> AchievementResource {
    let mut resource = AchievementResource::skeleton();

    resource.draft.name.set_first_value(info.name.clone());
    resource.draft.description.set_first_value(info.description.clone());
    resource.draft.point_value = Some(info.point_value);

    // zero steps means a standard achievement
    if let Some(steps) = info.steps_to_unlock.filter(|steps| *steps > 0) {
        resource.achievement_type = AchievementType::Incremental;
        resource.steps_to_unlock = Some(steps);
    }

    if info.hidden {
        resource.initial_state = InitialState::Hidden;
    }

    resource
}

impl ResourceInfo for AchievementInfo {
    type Resource = AchievementResource;

    fn name(&self) -> &str {
        &self.name
    }

    fn build_resource(&self) -> AchievementResource {
        build_achievement_resource(self)
    }
}

impl ConfigurationResource for AchievementResource {
    fn display_name(&self) -> &str {
        self.draft.name.first_value().unwrap_or_default()
    }
}
