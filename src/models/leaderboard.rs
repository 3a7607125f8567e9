use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::models::remote::LocalizedStringBundle;
use crate::models::{ConfigurationResource, ResourceInfo};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreOrder {
    LargerIsBetter,
    SmallerIsBetter,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberFormatType {
    Numeric,
    TimeDuration,
    Currency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardInfo {
    pub name: String,
    pub score_order: ScoreOrder,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFormat {
    pub number_format_type: NumberFormatType,
    pub num_decimal_places: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardDraft {
    pub name: LocalizedStringBundle,
    pub score_format: ScoreFormat,
}

/// Body of a `leaderboardConfigurations.insert` request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_order: Option<ScoreOrder>,
    pub draft: LeaderboardDraft,
}

impl LeaderboardResource {
    pub fn skeleton() -> Self {
        LeaderboardResource {
            score_order: None,
            draft: LeaderboardDraft {
                name: LocalizedStringBundle::empty_en_us(),
                score_format: ScoreFormat {
                    number_format_type: NumberFormatType::Numeric,
                    num_decimal_places: 0,
                },
            },
        }
    }
}

pub fn build_leaderboard_resource(info: &LeaderboardInfo) -> LeaderboardResource {
    let mut resource = LeaderboardResource::skeleton();
    resource.draft.name.set_first_value(info.name.clone());
    resource.score_order = Some(info.score_order);
    resource
}

impl ResourceInfo for LeaderboardInfo {
    type Resource = LeaderboardResource;

    fn name(&self) -> &str {
        &self.name
    }

    fn build_resource(&self) -> LeaderboardResource {
        build_leaderboard_resource(self)
    }
}

impl ConfigurationResource for LeaderboardResource {
    fn display_name(&self) -> &str {
        self.draft.name.first_value().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_numeric_leaderboard() {
        let resource = build_leaderboard_resource(&LeaderboardInfo {
            name: String::from("Hard"),
            score_order: ScoreOrder::SmallerIsBetter,
        });
        assert_eq!(resource.score_order, Some(ScoreOrder::SmallerIsBetter));
        assert_eq!(resource.draft.name.first_value(), Some("Hard"));
        assert_eq!(resource.draft.score_format.number_format_type, NumberFormatType::Numeric);
        assert_eq!(resource.draft.score_format.num_decimal_places, 0);
    }

    #[test]
    fn serializes_to_api_shape() {
        let resource = build_leaderboard_resource(&LeaderboardInfo {
            name: String::from("Easy"),
            score_order: ScoreOrder::LargerIsBetter,
        });
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["scoreOrder"], "LARGER_IS_BETTER");
        assert_eq!(value["draft"]["scoreFormat"]["numberFormatType"], "NUMERIC");
        assert_eq!(value["draft"]["scoreFormat"]["numDecimalPlaces"], 0);
    }

    #[test]
    fn skeleton_has_no_score_order() {
        let value = serde_json::to_value(LeaderboardResource::skeleton()).unwrap();
        assert!(value.get("scoreOrder").is_none());
    }

    #[test]
    fn score_order_parses_from_api_name() {
        assert_eq!("LARGER_IS_BETTER".parse::<ScoreOrder>().unwrap(), ScoreOrder::LargerIsBetter);
        assert!("BIGGER".parse::<ScoreOrder>().is_err());
    }
}
