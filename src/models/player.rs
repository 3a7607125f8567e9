use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ScoreCollection {
    Public,
    Social,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TimeSpan {
    AllTime,
    Weekly,
    Daily,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_image_url: Option<String>,
}

// int64 fields arrive as JSON strings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardScoreEntry {
    pub player: Player,
    pub score_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_rank: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_scores: Option<String>,
    #[serde(default)]
    pub items: Vec<LeaderboardScoreEntry>,
}
