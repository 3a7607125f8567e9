//! Hiding and unhiding players, plus the leaderboard listing used to pick them.

use std::fmt;

use async_trait::async_trait;

use crate::http::GamesApi;
use crate::models::player::{LeaderboardScores, ScoreCollection, TimeSpan};
use crate::util::error::{AdminError, ApiError};

pub const DEFAULT_MAX_RESULTS: u32 = 25;
// upper bound accepted by scores.list
pub const MAX_RESULTS_LIMIT: u32 = 30;

#[async_trait]
pub trait PlayerAdmin: Send + Sync {
    async fn hide(&self, application_id: &str, player_id: &str) -> Result<(), ApiError>;
    async fn unhide(&self, application_id: &str, player_id: &str) -> Result<(), ApiError>;
    async fn scores(&self, leaderboard_id: &str, query: &ScoreQuery) -> Result<LeaderboardScores, ApiError>;
}

#[async_trait]
impl PlayerAdmin for GamesApi {
    async fn hide(&self, application_id: &str, player_id: &str) -> Result<(), ApiError> {
        self.hide_player(application_id, player_id).await
    }

    async fn unhide(&self, application_id: &str, player_id: &str) -> Result<(), ApiError> {
        self.unhide_player(application_id, player_id).await
    }

    async fn scores(&self, leaderboard_id: &str, query: &ScoreQuery) -> Result<LeaderboardScores, ApiError> {
        self.list_scores(leaderboard_id, query.collection, query.time_span, query.max_results)
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreQuery {
    pub collection: ScoreCollection,
    pub time_span: TimeSpan,
    pub max_results: u32,
}

impl Default for ScoreQuery {
    fn default() -> Self {
        ScoreQuery {
            collection: ScoreCollection::Public,
            time_span: TimeSpan::AllTime,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationOutcome {
    Hidden,
    Unhidden,
    /// The API answered 404, which usually means the player was not hidden.
    AlreadyUnhidden,
}

impl fmt::Display for ModerationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModerationOutcome::Hidden => {
                write!(f, "Player is hidden! It may be a few seconds for this to propagate.")
            }
            ModerationOutcome::Unhidden => write!(
                f,
                "Player is unhidden! It may take up to 12 hours for this player to reappear."
            ),
            ModerationOutcome::AlreadyUnhidden => write!(
                f,
                "Got a 404. That might mean that player is already unhidden."
            ),
        }
    }
}

fn require(value: &str, what: &str) -> Result<(), AdminError> {
    if value.trim().is_empty() {
        return Err(AdminError::Validation(format!("You need to enter a valid {}.", what)));
    }
    Ok(())
}

pub async fn hide_player<P>(admin: &P, application_id: &str, player_id: &str) -> Result<ModerationOutcome, AdminError>
where
    P: PlayerAdmin + ?Sized,
{
    require(application_id, "application id")?;
    require(player_id, "player id")?;
    admin
        .hide(application_id.trim(), player_id.trim())
        .await
        .map_err(|source| AdminError::Api { action: "hide player", source })?;
    info!("Player {} hidden in application {}", player_id.trim(), application_id.trim());
    Ok(ModerationOutcome::Hidden)
}

pub async fn unhide_player<P>(admin: &P, application_id: &str, player_id: &str) -> Result<ModerationOutcome, AdminError>
where
    P: PlayerAdmin + ?Sized,
{
    require(application_id, "application id")?;
    require(player_id, "player id")?;
    match admin.unhide(application_id.trim(), player_id.trim()).await {
        Ok(()) => {
            info!("Player {} unhidden in application {}", player_id.trim(), application_id.trim());
            Ok(ModerationOutcome::Unhidden)
        }
        Err(err) if err.status_code() == Some(404) => {
            warn!("Unhide of {} returned 404: {}", player_id.trim(), err);
            Ok(ModerationOutcome::AlreadyUnhidden)
        }
        Err(source) => Err(AdminError::Api { action: "unhide player", source }),
    }
}

pub async fn top_scores<P>(admin: &P, leaderboard_id: &str, query: ScoreQuery) -> Result<LeaderboardScores, AdminError>
where
    P: PlayerAdmin + ?Sized,
{
    require(leaderboard_id, "leaderboard id")?;
    let query = ScoreQuery {
        max_results: query.max_results.clamp(1, MAX_RESULTS_LIMIT),
        ..query
    };
    let scores = admin
        .scores(leaderboard_id.trim(), &query)
        .await
        .map_err(|source| AdminError::Api { action: "list scores", source })?;
    debug!("Leaderboard {} returned {} score(s)", leaderboard_id.trim(), scores.items.len());
    Ok(scores)
}

/// Small avatar link as shown next to the player's name.
fn icon_url(avatar_image_url: Option<&str>) -> String {
    avatar_image_url
        .filter(|url| !url.is_empty())
        .map(|url| format!("{}?sz=50", url))
        .unwrap_or_default()
}

/// Plain-text table of rank, display name, icon, player id and score.
pub fn render_score_table(scores: &LeaderboardScores) -> String {
    let total = scores
        .num_scores
        .clone()
        .unwrap_or_else(|| scores.items.len().to_string());
    let header = ["RANK", "DISPLAY NAME", "ICON", "PLAYER ID", "SCORE"];
    let rows: Vec<[String; 5]> = scores
        .items
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            [
                entry.score_rank.clone().unwrap_or_else(|| (index + 1).to_string()),
                entry.player.display_name.clone(),
                icon_url(entry.player.avatar_image_url.as_deref()),
                entry.player.player_id.clone(),
                entry.formatted_score.clone().unwrap_or_else(|| entry.score_value.clone()),
            ]
        })
        .collect();

    let mut widths = header.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 5]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut table = format!("High score list, total scores on list are: {}\n", total);
    table.push_str(&format_row(header));
    table.push('\n');
    for row in &rows {
        table.push_str(&format_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
        table.push('\n');
    }
    table
}
