use reqwest::Method;

use crate::http::client::{endpoint_url, GamesApi};
use crate::models::player::{LeaderboardScores, ScoreCollection, TimeSpan};
use crate::util::error::ApiError;

impl GamesApi {
    pub async fn hide_player(&self, application_id: &str, player_id: &str) -> Result<(), ApiError> {
        let url = endpoint_url(
            &self.endpoints().management,
            &["applications", application_id, "players", "hidden", player_id],
        )?;
        self.send_empty(Method::POST, url).await
    }

    pub async fn unhide_player(&self, application_id: &str, player_id: &str) -> Result<(), ApiError> {
        let url = endpoint_url(
            &self.endpoints().management,
            &["applications", application_id, "players", "hidden", player_id],
        )?;
        self.send_empty(Method::DELETE, url).await
    }

    pub async fn list_scores(
        &self,
        leaderboard_id: &str,
        collection: ScoreCollection,
        time_span: TimeSpan,
        max_results: u32,
    ) -> Result<LeaderboardScores, ApiError> {
        let collection = collection.to_string();
        let mut url = endpoint_url(
            &self.endpoints().games,
            &["leaderboards", leaderboard_id, "scores", &collection],
        )?;
        url.query_pairs_mut()
            .append_pair("timeSpan", &time_span.to_string())
            .append_pair("maxResults", &max_results.to_string());
        self.get_json(url).await
    }
}
