use reqwest::header::CONTENT_LENGTH;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::http::payload::{describe_error_body, ListResponse};
use crate::models::remote::RemoteItem;
use crate::models::ResourceKind;
use crate::util::error::ApiError;

pub const DEFAULT_CONFIGURATION_URL: &str = "https://gamesconfiguration.googleapis.com/games/v1configuration";
pub const DEFAULT_MANAGEMENT_URL: &str = "https://gamesmanagement.googleapis.com/games/v1management";
pub const DEFAULT_GAMES_URL: &str = "https://games.googleapis.com/games/v1";

// largest page the configuration API hands out
pub const MAX_PAGE_SIZE: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub configuration: Url,
    pub management: Url,
    pub games: Url,
}

impl Endpoints {
    pub fn parse(configuration: &str, management: &str, games: &str) -> Result<Self, ApiError> {
        Ok(Endpoints {
            configuration: Url::parse(configuration)?,
            management: Url::parse(management)?,
            games: Url::parse(games)?,
        })
    }
}

/// Appends percent-encoded path segments to a base url.
pub fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Thin reqwest wrapper over the Games configuration, management and games APIs.
#[derive(Clone)]
pub struct GamesApi {
    http: Client,
    endpoints: Endpoints,
    access_token: Option<String>,
    page_size: u32,
}

impl GamesApi {
    pub fn new(endpoints: Endpoints, access_token: Option<String>) -> Self {
        GamesApi {
            http: Client::new(),
            endpoints,
            access_token: access_token.filter(|token| !token.trim().is_empty()),
            page_size: MAX_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.http.request(method, url);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            code: status.as_u16(),
            message: describe_error_body(status.as_u16(), &body),
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = Self::send(self.request(Method::GET, url)).await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", url);
        let response = Self::send(self.request(Method::POST, url).json(body)).await?;
        Self::read_json(response).await
    }

    /// Request without a body whose response body is ignored.
    pub(crate) async fn send_empty(&self, method: Method, url: Url) -> Result<(), ApiError> {
        debug!("{} {}", method, url);
        let mut request = self.request(method.clone(), url);
        if method == Method::POST {
            request = request.header(CONTENT_LENGTH, "0");
        }
        Self::send(request).await?;
        Ok(())
    }

    /// Every configuration of `kind` for the application, following page tokens.
    pub async fn list_configurations(
        &self,
        kind: ResourceKind,
        application_id: &str,
    ) -> Result<Vec<RemoteItem>, ApiError> {
        let base = endpoint_url(
            &self.endpoints.configuration,
            &["applications", application_id, kind.collection()],
        )?;
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut url = base.clone();
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("maxResults", &self.page_size.to_string());
                if let Some(token) = &page_token {
                    query.append_pair("pageToken", token);
                }
            }
            let page: ListResponse<RemoteItem> = self.get_json(url).await?;
            debug!("Fetched {} {} configuration(s)", page.items.len(), kind);
            items.extend(page.items);
            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) if page_token.as_deref() == Some(token.as_str()) => {
                    warn!("Server repeated page token for {} list, stopping", kind);
                    break;
                }
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        Ok(items)
    }

    pub async fn insert_configuration<R>(
        &self,
        kind: ResourceKind,
        application_id: &str,
        resource: &R,
    ) -> Result<RemoteItem, ApiError>
    where
        R: Serialize + Sync,
    {
        let url = endpoint_url(
            &self.endpoints.configuration,
            &["applications", application_id, kind.collection()],
        )?;
        self.post_json(url, resource).await
    }

    pub async fn delete_configuration(&self, kind: ResourceKind, id: &str) -> Result<(), ApiError> {
        let url = endpoint_url(&self.endpoints.configuration, &[kind.collection(), id])?;
        self.send_empty(Method::DELETE, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::parse(DEFAULT_CONFIGURATION_URL, DEFAULT_MANAGEMENT_URL, DEFAULT_GAMES_URL).unwrap()
    }

    #[test]
    fn builds_list_url_under_versioned_base() {
        let url = endpoint_url(
            &endpoints().configuration,
            &["applications", "12345", ResourceKind::Achievement.collection()],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://gamesconfiguration.googleapis.com/games/v1configuration/applications/12345/achievements"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let base = Url::parse("http://localhost:8080/v1/").unwrap();
        let url = endpoint_url(&base, &["leaderboards", "abc"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/leaderboards/abc");
    }

    #[test]
    fn path_segments_are_encoded() {
        let base = Url::parse("http://localhost/v1").unwrap();
        let url = endpoint_url(&base, &["achievements", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost/v1/achievements/a%2Fb%20c");
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        assert!(matches!(
            Endpoints::parse("not a url", DEFAULT_MANAGEMENT_URL, DEFAULT_GAMES_URL),
            Err(ApiError::Url(_))
        ));
    }

    #[test]
    fn page_size_is_clamped() {
        let api = GamesApi::new(endpoints(), Some(String::from("  "))).with_page_size(10_000);
        assert_eq!(api.page_size, MAX_PAGE_SIZE);
        assert!(api.access_token.is_none());
    }
}
