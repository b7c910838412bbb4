//! `TmdbClient` - TMDB API client implementation.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalCatalogApi;
use super::error::StatusError;
use super::types::{
    Configuration, DiscoverParams, Genre, GenreListResponse, MovieDetails, MovieSummary,
    MultiResult, PagedResponse, PersonDetails, PersonSummary, SearchParams, TimeWindow, TvDetails,
    TmdbErrorResponse, TvSummary,
};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default response language.
const DEFAULT_LANGUAGE: &str = "en-US";

/// Default per-request timeout.
///
/// The upstream contract has no timeout of its own; without a bound a
/// request that never resolves would suspend its caller forever.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sub-resources appended to movie and TV detail requests.
const DETAIL_APPENDS: &str = "credits,videos,images,reviews,similar";

/// Sub-resources appended to person detail requests.
const PERSON_APPENDS: &str = "credits,images,external_ids";

/// Last issued cache-buster value.
static LAST_CACHE_BUSTER: AtomicI64 = AtomicI64::new(0);

/// Returns the current Unix time in milliseconds, clamped to be
/// monotonically non-decreasing across calls.
fn cache_buster() -> i64 {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_CACHE_BUSTER.fetch_max(now, Ordering::SeqCst);
    now.max(prev)
}

/// TMDB API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer API token.
    api_token: String,
    /// Response language applied to every request.
    language: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
    language: Option<String>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
            language: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the response language (default: "en-US").
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the per-request timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_token = self.api_token.context("api_token is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token,
            language: self
                .language
                .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE)),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Sends a GET request with Bearer auth and query params.
    ///
    /// `None`-valued params are omitted from the query string; a
    /// `language` param and a cache-busting `timestamp` param are always
    /// appended. Failures propagate once to the caller: a non-success
    /// status becomes a [`StatusError`], transport and decode failures
    /// are logged and propagated unchanged. No retries.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let mut pairs: Vec<(&str, String)> = query
            .iter()
            .filter_map(|(key, value)| value.clone().map(|v| (*key, v)))
            .collect();
        pairs.push(("language", self.language.clone()));
        pairs.push(("timestamp", cache_buster().to_string()));

        let request = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(&pairs)
            .build()
            .with_context(|| format!("failed to build request: {path}"))?;

        tracing::debug!(url = %request.url(), "TMDB API request");

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(path, %error, "TMDB API request failed");
                return Err(anyhow::Error::new(error).context(format!("request failed: {path}")));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            let message = serde_json::from_str::<TmdbErrorResponse>(&body)
                .map_or(body, |error| error.status_message);
            return Err(StatusError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(error) => {
                tracing::error!(path, %error, "failed to decode TMDB JSON response");
                Err(anyhow::Error::new(error)
                    .context(format!("failed to decode JSON response: {path}")))
            }
        }
    }

    /// Query pairs for a search endpoint.
    fn search_query(params: &SearchParams) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("query", Some(params.query.clone())),
            ("page", Some(params.page.to_string())),
            ("include_adult", Some(params.include_adult.to_string())),
        ]
    }

    /// Query pairs for a discover endpoint.
    ///
    /// `year_param` differs between movies and TV.
    fn discover_query<'a>(
        params: &DiscoverParams,
        year_param: &'a str,
    ) -> Vec<(&'a str, Option<String>)> {
        vec![
            ("page", Some(params.page.max(1).to_string())),
            ("with_genres", params.genre.map(|g| g.to_string())),
            (year_param, params.year.map(|y| y.to_string())),
            ("sort_by", params.sort_by.clone()),
            ("include_adult", Some(params.include_adult.to_string())),
        ]
    }

    /// Query pair for plain paged endpoints.
    fn page_query(page: u32) -> Vec<(&'static str, Option<String>)> {
        vec![("page", Some(page.max(1).to_string()))]
    }
}

impl LocalCatalogApi for TmdbClient {
    #[instrument(skip_all)]
    async fn trending_movies(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> Result<PagedResponse<MovieSummary>> {
        let path = format!("trending/movie/{}", window.as_str());
        self.get_json(&path, &Self::page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn popular_movies(&self, page: u32) -> Result<PagedResponse<MovieSummary>> {
        self.get_json("movie/popular", &Self::page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn top_rated_movies(&self, page: u32) -> Result<PagedResponse<MovieSummary>> {
        self.get_json("movie/top_rated", &Self::page_query(page))
            .await
    }

    #[instrument(skip_all)]
    async fn upcoming_movies(&self, page: u32) -> Result<PagedResponse<MovieSummary>> {
        self.get_json("movie/upcoming", &Self::page_query(page))
            .await
    }

    #[instrument(skip_all)]
    async fn now_playing_movies(&self, page: u32) -> Result<PagedResponse<MovieSummary>> {
        self.get_json("movie/now_playing", &Self::page_query(page))
            .await
    }

    #[instrument(skip_all)]
    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        let path = format!("movie/{movie_id}");
        let query = [("append_to_response", Some(String::from(DETAIL_APPENDS)))];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn search_movies(&self, params: &SearchParams) -> Result<PagedResponse<MovieSummary>> {
        self.get_json("search/movie", &Self::search_query(params))
            .await
    }

    #[instrument(skip_all)]
    async fn discover_movies(
        &self,
        params: &DiscoverParams,
    ) -> Result<PagedResponse<MovieSummary>> {
        let query = Self::discover_query(params, "primary_release_year");
        self.get_json("discover/movie", &query).await
    }

    #[instrument(skip_all)]
    async fn movie_genres(&self) -> Result<Vec<Genre>> {
        let response: GenreListResponse = self.get_json("genre/movie/list", &[]).await?;
        Ok(response.genres)
    }

    #[instrument(skip_all)]
    async fn trending_tv(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> Result<PagedResponse<TvSummary>> {
        let path = format!("trending/tv/{}", window.as_str());
        self.get_json(&path, &Self::page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn popular_tv(&self, page: u32) -> Result<PagedResponse<TvSummary>> {
        self.get_json("tv/popular", &Self::page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn top_rated_tv(&self, page: u32) -> Result<PagedResponse<TvSummary>> {
        self.get_json("tv/top_rated", &Self::page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn search_tv(&self, params: &SearchParams) -> Result<PagedResponse<TvSummary>> {
        self.get_json("search/tv", &Self::search_query(params))
            .await
    }

    #[instrument(skip_all)]
    async fn discover_tv(&self, params: &DiscoverParams) -> Result<PagedResponse<TvSummary>> {
        let query = Self::discover_query(params, "first_air_date_year");
        self.get_json("discover/tv", &query).await
    }

    #[instrument(skip_all)]
    async fn tv_details(&self, series_id: u64) -> Result<TvDetails> {
        let path = format!("tv/{series_id}");
        let query = [("append_to_response", Some(String::from(DETAIL_APPENDS)))];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn tv_genres(&self) -> Result<Vec<Genre>> {
        let response: GenreListResponse = self.get_json("genre/tv/list", &[]).await?;
        Ok(response.genres)
    }

    #[instrument(skip_all)]
    async fn trending_people(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> Result<PagedResponse<PersonSummary>> {
        let path = format!("trending/person/{}", window.as_str());
        self.get_json(&path, &Self::page_query(page)).await
    }

    #[instrument(skip_all)]
    async fn popular_people(&self, page: u32) -> Result<PagedResponse<PersonSummary>> {
        self.get_json("person/popular", &Self::page_query(page))
            .await
    }

    #[instrument(skip_all)]
    async fn person_details(&self, person_id: u64) -> Result<PersonDetails> {
        let path = format!("person/{person_id}");
        let query = [("append_to_response", Some(String::from(PERSON_APPENDS)))];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn search_people(&self, params: &SearchParams) -> Result<PagedResponse<PersonSummary>> {
        self.get_json("search/person", &Self::search_query(params))
            .await
    }

    #[instrument(skip_all)]
    async fn multi_search(&self, params: &SearchParams) -> Result<PagedResponse<MultiResult>> {
        self.get_json("search/multi", &Self::search_query(params))
            .await
    }

    #[instrument(skip_all)]
    async fn configuration(&self) -> Result<Configuration> {
        self.get_json("configuration", &[]).await
    }
}
