//! `CatalogApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::{
    Configuration, DiscoverParams, Genre, MovieDetails, MovieSummary, MultiResult, PagedResponse,
    PersonDetails, PersonSummary, SearchParams, TimeWindow, TvDetails, TvSummary,
};

/// TMDB catalog API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CatalogApi: Send)]
pub trait LocalCatalogApi {
    /// Fetches trending movies for the given time window.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn trending_movies(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> Result<PagedResponse<MovieSummary>>;

    /// Fetches popular movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_movies(&self, page: u32) -> Result<PagedResponse<MovieSummary>>;

    /// Fetches top-rated movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn top_rated_movies(&self, page: u32) -> Result<PagedResponse<MovieSummary>>;

    /// Fetches upcoming movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn upcoming_movies(&self, page: u32) -> Result<PagedResponse<MovieSummary>>;

    /// Fetches movies currently in theaters.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn now_playing_movies(&self, page: u32) -> Result<PagedResponse<MovieSummary>>;

    /// Fetches movie details with credits, videos, images, reviews, and
    /// similar titles appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails>;

    /// Searches for movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_movies(&self, params: &SearchParams) -> Result<PagedResponse<MovieSummary>>;

    /// Discovers movies by filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn discover_movies(&self, params: &DiscoverParams)
    -> Result<PagedResponse<MovieSummary>>;

    /// Fetches the movie genre table.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_genres(&self) -> Result<Vec<Genre>>;

    /// Fetches trending TV series for the given time window.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn trending_tv(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> Result<PagedResponse<TvSummary>>;

    /// Fetches popular TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_tv(&self, page: u32) -> Result<PagedResponse<TvSummary>>;

    /// Fetches top-rated TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn top_rated_tv(&self, page: u32) -> Result<PagedResponse<TvSummary>>;

    /// Searches for TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_tv(&self, params: &SearchParams) -> Result<PagedResponse<TvSummary>>;

    /// Discovers TV series by filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn discover_tv(&self, params: &DiscoverParams) -> Result<PagedResponse<TvSummary>>;

    /// Fetches TV series details with credits, videos, images, reviews,
    /// and similar series appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_details(&self, series_id: u64) -> Result<TvDetails>;

    /// Fetches the TV genre table.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_genres(&self) -> Result<Vec<Genre>>;

    /// Fetches trending people for the given time window.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn trending_people(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> Result<PagedResponse<PersonSummary>>;

    /// Fetches popular people.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_people(&self, page: u32) -> Result<PagedResponse<PersonSummary>>;

    /// Fetches person details with credits, images, and external IDs
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn person_details(&self, person_id: u64) -> Result<PersonDetails>;

    /// Searches for people.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_people(&self, params: &SearchParams) -> Result<PagedResponse<PersonSummary>>;

    /// Searches across movies, TV series, and people at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn multi_search(&self, params: &SearchParams) -> Result<PagedResponse<MultiResult>>;

    /// Fetches the API configuration (image hosts and size tokens).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn configuration(&self) -> Result<Configuration>;
}
