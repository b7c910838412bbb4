//! TMDB API client module.
//!
//! Handles HTTP requests against the TMDB v3 REST endpoints and
//! reshapes raw catalog records into display-friendly cards.

mod api;
mod client;
mod display;
mod error;
mod images;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{CatalogApi, LocalCatalogApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
pub use display::{MovieCard, PersonCard, SearchPage, TvCard, resolve_genre_names};
#[allow(clippy::module_name_repetitions)]
pub use error::StatusError;
pub use images::{
    BACKDROP_SIZE, POSTER_SIZE, PROFILE_SIZE, backdrop_url, image_url, poster_url, profile_url,
};
pub use types::{
    CastMember, Configuration, ConfigurationImages, Credits, CrewMember, DiscoverParams, Genre,
    GenreListResponse, ImageCollection, ImageRecord, MovieDetails, MovieSummary, MultiResult,
    PagedResponse, PersonCredit, PersonCreditList, PersonDetails, PersonExternalIds,
    PersonImageCollection, PersonSummary, ProductionCompany, ProductionCountry, Review,
    ReviewPage, SearchParams, SeasonSummary, SpokenLanguage, TimeWindow, TmdbErrorResponse,
    TvDetails, TvSummary, Video, VideoList,
};
