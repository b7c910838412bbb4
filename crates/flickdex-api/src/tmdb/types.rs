//! TMDB API response types and request parameters.

use serde::Deserialize;

// --- Paged list envelope ---

/// Paged list response shared by every TMDB list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedResponse<T> {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Records on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u64,
}

// --- Movies ---

/// A movie record from a list endpoint (search, trending, discover, ...).
///
/// List records carry `genre_ids` only; `genres` objects appear on
/// [`MovieDetails`].
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Release date (YYYY-MM-DD or null).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average (0 when unrated).
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u64,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Video flag.
    #[serde(default)]
    pub video: bool,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Response from `movie/{id}` with
/// `append_to_response=credits,videos,images,reviews,similar`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID (e.g. `tt0133093`), absent for unmatched titles.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Localized title.
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Release date (YYYY-MM-DD or null).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Release status (e.g. "Released").
    #[serde(default)]
    pub status: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Production budget in USD.
    #[serde(default)]
    pub budget: Option<u64>,
    /// Revenue in USD.
    #[serde(default)]
    pub revenue: Option<u64>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average (0 when unrated).
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u64,
    /// Genres as `{id, name}` objects.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Video flag.
    #[serde(default)]
    pub video: bool,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Appended credits.
    #[serde(default)]
    pub credits: Option<Credits>,
    /// Appended videos.
    #[serde(default)]
    pub videos: Option<VideoList>,
    /// Appended images.
    #[serde(default)]
    pub images: Option<ImageCollection>,
    /// Appended reviews.
    #[serde(default)]
    pub reviews: Option<ReviewPage>,
    /// Appended similar movies.
    #[serde(default)]
    pub similar: Option<PagedResponse<MovieSummary>>,
}

/// Production company entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCompany {
    /// TMDB company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Logo image path.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Origin country (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Option<String>,
}

/// Production country entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCountry {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Country name.
    pub name: String,
}

/// Spoken language entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SpokenLanguage {
    /// Language code (ISO 639-1).
    pub iso_639_1: String,
    /// Language name.
    pub name: String,
    /// English language name.
    #[serde(default)]
    pub english_name: Option<String>,
}

// --- TV ---

/// A TV series record from a list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TvSummary {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// First air date (YYYY-MM-DD or null).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average (0 when unrated).
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u64,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Response from `tv/{id}` with
/// `append_to_response=credits,videos,images,reviews,similar`.
#[derive(Debug, Clone, Deserialize)]
pub struct TvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// First air date.
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Last air date.
    #[serde(default)]
    pub last_air_date: Option<String>,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    /// Season summaries.
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    /// Status (e.g. "Returning Series", "Ended").
    #[serde(default)]
    pub status: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average (0 when unrated).
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u64,
    /// Genres as `{id, name}` objects.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Appended credits.
    #[serde(default)]
    pub credits: Option<Credits>,
    /// Appended videos.
    #[serde(default)]
    pub videos: Option<VideoList>,
    /// Appended images.
    #[serde(default)]
    pub images: Option<ImageCollection>,
    /// Appended reviews.
    #[serde(default)]
    pub reviews: Option<ReviewPage>,
    /// Appended similar series.
    #[serde(default)]
    pub similar: Option<PagedResponse<TvSummary>>,
}

/// Season summary within TV details.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Number of episodes in this season.
    #[serde(default)]
    pub episode_count: u32,
    /// Air date of this season.
    #[serde(default)]
    pub air_date: Option<String>,
    /// Season name.
    #[serde(default)]
    pub name: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
}

// --- People ---

/// A person record from a list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSummary {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Department the person is known for (e.g. "Acting").
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Gender code (0 unknown, 1 female, 2 male, 3 non-binary).
    #[serde(default)]
    pub gender: Option<u8>,
    /// Works the person is known for (mixed movie/TV records).
    #[serde(default)]
    pub known_for: Vec<MultiResult>,
}

/// Response from `person/{id}` with
/// `append_to_response=credits,images,external_ids`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Biography text.
    #[serde(default)]
    pub biography: Option<String>,
    /// Birthday (YYYY-MM-DD).
    #[serde(default)]
    pub birthday: Option<String>,
    /// Deathday (YYYY-MM-DD), absent for living people.
    #[serde(default)]
    pub deathday: Option<String>,
    /// Place of birth.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Department the person is known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Gender code.
    #[serde(default)]
    pub gender: Option<u8>,
    /// Alternative names.
    #[serde(default)]
    pub also_known_as: Vec<String>,
    /// IMDb ID (e.g. `nm0000206`).
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Appended credits.
    #[serde(default)]
    pub credits: Option<PersonCreditList>,
    /// Appended images.
    #[serde(default)]
    pub images: Option<PersonImageCollection>,
    /// Appended external IDs.
    #[serde(default)]
    pub external_ids: Option<PersonExternalIds>,
}

/// Appended credit list on person details.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCreditList {
    /// Credits where the person appears on screen.
    #[serde(default)]
    pub cast: Vec<PersonCredit>,
    /// Credits where the person worked behind the camera.
    #[serde(default)]
    pub crew: Vec<PersonCredit>,
}

/// A single movie or TV credit on a person record.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCredit {
    /// TMDB ID of the credited work.
    pub id: u64,
    /// Movie title (absent for TV credits).
    #[serde(default)]
    pub title: Option<String>,
    /// Series name (absent for movie credits).
    #[serde(default)]
    pub name: Option<String>,
    /// Character played (cast credits).
    #[serde(default)]
    pub character: Option<String>,
    /// Job title (crew credits).
    #[serde(default)]
    pub job: Option<String>,
    /// Media type discriminator when present ("movie" or "tv").
    #[serde(default)]
    pub media_type: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release date (movie credits).
    #[serde(default)]
    pub release_date: Option<String>,
    /// First air date (TV credits).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
}

/// Appended image collection on person details.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonImageCollection {
    /// Profile images.
    #[serde(default)]
    pub profiles: Vec<ImageRecord>,
}

/// Appended external IDs on person details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonExternalIds {
    /// IMDb ID.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Facebook handle.
    #[serde(default)]
    pub facebook_id: Option<String>,
    /// Instagram handle.
    #[serde(default)]
    pub instagram_id: Option<String>,
    /// Twitter/X handle.
    #[serde(default)]
    pub twitter_id: Option<String>,
}

// --- Multi-search ---

/// A record from `search/multi`, discriminated by `media_type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "media_type")]
pub enum MultiResult {
    /// A movie record.
    #[serde(rename = "movie")]
    Movie(MovieSummary),
    /// A TV series record.
    #[serde(rename = "tv")]
    Tv(TvSummary),
    /// A person record.
    #[serde(rename = "person")]
    Person(PersonSummary),
}

// --- Appended sub-objects ---

/// Appended credits on movie/TV details.
#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    /// Cast members.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Crew members.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// A cast entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Billing order.
    #[serde(default)]
    pub order: u32,
}

/// A crew entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Job title (e.g. "Director").
    #[serde(default)]
    pub job: Option<String>,
    /// Department (e.g. "Directing").
    #[serde(default)]
    pub department: Option<String>,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Appended video list.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoList {
    /// Video records.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A video record (trailer, teaser, clip, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    /// TMDB video ID.
    pub id: String,
    /// Provider video key (e.g. a YouTube ID).
    pub key: String,
    /// Video title.
    pub name: String,
    /// Hosting site (e.g. "YouTube").
    pub site: String,
    /// Video kind (e.g. "Trailer").
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Official upload flag.
    #[serde(default)]
    pub official: bool,
}

/// Appended image collection on movie/TV details.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageCollection {
    /// Backdrop images.
    #[serde(default)]
    pub backdrops: Vec<ImageRecord>,
    /// Poster images.
    #[serde(default)]
    pub posters: Vec<ImageRecord>,
    /// Logo images.
    #[serde(default)]
    pub logos: Vec<ImageRecord>,
}

/// A single image record.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    /// Image path fragment.
    pub file_path: String,
    /// Image width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Image height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
    /// Image language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: Option<String>,
}

/// Appended review page.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewPage {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Review records.
    #[serde(default)]
    pub results: Vec<Review>,
    /// Total number of reviews.
    #[serde(default)]
    pub total_results: u64,
}

/// A single review.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    /// TMDB review ID.
    pub id: String,
    /// Review author.
    pub author: String,
    /// Review body.
    #[serde(default)]
    pub content: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

// --- Genres & configuration ---

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u64,
    /// Genre name.
    pub name: String,
}

/// Response from `genre/movie/list` and `genre/tv/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreListResponse {
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Response from `configuration`.
#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    /// Image host configuration.
    pub images: ConfigurationImages,
    /// Keys tracked by the change endpoints.
    #[serde(default)]
    pub change_keys: Vec<String>,
}

/// Image host configuration block.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigurationImages {
    /// Plain HTTP image base URL.
    pub base_url: String,
    /// HTTPS image base URL.
    #[serde(default)]
    pub secure_base_url: Option<String>,
    /// Available poster size tokens.
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    /// Available backdrop size tokens.
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    /// Available profile size tokens.
    #[serde(default)]
    pub profile_sizes: Vec<String>,
}

// --- Error response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}

// --- Request parameters ---

/// Trending window for the `trending/{type}/{window}` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    /// Trending today.
    Day,
    /// Trending this week.
    #[default]
    Week,
}

impl TimeWindow {
    /// Path segment for this window.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

/// Parameters for the `search/movie`, `search/tv`, `search/person`, and
/// `search/multi` endpoints.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Include adult content (default: false).
    pub include_adult: bool,
}

impl SearchParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            include_adult: false,
        }
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the adult-content flag.
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = include_adult;
        self
    }
}

/// Parameters for the `discover/movie` and `discover/tv` endpoints.
#[derive(Debug, Clone, Default)]
pub struct DiscoverParams {
    /// Result page (default: 1 when 0).
    pub page: u32,
    /// Genre filter (`with_genres`).
    pub genre: Option<u64>,
    /// Year filter (`primary_release_year` for movies,
    /// `first_air_date_year` for TV).
    pub year: Option<u32>,
    /// Sort order (`sort_by`, e.g. "popularity.desc").
    pub sort_by: Option<String>,
    /// Include adult content (default: false).
    pub include_adult: bool,
}

impl DiscoverParams {
    /// Creates empty discover params (first page, no filters).
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the genre filter.
    #[must_use]
    pub const fn genre(mut self, genre: u64) -> Self {
        self.genre = Some(genre);
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_time_window_paths() {
        // Arrange & Act & Assert
        assert_eq!(TimeWindow::Day.as_str(), "day");
        assert_eq!(TimeWindow::Week.as_str(), "week");
        assert_eq!(TimeWindow::default(), TimeWindow::Week);
    }

    #[test]
    fn test_search_params_defaults() {
        // Arrange & Act
        let params = SearchParams::new("matrix");

        // Assert
        assert_eq!(params.query, "matrix");
        assert_eq!(params.page, 1);
        assert!(!params.include_adult);
    }

    #[test]
    fn test_discover_params_builder() {
        // Arrange & Act
        let params = DiscoverParams::new()
            .genre(28)
            .year(1999)
            .sort_by("vote_average.desc")
            .page(2);

        // Assert
        assert_eq!(params.genre, Some(28));
        assert_eq!(params.year, Some(1999));
        assert_eq!(params.sort_by.as_deref(), Some("vote_average.desc"));
        assert_eq!(params.page, 2);
    }

    #[test]
    fn test_multi_result_dispatches_on_media_type() {
        // Arrange
        let json = r#"[
            {"media_type":"movie","id":603,"title":"The Matrix"},
            {"media_type":"tv","id":1396,"name":"Breaking Bad"},
            {"media_type":"person","id":6384,"name":"Keanu Reeves"}
        ]"#;

        // Act
        let results: Vec<MultiResult> = serde_json::from_str(json).unwrap();

        // Assert
        assert!(matches!(results[0], MultiResult::Movie(ref m) if m.id == 603));
        assert!(matches!(results[1], MultiResult::Tv(ref t) if t.id == 1396));
        assert!(matches!(results[2], MultiResult::Person(ref p) if p.id == 6384));
    }

    #[test]
    fn test_paged_response_defaults_missing_totals() {
        // Arrange
        let json = r#"{"results":[{"id":1,"title":"A"}]}"#;

        // Act
        let page: PagedResponse<MovieSummary> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.page, 0);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_results, 0);
    }

    #[test]
    fn test_parse_error_response() {
        // Arrange
        let json = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        // Act
        let error: TmdbErrorResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(error.status_code, 7);
        assert!(!error.success);
        assert!(error.status_message.contains("Invalid API key"));
    }
}
