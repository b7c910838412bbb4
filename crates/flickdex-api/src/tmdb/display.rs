//! Display-shape transforms for catalog records.
//!
//! Pure mappings: one external record in, one display card out. Cards
//! are rebuilt fresh on every request; nothing here caches or tracks
//! identity across requests.

use serde::Serialize;
use serde_json::json;

use super::images::{backdrop_url, poster_url, profile_url};
use super::types::{
    Genre, MovieDetails, MovieSummary, MultiResult, PagedResponse, PersonSummary, TvDetails,
    TvSummary,
};

/// Splits genre data into an id list and a name list.
///
/// Detail records carry `genres` objects and yield real names. List
/// records carry bare `genre_ids`; their names stay as stringified ids
/// until [`resolve_genre_names`] joins them against a genre table.
fn split_genres(genres: &[Genre], genre_ids: &[u64]) -> (Vec<u64>, Vec<String>) {
    if !genres.is_empty() {
        (
            genres.iter().map(|g| g.id).collect(),
            genres.iter().map(|g| g.name.clone()).collect(),
        )
    } else if !genre_ids.is_empty() {
        (
            genre_ids.to_vec(),
            genre_ids.iter().map(ToString::to_string).collect(),
        )
    } else {
        (Vec::new(), Vec::new())
    }
}

/// Parses the year out of a `YYYY-MM-DD` date string.
fn release_year(date: Option<&str>) -> Option<i32> {
    date?.split('-').next()?.parse().ok()
}

/// Formats a vote average to one decimal; absent when unrated.
fn format_rating(vote_average: f64) -> Option<String> {
    (vote_average > 0.0).then(|| format!("{vote_average:.1}"))
}

/// Joins genre ids against a fetched genre table.
///
/// Ids missing from the table keep their stringified form.
#[must_use]
pub fn resolve_genre_names(genre_ids: &[u64], table: &[Genre]) -> Vec<String> {
    genre_ids
        .iter()
        .map(|id| {
            table
                .iter()
                .find(|g| g.id == *id)
                .map_or_else(|| id.to_string(), |g| g.name.clone())
        })
        .collect()
}

// --- Movie ---

/// A movie reshaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID, or `tmdb_{id}` when the record carries none.
    pub external_id: String,
    /// Title.
    pub title: String,
    /// Release year.
    pub year: Option<i32>,
    /// Poster URL at the default poster size.
    pub poster: Option<String>,
    /// Backdrop URL at the default backdrop size.
    pub backdrop: Option<String>,
    /// Rating formatted to one decimal; absent when unrated.
    pub rating: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Genre ids.
    pub genre_ids: Vec<u64>,
    /// Genre names (stringified ids for list records, pending lookup).
    pub genre_names: Vec<String>,
    /// Release date.
    pub release_date: Option<String>,
    /// Runtime in minutes (detail records only).
    pub runtime: Option<u32>,
    /// Raw vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u64,
    /// Popularity score.
    pub popularity: f64,
    /// Original language.
    pub original_language: Option<String>,
    /// Original title.
    pub original_title: Option<String>,
    /// Adult flag.
    pub adult: bool,
    /// Video flag.
    pub video: bool,
    /// Production budget (detail records only).
    pub budget: Option<u64>,
    /// Revenue (detail records only).
    pub revenue: Option<u64>,
    /// Release status (detail records only).
    pub status: Option<String>,
    /// Tagline (detail records only).
    pub tagline: Option<String>,
}

impl MovieCard {
    /// Transforms a list record.
    #[must_use]
    pub fn from_summary(movie: &MovieSummary) -> Self {
        let (genre_ids, genre_names) = split_genres(&[], &movie.genre_ids);
        Self {
            id: movie.id,
            external_id: format!("tmdb_{}", movie.id),
            title: movie.title.clone(),
            year: release_year(movie.release_date.as_deref()),
            poster: poster_url(movie.poster_path.as_deref()),
            backdrop: backdrop_url(movie.backdrop_path.as_deref()),
            rating: format_rating(movie.vote_average),
            overview: movie.overview.clone(),
            genre_ids,
            genre_names,
            release_date: movie.release_date.clone(),
            runtime: None,
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
            popularity: movie.popularity,
            original_language: movie.original_language.clone(),
            original_title: movie.original_title.clone(),
            adult: movie.adult,
            video: movie.video,
            budget: None,
            revenue: None,
            status: None,
            tagline: None,
        }
    }

    /// Transforms a detail record.
    #[must_use]
    pub fn from_details(movie: &MovieDetails) -> Self {
        let (genre_ids, genre_names) = split_genres(&movie.genres, &[]);
        Self {
            id: movie.id,
            external_id: movie
                .imdb_id
                .clone()
                .unwrap_or_else(|| format!("tmdb_{}", movie.id)),
            title: movie.title.clone(),
            year: release_year(movie.release_date.as_deref()),
            poster: poster_url(movie.poster_path.as_deref()),
            backdrop: backdrop_url(movie.backdrop_path.as_deref()),
            rating: format_rating(movie.vote_average),
            overview: movie.overview.clone(),
            genre_ids,
            genre_names,
            release_date: movie.release_date.clone(),
            runtime: movie.runtime,
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
            popularity: movie.popularity,
            original_language: movie.original_language.clone(),
            original_title: movie.original_title.clone(),
            adult: movie.adult,
            video: movie.video,
            budget: movie.budget,
            revenue: movie.revenue,
            status: movie.status.clone(),
            tagline: movie.tagline.clone(),
        }
    }

    /// Replaces stringified genre ids with real names from a genre table.
    pub fn resolve_genres(&mut self, table: &[Genre]) {
        self.genre_names = resolve_genre_names(&self.genre_ids, table);
    }

    /// Renders the dual-keyed legacy object (`title`/`Title`, ...) for
    /// consumers that still expect the old field naming. The card itself
    /// stores every field once.
    #[must_use]
    pub fn compat_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "imdbID": self.external_id,
            "title": self.title,
            "Title": self.title,
            "year": self.year,
            "Year": self.year,
            "poster": self.poster,
            "Poster": self.poster,
            "backdrop": self.backdrop,
            "rating": self.rating,
            "imdbRating": self.rating,
            "overview": self.overview,
            "genre": self.genre_ids,
            "genreNames": self.genre_names,
            "releaseDate": self.release_date,
            "runtime": self.runtime,
            "voteCount": self.vote_count,
            "popularity": self.popularity,
            "originalLanguage": self.original_language,
            "originalTitle": self.original_title,
            "adult": self.adult,
            "video": self.video,
            "voteAverage": self.vote_average,
            "budget": self.budget,
            "revenue": self.revenue,
            "status": self.status,
            "tagline": self.tagline,
        })
    }
}

// --- TV ---

/// A TV series reshaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvCard {
    /// TMDB series ID.
    pub id: u64,
    /// Synthetic external ID (`tmdb_tv_{id}`; TV records carry no IMDb ID).
    pub external_id: String,
    /// Series name.
    pub title: String,
    /// First-air year.
    pub year: Option<i32>,
    /// Poster URL at the default poster size.
    pub poster: Option<String>,
    /// Backdrop URL at the default backdrop size.
    pub backdrop: Option<String>,
    /// Rating formatted to one decimal; absent when unrated.
    pub rating: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Genre ids.
    pub genre_ids: Vec<u64>,
    /// Genre names (stringified ids for list records, pending lookup).
    pub genre_names: Vec<String>,
    /// First air date.
    pub first_air_date: Option<String>,
    /// Last air date (detail records only).
    pub last_air_date: Option<String>,
    /// Number of seasons (detail records only).
    pub number_of_seasons: Option<u32>,
    /// Number of episodes (detail records only).
    pub number_of_episodes: Option<u32>,
    /// Status (detail records only).
    pub status: Option<String>,
    /// Raw vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u64,
    /// Popularity score.
    pub popularity: f64,
    /// Original language.
    pub original_language: Option<String>,
    /// Original name.
    pub original_name: Option<String>,
}

impl TvCard {
    /// Transforms a list record.
    #[must_use]
    pub fn from_summary(show: &TvSummary) -> Self {
        let (genre_ids, genre_names) = split_genres(&[], &show.genre_ids);
        Self {
            id: show.id,
            external_id: format!("tmdb_tv_{}", show.id),
            title: show.name.clone(),
            year: release_year(show.first_air_date.as_deref()),
            poster: poster_url(show.poster_path.as_deref()),
            backdrop: backdrop_url(show.backdrop_path.as_deref()),
            rating: format_rating(show.vote_average),
            overview: show.overview.clone(),
            genre_ids,
            genre_names,
            first_air_date: show.first_air_date.clone(),
            last_air_date: None,
            number_of_seasons: None,
            number_of_episodes: None,
            status: None,
            vote_average: show.vote_average,
            vote_count: show.vote_count,
            popularity: show.popularity,
            original_language: show.original_language.clone(),
            original_name: show.original_name.clone(),
        }
    }

    /// Transforms a detail record.
    #[must_use]
    pub fn from_details(show: &TvDetails) -> Self {
        let (genre_ids, genre_names) = split_genres(&show.genres, &[]);
        Self {
            id: show.id,
            external_id: format!("tmdb_tv_{}", show.id),
            title: show.name.clone(),
            year: release_year(show.first_air_date.as_deref()),
            poster: poster_url(show.poster_path.as_deref()),
            backdrop: backdrop_url(show.backdrop_path.as_deref()),
            rating: format_rating(show.vote_average),
            overview: show.overview.clone(),
            genre_ids,
            genre_names,
            first_air_date: show.first_air_date.clone(),
            last_air_date: show.last_air_date.clone(),
            number_of_seasons: show.number_of_seasons,
            number_of_episodes: show.number_of_episodes,
            status: show.status.clone(),
            vote_average: show.vote_average,
            vote_count: show.vote_count,
            popularity: show.popularity,
            original_language: show.original_language.clone(),
            original_name: show.original_name.clone(),
        }
    }

    /// Replaces stringified genre ids with real names from a genre table.
    pub fn resolve_genres(&mut self, table: &[Genre]) {
        self.genre_names = resolve_genre_names(&self.genre_ids, table);
    }
}

// --- Person ---

/// A person reshaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonCard {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Profile URL at the default profile size.
    pub profile: Option<String>,
    /// Department the person is known for ("Actor" when absent).
    pub known_for: String,
    /// Popularity score.
    pub popularity: f64,
    /// Adult flag.
    pub adult: bool,
    /// Gender code.
    pub gender: Option<u8>,
    /// Titles of the works the person is known for.
    pub known_for_titles: Vec<String>,
}

impl From<&PersonSummary> for PersonCard {
    fn from(person: &PersonSummary) -> Self {
        let known_for_titles = person
            .known_for
            .iter()
            .map(|entry| match entry {
                MultiResult::Movie(m) => m.title.clone(),
                MultiResult::Tv(t) => t.name.clone(),
                MultiResult::Person(p) => p.name.clone(),
            })
            .collect();
        Self {
            id: person.id,
            name: person.name.clone(),
            profile: profile_url(person.profile_path.as_deref()),
            known_for: person
                .known_for_department
                .clone()
                .unwrap_or_else(|| String::from("Actor")),
            popularity: person.popularity,
            adult: person.adult,
            gender: person.gender,
            known_for_titles,
        }
    }
}

// --- Search page ---

/// A transformed movie search page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    /// Transformed results.
    pub results: Vec<MovieCard>,
    /// Total result count across all pages.
    pub total_results: u64,
}

impl SearchPage {
    /// Transforms a movie list response.
    #[must_use]
    pub fn from_movies(page: &PagedResponse<MovieSummary>) -> Self {
        Self {
            results: page.results.iter().map(MovieCard::from_summary).collect(),
            total_results: page.total_results,
        }
    }

    /// Renders the legacy search envelope (`Search`/`totalResults`).
    #[must_use]
    pub fn compat_json(&self) -> serde_json::Value {
        json!({
            "Search": self.results.iter().map(MovieCard::compat_json).collect::<Vec<_>>(),
            "totalResults": self.total_results,
            "Response": "True",
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    /// Minimal movie list record.
    fn summary(id: u64, genre_ids: Vec<u64>) -> MovieSummary {
        serde_json::from_value(json!({
            "id": id,
            "title": "The Matrix",
            "release_date": "1999-03-30",
            "poster_path": "/poster.jpg",
            "vote_average": 8.22,
            "genre_ids": genre_ids,
        }))
        .unwrap()
    }

    /// Minimal movie detail record.
    fn details(imdb_id: Option<&str>) -> MovieDetails {
        serde_json::from_value(json!({
            "id": 603,
            "imdb_id": imdb_id,
            "title": "The Matrix",
            "release_date": "1999-03-30",
            "runtime": 136,
            "vote_average": 8.22,
            "genres": [{"id": 1, "name": "Action"}],
        }))
        .unwrap()
    }

    #[test]
    fn test_detail_genres_yield_ids_and_names() {
        // Arrange & Act
        let card = MovieCard::from_details(&details(Some("tt0133093")));

        // Assert
        assert_eq!(card.genre_ids, vec![1]);
        assert_eq!(card.genre_names, vec![String::from("Action")]);
    }

    #[test]
    fn test_list_genre_ids_duplicate_into_names() {
        // Arrange & Act
        let card = MovieCard::from_summary(&summary(603, vec![1, 2]));

        // Assert: names are the ids, pending a later lookup
        assert_eq!(card.genre_ids, vec![1, 2]);
        assert_eq!(card.genre_names, vec![String::from("1"), String::from("2")]);
    }

    #[test]
    fn test_missing_imdb_id_is_synthesized() {
        // Arrange & Act
        let card = MovieCard::from_summary(&summary(42, vec![]));

        // Assert
        assert_eq!(card.external_id, "tmdb_42");
    }

    #[test]
    fn test_present_imdb_id_is_kept() {
        // Arrange & Act
        let card = MovieCard::from_details(&details(Some("tt0133093")));

        // Assert
        assert_eq!(card.external_id, "tt0133093");
    }

    #[test]
    fn test_detail_without_imdb_id_is_synthesized() {
        // Arrange & Act
        let card = MovieCard::from_details(&details(None));

        // Assert
        assert_eq!(card.external_id, "tmdb_603");
    }

    #[test]
    fn test_year_and_rating_derivation() {
        // Arrange & Act
        let card = MovieCard::from_summary(&summary(603, vec![]));

        // Assert
        assert_eq!(card.year, Some(1999));
        assert_eq!(card.rating.as_deref(), Some("8.2"));
        assert_eq!(
            card.poster.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(card.backdrop, None);
    }

    #[test]
    fn test_unrated_movie_has_no_rating() {
        // Arrange
        let mut movie = summary(603, vec![]);
        movie.vote_average = 0.0;
        movie.release_date = None;

        // Act
        let card = MovieCard::from_summary(&movie);

        // Assert
        assert_eq!(card.rating, None);
        assert_eq!(card.year, None);
    }

    #[test]
    fn test_resolve_genre_names_joins_table() {
        // Arrange
        let table = vec![
            Genre {
                id: 1,
                name: String::from("Action"),
            },
            Genre {
                id: 2,
                name: String::from("Comedy"),
            },
        ];
        let mut card = MovieCard::from_summary(&summary(603, vec![2, 1, 99]));

        // Act
        card.resolve_genres(&table);

        // Assert: unknown ids keep their stringified form
        assert_eq!(
            card.genre_names,
            vec![
                String::from("Comedy"),
                String::from("Action"),
                String::from("99")
            ]
        );
    }

    #[test]
    fn test_compat_json_duplicates_legacy_keys() {
        // Arrange
        let card = MovieCard::from_summary(&summary(603, vec![1]));

        // Act
        let value = card.compat_json();

        // Assert
        assert_eq!(value["title"], value["Title"]);
        assert_eq!(value["year"], value["Year"]);
        assert_eq!(value["poster"], value["Poster"]);
        assert_eq!(value["rating"], value["imdbRating"]);
        assert_eq!(value["imdbID"], json!("tmdb_603"));
    }

    #[test]
    fn test_tv_card_from_summary() {
        // Arrange
        let show: TvSummary = serde_json::from_value(json!({
            "id": 1396,
            "name": "Breaking Bad",
            "first_air_date": "2008-01-20",
            "vote_average": 8.9,
            "genre_ids": [18, 80],
        }))
        .unwrap();

        // Act
        let card = TvCard::from_summary(&show);

        // Assert
        assert_eq!(card.external_id, "tmdb_tv_1396");
        assert_eq!(card.year, Some(2008));
        assert_eq!(
            card.genre_names,
            vec![String::from("18"), String::from("80")]
        );
    }

    #[test]
    fn test_tv_card_from_details() {
        // Arrange
        let show: TvDetails = serde_json::from_value(json!({
            "id": 1396,
            "name": "Breaking Bad",
            "first_air_date": "2008-01-20",
            "number_of_seasons": 5,
            "number_of_episodes": 62,
            "status": "Ended",
            "genres": [{"id": 18, "name": "Drama"}],
        }))
        .unwrap();

        // Act
        let card = TvCard::from_details(&show);

        // Assert
        assert_eq!(card.number_of_seasons, Some(5));
        assert_eq!(card.genre_names, vec![String::from("Drama")]);
        assert_eq!(card.status.as_deref(), Some("Ended"));
    }

    #[test]
    fn test_person_card_defaults_department() {
        // Arrange
        let person: PersonSummary = serde_json::from_value(json!({
            "id": 6384,
            "name": "Keanu Reeves",
            "profile_path": "/keanu.jpg",
            "known_for": [
                {"media_type": "movie", "id": 603, "title": "The Matrix"},
                {"media_type": "tv", "id": 1396, "name": "Breaking Bad"}
            ],
        }))
        .unwrap();

        // Act
        let card = PersonCard::from(&person);

        // Assert
        assert_eq!(card.known_for, "Actor");
        assert_eq!(
            card.profile.as_deref(),
            Some("https://image.tmdb.org/t/p/w185/keanu.jpg")
        );
        assert_eq!(
            card.known_for_titles,
            vec![String::from("The Matrix"), String::from("Breaking Bad")]
        );
    }

    #[test]
    fn test_search_page_transform() {
        // Arrange
        let page: PagedResponse<MovieSummary> = serde_json::from_value(json!({
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "genre_ids": [28]},
                {"id": 604, "title": "The Matrix Reloaded"}
            ],
            "total_pages": 1,
            "total_results": 2,
        }))
        .unwrap();

        // Act
        let search = SearchPage::from_movies(&page);
        let compat = search.compat_json();

        // Assert
        assert_eq!(search.results.len(), 2);
        assert_eq!(search.total_results, 2);
        assert_eq!(compat["Response"], json!("True"));
        assert_eq!(compat["Search"].as_array().unwrap().len(), 2);
    }
}
