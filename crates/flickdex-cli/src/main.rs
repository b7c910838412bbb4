//! flickdex - movie/TV discovery CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path};
use flickdex_api::tmdb::{
    DiscoverParams, LocalCatalogApi, MovieCard, MovieSummary, MultiResult, PagedResponse,
    PersonCard, SearchPage, SearchParams, TimeWindow, TmdbClient, TvCard, TvSummary,
};
use flickdex_prefs::{
    FavoriteEntry, FilterPrefs, MediaKind, Preferences, PrefsStorage, resolve_prefs_dir,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config/preferences directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Browse and search movies.
    Movie(MovieCommand),
    /// Browse and search TV series.
    Tv(TvCommand),
    /// Browse and search people.
    Person(PersonCommand),
    /// Search movies, TV series, and people at once.
    Search(QueryArgs),
    /// Manage persisted preferences.
    Prefs(PrefsCommand),
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieCommand {
    /// Movie subcommand to run.
    #[command(subcommand)]
    command: MovieSubcommands,
}

/// Available movie subcommands.
#[derive(Subcommand)]
enum MovieSubcommands {
    /// Trending movies.
    Trending(TrendingArgs),
    /// Popular movies.
    Popular(PageArgs),
    /// Top-rated movies.
    TopRated(PageArgs),
    /// Upcoming movies.
    Upcoming(PageArgs),
    /// Movies currently in theaters.
    NowPlaying(PageArgs),
    /// Search for movies.
    Search(QueryArgs),
    /// Discover movies by filter.
    Discover(DiscoverArgs),
    /// Movie details.
    Details(IdArgs),
    /// List the movie genre table.
    Genres,
}

/// Arguments for the `tv` subcommand.
#[derive(clap::Args)]
struct TvCommand {
    /// TV subcommand to run.
    #[command(subcommand)]
    command: TvSubcommands,
}

/// Available TV subcommands.
#[derive(Subcommand)]
enum TvSubcommands {
    /// Trending TV series.
    Trending(TrendingArgs),
    /// Popular TV series.
    Popular(PageArgs),
    /// Top-rated TV series.
    TopRated(PageArgs),
    /// Search for TV series.
    Search(QueryArgs),
    /// Discover TV series by filter.
    Discover(DiscoverArgs),
    /// TV series details.
    Details(IdArgs),
    /// List the TV genre table.
    Genres,
}

/// Arguments for the `person` subcommand.
#[derive(clap::Args)]
struct PersonCommand {
    /// Person subcommand to run.
    #[command(subcommand)]
    command: PersonSubcommands,
}

/// Available person subcommands.
#[derive(Subcommand)]
enum PersonSubcommands {
    /// Trending people.
    Trending(TrendingArgs),
    /// Popular people.
    Popular(PageArgs),
    /// Search for people.
    Search(QueryArgs),
    /// Person details.
    Details(IdArgs),
}

/// Arguments for the `prefs` subcommand.
#[derive(clap::Args)]
struct PrefsCommand {
    /// Prefs subcommand to run.
    #[command(subcommand)]
    command: PrefsSubcommands,
}

/// Available prefs subcommands.
#[derive(Subcommand)]
enum PrefsSubcommands {
    /// Get or set the theme.
    Theme(ThemeArgs),
    /// Manage favorites.
    Favorites(FavoritesCommand),
    /// Show every persisted preference.
    Show,
}

/// Arguments for the `prefs favorites` subcommand.
#[derive(clap::Args)]
struct FavoritesCommand {
    /// Favorites subcommand to run.
    #[command(subcommand)]
    command: FavoritesSubcommands,
}

/// Available favorites subcommands.
#[derive(Subcommand)]
enum FavoritesSubcommands {
    /// List favorited entries.
    List,
    /// Add an entry to favorites, or remove it when already present.
    Toggle(ToggleArgs),
}

/// Paged list arguments.
#[derive(clap::Args)]
struct PageArgs {
    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Trending list arguments.
#[derive(clap::Args)]
struct TrendingArgs {
    /// Time window ("day" or "week").
    #[arg(long, default_value = "week")]
    window: String,

    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Search arguments.
#[derive(clap::Args)]
struct QueryArgs {
    /// Search query (e.g. "matrix").
    #[arg(long, required = true)]
    query: String,

    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Discover arguments. Omitted filters fall back to the persisted
/// filter settings; the resolved filters are persisted back.
#[derive(clap::Args)]
struct DiscoverArgs {
    /// Genre filter.
    #[arg(long)]
    genre: Option<u64>,

    /// Year filter.
    #[arg(long)]
    year: Option<u32>,

    /// Sort order (e.g. "popularity.desc").
    #[arg(long)]
    sort: Option<String>,

    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Detail lookup arguments.
#[derive(clap::Args)]
struct IdArgs {
    /// TMDB ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Theme arguments.
#[derive(clap::Args)]
struct ThemeArgs {
    /// Theme name to set; prints the current theme when omitted.
    name: Option<String>,
}

/// Favorite toggle arguments.
#[derive(clap::Args)]
struct ToggleArgs {
    /// TMDB ID.
    #[arg(long, required = true)]
    id: u64,

    /// Entry kind ("movie", "tv", or "person").
    #[arg(long, required = true)]
    kind: String,

    /// Display title.
    #[arg(long, required = true)]
    title: String,
}

/// Parses a trending window argument.
fn parse_window(window: &str) -> Result<TimeWindow> {
    match window {
        "day" => Ok(TimeWindow::Day),
        "week" => Ok(TimeWindow::Week),
        _ => bail!("invalid time window: {window} (expected \"day\" or \"week\")"),
    }
}

/// Parses a favorite kind argument.
fn parse_kind(kind: &str) -> Result<MediaKind> {
    match kind {
        "movie" => Ok(MediaKind::Movie),
        "tv" => Ok(MediaKind::Tv),
        "person" => Ok(MediaKind::Person),
        _ => bail!("invalid kind: {kind} (expected \"movie\", \"tv\", or \"person\")"),
    }
}

/// Label for a favorite kind.
const fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "movie",
        MediaKind::Tv => "tv",
        MediaKind::Person => "person",
    }
}

/// Builds a `TmdbClient` from the `TMDB_API_TOKEN` environment variable
/// and the app config.
///
/// # Errors
///
/// Returns an error if `TMDB_API_TOKEN` is not set, the config cannot
/// be loaded, or the client fails to build.
#[instrument(skip_all)]
fn build_client(dir: Option<&PathBuf>) -> Result<(TmdbClient, AppConfig)> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let api_token = std::env::var("TMDB_API_TOKEN")
        .context("TMDB_API_TOKEN environment variable is required")?;

    let client = TmdbClient::builder()
        .api_token(api_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .language(config.api.language.clone())
        .build()
        .context("failed to build TMDB client")?;

    Ok((client, config))
}

/// Loads the preference bundle from the resolved preferences directory.
///
/// # Errors
///
/// Returns an error if the preferences directory cannot be resolved.
fn load_prefs(dir: Option<&PathBuf>) -> Result<Preferences> {
    let prefs_dir = resolve_prefs_dir(dir).context("failed to resolve preferences directory")?;
    let storage = Arc::new(PrefsStorage::new(prefs_dir));
    Ok(Preferences::load(&storage))
}

/// Prints movie cards as a table.
fn print_movie_cards(cards: &[MovieCard], total: u64) {
    tracing::info!("Total results: {total}");
    tracing::info!("ID\tYear\tRating\tGenres\t\tTitle");
    for card in cards {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            card.id,
            card.year
                .map_or_else(|| String::from("-"), |y| y.to_string()),
            card.rating.as_deref().unwrap_or("-"),
            card.genre_names.join(","),
            card.title,
        );
    }
}

/// Prints TV cards as a table.
fn print_tv_cards(cards: &[TvCard], total: u64) {
    tracing::info!("Total results: {total}");
    tracing::info!("ID\tYear\tRating\tGenres\t\tName");
    for card in cards {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            card.id,
            card.year
                .map_or_else(|| String::from("-"), |y| y.to_string()),
            card.rating.as_deref().unwrap_or("-"),
            card.genre_names.join(","),
            card.title,
        );
    }
}

/// Prints person cards as a table.
fn print_person_cards(cards: &[PersonCard], total: u64) {
    tracing::info!("Total results: {total}");
    tracing::info!("ID\tKnownFor\tName\tKnown titles");
    for card in cards {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            card.id,
            card.known_for,
            card.name,
            card.known_for_titles.join(","),
        );
    }
}

/// Transforms a movie list response into cards with genre names
/// resolved against the fetched genre table.
async fn movie_cards_with_genres(
    client: &TmdbClient,
    response: &PagedResponse<MovieSummary>,
) -> Result<Vec<MovieCard>> {
    let table = client
        .movie_genres()
        .await
        .context("TMDB genre/movie/list request failed")?;
    Ok(response
        .results
        .iter()
        .map(|movie| {
            let mut card = MovieCard::from_summary(movie);
            card.resolve_genres(&table);
            card
        })
        .collect())
}

/// Transforms a TV list response into cards with genre names resolved
/// against the fetched genre table.
async fn tv_cards_with_genres(
    client: &TmdbClient,
    response: &PagedResponse<TvSummary>,
) -> Result<Vec<TvCard>> {
    let table = client
        .tv_genres()
        .await
        .context("TMDB genre/tv/list request failed")?;
    Ok(response
        .results
        .iter()
        .map(|show| {
            let mut card = TvCard::from_summary(show);
            card.resolve_genres(&table);
            card
        })
        .collect())
}

/// Prints a movie list response.
async fn report_movie_list(client: &TmdbClient, response: PagedResponse<MovieSummary>) -> Result<()> {
    let cards = movie_cards_with_genres(client, &response).await?;
    print_movie_cards(&cards, response.total_results);
    Ok(())
}

/// Prints a TV list response.
async fn report_tv_list(client: &TmdbClient, response: PagedResponse<TvSummary>) -> Result<()> {
    let cards = tv_cards_with_genres(client, &response).await?;
    print_tv_cards(&cards, response.total_results);
    Ok(())
}

/// Runs a `movie` list subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie_list(command: &MovieSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let (client, _config) = build_client(dir)?;
    let response = match command {
        MovieSubcommands::Trending(args) => {
            client
                .trending_movies(parse_window(&args.window)?, args.page)
                .await
                .context("TMDB trending/movie request failed")?
        }
        MovieSubcommands::Popular(args) => client
            .popular_movies(args.page)
            .await
            .context("TMDB movie/popular request failed")?,
        MovieSubcommands::TopRated(args) => client
            .top_rated_movies(args.page)
            .await
            .context("TMDB movie/top_rated request failed")?,
        MovieSubcommands::Upcoming(args) => client
            .upcoming_movies(args.page)
            .await
            .context("TMDB movie/upcoming request failed")?,
        MovieSubcommands::NowPlaying(args) => client
            .now_playing_movies(args.page)
            .await
            .context("TMDB movie/now_playing request failed")?,
        _ => bail!("not a movie list subcommand"),
    };
    report_movie_list(&client, response).await
}

/// Runs the `movie search` subcommand and remembers the query.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie_search(args: &QueryArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (client, config) = build_client(dir)?;
    let prefs = load_prefs(dir)?;

    let params = SearchParams::new(&args.query)
        .page(args.page)
        .include_adult(config.api.include_adult);
    let response = client
        .search_movies(&params)
        .await
        .context("TMDB search/movie request failed")?;

    prefs.last_query.set(args.query.clone());

    let page = SearchPage::from_movies(&response);
    print_movie_cards(&page.results, page.total_results);
    Ok(())
}

/// Runs the `movie discover` subcommand.
///
/// Omitted filter flags fall back to the persisted filter settings; the
/// resolved filters are persisted for the next run.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie_discover(args: &DiscoverArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (client, config) = build_client(dir)?;
    let prefs = load_prefs(dir)?;

    let params = resolve_discover_filters(args, &prefs, &config);
    let response = client
        .discover_movies(&params)
        .await
        .context("TMDB discover/movie request failed")?;

    report_movie_list(&client, response).await
}

/// Merges CLI discover flags with persisted filters and persists the result.
fn resolve_discover_filters(
    args: &DiscoverArgs,
    prefs: &Preferences,
    config: &AppConfig,
) -> DiscoverParams {
    let saved = prefs.filters.get();
    let filters = FilterPrefs {
        genre: args.genre.or(saved.genre),
        year: args.year.or(saved.year),
        sort: args.sort.clone().unwrap_or(saved.sort),
        include_adult: saved.include_adult || config.api.include_adult,
    };
    prefs.filters.set(filters.clone());

    let mut params = DiscoverParams::new().page(args.page);
    if let Some(genre) = filters.genre {
        params = params.genre(genre);
    }
    if let Some(year) = filters.year {
        params = params.year(year);
    }
    params = params.sort_by(filters.sort);
    params.include_adult = filters.include_adult;
    params
}

/// Runs the `movie details` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie_details(args: &IdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (client, _config) = build_client(dir)?;

    let details = client
        .movie_details(args.id)
        .await
        .context("TMDB movie details request failed")?;
    let card = MovieCard::from_details(&details);

    tracing::info!("ID: {} ({})", card.id, card.external_id);
    tracing::info!("Title: {}", card.title);
    tracing::info!(
        "Year: {}",
        card.year
            .map_or_else(|| String::from("-"), |y| y.to_string())
    );
    tracing::info!("Rating: {}", card.rating.as_deref().unwrap_or("-"));
    tracing::info!("Genres: {}", card.genre_names.join(", "));
    tracing::info!(
        "Runtime: {} min",
        card.runtime
            .map_or_else(|| String::from("-"), |r| r.to_string())
    );
    tracing::info!("Status: {}", card.status.as_deref().unwrap_or("-"));
    tracing::info!("Tagline: {}", card.tagline.as_deref().unwrap_or("-"));
    tracing::info!("Overview: {}", card.overview.as_deref().unwrap_or("-"));

    if let Some(credits) = &details.credits {
        tracing::info!("Cast:");
        for member in credits.cast.iter().take(5) {
            tracing::info!(
                "  {} as {}",
                member.name,
                member.character.as_deref().unwrap_or("-"),
            );
        }
    }
    if let Some(similar) = &details.similar {
        tracing::info!("Similar:");
        for movie in similar.results.iter().take(5) {
            tracing::info!("  {}\t{}", movie.id, movie.title);
        }
    }

    Ok(())
}

/// Runs the `movie genres` / `tv genres` subcommands.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_genres(tv: bool, dir: Option<&PathBuf>) -> Result<()> {
    let (client, _config) = build_client(dir)?;
    let genres = if tv {
        client
            .tv_genres()
            .await
            .context("TMDB genre/tv/list request failed")?
    } else {
        client
            .movie_genres()
            .await
            .context("TMDB genre/movie/list request failed")?
    };

    tracing::info!("ID\tName");
    for genre in &genres {
        tracing::info!("{}\t{}", genre.id, genre.name);
    }
    tracing::info!("Total: {} genres", genres.len());
    Ok(())
}

/// Runs a `tv` list subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_tv_list(command: &TvSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let (client, _config) = build_client(dir)?;
    let response = match command {
        TvSubcommands::Trending(args) => {
            client
                .trending_tv(parse_window(&args.window)?, args.page)
                .await
                .context("TMDB trending/tv request failed")?
        }
        TvSubcommands::Popular(args) => client
            .popular_tv(args.page)
            .await
            .context("TMDB tv/popular request failed")?,
        TvSubcommands::TopRated(args) => client
            .top_rated_tv(args.page)
            .await
            .context("TMDB tv/top_rated request failed")?,
        _ => bail!("not a TV list subcommand"),
    };
    report_tv_list(&client, response).await
}

/// Runs the `tv search` subcommand and remembers the query.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_tv_search(args: &QueryArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (client, config) = build_client(dir)?;
    let prefs = load_prefs(dir)?;

    let params = SearchParams::new(&args.query)
        .page(args.page)
        .include_adult(config.api.include_adult);
    let response = client
        .search_tv(&params)
        .await
        .context("TMDB search/tv request failed")?;

    prefs.last_query.set(args.query.clone());
    report_tv_list(&client, response).await
}

/// Runs the `tv discover` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_tv_discover(args: &DiscoverArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (client, config) = build_client(dir)?;
    let prefs = load_prefs(dir)?;

    let params = resolve_discover_filters(args, &prefs, &config);
    let response = client
        .discover_tv(&params)
        .await
        .context("TMDB discover/tv request failed")?;

    report_tv_list(&client, response).await
}

/// Runs the `tv details` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_tv_details(args: &IdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (client, _config) = build_client(dir)?;

    let details = client
        .tv_details(args.id)
        .await
        .context("TMDB tv details request failed")?;
    let card = TvCard::from_details(&details);

    tracing::info!("ID: {} ({})", card.id, card.external_id);
    tracing::info!("Name: {}", card.title);
    tracing::info!(
        "First Air Date: {}",
        card.first_air_date.as_deref().unwrap_or("-")
    );
    tracing::info!("Status: {}", card.status.as_deref().unwrap_or("-"));
    tracing::info!(
        "Seasons: {}",
        card.number_of_seasons
            .map_or_else(|| String::from("-"), |n| n.to_string())
    );
    tracing::info!(
        "Episodes: {}",
        card.number_of_episodes
            .map_or_else(|| String::from("-"), |n| n.to_string())
    );
    tracing::info!("Genres: {}", card.genre_names.join(", "));
    tracing::info!("Overview: {}", card.overview.as_deref().unwrap_or("-"));
    tracing::info!("---");
    for season in &details.seasons {
        tracing::info!(
            "  Season {}: {} episodes (air_date: {})",
            season.season_number,
            season.episode_count,
            season.air_date.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

/// Runs a `person` list subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_person_list(command: &PersonSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let (client, config) = build_client(dir)?;
    let response = match command {
        PersonSubcommands::Trending(args) => {
            client
                .trending_people(parse_window(&args.window)?, args.page)
                .await
                .context("TMDB trending/person request failed")?
        }
        PersonSubcommands::Popular(args) => client
            .popular_people(args.page)
            .await
            .context("TMDB person/popular request failed")?,
        PersonSubcommands::Search(args) => {
            let prefs = load_prefs(dir)?;
            let params = SearchParams::new(&args.query)
                .page(args.page)
                .include_adult(config.api.include_adult);
            let response = client
                .search_people(&params)
                .await
                .context("TMDB search/person request failed")?;
            prefs.last_query.set(args.query.clone());
            response
        }
        PersonSubcommands::Details(_) => bail!("not a person list subcommand"),
    };

    let cards: Vec<PersonCard> = response.results.iter().map(PersonCard::from).collect();
    print_person_cards(&cards, response.total_results);
    Ok(())
}

/// Runs the `person details` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_person_details(args: &IdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (client, _config) = build_client(dir)?;

    let details = client
        .person_details(args.id)
        .await
        .context("TMDB person details request failed")?;

    tracing::info!("ID: {}", details.id);
    tracing::info!("Name: {}", details.name);
    tracing::info!(
        "Known For: {}",
        details.known_for_department.as_deref().unwrap_or("-")
    );
    tracing::info!("Birthday: {}", details.birthday.as_deref().unwrap_or("-"));
    tracing::info!(
        "Place of Birth: {}",
        details.place_of_birth.as_deref().unwrap_or("-")
    );
    if let Some(external_ids) = &details.external_ids {
        tracing::info!(
            "IMDb: {}",
            external_ids.imdb_id.as_deref().unwrap_or("-")
        );
    }
    if let Some(credits) = &details.credits {
        tracing::info!("Credits: {} cast, {} crew", credits.cast.len(), credits.crew.len());
        for credit in credits.cast.iter().take(5) {
            tracing::info!(
                "  {}\t{}",
                credit.id,
                credit.title.as_deref().or(credit.name.as_deref()).unwrap_or("-"),
            );
        }
    }

    Ok(())
}

/// Runs the top-level `search` subcommand (multi-search) and remembers
/// the query.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_multi_search(args: &QueryArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (client, config) = build_client(dir)?;
    let prefs = load_prefs(dir)?;

    let params = SearchParams::new(&args.query)
        .page(args.page)
        .include_adult(config.api.include_adult);
    let response = client
        .multi_search(&params)
        .await
        .context("TMDB search/multi request failed")?;

    prefs.last_query.set(args.query.clone());

    tracing::info!("Total results: {}", response.total_results);
    tracing::info!("Kind\tID\tTitle");
    for result in &response.results {
        match result {
            MultiResult::Movie(movie) => {
                let card = MovieCard::from_summary(movie);
                tracing::info!("movie\t{}\t{}", card.id, card.title);
            }
            MultiResult::Tv(show) => {
                let card = TvCard::from_summary(show);
                tracing::info!("tv\t{}\t{}", card.id, card.title);
            }
            MultiResult::Person(person) => {
                let card = PersonCard::from(person);
                tracing::info!("person\t{}\t{}", card.id, card.name);
            }
        }
    }

    Ok(())
}

/// Runs the `prefs theme` subcommand.
///
/// # Errors
///
/// Returns an error if the preferences directory cannot be resolved.
#[instrument(skip_all)]
async fn run_prefs_theme(args: &ThemeArgs, dir: Option<&PathBuf>) -> Result<()> {
    let prefs = load_prefs(dir)?;

    if let Some(name) = &args.name {
        let mut watcher = prefs.theme.subscribe();
        prefs.theme.set(name.clone());
        if watcher.changed().await.is_ok() {
            tracing::info!("Theme set to {}", *watcher.borrow_and_update());
        }
    } else {
        tracing::info!("{}", prefs.theme.get());
    }
    Ok(())
}

/// Runs the `prefs favorites list` subcommand.
///
/// # Errors
///
/// Returns an error if the preferences directory cannot be resolved.
#[instrument(skip_all)]
fn run_favorites_list(dir: Option<&PathBuf>) -> Result<()> {
    let prefs = load_prefs(dir)?;
    let favorites = prefs.favorites.get();

    if favorites.is_empty() {
        tracing::info!("No favorites yet. Add one with `prefs favorites toggle`.");
        return Ok(());
    }

    tracing::info!("Kind\tID\tTitle");
    for entry in &favorites {
        tracing::info!("{}\t{}\t{}", kind_label(entry.kind), entry.id, entry.title);
    }
    tracing::info!("Total: {} favorites", favorites.len());
    Ok(())
}

/// Runs the `prefs favorites toggle` subcommand.
///
/// # Errors
///
/// Returns an error if the preferences directory cannot be resolved or
/// the kind argument is invalid.
#[instrument(skip_all)]
fn run_favorites_toggle(args: &ToggleArgs, dir: Option<&PathBuf>) -> Result<()> {
    let prefs = load_prefs(dir)?;
    let entry = FavoriteEntry {
        id: args.id,
        kind: parse_kind(&args.kind)?,
        title: args.title.clone(),
    };

    if prefs.toggle_favorite(entry) {
        tracing::info!("Added {} ({}) to favorites", args.title, args.id);
    } else {
        tracing::info!("Removed {} ({}) from favorites", args.title, args.id);
    }
    Ok(())
}

/// Runs the `prefs show` subcommand.
///
/// # Errors
///
/// Returns an error if the preferences directory cannot be resolved.
#[instrument(skip_all)]
fn run_prefs_show(dir: Option<&PathBuf>) -> Result<()> {
    let prefs = load_prefs(dir)?;
    let filters = prefs.filters.get();

    tracing::info!("theme: {}", prefs.theme.get());
    tracing::info!("page: {}", prefs.page.get());
    tracing::info!("lastQuery: {}", prefs.last_query.get());
    tracing::info!("favorites: {} entries", prefs.favorites.get().len());
    tracing::info!(
        "filters: genre={} year={} sort={} includeAdult={}",
        filters
            .genre
            .map_or_else(|| String::from("-"), |g| g.to_string()),
        filters
            .year
            .map_or_else(|| String::from("-"), |y| y.to_string()),
        filters.sort,
        filters.include_adult,
    );
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Movie(movie) => match movie.command {
            MovieSubcommands::Search(args) => run_movie_search(&args, cli.dir.as_ref()).await,
            MovieSubcommands::Discover(args) => run_movie_discover(&args, cli.dir.as_ref()).await,
            MovieSubcommands::Details(args) => run_movie_details(&args, cli.dir.as_ref()).await,
            MovieSubcommands::Genres => run_genres(false, cli.dir.as_ref()).await,
            list => run_movie_list(&list, cli.dir.as_ref()).await,
        },
        Commands::Tv(tv) => match tv.command {
            TvSubcommands::Search(args) => run_tv_search(&args, cli.dir.as_ref()).await,
            TvSubcommands::Discover(args) => run_tv_discover(&args, cli.dir.as_ref()).await,
            TvSubcommands::Details(args) => run_tv_details(&args, cli.dir.as_ref()).await,
            TvSubcommands::Genres => run_genres(true, cli.dir.as_ref()).await,
            list => run_tv_list(&list, cli.dir.as_ref()).await,
        },
        Commands::Person(person) => match person.command {
            PersonSubcommands::Details(args) => run_person_details(&args, cli.dir.as_ref()).await,
            list => run_person_list(&list, cli.dir.as_ref()).await,
        },
        Commands::Search(args) => run_multi_search(&args, cli.dir.as_ref()).await,
        Commands::Prefs(prefs) => match prefs.command {
            PrefsSubcommands::Theme(args) => run_prefs_theme(&args, cli.dir.as_ref()).await,
            PrefsSubcommands::Favorites(favorites) => match favorites.command {
                FavoritesSubcommands::List => run_favorites_list(cli.dir.as_ref()),
                FavoritesSubcommands::Toggle(args) => {
                    run_favorites_toggle(&args, cli.dir.as_ref())
                }
            },
            PrefsSubcommands::Show => run_prefs_show(cli.dir.as_ref()),
        },
    }
}
