#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_movie_search_requires_query() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("flickdex");
    cmd.args(["movie", "search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_movie_search_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("flickdex");
    cmd.args(["movie", "search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_movie_discover_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("flickdex");
    cmd.args(["movie", "discover", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--genre"));
}

#[test]
fn test_movie_popular_requires_api_token() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("flickdex");
    cmd.env_remove("TMDB_API_TOKEN")
        .args(["--dir", dir.path().to_str().unwrap(), "movie", "popular"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TMDB_API_TOKEN"));
}

#[test]
fn test_prefs_theme_defaults_to_light() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("flickdex");
    cmd.args(["--dir", dir.path().to_str().unwrap(), "prefs", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
}

#[test]
fn test_prefs_theme_set_persists_across_runs() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    // Act
    let mut set_cmd = cargo_bin_cmd!("flickdex");
    set_cmd
        .args(["--dir", dir_arg, "prefs", "theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    // Assert: a fresh process reads the persisted value
    let mut get_cmd = cargo_bin_cmd!("flickdex");
    get_cmd
        .args(["--dir", dir_arg, "prefs", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn test_prefs_favorites_toggle_round_trip() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();
    let toggle_args = [
        "--dir", dir_arg, "prefs", "favorites", "toggle", "--id", "603", "--kind", "movie",
        "--title", "The Matrix",
    ];

    // Act & Assert: first toggle adds
    let mut add_cmd = cargo_bin_cmd!("flickdex");
    add_cmd
        .args(toggle_args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added The Matrix"));

    let mut list_cmd = cargo_bin_cmd!("flickdex");
    list_cmd
        .args(["--dir", dir_arg, "prefs", "favorites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Matrix"));

    // Act & Assert: second toggle removes
    let mut remove_cmd = cargo_bin_cmd!("flickdex");
    remove_cmd
        .args(toggle_args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed The Matrix"));

    let mut empty_cmd = cargo_bin_cmd!("flickdex");
    empty_cmd
        .args(["--dir", dir_arg, "prefs", "favorites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn test_prefs_favorites_toggle_rejects_unknown_kind() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("flickdex");
    cmd.args([
        "--dir",
        dir.path().to_str().unwrap(),
        "prefs",
        "favorites",
        "toggle",
        "--id",
        "1",
        "--kind",
        "album",
        "--title",
        "Nope",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid kind"));
}

#[test]
fn test_prefs_show_reports_defaults() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("flickdex");
    cmd.args(["--dir", dir.path().to_str().unwrap(), "prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme: light"))
        .stdout(predicate::str::contains("page: home"))
        .stdout(predicate::str::contains("favorites: 0 entries"))
        .stdout(predicate::str::contains("sort=popularity.desc"));
}
