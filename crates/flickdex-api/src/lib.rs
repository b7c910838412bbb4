//! API client library for flickdex.
//!
//! Provides a client for the TMDB (The Movie Database) API v3 together
//! with display-shape transforms for catalog records.

/// TMDB API client.
pub mod tmdb;
