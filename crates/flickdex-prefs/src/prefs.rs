//! The application preference bundle.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cell::PersistedCell;
use crate::storage::PrefsStorage;

/// Kind of a favorited catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A movie.
    Movie,
    /// A TV series.
    Tv,
    /// A person.
    Person,
}

/// A favorited catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// TMDB ID.
    pub id: u64,
    /// Entry kind.
    pub kind: MediaKind,
    /// Display title.
    pub title: String,
}

/// Persisted discover filter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPrefs {
    /// Genre filter.
    #[serde(default)]
    pub genre: Option<u64>,
    /// Year filter.
    #[serde(default)]
    pub year: Option<u32>,
    /// Sort order.
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Include adult content.
    #[serde(default, rename = "includeAdult")]
    pub include_adult: bool,
}

/// Default sort order.
fn default_sort() -> String {
    String::from("popularity.desc")
}

impl Default for FilterPrefs {
    fn default() -> Self {
        Self {
            genre: None,
            year: None,
            sort: default_sort(),
            include_adult: false,
        }
    }
}

/// The five persisted preference cells, constructed once at startup and
/// passed by reference to consumers.
#[derive(Debug)]
pub struct Preferences {
    /// Theme name.
    pub theme: PersistedCell<String>,
    /// Favorited entries.
    pub favorites: PersistedCell<Vec<FavoriteEntry>>,
    /// Last search query.
    pub last_query: PersistedCell<String>,
    /// Active page name.
    pub page: PersistedCell<String>,
    /// Discover filter settings.
    pub filters: PersistedCell<FilterPrefs>,
}

impl Preferences {
    /// Loads every cell from storage, falling back to defaults.
    ///
    /// Storage keys are part of the on-disk contract and never change.
    #[must_use]
    pub fn load(storage: &Arc<PrefsStorage>) -> Self {
        Self {
            theme: PersistedCell::new(Arc::clone(storage), "theme", String::from("light")),
            favorites: PersistedCell::new(Arc::clone(storage), "favorites", Vec::new()),
            last_query: PersistedCell::new(Arc::clone(storage), "lastQuery", String::new()),
            page: PersistedCell::new(Arc::clone(storage), "page", String::from("home")),
            filters: PersistedCell::new(Arc::clone(storage), "filters", FilterPrefs::default()),
        }
    }

    /// Adds the entry to favorites, or removes it when already present.
    ///
    /// Returns `true` when the entry was added.
    pub fn toggle_favorite(&self, entry: FavoriteEntry) -> bool {
        let present = self
            .favorites
            .get()
            .iter()
            .any(|f| f.id == entry.id && f.kind == entry.kind);
        self.favorites.update(|list| {
            if present {
                list.iter()
                    .filter(|f| !(f.id == entry.id && f.kind == entry.kind))
                    .cloned()
                    .collect()
            } else {
                let mut next = list.clone();
                next.push(entry.clone());
                next
            }
        });
        !present
    }
}
