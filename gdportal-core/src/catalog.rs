//! Game catalog and identifier lookup
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../gdportal-web/static/assets/data/games.json");

const ID_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

/// One playable entry. The `url` is handed to the embedding frame as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub url: String,
    pub category: String,
    pub description: String,
}

impl GameRecord {
    /// Both locators must be absolute `http(s)` URLs.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidLocator`] naming the first offending field.
    pub fn check_locators(&self) -> Result<(), CatalogError> {
        check_locator(self, "url", &self.url)?;
        check_locator(self, "thumbnail", &self.thumbnail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog data is not valid JSON: {0}")]
    Parse(String),
    #[error("record #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("record id `{0}` is not a lowercase slug")]
    MalformedId(String),
    #[error("record id `{0}` appears more than once")]
    DuplicateId(String),
    #[error("record `{0}` has an empty title")]
    EmptyTitle(String),
    #[error("record `{id}` has a non-http {field} locator: `{value}`")]
    InvalidLocator {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Ordered, validated, read-only set of game records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

impl Catalog {
    /// Build a catalog, enforcing id uniqueness and locator shape.
    ///
    /// # Errors
    /// Returns the first [`CatalogError`] found while walking records in order.
    pub fn new(games: Vec<GameRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(games.len());
        for (index, game) in games.iter().enumerate() {
            if game.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !is_slug(&game.id) {
                return Err(CatalogError::MalformedId(game.id.clone()));
            }
            if !seen.insert(game.id.as_str()) {
                return Err(CatalogError::DuplicateId(game.id.clone()));
            }
            if game.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(game.id.clone()));
            }
            game.check_locators()?;
        }
        Ok(Self { games })
    }

    /// Parse and validate a JSON array of records.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON, or any validation error from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let games: Vec<GameRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(games)
    }

    /// The catalog compiled into the binary, parsed once per process.
    ///
    /// # Errors
    /// Returns the validation error of the bundled data; the result is cached, so
    /// every call reports the same error.
    pub fn bundled() -> Result<&'static Self, CatalogError> {
        static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
        CATALOG
            .get_or_init(|| {
                Self::from_json(DEFAULT_CATALOG_DATA).inspect_err(|e| {
                    log::warn!("bundled catalog rejected: {e}");
                })
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    #[must_use]
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.games.iter()
    }

    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&GameRecord> {
        lookup(id, &self.games)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

/// First record whose `id` equals `id` exactly, or `None`.
#[must_use]
pub fn lookup<'a>(id: &str, games: &'a [GameRecord]) -> Option<&'a GameRecord> {
    games.iter().find(|game| game.id == id)
}

/// True for absolute `http://` / `https://` locators with a non-empty remainder.
#[must_use]
pub fn is_http_locator(value: &str) -> bool {
    ["https://", "http://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && value.len() > scheme.len()
    })
}

fn is_slug(id: &str) -> bool {
    static SLUG: OnceLock<Option<regex::Regex>> = OnceLock::new();
    SLUG.get_or_init(|| regex::Regex::new(ID_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(id))
}

fn check_locator(game: &GameRecord, field: &'static str, value: &str) -> Result<(), CatalogError> {
    if is_http_locator(value) {
        Ok(())
    } else {
        Err(CatalogError::InvalidLocator {
            id: game.id.clone(),
            field,
            value: value.to_string(),
        })
    }
}
