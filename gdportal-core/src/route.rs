//! Path parsing and view dispatch.
//!
//! Dispatch is a pure function of the catalog and the requested path: the same
//! input always selects the same view.
use crate::catalog::{Catalog, GameRecord};

const GAME_PREFIX: &str = "/game/";

/// Where a request path points, before the catalog is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Game(String),
}

impl Destination {
    /// Parse a request path. Anything that is not `/game/{id}` lands on [`Destination::Home`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        match path.strip_prefix(GAME_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Self::Game(id.to_string()),
            _ => Self::Home,
        }
    }

    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Game(id) => format!("{GAME_PREFIX}{id}"),
        }
    }
}

/// The one view a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSelection<'a> {
    /// Every catalog record, in catalog order.
    Home(&'a [GameRecord]),
    Player(&'a GameRecord),
    NotFound { requested: &'a str },
}

impl ViewSelection<'_> {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Home(_) => "home",
            Self::Player(_) => "player",
            Self::NotFound { .. } => "not-found",
        }
    }
}

#[must_use]
pub fn dispatch<'a>(catalog: &'a Catalog, destination: &'a Destination) -> ViewSelection<'a> {
    match destination {
        Destination::Home => ViewSelection::Home(catalog.games()),
        Destination::Game(id) => catalog
            .lookup(id)
            .map_or(ViewSelection::NotFound { requested: id }, ViewSelection::Player),
    }
}

/// Parse `path` and dispatch it in one step.
///
/// The `NotFound` case borrows the id from `path` itself.
#[must_use]
pub fn select_view<'a>(catalog: &'a Catalog, path: &'a str) -> ViewSelection<'a> {
    match Destination::from_path(path) {
        Destination::Home => ViewSelection::Home(catalog.games()),
        Destination::Game(id) => catalog.lookup(&id).map_or_else(
            || ViewSelection::NotFound {
                requested: requested_segment(path),
            },
            ViewSelection::Player,
        ),
    }
}

fn requested_segment(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_suffix('/').unwrap_or(path);
    path.strip_prefix(GAME_PREFIX).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::bundled().expect("bundled catalog loads")
    }

    #[test]
    fn parses_known_shapes() {
        assert_eq!(Destination::from_path("/"), Destination::Home);
        assert_eq!(Destination::from_path(""), Destination::Home);
        assert_eq!(
            Destination::from_path("/game/geometry-dash"),
            Destination::Game("geometry-dash".to_string())
        );
        assert_eq!(
            Destination::from_path("/game/geometry-dash/"),
            Destination::Game("geometry-dash".to_string())
        );
        assert_eq!(
            Destination::from_path("/game/geometry-dash?ref=home#top"),
            Destination::Game("geometry-dash".to_string())
        );
    }

    #[test]
    fn unrecognised_paths_fall_back_to_home() {
        for path in ["/foo/bar", "/game", "/game/", "/game/a/b", "/games/geometry-dash", "/404"] {
            assert_eq!(Destination::from_path(path), Destination::Home, "{path}");
        }
    }

    #[test]
    fn to_path_is_canonical() {
        assert_eq!(Destination::Home.to_path(), "/");
        let dest = Destination::Game("geometry-dash-world".to_string());
        assert_eq!(dest.to_path(), "/game/geometry-dash-world");
        assert_eq!(Destination::from_path(&dest.to_path()), dest);
    }

    #[test]
    fn home_and_fallback_list_every_record_once_in_order() {
        let catalog = catalog();
        for path in ["/", "/foo/bar"] {
            let ViewSelection::Home(games) = select_view(catalog, path) else {
                panic!("{path} should select home");
            };
            assert_eq!(games, catalog.games());
            let mut ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
            ids.dedup();
            assert_eq!(ids.len(), catalog.len());
        }
    }

    #[test]
    fn game_path_selects_player_for_known_id() {
        match select_view(catalog(), "/game/geometry-dash") {
            ViewSelection::Player(game) => assert_eq!(game.id, "geometry-dash"),
            other => panic!("expected player, got {other:?}"),
        }
    }

    #[test]
    fn game_path_selects_not_found_for_unknown_id() {
        let view = select_view(catalog(), "/game/does-not-exist");
        assert_eq!(
            view,
            ViewSelection::NotFound {
                requested: "does-not-exist"
            }
        );
        assert_eq!(view.kind(), "not-found");
    }

    #[test]
    fn path_breaking_ids_never_match() {
        for path in ["/game/%2F", "/game/..", "/game/GEOMETRY-DASH", "/game/geometry-dash%20"] {
            assert_eq!(select_view(catalog(), path).kind(), "not-found", "{path}");
        }
    }

    #[test]
    fn dispatch_is_idempotent() {
        let catalog = catalog();
        for path in ["/", "/game/geometry-dash-meltdown", "/game/nope", "/x"] {
            assert_eq!(select_view(catalog, path), select_view(catalog, path));
            let dest = Destination::from_path(path);
            assert_eq!(dispatch(catalog, &dest), dispatch(catalog, &dest));
        }
    }

    #[test]
    fn dispatch_matches_select_view() {
        let catalog = catalog();
        for path in ["/", "/game/geometry-dash", "/game/missing"] {
            let dest = Destination::from_path(path);
            assert_eq!(dispatch(catalog, &dest), select_view(catalog, path));
        }
    }
}
