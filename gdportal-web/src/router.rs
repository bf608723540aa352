use gdportal_core::Destination;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/game/:id")]
    Game { id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn game(id: impl Into<String>) -> Self {
        Self::Game { id: id.into() }
    }
}

impl From<&Route> for Destination {
    fn from(route: &Route) -> Self {
        match route {
            Route::Game { id } if !id.is_empty() => Self::Game(id.clone()),
            // Unmatched paths render the listing, same as the root.
            Route::Home | Route::Game { .. } | Route::NotFound => Self::Home,
        }
    }
}

impl From<&Destination> for Route {
    fn from(destination: &Destination) -> Self {
        match destination {
            Destination::Home => Self::Home,
            Destination::Game(id) => Self::game(id.clone()),
        }
    }
}
