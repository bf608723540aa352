use crate::components::footer::footer;
use crate::components::header::Header;
use crate::pages::home::home;
use crate::pages::not_found::not_found;
use crate::pages::player::player;
use crate::router::Route;
use gdportal_core::{Catalog, CatalogError, Destination, RenderFault, ViewSelection, dispatch};
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Resolve the catalog and render the page chrome around the routed view.
///
/// Runs inside the fault boundary, so the view bodies are built here rather
/// than in separate component passes.
///
/// # Errors
/// Returns a [`RenderFault`] when the catalog cannot be loaded or the selected
/// view refuses to render.
pub fn render_outlet(
    route: &Route,
    catalog_override: Option<&Result<Catalog, CatalogError>>,
    navigator: Option<Navigator>,
) -> Result<Html, RenderFault> {
    let catalog = match catalog_override {
        Some(loaded) => loaded.as_ref().map_err(Clone::clone)?,
        None => Catalog::bundled()?,
    };
    let destination = Destination::from(route);
    let view = render_selection(dispatch(catalog, &destination), &go_home(navigator))?;

    Ok(html! {
        <div class="flex flex-col min-h-screen">
            <Header />
            <div class="flex-1">{ view }</div>
            { footer() }
        </div>
    })
}

/// # Errors
/// Propagates the fault raised by the selected view.
pub fn render_selection(
    selection: ViewSelection<'_>,
    on_go_home: &Callback<()>,
) -> Result<Html, RenderFault> {
    match selection {
        ViewSelection::Home(games) => home(games),
        ViewSelection::Player(game) => player(game, on_go_home),
        ViewSelection::NotFound { requested } => {
            log::info!("no catalog entry for `{requested}`");
            Ok(not_found(on_go_home))
        }
    }
}

fn go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        log::debug!("navigating to listing");
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}
