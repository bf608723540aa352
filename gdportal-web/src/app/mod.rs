use crate::components::fault_boundary::FaultBoundary;
use crate::router::Route;
use gdportal_core::Catalog;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod outlet;

/// Root component: hash routing keeps every view addressable from a static bucket.
#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HashRouter>
            <AppInner />
        </HashRouter>
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct AppInnerProps {
    /// JSON catalog to serve instead of the bundled one.
    #[prop_or_default]
    pub catalog_data: Option<AttrValue>,
}

/// Everything below the router. Must be mounted inside a router context.
#[function_component(AppInner)]
pub fn app_inner(props: &AppInnerProps) -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let catalog_override = use_memo(props.catalog_data.clone(), |data| {
        data.as_deref().map(Catalog::from_json)
    });

    let render = Callback::from(move |()| {
        outlet::render_outlet(&route, (*catalog_override).as_ref(), navigator.clone())
    });

    html! { <FaultBoundary {render} /> }
}
