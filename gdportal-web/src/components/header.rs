use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Site header. Search text stays in local state; neither button does anything yet.
#[function_component(Header)]
pub fn header() -> Html {
    let search = use_state(String::new);
    let on_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    html! {
        <header role="banner" class="sticky top-0 z-50 bg-gray-900/95 backdrop-blur-sm border-b border-gray-800 py-4 px-6">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4">
                <Link<Route> to={Route::Home} classes={classes!("logo", "text-2xl", "font-black", "text-blue-500", "tracking-tighter", "flex", "items-center", "gap-2")}>
                    <span class="bg-blue-600 text-white px-2 py-1 rounded">{ "GD" }</span>
                    { "GEOMETRY DASH 2025" }
                </Link<Route>>

                <div class="flex items-center w-full md:w-auto gap-2">
                    <div class="relative flex-1 md:w-64">
                        <label for="site-search" class="sr-only">{ "Search games" }</label>
                        <input
                            id="site-search"
                            type="text"
                            placeholder="Search games..."
                            value={(*search).clone()}
                            oninput={on_input}
                            class="w-full bg-gray-800 border border-gray-700 rounded-full px-4 py-2 text-sm"
                        />
                    </div>
                    <button type="button" class="bg-gray-800 px-4 py-2 rounded-full font-bold text-sm">{ "SEARCH" }</button>
                    <button type="button" class="bg-blue-600 px-4 py-2 rounded-full font-bold text-sm">{ "LOGIN" }</button>
                </div>
            </div>
        </header>
    }
}
