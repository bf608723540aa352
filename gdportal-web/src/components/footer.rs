use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const QUICK_LINKS: [&str; 3] = ["Top Rated", "Categories", "Feedback"];
const LEGAL: [&str; 3] = ["Privacy Policy", "Terms of Use", "DMCA"];
const SOCIAL: [&str; 3] = ["TWITTER", "DISCORD", "YOUTUBE"];

fn placeholder_buttons(labels: &[&'static str]) -> Html {
    labels
        .iter()
        .map(|label| {
            html! {
                <li key={*label}><button type="button" class="hover:text-blue-500">{ *label }</button></li>
            }
        })
        .collect()
}

pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-900 border-t border-gray-800 py-12 px-6 mt-20">
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-12 mb-12">
                    <div class="col-span-1 md:col-span-2">
                        <h3 class="text-xl font-black text-blue-500 mb-4">{ "GEOMETRY DASH UNBLOCKED" }</h3>
                        <p class="text-gray-500 text-sm max-w-md">
                            { "The #1 source for unblocked rhythm games on the web. We use decentralized hosting to ensure you can always play your favorite platformers without interruption." }
                        </p>
                    </div>
                    <nav aria-label="Quick links">
                        <h4 class="font-bold mb-4">{ "QUICK LINKS" }</h4>
                        <ul class="text-gray-500 text-sm space-y-2">
                            <li><Link<Route> to={Route::Home} classes={classes!("hover:text-blue-500")}>{ "Home" }</Link<Route>></li>
                            { placeholder_buttons(&QUICK_LINKS) }
                        </ul>
                    </nav>
                    <div>
                        <h4 class="font-bold mb-4">{ "LEGAL" }</h4>
                        <ul class="text-gray-500 text-sm space-y-2">
                            { placeholder_buttons(&LEGAL) }
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row justify-between items-center gap-4 text-xs text-gray-600 font-bold uppercase tracking-widest">
                    <span>{ "© 2025 GD PORTAL PRO. ALL RIGHTS RESERVED." }</span>
                    <div class="flex gap-4">
                        { for SOCIAL.iter().map(|label| html! { <button type="button" key={*label}>{ *label }</button> }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
