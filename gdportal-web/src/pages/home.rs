use crate::components::game_card::game_card;
use gdportal_core::{GameRecord, RenderFault};
use yew::prelude::*;

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "UNBLOCKED 2025",
        "Specifically hosted on static AWS S3 buckets to bypass legacy web filters in 2025.",
    ),
    (
        "CHROMEBOOK READY",
        "Lightweight architecture ensures 60FPS even on low-spec school devices.",
    ),
    (
        "ZERO INSTALL",
        "No local storage or extension required. Play directly in the sandbox.",
    ),
];

/// Listing of `games` in the order given, one card each.
///
/// # Errors
/// Propagates the first card that refuses to render.
pub fn home(games: &[GameRecord]) -> Result<Html, RenderFault> {
    let cards = games.iter().map(game_card).collect::<Result<Html, _>>()?;

    Ok(html! {
        <main id="main" class="home max-w-7xl mx-auto px-6 py-8" role="main">
            <div class="mb-12">
                <h1 class="text-4xl md:text-5xl font-black mb-4">{ "Geometry Dash Unblocked" }</h1>
                <p class="text-gray-400 max-w-2xl">
                    { "Experience the ultimate rhythm platformer directly in your browser. Fully optimized for Chromebooks in 2025. No downloads, no lag, just pure gameplay." }
                </p>
            </div>

            <section aria-labelledby="popular-heading">
                <div class="flex items-center justify-between mb-8">
                    <h2 id="popular-heading" class="text-2xl font-bold border-l-4 border-blue-600 pl-4">{ "POPULAR NOW" }</h2>
                    <div class="flex gap-2 text-xs font-bold uppercase tracking-widest">
                        <button type="button" class="text-blue-500">{ "Featured" }</button>
                        <span class="text-gray-700">{ "|" }</span>
                        <button type="button" class="text-gray-500 hover:text-white">{ "Newest" }</button>
                    </div>
                </div>

                <div class="game-grid grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    { cards }
                </div>
            </section>

            <div class="mt-16 bg-blue-900/20 border border-blue-500/30 p-8 rounded-2xl">
                <h2 class="text-2xl font-black mb-4">{ "Why Play Here?" }</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    { for HIGHLIGHTS.iter().map(|(heading, body)| html! {
                        <div>
                            <h4 class="font-bold text-blue-400 mb-2">{ *heading }</h4>
                            <p class="text-sm text-gray-400 text-pretty">{ *body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </main>
    })
}
