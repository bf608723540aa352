use gdportal_core::{GameRecord, RenderFault};
use yew::prelude::*;

const RATING: &str = "RATING: 4.9/5";

/// Tag chips for `game`, each label once.
fn tags_for(game: &GameRecord) -> Vec<String> {
    let category = game.category.to_uppercase();
    let mut tags: Vec<String> = Vec::with_capacity(5);
    for tag in ["UNBLOCKED", category.as_str(), "CHROMEBOOK", "ARCADE", "2025"] {
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Frames the third-party game document. The frame's contents are never
/// inspected; its `src` is the catalog locator unchanged.
///
/// # Errors
/// Refuses to frame a record whose locators are not `http(s)`.
pub fn player(game: &GameRecord, on_back: &Callback<()>) -> Result<Html, RenderFault> {
    game.check_locators()?;
    let on_back = {
        let cb = on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    Ok(html! {
        <div class="player w-full bg-black min-h-screen flex flex-col">
            <div class="bg-gray-900 p-4 flex items-center justify-between border-b border-gray-800">
                <div class="flex items-center gap-4">
                    <button
                        type="button"
                        class="back-btn text-sm font-bold bg-gray-800 hover:bg-gray-700 px-4 py-2 rounded transition-colors"
                        onclick={on_back}
                    >
                        { "← BACK" }
                    </button>
                    <h1 class="player-title text-lg font-bold truncate">{ &game.title }</h1>
                </div>
                <div class="flex gap-2">
                    <button type="button" class="bg-blue-600 px-4 py-2 rounded text-xs font-bold uppercase tracking-wider">{ "FULLSCREEN" }</button>
                    <button type="button" class="bg-gray-800 px-4 py-2 rounded text-xs font-bold uppercase tracking-wider">{ "REPORT" }</button>
                </div>
            </div>

            <div class="flex-1 relative bg-black">
                <iframe
                    src={game.url.clone()}
                    class="game-frame w-full h-full border-none min-h-[600px]"
                    title={game.title.clone()}
                    allowfullscreen={true}
                    allow="autoplay; encrypted-media"
                />
            </div>

            <div class="bg-gray-900 p-6">
                <div class="max-w-4xl mx-auto">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-2xl font-black">{ &game.title }</h2>
                        <div class="bg-blue-600 px-3 py-1 rounded-md font-bold text-sm">{ RATING }</div>
                    </div>
                    <p class="text-gray-400 leading-relaxed mb-6">{ &game.description }</p>
                    <div class="flex flex-wrap gap-2 mb-8">
                        { for tags_for(game).into_iter().map(|tag| html! {
                            <span key={tag.clone()} class="bg-gray-800 px-3 py-1 rounded text-[10px] font-bold text-gray-500">{ format!("#{tag}") }</span>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    })
}
