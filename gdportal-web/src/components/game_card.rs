use crate::router::Route;
use gdportal_core::{GameRecord, RenderFault};
use yew::prelude::*;
use yew_router::prelude::*;

const VERSION_TAG: &str = "v2025.1";

/// Listing card linking to the record's player route.
///
/// # Errors
/// Refuses records whose thumbnail or frame locator is not `http(s)`.
pub fn game_card(game: &GameRecord) -> Result<Html, RenderFault> {
    game.check_locators()?;
    Ok(html! {
        <Link<Route>
            key={game.id.clone()}
            to={Route::game(game.id.clone())}
            classes={classes!("game-card", "group", "relative", "bg-gray-800", "rounded-xl", "overflow-hidden", "border", "border-gray-700", "transition-all", "hover:scale-[1.02]")}
        >
            <div class="aspect-video w-full overflow-hidden">
                <img
                    src={game.thumbnail.clone()}
                    alt={game.title.clone()}
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform group-hover:scale-110"
                />
            </div>
            <div class="p-4">
                <div class="flex items-center justify-between mb-2">
                    <span class="text-[10px] font-bold text-blue-400 uppercase tracking-widest">{ &game.category }</span>
                    <span class="text-[10px] text-gray-500">{ VERSION_TAG }</span>
                </div>
                <h3 class="game-title text-lg font-bold text-white group-hover:text-blue-400 transition-colors">{ &game.title }</h3>
                <p class="text-gray-400 text-xs mt-2 line-clamp-2">{ &game.description }</p>
            </div>
        </Link<Route>>
    })
}
