use yew::prelude::*;

/// Shown when `/game/{id}` names no catalog entry.
pub fn not_found(on_go_home: &Callback<()>) -> Html {
    let go_home = {
        let cb = on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="not-found flex flex-col items-center justify-center min-h-[80vh]" aria-live="assertive">
            <h2 class="text-4xl font-bold mb-4">{ "GAME NOT FOUND" }</h2>
            <button
                type="button"
                class="bg-blue-600 px-6 py-2 rounded-full font-bold"
                onclick={go_home}
            >
                { "GO BACK" }
            </button>
        </div>
    }
}
