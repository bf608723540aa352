use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RecoveryPageProps {
    /// Raw text of the captured fault, shown as-is for debugging.
    pub description: AttrValue,
    pub on_reboot: Callback<()>,
}

#[function_component(RecoveryPage)]
pub fn recovery_page(props: &RecoveryPageProps) -> Html {
    let on_click = {
        let on_reboot = props.on_reboot.clone();
        Callback::from(move |_| on_reboot.emit(()))
    };

    html! {
        <div class="recovery min-h-screen bg-gray-900 flex flex-col items-center justify-center p-4 text-center" role="alert">
            <h1 class="text-6xl font-black text-red-600 mb-4 font-mono">{ "CRITICAL ERROR" }</h1>
            <p class="text-xl text-gray-300 mb-8">{ "The game engine encountered a fatal exception." }</p>
            <div class="bg-black p-4 rounded border border-red-900 max-w-2xl overflow-auto text-left">
                <code class="fault-description text-red-400 text-sm whitespace-pre-wrap">
                    { props.description.as_str() }
                </code>
            </div>
            <button
                type="button"
                class="mt-8 bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-full font-bold transition-transform active:scale-95"
                onclick={on_click}
            >
                { "REBOOT SYSTEM" }
            </button>
        </div>
    }
}
