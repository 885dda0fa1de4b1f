use yew::prelude::*;

mod contestant_card;
mod home;
mod storage;
mod styles;
mod vote_button;
mod voting_status;

use crate::home::Home;

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-purple-600 via-blue-600 to-purple-800">
            <Home />
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // Routes tracing events (storage failures and the like) to the
        // browser console.
        tracing_wasm::set_as_global_default();
    }
    yew::Renderer::<App>::new().render();
}
