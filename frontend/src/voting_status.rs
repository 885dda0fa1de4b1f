use shared::VotingWindow;
use yew::prelude::*;

use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub voting_window: VotingWindow,
}

/// Banner showing whether the voting window is open and how long remains.
#[function_component(VotingStatus)]
pub fn voting_status(props: &Props) -> Html {
    let window = &props.voting_window;
    let banner = if window.is_active {
        combine_classes(STATUS_BANNER, STATUS_ACTIVE)
    } else {
        combine_classes(STATUS_BANNER, STATUS_CLOSED)
    };

    html! {
        <div class={banner}>
            <h2 class="text-2xl font-bold mb-2">
                {if window.is_active { "🔴 LIVE VOTING" } else { "⏸️ VOTING CLOSED" }}
            </h2>
            <p class="text-lg mb-2">
                {if window.is_active {
                    "Cast your votes now!"
                } else {
                    "Voting has ended for this round"
                }}
            </p>
            {if window.is_active {
                html! {
                    <div class="timer text-3xl font-bold">
                        {format!("Time remaining: {}", window.formatted_time())}
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
