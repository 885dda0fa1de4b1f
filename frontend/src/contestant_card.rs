use shared::{Contestant, VotingWindow};
use yew::prelude::*;

use crate::styles::*;
use crate::vote_button::VoteButton;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub contestant: Contestant,
    pub voting_window: VotingWindow,
}

/// One contestant's card. Failures inside the card (a profile image that
/// refuses to load) flip a local error flag and swap in a fallback, so one
/// broken card never takes the rest of the page with it. Retry only resets
/// the flag; vote state is untouched.
#[function_component(ContestantCard)]
pub fn contestant_card(props: &Props) -> Html {
    let card_error = use_state(|| false);

    if *card_error {
        let retry = {
            let card_error = card_error.clone();
            Callback::from(move |_| card_error.set(false))
        };
        return html! {
            <div class={CARD_FALLBACK}>
                <h2 class="text-xl font-bold mb-2">{"⚠️ Something went wrong"}</h2>
                <p class="mb-4">{"Don't worry, you can still vote for other contestants!"}</p>
                <button class={CARD_FALLBACK_RETRY} onclick={retry}>
                    {"Try Again"}
                </button>
            </div>
        };
    }

    let on_image_error = {
        let card_error = card_error.clone();
        Callback::from(move |_: Event| card_error.set(true))
    };

    html! {
        <div class={CARD}>
            <img
                src={props.contestant.image.clone()}
                alt={props.contestant.name.clone()}
                class={CARD_IMAGE}
                loading="lazy"
                onerror={on_image_error}
            />

            <div class="contestant-info mb-6">
                <h3 class={CARD_NAME}>{&props.contestant.name}</h3>
                <div class={CARD_CATEGORY}>{&props.contestant.category}</div>
                <p class={CARD_DESCRIPTION}>{&props.contestant.description}</p>
            </div>

            <VoteButton
                contestant={props.contestant.clone()}
                voting_window={props.voting_window.clone()}
            />
        </div>
    }
}
