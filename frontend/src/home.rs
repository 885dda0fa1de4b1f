use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use shared::{
    apply_live_update, seed_contestants, Contestant, FastrandSource, VotingWindow, VOTING_CONFIG,
};
use yew::prelude::*;

use crate::contestant_card::ContestantCard;
use crate::now_ms;
use crate::styles::*;
use crate::voting_status::VotingStatus;

/// Contestant roster; each dispatch applies one simulated live update.
struct Roster {
    contestants: Vec<Contestant>,
}

impl Reducible for Roster {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        let mut contestants = self.contestants.clone();
        let mut rng = FastrandSource;
        apply_live_update(
            &mut contestants,
            &mut rng,
            VOTING_CONFIG.live_update_delta_range,
        );
        Rc::new(Self { contestants })
    }
}

struct WindowState {
    window: VotingWindow,
}

impl Reducible for WindowState {
    /// The current time in epoch milliseconds.
    type Action = i64;

    fn reduce(self: Rc<Self>, now_ms: i64) -> Rc<Self> {
        let mut window = self.window.clone();
        window.tick(now_ms);
        Rc::new(Self { window })
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let roster = use_reducer(|| Roster {
        contestants: seed_contestants(),
    });
    let window_state = use_reducer(|| WindowState {
        window: VotingWindow::open(now_ms(), VOTING_CONFIG.voting_duration_ms),
    });
    let is_updating = use_state(|| false);

    {
        let clock = window_state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1000, move || clock.dispatch(now_ms()));
                move || drop(interval)
            },
            (),
        );
    }

    {
        let roster = roster.dispatcher();
        let is_updating = is_updating.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(VOTING_CONFIG.update_interval_ms, move || {
                    is_updating.set(true);
                    roster.dispatch(());
                    let is_updating = is_updating.clone();
                    Timeout::new(VOTING_CONFIG.updating_flash_ms, move || {
                        is_updating.set(false);
                    })
                    .forget();
                });
                move || drop(interval)
            },
            (),
        );
    }

    let window = window_state.window.clone();

    html! {
        <div class={PAGE}>
            <header class={HEADER}>
                <h1 class={HEADING_XL}>{"🌟 America's Got Talent - Live Voting 🌟"}</h1>
                <p class={SUBTITLE}>{"Vote for your favorite contestants during the live show!"}</p>
            </header>

            <VotingStatus voting_window={window.clone()} />

            <div class={CARD_GRID}>
                {for roster.contestants.iter().map(|contestant| html! {
                    <ContestantCard
                        key={contestant.id.clone()}
                        contestant={contestant.clone()}
                        voting_window={window.clone()}
                    />
                })}
            </div>

            <footer class={FOOTER}>
                {if *is_updating {
                    html! { <p class={UPDATING_FLASH}>{"🔄 Live updates..."}</p> }
                } else {
                    html! {}
                }}
                <p class="text-lg">{"© 2025 Live Voting System - Built with Rust & Yew"}</p>
            </footer>
        </div>
    }
}
