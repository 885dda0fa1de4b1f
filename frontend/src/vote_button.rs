use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use shared::{
    Contestant, FastrandSource, MessageKind, RandomSource, VoteController, VotingWindow,
    VOTING_CONFIG,
};
use yew::prelude::*;

use crate::now_ms;
use crate::storage::BrowserStore;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub contestant: Contestant,
    pub voting_window: VotingWindow,
}

pub enum Msg {
    Vote,
    Finish,
    ClearMessage,
}

/// Vote control for one contestant. Owns that contestant's
/// [`VoteController`] over browser storage and drives the simulated
/// submission: `Vote` opens the in-flight window and sleeps for the
/// configured delay, `Finish` resolves it with a random draw, and a
/// kind-dependent timer clears the resulting message. The timer is owned
/// here so it dies with the component.
pub struct VoteButton {
    controller: VoteController,
    message_timer: Option<Timeout>,
}

impl Component for VoteButton {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let controller =
            VoteController::load(Rc::new(BrowserStore), &ctx.props().contestant.id, VOTING_CONFIG);
        Self {
            controller,
            message_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Vote => {
                if !ctx.props().voting_window.is_active || !self.controller.begin() {
                    return false;
                }
                let delay = VOTING_CONFIG.vote_submission_delay_ms;
                ctx.link().send_future(async move {
                    TimeoutFuture::new(delay).await;
                    Msg::Finish
                });
                true
            }
            Msg::Finish => {
                let mut rng = FastrandSource;
                if self.controller.resolve(rng.roll(), now_ms()).is_none() {
                    return false;
                }
                if let Some(message) = self.controller.message() {
                    let delay = VOTING_CONFIG.message_display_ms(message.kind);
                    let link = ctx.link().clone();
                    self.message_timer =
                        Some(Timeout::new(delay, move || link.send_message(Msg::ClearMessage)));
                }
                true
            }
            Msg::ClearMessage => {
                // The timer owns the display duration; clear unconditionally.
                self.message_timer = None;
                self.controller.clear_message();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let contestant = &ctx.props().contestant;
        let is_disabled = !ctx.props().voting_window.is_active
            || !self.controller.can_vote()
            || self.controller.is_submitting();

        html! {
            <div class="vote-section flex justify-between items-center flex-wrap gap-4">
                <div class="flex-1">
                    <button
                        class={vote_button_class(is_disabled)}
                        onclick={ctx.link().callback(|_| Msg::Vote)}
                        disabled={is_disabled}
                        aria-label={format!("Vote for {}", contestant.name)}
                    >
                        {if self.controller.is_submitting() {
                            html! {
                                <>
                                    <div class="animate-spin w-5 h-5 border-2 border-white border-t-transparent rounded-full"></div>
                                    {"Voting..."}
                                </>
                            }
                        } else {
                            html! {
                                {format!("❤️ Vote ({} left)", self.controller.remaining_votes())}
                            }
                        }}
                    </button>

                    <div class={VOTE_USAGE}>
                        {format!(
                            "You've used {} of {} votes",
                            self.controller.votes_used(),
                            self.controller.max_votes()
                        )}
                    </div>

                    {self.render_message()}
                </div>

                <div class={VOTE_TALLY}>
                    {format!("🏆 {}", format_tally(contestant.votes))}
                </div>
            </div>
        }
    }
}

impl VoteButton {
    fn render_message(&self) -> Html {
        match self.controller.message() {
            Some(message) => {
                let accent = match message.kind {
                    MessageKind::Success => MESSAGE_SUCCESS,
                    MessageKind::Failure => MESSAGE_FAILURE,
                };
                html! {
                    <div class={combine_classes(MESSAGE_BASE, accent)}>{&message.text}</div>
                }
            }
            None => html! {},
        }
    }
}

/// Renders a tally with thousands separators, e.g. `1247` as `"1,247"`.
fn format_tally(votes: u64) -> String {
    let digits = votes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
