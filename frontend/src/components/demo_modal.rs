use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::context::modal::use_modal;
use crate::context::smooth_scroll::use_motion;
use crate::lead::channel::{submit, Delayed, MailtoChannel};
use crate::lead::form::{LeadField, LeadForm, INTERESTS};
use crate::lead::modal_state::{ModalAction, ModalPhase, ModalState};

/// Turns an input/select/textarea event into an edit of the matching field.
pub fn edit_from(event: &Event) -> Option<ModalAction> {
    let target = event.target()?;
    let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        (select.name(), select.value())
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        (area.name(), area.value())
    } else {
        return None;
    };
    LeadField::from_name(&name).map(|field| ModalAction::Edit(field, value))
}

/// Starts delivery of `form` for submission `ticket` and reports back through
/// `dispatcher`. The caller dispatches `Submit` first.
pub fn deliver_lead(form: LeadForm, ticket: u64, dispatcher: UseReducerDispatcher<ModalState>) {
    spawn_local(async move {
        let channel = Delayed::new(MailtoChannel, config::timings().modal_submit_delay_ms);
        let result = submit(&channel, &form, config::LEAD_MAILBOX)
            .await
            .map(|draft| info!("lead draft handed to mail client: {}", draft.subject));
        if let Err(err) = &result {
            warn!("lead delivery failed: {}", err);
        }
        dispatcher.dispatch(ModalAction::Delivered { ticket, result });
    });
}

/// Submit handler shared by the modal and the contact page.
pub fn submit_callback(
    state: &ModalState,
    dispatcher: UseReducerDispatcher<ModalState>,
) -> Callback<SubmitEvent> {
    let form = state.form().clone();
    let ticket = state.ticket() + 1;
    let can_submit = state.phase() == ModalPhase::Open;
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        if !can_submit {
            return;
        }
        dispatcher.dispatch(ModalAction::Submit);
        deliver_lead(form.clone(), ticket, dispatcher.clone());
    })
}

pub fn edit_callback<E: AsRef<Event> + 'static>(
    dispatcher: UseReducerDispatcher<ModalState>,
) -> Callback<E> {
    Callback::from(move |e: E| {
        if let Some(action) = edit_from(e.as_ref()) {
            dispatcher.dispatch(action);
        }
    })
}

#[function_component(DemoModal)]
pub fn demo_modal() -> Html {
    let modal = use_modal();
    let motion = use_motion();
    let is_open = modal.as_ref().map_or(false, |m| m.state().is_open());
    let pending_reset = modal.as_ref().map_or(false, |m| m.state().has_pending_reset());

    {
        // Wheel smoothing would scroll the page behind the modal.
        let motion = motion.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(motion) = &motion {
                    if *open {
                        motion.stop();
                    } else {
                        motion.start();
                    }
                }
                || ()
            },
            is_open,
        );
    }

    {
        let dispatcher = modal.as_ref().map(|m| m.dispatcher());
        use_effect_with_deps(
            move |(open, pending)| {
                let timer = match dispatcher {
                    Some(dispatcher) if !*open && *pending => {
                        Some(Timeout::new(config::timings().modal_reset_delay_ms, move || {
                            dispatcher.dispatch(ModalAction::ResetElapsed)
                        }))
                    }
                    _ => None,
                };
                move || drop(timer)
            },
            (is_open, pending_reset),
        );
    }

    let Some(modal) = modal else {
        return html! {};
    };
    if !is_open {
        return html! {};
    }

    let state = modal.state();
    let form = state.form();
    let submitting = state.phase() == ModalPhase::Submitting;
    let close = modal.close_callback::<MouseEvent>();
    let on_submit = submit_callback(state, modal.dispatcher());
    let on_input = edit_callback::<InputEvent>(modal.dispatcher());
    let on_change = edit_callback::<Event>(modal.dispatcher());
    let selected_interest = if form.interest.is_empty() {
        INTERESTS[0]
    } else {
        form.interest.as_str()
    };

    html! {
        <div class="demo-modal">
            <div class="demo-modal__backdrop" onclick={close.clone()}></div>
            <div class="demo-modal__frame">
                <div class="demo-modal__card">
                    <button class="demo-modal__close" onclick={close.clone()}>{"✕"}</button>

                    <div class="demo-modal__header">
                        <h3>{"Request a conversation"}</h3>
                        <p>{"Tell us what you're building and what \"done\" looks like."}</p>
                    </div>

                    if state.phase() == ModalPhase::Success {
                        <div class="demo-modal__success">
                            <div class="demo-modal__check">{"✓"}</div>
                            <h4>{"Request Sent!"}</h4>
                            <p>{"Thank you. We've prepared an email for you to send to our team."}</p>
                            <button class="demo-modal__link" onclick={close}>{"Close window"}</button>
                        </div>
                    } else {
                        <form class="demo-modal__form" onsubmit={on_submit}>
                            <div class="demo-modal__row">
                                <label>
                                    <span>{"First Name"}</span>
                                    <input type="text" name="fname" required=true placeholder="Jane"
                                        value={form.first_name.clone()} oninput={on_input.clone()} />
                                </label>
                                <label>
                                    <span>{"Last Name"}</span>
                                    <input type="text" name="lname" required=true placeholder="Doe"
                                        value={form.last_name.clone()} oninput={on_input.clone()} />
                                </label>
                            </div>
                            <label>
                                <span>{"Work Email"}</span>
                                <input type="email" name="email" required=true placeholder="jane@company.com"
                                    value={form.email.clone()} oninput={on_input.clone()} />
                            </label>
                            <label>
                                <span>{"Company Name"}</span>
                                <input type="text" name="company" required=true placeholder="Acme Inc."
                                    value={form.company.clone()} oninput={on_input} />
                            </label>
                            <label>
                                <span>{"Use Case"}</span>
                                <select name="usecase" onchange={on_change}>
                                    {
                                        INTERESTS.iter().map(|interest| html! {
                                            <option value={*interest} selected={*interest == selected_interest}>
                                                {*interest}
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </label>
                            if let Some(error) = state.error() {
                                <p class="demo-modal__error">{error.to_string()}</p>
                            }
                            <button type="submit" class="demo-modal__submit" disabled={submitting}>
                                { if submitting { "Processing..." } else { "Request conversation →" } }
                            </button>
                            <p class="demo-modal__fineprint">
                                {"By clicking \"Request conversation\" you agree to our Privacy Policy."}
                            </p>
                        </form>
                    }
                </div>
            </div>

            <style>
                {r#"
                .demo-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                }
                .demo-modal__backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(8px);
                }
                .demo-modal__frame {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    pointer-events: none;
                }
                .demo-modal__card {
                    position: relative;
                    width: 100%;
                    max-width: 32rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: #121214;
                    border: 1px solid var(--line);
                    pointer-events: auto;
                    animation: modal-in 0.3s ease-out;
                }
                @keyframes modal-in {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }
                .demo-modal__close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    background: none;
                    border: none;
                    color: var(--muted);
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .demo-modal__header {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .demo-modal__header h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.5rem;
                }
                .demo-modal__header p {
                    margin: 0;
                    color: var(--muted);
                    font-size: 0.875rem;
                }
                .demo-modal__form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .demo-modal__row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .demo-modal__form label span {
                    display: block;
                    margin-bottom: 0.4rem;
                    font-size: 0.75rem;
                    color: var(--muted);
                }
                .demo-modal__form input,
                .demo-modal__form select {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.65rem 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid var(--line);
                    color: #ffffff;
                    font-size: 0.875rem;
                }
                .demo-modal__form select {
                    background: #121214;
                }
                .demo-modal__error {
                    margin: 0;
                    color: #f87171;
                    font-size: 0.8rem;
                }
                .demo-modal__submit {
                    margin-top: 1rem;
                    padding: 0.85rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #4f46e5;
                    color: #ffffff;
                    font-weight: 700;
                    cursor: pointer;
                }
                .demo-modal__submit:disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                }
                .demo-modal__fineprint {
                    margin: 0.5rem 0 0;
                    text-align: center;
                    font-size: 0.65rem;
                    color: #6b7280;
                }
                .demo-modal__success {
                    text-align: center;
                    padding: 2.5rem 0;
                }
                .demo-modal__check {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(99, 91, 255, 0.1);
                    color: var(--brand-soft);
                    font-size: 2rem;
                }
                .demo-modal__success p {
                    color: var(--muted);
                    font-size: 0.875rem;
                }
                .demo-modal__link {
                    background: none;
                    border: none;
                    color: var(--brand-soft);
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
