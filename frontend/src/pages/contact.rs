use yew::prelude::*;

use crate::components::demo_modal::{edit_callback, submit_callback};
use crate::config;
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::lead::form::LeadForm;
use crate::lead::modal_state::{ModalAction, ModalPhase, ModalState};
use crate::motion::binding::{AnimationOptions, Archetype};

const SUBJECTS: [&str; 5] = [
    "Request a Demo",
    "Sales Inquiry",
    "Technical Support",
    "Partnership",
    "Other",
];

/// The subject to show as chosen. Nothing is preselected, so the visitor
/// picks the subject that ends up in the draft.
fn chosen_subject(form: &LeadForm) -> Option<&str> {
    SUBJECTS.iter().copied().find(|subject| *subject == form.interest)
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let state = use_reducer(ModalState::opened);
    let info = use_node_ref();
    let panel = use_node_ref();

    use_scroll_animation(info.clone(), AnimationOptions::new(Archetype::FadeRight));
    use_scroll_animation(
        panel.clone(),
        AnimationOptions::new(Archetype::FadeLeft).delay(0.2),
    );

    let form = state.form();
    let submitting = state.phase() == ModalPhase::Submitting;
    let on_submit = submit_callback(&state, state.dispatcher());
    let on_input = edit_callback::<InputEvent>(state.dispatcher());
    let on_change = edit_callback::<Event>(state.dispatcher());
    let send_another = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(ModalAction::Close);
            dispatcher.dispatch(ModalAction::Open);
        })
    };
    let chosen = chosen_subject(form);

    html! {
        <div class="contact">
            <div class="container contact__grid">
                <section class="contact__info" ref={info}>
                    <h1 class="section-title">{"Let's talk"}</h1>
                    <p>{"Tell us about your project, timeline, and constraints. We usually reply within one business day."}</p>
                    <div class="contact__item">
                        <span>{"Email"}</span>
                        <a href={format!("mailto:{}", config::LEAD_MAILBOX)}>{config::LEAD_MAILBOX}</a>
                    </div>
                    <div class="contact__item">
                        <span>{"Company"}</span>
                        <strong>{"AXOBITS PRIVATE LIMITED"}</strong>
                    </div>
                </section>

                <section class="contact__panel" ref={panel}>
                    if state.phase() == ModalPhase::Success {
                        <div class="contact__success">
                            <div class="contact__check">{"✓"}</div>
                            <h3>{"Message ready"}</h3>
                            <p>{"We've prepared an email for you to send to our team."}</p>
                            <button class="btn-ghost" onclick={send_another}>{"Send another message"}</button>
                        </div>
                    } else {
                        <form class="contact__form" onsubmit={on_submit}>
                            <label>
                                <span>{"Name"}</span>
                                <input type="text" name="name" required=true placeholder="Jane Doe"
                                    value={form.first_name.clone()} oninput={on_input.clone()} />
                            </label>
                            <label>
                                <span>{"Email"}</span>
                                <input type="email" name="email" required=true placeholder="jane@company.com"
                                    value={form.email.clone()} oninput={on_input.clone()} />
                            </label>
                            <label>
                                <span>{"Company"}</span>
                                <input type="text" name="company" placeholder="Acme Inc."
                                    value={form.company.clone()} oninput={on_input.clone()} />
                            </label>
                            <label>
                                <span>{"Subject"}</span>
                                <select name="subject" required=true onchange={on_change}>
                                    <option value="" disabled=true selected={chosen.is_none()}>
                                        {"Select a subject"}
                                    </option>
                                    {
                                        SUBJECTS.iter().map(|subject| html! {
                                            <option value={*subject} selected={chosen == Some(*subject)}>
                                                {*subject}
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </label>
                            <label>
                                <span>{"Message"}</span>
                                <textarea name="message" rows="5" placeholder="What are you building?"
                                    value={form.message.clone().unwrap_or_default()} oninput={on_input} />
                            </label>
                            if let Some(error) = state.error() {
                                <p class="contact__error">{error.to_string()}</p>
                            }
                            <button type="submit" class="btn-primary" disabled={submitting}>
                                { if submitting { "Sending..." } else { "Send message" } }
                            </button>
                        </form>
                    }
                </section>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 10rem 0 6rem;
                }
                .contact__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .contact__info p {
                    color: var(--muted);
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2.5rem;
                }
                .contact__item {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    margin-bottom: 1.5rem;
                }
                .contact__item span {
                    color: #6b7280;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .contact__item a {
                    color: var(--brand-soft);
                }
                .contact__panel {
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                }
                .contact__form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .contact__form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #d1d5db;
                }
                .contact__form input,
                .contact__form select,
                .contact__form textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--line);
                    background: #0b0d12;
                    color: #ffffff;
                    font: inherit;
                }
                .contact__error {
                    color: #f87171;
                    font-size: 0.875rem;
                }
                .contact__success {
                    text-align: center;
                    padding: 2rem 0;
                }
                .contact__check {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(34, 197, 94, 0.15);
                    color: #22c55e;
                    font-size: 1.75rem;
                }
                .contact__success p {
                    color: var(--muted);
                    margin-bottom: 2rem;
                }
                @media (max-width: 1024px) {
                    .contact__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::form::LeadField;

    #[test]
    fn test_no_subject_preselected() {
        assert_eq!(chosen_subject(&LeadForm::default()), None);
    }

    #[test]
    fn test_shown_subject_is_the_one_sent() {
        let mut form = LeadForm::default();
        form.set(LeadField::from_name("subject").unwrap(), "Partnership".to_string());
        assert_eq!(chosen_subject(&form), Some("Partnership"));
        let draft = form.draft(config::LEAD_MAILBOX);
        assert!(draft.body.contains("Interest: Partnership\n"));
    }
}
