use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::content::{SectionId, CONTACT_HIGHLIGHTS, CRM_STATUS_OPTIONS, IDEAL_CLIENT};
use crate::verification::{self, ContactForm, FormAction, FormStatus};

#[function_component(IdealClient)]
pub fn ideal_client() -> Html {
    html! {
        <section class="ideal-client">
            <style>
                {r#"
                    .ideal-client {
                        padding: 8rem 1.5rem;
                    }
                    .ideal-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .fit-badge {
                        display: inline-block;
                        color: #3b82f6;
                        background: rgba(59, 130, 246, 0.1);
                        border: 1px solid rgba(59, 130, 246, 0.2);
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 900;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                    }
                    .ideal-inner h3 {
                        font-size: 3.75rem;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        color: #fff;
                        margin: 3rem 0;
                    }
                    .fit-item {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                        text-align: left;
                        padding: 2rem;
                        margin-bottom: 1.5rem;
                        border-radius: 1.5rem;
                        background: rgba(17, 24, 39, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        transition: border-color 0.3s;
                    }
                    .fit-item:hover {
                        border-color: rgba(59, 130, 246, 0.4);
                    }
                    .fit-check {
                        width: 2.5rem;
                        height: 2.5rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #22c55e;
                        background: rgba(34, 197, 94, 0.2);
                        border: 1px solid rgba(34, 197, 94, 0.3);
                        transition: all 0.5s;
                    }
                    .fit-item:hover .fit-check {
                        background: #22c55e;
                        color: #fff;
                    }
                    .fit-item span {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #d1d5db;
                    }
                    @media (max-width: 640px) {
                        .ideal-inner h3 {
                            font-size: 2.25rem;
                        }
                        .fit-item {
                            padding: 1.5rem;
                        }
                        .fit-item span {
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
            <div class="ideal-inner">
                <div class="fit-badge">{"★ Partnership Fit"}</div>
                <h3>{ format!("Is {} Right for You?", config::BRAND) }</h3>
                { for IDEAL_CLIENT.iter().map(|item| html! {
                    <div class="fit-item">
                        <div class="fit-check">{"✔"}</div>
                        <span>{ *item }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(|| ContactForm::new(verification::browser_random));
    let honeypot_ref = use_node_ref();

    let on_answer = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::SetAnswer(input.value()));
        })
    };

    // Each self-ending status owns one timer, cancelled when the status moves on.
    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |status| {
                let timer = status.pending_timer().map(|(delay, action)| {
                    Timeout::new(delay, move || dispatcher.dispatch(action))
                });
                move || drop(timer)
            },
            form.status,
        );
    }

    let onsubmit = {
        let dispatcher = form.dispatcher();
        let honeypot_ref = honeypot_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let honeypot = honeypot_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            dispatcher.dispatch(FormAction::Submit { honeypot });
        })
    };

    let send_another = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FormAction::Reset))
    };

    let failed = form.status == FormStatus::Error;
    let submitting = form.status == FormStatus::Submitting;

    html! {
        <section id={SectionId::Contact.id()} class="contact">
            <style>
                {r#"
                    .contact {
                        padding: 8rem 1.5rem;
                        background: linear-gradient(to bottom, transparent, rgba(30, 58, 138, 0.2));
                    }
                    .contact-card {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 6rem;
                        border-radius: 4rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 6rem;
                    }
                    .contact-card h2 {
                        font-size: 4.5rem;
                        font-weight: 900;
                        line-height: 0.9;
                        letter-spacing: -0.05em;
                        color: #fff;
                    }
                    .contact-lead {
                        font-size: 1.5rem;
                        color: #9ca3af;
                        max-width: 28rem;
                    }
                    .contact-highlight {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #d1d5db;
                    }
                    .highlight-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        flex-shrink: 0;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                    }
                    .highlight-icon.blue { background: rgba(37, 99, 235, 0.1); border: 1px solid rgba(59, 130, 246, 0.2); }
                    .highlight-icon.purple { background: rgba(147, 51, 234, 0.1); border: 1px solid rgba(168, 85, 247, 0.2); }
                    .highlight-icon.green { background: rgba(22, 163, 74, 0.1); border: 1px solid rgba(34, 197, 94, 0.2); }
                    .socials {
                        display: flex;
                        gap: 1.5rem;
                        padding-top: 1.5rem;
                    }
                    .socials a {
                        padding: 1rem 1.25rem;
                        border-radius: 1rem;
                        background: #1f2937;
                        color: #fff;
                        text-decoration: none;
                        font-weight: 900;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        transition: background 0.3s;
                    }
                    .socials a:hover {
                        background: #2563eb;
                    }
                    .form-panel {
                        padding: 3rem;
                        border-radius: 2.5rem;
                        background: rgba(17, 24, 39, 0.6);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .field label {
                        font-size: 10px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: #6b7280;
                    }
                    .field input,
                    .field select,
                    .field textarea {
                        background: rgba(0, 0, 0, 0.6);
                        border: 1px solid #374151;
                        border-radius: 1rem;
                        padding: 1.1rem 1.5rem;
                        color: #fff;
                        font: inherit;
                        font-weight: 700;
                        outline: none;
                    }
                    .field input:focus,
                    .field select:focus,
                    .field textarea:focus {
                        border-color: #3b82f6;
                    }
                    .field textarea {
                        height: 10rem;
                        resize: none;
                    }
                    .hidden-field {
                        display: none;
                    }
                    .challenge {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1.5rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(37, 99, 235, 0.05);
                        border: 1px solid rgba(59, 130, 246, 0.2);
                        transition: all 0.3s;
                    }
                    .challenge.failed {
                        background: rgba(239, 68, 68, 0.1);
                        border-color: rgba(239, 68, 68, 0.4);
                    }
                    .challenge-caption {
                        font-size: 10px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #9ca3af;
                    }
                    .challenge.failed .challenge-caption {
                        color: #f87171;
                    }
                    .challenge-question {
                        color: #fff;
                        font-weight: 900;
                        font-style: italic;
                        margin: 0.25rem 0 0;
                    }
                    .challenge input {
                        width: 7rem;
                        background: rgba(0, 0, 0, 0.8);
                        border: 1px solid #374151;
                        border-radius: 0.75rem;
                        padding: 0.75rem 1rem;
                        color: #fff;
                        text-align: center;
                        font-weight: 900;
                        outline: none;
                    }
                    .challenge.failed input {
                        border-color: #ef4444;
                    }
                    .submit-button {
                        width: 100%;
                        margin-top: 2rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(96, 165, 250, 0.2);
                        background: #2563eb;
                        color: #fff;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .submit-button:hover {
                        background: #1d4ed8;
                    }
                    .submit-button:disabled {
                        background: #1f2937;
                        cursor: wait;
                    }
                    .form-error {
                        text-align: center;
                        color: #ef4444;
                        font-size: 10px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-25%); }
                    }
                    .form-success {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        gap: 1.5rem;
                        padding: 5rem 0;
                    }
                    .success-mark {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 1.5rem;
                        background: #22c55e;
                        color: #fff;
                        font-size: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .form-success h4 {
                        font-size: 1.875rem;
                        font-weight: 900;
                        color: #fff;
                        margin: 0;
                    }
                    .form-success p {
                        color: #9ca3af;
                        font-weight: 700;
                        max-width: 20rem;
                    }
                    .send-another {
                        background: none;
                        border: none;
                        color: #3b82f6;
                        font-weight: 900;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        cursor: pointer;
                    }
                    .send-another:hover {
                        color: #fff;
                    }
                    @media (max-width: 1024px) {
                        .contact-card {
                            grid-template-columns: 1fr;
                            padding: 3rem 2rem;
                            gap: 4rem;
                            border-radius: 3rem;
                        }
                        .contact-card h2 {
                            font-size: 3rem;
                        }
                    }
                    @media (max-width: 640px) {
                        .contact {
                            padding: 5rem 1rem;
                        }
                        .form-row {
                            grid-template-columns: 1fr;
                        }
                        .form-panel {
                            padding: 2rem;
                        }
                        .challenge {
                            flex-direction: column;
                        }
                        .challenge input {
                            width: 100%;
                        }
                    }
                "#}
            </style>
            <div class="glass-card contact-card">
                <div>
                    <h2>{"Let's Build Your "}<br /><span class="gradient-text">{"Profit Machine."}</span></h2>
                    <p class="contact-lead">{"Stop hiring assistants to do tasks. Hire an architect to build your future."}</p>
                    { for CONTACT_HIGHLIGHTS.iter().map(|item| html! {
                        <div class="contact-highlight">
                            <div class={classes!("highlight-icon", item.accent)}>{ item.icon }</div>
                            <span>{ item.text }</span>
                        </div>
                    }) }
                    <div class="socials">
                        <a href="#" aria-label="LinkedIn">{"in"}</a>
                        <a href="#" aria-label="Github">{"gh"}</a>
                        <a href={config::mailto()} aria-label="Email">{"✉"}</a>
                    </div>
                </div>
                <div class="form-panel">
                    {
                        if form.status == FormStatus::Success {
                            html! {
                                <div class="form-success">
                                    <div class="success-mark">{"✔"}</div>
                                    <h4>{"System Initialized"}</h4>
                                    <p>{"Your inquiry has been routed to my prioritization queue. I'll reach out within 24 hours."}</p>
                                    <button class="send-another" onclick={send_another}>
                                        {"↺ Send Another Inquiry"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {
                                <form {onsubmit}>
                                    <input
                                        type="text"
                                        name="website"
                                        class="hidden-field"
                                        tabindex="-1"
                                        autocomplete="off"
                                        ref={honeypot_ref}
                                    />
                                    <div class="form-row">
                                        <div class="field">
                                            <label>{"First Name"}</label>
                                            <input required={true} type="text" placeholder="John" />
                                        </div>
                                        <div class="field">
                                            <label>{"Business Name"}</label>
                                            <input required={true} type="text" placeholder="Acme Growth" />
                                        </div>
                                    </div>
                                    <div class="field">
                                        <label>{"Email Address"}</label>
                                        <input required={true} type="email" placeholder="john@growth.com" />
                                    </div>
                                    <div class="field">
                                        <label>{"Current GHL Status"}</label>
                                        <select>
                                            { for CRM_STATUS_OPTIONS.iter().map(|option| html! { <option>{ *option }</option> }) }
                                        </select>
                                    </div>
                                    <div class="field">
                                        <label>{"How can I help?"}</label>
                                        <textarea required={true} placeholder="Tell me about your bottlenecks..."></textarea>
                                    </div>
                                    <div class={classes!("challenge", failed.then(|| "failed"))}>
                                        <div>
                                            <div class="challenge-caption">
                                                { if failed { "🛡 Verification Failed" } else { "🛡 System Verification" } }
                                            </div>
                                            <p class="challenge-question">
                                                { format!("What is {} + {}?", form.challenge.a, form.challenge.b) }
                                            </p>
                                        </div>
                                        <input
                                            type="number"
                                            placeholder="?"
                                            required={true}
                                            value={form.answer.clone()}
                                            oninput={on_answer}
                                        />
                                    </div>
                                    <button type="submit" class="submit-button" disabled={submitting}>
                                        { if submitting { "Initialising Secure Connection..." } else { "Initialize Collaboration" } }
                                    </button>
                                    {
                                        if failed {
                                            html! { <p class="form-error">{"⚠ Incorrect Verification Answer"}</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </form>
                            }
                        }
                    }
                </div>
            </div>
        </section>
    }
}
