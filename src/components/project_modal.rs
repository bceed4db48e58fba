use log::debug;
use yew::prelude::*;

use crate::components::section_link::SectionLink;
use crate::content::{CaseStudy, SectionId, CASE_STUDY_HIGHLIGHTS};
use crate::hooks::use_scroll_lock;
use crate::scroll_lock::MODAL_LOCK;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: &'static CaseStudy,
    pub on_close: Callback<()>,
}

/// Walkthrough viewer for one case study. Mounted only while a project is
/// selected; the page stays scroll-locked for exactly that lifetime.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;

    use_scroll_lock(true, MODAL_LOCK);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Closing project modal");
            on_close.emit(());
        })
    };

    // dismiss first, the scroll to contact follows from the link itself
    let book_call = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: SectionId| on_close.emit(()))
    };

    html! {
        <div class="modal-root">
            <style>
                {r#"
                    .modal-root {
                        position: fixed;
                        inset: 0;
                        z-index: 150;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2.5rem;
                        animation: modal-fade 0.3s ease-out;
                    }
                    @keyframes modal-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .modal-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(24px);
                    }
                    .modal-card {
                        position: relative;
                        width: 100%;
                        max-width: 64rem;
                        height: 100%;
                        max-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        border-radius: 3rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(17, 24, 39, 0.7);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.6);
                    }
                    .modal-header {
                        padding: 2.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(17, 24, 39, 0.4);
                    }
                    .modal-header h4 {
                        font-size: 2.25rem;
                        font-weight: 900;
                        color: #fff;
                        margin: 0.25rem 0 0;
                    }
                    .modal-tag {
                        font-family: monospace;
                        font-size: 0.75rem;
                        color: #3b82f6;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-left: 0.75rem;
                    }
                    .modal-close {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                        flex-shrink: 0;
                    }
                    .modal-close:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .modal-body {
                        flex: 1;
                        overflow-y: auto;
                        padding: 2.5rem;
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 2.5rem;
                    }
                    .modal-body h5 {
                        font-size: 0.75rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: #3b82f6;
                    }
                    .modal-body p,
                    .modal-body li {
                        color: #9ca3af;
                    }
                    .yield-note {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(37, 99, 235, 0.1);
                        border: 1px solid rgba(59, 130, 246, 0.2);
                    }
                    .video-frame {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        border-radius: 2rem;
                        overflow: hidden;
                        background: #000;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .video-frame video {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .video-restricted {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        text-align: center;
                        color: #fff;
                        font-weight: 700;
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .video-meta {
                        display: flex;
                        justify-content: space-between;
                        font-size: 10px;
                        color: #4b5563;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-top: 1.5rem;
                    }
                    .modal-footer {
                        padding: 2rem 2.5rem;
                        display: flex;
                        gap: 1.5rem;
                        justify-content: space-between;
                        align-items: center;
                        background: rgba(17, 24, 39, 0.6);
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .modal-footer p {
                        color: #6b7280;
                        font-weight: 700;
                        max-width: 28rem;
                    }
                    @media (max-width: 1024px) {
                        .modal-root {
                            padding: 1rem;
                        }
                        .modal-body {
                            grid-template-columns: 1fr;
                        }
                        .modal-footer {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-card">
                <div class="modal-header">
                    <div>
                        <span class="category-badge">{ project.category }</span>
                        <span class="modal-tag">{"#Walkthrough_Enabled"}</span>
                        <h4>{ project.title }</h4>
                    </div>
                    <button class="modal-close" onclick={close} aria-label="Close">{"✕"}</button>
                </div>
                <div class="modal-body">
                    <div>
                        <h5>{"Project Objective"}</h5>
                        <p>{ project.description }</p>
                        <h5>{"Technical Highlights"}</h5>
                        <ul>
                            { for CASE_STUDY_HIGHLIGHTS.iter().map(|h| html! { <li>{ *h }</li> }) }
                        </ul>
                        <div class="yield-note">
                            <h5>{"⚡ Automation Yield"}</h5>
                            <p>{"This specific implementation saved the client an estimated 14 hours per week of manual data entry and follow-up."}</p>
                        </div>
                    </div>
                    <div>
                        <div class="video-frame">
                            {
                                match project.video_url {
                                    Some(url) => html! {
                                        <video controls={true} poster={project.image_placeholder}>
                                            <source src={url} type="video/mp4" />
                                            {"Your browser does not support the video tag."}
                                        </video>
                                    },
                                    None => html! {
                                        <div class="video-restricted">
                                            {"For proprietary reasons, full logic walkthroughs are demonstrated live during strategy calls."}
                                        </div>
                                    },
                                }
                            }
                        </div>
                        <div class="video-meta">
                            <span>{"🌐 Global Standard Deployment"}</span>
                            <span>{"⏱ 14m 22s Walkthrough"}</span>
                        </div>
                    </div>
                </div>
                <div class="modal-footer">
                    <p>{"Inspired by this system? Let's discuss how we can map a similar architecture for your business."}</p>
                    <SectionLink to={SectionId::Contact} class={classes!("primary-cta")} onnavigate={book_call}>
                        {"Book Strategy Call"}
                    </SectionLink>
                </div>
            </div>
        </div>
    }
}
