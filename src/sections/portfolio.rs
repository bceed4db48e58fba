use log::debug;
use yew::prelude::*;

use crate::components::project_modal::ProjectModal;
use crate::components::section_link::SectionLink;
use crate::content::{CaseStudy, SectionId, CASE_STUDIES};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    // borrowed straight from the static table, nothing is copied into state
    let selected = use_state(|| None::<&'static CaseStudy>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id={SectionId::Portfolio.id()} class="portfolio">
            <style>
                {r#"
                    .portfolio {
                        padding: 8rem 1.5rem;
                        background: rgba(17, 24, 39, 0.3);
                    }
                    .portfolio-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .portfolio-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        gap: 1.5rem;
                        margin-bottom: 6rem;
                    }
                    .portfolio-head p {
                        color: #9ca3af;
                        max-width: 24rem;
                        font-size: 1.125rem;
                    }
                    .case-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3.5rem;
                    }
                    .case-tile {
                        cursor: pointer;
                    }
                    .case-cover {
                        position: relative;
                        overflow: hidden;
                        aspect-ratio: 16 / 9;
                        border-radius: 2.5rem;
                        margin-bottom: 2rem;
                        background: #1f2937;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .case-cover img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.4;
                        filter: grayscale(1);
                        transition: all 1.5s;
                    }
                    .case-tile:hover .case-cover img {
                        opacity: 1;
                        transform: scale(1.1);
                        filter: grayscale(0);
                    }
                    .case-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        background: rgba(37, 99, 235, 0.8);
                        transition: opacity 0.5s;
                    }
                    .case-tile:hover .case-overlay {
                        opacity: 1;
                    }
                    .case-overlay span {
                        background: #fff;
                        color: #000;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-weight: 900;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                    }
                    .case-cover .category-badge {
                        position: absolute;
                        top: 1.5rem;
                        left: 1.5rem;
                    }
                    .case-tile h4 {
                        font-size: 1.875rem;
                        font-weight: 900;
                        color: #fff;
                        margin-bottom: 0.75rem;
                        transition: color 0.3s;
                    }
                    .case-tile:hover h4 {
                        color: #3b82f6;
                    }
                    .case-tile p {
                        color: #9ca3af;
                        font-size: 1.125rem;
                        line-height: 1.6;
                    }
                    .confidential {
                        margin-top: 8rem;
                        padding: 4rem;
                        border-radius: 3rem;
                        border: 1px dashed #374151;
                        text-align: center;
                        background: rgba(17, 24, 39, 0.4);
                    }
                    .confidential p {
                        color: #6b7280;
                        font-style: italic;
                        max-width: 42rem;
                        margin: 0 auto 1.5rem;
                    }
                    .confidential a {
                        color: #3b82f6;
                        font-weight: 900;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                        letter-spacing: 0.3em;
                        text-decoration: none;
                    }
                    .confidential a:hover {
                        color: #fff;
                    }
                    @media (max-width: 768px) {
                        .portfolio {
                            padding: 5rem 1rem;
                        }
                        .portfolio-head {
                            flex-direction: column;
                            align-items: center;
                            text-align: center;
                        }
                        .case-grid {
                            grid-template-columns: 1fr;
                        }
                        .confidential {
                            padding: 2.5rem;
                        }
                    }
                "#}
            </style>
            <div class="portfolio-inner">
                <div class="portfolio-head">
                    <div>
                        <h2 class="section-kicker">{"Proof of Concept"}</h2>
                        <h3 class="section-title">{"Strategic Implementations"}</h3>
                    </div>
                    <p>{"A collection of high-impact CRM systems built to solve specific conversion friction."}</p>
                </div>
                <div class="case-grid">
                    { for CASE_STUDIES.iter().map(|study| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| {
                                debug!("Opening case study {}", study.title);
                                selected.set(Some(study));
                            })
                        };
                        html! {
                            <div class="case-tile" {onclick}>
                                <div class="case-cover">
                                    <img src={study.image_placeholder} alt={study.title} />
                                    <div class="case-overlay">
                                        <span>{"▶ View Logic Walkthrough"}</span>
                                    </div>
                                    <span class="category-badge">{ study.category }</span>
                                </div>
                                <h4>{ study.title }</h4>
                                <p>{ study.description }</p>
                            </div>
                        }
                    }) }
                </div>
                <div class="confidential">
                    <p>
                        {"\"Confidentiality is a priority. Technical system maps and proprietary logic for previous clients are shared during strategy calls to showcase implementation depth.\""}
                    </p>
                    <SectionLink to={SectionId::Contact}>
                        {"Book a technical walkthrough ›"}
                    </SectionLink>
                </div>
            </div>
            {
                match *selected {
                    Some(project) => html! { <ProjectModal {project} {on_close} /> },
                    None => html! {},
                }
            }
        </section>
    }
}
