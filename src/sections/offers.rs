use yew::prelude::*;

use crate::config;
use crate::content::{SectionId, POSITIONING_METRICS, SERVICES, SKILLS};

#[function_component(Expertise)]
pub fn expertise() -> Html {
    html! {
        <section id={SectionId::Expertise.id()} class="expertise">
            <style>
                {r#"
                    .expertise {
                        padding: 8rem 1.5rem;
                    }
                    .skill-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .skill-card {
                        padding: 2rem;
                        border-radius: 2.5rem;
                        transition: all 0.5s;
                    }
                    .skill-card:hover {
                        border-color: rgba(59, 130, 246, 0.5);
                        transform: translateY(-0.5rem);
                    }
                    .skill-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 1rem;
                        background: rgba(31, 41, 55, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                        transition: all 0.5s;
                    }
                    .skill-card:hover .skill-icon {
                        transform: rotate(12deg);
                        background: #2563eb;
                    }
                    .skill-card h4 {
                        font-size: 1.25rem;
                        font-weight: 900;
                        color: #fff;
                    }
                    @media (max-width: 1024px) {
                        .skill-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .expertise {
                            padding: 5rem 1rem;
                        }
                        .skill-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-head">
                <h2 class="section-kicker">{"Technical Mastery"}</h2>
                <h3 class="section-title">{"Deep Platform Expertise"}</h3>
                <p>{"I leverage the full GoHighLevel suite to create a proprietary competitive advantage for your business."}</p>
            </div>
            <div class="skill-grid">
                { for SKILLS.iter().map(|category| html! {
                    <div class="glass-card skill-card">
                        <div class="skill-icon">{ category.icon }</div>
                        <h4>{ category.title }</h4>
                        <ul class="dot-list">
                            { for category.skills.iter().map(|skill| html! { <li>{ *skill }</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={SectionId::Services.id()} class="services">
            <style>
                {r#"
                    .services {
                        padding: 8rem 1.5rem;
                        background: rgba(17, 24, 39, 0.2);
                    }
                    .service-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2.5rem;
                    }
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        padding: 3rem;
                        border-radius: 2.5rem;
                        background: rgba(17, 24, 39, 0.6);
                        border: 1px solid #1f2937;
                        transition: all 0.5s;
                    }
                    .service-card:hover {
                        border-color: rgba(59, 130, 246, 0.4);
                    }
                    .service-card h4 {
                        font-size: 1.875rem;
                        font-weight: 900;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .service-card > p {
                        color: #9ca3af;
                        margin-bottom: 2.5rem;
                        line-height: 1.6;
                    }
                    .feature-list {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 3rem;
                        flex-grow: 1;
                    }
                    .feature-list li {
                        color: #d1d5db;
                        font-weight: 700;
                        font-size: 0.875rem;
                        margin-bottom: 1.25rem;
                    }
                    .feature-list li::before {
                        content: '✔';
                        color: #3b82f6;
                        margin-right: 1rem;
                    }
                    .inquire {
                        text-align: center;
                        background: #1f2937;
                        color: #fff;
                        font-weight: 900;
                        padding: 1.25rem;
                        border-radius: 1rem;
                        text-transform: uppercase;
                        font-size: 11px;
                        letter-spacing: 0.2em;
                        text-decoration: none;
                        transition: background 0.3s;
                    }
                    .service-card:hover .inquire {
                        background: #2563eb;
                    }
                    @media (max-width: 768px) {
                        .services {
                            padding: 5rem 1rem;
                        }
                        .service-grid {
                            grid-template-columns: 1fr;
                        }
                        .service-card {
                            padding: 2rem;
                        }
                    }
                "#}
            </style>
            <div class="section-head">
                <h2 class="section-kicker">{"Our Solutions"}</h2>
                <h3 class="section-title">{"Ready-to-Deploy Systems"}</h3>
                <p>{"Standard virtual assistance ends where my automation begins. Select a path to total business optimization."}</p>
            </div>
            <div class="service-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <h4>{ service.title }</h4>
                        <p>{ service.description }</p>
                        <ul class="feature-list">
                            { for service.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                        </ul>
                        <a href={SectionId::Contact.href()} class="inquire">{"Inquire Now"}</a>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Positioning)]
pub fn positioning() -> Html {
    html! {
        <section class="positioning">
            <style>
                {r#"
                    .positioning {
                        padding: 8rem 1.5rem;
                        background: #2563eb;
                        overflow: hidden;
                    }
                    .positioning-row {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 4rem;
                    }
                    .positioning h3 {
                        font-size: 3.75rem;
                        font-weight: 900;
                        font-style: italic;
                        text-transform: uppercase;
                        line-height: 0.95;
                        letter-spacing: -0.05em;
                        color: #fff;
                    }
                    .positioning h3 span {
                        color: rgba(0, 0, 0, 0.3);
                    }
                    .positioning p {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #dbeafe;
                        max-width: 36rem;
                    }
                    .metric-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .metric {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 2rem;
                        text-align: center;
                        transition: transform 0.5s;
                    }
                    .metric:hover {
                        transform: translateY(-0.5rem);
                    }
                    .metric strong {
                        display: block;
                        font-size: 2.25rem;
                        font-weight: 900;
                        color: #2563eb;
                    }
                    .metric span {
                        font-size: 11px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #6b7280;
                    }
                    @media (max-width: 1024px) {
                        .positioning-row {
                            flex-direction: column;
                            text-align: center;
                        }
                        .positioning h3 {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>
            <div class="positioning-row">
                <div>
                    <h3>
                        {"\"Most VAs complete tasks."}<br />
                        <span>{"I build systems that run businesses automatically.\""}</span>
                    </h3>
                    <p>
                        { format!("When you hire {}, you aren't paying for hours. You're investing in an infrastructure that clones you.", config::BRAND) }
                    </p>
                </div>
                <div class="metric-grid">
                    { for POSITIONING_METRICS.iter().map(|metric| html! {
                        <div class="metric">
                            <strong>{ metric.value }</strong>
                            <span>{ metric.label }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
