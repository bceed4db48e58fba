use yew::prelude::*;

use crate::config;
use crate::content::{SectionId, EXPERIENCE_STATS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.id()} class="about">
            <style>
                {r#"
                    .about {
                        padding: 8rem 1.5rem;
                        background: rgba(17, 24, 39, 0.4);
                    }
                    .about-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        align-items: center;
                    }
                    .portrait {
                        position: relative;
                    }
                    .portrait img {
                        width: 100%;
                        aspect-ratio: 4 / 5;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        filter: grayscale(1);
                        transition: filter 0.7s;
                    }
                    .portrait img:hover {
                        filter: grayscale(0);
                    }
                    .tenure-badge {
                        position: absolute;
                        bottom: -1.5rem;
                        right: -1.5rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                    }
                    .tenure-badge strong {
                        display: block;
                        font-size: 3rem;
                        font-weight: 900;
                        color: #3b82f6;
                    }
                    .tenure-badge span {
                        font-size: 0.75rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #9ca3af;
                    }
                    .about-copy p {
                        color: #9ca3af;
                        font-size: 1.125rem;
                        line-height: 1.7;
                    }
                    .about-copy blockquote {
                        border-left: 4px solid #2563eb;
                        padding: 0.5rem 1.5rem;
                        margin: 0;
                        background: rgba(37, 99, 235, 0.05);
                        color: #dbeafe;
                        font-style: italic;
                    }
                    .role-cards {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                        padding-top: 1rem;
                    }
                    .role-card {
                        padding: 1rem;
                        border-radius: 1rem;
                        background: rgba(31, 41, 55, 0.5);
                        border: 1px solid #374151;
                    }
                    .role-card strong {
                        color: #fff;
                    }
                    .role-card p {
                        font-size: 11px;
                        color: #6b7280;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    @media (max-width: 768px) {
                        .about {
                            padding: 5rem 1rem;
                            text-align: center;
                        }
                        .about-grid {
                            grid-template-columns: 1fr;
                            gap: 3rem;
                        }
                    }
                "#}
            </style>
            <div class="about-grid">
                <div class="portrait">
                    <img src="https://picsum.photos/seed/justene/800/1000" alt="Justene" />
                    <div class="glass-card tenure-badge">
                        <strong>{"16+"}</strong>
                        <span>{"Months of Deep GHL Systems Execution"}</span>
                    </div>
                </div>
                <div class="about-copy">
                    <h2 class="section-kicker">{"Expert Profile"}</h2>
                    <h3 class="section-title">{"The Architect Behind Your Automation."}</h3>
                    <p>
                        {"I specialize in transforming complex business operations into seamless, automated ecosystems. For me, GoHighLevel isn't just a tool, it's the engine for your growth."}
                    </p>
                    <p>
                        {"As "}<strong>{ config::BRAND }</strong>
                        {", I work at the intersection of marketing strategy and technical architecture. I don't just \"set up accounts\"; I design conversion pathways that capture, qualify, and close leads 24/7."}
                    </p>
                    <blockquote>
                        {"\"My mission is to delete manual work from your schedule so you can focus on high-level scaling.\""}
                    </blockquote>
                    <div class="role-cards">
                        <div class="role-card">
                            <strong>{"✔ Strategist"}</strong>
                            <p>{"Mapping your entire customer journey."}</p>
                        </div>
                        <div class="role-card">
                            <strong>{"✔ Architect"}</strong>
                            <p>{"Building unbreakable GHL infrastructures."}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <section class="experience">
            <style>
                {r#"
                    .experience {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(to right, rgba(30, 58, 138, 0.1), rgba(37, 99, 235, 0.05), rgba(30, 58, 138, 0.1));
                        border-top: 1px solid rgba(31, 41, 55, 0.5);
                        border-bottom: 1px solid rgba(31, 41, 55, 0.5);
                    }
                    .experience-row {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 4rem;
                    }
                    .experience h3 {
                        font-size: 2.25rem;
                        font-weight: 900;
                        color: #fff;
                    }
                    .experience p {
                        color: #9ca3af;
                        font-size: 1.125rem;
                        max-width: 36rem;
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: repeat(3, auto);
                        gap: 3rem;
                    }
                    .stat-value {
                        font-size: 3rem;
                        font-weight: 900;
                        color: #fff;
                        transition: color 0.5s;
                    }
                    .stat:hover .stat-value {
                        color: #3b82f6;
                    }
                    .stat-label {
                        font-size: 11px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #6b7280;
                    }
                    .stat-sub {
                        font-size: 9px;
                        font-weight: 700;
                        text-transform: uppercase;
                        color: #4b5563;
                    }
                    @media (max-width: 768px) {
                        .experience-row {
                            flex-direction: column;
                            text-align: center;
                        }
                        .stat-grid {
                            grid-template-columns: repeat(2, auto);
                        }
                    }
                "#}
            </style>
            <div class="experience-row">
                <div>
                    <div class="section-kicker">{"📈 Battle-Tested Performance"}</div>
                    <h3>{"Real Experience. Real Systems."}</h3>
                    <p>
                        {"This isn't just about clicking buttons. It's about a year and a half of solving complex technical hurdles for businesses that depend on their CRM to survive."}
                    </p>
                </div>
                <div class="stat-grid">
                    { for EXPERIENCE_STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                            { for stat.sub.map(|sub| html! { <div class="stat-sub">{ sub }</div> }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
