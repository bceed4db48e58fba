use yew::prelude::*;

use crate::content::SectionId;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={SectionId::Home.id()} class="hero">
            <style>
                {r#"
                    .hero {
                        padding: 12rem 1.5rem 8rem;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .hero-badge {
                        display: inline-flex;
                        gap: 0.5rem;
                        padding: 0.4rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(59, 130, 246, 0.3);
                        background: rgba(59, 130, 246, 0.05);
                        color: #60a5fa;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }
                    .hero h1 {
                        font-size: 4.5rem;
                        font-weight: 800;
                        line-height: 1.05;
                        letter-spacing: -0.02em;
                        color: #fff;
                    }
                    .hero-lead {
                        font-size: 1.25rem;
                        color: #9ca3af;
                        max-width: 32rem;
                        line-height: 1.6;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        margin: 2rem 0;
                    }
                    .hero-certs {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        opacity: 0.5;
                        font-size: 11px;
                        font-family: monospace;
                        font-weight: 700;
                        color: #fff;
                    }
                    .hero-certs .label {
                        font-family: inherit;
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #6b7280;
                    }
                    .hero-certs img {
                        width: 1.25rem;
                        height: 1.25rem;
                        vertical-align: middle;
                        margin-right: 0.5rem;
                    }
                    .code-card {
                        padding: 2.5rem;
                        border-radius: 2.5rem;
                        border-color: rgba(59, 130, 246, 0.2);
                    }
                    .code-card-top {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 2rem;
                        font-family: monospace;
                        font-size: 10px;
                        color: #6b7280;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .dots span {
                        display: inline-block;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        margin-right: 0.5rem;
                    }
                    .code-lines {
                        font-family: monospace;
                        font-size: 14px;
                        line-height: 1.8;
                        color: #fff;
                    }
                    .code-lines .no {
                        color: #374151;
                        margin-right: 1rem;
                        user-select: none;
                    }
                    .code-lines .kw { color: #c084fc; }
                    .code-lines .str { color: #4ade80; }
                    .code-lines .lit { color: #93c5fd; }
                    .code-lines .dim { color: #d1d5db; }
                    .code-lines .call { color: #60a5fa; }
                    .code-lines .indent { margin-left: 2rem; }
                    @media (max-width: 768px) {
                        .hero {
                            padding: 8rem 1rem 4rem;
                            text-align: center;
                        }
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero h1 {
                            font-size: 2.5rem;
                        }
                        .hero-actions {
                            flex-direction: column;
                        }
                        .hero-certs {
                            justify-content: center;
                        }
                    }
                "#}
            </style>
            <div class="hero-grid">
                <div>
                    <div class="hero-badge">{"⚡ High-Performance GHL Systems"}</div>
                    <h1>
                        {"Stop Chasing Leads."}<br />
                        <span class="gradient-text">{"Start Automating Growth."}</span>
                    </h1>
                    <p class="hero-lead">
                        {"I build scalable CRM infrastructures for international clients. Convert traffic to profit with behavior-based automation and high-conversion funnels."}
                    </p>
                    <div class="hero-actions">
                        <a href={SectionId::Contact.href()} class="primary-cta">{"Book Discovery Call →"}</a>
                        <a href={SectionId::Portfolio.href()} class="secondary-cta">{"View My Work"}</a>
                    </div>
                    <div class="hero-certs">
                        <span class="label">{"Certified In:"}</span>
                        <span><img src="https://gohighlevel.com/favicon.ico" alt="GHL" />{"GoHighLevel"}</span>
                        <span>{"⚡ Zapier Expert"}</span>
                    </div>
                </div>
                <div class="glass-card code-card">
                    <div class="code-card-top">
                        <div class="dots">
                            <span style="background: rgba(239, 68, 68, 0.4);"></span>
                            <span style="background: rgba(234, 179, 8, 0.4);"></span>
                            <span style="background: rgba(34, 197, 94, 0.4);"></span>
                        </div>
                        <span>{"automation_engine.config"}</span>
                    </div>
                    <div class="code-lines">
                        <div class="call">{"# JUSTENE_SYSTEM_INIT"}</div>
                        <div><span class="no">{"01"}</span><span class="kw">{"const"}</span>{" specialist = "}<span class="str">{"\"CRM Architect\""}</span>{";"}</div>
                        <div><span class="no">{"02"}</span><span class="kw">{"const"}</span>{" objective = "}<span class="str">{"\"Convert traffic to profit\""}</span>{";"}</div>
                        <div><span class="no">{"03"}</span><span class="kw">{"const"}</span>{" techStack = ["}<span class="lit">{"\"GHL\""}</span>{", "}<span class="lit">{"\"Zapier\""}</span>{"];"}</div>
                        <div><span class="no">{"04"}</span><span class="kw">{"function"}</span>{" scaleClientBusiness() {"}</div>
                        <div><span class="no">{"05"}</span><span class="indent dim">{"mapClientJourney();"}</span></div>
                        <div><span class="no">{"06"}</span><span class="indent call">{"deployAutomatedNurture();"}</span></div>
                        <div><span class="no">{"07"}</span>{"}"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
