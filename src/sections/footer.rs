use chrono::Datelike;
use yew::prelude::*;

use crate::components::section_link::SectionLink;
use crate::config;
use crate::content::{SectionId, NAV_ITEMS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 5rem 1.5rem;
                        border-top: 1px solid #111827;
                        background: #000;
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .footer-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2.5rem;
                    }
                    .footer-row + .footer-row {
                        margin-top: 4rem;
                        padding-top: 3rem;
                        border-top: 1px solid #111827;
                    }
                    .footer-links {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 2.5rem;
                        font-size: 0.75rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }
                    .footer-links a {
                        color: #6b7280;
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: #fff;
                    }
                    .footer-links a.work-with-me {
                        color: #3b82f6;
                        text-decoration: underline;
                        text-underline-offset: 8px;
                    }
                    .copyright {
                        color: #4b5563;
                        font-size: 11px;
                        font-weight: 700;
                        line-height: 1.6;
                        max-width: 32rem;
                    }
                    .legal {
                        display: flex;
                        gap: 2rem;
                        font-size: 11px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .legal a {
                        color: #374151;
                        text-decoration: none;
                    }
                    .legal a:hover {
                        color: #d1d5db;
                    }
                    @media (max-width: 768px) {
                        .footer-row {
                            flex-direction: column;
                            text-align: center;
                        }
                        .footer-links {
                            justify-content: center;
                            gap: 1.5rem;
                        }
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-row">
                    <div class="brand">
                        <div class="brand-mark">{"J"}</div>
                        <span class="brand-name">{"JUSTENE "}<em>{"AUTOMATION"}</em></span>
                    </div>
                    <div class="footer-links">
                        { for NAV_ITEMS.iter().filter(|s| **s != SectionId::Contact).map(|&section| html! {
                            <SectionLink to={section}>{ section.label() }</SectionLink>
                        }) }
                        <SectionLink to={SectionId::Contact} class={classes!("work-with-me")}>
                            {"Work With Me"}
                        </SectionLink>
                    </div>
                </div>
                <div class="footer-row">
                    <div class="copyright">
                        { format!("© {} {}. Built for international high-ticket scale.", year, config::BRAND) }
                        <br />
                        {"Designed & Architected for CRM optimization and maximum yield."}
                    </div>
                    <div class="legal">
                        <a href="#">{"Privacy"}</a>
                        <a href="#">{"Terms"}</a>
                        <a href="#">{"Cookies"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
