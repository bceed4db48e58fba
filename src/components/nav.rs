use yew::prelude::*;

use crate::components::section_link::SectionLink;
use crate::config;
use crate::content::{SectionId, NAV_ITEMS, OBSERVED_SECTIONS};
use crate::hooks::{use_active_section, use_scroll_lock, use_scrolled};
use crate::scroll_lock::MENU_LOCK;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(config::SCROLLED_THRESHOLD);
    let active = use_active_section(&OBSERVED_SECTIONS);

    use_scroll_lock(*menu_open, MENU_LOCK);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Scrolling waits a frame so the menu lock is gone before it starts.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: SectionId| {
            menu_open.set(false);
        })
    };

    let solid = is_scrolled || *menu_open;

    html! {
        <nav class={classes!("top-nav", solid.then(|| "solid"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s ease-in-out;
                    }
                    .top-nav.solid {
                        padding: 0.9rem 0;
                        background: rgba(3, 7, 18, 0.98);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        position: relative;
                        z-index: 120;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                        position: relative;
                        z-index: 130;
                    }
                    .brand-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        background: #2563eb;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 800;
                        font-size: 1.25rem;
                        color: #fff;
                        transition: transform 0.3s;
                    }
                    .brand:hover .brand-mark {
                        transform: scale(1.1);
                    }
                    .brand-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        letter-spacing: -0.02em;
                    }
                    .brand-name em {
                        color: #3b82f6;
                    }
                    .nav-pills {
                        display: flex;
                        gap: 0.25rem;
                        align-items: center;
                        padding: 0.25rem;
                        border-radius: 9999px;
                        background: rgba(17, 24, 39, 0.4);
                        border: 1px solid rgba(31, 41, 55, 0.5);
                        font-size: 11px;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .nav-pill {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        color: #9ca3af;
                        text-decoration: none;
                        transition: all 0.5s;
                    }
                    .nav-pill:hover {
                        color: #e5e7eb;
                    }
                    .nav-pill.active {
                        color: #fff;
                        background: #2563eb;
                        box-shadow: 0 10px 15px rgba(37, 99, 235, 0.2);
                    }
                    .nav-divider {
                        width: 1px;
                        height: 1rem;
                        background: #1f2937;
                        margin: 0 0.5rem;
                    }
                    .nav-cta {
                        background: #fff;
                        color: #000;
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        font-weight: 900;
                        text-decoration: none;
                        transition: all 0.2s;
                    }
                    .nav-cta:hover {
                        background: #2563eb;
                        color: #fff;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.75rem;
                        padding: 0.5rem;
                        cursor: pointer;
                        position: relative;
                        z-index: 130;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-pills {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu {
                            display: flex;
                            flex-direction: column;
                            position: fixed;
                            inset: 0;
                            width: 100vw;
                            height: 100dvh;
                            background: #030712;
                            z-index: 110;
                            padding: 7rem 2rem 2.5rem;
                            overflow-y: auto;
                            opacity: 0;
                            transform: translateX(100%);
                            pointer-events: none;
                            transition: all 0.5s ease-in-out;
                        }
                        .mobile-menu.open {
                            opacity: 1;
                            transform: translateX(0);
                            pointer-events: auto;
                        }
                    }
                    .mobile-caption {
                        font-size: 10px;
                        font-weight: 700;
                        color: #3b82f6;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        margin-bottom: 2.5rem;
                        opacity: 0.6;
                    }
                    .mobile-links {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        flex-grow: 1;
                    }
                    .mobile-link {
                        font-size: 3rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        color: #1f2937;
                        text-decoration: none;
                        display: flex;
                        align-items: center;
                        gap: 1.25rem;
                        transition: all 0.3s;
                    }
                    .mobile-link.active {
                        color: #fff;
                        transform: translateX(0.5rem);
                    }
                    .mobile-link.active::before {
                        content: '';
                        width: 0.6rem;
                        height: 0.6rem;
                        border-radius: 50%;
                        background: #2563eb;
                        box-shadow: 0 0 20px #2563eb;
                    }
                    .mobile-footer {
                        margin-top: auto;
                        padding-top: 2.5rem;
                        border-top: 1px solid #111827;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .mobile-cta {
                        background: #2563eb;
                        color: #fff;
                        text-align: center;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .mobile-socials {
                        display: flex;
                        justify-content: center;
                        gap: 2.5rem;
                        opacity: 0.3;
                    }
                    .mobile-socials a {
                        color: #fff;
                        text-decoration: none;
                        font-weight: 700;
                    }
                "#}
            </style>
            <div class="nav-content">
                <SectionLink to={SectionId::Home} class={classes!("brand")} onnavigate={close_menu.clone()} defer={true}>
                    <div class="brand-mark">{"J"}</div>
                    <span class="brand-name">{"JUSTENE "}<em>{"AUTOMATION"}</em></span>
                </SectionLink>

                <div class="nav-pills">
                    { for NAV_ITEMS.iter().map(|&section| html! {
                        <SectionLink
                            to={section}
                            class={classes!("nav-pill", (active == section).then(|| "active"))}
                            onnavigate={close_menu.clone()}
                            defer={true}
                        >
                            { section.label() }
                        </SectionLink>
                    }) }
                    <div class="nav-divider"></div>
                    <SectionLink to={SectionId::Contact} class={classes!("nav-cta")} onnavigate={close_menu.clone()} defer={true}>
                        {"Discovery Call"}
                    </SectionLink>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle Menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <div class="mobile-caption">{"System Navigation"}</div>
                <div class="mobile-links">
                    { for NAV_ITEMS.iter().map(|&section| html! {
                        <SectionLink
                            to={section}
                            class={classes!("mobile-link", (active == section).then(|| "active"))}
                            onnavigate={close_menu.clone()}
                            defer={true}
                        >
                            { section.label() }
                        </SectionLink>
                    }) }
                </div>
                <div class="mobile-footer">
                    <SectionLink to={SectionId::Contact} class={classes!("mobile-cta")} onnavigate={close_menu.clone()} defer={true}>
                        {"Start Project Initialisation"}
                    </SectionLink>
                    <div class="mobile-socials">
                        <a href="#" aria-label="LinkedIn">{"in"}</a>
                        <a href="#" aria-label="Github">{"gh"}</a>
                        <a href={config::mailto()} aria-label="Email">{"✉"}</a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
