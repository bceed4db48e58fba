use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod hooks;
mod scroll_lock;
mod verification;

mod components {
    pub mod nav;
    pub mod project_modal;
    pub mod section_link;
    pub mod whatsapp_button;
}
mod sections {
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod offers;
    pub mod portfolio;
    pub mod profile;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}
