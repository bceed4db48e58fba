use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::sections::{
    contact::{Contact, IdealClient},
    footer::Footer,
    hero::Hero,
    offers::{Expertise, Positioning, Services},
    portfolio::Portfolio,
    profile::{About, Experience},
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <Nav />
            <main>
                <Hero />
                <About />
                <Experience />
                <Expertise />
                <Services />
                <Positioning />
                <Portfolio />
                <IdealClient />
                <Contact />
            </main>
            <Footer />
            <WhatsAppButton />
        </div>
    }
}
