use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::SectionId;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub to: SectionId,
    #[prop_or_default]
    pub class: Classes,
    /// Runs before scrolling starts, e.g. to dismiss an overlay.
    #[prop_or_default]
    pub onnavigate: Option<Callback<SectionId>>,
    /// Wait one animation frame before scrolling.
    #[prop_or_default]
    pub defer: bool,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that smooth-scrolls to its section instead of jumping.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let to = props.to;
        let defer = props.defer;
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Nav click to #{}", to.id());
            if let Some(onnavigate) = &onnavigate {
                onnavigate.emit(to);
            }
            if defer {
                dom::scroll_next_frame(to);
            } else {
                dom::scroll_now(to);
            }
        })
    };

    html! {
        <a href={props.to.href()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
