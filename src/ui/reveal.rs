//! Reveal-on-view wrappers
//!
//! [`Reveal`] renders its children at the entrance's entry pose and
//! transitions them to the settled pose the first time they scroll into
//! view. The animated title, description and button stagger their delays
//! so a section reads top to bottom.

use leptos::html;
use leptos::prelude::*;

use crate::core::Entrance;
use crate::ui::common::LinkButton;
use crate::ui::scroll::use_in_view_once;

#[component]
pub fn Reveal(
    entrance: Entrance,
    /// Animate on mount instead of on first intersection
    #[prop(default = false)]
    immediate: bool,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let entered = use_in_view_once(node_ref, immediate);
    let pose = move || entrance.pose(entered.get());

    view! {
        <div
            node_ref=node_ref
            class=class
            style:opacity=move || pose().opacity()
            style:transform=move || pose().transform()
            style:transition=entrance.transition()
        >
            {children()}
        </div>
    }
}

#[component]
pub fn AnimatedTitle(text: &'static str) -> impl IntoView {
    view! {
        <Reveal entrance=Entrance::TITLE>
            <h2 class="text-4xl md:text-6xl font-bold mb-6 text-center text-gray-100">{text}</h2>
        </Reveal>
    }
}

#[component]
pub fn AnimatedDescription(text: &'static str) -> impl IntoView {
    view! {
        <Reveal entrance=Entrance::DESCRIPTION>
            <p class="text-xl mb-8 text-center max-w-2xl mx-auto text-gray-300">{text}</p>
        </Reveal>
    }
}

#[component]
pub fn AnimatedButton(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <Reveal entrance=Entrance::BUTTON>
            <LinkButton href=Some(href)>{label}</LinkButton>
        </Reveal>
    }
}
