use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const LINK_BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md border font-medium \
    transition-colors h-11 px-8 text-lg bg-transparent border-gray-300 text-gray-100 hover:bg-gray-700";

/// Outlined call-to-action link with a trailing external-link icon.
///
/// Without `href` the link is an inert placeholder: it renders like any
/// other call to action but clicking it does nothing.
#[component]
pub fn LinkButton(
    /// Link destination
    href: Option<&'static str>,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    let inert = href.is_none();

    view! {
        <a
            href=href.unwrap_or("#")
            class=LINK_BUTTON_CLASS
            on:click=move |ev| {
                if inert {
                    ev.prevent_default();
                }
            }
        >
            {children()}
            <Icon name=icons::EXTERNAL_LINK class="ml-2 h-5 w-5" />
        </a>
    }
}
