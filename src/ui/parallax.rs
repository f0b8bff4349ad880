use leptos::html;
use leptos::prelude::*;

use crate::core::{Parallax, Progress, ScrollWindow};
use crate::ui::scroll::use_element_progress;

/// Full-viewport section that drifts down and fades out as it scrolls away.
#[component]
pub fn ParallaxSection(
    /// Background classes (gradient)
    background: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let progress = use_element_progress(node_ref, ScrollWindow::EXIT_THROUGH_TOP);

    let parallax = Parallax::new();
    let style = Memo::new(move |_| parallax.style_or_rest(progress.get().map(Progress::new)));

    view! {
        <section
            node_ref=node_ref
            class=format!("min-h-screen flex items-center justify-center {background}")
            style:transform=move || style.get().transform()
            style:opacity=move || style.get().opacity()
        >
            {children()}
        </section>
    }
}
