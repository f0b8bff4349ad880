use leptos::prelude::*;

use crate::core::SpringConfig;
use crate::ui::scroll::use_document_progress;
use crate::ui::spring::use_spring;

/// Reading-progress bar pinned to the top of the viewport.
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let progress = use_document_progress();
    let scale = use_spring(progress, SpringConfig::PROGRESS_BAR);

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-blue-500 origin-left z-50"
            style:transform=move || format!("scaleX({})", scale.get())
            aria-hidden="true"
        ></div>
    }
}
