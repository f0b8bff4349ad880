use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file under /icons, without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and spacing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const ARROW_DOWN: &str = "arrow-down";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const FILE_QUESTION: &str = "file-question";
}
