//! Applies the landing page's body style override while a component is mounted.

#[cfg(not(feature = "ssr"))]
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::{PageStyleGuard, StyleStack, StyleTarget};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Inline style of `document.body`.
#[cfg(not(feature = "ssr"))]
pub struct BodyStyle(web_sys::CssStyleDeclaration);

#[cfg(not(feature = "ssr"))]
impl BodyStyle {
    pub fn current() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self(body.style()))
    }
}

#[cfg(not(feature = "ssr"))]
impl StyleTarget for BodyStyle {
    fn property(&self, name: &str) -> String {
        self.0.get_property_value(name).unwrap_or_default()
    }

    fn set_property(&mut self, name: &str, value: &str) {
        let _ = self.0.set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        let _ = self.0.remove_property(name);
    }
}

#[cfg(not(feature = "ssr"))]
thread_local! {
    /// Overrides on `document.body`, shared by every mounted page.
    static BODY_STACK: std::cell::RefCell<Option<StyleStack<BodyStyle>>> =
        const { std::cell::RefCell::new(None) };
}

#[cfg(not(feature = "ssr"))]
fn body_stack() -> Option<StyleStack<BodyStyle>> {
    BODY_STACK.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = BodyStyle::current().map(StyleStack::new);
        }
        slot.clone()
    })
}

/// Hide horizontal overflow and darken the page body until unmount.
pub fn use_page_style_override() {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::warn;

        let guard = StoredValue::new_local(None::<PageStyleGuard<BodyStyle>>);

        Effect::new(move |_| match body_stack() {
            Some(stack) => {
                guard.try_update_value(|slot| {
                    slot.get_or_insert_with(|| stack.landing());
                });
            }
            None => warn!("document body unavailable, page style left unchanged"),
        });

        on_cleanup(move || {
            let _ = guard.try_update_value(Option::take);
        });
    }
}
