//! Browser bindings for the progress sources
//!
//! Each hook creates a source from `core`, feeds it from window events or an
//! `IntersectionObserver`, and exposes its value as a signal. Everything is
//! torn down in `on_cleanup` when the owning component unmounts. On the
//! server the hooks return the rest value and attach nothing.

use leptos::html;
use leptos::prelude::*;

use crate::core::{ProgressSource, ScrollWindow};

#[cfg(not(feature = "ssr"))]
use crate::core::{
    ElementGeometry, ElementWindowSource, OneShotIntersectionSource, ScrollMetrics,
    WholeDocumentSource,
};
#[cfg(not(feature = "ssr"))]
use leptos::logging::warn;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Reasons a layout measurement could not be taken.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasureError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("window reported no usable viewport height")]
    NoViewport,

    #[error("window reported no scroll position")]
    NoScrollPosition,

    #[error("element is not attached to the document")]
    Detached,

    #[error("element has no height")]
    ZeroHeight,
}

#[cfg(not(feature = "ssr"))]
pub(crate) fn read_scroll_metrics() -> Result<ScrollMetrics, MeasureError> {
    let window = web_sys::window().ok_or(MeasureError::NoWindow)?;
    let scroll_y = window
        .scroll_y()
        .map_err(|_| MeasureError::NoScrollPosition)?;
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .ok_or(MeasureError::NoViewport)?;
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .ok_or(MeasureError::NoDocument)?;

    Ok(ScrollMetrics::new(scroll_y, viewport_height, document_height))
}

/// Layout position of `element` in document space.
///
/// Uses offset geometry rather than the bounding box so the element's own
/// parallax transform does not feed back into its measurement.
#[cfg(not(feature = "ssr"))]
pub(crate) fn measure_element(
    element: &web_sys::HtmlElement,
) -> Result<ElementGeometry, MeasureError> {
    if !element.is_connected() {
        return Err(MeasureError::Detached);
    }
    let height = element.offset_height() as f64;
    if height <= 0.0 {
        return Err(MeasureError::ZeroHeight);
    }

    let mut top = element.offset_top() as f64;
    let mut parent = element.offset_parent();
    while let Some(node) = parent {
        let Ok(node) = node.dyn_into::<web_sys::HtmlElement>() else {
            break;
        };
        top += node.offset_top() as f64;
        parent = node.offset_parent();
    }

    Ok(ElementGeometry::new(top, height))
}

/// Mirror a source into a signal for as long as the calling component lives.
fn bind_source<S: ProgressSource>(source: &S) -> ReadSignal<f64> {
    let (value, set_value) = signal(f64::from(source.current_value()));

    #[cfg(not(feature = "ssr"))]
    {
        use std::rc::Rc;

        let subscription =
            source.subscribe(Rc::new(move |progress: crate::core::Progress| {
                set_value.set(f64::from(progress))
            }));
        let subscription = StoredValue::new_local(Some(subscription));
        on_cleanup(move || {
            let _ = subscription.try_update_value(Option::take);
        });
    }
    #[cfg(feature = "ssr")]
    let _ = set_value;

    value
}

/// Page-wide scroll progress in `[0, 1]`.
pub fn use_document_progress() -> Signal<f64> {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{resize, scroll};

        let source = WholeDocumentSource::new();
        let progress = bind_source(&source);
        let source = StoredValue::new_local(source);

        let refresh = move || {
            source.try_with_value(|source| match read_scroll_metrics() {
                Ok(metrics) => source.update(&metrics),
                Err(err) => {
                    warn!("scroll progress unavailable: {err}");
                    source.clear();
                }
            });
        };

        // Layout is final once mounted; measure then and on every change.
        Effect::new(move |_| refresh());
        let on_scroll = window_event_listener(scroll, move |_| refresh());
        let on_resize = window_event_listener(resize, move |_| refresh());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });

        progress.into()
    }

    #[cfg(feature = "ssr")]
    {
        bind_source(&crate::core::WholeDocumentSource::new()).into()
    }
}

/// Local progress of a section through `window`.
///
/// `None` while the section cannot be measured, so callers can fall back to
/// their rest state.
pub fn use_element_progress(
    node_ref: NodeRef<html::Section>,
    window: ScrollWindow,
) -> Signal<Option<f64>> {
    let (progress, set_progress) = signal(None::<f64>);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{resize, scroll};

        let source = StoredValue::new_local(ElementWindowSource::new(window));

        let publish = move || {
            source.try_with_value(|source| {
                set_progress.set(
                    source
                        .is_measured()
                        .then(|| f64::from(source.current_value())),
                )
            });
        };

        let remeasure = move || {
            let geometry = node_ref
                .get_untracked()
                .ok_or(MeasureError::Detached)
                .and_then(|element| measure_element(&element));
            source.try_with_value(|source| match geometry {
                Ok(geometry) => source.update_layout(Some(geometry)),
                Err(err) => {
                    warn!("section not measurable, parallax at rest: {err}");
                    source.update_layout(None);
                }
            });
        };

        let rescroll = move || {
            if let Ok(metrics) = read_scroll_metrics() {
                source.try_with_value(|source| source.update_scroll(&metrics));
            }
        };

        Effect::new(move |_| {
            // Re-runs when the element mounts.
            if node_ref.get().is_some() {
                rescroll();
                remeasure();
                publish();
            }
        });
        let on_scroll = window_event_listener(scroll, move |_| {
            rescroll();
            publish();
        });
        let on_resize = window_event_listener(resize, move |_| {
            rescroll();
            remeasure();
            publish();
        });
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (node_ref, window, set_progress);

    progress.into()
}

/// One-shot viewport entry: false until the element first overlaps the
/// viewport, then true for the rest of its lifetime.
///
/// With `immediate`, the flag flips on the first frame after mount instead,
/// for content that is on screen at load.
pub fn use_in_view_once(node_ref: NodeRef<html::Div>, immediate: bool) -> Signal<bool> {
    #[cfg(not(feature = "ssr"))]
    {
        let source = OneShotIntersectionSource::new();
        let value = bind_source(&source);
        let source = StoredValue::new_local(source);

        if immediate {
            Effect::new(move |_| {
                request_animation_frame(move || {
                    source.try_with_value(|source| source.report(true));
                });
            });
        } else {
            observe_once(node_ref, source);
        }

        Signal::derive(move || value.get() >= 1.0)
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (node_ref, immediate);
        let value = bind_source(&crate::core::OneShotIntersectionSource::new());
        Signal::derive(move || value.get() >= 1.0)
    }
}

#[cfg(not(feature = "ssr"))]
type ObserverCallback =
    wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live observer; the callback must outlive it.
#[cfg(not(feature = "ssr"))]
struct Observer {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

#[cfg(not(feature = "ssr"))]
fn observe_once(
    node_ref: NodeRef<html::Div>,
    source: StoredValue<OneShotIntersectionSource, LocalStorage>,
) {
    let observer = StoredValue::new_local(None::<Observer>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        let armed = source.try_with_value(|s| s.is_armed()).unwrap_or(false);
        if !armed || observer.try_with_value(Option::is_some).unwrap_or(true) {
            return;
        }

        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, this: web_sys::IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .is_ok_and(|entry| entry.is_intersecting())
                });
                let flipped = source
                    .try_with_value(|source| source.report(intersecting))
                    .unwrap_or(false);
                if flipped {
                    this.disconnect();
                }
            },
        );

        match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(io) => {
                io.observe(&element);
                observer.set_value(Some(Observer {
                    observer: io,
                    _callback: callback,
                }));
            }
            Err(_) => {
                warn!("IntersectionObserver unavailable, revealing on scroll");
                observe_by_scroll(element.into(), source);
            }
        }
    });

    on_cleanup(move || {
        let _ = observer.try_update_value(|slot| {
            if let Some(slot) = slot.take() {
                slot.observer.disconnect();
            }
        });
    });
}

/// Fallback for hosts without `IntersectionObserver`: check overlap on scroll.
#[cfg(not(feature = "ssr"))]
fn observe_by_scroll(
    element: web_sys::HtmlElement,
    source: StoredValue<OneShotIntersectionSource, LocalStorage>,
) {
    use leptos::ev::scroll;

    let element = StoredValue::new_local(element);
    let check = move || {
        let intersecting = element
            .try_with_value(|element| {
                let geometry = measure_element(element).ok()?;
                let metrics = read_scroll_metrics().ok()?;
                Some(geometry.intersects_viewport(&metrics))
            })
            .flatten()
            .unwrap_or(false);
        source.try_with_value(|source| source.report(intersecting));
    };

    check();
    let handle = window_event_listener(scroll, move |_| {
        if source.try_with_value(|s| s.is_armed()).unwrap_or(false) {
            check();
        }
    });
    on_cleanup(move || handle.remove());
}
