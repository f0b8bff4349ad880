//! Frame loop driving a [`Spring`] toward a reactive target.

use leptos::prelude::*;

use crate::core::SpringConfig;
#[cfg(not(feature = "ssr"))]
use crate::core::{Spring, SpringAnimation};

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(not(feature = "ssr"))]
struct FrameLoop {
    animation: SpringAnimation,
    pending: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

#[cfg(not(feature = "ssr"))]
impl FrameLoop {
    fn tick(&mut self, timestamp: f64) -> (f64, bool) {
        self.pending = None;
        let moving = self.animation.tick(timestamp);
        (self.animation.spring().position(), moving)
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let (Some(window), Some(callback)) = (leptos::web_sys::window(), self.callback.as_ref())
        else {
            return;
        };
        self.pending = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok();
    }

    fn stop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), leptos::web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback = None;
    }
}

/// Smooth `target` with a spring, one integration step per animation frame.
///
/// The loop only runs while the spring is moving and is cancelled when the
/// calling component unmounts. On the server the target passes through.
pub fn use_spring(target: Signal<f64>, config: SpringConfig) -> Signal<f64> {
    let (position, set_position) = signal(target.get_untracked());

    #[cfg(not(feature = "ssr"))]
    {
        let frames = StoredValue::new_local(FrameLoop {
            animation: SpringAnimation::new(Spring::new(target.get_untracked(), config)),
            pending: None,
            callback: None,
        });

        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some((value, moving)) = frames.try_update_value(|frames| frames.tick(timestamp))
            else {
                return;
            };
            set_position.set(value);
            if moving {
                frames.try_update_value(FrameLoop::schedule);
            }
        });
        frames.update_value(|frames| frames.callback = Some(callback));

        Effect::new(move |_| {
            let target = target.get();
            frames.try_update_value(|frames| {
                if frames.animation.retarget(target) {
                    frames.schedule();
                }
            });
        });

        on_cleanup(move || {
            frames.try_update_value(FrameLoop::stop);
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (set_position, config);

    position.into()
}
