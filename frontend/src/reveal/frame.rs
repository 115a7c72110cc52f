use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::DomError;

/// What a frame callback wants next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

#[derive(Default)]
struct LoopState {
    pending: Cell<Option<i32>>,
    stopped: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let callback = self.callback.borrow();
        if let Some(callback) = callback.as_ref() {
            let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
            self.pending.set(Some(id));
        }
        Ok(())
    }
}

/// A `requestAnimationFrame` chain. Each callback receives the frame
/// timestamp in milliseconds. Dropping the loop cancels the pending frame
/// and releases the callback.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let state = Rc::new(LoopState::default());
        let weak = Rc::downgrade(&state);

        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if state.stopped.get() {
                return;
            }
            match on_frame(timestamp) {
                FrameControl::Continue => {
                    if let Err(err) = state.schedule() {
                        warn!("Frame loop stopped, could not request next frame: {}", err);
                        state.stopped.set(true);
                    }
                }
                FrameControl::Stop => state.stopped.set(true),
            }
        });

        *state.callback.borrow_mut() = Some(callback);
        state.schedule()?;
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        !self.state.stopped.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.stopped.set(true);
        if let Some(id) = self.state.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn wait_for(done: impl Fn() -> bool) {
        for _ in 0..100 {
            if done() {
                return;
            }
            TimeoutFuture::new(20).await;
        }
    }

    #[wasm_bindgen_test]
    async fn dropping_the_loop_stops_its_frames() {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&calls);
        let frames = FrameLoop::start(move |_| {
            seen.set(seen.get() + 1);
            FrameControl::Continue
        })
        .expect("frame loop starts");

        wait_for(|| calls.get() >= 1).await;
        assert!(calls.get() >= 1);
        drop(frames);

        let at_drop = calls.get();
        TimeoutFuture::new(200).await;
        assert_eq!(calls.get(), at_drop);
    }

    #[wasm_bindgen_test]
    async fn stop_ends_the_loop() {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&calls);
        let frames = FrameLoop::start(move |_| {
            seen.set(seen.get() + 1);
            FrameControl::Stop
        })
        .expect("frame loop starts");

        wait_for(|| calls.get() >= 1).await;
        TimeoutFuture::new(100).await;
        assert_eq!(calls.get(), 1);
        assert!(!frames.is_running());
    }
}
