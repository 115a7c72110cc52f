use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Node;
use yew::NodeRef;

use super::counter::CounterRun;
use super::frame::{FrameControl, FrameLoop};
use crate::error::DomError;

/// Somewhere a counter paints its text.
pub trait CounterDisplay: Clone + 'static {
    fn write(&self, text: &str) -> Result<(), DomError>;
}

impl CounterDisplay for Node {
    fn write(&self, text: &str) -> Result<(), DomError> {
        self.set_text_content(Some(text));
        Ok(())
    }
}

/// The one rendered element a counter component is allowed to write to.
#[derive(Clone, PartialEq)]
pub struct DisplayTarget(NodeRef);

impl DisplayTarget {
    pub fn new(node: NodeRef) -> Self {
        Self(node)
    }
}

impl CounterDisplay for DisplayTarget {
    fn write(&self, text: &str) -> Result<(), DomError> {
        self.0.cast::<Node>().ok_or(DomError::Unmounted)?.write(text)
    }
}

/// Runs one counter: waits out its stagger delay, then advances it every
/// frame until it settles. Dropping the driver cancels whichever of the two
/// is still pending.
pub struct CounterDriver {
    _delay: Timeout,
    frames: Rc<RefCell<Option<FrameLoop>>>,
}

impl CounterDriver {
    pub fn launch<D>(run: Rc<RefCell<CounterRun>>, target: D, delay_ms: u32) -> Self
    where
        D: CounterDisplay,
    {
        let frames = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&frames);

        let delay = Timeout::new(delay_ms, move || {
            if !run.borrow_mut().begin() {
                return;
            }
            if run.borrow().is_settled() {
                paint(&target, &run.borrow().display());
                return;
            }

            let frame_run = Rc::clone(&run);
            let frame_target = target.clone();
            let started = FrameLoop::start(move |now| {
                let mut run = frame_run.borrow_mut();
                let control = run.advance(now);
                if let Err(err) = frame_target.write(&run.display()) {
                    debug!("Counter display gone, stopping: {}", err);
                    return FrameControl::Stop;
                }
                if control == FrameControl::Stop {
                    debug!("Counter settled at {}", run.display());
                }
                control
            });

            match started {
                Ok(frames) => *slot.borrow_mut() = Some(frames),
                Err(err) => {
                    warn!("No animation frames, showing final value: {}", err);
                    run.borrow_mut().settle();
                    paint(&target, &run.borrow().display());
                }
            }
        });

        Self {
            _delay: delay,
            frames,
        }
    }
}

impl Drop for CounterDriver {
    fn drop(&mut self) {
        self.frames.borrow_mut().take();
    }
}

pub fn paint<D: CounterDisplay>(target: &D, text: &str) {
    if let Err(err) = target.write(text) {
        debug!("Skipping counter paint: {}", err);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use crate::reveal::counter::CounterSpec;

    wasm_bindgen_test_configure!(run_in_browser);

    fn display_span() -> Node {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let span: Node = document.create_element("span").expect("span").into();
        span.set_text_content(Some("idle"));
        span
    }

    fn percent_run() -> Rc<RefCell<CounterRun>> {
        let spec = CounterSpec::new(98.0).lasting(50.0).suffix("%");
        Rc::new(RefCell::new(CounterRun::new(spec)))
    }

    #[wasm_bindgen_test]
    async fn dropped_before_its_delay_never_writes() {
        let span = display_span();
        let run = percent_run();

        let driver = CounterDriver::launch(Rc::clone(&run), span.clone(), 50);
        drop(driver);
        TimeoutFuture::new(200).await;

        assert_eq!(span.text_content().as_deref(), Some("idle"));
        assert!(!run.borrow().is_settled());
        assert_eq!(run.borrow().value(), 0.0);
    }

    #[wasm_bindgen_test]
    async fn settled_counter_is_not_replayed() {
        let span = display_span();
        let run = percent_run();

        let _first = CounterDriver::launch(Rc::clone(&run), span.clone(), 0);
        for _ in 0..100 {
            if run.borrow().is_settled() {
                break;
            }
            TimeoutFuture::new(20).await;
        }
        assert!(run.borrow().is_settled());
        assert_eq!(span.text_content().as_deref(), Some("98%"));

        assert!(!run.borrow_mut().begin());
        let _second = CounterDriver::launch(Rc::clone(&run), span.clone(), 0);
        TimeoutFuture::new(150).await;
        assert_eq!(span.text_content().as_deref(), Some("98%"));
    }
}
