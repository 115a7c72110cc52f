use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::error::DomError;

/// Counter groups already revealed during this page visit. Provided as
/// context by the app shell so a section that remounts after navigation shows
/// its final values instead of replaying.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    fired: RefCell<HashSet<&'static str>>,
}

impl RevealRegistry {
    /// True only for the first call with `group`.
    pub fn fire(&self, group: &'static str) -> bool {
        self.fired.borrow_mut().insert(group)
    }

    pub fn has_fired(&self, group: &'static str) -> bool {
        self.fired.borrow().contains(group)
    }
}

// Context consumers only care which registry they hold.
impl PartialEq for RevealRegistry {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin: "0px",
        }
    }
}

impl RevealOptions {
    pub fn at(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    pub fn with_root_margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }
}

// Browsers report ratios like 0.2999 for a 0.3 threshold crossing.
const RATIO_SLACK: f64 = 1e-3;

pub fn crossed_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_SLACK >= threshold
}

/// An `IntersectionObserver` watching one element until it first crosses the
/// threshold. Disconnects itself after firing and on drop.
pub struct RevealWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealWatch {
    pub fn observe<F>(
        target: &NodeRef,
        options: &RevealOptions,
        on_reveal: F,
    ) -> Result<Self, DomError>
    where
        F: Fn() + 'static,
    {
        let element = target.cast::<Element>().ok_or(DomError::Unmounted)?;
        Self::observe_element(&element, options, on_reveal)
    }

    pub fn observe_element<F>(
        element: &Element,
        options: &RevealOptions,
        on_reveal: F,
    ) -> Result<Self, DomError>
    where
        F: Fn() + 'static,
    {
        let threshold = options.threshold.clamp(0.0, 1.0);

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let crossed = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| {
                        crossed_threshold(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            threshold,
                        )
                    });
                if crossed {
                    observer.disconnect();
                    on_reveal();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Becomes `true` the first time `target` is visible past the threshold and
/// stays `true` for the rest of the page visit. A `group` revealed before,
/// by an earlier mount of the same section, starts out `true` without
/// observing anything.
#[hook]
pub fn use_reveal(group: &'static str, target: NodeRef, options: RevealOptions) -> bool {
    let shared = use_context::<Rc<RevealRegistry>>();
    let local = use_memo(|_| RevealRegistry::default(), ());
    let registry = shared.unwrap_or(local);
    let revealed = use_state_eq(|| registry.has_fired(group));

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(target, options)| {
                let watch = if registry.has_fired(group) {
                    None
                } else {
                    let on_reveal = move || {
                        if registry.fire(group) {
                            debug!("Reveal fired for {}", group);
                            revealed.set(true);
                        }
                    };
                    match RevealWatch::observe(target, options, on_reveal) {
                        Ok(watch) => Some(watch),
                        Err(err) => {
                            warn!("Reveal trigger unavailable, keeping idle display: {}", err);
                            None
                        }
                    }
                };
                move || drop(watch)
            },
            (target, options),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_group_fires_once() {
        let registry = RevealRegistry::default();
        assert!(!registry.has_fired("stats"));
        assert!(registry.fire("stats"));
        assert!(!registry.fire("stats"));
        assert!(registry.has_fired("stats"));

        assert!(!registry.has_fired("hero"));
        assert!(registry.fire("hero"));
    }

    #[test]
    fn remounted_group_stays_revealed() {
        let registry = Rc::new(RevealRegistry::default());
        let first_mount = Rc::clone(&registry);
        assert!(first_mount.fire("stats"));
        drop(first_mount);

        let second_mount = Rc::clone(&registry);
        assert!(second_mount.has_fired("stats"));
        assert!(!second_mount.fire("stats"));
    }

    #[test]
    fn registries_compare_by_identity() {
        let registry = Rc::new(RevealRegistry::default());
        assert!(registry == Rc::clone(&registry));
        assert!(registry != Rc::new(RevealRegistry::default()));
    }

    #[test]
    fn threshold_needs_intersection_and_ratio() {
        assert!(!crossed_threshold(false, 1.0, 0.3));
        assert!(!crossed_threshold(true, 0.05, 0.3));
        assert!(crossed_threshold(true, 0.2995, 0.3));
        assert!(crossed_threshold(true, 0.8, 0.5));
        assert!(crossed_threshold(true, 0.0, 0.0));
    }

    #[test]
    fn options_clamp_threshold() {
        assert_eq!(RevealOptions::at(1.7).threshold, 1.0);
        assert_eq!(RevealOptions::at(-0.2).threshold, 0.0);
        let options = RevealOptions::at(0.3).with_root_margin("0px 0px -50px 0px");
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const ON_SCREEN: &str = "position: fixed; top: 0; left: 0; width: 20px; height: 20px;";
    const OFF_SCREEN: &str = "position: fixed; top: -500px; left: 0; width: 20px; height: 20px;";

    fn pinned_box(style: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let element = document.create_element("div").expect("div");
        element.set_attribute("style", style).expect("style");
        document
            .body()
            .expect("body")
            .append_child(&element)
            .expect("append");
        element
    }

    fn counting() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let fired = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&fired);
        (fired, move || seen.set(seen.get() + 1))
    }

    #[wasm_bindgen_test]
    async fn fires_once_then_detaches() {
        let element = pinned_box(ON_SCREEN);
        let (fired, on_reveal) = counting();
        let _watch = RevealWatch::observe_element(&element, &RevealOptions::at(0.0), on_reveal)
            .expect("observer");

        for _ in 0..50 {
            if fired.get() > 0 {
                break;
            }
            TimeoutFuture::new(20).await;
        }
        assert_eq!(fired.get(), 1);

        for style in [OFF_SCREEN, ON_SCREEN, OFF_SCREEN, ON_SCREEN] {
            element.set_attribute("style", style).expect("style");
            TimeoutFuture::new(100).await;
        }
        assert_eq!(fired.get(), 1);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_watch_never_fires() {
        let element = pinned_box(OFF_SCREEN);
        let (fired, on_reveal) = counting();
        let watch = RevealWatch::observe_element(&element, &RevealOptions::at(0.0), on_reveal)
            .expect("observer");
        drop(watch);

        element.set_attribute("style", ON_SCREEN).expect("style");
        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 0);
        element.remove();
    }
}
