use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::reveal::counter::{CounterRun, CounterSpec};
use crate::reveal::driver::{paint, CounterDriver, DisplayTarget};
use crate::reveal::stagger::Stagger;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub spec: CounterSpec,
    /// Flips to true once, when the surrounding group is revealed. True at
    /// mount means the group was revealed on an earlier visit and the
    /// counter shows its final value straight away.
    pub active: bool,
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub stagger: Stagger,
    #[prop_or_default]
    pub class: Classes,
}

fn initial_run(spec: CounterSpec, revealed_earlier: bool) -> CounterRun {
    let mut run = CounterRun::new(spec);
    if revealed_earlier {
        run.settle();
    }
    run
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let display = use_node_ref();
    let run = {
        let spec = props.stagger.stretch(&props.spec, props.index);
        let revealed_earlier = props.active;
        use_memo(move |_| RefCell::new(initial_run(spec, revealed_earlier)), ())
    };

    // Idle text goes in once the span exists
    {
        let target = DisplayTarget::new(display.clone());
        let run = Rc::clone(&run);
        use_effect_with_deps(
            move |_| {
                paint(&target, &run.borrow().display());
                || ()
            },
            (),
        );
    }

    {
        let target = DisplayTarget::new(display.clone());
        let run = Rc::clone(&run);
        let delay_ms = props.stagger.delay_for(props.index);
        use_effect_with_deps(
            move |active| {
                let settled = run.borrow().is_settled();
                let driver =
                    (*active && !settled).then(|| CounterDriver::launch(run, target, delay_ms));
                move || drop(driver)
            },
            props.active,
        );
    }

    html! {
        <span ref={display} class={props.class.clone()} aria-live="polite"></span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_group_starts_idle() {
        let run = initial_run(CounterSpec::new(10000.0).suffix("+"), false);
        assert!(!run.is_settled());
        assert_eq!(run.display(), "0+");
    }

    #[test]
    fn revisited_group_starts_settled_and_stays_put() {
        let mut run = initial_run(CounterSpec::new(10000.0).suffix("+"), true);
        assert!(run.is_settled());
        assert_eq!(run.display(), "10,000+");

        assert!(!run.begin());
        assert_eq!(run.display(), "10,000+");
    }
}
