use super::counter::CounterSpec;

/// Cascading offsets for a group of counters revealed together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_step_ms: u32,
    pub duration_step_ms: u32,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            delay_step_ms: 300,
            duration_step_ms: 200,
        }
    }
}

impl Stagger {
    pub const NONE: Stagger = Stagger {
        delay_step_ms: 0,
        duration_step_ms: 0,
    };

    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_step_ms.saturating_mul(index as u32)
    }

    pub fn duration_for(&self, base_ms: f64, index: usize) -> f64 {
        base_ms + f64::from(self.duration_step_ms) * index as f64
    }

    /// The `CounterSpec` a counter at `index` actually runs with.
    pub fn stretch(&self, spec: &CounterSpec, index: usize) -> CounterSpec {
        spec.clone().lasting(self.duration_for(spec.duration_ms, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::counter::CounterRun;

    fn group(stagger: Stagger, trigger_at: f64) -> Vec<CounterRun> {
        [10000.0, 98.0, 500.0, 24.0]
            .iter()
            .enumerate()
            .map(|(index, target)| {
                let mut run = CounterRun::new(stagger.stretch(&CounterSpec::new(*target), index));
                run.begin_at(trigger_at + f64::from(stagger.delay_for(index)));
                run
            })
            .collect()
    }

    #[test]
    fn default_steps() {
        let stagger = Stagger::default();
        assert_eq!(stagger.delay_for(0), 0);
        assert_eq!(stagger.delay_for(3), 900);
        assert_eq!(stagger.duration_for(2000.0, 0), 2000.0);
        assert_eq!(stagger.duration_for(2000.0, 3), 2600.0);
    }

    #[test]
    fn last_counter_waits_for_its_slot() {
        let mut runs = group(Stagger::default(), 1000.0);

        for now in [1000.0, 1300.0, 1600.0, 1899.0] {
            runs[3].advance(now);
            assert_eq!(runs[3].value(), 0.0, "index 3 moved at {}", now);
        }

        runs[0].advance(1899.0);
        assert!(runs[0].value() > 0.0);

        runs[3].advance(3000.0);
        assert!(runs[3].value() > 0.0);
    }

    #[test]
    fn every_counter_settles_on_its_own_schedule() {
        let mut runs = group(Stagger::default(), 0.0);

        // index 3 starts at 900 and lasts 2600
        for run in runs.iter_mut().take(3) {
            run.advance(3000.0);
            assert!(run.is_settled());
        }
        runs[3].advance(3499.0);
        assert!(!runs[3].is_settled());
        runs[3].advance(3500.0);
        assert!(runs[3].is_settled());
        assert_eq!(runs[3].display(), "24");
    }

    #[test]
    fn siblings_do_not_share_progress() {
        let mut runs = group(Stagger::default(), 0.0);
        runs[1].advance(1000.0);
        assert_eq!(runs[0].value(), 0.0);
        assert!(runs[1].value() > 0.0);
    }

    #[test]
    fn no_stagger_keeps_spec_untouched() {
        let spec = CounterSpec::new(10.0).lasting(750.0);
        assert_eq!(Stagger::NONE.stretch(&spec, 5), spec);
        assert_eq!(Stagger::NONE.delay_for(5), 0);
    }
}
