//! Eased number counter.
//!
//! A [`CounterRun`] moves through `Idle -> Animating -> Settled` exactly once.
//! It knows nothing about the DOM: the caller feeds it frame timestamps in
//! milliseconds and paints whatever [`CounterRun::display`] returns.

use super::frame::FrameControl;

pub const DEFAULT_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub start: f64,
    pub target: f64,
    pub duration_ms: f64,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(target: f64) -> Self {
        Self {
            start: 0.0,
            target,
            duration_ms: DEFAULT_DURATION_MS,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn starting_at(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn lasting(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Nothing to animate: completes straight to the target.
    pub fn is_degenerate(&self) -> bool {
        !(self.duration_ms > 0.0) || self.target == self.start
    }

    pub fn render(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, group_thousands(value), self.suffix)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Animating { started_at: Option<f64> },
    Settled,
}

#[derive(Clone, Debug)]
pub struct CounterRun {
    spec: CounterSpec,
    phase: Phase,
    current: f64,
}

impl CounterRun {
    pub fn new(spec: CounterSpec) -> Self {
        let current = spec.start;
        Self {
            spec,
            phase: Phase::Idle,
            current,
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    pub fn display(&self) -> String {
        self.spec.render(self.current)
    }

    /// Leaves `Idle`. The clock starts on the first frame handed to
    /// [`advance`](Self::advance). Returns false if the run already left
    /// `Idle`, in which case nothing changes.
    pub fn begin(&mut self) -> bool {
        self.enter(None)
    }

    /// Like [`begin`](Self::begin) with the clock pinned to `at`. Frames
    /// before `at` keep showing the start value.
    pub fn begin_at(&mut self, at: f64) -> bool {
        self.enter(Some(at))
    }

    fn enter(&mut self, started_at: Option<f64>) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        if self.spec.is_degenerate() {
            self.settle();
        } else {
            self.phase = Phase::Animating { started_at };
        }
        true
    }

    /// Jumps to the target. Used on completion and when no frames can be
    /// scheduled at all.
    pub fn settle(&mut self) {
        self.current = self.spec.target;
        self.phase = Phase::Settled;
    }

    pub fn advance(&mut self, now: f64) -> FrameControl {
        let started_at = match self.phase {
            Phase::Animating { started_at: Some(at) } => at,
            Phase::Animating { started_at: None } => {
                self.phase = Phase::Animating { started_at: Some(now) };
                now
            }
            Phase::Idle | Phase::Settled => return FrameControl::Stop,
        };

        let progress = progress(now - started_at, self.spec.duration_ms);
        if progress >= 1.0 {
            self.settle();
            return FrameControl::Stop;
        }

        let span = self.spec.target - self.spec.start;
        self.current = (ease_in_out_cubic(progress) * span + self.spec.start).floor();
        FrameControl::Continue
    }
}

/// Normalised elapsed time, clamped to `[0, 1]`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if !(duration_ms > 0.0) {
        return 1.0;
    }
    let raw = elapsed_ms / duration_ms;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

pub fn ease_in_out_cubic(progress: f64) -> f64 {
    if progress < 0.5 {
        4.0 * progress * progress * progress
    } else {
        1.0 - (-2.0 * progress + 2.0).powi(3) / 2.0
    }
}

/// en-US style grouping: `10000 -> "10,000"`, `5.2 -> "5.2"`. At most three
/// fraction digits, trailing zeros dropped.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc();
    let fraction = ((rounded - whole) * 1000.0).round() as u64;

    let digits = format!("{:.0}", whole);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if fraction > 0 {
        let fraction = format!("{:03}", fraction);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    if value < 0.0 && (whole > 0.0 || fraction > 0) {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_at(spec: CounterSpec, elapsed: f64) -> CounterRun {
        let mut run = CounterRun::new(spec);
        run.begin_at(0.0);
        run.advance(elapsed);
        run
    }

    #[test]
    fn easing_hits_its_anchor_points() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-50.0, 1000.0), 0.0);
        assert_eq!(progress(500.0, 1000.0), 0.5);
        assert_eq!(progress(5000.0, 1000.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
        assert_eq!(progress(10.0, -3.0), 1.0);
    }

    #[test]
    fn grouping_matches_en_us() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(98.0), "98");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(10000.0), "10,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(5.2), "5.2");
        assert_eq!(group_thousands(12540.125), "12,540.125");
        assert_eq!(group_thousands(-4321.0), "-4,321");
        assert_eq!(group_thousands(-0.0), "0");
    }

    #[test]
    fn idle_shows_start_value() {
        let run = CounterRun::new(CounterSpec::new(10000.0).suffix("+"));
        assert_eq!(run.phase(), Phase::Idle);
        assert_eq!(run.display(), "0+");
    }

    #[test]
    fn ten_thousand_plus_scenario() {
        let spec = CounterSpec::new(10000.0).lasting(2000.0).suffix("+");
        assert_eq!(run_at(spec.clone(), 0.0).display(), "0+");

        let done = run_at(spec, 2000.0);
        assert_eq!(done.display(), "10,000+");
        assert!(done.is_settled());
    }

    #[test]
    fn percentage_scenario_settles_exactly() {
        let mut run = CounterRun::new(CounterSpec::new(98.0).suffix("%"));
        run.begin();
        let mut now = 0.0;
        while run.advance(now) == FrameControl::Continue {
            now += 16.7;
        }
        assert_eq!(run.display(), "98%");
    }

    #[test]
    fn fractional_target_is_exact_at_the_end() {
        let spec = CounterSpec::new(5.2).suffix("s");
        assert_eq!(run_at(spec.clone(), 1000.0).display(), "2s");
        assert_eq!(run_at(spec, 2000.0).display(), "5.2s");
    }

    #[test]
    fn prefix_is_kept_throughout() {
        let spec = CounterSpec::new(24.0).prefix("~");
        assert_eq!(CounterRun::new(spec.clone()).display(), "~0");
        assert_eq!(run_at(spec, 2500.0).display(), "~24");
    }

    #[test]
    fn zero_duration_completes_without_frames() {
        let mut run = CounterRun::new(CounterSpec::new(500.0).lasting(0.0).suffix("+"));
        assert!(run.begin());
        assert!(run.is_settled());
        assert_eq!(run.display(), "500+");
        assert_eq!(run.advance(0.0), FrameControl::Stop);
    }

    #[test]
    fn equal_start_and_target_completes_immediately() {
        let mut run = CounterRun::new(CounterSpec::new(7.0).starting_at(7.0));
        run.begin();
        assert!(run.is_settled());
        assert_eq!(run.display(), "7");
    }

    #[test]
    fn displayed_value_never_decreases() {
        let spec = CounterSpec::new(10000.0).lasting(2000.0);
        let mut run = CounterRun::new(spec);
        run.begin_at(0.0);

        let mut last = f64::MIN;
        for step in 0..=200 {
            run.advance(step as f64 * 10.0);
            assert!(run.value() >= last, "dropped at step {}", step);
            last = run.value();
        }
        assert_eq!(last, 10000.0);
    }

    #[test]
    fn first_frame_starts_the_clock() {
        let mut run = CounterRun::new(CounterSpec::new(100.0).lasting(1000.0));
        run.begin();
        assert_eq!(run.advance(5000.0), FrameControl::Continue);
        assert_eq!(run.value(), 0.0);
        assert_eq!(run.phase(), Phase::Animating { started_at: Some(5000.0) });
        assert_eq!(run.advance(6000.0), FrameControl::Stop);
        assert_eq!(run.value(), 100.0);
    }

    #[test]
    fn second_trigger_does_not_restart() {
        let mut run = CounterRun::new(CounterSpec::new(98.0).suffix("%"));
        run.begin_at(0.0);
        run.advance(2000.0);
        assert!(run.is_settled());

        assert!(!run.begin());
        assert!(!run.begin_at(10_000.0));
        assert_eq!(run.advance(10_500.0), FrameControl::Stop);
        assert_eq!(run.display(), "98%");
    }

    #[test]
    fn frames_before_pinned_start_hold_the_start_value() {
        let mut run = CounterRun::new(CounterSpec::new(500.0));
        run.begin_at(900.0);
        assert_eq!(run.advance(300.0), FrameControl::Continue);
        assert_eq!(run.value(), 0.0);
    }

    #[test]
    fn idle_run_ignores_frames() {
        let mut run = CounterRun::new(CounterSpec::new(42.0));
        assert_eq!(run.advance(1000.0), FrameControl::Stop);
        assert_eq!(run.phase(), Phase::Idle);
    }
}
