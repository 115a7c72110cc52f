use std::cell::Cell;

use log::warn;

use crate::error::DomError;

fn set_body_overflow(value: &str) -> Result<(), DomError> {
    let document = web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)?;
    let body = document.body().ok_or(DomError::Unmounted)?;
    body.style().set_property("overflow", value)?;
    Ok(())
}

fn apply_body_overflow(value: &str) {
    if let Err(err) = set_body_overflow(value) {
        warn!("Could not set body overflow to {}: {}", value, err);
    }
}

/// Number of open overlays holding the body still.
#[derive(Debug, Default)]
struct LockCount(Cell<u32>);

impl LockCount {
    /// True when this is the first holder.
    fn acquire(&self) -> bool {
        let held = self.0.get();
        self.0.set(held + 1);
        held == 0
    }

    /// True when the last holder let go.
    fn release(&self) -> bool {
        match self.0.get() {
            0 => false,
            held => {
                self.0.set(held - 1);
                held == 1
            }
        }
    }
}

thread_local! {
    static SCROLL_LOCKS: LockCount = LockCount::default();
}

/// Stops the page behind an open menu or modal from scrolling. The body
/// scrolls again once every lock has been dropped.
pub struct BodyScrollLock {
    _private: (),
}

impl BodyScrollLock {
    pub fn acquire() -> Self {
        if SCROLL_LOCKS.with(LockCount::acquire) {
            apply_body_overflow("hidden");
        }
        Self { _private: () }
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        if SCROLL_LOCKS.with(LockCount::release) {
            apply_body_overflow("unset");
        }
    }
}

/// Random number in `[0, 1)` from the host.
pub fn random() -> f64 {
    js_sys::Math::random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_unlocks_only_after_the_last_holder() {
        let locks = LockCount::default();
        assert!(locks.acquire());
        assert!(!locks.acquire());

        assert!(!locks.release());
        assert!(locks.release());
    }

    #[test]
    fn extra_release_is_ignored() {
        let locks = LockCount::default();
        assert!(!locks.release());
        assert!(locks.acquire());
        assert!(locks.release());
        assert!(!locks.release());
    }
}
