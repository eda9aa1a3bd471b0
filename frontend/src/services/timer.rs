//! Banner auto-reset timer.
//!
//! [`BannerTimer`] holds at most one pending reset. Scheduling a new one,
//! calling [`BannerTimer::cancel`], or dropping the timer drops the
//! previous handle, and dropping a handle cancels its callback.

use gloo_timers::callback::Timeout;

use crate::config::BANNER_RESET_MS;

/// Source of cancel-on-drop deferred callbacks.
pub trait Scheduler {
    type Handle;

    /// Run `callback` once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` through `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

pub struct BannerTimer<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> BannerTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Schedule `reset` after [`BANNER_RESET_MS`], replacing any pending one.
    pub fn schedule(&mut self, reset: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(BANNER_RESET_MS, Box::new(reset)));
    }

    /// Drop the pending reset, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for BannerTimer<BrowserScheduler> {
    fn default() -> Self {
        Self::new(BrowserScheduler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::LeadForm;
    use crate::types::{FormField, SubmissionState};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records scheduled delays and handle drops; callbacks are fired by hand.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        delays: Rc<RefCell<Vec<u32>>>,
        dropped: Rc<RefCell<Vec<usize>>>,
        callbacks: Rc<RefCell<Vec<Option<Box<dyn FnOnce()>>>>>,
    }

    struct ManualHandle {
        id: usize,
        dropped: Rc<RefCell<Vec<usize>>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.id);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            self.delays.borrow_mut().push(delay_ms);
            let mut callbacks = self.callbacks.borrow_mut();
            callbacks.push(Some(callback));
            ManualHandle {
                id: callbacks.len() - 1,
                dropped: Rc::clone(&self.dropped),
            }
        }
    }

    impl ManualScheduler {
        fn fire(&self, id: usize) {
            let callback = self.callbacks.borrow_mut()[id].take();
            if let Some(callback) = callback {
                callback();
            }
        }
    }

    #[test]
    fn test_reset_scheduled_after_five_seconds() {
        let scheduler = ManualScheduler::default();
        let mut timer = BannerTimer::new(scheduler.clone());

        timer.schedule(|| {});

        assert_eq!(*scheduler.delays.borrow(), [5_000]);
        assert!(timer.is_pending());
    }

    #[test]
    fn test_rescheduling_cancels_previous_reset() {
        let scheduler = ManualScheduler::default();
        let mut timer = BannerTimer::new(scheduler.clone());

        timer.schedule(|| {});
        timer.schedule(|| {});

        assert_eq!(*scheduler.dropped.borrow(), [0]);
        assert!(timer.is_pending());
    }

    #[test]
    fn test_cancel_and_teardown_drop_pending_reset() {
        let scheduler = ManualScheduler::default();
        let mut timer = BannerTimer::new(scheduler.clone());

        timer.schedule(|| {});
        timer.cancel();
        assert!(!timer.is_pending());
        assert_eq!(*scheduler.dropped.borrow(), [0]);

        timer.schedule(|| {});
        drop(timer);
        assert_eq!(*scheduler.dropped.borrow(), [0, 1]);
    }

    #[test]
    fn test_fired_reset_returns_form_to_idle() {
        let scheduler = ManualScheduler::default();
        let mut timer = BannerTimer::new(scheduler.clone());
        let form = Rc::new(RefCell::new(LeadForm::new()));
        form.borrow_mut().update_field(FormField::Name, "Kovács Anna");

        let pending = form.borrow_mut().begin_submit().unwrap();
        assert!(form.borrow_mut().finish_submit(pending.ticket, Ok(())));

        let target = Rc::clone(&form);
        timer.schedule(move || {
            target.borrow_mut().reset_banner(pending.ticket);
        });
        assert_eq!(form.borrow().state(), SubmissionState::Succeeded);

        scheduler.fire(0);
        assert_eq!(form.borrow().state(), SubmissionState::Idle);
    }
}
