//! Single-slot error banner with auto-dismiss.
//!
//! There is only ever one banner. Showing a new message replaces the old
//! one and restarts the countdown; the previous timer is cancelled by
//! dropping its handle, so a stale timer can never clear a newer message.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

use crate::config::ERROR_BANNER_TIMEOUT_MS;

/// Something that can run a callback once after a delay.
///
/// Dropping the returned handle must cancel the pending callback.
pub trait TimerFactory {
    type Handle: 'static;

    fn start(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo. `Timeout` clears itself on drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerFactory for BrowserTimers {
    type Handle = Timeout;

    fn start(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }
}

/// Called with the new message, or `None` when the banner goes away.
pub type BannerListener = Rc<dyn Fn(Option<&str>)>;

struct Slot<H> {
    message: Option<String>,
    timer: Option<H>,
    generation: u64,
}

pub struct ErrorBanner<T: TimerFactory> {
    timers: T,
    timeout_ms: u32,
    slot: Rc<RefCell<Slot<T::Handle>>>,
    listener: BannerListener,
}

impl<T: TimerFactory> ErrorBanner<T> {
    pub fn new(timers: T, listener: BannerListener) -> Self {
        Self::with_timeout(timers, ERROR_BANNER_TIMEOUT_MS, listener)
    }

    pub fn with_timeout(timers: T, timeout_ms: u32, listener: BannerListener) -> Self {
        Self {
            timers,
            timeout_ms,
            slot: Rc::new(RefCell::new(Slot {
                message: None,
                timer: None,
                generation: 0,
            })),
            listener,
        }
    }

    /// Display `message`, replacing whatever is shown.
    pub fn show(&self, message: &str) {
        let (generation, previous_timer) = {
            let mut slot = self.slot.borrow_mut();
            slot.generation += 1;
            slot.message = Some(message.to_string());
            (slot.generation, slot.timer.take())
        };
        drop(previous_timer);

        let timer = self
            .timers
            .start(self.timeout_ms, expire_callback(Rc::downgrade(&self.slot), generation, self.listener.clone()));
        self.slot.borrow_mut().timer = Some(timer);

        log::error!("Error shown to user: {}", message);
        (self.listener)(Some(message));
    }

    /// User closed the banner.
    pub fn dismiss(&self) {
        let (was_visible, timer) = {
            let mut slot = self.slot.borrow_mut();
            (slot.message.take().is_some(), slot.timer.take())
        };
        drop(timer);

        if was_visible {
            (self.listener)(None);
        }
    }

    pub fn message(&self) -> Option<String> {
        self.slot.borrow().message.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.slot.borrow().message.is_some()
    }
}

fn expire_callback<H: 'static>(
    slot: Weak<RefCell<Slot<H>>>,
    generation: u64,
    listener: BannerListener,
) -> Box<dyn FnOnce()> {
    Box::new(move || {
        let Some(slot) = slot.upgrade() else {
            return;
        };

        // The fired handle stays in the slot; the next show/dismiss drops it.
        let expired = {
            let mut slot = slot.borrow_mut();
            if slot.generation == generation && slot.message.is_some() {
                slot.message = None;
                true
            } else {
                false
            }
        };

        if expired {
            log::debug!("Error banner auto-dismissed");
            listener(None);
        }
    })
}
