//! # Timers
//!
//! The only asynchronous part of the picker. Each timer is a spawned tokio
//! task that sleeps and then sends an `Action` back to the event loop over the
//! same channel the loop drains every iteration.
//!
//! ```text
//! Effect::Settle(text) ──► query debouncer      (1000ms) ──► Action::ApplyQuery
//!                     └──► visibility debouncer (1100ms) ──► Action::SettleVisibility
//! Effect::HideAfterBlur ─► one-shot delay       (200ms)  ──► Action::BlurElapsed
//! ```
//!
//! Actions arrive in the order the timers fire, so a focus event and a
//! pending visibility debounce race on wall-clock time. Whichever is applied
//! last wins.

use std::sync::mpsc::Sender;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::core::action::{Action, Effect};
use crate::core::config::Timing;

/// Trailing-edge debouncer: only the last call in a burst fires, `delay`
/// after that call.
///
/// `to_action` turns the debounced value into the message sent when the
/// timer fires. Each `call` aborts this debouncer's own pending task and no
/// other.
pub struct Debouncer<T, A> {
    delay: Duration,
    tx: Sender<A>,
    to_action: fn(T) -> A,
    pending: Option<AbortHandle>,
}

impl<T, A> Debouncer<T, A>
where
    A: Send + 'static,
{
    pub fn new(delay: Duration, tx: Sender<A>, to_action: fn(T) -> A) -> Self {
        Self {
            delay,
            tx,
            to_action,
            pending: None,
        }
    }

    /// Restart the quiet period with `value` as the payload.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&mut self, value: T) {
        self.cancel();
        let action = (self.to_action)(value);
        self.pending = Some(spawn_after(self.delay, self.tx.clone(), action));
    }

    /// Abort the pending invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T, A> Drop for Debouncer<T, A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Send `action` on `tx` once `delay` has elapsed. Not debounced.
pub fn spawn_after<A>(delay: Duration, tx: Sender<A>, action: A) -> AbortHandle
where
    A: Send + 'static,
{
    // Deadline is taken now, not when the task is first polled.
    let deadline = Instant::now() + delay;
    let handle = tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        if tx.send(action).is_err() {
            warn!("Timer fired after receiver dropped");
        }
    });
    handle.abort_handle()
}

/// The three timers of the search widget.
///
/// The query and visibility debouncers are independent instances. Their
/// delays are skewed (visibility settles after the query) so the list is
/// never shown with results for an older query.
pub struct WidgetTimers {
    query: Debouncer<String, Action>,
    visibility: Debouncer<bool, Action>,
    blur_grace: Duration,
    blur: Vec<AbortHandle>,
    tx: Sender<Action>,
}

impl WidgetTimers {
    pub fn new(timing: &Timing, tx: Sender<Action>) -> Self {
        Self {
            query: Debouncer::new(timing.query_delay, tx.clone(), Action::ApplyQuery),
            visibility: Debouncer::new(
                timing.visibility_delay,
                tx.clone(),
                Action::SettleVisibility,
            ),
            blur_grace: timing.blur_grace,
            blur: Vec::new(),
            tx,
        }
    }

    /// Arm whatever timers `effect` asks for. Other effects are ignored.
    pub fn schedule(&mut self, effect: &Effect) {
        match effect {
            Effect::Settle(text) => {
                debug!("Debouncing query {:?}", text);
                self.query.call(text.clone());
                self.visibility.call(!text.is_empty());
            }
            Effect::HideAfterBlur => {
                self.blur.retain(|h| !h.is_finished());
                self.blur
                    .push(spawn_after(self.blur_grace, self.tx.clone(), Action::BlurElapsed));
            }
            Effect::None | Effect::Quit => {}
        }
    }

    /// True while any timer has yet to fire.
    pub fn has_pending(&self) -> bool {
        self.query.is_pending()
            || self.visibility.is_pending()
            || self.blur.iter().any(|h| !h.is_finished())
    }

    /// Abort every pending timer. Called on teardown.
    pub fn cancel_all(&mut self) {
        self.query.cancel();
        self.visibility.cancel();
        for handle in self.blur.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for WidgetTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
