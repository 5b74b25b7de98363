//! Tokio host for a [`Roulette`].
//!
//! DESIGN
//! ======
//! The roulette never sleeps; it hands back [`Action`]s. The host turns them
//! into runtime work:
//!
//! - `RequestFrame` parks the ticket until the next tick of a frame interval.
//! - `ArmTimer` spawns a sleep task that posts its ticket over a channel.
//! - `CancelTimer` aborts that task.
//! - `RenderNeeded` calls the observer, if any.
//!
//! The roulette's callbacks are not `Send`, so the host itself is never
//! spawned; it runs on the caller's task. Only the timer tasks are spawned,
//! and they carry nothing but a ticket. Dropping the host aborts them all.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::collections::HashMap;
use std::time::Duration;

use reel::roulette::Roulette;
use reel::{Action, SampleSlot, SpinPhase, SpinTicket};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info};

type Observer<T> = Box<dyn FnMut(&Roulette<T>)>;

pub struct Host<T> {
    roulette: Roulette<T>,
    frames: Interval,
    pending_frame: Option<SpinTicket>,
    timers: HashMap<SpinTicket, JoinHandle<()>>,
    fired_tx: mpsc::UnboundedSender<SpinTicket>,
    fired_rx: mpsc::UnboundedReceiver<SpinTicket>,
    observer: Option<Observer<T>>,
}

impl<T> Host<T> {
    /// Must be called inside a tokio runtime.
    pub fn new(roulette: Roulette<T>, frame_interval: Duration) -> Self {
        let mut frames = tokio::time::interval(frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self { roulette, frames, pending_frame: None, timers: HashMap::new(), fired_tx, fired_rx, observer: None }
    }

    /// Called with the roulette every time it asks for a redraw.
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(&Roulette<T>) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn roulette(&self) -> &Roulette<T> {
        &self.roulette
    }

    /// Number of timer tasks still outstanding.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn set_spinning(&mut self, spinning: bool) {
        let actions = self.roulette.set_spinning(spinning);
        self.apply(actions);
    }

    /// Detach the roulette and abort every outstanding timer.
    pub fn teardown(&mut self) {
        let actions = self.roulette.teardown();
        self.apply(actions);
        debug!(outstanding = self.pending_timers(), "host torn down");
        self.abort_all();
    }

    /// Wait for the next frame or timer and feed it to the roulette.
    ///
    /// Returns `false` without waiting when nothing is pending.
    pub async fn step(&mut self) -> bool {
        let frame_due = self.pending_frame.is_some();
        if !frame_due && self.timers.is_empty() {
            return false;
        }
        tokio::select! {
            _ = self.frames.tick(), if frame_due => {
                if let Some(ticket) = self.pending_frame.take() {
                    let actions = self.roulette.on_frame(ticket);
                    self.apply(actions);
                }
            }
            Some(ticket) = self.fired_rx.recv() => {
                self.timers.remove(&ticket);
                let actions = self.roulette.on_timer(ticket);
                self.apply(actions);
            }
            else => return false,
        }
        true
    }

    /// Play one spin from a fresh trigger to rest.
    ///
    /// Returns the slot and item under the indicator once settled, or `None`
    /// if the spin was stopped or torn down before it settled.
    pub async fn run_spin(&mut self) -> Option<(SampleSlot, &T)> {
        self.set_spinning(false);
        self.set_spinning(true);
        while self.step().await {}
        if self.roulette.phase() != SpinPhase::Settled {
            return None;
        }
        let landed = self.roulette.item_under_indicator();
        if let Some((slot, _)) = landed {
            info!(source = slot.source, offset = self.roulette.offset(), "spin landed");
        }
        landed
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::RequestFrame(ticket) => self.pending_frame = Some(ticket),
                Action::ArmTimer { ticket, delay } => self.arm(ticket, delay),
                Action::CancelTimer(ticket) => {
                    if let Some(handle) = self.timers.remove(&ticket) {
                        handle.abort();
                        debug!(ticket = ticket.0, "timer cancelled");
                    }
                }
                Action::RenderNeeded => {
                    if let Some(observer) = self.observer.as_mut() {
                        observer(&self.roulette);
                    }
                }
            }
        }
    }

    fn arm(&mut self, ticket: SpinTicket, delay: Duration) {
        let tx = self.fired_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!(ticket = ticket.0, "host gone before timer fired");
            }
        });
        if let Some(stale) = self.timers.insert(ticket, handle) {
            stale.abort();
        }
        debug!(ticket = ticket.0, delay = ?delay, "timer armed");
    }

    fn abort_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
        self.pending_frame = None;
    }
}

impl<T> Drop for Host<T> {
    fn drop(&mut self) {
        self.abort_all();
    }
}
