//! Spin lifecycle state machine.
//!
//! `SpinnerCore` owns one strip's animation state: the current offset, the
//! animating flag and whether completion has fired for the running spin. It
//! never touches a clock. Every mutating call returns the [`Action`]s the
//! host must carry out (schedule a frame, arm or cancel a timer, redraw) and
//! the host feeds the resulting callbacks back through [`SpinnerCore::on_frame`]
//! and [`SpinnerCore::on_timer`].
//!
//! ```text
//!   Idle ──trigger↑──▶ Resetting ──frame──▶ Resetting(committed) ──frame──▶ Spinning
//!    ▲                                                                        │
//!    └──────────────── trigger↓ ◀──────────────── Settled ◀──timer────────────┘
//! ```
//!
//! The reset takes two frames: the first commits the zero offset with no
//! transition, the second applies the target with the transition enabled.
//! Collapsing them lets a renderer merge both changes and skip the animation.
//!
//! Each spin gets a fresh [`SpinTicket`]. Frame and timer callbacks carrying
//! any other ticket are dropped, so a late callback from a cancelled spin can
//! never notify.

#[cfg(test)]
#[path = "spinner_test.rs"]
mod spinner_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DURATION_MS, DEFAULT_ITEM_SIZE};
use crate::error::{SpinError, SpinResult};
use crate::item::Orientation;
use crate::offset::{calculate_offset, check_winning_index, estimate_spin_count};

/// Identifies one spin cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SpinTicket(pub u64);

/// Work the host must perform on behalf of the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Call [`SpinnerCore::on_frame`] with this ticket at the next rendering opportunity.
    RequestFrame(SpinTicket),
    /// Call [`SpinnerCore::on_timer`] with this ticket once `delay` has elapsed.
    ArmTimer { ticket: SpinTicket, delay: Duration },
    /// Drop the pending timer for this ticket.
    CancelTimer(SpinTicket),
    /// Offset or animating flag changed; redraw.
    RenderNeeded,
}

/// Lifecycle phase of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpinPhase {
    /// At rest; the offset holds its last value.
    #[default]
    Idle,
    /// Offset snapped to zero; waiting for frames before animating.
    Resetting {
        /// The zero-offset snap has been through one frame.
        snap_committed: bool,
    },
    /// Transition running toward the target offset.
    Spinning,
    /// Transition finished; the strip rests on the winner.
    Settled,
}

/// Snapshot of the animation state a renderer reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub offset: f64,
    pub animating: bool,
    pub completion_fired: bool,
}

/// Static configuration for a spinner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerConfig {
    /// Length of the transition and of the completion timer.
    pub duration: Duration,
    /// Box size along the strip axis, in pixels.
    pub item_size: f64,
    pub orientation: Orientation,
    /// Rotations added by the offset arithmetic. `None` estimates from the
    /// item count and duration; `Some(0)` when the strip already has them baked in.
    pub min_spins: Option<u32>,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            item_size: DEFAULT_ITEM_SIZE,
            orientation: Orientation::Horizontal,
            min_spins: None,
        }
    }
}

type Callback = Box<dyn FnMut()>;

/// The spin state machine for a single strip.
pub struct SpinnerCore {
    config: SpinnerConfig,
    item_count: usize,
    winning_index: usize,
    container_size: Option<f64>,
    phase: SpinPhase,
    offset: f64,
    animating: bool,
    completion_fired: bool,
    trigger: bool,
    ticket: SpinTicket,
    armed: Option<SpinTicket>,
    torn_down: bool,
    on_spin_start: Option<Callback>,
    on_complete: Option<Callback>,
}

impl SpinnerCore {
    /// Create an idle spinner over a strip of `item_count` slots.
    ///
    /// # Errors
    ///
    /// - [`SpinError::EmptyItemList`] when `item_count == 0`.
    /// - [`SpinError::IndexOutOfBounds`] when `winning_index >= item_count`.
    pub fn new(config: SpinnerConfig, item_count: usize, winning_index: usize) -> SpinResult<Self> {
        validate_target(item_count, winning_index)?;
        Ok(Self {
            config,
            item_count,
            winning_index,
            container_size: None,
            phase: SpinPhase::Idle,
            offset: 0.0,
            animating: false,
            completion_fired: false,
            trigger: false,
            ticket: SpinTicket::default(),
            armed: None,
            torn_down: false,
            on_spin_start: None,
            on_complete: None,
        })
    }

    // --- Configuration ---

    /// Register the notification fired once each time a spin starts.
    pub fn set_on_spin_start(&mut self, callback: impl FnMut() + 'static) {
        self.on_spin_start = Some(Box::new(callback));
    }

    /// Register the notification fired once each time a spin settles.
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Replace the strip the next target offset is computed against.
    ///
    /// Does not disturb a spin in flight; the new target applies from the
    /// next time the spinner leaves `Resetting`.
    ///
    /// # Errors
    ///
    /// Same as [`SpinnerCore::new`]. On error the previous target is kept.
    pub fn set_target(&mut self, item_count: usize, winning_index: usize) -> SpinResult<()> {
        validate_target(item_count, winning_index)?;
        self.item_count = item_count;
        self.winning_index = winning_index;
        Ok(())
    }

    /// Report the live container extent along the strip axis.
    ///
    /// `None` means the host cannot measure it; the item size is used instead.
    pub fn set_container_size(&mut self, size: Option<f64>) {
        self.container_size = size;
    }

    // --- Inputs ---

    /// Set the spin trigger. Only a change of value does anything.
    pub fn set_spinning(&mut self, spinning: bool) -> Vec<Action> {
        if self.torn_down || spinning == self.trigger {
            return Vec::new();
        }
        self.trigger = spinning;
        if spinning { self.begin_reset() } else { self.stop() }
    }

    /// A frame requested with [`Action::RequestFrame`] has arrived.
    pub fn on_frame(&mut self, ticket: SpinTicket) -> Vec<Action> {
        if self.torn_down || ticket != self.ticket {
            return Vec::new();
        }
        match self.phase {
            SpinPhase::Resetting { snap_committed: false } => {
                self.phase = SpinPhase::Resetting { snap_committed: true };
                vec![Action::RequestFrame(ticket)]
            }
            SpinPhase::Resetting { snap_committed: true } => self.begin_spin(),
            SpinPhase::Idle | SpinPhase::Spinning | SpinPhase::Settled => Vec::new(),
        }
    }

    /// A timer armed with [`Action::ArmTimer`] has fired.
    pub fn on_timer(&mut self, ticket: SpinTicket) -> Vec<Action> {
        if self.torn_down || self.armed != Some(ticket) {
            return Vec::new();
        }
        self.armed = None;
        self.animating = false;
        self.phase = SpinPhase::Settled;
        tracing::debug!(ticket = ticket.0, offset = self.offset, "spin settled");

        if !self.completion_fired {
            self.completion_fired = true;
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
        }
        vec![Action::RenderNeeded]
    }

    /// Detach from the host. Cancels any pending timer and drops both
    /// notifications; every later call is a no-op.
    pub fn teardown(&mut self) -> Vec<Action> {
        if self.torn_down {
            return Vec::new();
        }
        self.torn_down = true;
        self.on_spin_start = None;
        self.on_complete = None;
        self.animating = false;
        tracing::debug!(ticket = self.ticket.0, phase = ?self.phase, "spinner torn down");
        self.armed.take().map(Action::CancelTimer).into_iter().collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the transition should be applied when rendering the offset.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[must_use]
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Current value of the spin trigger.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.trigger
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Ticket of the most recent spin (zero before the first).
    #[must_use]
    pub fn ticket(&self) -> SpinTicket {
        self.ticket
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        AnimationState { offset: self.offset, animating: self.animating, completion_fired: self.completion_fired }
    }

    #[must_use]
    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }

    /// Container extent used for centering: the reported size, else the item size.
    #[must_use]
    pub fn container_size(&self) -> f64 {
        self.container_size.unwrap_or(self.config.item_size)
    }

    /// Rotations the offset arithmetic adds on top of the positional offset.
    #[must_use]
    pub fn effective_spins(&self) -> u32 {
        self.config
            .min_spins
            .unwrap_or_else(|| estimate_spin_count(self.item_count, duration_ms(self.config.duration)))
    }

    /// Offset the next (or current) spin travels to.
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        calculate_offset(
            self.config.item_size,
            self.winning_index,
            self.container_size(),
            self.item_count,
            self.effective_spins(),
        )
    }

    // --- Transitions ---

    fn begin_reset(&mut self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(3);
        if let Some(stale) = self.armed.take() {
            actions.push(Action::CancelTimer(stale));
        }
        self.ticket = SpinTicket(self.ticket.0 + 1);
        self.phase = SpinPhase::Resetting { snap_committed: false };
        self.offset = 0.0;
        self.animating = false;
        self.completion_fired = false;
        tracing::debug!(ticket = self.ticket.0, "spin started");

        if let Some(callback) = self.on_spin_start.as_mut() {
            callback();
        }
        actions.push(Action::RenderNeeded);
        actions.push(Action::RequestFrame(self.ticket));
        actions
    }

    fn begin_spin(&mut self) -> Vec<Action> {
        let target = self.target_offset();
        self.offset = target;
        self.animating = true;
        self.phase = SpinPhase::Spinning;
        self.armed = Some(self.ticket);
        tracing::debug!(
            ticket = self.ticket.0,
            offset = target,
            container_size = self.container_size(),
            spins = self.effective_spins(),
            "spin animating"
        );
        vec![Action::RenderNeeded, Action::ArmTimer { ticket: self.ticket, delay: self.config.duration }]
    }

    fn stop(&mut self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if let Some(pending) = self.armed.take() {
            actions.push(Action::CancelTimer(pending));
        }
        self.phase = SpinPhase::Idle;
        self.animating = false;
        self.completion_fired = false;
        tracing::debug!(ticket = self.ticket.0, offset = self.offset, "spin stopped");
        actions.push(Action::RenderNeeded);
        actions
    }
}

fn validate_target(item_count: usize, winning_index: usize) -> SpinResult<()> {
    if item_count == 0 {
        return Err(SpinError::EmptyItemList);
    }
    check_winning_index(winning_index, item_count).map(|_| ())
}

pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
