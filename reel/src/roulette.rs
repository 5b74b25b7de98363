//! Component-level entry point: items in, offset and animating flag out.
//!
//! `Roulette` validates the request, samples the list, and drives a
//! [`SpinnerCore`] over the sample with `min_spins = 0` (the rotations are
//! already in the strip). Hosts forward the spinner's [`Action`]s exactly as
//! they would for a bare `SpinnerCore`.
//!
//! The strip on screen always matches the spinner's target. Updates made
//! while a spin is running or resting on its result are validated at once
//! but staged, and take over when the next spin resets the strip.

#[cfg(test)]
#[path = "roulette_test.rs"]
mod roulette_test;

use std::time::Duration;

use crate::consts::{DEFAULT_ARIA_LABEL, DEFAULT_DURATION_MS, DEFAULT_EASING, DEFAULT_ITEM_SIZE, DEFAULT_MIN_SPINS};
use crate::error::{SpinError, SpinResult};
use crate::item::Orientation;
use crate::layout::{Translation, slot_under_indicator, transform};
use crate::offset::check_winning_index;
use crate::sample::{Sample, SampleSlot, estimate_sample_spins, sample};
use crate::spinner::{Action, SpinPhase, SpinTicket, SpinnerConfig, SpinnerCore, duration_ms};

/// Presentation settings for a roulette.
#[derive(Debug, Clone, PartialEq)]
pub struct RouletteConfig {
    pub duration: Duration,
    /// Timing curve, passed through untouched to the presentation layer.
    pub easing: String,
    pub orientation: Orientation,
    /// Box size along the strip axis, in pixels.
    pub item_size: f64,
    /// Rotations baked into the sample. `None` estimates them from the list
    /// length and duration.
    pub min_spins: Option<u32>,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            easing: DEFAULT_EASING.to_owned(),
            orientation: Orientation::Horizontal,
            item_size: DEFAULT_ITEM_SIZE,
            min_spins: Some(DEFAULT_MIN_SPINS),
        }
    }
}

/// Main-axis direction of the strip container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

/// Transition to apply while the strip is animating.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: String,
}

/// Everything a host needs to position the strip for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StripStyle {
    pub translation: Translation,
    /// `None` means jump without animating.
    pub transition: Option<Transition>,
    pub direction: FlexDirection,
}

/// Role and state attributes for hosts that expose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessibility {
    pub role: &'static str,
    pub item_role: &'static str,
    pub label: &'static str,
    pub busy: bool,
}

/// A validated update waiting for the strip to be free.
struct Staged<T> {
    /// `None` keeps the current list.
    items: Option<Vec<T>>,
    winning_index: usize,
    min_spins: Option<u32>,
    sample: Sample,
}

/// A linear roulette over `items`.
pub struct Roulette<T> {
    items: Vec<T>,
    winning_index: usize,
    config: RouletteConfig,
    sample: Sample,
    staged: Option<Staged<T>>,
    spinner: SpinnerCore,
}

impl<T> Roulette<T> {
    /// Build an idle roulette.
    ///
    /// # Errors
    ///
    /// - [`SpinError::EmptyItemList`] when `items` is empty.
    /// - [`SpinError::IndexOutOfBounds`] when `winning_index >= items.len()`.
    pub fn new(items: Vec<T>, winning_index: usize, config: RouletteConfig) -> SpinResult<Self> {
        let sample = build_sample(&items, winning_index, config.min_spins, config.duration)?;
        let spinner_config = SpinnerConfig {
            duration: config.duration,
            item_size: config.item_size,
            orientation: config.orientation,
            min_spins: Some(0),
        };
        let spinner = SpinnerCore::new(spinner_config, sample.len(), sample.winning_index())?;
        Ok(Self { items, winning_index, config, sample, staged: None, spinner })
    }

    /// Register the spin-start notification.
    #[must_use]
    pub fn on_spin_start(mut self, callback: impl FnMut() + 'static) -> Self {
        self.spinner.set_on_spin_start(callback);
        self
    }

    /// Register the completion notification.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.spinner.set_on_complete(callback);
        self
    }

    // --- Updates ---

    /// Replace the list and winner. On error nothing changes.
    ///
    /// Staged while the strip is in use; see [`Roulette::has_staged_update`].
    ///
    /// # Errors
    ///
    /// Same as [`Roulette::new`].
    pub fn set_items(&mut self, items: Vec<T>, winning_index: usize) -> SpinResult<()> {
        let min_spins = self.requested_min_spins();
        self.stage(Some(items), winning_index, min_spins)
    }

    /// Move the winner within the most recently requested list. On error
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// [`SpinError::IndexOutOfBounds`] when `winning_index` is past that list.
    pub fn set_winning_index(&mut self, winning_index: usize) -> SpinResult<()> {
        let min_spins = self.requested_min_spins();
        self.stage(None, winning_index, min_spins)
    }

    /// Change the baked-in rotation count and resample.
    ///
    /// # Errors
    ///
    /// Only fails if the current request was already invalid, which
    /// construction rules out.
    pub fn set_min_spins(&mut self, min_spins: Option<u32>) -> SpinResult<()> {
        let winning_index = self.requested_winning_index();
        self.stage(None, winning_index, min_spins)
    }

    /// Report the live container extent along the strip axis.
    pub fn set_container_size(&mut self, size: Option<f64>) {
        self.spinner.set_container_size(size);
    }

    // --- Spinner passthrough ---

    pub fn set_spinning(&mut self, spinning: bool) -> Vec<Action> {
        let actions = self.spinner.set_spinning(spinning);
        if matches!(self.spinner.phase(), SpinPhase::Resetting { .. }) {
            self.promote();
        }
        actions
    }

    pub fn on_frame(&mut self, ticket: SpinTicket) -> Vec<Action> {
        self.spinner.on_frame(ticket)
    }

    pub fn on_timer(&mut self, ticket: SpinTicket) -> Vec<Action> {
        self.spinner.on_timer(ticket)
    }

    pub fn teardown(&mut self) -> Vec<Action> {
        self.spinner.teardown()
    }

    // --- Queries ---

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.spinner.offset()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spinner.is_animating()
    }

    #[must_use]
    pub fn phase(&self) -> SpinPhase {
        self.spinner.phase()
    }

    #[must_use]
    pub fn spinner(&self) -> &SpinnerCore {
        &self.spinner
    }

    #[must_use]
    pub fn config(&self) -> &RouletteConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn winning_index(&self) -> usize {
        self.winning_index
    }

    /// The item that must end up under the indicator.
    #[must_use]
    pub fn winning_item(&self) -> Option<&T> {
        self.items.get(self.winning_index)
    }

    /// Whether an update is waiting for the next spin.
    #[must_use]
    pub fn has_staged_update(&self) -> bool {
        self.staged.is_some()
    }

    #[must_use]
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// The sampled strip resolved to items, in render order.
    #[must_use]
    pub fn sampled_items(&self) -> Vec<&T> {
        self.sample.items(&self.items)
    }

    /// The slot and item currently under the indicator, if any.
    #[must_use]
    pub fn item_under_indicator(&self) -> Option<(SampleSlot, &T)> {
        let index = slot_under_indicator(
            self.offset(),
            self.spinner.container_size(),
            self.config.item_size,
            self.sample.len(),
        )?;
        let slot = *self.sample.slots().get(index)?;
        self.items.get(slot.source).map(|item| (slot, item))
    }

    /// Translation, transition and axis for the current frame.
    #[must_use]
    pub fn strip_style(&self) -> StripStyle {
        let transition = self.is_animating().then(|| Transition {
            duration: self.config.duration,
            easing: self.config.easing.clone(),
        });
        let direction = match self.config.orientation {
            Orientation::Horizontal => FlexDirection::Row,
            Orientation::Vertical => FlexDirection::Column,
        };
        StripStyle { translation: transform(self.offset(), self.config.orientation), transition, direction }
    }

    #[must_use]
    pub fn accessibility(&self) -> Accessibility {
        Accessibility { role: "listbox", item_role: "option", label: DEFAULT_ARIA_LABEL, busy: self.is_animating() }
    }

    // --- Staging ---

    /// The strip is on screen at a spin's offset and must not change under it.
    fn strip_in_use(&self) -> bool {
        match self.spinner.phase() {
            SpinPhase::Resetting { .. } => false,
            SpinPhase::Spinning | SpinPhase::Settled => true,
            SpinPhase::Idle => self.spinner.offset().abs() > f64::EPSILON,
        }
    }

    fn requested_winning_index(&self) -> usize {
        self.staged.as_ref().map_or(self.winning_index, |s| s.winning_index)
    }

    fn requested_min_spins(&self) -> Option<u32> {
        self.staged.as_ref().map_or(self.config.min_spins, |s| s.min_spins)
    }

    fn stage(&mut self, items: Option<Vec<T>>, winning_index: usize, min_spins: Option<u32>) -> SpinResult<()> {
        let sample = {
            let list = match (&items, &self.staged) {
                (Some(list), _) | (None, Some(Staged { items: Some(list), .. })) => list.as_slice(),
                _ => self.items.as_slice(),
            };
            build_sample(list, winning_index, min_spins, self.config.duration)?
        };
        let items = items.or_else(|| self.staged.take().and_then(|s| s.items));
        let update = Staged { items, winning_index, min_spins, sample };

        if self.strip_in_use() {
            tracing::debug!(winning_index, phase = ?self.spinner.phase(), "update staged until next spin");
            self.staged = Some(update);
            return Ok(());
        }
        self.staged = None;
        self.apply(update)
    }

    fn promote(&mut self) {
        if let Some(update) = self.staged.take() {
            if let Err(error) = self.apply(update) {
                tracing::warn!(%error, "staged update dropped");
            }
        }
    }

    fn apply(&mut self, update: Staged<T>) -> SpinResult<()> {
        self.spinner.set_target(update.sample.len(), update.sample.winning_index())?;
        if let Some(items) = update.items {
            self.items = items;
        }
        self.winning_index = update.winning_index;
        self.config.min_spins = update.min_spins;
        self.sample = update.sample;
        Ok(())
    }
}

fn build_sample<T>(items: &[T], winning_index: usize, min_spins: Option<u32>, duration: Duration) -> SpinResult<Sample> {
    if items.is_empty() {
        return Err(SpinError::EmptyItemList);
    }
    check_winning_index(winning_index, items.len())?;
    let spins = min_spins.unwrap_or_else(|| estimate_sample_spins(items.len(), duration_ms(duration)));
    sample(items, winning_index, spins)
}
