//! Shared numeric constants for the reel crate.

// ── Sampling ────────────────────────────────────────────────────

/// Item count at or below which the full list is repeated instead of sampled.
pub const SMALL_DATASET_THRESHOLD: usize = 100;

/// Number of leading items drawn into the pool for large lists.
pub const SAMPLE_POOL_SIZE: usize = 50;

/// Slots appended after the final rotation so the strip never runs dry past the winner.
pub const TRAILING_BUFFER: usize = 10;

/// Extra repetition blocks on top of `min_spins` in the small-dataset regime.
pub const SMALL_DATASET_PADDING_BLOCKS: usize = 2;

// ── Spin count estimation ───────────────────────────────────────

/// Duration (ms) at which the duration factor equals one.
pub const DURATION_BASELINE_MS: f64 = 5000.0;

/// Item count below which short lists earn extra rotations.
pub const ITEM_FACTOR_BASE: f64 = 10.0;

/// Lower clamp shared by both spin estimators.
pub const MIN_ESTIMATED_SPINS: u32 = 2;

/// Upper clamp for the state machine's own estimate.
pub const MAX_ESTIMATED_SPINS: u32 = 6;

/// Upper clamp for the sampling engine's pre-baked rotations.
pub const MAX_SAMPLE_SPINS: u32 = 8;

// ── Component defaults ──────────────────────────────────────────

/// Spin duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Item box size along the strip axis, in pixels.
pub const DEFAULT_ITEM_SIZE: f64 = 150.0;

/// Rotations before landing when the caller gives no override.
pub const DEFAULT_MIN_SPINS: u32 = 5;

/// Transition timing curve handed to the presentation layer.
pub const DEFAULT_EASING: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";

/// Accessible label for the strip container.
pub const DEFAULT_ARIA_LABEL: &str = "Prize roulette";
