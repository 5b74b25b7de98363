//! Linear prize roulette engine.
//!
//! A horizontal or vertical strip of items scrolls past a fixed indicator and
//! stops with a predetermined winner centered under it. The crate owns the
//! arithmetic and the state; it draws nothing and keeps no clock. Hosts feed
//! it frame and timer callbacks and act on the [`spinner::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`roulette`] | Component entry point tying sampling and spinning together |
//! | [`spinner`] | Spin lifecycle state machine and host actions |
//! | [`sample`] | Builds the bounded strip that is actually rendered |
//! | [`offset`] | Landing offset, index validation and spin estimates |
//! | [`layout`] | Translation and indicator geometry |
//! | [`render`] | Optional caller-supplied item and indicator renderers |
//! | [`item`] | Default prize record, label access and orientation |
//! | [`error`] | Validation errors |
//! | [`consts`] | Thresholds, clamps and component defaults |

pub mod consts;
pub mod error;
pub mod item;
pub mod layout;
pub mod offset;
pub mod render;
pub mod roulette;
pub mod sample;
pub mod spinner;

pub use error::{SpinError, SpinResult};
pub use item::{Label, Orientation, Prize};
pub use roulette::{Roulette, RouletteConfig};
pub use sample::{Sample, SampleSlot, sample};
pub use spinner::{Action, SpinPhase, SpinTicket, SpinnerConfig, SpinnerCore};
