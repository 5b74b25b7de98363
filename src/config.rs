//! Demo configuration: clap flags (each also readable from `REELSPIN_*`)
//! resolved into the roulette's own config types.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reel::consts::{DEFAULT_DURATION_MS, DEFAULT_ITEM_SIZE, DEFAULT_MIN_SPINS};
use reel::{Orientation, RouletteConfig};

use crate::error::DemoError;

const DEFAULT_ITEM_COUNT: usize = 12;
const DEFAULT_CONTAINER_SIZE: f64 = 750.0;
const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(name = "reelspin", about = "Spin a linear prize roulette in the terminal")]
pub struct Cli {
    /// Number of prizes to generate.
    #[arg(long, env = "REELSPIN_ITEMS", default_value_t = DEFAULT_ITEM_COUNT)]
    pub items: usize,

    /// Load prizes from a JSON array instead of generating them.
    #[arg(long, env = "REELSPIN_ITEMS_FILE")]
    pub items_file: Option<PathBuf>,

    /// Winning index. Picked at random when absent.
    #[arg(long, env = "REELSPIN_WINNER", allow_hyphen_values = true)]
    pub winner: Option<f64>,

    #[arg(long, env = "REELSPIN_DURATION_MS", default_value_t = DEFAULT_DURATION_MS)]
    pub duration_ms: u64,

    #[arg(long, env = "REELSPIN_ITEM_SIZE", allow_negative_numbers = true, default_value_t = DEFAULT_ITEM_SIZE)]
    pub item_size: f64,

    #[arg(long, env = "REELSPIN_CONTAINER_SIZE", allow_negative_numbers = true, default_value_t = DEFAULT_CONTAINER_SIZE)]
    pub container_size: f64,

    /// `horizontal` or `vertical`.
    #[arg(long, env = "REELSPIN_ORIENTATION", default_value = "horizontal", value_parser = parse_orientation)]
    pub orientation: Orientation,

    /// Rotation count, or `auto` to estimate from the list length.
    #[arg(long, env = "REELSPIN_MIN_SPINS", value_parser = parse_spin_count)]
    pub min_spins: Option<SpinCount>,

    /// Frame interval; falls back to `REELSPIN_FRAME_MS`, then 16.
    #[arg(long)]
    pub frame_ms: Option<u64>,

    /// Print the result as JSON.
    #[arg(long, env = "REELSPIN_JSON")]
    pub json: bool,
}

/// Rotation override from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinCount {
    Auto,
    Fixed(u32),
}

/// Where the prizes come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSource {
    Generate(usize),
    File(PathBuf),
}

/// Fully resolved demo settings.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub source: ItemSource,
    pub winner: Option<f64>,
    pub roulette: RouletteConfig,
    pub container_size: f64,
    pub frame_interval: Duration,
    pub json: bool,
}

impl DemoConfig {
    /// Resolve parsed flags into settings.
    ///
    /// # Errors
    ///
    /// [`DemoError::InvalidSetting`] for non-positive sizes or a zero frame interval.
    pub fn from_cli(cli: Cli) -> Result<Self, DemoError> {
        positive("item-size", cli.item_size)?;
        positive("container-size", cli.container_size)?;

        let frame_ms = cli.frame_ms.unwrap_or_else(|| env_parse("REELSPIN_FRAME_MS", DEFAULT_FRAME_MS));
        if frame_ms == 0 {
            return Err(DemoError::InvalidSetting { name: "frame-ms", reason: "must be at least 1".into() });
        }

        let min_spins = match cli.min_spins {
            None => Some(DEFAULT_MIN_SPINS),
            Some(SpinCount::Auto) => None,
            Some(SpinCount::Fixed(n)) => Some(n),
        };
        let source = match cli.items_file {
            Some(path) => ItemSource::File(path),
            None => ItemSource::Generate(cli.items),
        };

        Ok(Self {
            source,
            winner: cli.winner,
            roulette: RouletteConfig {
                duration: Duration::from_millis(cli.duration_ms),
                orientation: cli.orientation,
                item_size: cli.item_size,
                min_spins,
                ..RouletteConfig::default()
            },
            container_size: cli.container_size,
            frame_interval: Duration::from_millis(frame_ms),
            json: cli.json,
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), DemoError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DemoError::InvalidSetting { name, reason: format!("expected a positive size, got {value}") })
    }
}

fn parse_orientation(raw: &str) -> Result<Orientation, String> {
    match raw.to_ascii_lowercase().as_str() {
        "horizontal" | "h" => Ok(Orientation::Horizontal),
        "vertical" | "v" => Ok(Orientation::Vertical),
        other => Err(format!("unknown orientation `{other}`")),
    }
}

fn parse_spin_count(raw: &str) -> Result<SpinCount, String> {
    if raw.eq_ignore_ascii_case("auto") {
        return Ok(SpinCount::Auto);
    }
    raw.parse::<u32>()
        .map(SpinCount::Fixed)
        .map_err(|e| format!("expected a whole number or `auto`: {e}"))
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
