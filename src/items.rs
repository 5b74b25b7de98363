//! Prize lists for the demo: generated, or loaded from a JSON array.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use std::path::Path;

use rand::Rng;
use reel::offset::validate_winning_index;
use reel::{Prize, SpinError};
use uuid::Uuid;

use crate::config::ItemSource;
use crate::error::DemoError;

/// `count` prizes labelled `Prize 1` through `Prize {count}`.
pub fn generate(count: usize) -> Vec<Prize> {
    (1..=count)
        .map(|n| Prize {
            value: serde_json::json!({ "rank": n }),
            ..Prize::new(Uuid::new_v4().to_string(), format!("Prize {n}"))
        })
        .collect()
}

/// Parse a JSON array of prizes.
pub fn parse(json: &str) -> Result<Vec<Prize>, DemoError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load(path: &Path) -> Result<Vec<Prize>, DemoError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| DemoError::ReadItems { path: path.to_path_buf(), source })?;
    parse(&raw)
}

pub fn from_source(source: &ItemSource) -> Result<Vec<Prize>, DemoError> {
    match source {
        ItemSource::Generate(count) => Ok(generate(*count)),
        ItemSource::File(path) => load(path),
    }
}

/// Check a requested winner, or draw one uniformly when none was given.
pub fn pick_winner(requested: Option<f64>, len: usize) -> Result<usize, DemoError> {
    if len == 0 {
        return Err(SpinError::EmptyItemList.into());
    }
    match requested {
        Some(index) => Ok(validate_winning_index(index, len)?),
        None => Ok(rand::rng().random_range(0..len)),
    }
}
