mod config;
mod error;
mod host;
mod items;
mod strip;

use clap::Parser;
use reel::Prize;
use reel::render::Renderers;
use reel::roulette::Roulette;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, DemoConfig};
use crate::error::DemoError;
use crate::host::Host;

/// Final outcome, printed with `--json`.
#[derive(Debug, Serialize)]
struct SpinReport {
    winner: Prize,
    winning_index: usize,
    sampled_len: usize,
    sampled_winning_index: usize,
    offset: f64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), DemoError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DemoConfig::from_cli(Cli::parse())?;
    run(config).await
}

async fn run(config: DemoConfig) -> Result<(), DemoError> {
    let prizes = items::from_source(&config.source)?;
    let winning_index = items::pick_winner(config.winner, prizes.len())?;

    let mut roulette = Roulette::new(prizes, winning_index, config.roulette.clone())?
        .on_spin_start(|| info!("spin started"))
        .on_complete(|| info!("spin complete"));
    roulette.set_container_size(Some(config.container_size));
    info!(
        items = roulette.items().len(),
        winning_index,
        sampled_len = roulette.sample().len(),
        sampled_winning_index = roulette.sample().winning_index(),
        "roulette ready"
    );

    let renderers: Renderers<Prize, String> = Renderers::new();
    let draw_frames = !config.json;
    let mut host = Host::new(roulette, config.frame_interval).with_observer(move |r| {
        if draw_frames {
            println!("{}\n", strip::draw(r, &renderers));
        }
    });

    let (slot, landed) = host.run_spin().await.ok_or(DemoError::NoLanding)?;
    let winner = landed.clone();
    let roulette = host.roulette();
    info!(winner = %winner.label, source = slot.source, offset = roulette.offset(), "settled");

    if config.json {
        let report = SpinReport {
            winner,
            winning_index: slot.source,
            sampled_len: roulette.sample().len(),
            sampled_winning_index: roulette.sample().winning_index(),
            offset: roulette.offset(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Winner: {} (#{})", winner.label, slot.source + 1);
    }

    host.teardown();
    Ok(())
}
