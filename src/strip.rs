//! Text rendering of the strip for the terminal demo.
//!
//! Horizontal strips draw one row of fixed-width cells with the indicator on
//! the line below; vertical strips draw one cell per line with the indicator
//! beside it. Only the slots inside the container are drawn.

#[cfg(test)]
#[path = "strip_test.rs"]
mod strip_test;

use reel::layout::{slot_under_indicator, visible_slots};
use reel::render::{Renderers, default_label};
use reel::roulette::Roulette;
use reel::{Label, Orientation};

/// Characters per cell.
pub const CELL_WIDTH: usize = 12;

const HORIZONTAL_INDICATOR: &str = "▲";
const VERTICAL_INDICATOR: &str = "◀";

/// Draw what is currently inside the container.
pub fn draw<T: Label>(roulette: &Roulette<T>, renderers: &Renderers<T, String>) -> String {
    let offset = roulette.offset();
    let container = roulette.spinner().container_size();
    let item_size = roulette.config().item_size;
    let len = roulette.sample().len();

    let marked = slot_under_indicator(offset, container, item_size, len);
    let cells: Vec<(bool, String)> = roulette
        .sample()
        .resolve(roulette.items(), visible_slots(offset, container, item_size, len))
        .map(|(index, _, item)| (Some(index) == marked, fit(&renderers.render_item(item, default_label))))
        .collect();

    match roulette.config().orientation {
        Orientation::Horizontal => {
            let indicator = renderers.render_indicator(|| HORIZONTAL_INDICATOR.to_owned());
            horizontal(&cells, &indicator)
        }
        Orientation::Vertical => {
            let indicator = renderers.render_indicator(|| VERTICAL_INDICATOR.to_owned());
            vertical(&cells, &indicator)
        }
    }
}

fn horizontal(cells: &[(bool, String)], indicator: &str) -> String {
    let row = cells.iter().map(|(_, text)| format!("{text:^CELL_WIDTH$}")).collect::<Vec<_>>().join("|");
    let mut out = format!("|{row}|");
    if let Some(k) = cells.iter().position(|(marked, _)| *marked) {
        let width = indicator.chars().count().min(CELL_WIDTH);
        let pad = 1 + k * (CELL_WIDTH + 1) + (CELL_WIDTH - width) / 2;
        out.push('\n');
        out.push_str(&" ".repeat(pad));
        out.push_str(indicator);
    }
    out
}

fn vertical(cells: &[(bool, String)], indicator: &str) -> String {
    cells
        .iter()
        .map(|(marked, text)| {
            if *marked {
                format!("{text:<CELL_WIDTH$} {indicator}")
            } else {
                text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn fit(text: &str) -> String {
    text.chars().take(CELL_WIDTH).collect()
}
