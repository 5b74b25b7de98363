use std::cell::Cell;
use std::rc::Rc;

use reel::Prize;
use reel::roulette::RouletteConfig;
use tokio::time::Instant;

use super::*;
use crate::items::generate;

const FRAME: Duration = Duration::from_millis(16);
const SPIN: Duration = Duration::from_millis(1000);

// =============================================================
// Helpers
// =============================================================

#[derive(Default, Clone)]
struct Counts {
    starts: Rc<Cell<usize>>,
    completes: Rc<Cell<usize>>,
    renders: Rc<Cell<usize>>,
}

fn host(items: Vec<Prize>, winner: usize, counts: &Counts) -> Host<Prize> {
    let config = RouletteConfig { duration: SPIN, item_size: 100.0, min_spins: Some(2), ..RouletteConfig::default() };
    let (s, c) = (Rc::clone(&counts.starts), Rc::clone(&counts.completes));
    let mut roulette = Roulette::new(items, winner, config)
        .unwrap()
        .on_spin_start(move || s.set(s.get() + 1))
        .on_complete(move || c.set(c.get() + 1));
    roulette.set_container_size(Some(500.0));
    let r = Rc::clone(&counts.renders);
    Host::new(roulette, FRAME).with_observer(move |_| r.set(r.get() + 1))
}

/// Run both reset frames so the timer is armed.
async fn start(host: &mut Host<Prize>) {
    host.set_spinning(true);
    assert!(host.step().await);
    assert!(host.step().await);
    assert_eq!(host.roulette().phase(), SpinPhase::Spinning);
}

// =============================================================
// Full spins
// =============================================================

#[tokio::test(start_paused = true)]
async fn spin_settles_on_winner_after_duration() {
    let items = generate(8);
    let expected = items[5].clone();
    let counts = Counts::default();
    let mut host = host(items, 5, &counts);

    let began = Instant::now();
    let (slot, item) = host.run_spin().await.unwrap();
    assert_eq!(slot.source, 5);
    assert_eq!(item, &expected);

    let elapsed = began.elapsed();
    assert!(elapsed >= SPIN, "settled too early: {elapsed:?}");
    assert!(elapsed < SPIN + FRAME * 4, "settled too late: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn large_list_settles_on_winner() {
    let items = generate(20_000);
    let expected = items[17_321].clone();
    let counts = Counts::default();
    let mut host = host(items, 17_321, &counts);
    assert_eq!(host.run_spin().await.unwrap().1, &expected);
}

#[tokio::test(start_paused = true)]
async fn notifications_fire_once_per_spin() {
    let counts = Counts::default();
    let mut host = host(generate(4), 1, &counts);
    host.run_spin().await.unwrap();
    assert_eq!((counts.starts.get(), counts.completes.get()), (1, 1));
    // reset, spin start, settle
    assert_eq!(counts.renders.get(), 3);

    host.run_spin().await.unwrap();
    assert_eq!((counts.starts.get(), counts.completes.get()), (2, 2));
    assert_eq!(host.pending_timers(), 0);
}

// =============================================================
// Cancellation
// =============================================================

#[tokio::test(start_paused = true)]
async fn stopping_mid_spin_cancels_completion() {
    let counts = Counts::default();
    let mut host = host(generate(4), 1, &counts);
    start(&mut host).await;
    assert_eq!(host.pending_timers(), 1);

    host.set_spinning(false);
    assert_eq!(host.pending_timers(), 0);
    tokio::time::sleep(SPIN * 2).await;
    assert!(!host.step().await);
    assert_eq!(counts.completes.get(), 0);
    assert_eq!(host.roulette().phase(), SpinPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn retrigger_during_reset_runs_a_single_spin() {
    let counts = Counts::default();
    let mut host = host(generate(4), 3, &counts);
    host.set_spinning(true);
    host.set_spinning(false);
    host.set_spinning(true);
    while host.step().await {}
    assert_eq!(counts.starts.get(), 2);
    assert_eq!(counts.completes.get(), 1);
    assert_eq!(host.roulette().phase(), SpinPhase::Settled);
}

#[tokio::test(start_paused = true)]
async fn teardown_mid_spin_is_silent() {
    let counts = Counts::default();
    let mut host = host(generate(4), 1, &counts);
    start(&mut host).await;
    host.teardown();
    assert_eq!(host.pending_timers(), 0);
    tokio::time::sleep(SPIN * 2).await;
    assert!(!host.step().await);
    assert_eq!(counts.completes.get(), 0);
    assert!(host.roulette().spinner().is_torn_down());
}

#[tokio::test(start_paused = true)]
async fn run_spin_after_teardown_returns_none() {
    let counts = Counts::default();
    let mut host = host(generate(4), 1, &counts);
    host.teardown();
    assert!(host.run_spin().await.is_none());
    assert_eq!(counts.starts.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_host_mid_spin_never_completes() {
    let counts = Counts::default();
    let mut host = host(generate(4), 1, &counts);
    start(&mut host).await;
    drop(host);
    tokio::time::sleep(SPIN * 2).await;
    assert_eq!(counts.completes.get(), 0);
}
