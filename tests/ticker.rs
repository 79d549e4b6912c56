use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use conway::Cell;
use conway::Config;
use conway::Grid;
use conway::LifeEngine;
use conway::Ticker;

fn fast_config() -> Config {
    Config::default()
        .with_grid_size(8)
        .with_animation_rate(Duration::from_millis(1))
        .with_seed(3)
}

fn wait_for(ticker: &Ticker, generation: u64) {
    let deadline = Instant::now() + Duration::from_secs(10);

    while ticker.generation() < generation {
        assert!(Instant::now() < deadline, "ticker stalled at {}", ticker.generation());
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn start_runs_until_cancelled() -> anyhow::Result<()> {
    let draws = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&draws);

    let ticker = conway::start(fast_config(), move |_: Cell| {
        counted.fetch_add(1, Ordering::Relaxed);
    })?;

    wait_for(&ticker, 3);
    assert!(ticker.is_running());

    let engine = ticker.cancel()?;

    assert!(engine.generation() >= 3);
    assert_eq!(draws.load(Ordering::Relaxed) as u64, engine.generation() * 64);

    Ok(())
}

#[test]
fn generations_match_a_manual_run() -> anyhow::Result<()> {
    let mut manual = LifeEngine::new(fast_config())?;

    let ticker = Ticker::spawn(LifeEngine::new(fast_config())?, |_: Cell| {});
    wait_for(&ticker, 2);
    let ticked = ticker.cancel()?;

    manual.run(ticked.generation(), &mut |_: Cell| {});

    assert_eq!(manual.grid(), ticked.grid());

    Ok(())
}

#[test]
fn drop_stops_the_loop() -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel();
    let engine = LifeEngine::with_grid(fast_config(), Grid::dead(2))?;

    let ticker = Ticker::spawn(engine, move |cell: Cell| {
        let _ = tx.send(cell);
    });
    wait_for(&ticker, 1);
    drop(ticker);

    // The sender goes away with the loop thread, which ends the iterator
    let drawn = rx.iter().count();
    assert!(drawn >= 4);
    assert_eq!(drawn % 4, 0);

    Ok(())
}

#[test]
fn waits_animation_rate_between_generations() -> anyhow::Result<()> {
    let rate = Duration::from_millis(500);
    let config = fast_config().with_animation_rate(rate);

    let started = Instant::now();
    let ticker = Ticker::spawn(LifeEngine::new(config)?, |_: Cell| {});

    // the first generation runs right away
    wait_for(&ticker, 1);
    assert!(started.elapsed() < rate);

    thread::sleep(Duration::from_millis(100));
    assert_eq!(ticker.generation(), 1);

    // cancelling interrupts the wait instead of sitting it out
    let cancelled = Instant::now();
    let engine = ticker.cancel()?;

    assert!(cancelled.elapsed() < rate);
    assert_eq!(engine.generation(), 1);

    Ok(())
}

#[test]
fn zero_rate_runs_back_to_back() -> anyhow::Result<()> {
    let config = fast_config().with_animation_rate(Duration::ZERO);
    let ticker = conway::start(config, |_: Cell| {})?;

    wait_for(&ticker, 50);

    assert!(ticker.cancel()?.generation() >= 50);

    Ok(())
}
