use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use conway::Config;
use conway::term::Event;
use conway::term::TermSurface;
use conway::term::convert_event;

/// How long to wait for a key before checking again
const INPUT_POLL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut config = Config::default();
    config
        .apply_overrides(std::env::args().skip(1))
        .context("Invalid options")?;

    info!(?config, "Starting");

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        terminal::Clear(terminal::ClearType::All),
        cursor::Hide
    )
    .context("Failed to set up terminal")?;

    let res = run(config);

    // Restore the terminal even if the loop failed
    let restored = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)
        .and_then(|()| terminal::disable_raw_mode())
        .context("Failed to restore terminal");

    res.and(restored)
}

fn run(config: Config) -> anyhow::Result<()> {
    let surface = TermSurface::new(&config, io::stdout());
    let ticker = conway::start(config, surface)?;

    loop {
        if !event::poll(INPUT_POLL).context("Failed to poll input")? {
            continue;
        }

        let event = event::read().context("Failed to read input")?;

        if let Some(Event::Exit) = convert_event(event) {
            break;
        }
    }

    let engine = ticker.cancel()?;
    info!(
        generation = engine.generation(),
        population = engine.population(),
        "Exiting"
    );

    Ok(())
}
