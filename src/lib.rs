pub mod camera;
pub mod canvas;
pub mod cell;
pub mod color;
pub mod config;
pub mod engine;
pub mod grid;
pub mod rule_set;
pub mod surface;
pub mod term;
pub mod ticker;

pub use crate::cell::Cell;
pub use crate::config::Config;
pub use crate::engine::LifeEngine;
pub use crate::grid::Grid;
pub use crate::surface::Surface;
pub use crate::ticker::Ticker;

use crate::config::ConfigError;

/// Row or column index into a [`Grid`]
pub type GridIndex = usize;

/// Signed row or column offset. Used for neighbour lookups that may fall off the grid.
pub type GridOffset = isize;

/// Build an engine for `config` and start its generation loop right away.
///
/// The returned [`Ticker`] owns the loop; cancel or drop it to stop.
pub fn start<S>(config: Config, surface: S) -> Result<Ticker, ConfigError>
where
    S: Surface + Send + 'static,
{
    let engine = LifeEngine::new(config)?;

    Ok(Ticker::spawn(engine, surface))
}
