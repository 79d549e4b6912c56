use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::cell::Cell;
use crate::config::Config;
use crate::config::ConfigError;
use crate::grid::Grid;
use crate::rule_set::RuleSet;
use crate::surface::Surface;

pub struct LifeEngine {
    config: Config,

    /// The current generation. Replaced wholesale by [`LifeEngine::advance_generation`].
    grid: Grid,

    /// Number of generations computed so far
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with a randomized grid.
    ///
    /// Each cell starts alive with probability `config.initial_life_probability`. Set
    /// `config.seed` to get the same grid every time.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let p = config.initial_life_probability;
        let grid = Grid::travel(config.grid_size, |cell| {
            cell.with_live(rng.gen_range(0.0f64..1.0) < p)
        });

        debug!(
            size = config.grid_size,
            population = grid.population(),
            "Seeded initial grid"
        );

        Ok(Self {
            config,
            grid,
            generation: 0,
        })
    }

    /// Create an engine starting from `grid`. The grid's side length replaces
    /// `config.grid_size`.
    pub fn with_grid(mut config: Config, grid: Grid) -> Result<Self, ConfigError> {
        config.grid_size = grid.size();
        config.validate()?;

        Ok(Self {
            config,
            grid,
            generation: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Whether `(row, col)` is alive in the current generation. Off-grid cells are dead.
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        self.grid.is_alive(row, col)
    }

    /// Draw the current generation onto `surface` and replace it with the next one.
    ///
    /// Every cell is drawn as it is *before* the update. Successors are computed from the
    /// current grid only, which stays untouched until the new grid is complete.
    pub fn advance_generation<S>(&mut self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        let current = &self.grid;
        let rule = self.config.rule;

        let next = Grid::travel(current.size(), |cell| {
            let cell = current
                .cell(cell.row, cell.col)
                .copied()
                .unwrap_or(cell);

            surface.draw(cell);

            Self::resolve_next_generation(current, &rule, cell)
        });

        self.grid = next;
        self.generation += 1;

        surface.present();

        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "Advanced"
        );
    }

    /// Advance `n` generations back to back, drawing each onto `surface`
    pub fn run<S>(&mut self, n: u64, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        for _ in 0..n {
            self.advance_generation(surface);
        }
    }

    /// What `cell` becomes in the next generation of `grid`
    fn resolve_next_generation(grid: &Grid, rule: &RuleSet, cell: Cell) -> Cell {
        let count = grid.count_neighbors(cell.row, cell.col);

        cell.with_live(rule.next(cell.live, count))
    }
}

#[cfg(test)]
mod tests {
    use super::LifeEngine;
    use crate::cell::Cell;
    use crate::config::Config;
    use crate::grid::Grid;

    fn engine(pattern: &str) -> LifeEngine {
        LifeEngine::with_grid(Config::default(), pattern.parse().unwrap()).unwrap()
    }

    #[test]
    fn lone_center_dies() {
        let mut engine = engine(
            "
            ...
            .O.
            ...
            ",
        );

        engine.advance_generation(&mut |_: Cell| {});

        assert_eq!(engine.grid(), &Grid::dead(3));
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn draws_previous_generation_in_order() {
        let mut engine = engine(
            "
            ...
            OOO
            ...
            ",
        );
        let before = engine.grid().clone();

        let mut drawn = Vec::new();
        engine.advance_generation(&mut |cell: Cell| drawn.push(cell));

        let expected: Vec<Cell> = before.cells().copied().collect();
        assert_eq!(drawn, expected);
        assert_ne!(engine.grid(), &before);
    }

    #[test]
    fn present_once_per_generation() {
        struct Counting {
            draws: usize,
            frames: usize,
        }

        impl crate::surface::Surface for Counting {
            fn draw(&mut self, _cell: Cell) {
                self.draws += 1;
            }

            fn present(&mut self) {
                self.frames += 1;
            }
        }

        let mut surface = Counting {
            draws: 0,
            frames: 0,
        };
        let config = Config::default().with_grid_size(7).with_seed(1);
        let mut engine = LifeEngine::new(config).unwrap();

        engine.run(3, &mut surface);

        assert_eq!(surface.draws, 3 * 49);
        assert_eq!(surface.frames, 3);
        assert_eq!(engine.generation(), 3);
    }

    #[test]
    fn grid_size_follows_grid() {
        let engine = engine("..\n..");

        assert_eq!(engine.config().grid_size, 2);
    }
}
