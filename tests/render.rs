use conway::Config;
use conway::Grid;
use conway::LifeEngine;
use conway::camera::Camera;
use conway::canvas::Canvas;

fn blinker() -> Grid {
    Grid::with_live_cells(4, &[(0, 1), (1, 1), (2, 1)])
}

#[test]
fn camera_shows_each_generation() {
    let mut engine = LifeEngine::with_grid(Config::default(), blinker()).unwrap();
    let mut cam = Camera::for_grid(4);

    engine.advance_generation(&mut cam);
    insta::assert_snapshot!(cam.frame().trim_end(), @"⠸⠀");

    engine.advance_generation(&mut cam);
    insta::assert_snapshot!(cam.frame().trim_end(), @"⠒⠂");
}

#[test]
fn canvas_follows_the_grid() {
    let config = Config::default().with_canvas_size(40);
    let mut engine = LifeEngine::with_grid(config, blinker()).unwrap();
    let mut canvas = Canvas::new(engine.config());

    assert!(!canvas.is_attached());
    engine.advance_generation(&mut canvas);
    assert!(canvas.is_attached());

    let config = engine.config().clone();
    let s = canvas.cell_size();
    assert_eq!(s, 10);

    // centre pixel of each cell
    let at = |row: u32, col: u32| canvas.pixel(col * s + s / 2, row * s + s / 2);

    for (row, col) in [(0, 1), (1, 1), (2, 1)] {
        assert_eq!(at(row, col), Some(config.live_color));
    }
    assert_eq!(at(1, 0), Some(config.dead_color));
    assert_eq!(at(3, 3), Some(config.dead_color));

    // grid line on the top edge of cell (2, 2)
    assert_eq!(canvas.pixel(2 * s + 4, 2 * s), Some(config.line_color));
}
