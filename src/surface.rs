use crate::cell::Cell;

/// Something the engine draws onto.
///
/// The engine calls [`Surface::draw`] once for every cell of the current generation, in
/// row-major order, before that generation is replaced, and [`Surface::present`] once the
/// whole grid has been drawn. Surfaces only paint; they have no way back into the engine.
pub trait Surface {
    fn draw(&mut self, cell: Cell);

    /// End of a frame. Nothing to do for most surfaces.
    fn present(&mut self) {}
}

impl<F> Surface for F
where
    F: FnMut(Cell),
{
    fn draw(&mut self, cell: Cell) {
        self(cell)
    }
}
