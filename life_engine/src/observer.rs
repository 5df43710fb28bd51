/// Capability through which the engine reports per-cell display updates.
///
/// Called synchronously from `Engine::toggle_cell` and from the generational
/// tick. Coordinates are always inside the grid; the method cannot fail.
pub trait CellObserver {
    fn on_cell_changed(&mut self, row: usize, col: usize, alive: bool);
}

impl<F: FnMut(usize, usize, bool)> CellObserver for F {
    fn on_cell_changed(&mut self, row: usize, col: usize, alive: bool) {
        self(row, col, alive)
    }
}
