use life_engine::CellObserver;
use std::cell::RefCell;
use std::rc::Rc;

/// Displayed liveness, shared between the engine's observer and the painter.
/// Single-threaded egui, so plain `Rc<RefCell<..>>` suffices.
pub type SharedBoard = Rc<RefCell<Vec<bool>>>;

/// Observer keeping the displayed board in sync with the engine.
pub struct BoardView {
    board: SharedBoard,
    width: usize,
}

impl BoardView {
    pub fn new(board: SharedBoard, width: usize) -> Self {
        Self { board, width }
    }
}

impl CellObserver for BoardView {
    fn on_cell_changed(&mut self, row: usize, col: usize, alive: bool) {
        self.board.borrow_mut()[row * self.width + col] = alive;
    }
}
