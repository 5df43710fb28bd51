use life_engine::{CellObserver, Engine, GridError};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

type Events = Rc<RefCell<Vec<(usize, usize, bool)>>>;

struct Recorder(Events);

impl CellObserver for Recorder {
    fn on_cell_changed(&mut self, row: usize, col: usize, alive: bool) {
        self.0.borrow_mut().push((row, col, alive));
    }
}

/// Engine with a zero tick interval, so every `poll` after `start` fires.
fn engine(height: usize, width: usize) -> (Engine<Recorder>, Events) {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let engine =
        Engine::with_interval(height, width, Duration::ZERO, Recorder(events.clone())).unwrap();
    (engine, events)
}

fn sorted(events: &Events) -> Vec<(usize, usize, bool)> {
    let mut sorted = events.borrow().clone();
    sorted.sort_unstable();
    sorted
}

fn seed_blinker(engine: &mut Engine<Recorder>, events: &Events) {
    for col in 1..=3 {
        engine.toggle_cell(2, col).unwrap();
    }
    events.borrow_mut().clear();
}

#[test]
fn construction_rejects_invalid_dimensions() {
    let result = Engine::new(0, 10, |_: usize, _: usize, _: bool| {});
    assert_eq!(
        result.err(),
        Some(GridError::InvalidDimensions {
            height: 0,
            width: 10
        })
    );
}

#[test]
fn manual_toggle_reports_exactly_once_per_call() {
    let (mut engine, events) = engine(4, 4);

    engine.toggle_cell(1, 2).unwrap();
    assert_eq!(events.borrow().as_slice(), &[(1, 2, true)]);

    // toggling back to dead is still a user-visible change
    engine.toggle_cell(1, 2).unwrap();
    assert_eq!(events.borrow().as_slice(), &[(1, 2, true), (1, 2, false)]);
}

#[test]
fn out_of_bounds_toggle_is_surfaced_and_not_reported() {
    let (mut engine, events) = engine(4, 4);

    for (row, col) in [(-1, 0), (4, 0)] {
        assert_eq!(
            engine.toggle_cell(row, col).unwrap_err(),
            GridError::OutOfBounds {
                row,
                col,
                height: 4,
                width: 4
            }
        );
    }
    assert!(events.borrow().is_empty());
}

#[test]
fn start_runs_an_immediate_tick_reporting_deltas_only() {
    let (mut engine, events) = engine(5, 5);
    seed_blinker(&mut engine, &events);

    engine.start();
    assert!(engine.is_running());
    assert_eq!(
        sorted(&events),
        vec![(1, 2, true), (2, 1, false), (2, 3, false), (3, 2, true)]
    );
}

#[test]
fn start_is_idempotent() {
    let (mut engine, events) = engine(5, 5);
    seed_blinker(&mut engine, &events);

    engine.start();
    let after_first_start = events.borrow().len();
    engine.start();
    assert!(engine.is_running());
    assert_eq!(events.borrow().len(), after_first_start);
}

#[test]
fn poll_advances_one_generation_per_due_tick() {
    let (mut engine, events) = engine(5, 5);
    seed_blinker(&mut engine, &events);

    engine.start();
    events.borrow_mut().clear();

    // second generation: the blinker swings back to horizontal
    engine.poll();
    assert_eq!(
        sorted(&events),
        vec![(1, 2, false), (2, 1, true), (2, 3, true), (3, 2, false)]
    );
}

#[test]
fn poll_does_nothing_before_the_interval_elapses() {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let mut engine =
        Engine::with_interval(5, 5, Duration::from_secs(3600), Recorder(events.clone())).unwrap();
    for col in 1..=3 {
        engine.toggle_cell(2, col).unwrap();
    }

    engine.start();
    events.borrow_mut().clear();
    engine.poll();
    assert!(events.borrow().is_empty());
}

#[test]
fn stop_cancels_the_pending_tick() {
    let (mut engine, events) = engine(5, 5);
    seed_blinker(&mut engine, &events);

    engine.start();
    engine.stop();
    assert!(!engine.is_running());

    events.borrow_mut().clear();
    engine.poll();
    engine.poll();
    assert!(events.borrow().is_empty());

    // stopping twice is harmless
    engine.stop();
    assert!(!engine.is_running());
}

#[test]
fn engine_is_restartable_after_stop() {
    let (mut engine, events) = engine(5, 5);
    seed_blinker(&mut engine, &events);

    engine.start(); // generation 1: vertical
    engine.stop();
    events.borrow_mut().clear();

    engine.start(); // generation 2: horizontal again
    assert!(engine.is_running());
    assert_eq!(
        sorted(&events),
        vec![(1, 2, false), (2, 1, true), (2, 3, true), (3, 2, false)]
    );
}

#[test]
fn empty_board_ticks_report_nothing() {
    let (mut engine, events) = engine(8, 8);

    engine.start();
    engine.poll();
    engine.poll();
    assert!(events.borrow().is_empty());
}

#[test]
fn closure_observers_are_supported() {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let mut engine = Engine::new(2, 2, move |row, col, alive| {
        sink.borrow_mut().push((row, col, alive));
    })
    .unwrap();

    engine.toggle_cell(0, 1).unwrap();
    assert_eq!(events.borrow().as_slice(), &[(0, 1, true)]);
}
