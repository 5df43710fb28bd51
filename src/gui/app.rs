use super::{BoardView, Config, FpsLimiter, SharedBoard};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};
use life_engine::Engine;
use std::cell::RefCell;
use std::rc::Rc;

pub struct App {
    pub(super) engine: Engine<BoardView>, // Simulation core; the GUI is its observer.
    pub(super) board: SharedBoard,        // Displayed liveness, kept in sync by BoardView.
    pub(super) texture: TextureHandle,    // Texture handle of the board.
    pub(super) board_rect: Option<Rect>,  // Part of the window displaying the board.
    pub(super) fps_limiter: FpsLimiter,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        let board: SharedBoard = Rc::new(RefCell::new(vec![
            false;
            Config::BOARD_HEIGHT * Config::BOARD_WIDTH
        ]));
        let engine = Engine::new(
            Config::BOARD_HEIGHT,
            Config::BOARD_WIDTH,
            BoardView::new(board.clone(), Config::BOARD_WIDTH),
        )
        .expect("board dimensions are positive constants");

        Self {
            engine,
            board,
            texture: ctx.load_texture(
                "life board",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            board_rect: None,
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
        }
    }

    pub(super) fn toggle_running(&mut self) {
        if self.engine.is_running() {
            self.engine.stop();
        } else {
            self.engine.start();
        }
    }

    fn handle_input(&mut self, ctx: &Context, board_rect: Rect) {
        ctx.input(|input| {
            if let Some(pos) = input.pointer.interact_pos() {
                if input.pointer.primary_clicked() && board_rect.contains(pos) {
                    let p = (pos - board_rect.left_top()) / board_rect.size();
                    let row = (p.y * Config::BOARD_HEIGHT as f32).floor() as i64;
                    let col = (p.x * Config::BOARD_WIDTH as f32).floor() as i64;
                    if let Err(err) = self.engine.toggle_cell(row, col) {
                        // clicks on the rect border can round past the edge
                        log::warn!("ignoring click: {}", err);
                    }
                }
            }
            if input.key_pressed(Key::Space) {
                self.toggle_running();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                if let Some(board_rect) = self.board_rect {
                    self.handle_input(ctx, board_rect);
                }

                self.draw(ui);

                self.engine.poll();
            });

        self.fps_limiter.delay();
    }
}
