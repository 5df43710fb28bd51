use super::{App, Config};
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, Image, RichText, Stroke, TextureOptions, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        let text = if self.engine.is_running() {
            "Stop"
        } else {
            "Start"
        };
        if ui.add(Self::new_button(text)).clicked() {
            self.toggle_running();
        }

        ui.label(Self::new_text("Click cells to toggle them."));
        ui.label(Self::new_text("Space starts and stops the clock."));
    }

    fn draw_board(&mut self, ui: &mut Ui, size_px: f32) {
        let pixels: Vec<_> = self
            .board
            .borrow()
            .iter()
            .map(|&alive| {
                if alive {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                }
            })
            .collect();
        let ci = ColorImage {
            size: [Config::BOARD_WIDTH, Config::BOARD_HEIGHT],
            pixels,
        };
        // one texel per cell, scaled up without smoothing
        self.texture.set(ci, TextureOptions::NEAREST);

        let source = SizedTexture::new(self.texture.id(), Vec2::splat(size_px));
        let response = ui.add(Image::from_texture(source));
        self.board_rect.replace(response.rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let aw = ui.available_width();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN);
        ui.horizontal(|ui| {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_controls(ui);
                });

                // to adjust the bounds
                ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
            });

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                self.draw_board(ui, size_px);
            });
        });
    }
}
