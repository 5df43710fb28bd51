use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate by sleeping out the remainder of each frame.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1.0 / max_fps),
            frame_timer: Instant::now(),
        }
    }

    pub fn delay(&mut self) {
        let elapsed = self.frame_timer.elapsed();
        if self.target_frametime > elapsed {
            sleep(self.target_frametime - elapsed);
        }
        self.frame_timer = Instant::now();
    }
}
