//! Frame pacing and FPS measurement for real-time runs.

use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and optional frame limiting.
///
/// Used by the driver to pace real-time runs; the engine itself only ever
/// sees the resulting delta time.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Seconds elapsed between the two most recent `end_frame` calls
    last_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            last_delta: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Returns true if enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left before the next frame is due (zero when already due).
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after a frame to update timing. Returns the frame's delta time
    /// in seconds.
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        self.last_delta = frame_time;
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Delta time of the most recent frame in seconds.
    #[must_use]
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
