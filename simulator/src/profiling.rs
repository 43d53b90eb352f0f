//! Frame timing for the debug page.
//!
//! Face render counters live in the common crate (`RenderStats`); this adds
//! the wall-clock measurements that need `std::time`.

use std::time::{Duration, Instant};

use heapless::String;
use watchface_common::log_buffer::push_u32;

/// Frame timing statistics.
pub struct FrameMetrics {
    // Last frame (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,

    // Statistics
    pub render_time_max_us: u32,
    render_time_avg_us: f32,

    // Counters
    pub loop_frames: u64,
    pub face_redraws: u32,

    start_time: Instant,
}

impl FrameMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            render_time_max_us: 0,
            render_time_avg_us: 0.0,
            loop_frames: 0,
            face_redraws: 0,
            start_time: Instant::now(),
        }
    }

    /// Record one pass of the main loop.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
    ) {
        self.frame_time_us = total_time.as_micros() as u32;
        self.loop_frames += 1;
    }

    /// Record a face redraw that took `render_time`.
    pub fn record_render(
        &mut self,
        render_time: Duration,
    ) {
        let render_us = render_time.as_micros() as u32;
        self.render_time_us = render_us;
        self.render_time_max_us = self.render_time_max_us.max(render_us);

        self.render_time_avg_us = if self.face_redraws == 0 {
            render_us as f32
        } else {
            Self::EMA_ALPHA.mul_add(render_us as f32, (1.0 - Self::EMA_ALPHA) * self.render_time_avg_us)
        };
        self.face_redraws += 1;
    }

    #[inline]
    pub const fn render_time_avg_us(&self) -> u32 { self.render_time_avg_us as u32 }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> {
        let secs = self.start_time.elapsed().as_secs();
        let mut s = String::new();
        for (i, part) in [secs / 3600, (secs % 3600) / 60, secs % 60].into_iter().enumerate() {
            if i > 0 {
                s.push(':').ok();
            }
            if part < 10 {
                s.push('0').ok();
            }
            push_u32(&mut s, part as u32);
        }
        s
    }
}

impl Default for FrameMetrics {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_average() {
        let mut metrics = FrameMetrics::new();
        metrics.record_render(Duration::from_micros(1000));
        assert_eq!(metrics.render_time_avg_us(), 1000);
        metrics.record_render(Duration::from_micros(2000));
        assert!((1099..=1100).contains(&metrics.render_time_avg_us()));
        assert_eq!(metrics.render_time_max_us, 2000);
        assert_eq!(metrics.face_redraws, 2);
    }

    #[test]
    fn test_uptime_format() {
        let metrics = FrameMetrics::new();
        assert_eq!(metrics.uptime_string().as_str(), "00:00:00");
    }
}
