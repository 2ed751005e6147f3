use std::collections::VecDeque;

use crate::constants::FRAME_HISTORY_LEN;

/// Rolling frame-time statistics for the debug overlay.
///
/// Keeps the last `FRAME_HISTORY_LEN` frame times (milliseconds) in a fixed-capacity ring;
/// the oldest sample is dropped once full. All aggregates are over that window.
#[derive(Clone, Debug)]
pub struct FrameStats {
    history: VecDeque<f32>,
    pub current_frame_ms: f32,
    pub avg_frame_ms: f32,
    pub min_frame_ms: f32,
    pub max_frame_ms: f32,
    pub current_fps: f32,
    pub avg_fps: f32,
    /// Derived from the slowest frame in the window.
    pub min_fps: f32,
    /// Derived from the fastest frame in the window.
    pub max_fps: f32,
    pub frame_count: u64,
    /// Seconds since the last reset.
    pub total_time: f64,
    /// Collision checks in the most recent movement step.
    pub collision_checks: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            history: VecDeque::with_capacity(FRAME_HISTORY_LEN),
            current_frame_ms: 0.0,
            avg_frame_ms: 0.0,
            min_frame_ms: 0.0,
            max_frame_ms: 0.0,
            current_fps: 0.0,
            avg_fps: 0.0,
            min_fps: 0.0,
            max_fps: 0.0,
            frame_count: 0,
            total_time: 0.0,
            collision_checks: 0,
        }
    }
}

#[inline]
fn fps_from_ms(ms: f32) -> f32 {
    if ms > 0.0 { 1000.0 / ms } else { 0.0 }
}

impl FrameStats {
    /// Record one frame of `dt_seconds` and refresh every aggregate.
    pub fn record(&mut self, dt_seconds: f32) {
        let dt = dt_seconds.max(0.0);
        self.current_frame_ms = dt * 1000.0;
        self.current_fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };

        if self.history.len() == FRAME_HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(self.current_frame_ms);

        let (sum, min, max) = self
            .history
            .iter()
            .fold((0.0_f32, f32::MAX, 0.0_f32), |(sum, min, max), &ms| {
                (sum + ms, min.min(ms), max.max(ms))
            });

        self.avg_frame_ms = sum / self.history.len() as f32;
        self.min_frame_ms = min;
        self.max_frame_ms = max;
        self.avg_fps = fps_from_ms(self.avg_frame_ms);
        self.min_fps = fps_from_ms(self.max_frame_ms);
        self.max_fps = fps_from_ms(self.min_frame_ms);

        self.frame_count += 1;
        self.total_time += f64::from(dt);
    }

    /// Frame times (ms), oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.history.iter().copied()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-3;

    #[test]
    fn history_never_exceeds_capacity() {
        let mut stats = FrameStats::default();
        for i in 0..(FRAME_HISTORY_LEN * 3) {
            stats.record(0.001 * (i % 7 + 1) as f32);
            assert!(stats.history().len() <= FRAME_HISTORY_LEN);
        }
        assert_eq!(stats.history().len(), FRAME_HISTORY_LEN);
        assert_eq!(stats.frame_count, (FRAME_HISTORY_LEN * 3) as u64);
    }

    #[test]
    fn oldest_sample_is_dropped_first() {
        let mut stats = FrameStats::default();
        stats.record(0.100);
        for _ in 0..FRAME_HISTORY_LEN {
            stats.record(0.010);
        }
        // The 100ms spike has rolled out of the window.
        assert!((stats.max_frame_ms - 10.0).abs() < EPS);
        assert!(stats.history().all(|ms| (ms - 10.0).abs() < EPS));
    }

    #[test]
    fn aggregates_cover_the_window() {
        let mut stats = FrameStats::default();
        stats.record(0.010);
        stats.record(0.020);
        stats.record(0.030);

        assert!((stats.current_frame_ms - 30.0).abs() < EPS);
        assert!((stats.avg_frame_ms - 20.0).abs() < EPS);
        assert!((stats.min_frame_ms - 10.0).abs() < EPS);
        assert!((stats.max_frame_ms - 30.0).abs() < EPS);
        assert!((stats.avg_fps - 50.0).abs() < EPS);
        assert!((stats.max_fps - 100.0).abs() < 0.01);
        assert!((stats.min_fps - 1000.0 / 30.0).abs() < 0.01);
        assert!((stats.total_time - 0.060).abs() < 1.0e-6);
    }

    #[test]
    fn zero_dt_does_not_divide_by_zero() {
        let mut stats = FrameStats::default();
        stats.record(0.0);
        assert_eq!(stats.current_fps, 0.0);
        assert_eq!(stats.avg_fps, 0.0);
        assert_eq!(stats.max_fps, 0.0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut stats = FrameStats::default();
        stats.record(0.016);
        stats.collision_checks = 36;
        stats.reset();

        assert_eq!(stats.history().len(), 0);
        assert_eq!(stats.frame_count, 0);
        assert_eq!(stats.total_time, 0.0);
        assert_eq!(stats.collision_checks, 0);
    }
}
