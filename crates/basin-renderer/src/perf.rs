//! Frame timing for the optional FPS log.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_SAMPLES: usize = 120;

/// Rolling window of presented frame durations.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
    last_report: Instant,
    max_samples: usize,
    total_frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_SAMPLES)
    }

    /// Timer averaging over the last `max_samples` frames (at least one).
    pub fn with_window(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            last_frame: None,
            last_report: Instant::now(),
            max_samples,
            total_frames: 0,
        }
    }

    /// Record the start of a new frame. The first call only sets the origin.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        self.total_frames += 1;
        if let Some(last) = self.last_frame.replace(now) {
            self.frame_times.push_back(now - last);
            if self.frame_times.len() > self.max_samples {
                self.frame_times.pop_front();
            }
        }
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.total_secs() / self.frame_times.len() as f64 * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// True at most once per `interval`; resets the interval when it fires.
    pub fn report_due(&mut self, interval: Duration) -> bool {
        if self.last_report.elapsed() >= interval {
            self.last_report = Instant::now();
            true
        } else {
            false
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
