//! # Frame Statistics
//!
//! Per-frame render counters plus a rolling frame-time average that is
//! written to the log at a fixed interval.
//!
//! ## Usage
//!
//! ```rust
//! use planes3d::performance::{FrameStats, StatsConfig};
//!
//! let mut stats = FrameStats::new(StatsConfig::default());
//!
//! // In your main loop
//! stats.begin_frame();
//! stats.record_draw(12);
//! stats.end_frame(1.0 / 60.0);
//! assert_eq!(stats.draw_calls(), 1);
//! ```

use std::collections::VecDeque;

/// Reporting settings for [`FrameStats`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsConfig {
    /// Seconds between log reports
    pub report_interval: f32,
    /// Number of frame times kept for the rolling average
    pub max_samples: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            report_interval: 1.0,
            max_samples: 120, // ~2 seconds at 60fps
        }
    }
}

impl StatsConfig {
    pub fn with_report_interval(mut self, seconds: f32) -> Self {
        self.report_interval = seconds;
        self
    }
}

/// Snapshot of the counters that get logged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameMetrics {
    pub draw_calls: u32,
    pub triangles: u32,
    /// Bytes of texture data living on the device
    pub texture_memory: usize,
    /// Average frame time in milliseconds
    pub frame_time_ms: f32,
    pub fps: f32,
}

/// Render counters for the current frame plus rolling timing.
#[derive(Debug, Clone)]
pub struct FrameStats {
    config: StatsConfig,
    current: FrameMetrics,
    frame_times: VecDeque<f32>,
    until_report: f32,
    reports: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(StatsConfig::default())
    }
}

impl FrameStats {
    pub fn new(config: StatsConfig) -> Self {
        Self {
            config,
            current: FrameMetrics::default(),
            frame_times: VecDeque::with_capacity(config.max_samples),
            until_report: config.report_interval,
            reports: 0,
        }
    }

    /// Resets the per-frame counters. Texture memory carries over.
    pub fn begin_frame(&mut self) {
        self.current.draw_calls = 0;
        self.current.triangles = 0;
    }

    pub fn record_draw(&mut self, triangles: u32) {
        self.current.draw_calls += 1;
        self.current.triangles += triangles;
    }

    pub fn add_texture_memory(&mut self, bytes: usize) {
        self.current.texture_memory += bytes;
    }

    /// Folds the frame time in and logs a report once the interval has run out.
    pub fn end_frame(&mut self, delta_time: f32) {
        if self.frame_times.len() >= self.config.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(delta_time);

        let average = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        self.current.frame_time_ms = average * 1000.0;
        self.current.fps = if average > 0.0 { 1.0 / average } else { 0.0 };

        self.until_report -= delta_time;
        if self.until_report <= 0.0 {
            log::info!(
                "DrawCalls: {}, Triangle count: {}, Texture memory: {} bytes, Frame time: {:.2}ms ({:.1} fps)",
                self.current.draw_calls,
                self.current.triangles,
                self.current.texture_memory,
                self.current.frame_time_ms,
                self.current.fps
            );
            self.until_report = self.config.report_interval;
            self.reports += 1;
        }
    }

    pub fn metrics(&self) -> FrameMetrics {
        self.current
    }

    pub fn draw_calls(&self) -> u32 {
        self.current.draw_calls
    }

    pub fn triangles(&self) -> u32 {
        self.current.triangles
    }

    /// Number of reports written so far.
    pub fn reports(&self) -> u32 {
        self.reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_frame_resets_counters_but_not_memory() {
        let mut stats = FrameStats::default();
        stats.add_texture_memory(2048);
        stats.record_draw(4);
        stats.record_draw(6);
        assert_eq!(stats.draw_calls(), 2);
        assert_eq!(stats.triangles(), 10);

        stats.begin_frame();
        assert_eq!(stats.draw_calls(), 0);
        assert_eq!(stats.triangles(), 0);
        assert_eq!(stats.metrics().texture_memory, 2048);
    }

    #[test]
    fn test_reports_once_per_interval() {
        let mut stats = FrameStats::new(StatsConfig::default().with_report_interval(0.5));
        for _ in 0..10 {
            stats.end_frame(0.125);
        }
        assert_eq!(stats.reports(), 2);
    }

    #[test]
    fn test_rolling_average() {
        let mut stats = FrameStats::new(StatsConfig {
            report_interval: 100.0,
            max_samples: 2,
        });
        stats.end_frame(1.0);
        stats.end_frame(0.02);
        stats.end_frame(0.02);
        assert!((stats.metrics().frame_time_ms - 20.0).abs() < 1e-3);
        assert!((stats.metrics().fps - 50.0).abs() < 1e-2);
    }
}
