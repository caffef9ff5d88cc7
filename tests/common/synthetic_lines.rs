use curve_radius::analyzer::{Feedback, SourceRecord};
use curve_radius::Point;

/// `count` vertices on a circle of `radius` around `center`, starting at angle
/// `start` and advancing by `step` radians.
pub fn arc(center: (f64, f64), radius: f64, start: f64, step: f64, count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = start + step * i as f64;
            Point::new(center.0 + radius * t.cos(), center.1 + radius * t.sin())
        })
        .collect()
}

/// Evenly spaced vertices along the x axis.
pub fn straight_line(count: usize, spacing: f64) -> Vec<Point> {
    (0..count).map(|i| Point::new(spacing * i as f64, 0.0)).collect()
}

pub fn record(part: Vec<Point>) -> SourceRecord {
    SourceRecord::single(part)
}

/// Feedback that records everything and requests cancellation once
/// `cancel_after` records have reported progress.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub cancel_after: Option<usize>,
    pub progress: Vec<u8>,
    pub messages: Vec<String>,
}

impl RecordingFeedback {
    pub fn canceling_after(records: usize) -> Self {
        Self {
            cancel_after: Some(records),
            ..Default::default()
        }
    }
}

impl Feedback for RecordingFeedback {
    fn set_progress(&mut self, percent: u8) {
        self.progress.push(percent);
    }

    fn push_info(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn is_canceled(&self) -> bool {
        self.cancel_after
            .is_some_and(|n| self.progress.len() >= n)
    }
}
