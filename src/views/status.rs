use std::time::{Duration, Instant};

use crate::models::Severity;

/// The status region under the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegion {
    pub text: String,
    pub severity: Option<Severity>,
    pub visible: bool,
}

impl StatusRegion {
    pub fn class_name(&self) -> String {
        match self.severity {
            Some(severity) => format!("message {}", severity.as_str()),
            None => "message".to_string(),
        }
    }
}

pub struct FeedbackPresenter {
    region: StatusRegion,
    hide_after: Duration,
    hide_at: Option<Instant>,
    scroll_pending: bool,
}

impl FeedbackPresenter {
    pub fn new(hide_after: Duration) -> Self {
        Self {
            region: StatusRegion::default(),
            hide_after,
            hide_at: None,
            scroll_pending: false,
        }
    }

    pub fn show(&mut self, message: &str, severity: Severity) {
        self.show_at(message, severity, Instant::now());
    }

    /// Replace the region content and make it visible.
    ///
    /// Any pending auto-hide is cancelled; only a success message arms a new one.
    pub fn show_at(&mut self, message: &str, severity: Severity, now: Instant) {
        self.region.text = message.to_string();
        self.region.severity = Some(severity);
        self.region.visible = true;
        self.scroll_pending = true;

        self.hide_at = match severity {
            Severity::Success => Some(now + self.hide_after),
            _ => None,
        };

        tracing::debug!("Status [{}]: {message}", severity.as_str());
    }

    /// Fire the auto-hide if its deadline has passed. Returns true if the region was hidden.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                self.region.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Consume the scroll-into-view request raised by the last `show`.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    pub fn region(&self) -> &StatusRegion {
        &self.region
    }
}
