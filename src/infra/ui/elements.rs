//! In-memory stand-ins for the progress-bar and elapsed-time elements of the host page.
//!
//! Handles are cheap clones sharing one element. Whoever created the elements passes
//! them to [`ElementProgressRenderer`]; nothing is looked up globally.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use crate::domain::{
    traits::ProgressRenderer,
    value_objects::{ElapsedTime, ProgressPercent},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressBarElement {
    pub text: String,
    pub width: String,
    pub aria_valuenow: i64,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElapsedTimeElement {
    pub text: String,
    pub updated_at: Option<i64>,
}

#[derive(Clone, Default)]
pub struct ProgressBarHandle {
    inner: Arc<Mutex<ProgressBarElement>>,
}

impl ProgressBarHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ProgressBarElement {
        self.inner.lock().clone()
    }

    fn apply(&self, progress: ProgressPercent, at: i64) {
        let label = progress.to_string();
        let mut element = self.inner.lock();
        element.text = label.clone();
        element.width = label;
        element.aria_valuenow = progress.0;
        element.updated_at = Some(at);
    }
}

#[derive(Clone, Default)]
pub struct ElapsedTimeHandle {
    inner: Arc<Mutex<ElapsedTimeElement>>,
}

impl ElapsedTimeHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ElapsedTimeElement {
        self.inner.lock().clone()
    }

    fn apply(&self, elapsed: &ElapsedTime, at: i64) {
        let mut element = self.inner.lock();
        element.text = elapsed.as_str().to_string();
        element.updated_at = Some(at);
    }
}

#[derive(Clone)]
pub struct ElementProgressRenderer {
    bar: ProgressBarHandle,
    elapsed: ElapsedTimeHandle,
}

impl ElementProgressRenderer {
    pub fn new(bar: ProgressBarHandle, elapsed: ElapsedTimeHandle) -> Self {
        Self { bar, elapsed }
    }

    pub fn bar(&self) -> &ProgressBarHandle {
        &self.bar
    }

    pub fn elapsed(&self) -> &ElapsedTimeHandle {
        &self.elapsed
    }
}

impl ProgressRenderer for ElementProgressRenderer {
    fn render(&self, progress: ProgressPercent, elapsed: &ElapsedTime) {
        let at = current_time_ms();
        self.bar.apply(progress, at);
        self.elapsed.apply(elapsed, at);
    }
}

fn current_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ElementProgressRenderer {
        ElementProgressRenderer::new(ProgressBarHandle::new(), ElapsedTimeHandle::new())
    }

    fn visible(r: &ElementProgressRenderer) -> (String, String, i64, String) {
        let bar = r.bar().snapshot();
        (bar.text, bar.width, bar.aria_valuenow, r.elapsed().snapshot().text)
    }

    #[test]
    fn render_sets_all_four_attributes() {
        let r = renderer();
        r.render(ProgressPercent(25), &ElapsedTime::from("12.0s"));
        assert_eq!(
            visible(&r),
            ("25%".to_string(), "25%".to_string(), 25, "12.0s".to_string())
        );
        assert!(r.bar().snapshot().updated_at.is_some());
    }

    #[test]
    fn render_is_idempotent() {
        let r = renderer();
        r.render(ProgressPercent(50), &ElapsedTime::from("10s"));
        let first = visible(&r);
        r.render(ProgressPercent(50), &ElapsedTime::from("10s"));
        assert_eq!(visible(&r), first);
    }

    #[test]
    fn boundaries_and_out_of_range_pass_through() {
        let r = renderer();
        r.render(ProgressPercent(0), &ElapsedTime::from("0s"));
        assert_eq!(visible(&r), ("0%".to_string(), "0%".to_string(), 0, "0s".to_string()));

        r.render(ProgressPercent(100), &ElapsedTime::from("60s"));
        assert_eq!(visible(&r), ("100%".to_string(), "100%".to_string(), 100, "60s".to_string()));

        r.render(ProgressPercent(150), &ElapsedTime::from("61s"));
        assert_eq!(visible(&r), ("150%".to_string(), "150%".to_string(), 150, "61s".to_string()));
    }

    #[test]
    fn cloned_handles_share_the_element() {
        let bar = ProgressBarHandle::new();
        let r = ElementProgressRenderer::new(bar.clone(), ElapsedTimeHandle::new());
        r.render(ProgressPercent(7), &ElapsedTime::from("1s"));
        assert_eq!(bar.snapshot().aria_valuenow, 7);
    }
}
