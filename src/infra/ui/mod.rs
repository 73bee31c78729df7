use std::sync::Arc;

use crate::domain::{
    traits::ProgressRenderer,
    value_objects::{ElapsedTime, ProgressPercent},
};

pub mod alert;
pub mod elements;
pub mod terminal;

pub use alert::ConsoleAlerter;
pub use elements::{ElapsedTimeHandle, ElementProgressRenderer, ProgressBarHandle};
pub use terminal::TerminalProgressRenderer;

/// Forwards every render to each inner renderer, in order.
#[derive(Clone, Default)]
pub struct FanOutRenderer {
    targets: Vec<Arc<dyn ProgressRenderer>>,
}

impl FanOutRenderer {
    pub fn new(targets: Vec<Arc<dyn ProgressRenderer>>) -> Self {
        Self { targets }
    }

    pub fn push(&mut self, target: Arc<dyn ProgressRenderer>) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl ProgressRenderer for FanOutRenderer {
    fn render(&self, progress: ProgressPercent, elapsed: &ElapsedTime) {
        for target in &self.targets {
            target.render(progress, elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_out_reaches_every_target() {
        let first = ElementProgressRenderer::new(ProgressBarHandle::new(), ElapsedTimeHandle::new());
        let second =
            ElementProgressRenderer::new(ProgressBarHandle::new(), ElapsedTimeHandle::new());
        let mut fan_out = FanOutRenderer::default();
        assert!(fan_out.is_empty());
        fan_out.push(Arc::new(first.clone()));
        fan_out.push(Arc::new(second.clone()));
        assert_eq!(fan_out.len(), 2);

        fan_out.render(ProgressPercent(40), &ElapsedTime::from("4s"));
        assert_eq!(first.bar().snapshot().text, "40%");
        assert_eq!(second.elapsed().snapshot().text, "4s");
    }
}
