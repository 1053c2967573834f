use crate::scroll::Direction;
use log::debug;

/// One-shot gate deciding when a scroll-triggered animation fires.
///
/// A refresh records the progress the section was measured at and
/// disarms the gate; the owner re-arms it one frame later. Firing then
/// requires forward movement past the recorded baseline, so a page that
/// loads already deep inside the section does not fire without genuine
/// scrolling.
#[derive(Debug, Clone)]
pub struct TriggerGate {
    baseline: f32,
    armed: bool,
    fired: bool,
    threshold: f32,
    forward_margin: f32,
}

impl TriggerGate {
    pub const DEFAULT_THRESHOLD: f32 = 0.35;
    pub const DEFAULT_FORWARD_MARGIN: f32 = 0.02;

    pub fn new(threshold: f32, forward_margin: f32) -> Self {
        Self {
            baseline: 0.0,
            armed: false,
            fired: false,
            threshold,
            forward_margin,
        }
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    pub fn armed(&self) -> bool {
        self.armed
    }

    pub fn on_refresh(&mut self, progress: f32) {
        self.baseline = progress;
        self.armed = false;
        debug!("gate refreshed, baseline {:.3}", progress);
    }

    /// Scheduled by the owner for the frame after a refresh.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Returns true exactly once, when all fire conditions hold.
    pub fn on_update(&mut self, progress: f32, direction: Direction) -> bool {
        if self.fired || !self.armed {
            return false;
        }
        let moved_forward = direction == Direction::Forward;
        let progressed_past_start = progress > self.baseline + self.forward_margin;
        if moved_forward && progressed_past_start && progress >= self.threshold {
            self.fired = true;
            debug!("gate fired at progress {:.3}", progress);
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.fired = false;
        self.armed = false;
    }
}

impl Default for TriggerGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_FORWARD_MARGIN)
    }
}
