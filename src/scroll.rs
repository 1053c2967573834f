//! Scroll tracking: trigger ranges resolved from document geometry, and
//! per-section progress/direction samples derived from the raw scroll
//! offset.

use crate::stage::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Which edge of the trigger element lines up with which viewport line.
/// `Anchor::Top` paired with `Anchor::Top` is the original "top top".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
}

impl Anchor {
    fn element_edge(self, rect: Rect) -> f32 {
        match self {
            Anchor::Top => rect.top,
            Anchor::Center => rect.top + rect.height * 0.5,
            Anchor::Bottom => rect.bottom(),
        }
    }

    fn viewport_line(self, viewport_height: f32) -> f32 {
        match self {
            Anchor::Top => 0.0,
            Anchor::Center => viewport_height * 0.5,
            Anchor::Bottom => viewport_height,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RangeSpec {
    pub start: (Anchor, Anchor),
    pub end: (Anchor, Anchor),
}

impl RangeSpec {
    /// "top top" -> "bottom top": the range most triggers here use.
    pub fn top_top_bottom_top() -> Self {
        Self {
            start: (Anchor::Top, Anchor::Top),
            end: (Anchor::Bottom, Anchor::Top),
        }
    }

    /// "top center" -> "bottom center".
    pub fn top_center_bottom_center() -> Self {
        Self {
            start: (Anchor::Top, Anchor::Center),
            end: (Anchor::Bottom, Anchor::Center),
        }
    }

    pub fn resolve(&self, trigger: Rect, viewport_height: f32) -> TriggerRange {
        let start =
            self.start.0.element_edge(trigger) - self.start.1.viewport_line(viewport_height);
        let end = self.end.0.element_edge(trigger) - self.end.1.viewport_line(viewport_height);
        TriggerRange { start, end }
    }
}

/// Scroll offsets (document px) at which progress is 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRange {
    pub start: f32,
    pub end: f32,
}

impl TriggerRange {
    pub fn progress(&self, scroll_y: f32) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            // Degenerate geometry: step from 0 to 1 at the start line.
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionSample {
    pub progress: f32,
    pub direction: Direction,
    /// Progress crossed from 0 into the range while moving forward. The
    /// simple threshold-crossing trigger variant keys off this.
    pub entered: bool,
}

#[derive(Debug)]
pub struct ScrollTracker {
    range: TriggerRange,
    last_scroll: Option<f32>,
    last_progress: f32,
    direction: Direction,
}

impl ScrollTracker {
    pub fn new(range: TriggerRange) -> Self {
        Self {
            range,
            last_scroll: None,
            last_progress: 0.0,
            direction: Direction::Forward,
        }
    }

    /// Re-resolve against new geometry and report the progress at the
    /// current offset, so gates can re-baseline.
    pub fn refresh(&mut self, range: TriggerRange, scroll_y: f32) -> f32 {
        self.range = range;
        let p = range.progress(scroll_y);
        self.last_scroll = Some(scroll_y);
        self.last_progress = p;
        p
    }

    pub fn sample(&mut self, scroll_y: f32) -> SectionSample {
        // Direction only flips on actual movement.
        if let Some(last) = self.last_scroll {
            if scroll_y > last {
                self.direction = Direction::Forward;
            } else if scroll_y < last {
                self.direction = Direction::Backward;
            }
        }
        let progress = self.range.progress(scroll_y);
        let entered =
            self.last_progress <= 0.0 && progress > 0.0 && self.direction == Direction::Forward;

        self.last_scroll = Some(scroll_y);
        self.last_progress = progress;

        SectionSample {
            progress,
            direction: self.direction,
            entered,
        }
    }
}
