use super::{Binding, Section};
use crate::config::MoveTuning;
use crate::scroll::{RangeSpec, ScrollTracker};
use crate::stage::Stage;
use log::warn;

/// Extra horizontal motion synced to scroll through the section: the
/// left element slides out to the left, the right one to the right.
pub fn init(stage: &mut Stage, tuning: &MoveTuning, viewport_height: f32) -> Option<Section> {
    let section = stage.query("#scroll-move");
    let left = stage.query("#moveLeft");
    let right = stage.query("#moveRight");

    let (section, left, right) = match (section, left, right) {
        (Some(s), Some(l), Some(r)) => (s, l, r),
        _ => {
            warn!(
                "Scroll-move elements not found (#scroll-move, #moveLeft, #moveRight). Skipping scroll move."
            );
            return None;
        }
    };

    stage.clear_transform(left);
    stage.clear_transform(right);

    let spec = RangeSpec::top_center_bottom_center();
    let range = spec.resolve(stage.rect(section), viewport_height);

    Some(Section {
        name: "scroll-move",
        trigger: section,
        spec,
        tracker: ScrollTracker::new(range),
        binding: Binding::ScrubShift {
            left,
            right,
            shift_x: tuning.shift_x,
        },
    })
}
