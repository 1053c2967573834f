use super::{Binding, Section};
use crate::config::ZoomTuning;
use crate::scroll::{RangeSpec, ScrollTracker};
use crate::stage::Stage;
use log::warn;

/// Zoom while scrolling: scroll position continuously drives the scale.
/// The trigger range is the scroll track inside `#zoom`, not the section
/// itself, so a neighboring section's track can't interfere.
pub fn init(stage: &mut Stage, tuning: &ZoomTuning, viewport_height: f32) -> Option<Section> {
    let section = stage.query("#zoom");
    let target = stage.query("#zoomTarget");
    let (section, target) = match (section, target) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            warn!("Zoom scrub elements not found (#zoom, #zoomTarget). Skipping zoom scrub.");
            return None;
        }
    };

    let track = match stage.query_within(section, ".scroll-track") {
        Some(t) => t,
        None => {
            warn!("Zoom scrub .scroll-track not found inside #zoom. Skipping zoom scrub.");
            return None;
        }
    };

    // Drop any transform left over from a previous init.
    stage.clear_transform(target);

    let spec = RangeSpec::top_top_bottom_top();
    let range = spec.resolve(stage.rect(track), viewport_height);

    Some(Section {
        name: "zoom-scrub",
        trigger: track,
        spec,
        tracker: ScrollTracker::new(range),
        binding: Binding::ScrubScale {
            target,
            to_scale: tuning.scale,
        },
    })
}
