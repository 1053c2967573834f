use super::{Binding, JumpBinding, Section};
use crate::config::JumpTuning;
use crate::gate::TriggerGate;
use crate::scroll::{RangeSpec, ScrollTracker};
use crate::stage::Stage;
use log::warn;

/// The one-shot "jump": scroll only decides WHEN it triggers, the
/// animation then plays at its own speed. The gate requires genuine
/// forward scrolling past the load-time baseline so a page that opens
/// mid-section doesn't fire on its own.
pub fn init(stage: &mut Stage, tuning: &JumpTuning, viewport_height: f32) -> Option<Section> {
    let section = stage.query("#zoom2");
    let target = stage.query("#zoom2Cat");

    let (section, target) = match (section, target) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            warn!("Zoom2 elements not found (#zoom2, #zoom2Cat). Skipping zoom jump.");
            return None;
        }
    };

    // Far-away starting pose, applied immediately.
    let tf = stage.transform_mut(target);
    tf.scale = tuning.start_scale;
    tf.x = 0.0;
    tf.y = 0.0;

    let spec = RangeSpec::top_top_bottom_top();
    let range = spec.resolve(stage.rect(section), viewport_height);

    Some(Section {
        name: "zoom-jump",
        trigger: section,
        spec,
        tracker: ScrollTracker::new(range),
        binding: Binding::Jump(JumpBinding {
            target,
            gate: TriggerGate::new(tuning.trigger_progress, tuning.forward_margin),
            tuning: tuning.clone(),
        }),
    })
}
