pub mod scroll_move;
pub mod zoom_jump;
pub mod zoom_scrub;

use crate::anim::{lerp, Ease, PropSet, Sequence, TweenStep};
use crate::config::JumpTuning;
use crate::gate::TriggerGate;
use crate::scroll::{RangeSpec, ScrollTracker, SectionSample};
use crate::sched::{DeferredAction, FrameScheduler, SectionId};
use crate::stage::{ElementId, Stage};
use log::info;

/// What a section does with each progress sample.
#[derive(Debug)]
pub enum Binding {
    /// Scale follows progress directly (scrubbed).
    ScrubScale { target: ElementId, to_scale: f32 },
    /// Two elements slide apart horizontally with progress (scrubbed).
    ScrubShift {
        left: ElementId,
        right: ElementId,
        shift_x: f32,
    },
    /// One-shot time-based animation, gated on genuine forward scroll.
    Jump(JumpBinding),
}

#[derive(Debug)]
pub struct JumpBinding {
    pub target: ElementId,
    pub gate: TriggerGate,
    pub tuning: JumpTuning,
}

impl JumpBinding {
    /// Punch to the peak, then settle slightly back.
    fn fire_sequence(&self) -> Sequence {
        Sequence::new(vec![
            TweenStep {
                element: self.target,
                props: PropSet {
                    scale: Some(self.tuning.peak_scale),
                    x: Some(self.tuning.shift_x),
                    y: Some(self.tuning.shift_y),
                },
                duration: self.tuning.jump_time,
                ease: Ease::Power4Out,
            },
            TweenStep {
                element: self.target,
                props: PropSet::scale(self.tuning.settle_scale),
                duration: self.tuning.settle_time,
                ease: Ease::Power2Out,
            },
        ])
    }
}

#[derive(Debug)]
pub struct Section {
    pub name: &'static str,
    pub trigger: ElementId,
    pub spec: RangeSpec,
    pub tracker: ScrollTracker,
    pub binding: Binding,
}

impl Section {
    /// Recompute the trigger range from current geometry. A jump gate
    /// re-baselines and gets its re-arm scheduled for the next frame;
    /// any arm still pending from an earlier refresh is dropped first.
    pub fn refresh(
        &mut self,
        id: SectionId,
        stage: &Stage,
        viewport_height: f32,
        scroll_y: f32,
        sched: &mut FrameScheduler,
    ) {
        let range = self.spec.resolve(stage.rect(self.trigger), viewport_height);
        let progress = self.tracker.refresh(range, scroll_y);
        if let Binding::Jump(jump) = &mut self.binding {
            jump.gate.on_refresh(progress);
            sched.cancel_section(id);
            sched.defer(id, DeferredAction::ArmGate(id));
        }
    }

    pub fn arm(&mut self) {
        if let Binding::Jump(jump) = &mut self.binding {
            jump.gate.arm();
        }
    }

    /// Feed one scroll sample. Scrub bindings write transforms directly;
    /// a firing jump returns its sequence for the engine to play.
    pub fn on_scroll(&mut self, scroll_y: f32, stage: &mut Stage) -> Option<Sequence> {
        let SectionSample {
            progress,
            direction,
            entered: _,
        } = self.tracker.sample(scroll_y);

        match &mut self.binding {
            Binding::ScrubScale { target, to_scale } => {
                stage.transform_mut(*target).scale = lerp(1.0, *to_scale, progress);
                None
            }
            Binding::ScrubShift {
                left,
                right,
                shift_x,
            } => {
                stage.transform_mut(*left).x = -*shift_x * progress;
                stage.transform_mut(*right).x = *shift_x * progress;
                None
            }
            Binding::Jump(jump) => {
                if jump.gate.on_update(progress, direction) {
                    info!(
                        "{}: jump triggered at progress {:.2} on {}",
                        self.name,
                        progress,
                        stage.selector(jump.target)
                    );
                    Some(jump.fire_sequence())
                } else {
                    None
                }
            }
        }
    }
}
