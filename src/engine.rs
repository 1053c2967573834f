use crate::anim::Sequence;
use crate::sched::{DeferredAction, FrameScheduler, SectionId};
use crate::sections::Section;
use crate::stage::Stage;
use log::info;

/// Owns the stage, the initialized sections, the frame scheduler, and
/// any time-based sequences currently playing. Everything runs on the
/// caller's tick; nothing here blocks.
pub struct Engine {
    pub stage: Stage,
    sections: Vec<Option<Section>>,
    sched: FrameScheduler,
    sequences: Vec<Sequence>,
    viewport_height: f32,
    scroll_y: f32,
    time: f32,
}

impl Engine {
    pub fn new(stage: Stage, viewport_height: f32) -> Self {
        Self {
            stage,
            sections: Vec::new(),
            sched: FrameScheduler::new(),
            sequences: Vec::new(),
            viewport_height,
            scroll_y: 0.0,
            time: 0.0,
        }
    }

    pub fn add_section(&mut self, section: Section) -> SectionId {
        let id = self.sections.len();
        info!("Initialized section '{}'", section.name);
        self.sections.push(Some(section));
        id
    }

    pub fn section_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_some()).count()
    }

    /// Recompute every section's trigger range from current geometry.
    /// Jump gates re-baseline and re-arm one frame later.
    pub fn refresh(&mut self) {
        for (id, slot) in self.sections.iter_mut().enumerate() {
            if let Some(section) = slot {
                section.refresh(
                    id,
                    &self.stage,
                    self.viewport_height,
                    self.scroll_y,
                    &mut self.sched,
                );
            }
        }
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.refresh();
    }

    /// Record the scroll offset without dispatching updates, the way a
    /// freshly loaded page already sits at some offset. A refresh right
    /// after baselines gates against this position.
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    /// Tear a section down, dropping any task it still has scheduled.
    pub fn remove_section(&mut self, id: SectionId) {
        self.sched.cancel_section(id);
        if let Some(slot) = self.sections.get_mut(id) {
            if let Some(section) = slot.take() {
                info!("Removed section '{}'", section.name);
            }
        }
    }

    /// One frame: run due deferred tasks, feed the scroll sample to each
    /// section, then step any playing sequences.
    pub fn tick(&mut self, dt: f32, scroll_y: f32) {
        self.time += dt;
        self.scroll_y = scroll_y;

        for action in self.sched.next_frame() {
            match action {
                DeferredAction::ArmGate(id) => {
                    if let Some(Some(section)) = self.sections.get_mut(id) {
                        section.arm();
                    }
                }
            }
        }

        for slot in &mut self.sections {
            if let Some(section) = slot {
                if let Some(seq) = section.on_scroll(scroll_y, &mut self.stage) {
                    self.sequences.push(seq);
                }
            }
        }

        let now = self.time;
        let stage = &mut self.stage;
        self.sequences.retain_mut(|seq| {
            seq.update(now, stage);
            !seq.is_complete()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sections::{scroll_move, zoom_jump, zoom_scrub};
    use crate::stage::Rect;

    const VIEWPORT: f32 = 800.0;

    fn demo_stage(with_move_elements: bool) -> Stage {
        let mut stage = Stage::new();
        let zoom = stage.register("#zoom", None, Rect::new(0.0, 1200.0));
        stage.register("#zoomTarget", Some(zoom), Rect::new(100.0, 400.0));
        stage.register(".scroll-track", Some(zoom), Rect::new(0.0, 1200.0));

        let mv = stage.register("#scroll-move", None, Rect::new(1200.0, 800.0));
        if with_move_elements {
            stage.register("#moveLeft", Some(mv), Rect::new(1200.0, 200.0));
            stage.register("#moveRight", Some(mv), Rect::new(1600.0, 200.0));
        }

        let jump = stage.register("#zoom2", None, Rect::new(2000.0, 1000.0));
        stage.register("#zoom2Cat", Some(jump), Rect::new(2200.0, 300.0));
        stage
    }

    fn build_engine(with_move_elements: bool) -> Engine {
        let config = Config::default();
        let mut stage = demo_stage(with_move_elements);
        let mut sections = Vec::new();
        for section in [
            zoom_scrub::init(&mut stage, &config.zoom, VIEWPORT),
            scroll_move::init(&mut stage, &config.scroll_move, VIEWPORT),
            zoom_jump::init(&mut stage, &config.jump, VIEWPORT),
        ]
        .into_iter()
        .flatten()
        {
            sections.push(section);
        }
        let mut engine = Engine::new(stage, VIEWPORT);
        for section in sections {
            engine.add_section(section);
        }
        engine.refresh();
        engine
    }

    #[test]
    fn missing_elements_skip_that_section_only() {
        let engine = build_engine(false);
        assert_eq!(engine.section_count(), 2);
    }

    #[test]
    fn scripted_forward_scroll_fires_jump_exactly_once() {
        let mut engine = build_engine(true);
        let cat = engine.stage.query("#zoom2Cat").unwrap();
        assert!((engine.stage.transform(cat).scale - 0.55).abs() < 1e-5);

        // Jump range is 2000..3000; threshold 0.35 sits at scroll 2350.
        let dt = 1.0 / 60.0;
        let mut scroll = 0.0;
        let mut fired_scale_seen = false;
        for _ in 0..600 {
            scroll += 8.0;
            engine.tick(dt, scroll);
            if engine.stage.transform(cat).scale > 0.56 {
                fired_scale_seen = true;
            }
        }
        assert!(fired_scale_seen);
        // Sequence finished: settled at the final scale.
        assert!((engine.stage.transform(cat).scale - 2.30).abs() < 1e-3);

        // Scrolling back and forward again must not replay the jump.
        for _ in 0..120 {
            scroll -= 20.0;
            engine.tick(dt, scroll);
        }
        for _ in 0..240 {
            scroll += 20.0;
            engine.tick(dt, scroll);
        }
        assert!((engine.stage.transform(cat).scale - 2.30).abs() < 1e-3);
    }

    #[test]
    fn loading_mid_section_needs_fresh_scroll_to_fire() {
        let mut engine = build_engine(true);
        let cat = engine.stage.query("#zoom2Cat").unwrap();

        // Page opens already past the threshold; refresh baselines there.
        engine.set_scroll(2700.0);
        engine.refresh();

        let dt = 1.0 / 60.0;
        // Sitting still, or creeping within the margin: no fire.
        engine.tick(dt, 2700.0);
        engine.tick(dt, 2710.0);
        assert!((engine.stage.transform(cat).scale - 0.55).abs() < 1e-5);

        // Genuine new forward scroll past baseline + margin: fires, and
        // the next frame shows the jump under way.
        engine.tick(dt, 2750.0);
        engine.tick(dt, 2750.0);
        assert!(engine.stage.transform(cat).scale > 0.56);
    }

    #[test]
    fn backward_crossing_never_fires() {
        let mut engine = build_engine(true);
        let cat = engine.stage.query("#zoom2Cat").unwrap();

        // Land past the jump section, then scroll up through it.
        engine.set_scroll(3500.0);
        engine.refresh();
        let dt = 1.0 / 60.0;
        let mut scroll = 3500.0;
        for _ in 0..300 {
            scroll -= 10.0;
            engine.tick(dt, scroll);
        }
        assert!((engine.stage.transform(cat).scale - 0.55).abs() < 1e-5);
    }

    #[test]
    fn refresh_tracks_relayout() {
        let mut engine = build_engine(true);
        let mv = engine.stage.query("#scroll-move").unwrap();
        let left = engine.stage.query("#moveLeft").unwrap();

        // Section grows taller; the range must follow on refresh.
        engine.stage.set_rect(mv, Rect::new(1200.0, 1600.0));
        engine.set_viewport_height(VIEWPORT);

        // New range is 800..2400, so its midpoint sits at scroll 1600.
        engine.tick(1.0 / 60.0, 1600.0);
        assert!((engine.stage.transform(left).x - -50.0).abs() < 1e-3);
    }

    #[test]
    fn removed_section_stops_receiving_updates() {
        let mut engine = build_engine(true);
        let left = engine.stage.query("#moveLeft").unwrap();
        engine.tick(1.0 / 60.0, 1600.0);
        let x_before = engine.stage.transform(left).x;
        assert!(x_before < 0.0);

        engine.remove_section(1);
        engine.tick(1.0 / 60.0, 2000.0);
        assert_eq!(engine.stage.transform(left).x, x_before);
        assert_eq!(engine.section_count(), 2);
    }
}
