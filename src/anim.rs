use crate::stage::{ElementId, Stage, Transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power4Out,
    InOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power4Out => {
                let u = 1.0 - t;
                1.0 - u * u * u * u
            }
            Ease::InOut => ease_in_out(t),
        }
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Debug, Clone)]
pub struct Timeline {
    pub start_time: f32,
    pub duration: f32,
    pub current_time: f32,
}

impl Timeline {
    pub fn new(duration: f32) -> Self {
        Self {
            start_time: 0.0,
            duration,
            current_time: 0.0,
        }
    }

    pub fn start(&mut self, now: f32) {
        self.start_time = now;
        self.current_time = now;
    }

    pub fn update(&mut self, now: f32) {
        self.current_time = now;
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = self.current_time - self.start_time;
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Numeric targets for one tween step. Absent properties are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropSet {
    pub scale: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl PropSet {
    pub fn scale(v: f32) -> Self {
        Self {
            scale: Some(v),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct TweenStep {
    pub element: ElementId,
    pub props: PropSet,
    pub duration: f32,
    pub ease: Ease,
}

/// Steps play in order; step N+1 starts when step N completes. Start
/// values are captured from the live transform when a step begins, so a
/// sequence settles correctly even if something else moved the element.
#[derive(Debug, Clone)]
pub struct Sequence {
    steps: Vec<TweenStep>,
    current: usize,
    from: Option<Transform>,
    tl: Timeline,
}

impl Sequence {
    pub fn new(steps: Vec<TweenStep>) -> Self {
        Self {
            steps,
            current: 0,
            from: None,
            tl: Timeline::new(0.0),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.steps.len()
    }

    pub fn update(&mut self, now: f32, stage: &mut Stage) {
        while self.current < self.steps.len() {
            let step = self.steps[self.current].clone();

            let from = match self.from {
                Some(t) => t,
                None => {
                    let t = stage.transform(step.element);
                    self.from = Some(t);
                    self.tl = Timeline::new(step.duration);
                    self.tl.start(now);
                    t
                }
            };

            self.tl.update(now);
            let t = step.ease.apply(self.tl.progress());

            let tf = stage.transform_mut(step.element);
            if let Some(target) = step.props.scale {
                tf.scale = lerp(from.scale, target, t);
            }
            if let Some(target) = step.props.x {
                tf.x = lerp(from.x, target, t);
            }
            if let Some(target) = step.props.y {
                tf.y = lerp(from.y, target, t);
            }

            if !self.tl.is_complete() {
                return;
            }
            // Step done; next one starts from the transform we just wrote.
            self.current += 1;
            self.from = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Rect;

    fn stage_with_one() -> (Stage, ElementId) {
        let mut stage = Stage::new();
        let id = stage.register("#el", None, Rect::new(0.0, 100.0));
        (stage, id)
    }

    #[test]
    fn timeline_progress_clamps() {
        let mut tl = Timeline::new(2.0);
        tl.start(10.0);
        tl.update(9.0);
        assert_eq!(tl.progress(), 0.0);
        tl.update(11.0);
        assert_eq!(tl.progress(), 0.5);
        tl.update(30.0);
        assert_eq!(tl.progress(), 1.0);
        assert!(tl.is_complete());
    }

    #[test]
    fn zero_duration_timeline_is_complete() {
        let mut tl = Timeline::new(0.0);
        tl.start(5.0);
        assert!(tl.is_complete());
    }

    #[test]
    fn eases_hit_endpoints() {
        for ease in [Ease::Linear, Ease::Power2Out, Ease::Power4Out, Ease::InOut] {
            assert!(ease.apply(0.0).abs() < 1e-6);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn power4_out_front_loads_motion() {
        assert!(Ease::Power4Out.apply(0.25) > Ease::Linear.apply(0.25));
    }

    #[test]
    fn sequence_runs_steps_in_order() {
        let (mut stage, id) = stage_with_one();
        let mut seq = Sequence::new(vec![
            TweenStep {
                element: id,
                props: PropSet {
                    scale: Some(2.0),
                    x: None,
                    y: Some(-60.0),
                },
                duration: 1.0,
                ease: Ease::Linear,
            },
            TweenStep {
                element: id,
                props: PropSet::scale(1.5),
                duration: 1.0,
                ease: Ease::Linear,
            },
        ]);

        seq.update(0.0, &mut stage);
        seq.update(0.5, &mut stage);
        let tf = stage.transform(id);
        assert!((tf.scale - 1.5).abs() < 1e-5);
        assert!((tf.y - -30.0).abs() < 1e-4);
        assert!(!seq.is_complete());

        // First step finishes, second starts from its end state.
        seq.update(1.0, &mut stage);
        assert!((stage.transform(id).scale - 2.0).abs() < 1e-5);

        seq.update(2.0, &mut stage);
        let tf = stage.transform(id);
        assert!((tf.scale - 1.5).abs() < 1e-5);
        assert!((tf.y - -60.0).abs() < 1e-4);
        assert!(seq.is_complete());
    }

    #[test]
    fn sequence_leaves_untargeted_props_alone() {
        let (mut stage, id) = stage_with_one();
        stage.transform_mut(id).x = 42.0;
        let mut seq = Sequence::new(vec![TweenStep {
            element: id,
            props: PropSet::scale(3.0),
            duration: 1.0,
            ease: Ease::Linear,
        }]);
        seq.update(0.0, &mut stage);
        seq.update(1.0, &mut stage);
        assert_eq!(stage.transform(id).x, 42.0);
        assert!((stage.transform(id).scale - 3.0).abs() < 1e-5);
    }
}
