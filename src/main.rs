mod anim;
mod config;
mod engine;
mod gate;
mod sched;
mod scroll;
mod sections;
mod stage;

use anyhow::Result;
use config::Config;
use engine::Engine;
use log::{info, warn};
use rand::Rng;
use sections::{scroll_move, zoom_jump, zoom_scrub};
use stage::{Rect, Stage};

const FPS: f32 = 60.0;
const SESSION_SECONDS: f32 = 12.0;

/// The demo page: three stacked sections over a 3000px document.
fn build_demo_stage() -> Stage {
    let mut stage = Stage::new();

    let zoom = stage.register("#zoom", None, Rect::new(0.0, 1200.0));
    stage.register("#zoomTarget", Some(zoom), Rect::new(300.0, 400.0));
    stage.register(".scroll-track", Some(zoom), Rect::new(0.0, 1200.0));

    let mv = stage.register("#scroll-move", None, Rect::new(1200.0, 800.0));
    stage.register("#moveLeft", Some(mv), Rect::new(1400.0, 200.0));
    stage.register("#moveRight", Some(mv), Rect::new(1400.0, 200.0));

    let jump = stage.register("#zoom2", None, Rect::new(2000.0, 1000.0));
    stage.register("#zoom2Cat", Some(jump), Rect::new(2300.0, 300.0));

    stage
}

/// Scripted session: ease down into the page, back up a little short of
/// the end, then commit and scroll through to the bottom.
fn scripted_scroll(t: f32) -> f32 {
    fn seg(t: f32, t0: f32, t1: f32, from: f32, to: f32) -> f32 {
        from + (to - from) * anim::ease_in_out(((t - t0) / (t1 - t0)).clamp(0.0, 1.0))
    }
    if t < 5.0 {
        seg(t, 0.0, 5.0, 0.0, 2200.0)
    } else if t < 6.5 {
        seg(t, 5.0, 6.5, 2200.0, 1600.0)
    } else {
        seg(t, 6.5, SESSION_SECONDS, 1600.0, 3000.0)
    }
}

fn log_transforms(engine: &Engine, t: f32, scroll: f32) {
    for sel in ["#zoomTarget", "#moveLeft", "#moveRight", "#zoom2Cat"] {
        if let Some(id) = engine.stage.query(sel) {
            let tf = engine.stage.transform(id);
            info!(
                "t={:5.2}s scroll={:6.1} {:<12} scale={:.2} x={:+6.1} y={:+6.1}",
                t, scroll, sel, tf.scale, tf.x, tf.y
            );
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting scrollkit demo session");

    let config = Config::load().unwrap_or_default();
    let viewport = config.viewport_height;

    let mut stage = build_demo_stage();

    // Each section initializes independently; a missing element skips
    // that section only.
    let sections: Vec<_> = [
        zoom_scrub::init(&mut stage, &config.zoom, viewport),
        scroll_move::init(&mut stage, &config.scroll_move, viewport),
        zoom_jump::init(&mut stage, &config.jump, viewport),
    ]
    .into_iter()
    .flatten()
    .collect();

    if sections.is_empty() {
        warn!("No sections initialized, nothing to animate.");
        return Ok(());
    }

    let mut engine = Engine::new(stage, viewport);
    for section in sections {
        engine.add_section(section);
    }

    // Force an initial refresh so gates baseline against the load
    // position before any scrolling is delivered.
    engine.set_scroll(0.0);
    engine.refresh();

    let dt = 1.0 / FPS;
    let frames = (SESSION_SECONDS * FPS) as u32;
    let mut rng = rand::thread_rng();

    for frame in 0..frames {
        let t = frame as f32 * dt;
        let jitter: f32 = rng.gen_range(-2.0..2.0);
        let scroll = (scripted_scroll(t) + jitter).max(0.0);
        engine.tick(dt, scroll);

        if frame % 30 == 0 {
            log_transforms(&engine, t, scroll);
        }
    }

    log_transforms(&engine, SESSION_SECONDS, 3000.0);
    info!("Session complete after {} frames", frames);
    Ok(())
}
