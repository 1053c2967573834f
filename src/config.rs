use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,

    #[serde(default = "default_zoom")]
    pub zoom: ZoomTuning,

    #[serde(default = "default_scroll_move")]
    pub scroll_move: MoveTuning,

    #[serde(default = "default_jump")]
    pub jump: JumpTuning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomTuning {
    /// How far the target scales up by the end of the track (1.6–3.0 reads well).
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveTuning {
    /// Horizontal distance each side travels; left goes -x, right +x.
    pub shift_x: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpTuning {
    /// Smaller = farther away before the jump.
    pub start_scale: f32,
    pub peak_scale: f32,
    pub settle_scale: f32,
    pub shift_x: f32,
    pub shift_y: f32,
    pub jump_time: f32,
    pub settle_time: f32,
    /// How deep into the section (0-1) before the jump can trigger.
    pub trigger_progress: f32,
    /// Progress must beat the load-time baseline by this much.
    pub forward_margin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_height: default_viewport_height(),
            zoom: default_zoom(),
            scroll_move: default_scroll_move(),
            jump: default_jump(),
        }
    }
}

fn default_viewport_height() -> f32 {
    800.0
}

fn default_zoom() -> ZoomTuning {
    ZoomTuning { scale: 2.0 }
}

fn default_scroll_move() -> MoveTuning {
    MoveTuning { shift_x: 100.0 }
}

fn default_jump() -> JumpTuning {
    JumpTuning {
        start_scale: 0.55,
        peak_scale: 2.60,
        settle_scale: 2.30,
        shift_x: 0.0,
        shift_y: -60.0,
        jump_time: 0.16,
        settle_time: 0.14,
        trigger_progress: 0.35,
        forward_margin: 0.02,
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_path = config_dir.join("scrollkit").join("config.toml");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_dir = config_dir.join("scrollkit");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(())
    }
}
