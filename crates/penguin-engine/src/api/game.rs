use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::score::ScoreBoard;
use crate::core::time::FrameClock;
use crate::error::ConfigError;
use crate::renderer::camera::{Camera2D, StretchMode};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical resolution in pixels (default: 1280x720).
    pub resolution: Vec2,
    /// Pixels per world unit (default: 100).
    pub pixels_to_units: f32,
    /// Camera zoom factor (default: 1).
    pub zoom: f32,
    /// How the resolution maps onto the screen (default: fit).
    pub stretch: StretchMode,
    /// Draw letterbox bars (default: true).
    pub bars: bool,
    /// Weight of the previous smoothed delta, in [0, 0.99] (default: 0.5).
    pub clock_smoothing: f32,
    /// Largest frame delta the clock passes on, in seconds (default: 0.1).
    pub max_dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            resolution: Vec2::new(1280.0, 720.0),
            pixels_to_units: 100.0,
            zoom: 1.0,
            stretch: StretchMode::Fit,
            bars: true,
            clock_smoothing: 0.5,
            max_dt: 0.1,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Per-run game state, created explicitly by the host and passed around
/// instead of living in globals.
#[derive(Debug)]
pub struct GameContext {
    pub config: GameConfig,
    pub score: ScoreBoard,
    pub clock: FrameClock,
    pub camera: Camera2D,
}

impl GameContext {
    pub fn new(config: GameConfig) -> Self {
        Self {
            score: ScoreBoard::new(),
            clock: FrameClock::new(config.clock_smoothing, config.max_dt),
            camera: Camera2D::from_config(&config),
            config,
        }
    }

    /// Start a fresh run: score and clock back to zero.
    pub fn begin_run(&mut self) {
        log::debug!("run started");
        self.score.reset();
        self.clock.reset();
    }

    /// Feed one raw frame delta; returns the smoothed delta to drive
    /// tweens and sequences with.
    pub fn tick(&mut self, frame_dt: f32) -> f32 {
        self.clock.tick(frame_dt)
    }

    /// Tear down the context and hand back the final score.
    pub fn end_run(self) -> ScoreBoard {
        log::debug!("run ended with score {}", self.score.total);
        self.score
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config = GameConfig::from_json(r#"{ "zoom": 2.0, "stretch": "fill" }"#).unwrap();
        assert_eq!(config.zoom, 2.0);
        assert_eq!(config.stretch, StretchMode::Fill);
        assert_eq!(config.resolution, Vec2::new(1280.0, 720.0));
        assert!(config.bars);
    }

    #[test]
    fn config_parses_resolution_array() {
        let config = GameConfig::from_json(r#"{ "resolution": [640, 360] }"#).unwrap();
        assert_eq!(config.resolution, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn bad_config_json_is_parse_error() {
        let err = GameConfig::from_json(r#"{ "zoom": "big" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn context_builds_camera_from_config() {
        let config = GameConfig {
            resolution: Vec2::new(640.0, 360.0),
            stretch: StretchMode::Center,
            ..GameConfig::default()
        };
        let ctx = GameContext::new(config);
        assert_eq!(ctx.camera.stretch, StretchMode::Center);
        assert_eq!(ctx.camera.resolution, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn begin_run_zeroes_score_and_clock() {
        let mut ctx = GameContext::default();
        ctx.score.add(120);
        ctx.tick(0.016);
        assert!(ctx.clock.elapsed() > 0.0);

        ctx.begin_run();
        assert_eq!(ctx.score.total, 0);
        assert_eq!(ctx.clock.elapsed(), 0.0);
    }

    #[test]
    fn end_run_hands_back_score() {
        let mut ctx = GameContext::default();
        ctx.begin_run();
        ctx.score.add(7);
        ctx.score.add(35);
        let board = ctx.end_run();
        assert_eq!(board.total, 42);
        assert_eq!(board.display(), "0000000042");
    }
}
