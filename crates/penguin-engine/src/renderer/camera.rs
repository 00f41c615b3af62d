// renderer/camera.rs
//
// Letterbox camera: maps a fixed logical resolution onto any screen.

use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

use crate::api::game::GameConfig;

/// How the logical resolution is mapped onto the physical screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StretchMode {
    /// No stretching; bars may appear on every side.
    Center,
    /// Scale to fit the screen; bars top/bottom or left/right.
    #[default]
    Fit,
    /// Scale to cover the screen; no bars, edges may be cropped.
    Fill,
}

/// Aspect-preserving orthographic camera for 2D.
/// Computes projection size and letterbox bars; drawing is up to the host.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub stretch: StretchMode,
    /// Logical game resolution in pixels.
    pub resolution: Vec2,
    /// How many pixels make one world unit.
    pub pixels_to_units: f32,
    pub zoom: f32,
    /// Whether letterbox bars are wanted at all.
    pub bars: bool,
    /// Full-screen fade overlay alpha, usually driven by a fade tween.
    pub fade_alpha: f32,
    /// Camera center position in world space.
    pub center: Vec2,
    /// Half of the visible height in world units.
    orthographic_size: f32,
    /// Screen width / height from the last refresh.
    aspect: f32,
}

impl Camera2D {
    pub fn new(resolution: Vec2) -> Self {
        let mut camera = Self {
            stretch: StretchMode::Fit,
            resolution,
            pixels_to_units: 100.0,
            zoom: 1.0,
            bars: true,
            fade_alpha: 0.0,
            center: Vec2::ZERO,
            orthographic_size: 0.0,
            aspect: 1.0,
        };
        camera.refresh(resolution.x, resolution.y);
        camera
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut camera = Self::new(config.resolution);
        camera.stretch = config.stretch;
        camera.pixels_to_units = config.pixels_to_units;
        camera.zoom = config.zoom;
        camera.bars = config.bars;
        camera.refresh(config.resolution.x, config.resolution.y);
        camera
    }

    /// Recompute the projection size for the current screen.
    /// Call on every resize (or every frame). Returns the orthographic size.
    pub fn refresh(&mut self, screen_width: f32, screen_height: f32) -> f32 {
        let base = 0.5 / self.pixels_to_units / self.zoom * screen_height;
        let ratio_x = self.resolution.x / screen_width;
        let ratio_y = self.resolution.y / screen_height;

        self.orthographic_size = match self.stretch {
            StretchMode::Fit => base * ratio_x.max(ratio_y),
            StretchMode::Fill => base * ratio_x.min(ratio_y),
            StretchMode::Center => base,
        };
        self.aspect = screen_width / screen_height;
        self.orthographic_size
    }

    /// Half of the visible height in world units, as of the last refresh.
    pub fn orthographic_size(&self) -> f32 {
        self.orthographic_size
    }

    /// Visible area in world units.
    pub fn visible_size(&self) -> Vec2 {
        let height = self.orthographic_size * 2.0;
        Vec2::new(height * self.aspect, height)
    }

    /// Letterbox bar thickness per axis, as a fraction of the screen size.
    /// Each bar of that thickness sits on both sides of its axis.
    pub fn bar_thickness(&self, screen_width: f32, screen_height: f32) -> Vec2 {
        if !self.bars {
            return Vec2::ZERO;
        }

        let thickness = match self.stretch {
            StretchMode::Center => Vec2::new(
                0.5 * (screen_width - self.resolution.x) / screen_width,
                0.5 * (screen_height - self.resolution.y) / screen_height,
            ),
            StretchMode::Fit => {
                let scale = self.resolution / Vec2::new(screen_width, screen_height);
                if scale.x > scale.y {
                    Vec2::new(
                        0.0,
                        0.5 * (screen_height - self.resolution.y / scale.x) / screen_height,
                    )
                } else {
                    Vec2::new(
                        0.5 * (screen_width - self.resolution.x / scale.y) / screen_width,
                        0.0,
                    )
                }
            }
            StretchMode::Fill => Vec2::ZERO,
        };

        thickness.max(Vec2::ZERO)
    }

    /// Build an orthographic projection matrix.
    /// Origin at center, Y-up, Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        let half = self.visible_size() / 2.0;
        let min = self.center - half;
        let max = self.center + half;
        Mat4::orthographic_rh(min.x, max.x, min.y, max.y, 0.0, 1.0)
    }
}
